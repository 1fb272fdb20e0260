use std::fs;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const MARKETS_RESPONSE: &str = r#"[
        {
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "btc",
            "image": "https://assets.example/bitcoin.png",
            "current_price": 5212345.5,
            "market_cap": 102000000000000.0,
            "price_change_percentage_1h_in_currency": 0.12,
            "price_change_percentage_24h_in_currency": -2.3,
            "price_change_percentage_7d_in_currency": 5.6,
            "last_updated": "2026-08-29T12:00:00.000Z"
        },
        {
            "id": "ethereum",
            "name": "Ethereum",
            "symbol": "eth",
            "image": "https://assets.example/ethereum.png",
            "current_price": 280000.25,
            "market_cap": 34000000000000.0,
            "price_change_percentage_1h_in_currency": null,
            "price_change_percentage_24h_in_currency": 1.1,
            "price_change_percentage_7d_in_currency": null,
            "last_updated": null
        }
    ]"#;

    pub const DETAIL_RESPONSE: &str = r#"{
        "id": "bitcoin",
        "name": "Bitcoin",
        "symbol": "btc",
        "description": { "en": "Bitcoin is a currency. It is decentralized." },
        "image": { "large": "https://assets.example/bitcoin-large.png" },
        "market_cap_rank": 1,
        "links": { "homepage": ["https://bitcoin.org", ""] },
        "market_data": {
            "current_price": { "ngn": 75000000.0, "usd": 50000.0 },
            "market_cap": { "ngn": 1500000000000.0, "usd": 980000000000.0 },
            "high_24h": { "ngn": 76000000.0, "usd": 50700.0 },
            "low_24h": { "ngn": 74000000.0, "usd": 49100.0 },
            "total_volume": { "ngn": 42000000000.0, "usd": 28000000.0 },
            "circulating_supply": 19500000.0,
            "total_supply": null,
            "market_cap_change_percentage_24h": -0.85
        }
    }"#;

    pub async fn create_markets_mock_server(status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/coins/markets"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub async fn create_detail_mock_server(id: &str, status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/api/v3/coins/{id}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

fn write_config(base_url: &str) -> tempfile::NamedTempFile {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let config_content = format!(
        r#"
provider:
  base_url: {base_url}
list_currency: "inr"
detail_currency: "ngn"
page_size: 10
"#
    );
    fs::write(config_file.path(), &config_content).expect("Failed to write config file");
    config_file
}

#[test_log::test(tokio::test)]
async fn test_full_list_flow_with_mock() {
    let mock_server =
        test_utils::create_markets_mock_server(200, test_utils::MARKETS_RESPONSE).await;
    let config_file = write_config(&mock_server.uri());

    let result = coinlens::run_command(
        coinlens::AppCommand::List {
            currency: None,
            query: None,
            page: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "List flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_list_flow_with_query_and_page() {
    let mock_server =
        test_utils::create_markets_mock_server(200, test_utils::MARKETS_RESPONSE).await;
    let config_file = write_config(&mock_server.uri());

    let result = coinlens::run_command(
        coinlens::AppCommand::List {
            currency: Some("usd".to_string()),
            query: Some("bit".to_string()),
            page: Some(1),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "List flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_list_flow_surfaces_fetch_failure() {
    let mock_server = test_utils::create_markets_mock_server(500, "").await;
    let config_file = write_config(&mock_server.uri());

    let result = coinlens::run_command(
        coinlens::AppCommand::List {
            currency: None,
            query: None,
            page: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("List flow should fail on HTTP 500");
    assert!(err.to_string().contains("Failed to fetch data"));
}

#[test_log::test(tokio::test)]
async fn test_full_detail_flow_with_mock() {
    let mock_server =
        test_utils::create_detail_mock_server("bitcoin", 200, test_utils::DETAIL_RESPONSE).await;
    let config_file = write_config(&mock_server.uri());

    let result = coinlens::run_command(
        coinlens::AppCommand::Show {
            id: "bitcoin".to_string(),
            currency: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    assert!(result.is_ok(), "Detail flow failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_detail_flow_unknown_asset() {
    let mock_server = test_utils::create_detail_mock_server("unknowncoin", 404, "").await;
    let config_file = write_config(&mock_server.uri());

    let result = coinlens::run_command(
        coinlens::AppCommand::Show {
            id: "unknowncoin".to_string(),
            currency: None,
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("Detail flow should fail on 404");
    assert!(err.to_string().contains("Failed to fetch data"));
}
