use faceit_export::{
    AppError, Config, ExportSummary, export_championship,
    constants::env_vars,
    data_fetcher::api::create_http_client_with_timeout,
    report::COLUMN_COUNT,
    run_export,
    testing_utils::TestDataBuilder,
};
use serde_json::{Value, json};
use serial_test::serial;
use std::path::Path;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param, query_param_is_missing},
};

const CHAMPIONSHIP_ID: &str = "3f2e1d0c-aaaa-bbbb-cccc-1234567890ab";

fn create_mock_config(mock_server: &MockServer) -> Config {
    Config {
        api_base_url: format!("{}/", mock_server.uri()),
        api_key: "integration-key".to_string(),
        ..Config::default()
    }
}

async fn mount_championship(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/championships/{CHAMPIONSHIP_ID}")))
        .and(header("Authorization", "Bearer integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::championship(
            "Community Cup",
            1_705_343_400_000,
            "EU",
            json!(1000),
        )))
        .expect(1)
        .mount(mock_server)
        .await;
}

/// Serves `items` in pages of `limit` at the matches endpoint
async fn mount_match_pages(mock_server: &MockServer, items: &[Value], limit: usize) {
    let matches_path = format!("/championships/{CHAMPIONSHIP_ID}/matches");
    let pages: Vec<&[Value]> = items.chunks(limit).collect();

    for (index, page) in pages.iter().enumerate() {
        let mock = Mock::given(method("GET"))
            .and(path(matches_path.clone()))
            .and(query_param("limit", limit.to_string()));
        let mock = if index == 0 {
            mock.and(query_param_is_missing("offset"))
        } else {
            mock.and(query_param("offset", (index * limit).to_string()))
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::items_page(page)))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    // Trailing empty page requested after a full last page
    if items.len() % limit == 0 {
        let mock = Mock::given(method("GET"))
            .and(path(matches_path.clone()))
            .and(query_param("limit", limit.to_string()));
        let mock = if items.is_empty() {
            mock.and(query_param_is_missing("offset"))
        } else {
            mock.and(query_param("offset", items.len().to_string()))
        };
        mock.respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::items_page(&[])))
            .expect(1)
            .mount(mock_server)
            .await;
    }
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

fn column(header: &[String], name: &str) -> usize {
    header.iter().position(|c| c == name).unwrap()
}

#[tokio::test]
async fn test_export_end_to_end_with_pagination() {
    let mock_server = MockServer::start().await;
    mount_championship(&mock_server).await;

    let mut items: Vec<Value> = (0..23)
        .map(|i| TestDataBuilder::finished_match(&format!("m{i}"), "faction1", 5, 5))
        .collect();
    items[4] = TestDataBuilder::bye_match("m4", 2);
    items[9] = TestDataBuilder::finished_match("m9", "faction2", 5, 3);
    items[17] = TestDataBuilder::undecided_match("m17");
    mount_match_pages(&mock_server, &items, 10).await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join(format!("{CHAMPIONSHIP_ID}.csv"));
    let client = create_http_client_with_timeout("integration-key", 5).unwrap();
    let config = create_mock_config(&mock_server);

    let summary = export_championship(&client, &config, CHAMPIONSHIP_ID, 10, &output)
        .await
        .unwrap();

    assert_eq!(
        summary,
        ExportSummary {
            output_path: output.clone(),
            matches_fetched: 23,
            rows_written: 22,
            matches_skipped: 1,
        }
    );
    mock_server.verify().await;

    let (header, rows) = read_rows(&output);
    assert_eq!(header.len(), COLUMN_COUNT);
    assert_eq!(rows.len(), 22);

    // Every row carries identical tournament metadata
    let metadata = &rows[0][..4];
    assert_eq!(metadata[0], "Community Cup");
    assert_eq!(metadata[2], "EU");
    assert_eq!(metadata[3], "1000");
    assert!(rows.iter().all(|row| &row[..4] == metadata));
    assert!(rows.iter().all(|row| row.len() == COLUMN_COUNT));

    // Bye match keeps its position (fifth row) and shape
    let bye = &rows[4];
    assert_eq!(bye[column(&header, "w1")], "w1");
    assert_eq!(bye[column(&header, "w2")], "w2");
    assert_eq!(bye[column(&header, "w3")], "");
    assert_eq!(bye[column(&header, "l1")], "BYE");
    for i in 2..=9 {
        assert_eq!(bye[column(&header, &format!("l{i}"))], "");
    }

    // Five winners and three losers
    let uneven = &rows[9];
    for i in 1..=5 {
        assert_eq!(uneven[column(&header, &format!("w{i}"))], format!("w{i}"));
    }
    for i in 6..=9 {
        assert_eq!(uneven[column(&header, &format!("w{i}"))], "");
    }
    for i in 1..=3 {
        assert_eq!(uneven[column(&header, &format!("l{i}"))], format!("l{i}"));
    }
    for i in 4..=9 {
        assert_eq!(uneven[column(&header, &format!("l{i}"))], "");
    }
}

#[tokio::test]
async fn test_export_with_exact_multiple_of_page_size() {
    let mock_server = MockServer::start().await;
    mount_championship(&mock_server).await;

    let items: Vec<Value> = (0..20)
        .map(|i| TestDataBuilder::finished_match(&format!("m{i}"), "faction2", 5, 5))
        .collect();
    mount_match_pages(&mock_server, &items, 10).await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("report.csv");
    let client = create_http_client_with_timeout("integration-key", 5).unwrap();
    let config = create_mock_config(&mock_server);

    let summary = export_championship(&client, &config, CHAMPIONSHIP_ID, 10, &output)
        .await
        .unwrap();

    assert_eq!(summary.rows_written, 20);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_export_with_no_matches_writes_header_only() {
    let mock_server = MockServer::start().await;
    mount_championship(&mock_server).await;
    mount_match_pages(&mock_server, &[], 100).await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("empty.csv");
    let client = create_http_client_with_timeout("integration-key", 5).unwrap();
    let config = create_mock_config(&mock_server);

    let summary = export_championship(&client, &config, CHAMPIONSHIP_ID, 100, &output)
        .await
        .unwrap();

    assert_eq!(summary.rows_written, 0);
    let (header, rows) = read_rows(&output);
    assert_eq!(header.len(), COLUMN_COUNT);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_fatal_fetch_failure_writes_no_file() {
    let mock_server = MockServer::start().await;
    mount_championship(&mock_server).await;

    let items: Vec<Value> = (0..10)
        .map(|i| TestDataBuilder::finished_match(&format!("m{i}"), "faction1", 5, 5))
        .collect();
    Mock::given(method("GET"))
        .and(path(format!("/championships/{CHAMPIONSHIP_ID}/matches")))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(TestDataBuilder::items_page(&items)))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/championships/{CHAMPIONSHIP_ID}/matches")))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("never.csv");
    let client = create_http_client_with_timeout("integration-key", 5).unwrap();
    let config = create_mock_config(&mock_server);

    let result = export_championship(&client, &config, CHAMPIONSHIP_ID, 10, &output).await;

    assert!(matches!(result, Err(AppError::ApiServerError { status: 502, .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unauthorized_key_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("never.csv");
    let client = create_http_client_with_timeout("wrong-key", 5).unwrap();
    let config = create_mock_config(&mock_server);

    let result = export_championship(&client, &config, CHAMPIONSHIP_ID, 100, &output).await;

    assert!(matches!(result, Err(AppError::ApiUnauthorized { status: 401, .. })));
    assert!(!output.exists());
}

#[tokio::test]
#[serial]
async fn test_run_export_uses_configured_api_key() {
    let mock_server = MockServer::start().await;
    mount_championship(&mock_server).await;
    mount_match_pages(
        &mock_server,
        &[TestDataBuilder::bye_match("only", 1)],
        100,
    )
    .await;

    unsafe {
        std::env::remove_var(env_vars::LEGACY_API_KEY);
        std::env::set_var(env_vars::API_KEY, "integration-key");
        std::env::set_var(env_vars::API_BASE_URL, mock_server.uri());
    }

    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config = Config::load_with_path(&config_path.to_string_lossy())
        .await
        .unwrap();
    let output = temp_dir.path().join("run.csv");

    let summary = run_export(&config, CHAMPIONSHIP_ID, 100, &output).await.unwrap();

    unsafe {
        std::env::remove_var(env_vars::API_KEY);
        std::env::remove_var(env_vars::API_BASE_URL);
    }

    assert_eq!(summary.rows_written, 1);
    let (_, rows) = read_rows(&output);
    assert_eq!(rows[0][4], "w1");
    assert_eq!(rows[0][13], "BYE");
}
