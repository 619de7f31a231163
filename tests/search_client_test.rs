use birdnote::{meets_query_threshold, Error, Result, TaxonomyClient, MIN_QUERY_LEN};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROBIN_BODY: &str =
    r#"[{"name":"American Robin - Turdus migratorius","code":"amerob"}]"#;

#[tokio::test]
async fn test_search_parses_results() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ref/taxon/find"))
        .and(query_param("locale", "en_US"))
        .and(query_param("cat", "species"))
        .and(query_param("key", "testkey"))
        .and(query_param("q", "robin"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ROBIN_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = TaxonomyClient::with_base_url("testkey", &server.uri());
    let results = client.search("robin").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "American Robin - Turdus migratorius");
    assert_eq!(results[0].code, "amerob");

    Ok(())
}

/// The real API returns more fields than we read; extras are ignored
#[tokio::test]
async fn test_search_ignores_extra_fields() -> Result<()> {
    let body = r#"[{"name":"Blue Jay - Cyanocitta cristata","code":"blujay","extinct":false,"locale":"en_US"}]"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ref/taxon/find"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = TaxonomyClient::with_base_url("testkey", &server.uri());
    let results = client.search("blue jay").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].code, "blujay");

    Ok(())
}

#[tokio::test]
async fn test_search_empty_array() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ref/taxon/find"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = TaxonomyClient::with_base_url("testkey", &server.uri());
    let results = client.search("zzz").await?;
    assert!(results.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ref/taxon/find"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = TaxonomyClient::with_base_url("testkey", &server.uri());
    let err = client.search("robin").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/ref/taxon/find"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"error":"nope"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = TaxonomyClient::with_base_url("testkey", &server.uri());
    let err = client.search("robin").await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on this port
    let client = TaxonomyClient::with_base_url("testkey", "http://127.0.0.1:1");
    let err = client.search("robin").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[test]
fn test_query_threshold() {
    assert_eq!(MIN_QUERY_LEN, 3);
    assert!(!meets_query_threshold(""));
    assert!(!meets_query_threshold("ro"));
    assert!(meets_query_threshold("rob"));
    assert!(meets_query_threshold("robin"));
    // Characters, not bytes
    assert!(!meets_query_threshold("鳥鳥"));
    assert!(meets_query_threshold("鳥鳥鳥"));
}
