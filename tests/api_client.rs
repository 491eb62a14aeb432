use flagx_rs::{ApiError, Client};

#[test]
fn fetch_all_countries_parses_success_body() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
              {"name":"Canada","flag":"https://x/ca.png","population":38000000,"region":"Americas"},
              {"name":"Peru","flag":"https://x/pe.png"}
            ]"#,
        )
        .create();

    let client = Client::new(server.url());
    let countries = client.fetch_all_countries().unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name, "Canada");
    assert_eq!(countries[0].population, Some(38_000_000));
    assert_eq!(countries[1].population, None);
}

#[test]
fn list_non_success_status_is_an_http_error() {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/countries").with_status(500).create();

    let client = Client::new(server.url());
    match client.fetch_all_countries() {
        Err(ApiError::Http { status }) => assert_eq!(status, 500),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[test]
fn list_garbage_body_is_a_decode_error() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries")
        .with_status(200)
        .with_body("definitely not json")
        .create();

    let client = Client::new(server.url());
    assert!(matches!(
        client.fetch_all_countries(),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn detail_404_surfaces_as_not_found_with_the_name() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries/Atlantis")
        .with_status(404)
        .create();

    let client = Client::new(server.url());
    let err = client.fetch_country_by_name("Atlantis").unwrap_err();
    match &err {
        ApiError::NotFound { name } => assert_eq!(name, "Atlantis"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    // The message the detail view renders must say "not found".
    assert!(err.to_string().to_lowercase().contains("not found"));
}

#[test]
fn detail_other_failures_keep_the_status() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries/Canada")
        .with_status(502)
        .create();

    let client = Client::new(server.url());
    match client.fetch_country_by_name("Canada") {
        Err(ApiError::Http { status }) => assert_eq!(status, 502),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[test]
fn detail_lookup_percent_encodes_the_name() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/countries/Costa%20Rica")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"Costa Rica","flag":"https://x/cr.png","population":5200000}"#)
        .create();

    let client = Client::new(server.url());
    let details = client.fetch_country_by_name("Costa Rica").unwrap();
    assert_eq!(details.name, "Costa Rica");
}

#[test]
fn health_success_decodes_status_and_service() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"healthy","service":"country-api"}"#)
        .create();

    let client = Client::new(server.url());
    let health = client.check_health().unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "country-api");
}

#[test]
fn health_failure_folds_into_health_check_error() {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/health").with_status(503).create();

    let client = Client::new(server.url());
    match client.check_health() {
        Err(ApiError::HealthCheck { reason }) => assert!(reason.contains("503")),
        other => panic!("expected HealthCheck error, got {other:?}"),
    }
}

#[test]
fn base_url_trailing_slash_is_tolerated() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy","service":"country-api"}"#)
        .create();

    let client = Client::new(format!("{}/", server.url()));
    assert!(client.check_health().is_ok());
}
