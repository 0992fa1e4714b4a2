//! WeatherClient against a mock weather service.

use std::time::Duration;

use weather::{WeatherClient, WeatherConfig, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::new(WeatherConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

async fn mount(server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", city))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_temperature_success() {
    let server = MockServer::start().await;
    mount(
        &server,
        "Moscow",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Moscow",
            "main": { "temp": 21.4, "pressure": 1012 }
        })),
    )
    .await;

    let temp = client_for(&server).fetch_temperature("Moscow").await.unwrap();

    assert_eq!(temp, 21.4);
}

#[tokio::test]
async fn test_check_existing_accepts_known_city() {
    let server = MockServer::start().await;
    mount(
        &server,
        "Kazan",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "main": { "temp": 5.0 } })),
    )
    .await;

    assert!(client_for(&server).check_existing("Kazan").await.is_ok());
}

#[tokio::test]
async fn test_check_existing_rejects_unknown_city() {
    let server = MockServer::start().await;
    mount(
        &server,
        "Atlantis",
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let err = client_for(&server).check_existing("Atlantis").await.unwrap_err();

    assert!(matches!(err, WeatherError::CityNotFound));
    assert_eq!(err.to_string(), "Parameter city must be an existing city");
}

#[tokio::test]
async fn test_other_status_is_unknown_error() {
    let server = MockServer::start().await;
    mount(&server, "Moscow", ResponseTemplate::new(500)).await;

    let err = client_for(&server).check_existing("Moscow").await.unwrap_err();

    assert!(matches!(err, WeatherError::UnexpectedStatus(status) if status.as_u16() == 500));
    assert_eq!(err.to_string(), "An unknown error occurred");
}

#[tokio::test]
async fn test_unreachable_service_is_no_connectivity() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = WeatherClient::new(WeatherConfig {
        base_url: uri,
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = client.check_existing("Moscow").await.unwrap_err();

    assert!(matches!(err, WeatherError::NoConnectivity(_)));
    assert_eq!(err.to_string(), "No internet connection");
}

#[tokio::test]
async fn test_schema_change_yields_no_temperature() {
    let server = MockServer::start().await;
    mount(
        &server,
        "Moscow",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "current": { "t": 3 } })),
    )
    .await;

    let client = client_for(&server);

    assert!(matches!(
        client.fetch_temperature("Moscow").await,
        Err(WeatherError::MalformedResponse(_))
    ));
    assert_eq!(client.current_temperature("Moscow").await, None);
}
