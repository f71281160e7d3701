//! HTTP client tests against a mocked provider

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use weather_hub::api::{ApiError, ClientConfig, OpenWeatherClient};
use weather_hub::config::Settings;
use weather_hub::effect::Services;
use weather_hub::presentation::daily_sample;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenWeatherClient {
    let config = ClientConfig::new("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(2));
    OpenWeatherClient::new(config).expect("client builds")
}

fn forecast_body(n: i64) -> serde_json::Value {
    let list: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "dt": 1_704_110_400 + i * 10_800,
                "main": {"temp": i as f64 + 0.3, "humidity": 80},
                "weather": [{"id": 800, "main": "Clear", "description": format!("slot {i}")}]
            })
        })
        .collect();
    json!({"cod": "200", "cnt": n, "list": list})
}

#[tokio::test]
async fn current_weather_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Paris",
            "main": {"temp": 18.4, "temp_min": 16.1, "temp_max": 20.0, "humidity": 63, "pressure": 1012},
            "clouds": {"all": 20},
            "wind": {"speed": 3.6, "deg": 200},
            "cod": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let weather = client_for(&server).current("Paris").await.expect("lookup succeeds");

    assert_eq!(weather.city, "Paris");
    assert_eq!(weather.temperature, 18.4);
    assert_eq!(weather.humidity, 63);
    assert_eq!(weather.cloud_cover, 20);
    assert_eq!(weather.wind_speed, 3.6);
}

#[tokio::test]
async fn current_weather_unknown_city() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current("Nowhereistan")
        .await
        .expect_err("lookup fails");

    assert!(matches!(err, ApiError::NotFound(ref city) if city == "Nowhereistan"));
}

#[tokio::test]
async fn current_weather_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).current("Paris").await.expect_err("lookup fails");

    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn current_weather_missing_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Paris"})))
        .mount(&server)
        .await;

    let err = client_for(&server).current("Paris").await.expect_err("lookup fails");

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn forecast_preserves_order_and_samples_daily() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server).forecast("Paris").await.expect("forecast loads");

    assert_eq!(entries.len(), 40);
    assert!(entries.windows(2).all(|w| w[0].timestamp < w[1].timestamp));

    let picked: Vec<_> = daily_sample(&entries)
        .into_iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(picked, vec!["slot 0", "slot 8", "slot 16", "slot 24", "slot 32"]);
}

#[tokio::test]
async fn forecast_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).forecast("Paris").await;

    assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
}

#[tokio::test]
async fn transport_error_does_not_expose_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = ClientConfig::new("hush-9f3a")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = OpenWeatherClient::new(config).expect("client builds");

    let err = client.current("Paris").await.expect_err("request times out");

    assert!(matches!(err, ApiError::Request(_)));
    assert!(!err.to_string().contains("hush-9f3a"), "{err}");
    assert!(!format!("{err:?}").contains("hush-9f3a"), "{err:?}");
}

#[tokio::test]
async fn blank_city_is_not_found_without_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).current("   ").await.expect_err("blank city");

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn services_client_uses_settings_connection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("appid", "from-settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(8)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClientConfig::new("from-settings").with_base_url(server.uri());
    let settings = Settings::new(client, Some("unused-logs".into()));
    let services = Services::new(settings).expect("services build");

    let entries = services.client.forecast("Lima").await.expect("forecast loads");

    assert_eq!(entries.len(), 8);
}
