//! Integration tests against a live mock API
//!
//! Starts an axum server on an ephemeral port serving canned responses,
//! then exercises the fetch layer and the station over real HTTP.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use localweather::{fetch_json_at_url, Config, Error, HttpManager, Station};
use localweather::weather::WeatherData;

/// Canned OpenWeatherMap current-weather payload
fn weather_payload() -> Value {
    json!({
        "coord": { "lat": 33.92, "lon": -84.38 },
        "weather": [{ "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03n" }],
        "main": { "temp": 21.56, "humidity": 62, "pressure": 1012 },
        "sys": { "country": "US" },
        "name": "Atlanta",
        "cod": 200
    })
}

/// `GET /data/2.5/weather` — requires lat and lon, like the real API
async fn weather_handler(
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if !params.contains_key("lat") || !params.contains_key("lon") {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(Json(weather_payload()))
}

/// Start the mock server on an ephemeral port
async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/", get(|| async { Json(json!({"status": "ok"})) }))
        .route("/temp", get(|| async { Json(json!({"temp": 72})) }))
        .route("/plain", get(|| async { "not json" }))
        .route("/data/2.5/weather", get(weather_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });

    addr
}

#[tokio::test]
async fn test_fetch_json_at_url_decodes_object() {
    let addr = spawn_server().await;

    let value = fetch_json_at_url(&format!("http://{addr}/temp")).await.unwrap();
    assert_eq!(value, json!({"temp": 72}));
}

#[tokio::test]
async fn test_manager_path_matches_direct_url_fetch() {
    let addr = spawn_server().await;

    let manager = HttpManager::from_str(&format!("http://{addr}/")).unwrap();
    let via_manager = manager.fetch_json(Some("temp")).await.unwrap();
    let via_url = fetch_json_at_url(&format!("http://{addr}/temp")).await.unwrap();

    assert_eq!(via_manager, via_url);
}

#[tokio::test]
async fn test_manager_fetches_base_url_when_path_absent() {
    let addr = spawn_server().await;

    let manager = HttpManager::from_str(&format!("http://{addr}")).unwrap();
    let value = manager.fetch_json(None).await.unwrap();

    assert_eq!(value, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let addr = spawn_server().await;

    let err = fetch_json_at_url(&format!("http://{addr}/plain"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_unknown_route_is_status_error() {
    let addr = spawn_server().await;

    let err = fetch_json_at_url(&format!("http://{addr}/nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_missing_query_params_surface_as_status_error() {
    let addr = spawn_server().await;

    let manager = HttpManager::from_str(&format!("http://{addr}/data/2.5")).unwrap();
    let err = manager.fetch_json(Some("weather")).await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 400, .. }));
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    // Bind then drop to get a port nothing is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetch_json_at_url(&format!("http://{addr}/temp"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_weather_endpoint_end_to_end() {
    let addr = spawn_server().await;

    let manager = HttpManager::from_str(&format!("http://{addr}/data/2.5")).unwrap();
    let value = manager
        .fetch_json(Some("weather?lat=33.92&lon=-84.38&units=metric"))
        .await
        .unwrap();

    let data = WeatherData::from_json(&value).unwrap();
    assert_eq!(data.name, "Atlanta");
    assert_eq!(data.country_code, "US");
    assert_eq!(data.temperature_celsius, 22);
}

#[tokio::test]
async fn test_station_fetch_publishes_snapshot() {
    let addr = spawn_server().await;

    let config = Config {
        api_base_url: format!("http://{addr}/data/2.5"),
        api_key: Some("deadbeef".to_string()),
        ..Config::default()
    };
    let station = Station::new(config).unwrap();
    let rx = station.subscribe();
    assert!(rx.borrow().is_none());

    let data = station.fetch_current(33.92, -84.38).await.unwrap();
    assert_eq!(data.humidity, 62);

    let snapshot = rx.borrow().clone().expect("snapshot published");
    assert_eq!(snapshot.data, data);
}
