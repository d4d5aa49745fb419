//! Integration tests for the simulation API client.
//!
//! Tests run [`ApiClient`] against a `wiremock` server speaking the
//! backend's wire format, covering each endpoint's happy path plus the
//! failure taxonomy: bad statuses, malformed bodies, and refused
//! connections.

#![allow(clippy::unwrap_used, clippy::panic)]

use signalbox_client::{ApiClient, ClientError};
use signalbox_core::backend::SimulationBackend;
use signalbox_types::{RunMode, TrainStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A two-train snapshot in the backend's camelCase wire shape.
fn snapshot_body(simulation_time_minutes: u64) -> serde_json::Value {
    serde_json::json!({
        "simulationTimeMinutes": simulation_time_minutes,
        "stations": [
            { "id": "STN-A", "name": "Avonlea", "positionKm": 0.0 },
            { "id": "STN-B", "name": "Bexford", "positionKm": 100.0 }
        ],
        "trains": [
            {
                "id": "EXP-1",
                "name": "Coastal Express",
                "priority": 1,
                "speedKmph": 160.0,
                "currentPositionKm": 42.5,
                "status": "RUNNING",
                "schedule": [
                    { "stationId": "STN-A", "scheduledArrival": "09:00" },
                    { "stationId": "STN-B", "scheduledArrival": "10:00" }
                ]
            },
            {
                "id": "LOC-2",
                "name": "Valley Local",
                "priority": 3,
                "speedKmph": 80.0,
                "currentPositionKm": 10.0,
                "status": "ARRIVED",
                "schedule": []
            }
        ]
    })
}

#[tokio::test]
async fn fetch_state_decodes_the_wire_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(125)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let snapshot = client.fetch_state().await.unwrap();

    assert_eq!(snapshot.simulation_time_minutes, 125);
    assert_eq!(snapshot.stations.len(), 2);
    assert_eq!(snapshot.trains.len(), 2);

    let express = snapshot.trains.first().unwrap();
    assert_eq!(express.id, "EXP-1");
    assert_eq!(express.status, TrainStatus::Running);
    assert_eq!(express.schedule.len(), 2);
}

#[tokio::test]
async fn fetch_state_rejects_a_snapshot_missing_trains() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "simulationTimeMinutes": 10,
            "stations": []
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let err = client.fetch_state().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn request_plan_returns_the_plan_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/optimize"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("1. HOLD Valley Local at Avonlea for 10 minutes."),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let plan = client.request_plan().await.unwrap();

    assert!(plan.contains("HOLD Valley Local"));
}

#[tokio::test]
async fn request_plan_surfaces_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/optimize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("optimizer unavailable"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let err = client.request_plan().await.unwrap_err();

    match err {
        ClientError::Status(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("optimizer unavailable"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn reset_succeeds_on_any_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    client.reset().await.unwrap();
}

#[tokio::test]
async fn reset_failure_is_reported_not_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend restarting"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let err = client.reset().await.unwrap_err();

    assert!(matches!(err, ClientError::Status(_)));
}

#[tokio::test]
async fn baseline_tick_posts_to_the_normal_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tick/normal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let snapshot = client.tick(RunMode::Baseline).await.unwrap();

    assert_eq!(snapshot.simulation_time_minutes, 5);
}

#[tokio::test]
async fn optimized_tick_posts_to_the_optimized_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tick/optimized"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(5)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let snapshot = client.tick(RunMode::Optimized).await.unwrap();

    assert_eq!(snapshot.simulation_time_minutes, 5);
}

#[tokio::test]
async fn tick_with_a_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tick/normal"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let err = client.tick(RunMode::Baseline).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn connection_refused_is_a_request_error() {
    // Nothing listens here.
    let client = ApiClient::new("http://127.0.0.1:59999/api/simulation");
    let err = client.fetch_state().await.unwrap_err();

    assert!(matches!(err, ClientError::Request(_)));
}

#[tokio::test]
async fn unknown_train_status_decodes_without_failing() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "simulationTimeMinutes": 10,
        "stations": [],
        "trains": [
            {
                "id": "FRT-9",
                "name": "Night Freight",
                "priority": 5,
                "speedKmph": 60.0,
                "currentPositionKm": 55.0,
                "status": "DERAILED",
                "schedule": []
            }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri());
    let snapshot = client.fetch_state().await.unwrap();

    assert_eq!(
        snapshot.trains.first().unwrap().status,
        TrainStatus::Other
    );
}
