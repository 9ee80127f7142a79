//! End-to-end behaviour of the client against a stub backend.
//!
//! Each test stands up a `wiremock` server speaking the backend's HTTP
//! contract and drives the public API the way a view would.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repair_desk_client::{
    AuthGateway, Authenticator, ClientConfig, RepairApi, RequestGateway, ScheduleGateway,
    SessionState, UserGateway,
};
use repair_desk_core::{
    ApiError, Credentials, NewScheduleEntry, NewServiceRequest, Operation, RequestId,
    RequestPatch, RequestStatus,
};

fn api_for(uri: &str) -> RepairApi {
    RepairApi::new(&ClientConfig::new(uri)).unwrap()
}

fn authenticator(api: &RepairApi) -> Authenticator<repair_desk_client::HttpAuthGateway> {
    Authenticator::new(Arc::new(api.auth().clone()), Arc::new(SessionState::new()))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc; Path=/")
                .set_body_json(json!({ "token": "abc" })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_then_logout_toggles_authentication() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "bye" })))
        .mount(&server)
        .await;

    let api = api_for(&server.uri());
    let auth = authenticator(&api);

    auth.sign_in(&Credentials::new("ada", "pw")).await.unwrap();
    assert!(auth.session().is_authenticated());

    auth.sign_out().await.unwrap();
    assert!(!auth.session().is_authenticated());
}

#[tokio::test]
async fn failing_server_logout_still_clears_local_state() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server.uri());
    let auth = authenticator(&api);
    auth.sign_in(&Credentials::new("ada", "pw")).await.unwrap();

    let result = auth.sign_out().await;

    assert_eq!(result, Err(ApiError::network_or_server(Operation::Logout)));
    assert!(!auth.session().is_authenticated());
}

#[tokio::test]
async fn created_request_can_be_fetched_back() {
    let server = MockServer::start().await;
    let created = json!({
        "id": 17,
        "title": "Leaky faucet",
        "description": "Drips constantly",
        "status": "pending"
    });
    Mock::given(method("POST"))
        .and(path("/api/requests"))
        .and(body_json(json!({
            "title": "Leaky faucet",
            "description": "Drips constantly"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/requests/17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(created))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server.uri());
    let request = api
        .requests()
        .create_request(&NewServiceRequest::new("Leaky faucet", "Drips constantly"))
        .await
        .unwrap();

    assert_eq!(request.id, RequestId::from(17));
    assert_eq!(request.status, RequestStatus::Pending);

    let fetched = api.requests().get_request(&request.id).await.unwrap();
    assert_eq!(fetched.title, request.title);
    assert_eq!(fetched.description, request.description);
}

#[tokio::test]
async fn empty_collection_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = api_for(&server.uri());
    assert!(api.requests().list_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn schedule_echoes_submitted_slot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/schedule"))
        .and(body_json(json!({ "date": "2024-06-01", "time": "14:30" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 4,
            "date": "2024-06-01",
            "time": "14:30",
            "status": "scheduled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server.uri());
    let entry = api
        .schedules()
        .create_schedule(&NewScheduleEntry::parse("2024-06-01", "14:30").unwrap())
        .await
        .unwrap();

    assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(entry.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
}

#[tokio::test]
async fn unreachable_backend_yields_the_single_error_kind() {
    // Reserve a port, then release it so nothing is listening there.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let api = api_for(&uri);
    let session = Arc::new(SessionState::new());
    let auth = Authenticator::new(Arc::new(api.auth().clone()), Arc::clone(&session));
    let id = RequestId::from(1);

    let results = [
        auth.sign_in(&Credentials::new("ada", "pw")).await.map(|_| ()),
        api.auth().logout().await,
        api.requests().list_requests().await.map(|_| ()),
        api.requests().get_request(&id).await.map(|_| ()),
        api.requests()
            .create_request(&NewServiceRequest::new("t", "d"))
            .await
            .map(|_| ()),
        api.requests()
            .update_request(&id, &RequestPatch::default())
            .await
            .map(|_| ()),
        api.requests().delete_request(&id).await,
        api.schedules().list_schedules().await.map(|_| ()),
        api.users().list_users().await.map(|_| ()),
    ];

    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::NetworkOrServer { .. }));
    }
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn concurrent_updates_both_complete() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/requests/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "title": "Cracked tile",
            "description": "Bathroom floor",
            "status": "scheduled"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let api = api_for(&server.uri());
    let id = RequestId::from(3);
    let first = RequestPatch {
        title: Some("Cracked tile".to_string()),
        ..RequestPatch::default()
    };
    let second = RequestPatch {
        status: Some(RequestStatus::Scheduled),
        ..RequestPatch::default()
    };

    let (a, b) = futures::future::join(
        api.requests().update_request(&id, &first),
        api.requests().update_request(&id, &second),
    )
    .await;

    assert!(a.is_ok());
    assert!(b.is_ok());
}
