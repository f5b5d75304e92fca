//! End-to-end tests against the live mock server.
//!
//! Each test starts its own server on a random port (background thread with
//! a current-thread tokio runtime) and drives the blocking client over real
//! HTTP, covering the success path, basic-auth accept/reject, non-2xx as
//! data, transport failure, and single-use enforcement.

use std::net::SocketAddr;

use jsonpost_core::{encode_basic_auth, ClientError, PostRequest, RequestSpec};

/// Start the mock server on a random port and return its address.
fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn echo_round_trip_is_byte_exact() {
    let addr = spawn_server();
    let payload = r#"{"name":"John","age":30,"city":"New York"}"#;

    let spec = RequestSpec::new(&format!("http://{addr}/echo"), payload);
    let mut request = PostRequest::new(spec).unwrap();
    request.perform().unwrap();

    assert_eq!(request.response_code().unwrap(), 200);
    assert_eq!(request.response_body().unwrap(), payload.as_bytes());
}

#[test]
fn authorized_request_is_accepted() {
    let addr = spawn_server();
    let auth = encode_basic_auth(mock_server::USERNAME, mock_server::PASSWORD);

    let spec = RequestSpec::new(&format!("http://{addr}/guarded"), "{}")
        .with_authorization(&auth);
    let mut request = PostRequest::new(spec).unwrap();
    request.perform().unwrap();

    assert_eq!(request.response_code().unwrap(), 200);
    let json: serde_json::Value =
        serde_json::from_slice(request.response_body().unwrap()).unwrap();
    assert_eq!(json["authenticated"], true);
}

#[test]
fn missing_credentials_surface_as_401_not_error() {
    let addr = spawn_server();

    let spec = RequestSpec::new(&format!("http://{addr}/guarded"), "{}");
    let mut request = PostRequest::new(spec).unwrap();
    request.perform().unwrap();

    assert_eq!(request.response_code().unwrap(), 401);
}

#[test]
fn wrong_credentials_surface_as_401_not_error() {
    let addr = spawn_server();
    let auth = encode_basic_auth(mock_server::USERNAME, "not-the-password");

    let spec = RequestSpec::new(&format!("http://{addr}/guarded"), "{}")
        .with_authorization(&auth);
    let mut request = PostRequest::new(spec).unwrap();
    request.perform().unwrap();

    assert_eq!(request.response_code().unwrap(), 401);
}

#[test]
fn server_error_status_is_a_valid_outcome() {
    let addr = spawn_server();

    let spec = RequestSpec::new(&format!("http://{addr}/status/503"), "{}");
    let mut request = PostRequest::new(spec).unwrap();
    request.perform().unwrap();

    assert_eq!(request.response_code().unwrap(), 503);
    let json: serde_json::Value =
        serde_json::from_slice(request.response_body().unwrap()).unwrap();
    assert_eq!(json["code"], 503);
}

#[test]
fn unreachable_host_fails_perform() {
    // Bind then drop a listener so the port is known to refuse connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let spec = RequestSpec::new(&format!("http://{addr}/echo"), "{}");
    let mut request = PostRequest::new(spec).unwrap();

    let err = request.perform().unwrap_err();
    assert!(matches!(err, ClientError::Transfer(_)));
    assert!(matches!(request.response_code(), Err(ClientError::NotPerformed)));
    assert!(matches!(request.response_body(), Err(ClientError::NotPerformed)));
}

#[test]
fn second_perform_is_rejected_and_outcome_survives() {
    let addr = spawn_server();
    let payload = r#"{"once":true}"#;

    let spec = RequestSpec::new(&format!("http://{addr}/echo"), payload);
    let mut request = PostRequest::new(spec).unwrap();
    request.perform().unwrap();

    let err = request.perform().unwrap_err();
    assert!(matches!(err, ClientError::AlreadyPerformed));

    // The rejected call must not disturb the completed outcome.
    assert_eq!(request.response_code().unwrap(), 200);
    assert_eq!(request.response_body().unwrap(), payload.as_bytes());
}
