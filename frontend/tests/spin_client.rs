use std::cell::RefCell;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use spinwheel_backend::config::ServerConfig;
use spinwheel_backend::inventory::{Inventory, PrizeStock};
use spinwheel_backend::{create_app, AppState};
use spinwheel_frontend::api::HttpSpinClient;
use spinwheel_shared::constants::ALREADY_SPUN_MESSAGE;
use spinwheel_shared::geometry::slice_at_pointer;
use spinwheel_shared::{
    default_slices, run_spin, Animator, SpinAnimation, SpinClient, SpinMachine, SpinReport,
    SpinRequestError, SpinState, WheelConfig,
};
use tokio::net::TcpListener;

const TIMEOUT: Duration = Duration::from_secs(5);

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn serve_authority(inventory: Inventory) -> String {
    serve(create_app(AppState::new(ServerConfig::default(), inventory))).await
}

fn last_prize_inventory() -> Inventory {
    Inventory::new(default_slices(), vec![PrizeStock::new("T-shirt", 0, 1, 1)], 0).unwrap()
}

struct InstantAnimator;

impl Animator for InstantAnimator {
    async fn animate(&self, _animation: &SpinAnimation) {}
}

#[tokio::test]
async fn test_second_spin_in_same_session_is_refused() {
    let base_url = serve_authority(Inventory::with_defaults()).await;
    let client = HttpSpinClient::new(base_url, TIMEOUT).unwrap();

    let outcome = client.request_spin().await.unwrap();
    assert!(outcome.slice_index < default_slices().len());
    assert_eq!(outcome.label, default_slices()[outcome.slice_index].label);

    assert_eq!(
        client.request_spin().await,
        Err(SpinRequestError::AlreadySpun(ALREADY_SPUN_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_separate_clients_are_separate_sessions() {
    let base_url = serve_authority(Inventory::with_defaults()).await;

    let first = HttpSpinClient::new(base_url.clone(), TIMEOUT).unwrap();
    let second = HttpSpinClient::new(base_url, TIMEOUT).unwrap();

    assert!(first.request_spin().await.is_ok());
    assert!(second.request_spin().await.is_ok());
}

#[tokio::test]
async fn test_status_tracks_exhaustion() {
    let base_url = serve_authority(last_prize_inventory()).await;
    let client = HttpSpinClient::new(base_url, TIMEOUT).unwrap();

    assert!(!client.fetch_status().await.unwrap().all_prizes_gone);

    let outcome = client.request_spin().await.unwrap();
    assert_eq!(outcome.slice_index, 0);
    assert!(outcome.is_prize);
    assert!(outcome.all_prizes_gone);

    assert!(client.fetch_status().await.unwrap().all_prizes_gone);
}

#[tokio::test]
async fn test_unreachable_authority_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSpinClient::new(format!("http://{}", addr), TIMEOUT).unwrap();
    assert_eq!(client.request_spin().await, Err(SpinRequestError::Unavailable));
    assert_eq!(client.fetch_status().await, Err(SpinRequestError::Unavailable));
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let app = Router::new()
        .route("/api/spin", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/status", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let client = HttpSpinClient::new(serve(app).await, TIMEOUT).unwrap();

    assert_eq!(client.request_spin().await, Err(SpinRequestError::Unavailable));
    assert_eq!(client.fetch_status().await, Err(SpinRequestError::Unavailable));
}

#[tokio::test]
async fn test_garbage_success_body_is_unavailable() {
    let app = Router::new().route("/api/spin", post(|| async { "not json" }));
    let client = HttpSpinClient::new(serve(app).await, TIMEOUT).unwrap();

    assert_eq!(client.request_spin().await, Err(SpinRequestError::Unavailable));
}

#[tokio::test]
async fn test_slow_authority_times_out() {
    let app = Router::new().route(
        "/api/spin",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::OK
        }),
    );
    let client = HttpSpinClient::new(serve(app).await, Duration::from_millis(100)).unwrap();

    assert_eq!(client.request_spin().await, Err(SpinRequestError::Unavailable));
}

#[tokio::test]
async fn test_full_spin_against_authority() {
    let base_url = serve_authority(Inventory::with_defaults()).await;
    let client = HttpSpinClient::new(base_url, TIMEOUT).unwrap();
    let machine = RefCell::new(
        SpinMachine::new(default_slices(), WheelConfig::default())
            .unwrap()
            .with_seed(5),
    );

    let end = match run_spin(&machine, &client, &InstantAnimator).await {
        SpinReport::Settled(end) => end,
        other => panic!("expected a settled spin, got {:?}", other),
    };
    assert!(!end.fallback);
    assert_eq!(end.slice, default_slices()[end.index]);
    assert_eq!(slice_at_pointer(machine.borrow().rotation(), 6), end.index);

    let report = run_spin(&machine, &client, &InstantAnimator).await;
    assert_eq!(report, SpinReport::Blocked(ALREADY_SPUN_MESSAGE.to_string()));
    assert_eq!(
        machine.borrow().state(),
        &SpinState::Blocked(ALREADY_SPUN_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_spin_without_authority_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSpinClient::new(format!("http://{}", addr), TIMEOUT).unwrap();
    let machine = RefCell::new(SpinMachine::new(default_slices(), WheelConfig::default()).unwrap());

    match run_spin(&machine, &client, &InstantAnimator).await {
        SpinReport::Settled(end) => {
            assert!(end.fallback);
            assert!(!end.is_prize);
            assert_eq!(slice_at_pointer(machine.borrow().rotation(), 6), end.index);
        }
        other => panic!("expected a fallback spin, got {:?}", other),
    }
}
