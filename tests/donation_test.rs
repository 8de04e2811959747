mod common;

use common::{RecordingNavigator, RecordingNotifier};
use ims_client::dashboard::ActionKind;
use ims_client::lifecycle::ImsApp;
use ims_client::transport::{Method, MockTransport, Payload, Session};
use serde_json::json;

async fn donation_app() -> (ImsApp, std::sync::Arc<MockTransport>) {
    let mock = MockTransport::new();
    let mut app = ImsApp::with_transport(
        mock.clone(),
        Session::new(),
        RecordingNavigator::new(),
        RecordingNotifier::new(),
    );
    mock.expect_get("/items/").return_json(json!([]));
    app.dashboard.refresh().await;
    app.dashboard.set_action_kind(ActionKind::Donate);
    (app, mock)
}

/// The generated SKU is `<prefix>-<5 digits>` with the prefix derived from
/// the category: uppercased, whitespace to underscores, at most 4 chars.
#[tokio::test]
async fn donation_sku_has_the_documented_shape() {
    let (mut app, mock) = donation_app().await;

    mock.expect_post("/items/").return_status(201, json!({}));
    mock.expect_get("/items/").return_json(json!([]));

    app.dashboard.set_product_name("Socket Set");
    app.dashboard.set_new_category(true);
    app.dashboard.set_new_category_name("Hand Tools");
    app.dashboard.submit_stock_action().await;

    let post = mock
        .requests()
        .into_iter()
        .find(|r| r.method == Method::Post)
        .unwrap();
    let body = match post.payload {
        Some(Payload::Json(v)) => v,
        other => panic!("unexpected payload: {other:?}"),
    };

    let sku = body["sku"].as_str().unwrap();
    let (prefix, suffix) = sku.split_once('-').unwrap();
    assert_eq!(prefix, "HAND");
    assert_eq!(suffix.len(), 5);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));

    assert_eq!(body["name"], "Socket Set");
    assert_eq!(body["category"], "Hand Tools");
    assert_eq!(body["quantity"], 1);
    assert_eq!(body["is_archived"], false);
    assert_eq!(body["description"], "no description provided.");
    mock.verify();
}

/// An existing-category donation uses the picker value unchanged.
#[tokio::test]
async fn donation_with_existing_category_uses_the_selection() {
    let (mut app, mock) = donation_app().await;

    mock.expect_post("/items/").return_status(201, json!({}));
    mock.expect_get("/items/").return_json(json!([]));

    app.dashboard.set_product_name("Monitor");
    app.dashboard.set_selected_category("Electronics");
    app.dashboard.set_description("27 inch");
    app.dashboard.submit_stock_action().await;

    let post = mock
        .requests()
        .into_iter()
        .find(|r| r.method == Method::Post)
        .unwrap();
    let body = match post.payload {
        Some(Payload::Json(v)) => v,
        other => panic!("unexpected payload: {other:?}"),
    };
    assert_eq!(body["category"], "Electronics");
    assert_eq!(body["description"], "27 inch");
    assert!(body["sku"].as_str().unwrap().starts_with("ELEC-"));
    mock.verify();
}

/// Donation with an empty name never issues a creation request.
#[tokio::test]
async fn donation_without_a_name_is_stopped_locally() {
    let (mut app, mock) = donation_app().await;
    let requests_before = mock.requests().len();

    app.dashboard.set_new_category(true);
    app.dashboard.set_new_category_name("Hand Tools");
    app.dashboard.submit_stock_action().await;

    assert_eq!(mock.requests().len(), requests_before);
    mock.verify();
}
