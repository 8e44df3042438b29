//! Sign-in and sign-out flows against the stub platform.

use gpdn_integration_tests::{TEST_EMAIL, TEST_PASSWORD, TestContext};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn login_starts_a_session() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.login(TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("login body");
    assert_eq!(body["email"], TEST_EMAIL);
    assert_eq!(body["fullName"], "Asha Menon");

    // The session cookie now authenticates follow-up calls.
    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::OK);
    let me: Value = me.json().await.expect("me body");
    assert_eq!(me["email"], TEST_EMAIL);
    assert!(
        me["role"]["capabilities"]
            .as_array()
            .expect("capabilities")
            .iter()
            .any(|c| c == "members management")
    );
}

#[tokio::test]
async fn bad_credentials_surface_the_platform_message() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.login(TEST_EMAIL, "wrong-password").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");

    // No session was created.
    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_email_is_rejected_before_the_platform() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.login("not-an-email", TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_requires_a_session() {
    let ctx = TestContext::spawn().await;

    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let ctx = TestContext::spawn().await;
    let resp = ctx.login(TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Round-trip the cookie so the record hits the store.
    assert_eq!(ctx.get("/api/auth/me").await.status(), StatusCode::OK);
    assert!(
        std::fs::read_dir(&ctx.session_dir)
            .expect("session dir")
            .next()
            .is_some(),
        "expected a session record before logout"
    );

    let logout = ctx
        .client
        .post(format!("{}/api/auth/logout", ctx.admin_url))
        .send()
        .await
        .expect("logout request");
    assert_eq!(logout.status(), StatusCode::OK);

    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);

    // Logout flushes the store, not just the cookie.
    assert!(
        std::fs::read_dir(&ctx.session_dir)
            .expect("session dir")
            .next()
            .is_none(),
        "expected no session records after logout"
    );
}
