//! Capability gating across the management surfaces.

use gpdn_integration_tests::{
    LIMITED_EMAIL, NO_ROLE_EMAIL, TEST_EMAIL, TEST_PASSWORD, TestContext,
};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn role_capabilities_gate_each_surface() {
    let ctx = TestContext::spawn().await;
    ctx.login(LIMITED_EMAIL, TEST_PASSWORD).await;

    // "thread management" is granted.
    let threads = ctx.get("/api/threads").await;
    assert_eq!(threads.status(), StatusCode::OK);
    let threads: Value = threads.json().await.expect("threads body");
    assert_eq!(threads[0]["title"], "Opioid titration in home care");

    // "members management" is not.
    let members = ctx.get("/api/members").await;
    assert_eq!(members.status(), StatusCode::FORBIDDEN);
    let body: Value = members.json().await.expect("forbidden body");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn thread_listing_is_shaped_for_display() {
    let ctx = TestContext::spawn().await;
    ctx.login(LIMITED_EMAIL, TEST_PASSWORD).await;

    let threads = ctx.get("/api/threads").await;
    assert_eq!(threads.status(), StatusCode::OK);
    let threads: Value = threads.json().await.expect("threads body");

    // The platform stores tag arrays JSON-encoded inside single entries;
    // the listing flattens them and collapses the author reference.
    assert_eq!(threads[0]["tags"], json!(["pain", "home care"]));
    assert_eq!(threads[0]["authorName"], "Dr. Ngozi Adeyemi");
}

#[tokio::test]
async fn thread_deletion_reaches_the_platform() {
    let ctx = TestContext::spawn().await;
    ctx.login(LIMITED_EMAIL, TEST_PASSWORD).await;

    let resp = ctx
        .client
        .delete(format!("{}/api/threads/thread-1", ctx.admin_url))
        .send()
        .await
        .expect("delete request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("ack body");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn admin_without_a_role_reaches_nothing() {
    let ctx = TestContext::spawn().await;
    ctx.login(NO_ROLE_EMAIL, TEST_PASSWORD).await;

    // Signed in, so introspection works.
    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::OK);

    // But every capability check fails.
    for path in ["/api/threads", "/api/members", "/api/admins"] {
        let resp = ctx.get(path).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "path {path}");
    }
}

#[tokio::test]
async fn unauthenticated_api_calls_are_unauthorized() {
    let ctx = TestContext::spawn().await;

    let resp = ctx.get("/api/members").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_capabilities_allow_member_moderation() {
    let ctx = TestContext::spawn().await;
    ctx.login(TEST_EMAIL, TEST_PASSWORD).await;

    let members = ctx.get("/api/members").await;
    assert_eq!(members.status(), StatusCode::OK);
    let members: Value = members.json().await.expect("members body");
    assert_eq!(members[0]["registrationStatus"], "pending");
    let member_id = members[0]["_id"].as_str().expect("member id").to_owned();

    let approve = ctx
        .client
        .patch(format!("{}/api/members/{member_id}/status", ctx.admin_url))
        .json(&json!({ "actionStatus": "approved" }))
        .send()
        .await
        .expect("approve request");
    assert_eq!(approve.status(), StatusCode::OK);
    let body: Value = approve.json().await.expect("ack body");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn invitation_requires_a_phone_number() {
    let ctx = TestContext::spawn().await;
    ctx.login(TEST_EMAIL, TEST_PASSWORD).await;

    let resp = ctx
        .client
        .post(format!("{}/api/members/invitations", ctx.admin_url))
        .json(&json!({ "number": "   " }))
        .send()
        .await
        .expect("invite request");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = ctx
        .client
        .post(format!("{}/api/members/invitations", ctx.admin_url))
        .json(&json!({ "number": "+234 800 000 0000" }))
        .send()
        .await
        .expect("invite request");
    assert_eq!(resp.status(), StatusCode::OK);
}
