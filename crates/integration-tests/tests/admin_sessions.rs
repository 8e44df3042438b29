//! Session persistence and self-healing.

use gpdn_integration_tests::{TEST_EMAIL, TEST_PASSWORD, TestContext};
use reqwest::StatusCode;

#[tokio::test]
async fn login_persists_a_session_record_on_disk() {
    let ctx = TestContext::spawn().await;
    ctx.login(TEST_EMAIL, TEST_PASSWORD).await;

    // Force the cookie to round-trip so the record is written.
    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::OK);

    let records: Vec<_> = std::fs::read_dir(&ctx.session_dir)
        .expect("session dir")
        .collect();
    assert!(!records.is_empty(), "expected a session record file");
}

#[tokio::test]
async fn corrupted_session_record_signs_the_admin_out() {
    let ctx = TestContext::spawn().await;
    ctx.login(TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(ctx.get("/api/auth/me").await.status(), StatusCode::OK);

    // Truncate every record to garbage, as a bad write would.
    for entry in std::fs::read_dir(&ctx.session_dir).expect("session dir") {
        let entry = entry.expect("dir entry");
        std::fs::write(entry.path(), b"{not json").expect("corrupt record");
    }

    // The service discards the record instead of failing the request.
    let me = ctx.get("/api/auth/me").await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);

    // And signing in again works.
    let resp = ctx.login(TEST_EMAIL, TEST_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ctx.get("/api/auth/me").await.status(), StatusCode::OK);
}
