//! Integration test harness for the GPDN admin service.
//!
//! Each test spins up two in-process servers on ephemeral ports:
//!
//! - a stub of the GPDN platform REST API, answering the endpoints the
//!   admin service proxies to, with canned envelopes in the platform's
//!   two response conventions;
//! - the admin service itself, wired to the stub and to a throwaway
//!   session directory.
//!
//! Tests then talk to the admin service with a cookie-keeping reqwest
//! client, exactly as the dashboard front-end would.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use gpdn_admin::config::AdminConfig;
use gpdn_admin::middleware::create_session_layer;
use gpdn_admin::platform::PlatformClient;
use gpdn_admin::session_store::FileSessionStore;
use gpdn_admin::state::AppState;

/// Known-good login accepted by the stub platform.
pub const TEST_EMAIL: &str = "asha@thegpdn.org";
/// Login whose role carries only "thread management".
pub const LIMITED_EMAIL: &str = "limited@thegpdn.org";
/// Login with no role at all.
pub const NO_ROLE_EMAIL: &str = "norole@thegpdn.org";
/// Password the stub accepts for every known login.
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Everything a test needs to talk to a running admin service.
pub struct TestContext {
    pub client: reqwest::Client,
    pub admin_url: String,
    pub session_dir: PathBuf,
}

impl TestContext {
    /// Starts the stub platform and the admin service.
    ///
    /// # Panics
    ///
    /// Panics when either server fails to bind; tests cannot proceed
    /// without them.
    pub async fn spawn() -> Self {
        let platform_addr = spawn_server(stub_platform_router()).await;

        let session_dir =
            std::env::temp_dir().join(format!("gpdn-admin-it-{}", uuid::Uuid::new_v4()));
        let config = AdminConfig {
            host: "127.0.0.1".parse().expect("valid host"),
            port: 0,
            base_url: "http://localhost:0".to_owned(),
            api_base_url: format!("http://{platform_addr}"),
            session_dir: session_dir.clone(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
            tls: None,
        };

        let store = FileSessionStore::new(&session_dir).expect("session directory");
        let session_layer = create_session_layer(store, false);
        let platform = PlatformClient::new(config.api_base_url.clone());
        let state = AppState::new(config, platform);
        let app = gpdn_admin::routes::routes()
            .layer(session_layer)
            .with_state(state);

        let admin_addr = spawn_server(app).await;
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("HTTP client");

        Self {
            client,
            admin_url: format!("http://{admin_addr}"),
            session_dir,
        }
    }

    /// POSTs to the login endpoint and returns the raw response.
    ///
    /// # Panics
    ///
    /// Panics on transport failure.
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/auth/login", self.admin_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request")
    }

    /// GETs a path on the admin service.
    ///
    /// # Panics
    ///
    /// Panics on transport failure.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.admin_url))
            .send()
            .await
            .expect("GET request")
    }
}

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    addr
}

/// All capability strings the platform knows.
fn all_capabilities() -> Value {
    json!([
        "thread management",
        "resource management",
        "palliative unit management",
        "admins management",
        "News & blogs management",
        "members management",
        "services management"
    ])
}

fn admin_payload(email: &str) -> Value {
    let role = match email {
        TEST_EMAIL => json!({
            "_id": "role-super",
            "role": "super admin",
            "capabilities": all_capabilities()
        }),
        LIMITED_EMAIL => json!({
            "_id": "role-moderator",
            "role": "moderator",
            "capabilities": ["thread management"]
        }),
        _ => Value::Null,
    };

    json!({
        "_id": format!("admin-{email}"),
        "fullName": "Asha Menon",
        "email": email,
        "phoneNumber": "+91 98400 00000",
        "role": role
    })
}

async fn admin_login(Json(body): Json<Value>) -> Json<Value> {
    let email = body["email"].as_str().unwrap_or_default().to_owned();
    let password = body["password"].as_str().unwrap_or_default();

    let known = matches!(email.as_str(), TEST_EMAIL | LIMITED_EMAIL | NO_ROLE_EMAIL);
    if known && password == TEST_PASSWORD {
        // Success rides in the numeric-status convention, with the
        // admin record double-nested under data.data.
        Json(json!({
            "status": 200,
            "data": { "data": admin_payload(&email) }
        }))
    } else {
        Json(json!({
            "status": 401,
            "message": "Invalid email or password"
        }))
    }
}

async fn fetch_users() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": [{
            "_id": "member-1",
            "fullName": "Dr. Ngozi Adeyemi",
            "email": "ngozi@example.org",
            "phoneNumber": "+234 800 000 0000",
            "registrationStatus": "pending"
        }]
    }))
}

async fn fetch_threads() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": [{
            "_id": "thread-1",
            "title": "Opioid titration in home care",
            "authorId": { "_id": "member-1", "fullName": "Dr. Ngozi Adeyemi" },
            "tags": ["[\"pain\",\"home care\"]"],
            "upVote": 4,
            "approvalStatus": "pending"
        }]
    }))
}

async fn ack(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "success": true, "message": "done" }))
}

/// The subset of the platform API the tests exercise.
fn stub_platform_router() -> Router {
    Router::new()
        .route("/api/admin/adminLogin", post(admin_login))
        .route("/api/admin/fetchUser", get(fetch_users))
        .route("/api/admin/approveORdeclineUser", patch(ack))
        .route("/api/admin/adminInvitationToUser", post(ack))
        .route("/api/thread/FetchThread", get(fetch_threads))
        .route("/api/admin/approveORdeclineThreads", patch(ack))
        .route("/api/thread/DeleteThread", post(ack))
}
