//! Stub authentication API served by a real Actix listener.
//!
//! The username selects the scenario:
//! - `ghost` → `401 {"error":"Unknown developer"}`
//! - `broken` → `500` with a non-JSON body
//! - `tokenless` → `200` with an empty token
//! - `tokenless-null` → `200` with a `null` token
//! - `garbled` → `200` with a body that is not a login response
//! - anything else → `200` with token `tok-<username>`

use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// Handle on a running stub.
pub struct StubBackend {
    /// API base URL including the `/api/v1` prefix.
    pub api_url: String,
    calls: Arc<AtomicUsize>,
}

impl StubBackend {
    /// Number of development login requests received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn user(username: &str, email: &str) -> Value {
    json!({
        "id": 42,
        "github_id": 0,
        "username": username,
        "email": email,
        "name": "",
        "avatar_url": "",
        "created_at": "2024-03-05T10:11:12Z",
        "updated_at": "2024-03-05T10:11:12Z",
        "projects": []
    })
}

async fn dev_login(calls: web::Data<AtomicUsize>, body: web::Json<Value>) -> HttpResponse {
    calls.fetch_add(1, Ordering::SeqCst);
    let username = body["username"].as_str().unwrap_or_default();
    let email = body["email"].as_str().unwrap_or_default();
    match username {
        "ghost" => HttpResponse::Unauthorized().json(json!({ "error": "Unknown developer" })),
        "broken" => HttpResponse::InternalServerError().body("<html>oops</html>"),
        "tokenless" => HttpResponse::Ok().json(json!({ "token": "", "user": user(username, email) })),
        "tokenless-null" => {
            HttpResponse::Ok().json(json!({ "token": null, "user": user(username, email) }))
        }
        "garbled" => HttpResponse::Ok().json(json!({ "unexpected": true })),
        _ => HttpResponse::Ok().json(json!({
            "token": format!("tok-{username}"),
            "user": user(username, email)
        })),
    }
}

/// Start the stub on an ephemeral port.
pub fn spawn() -> StubBackend {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    let calls = web::Data::new(AtomicUsize::new(0));
    let counter = calls.clone().into_inner();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(calls.clone())
            .route("/api/v1/auth/dev-login", web::post().to(dev_login))
    })
    .workers(1)
    .listen(listener)
    .expect("listen on stub socket")
    .run();
    actix_web::rt::spawn(server);

    StubBackend {
        api_url: format!("http://{addr}/api/v1"),
        calls: counter,
    }
}
