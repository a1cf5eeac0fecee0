//! End-to-end page flow: login form → dashboard → logout, with the real
//! reqwest adapter talking to a stub backend.

#[path = "support/stub_backend.rs"]
mod stub_backend;

use std::sync::Arc;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{test, web};
use devsync_web::domain::DevLoginService;
use devsync_web::inbound::http::health::HealthState;
use devsync_web::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use devsync_web::inbound::http::state::HttpState;
use devsync_web::inbound::http::views::Views;
use devsync_web::outbound::{ApiBaseUrl, HttpAuthApi};
use devsync_web::server::build_app;
use rstest::rstest;

fn http_state(api_url: &str, dev_login_enabled: bool) -> web::Data<HttpState> {
    let base = ApiBaseUrl::parse(api_url).expect("valid base url");
    let api = HttpAuthApi::new(base.clone(), None).expect("client builds");
    web::Data::new(HttpState::new(
        DevLoginService::new(Arc::new(api)),
        Arc::new(Views::new().expect("templates parse")),
        base.github_login_url().to_string(),
        dev_login_enabled,
    ))
}

fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

fn location<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}

fn has_trace_id<B>(response: &ServiceResponse<B>) -> bool {
    response.headers().contains_key("trace-id")
}

#[rstest]
#[actix_web::test]
async fn dev_login_reaches_dashboard_and_logout_returns_to_login() {
    let stub = stub_backend::spawn();
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        http_state(&stub.api_url, true),
        session_settings().middleware(),
    ))
    .await;

    let anonymous = test::call_service(
        &app,
        test::TestRequest::get().uri("/dashboard").to_request(),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&anonymous).as_deref(), Some("/login"));

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/dev")
            .set_form([("username", "ada"), ("email", "ada@example.com")])
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&login).as_deref(), Some("/dashboard"));
    assert!(has_trace_id(&login));
    let cookie = session_cookie(&login).expect("session cookie after login");
    assert_eq!(stub.calls(), 1);

    let page = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/dashboard")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(page.status(), StatusCode::OK);
    let body = test::read_body(page).await;
    let body = String::from_utf8(body.to_vec()).expect("utf8 body");
    assert!(body.contains("ada@example.com"));
    assert!(body.contains("3&#x2F;5&#x2F;2024"));

    let logout = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&logout).as_deref(), Some("/login"));
    let cleared = session_cookie(&logout).expect("session cookie after logout");

    let after = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/dashboard")
            .cookie(cleared)
            .to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::SEE_OTHER);
}

#[rstest]
#[case::rejected("ghost", "Unknown developer")]
#[case::server_error("broken", "Login failed")]
#[case::missing_user("garbled", "Login failed")]
#[actix_web::test]
async fn failed_login_stays_on_the_form(#[case] username: &str, #[case] banner: &str) {
    let stub = stub_backend::spawn();
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        http_state(&stub.api_url, true),
        session_settings().middleware(),
    ))
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/dev")
            .set_form([("username", username), ("email", "dev@example.com")])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    let body = test::read_body(response).await;
    assert!(String::from_utf8_lossy(&body).contains(banner));
    assert_eq!(stub.calls(), 1);
}

#[rstest]
#[actix_web::test]
async fn invalid_form_never_reaches_the_backend() {
    let stub = stub_backend::spawn();
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        http_state(&stub.api_url, true),
        session_settings().middleware(),
    ))
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/dev")
            .set_form([("username", ""), ("email", "ada@")])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(stub.calls(), 0);
}

#[rstest]
#[case::empty_token("tokenless")]
#[case::null_token("tokenless-null")]
#[actix_web::test]
async fn tokenless_response_stores_nothing(#[case] username: &str) {
    let stub = stub_backend::spawn();
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        http_state(&stub.api_url, true),
        session_settings().middleware(),
    ))
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/dev")
            .set_form([("username", username), ("email", "dev@example.com")])
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(location(&response).is_none());
    assert!(session_cookie(&response).is_none());
    let body = test::read_body(response).await;
    assert!(!String::from_utf8_lossy(&body).contains("Login failed"));
    assert_eq!(stub.calls(), 1);
}

#[rstest]
#[actix_web::test]
async fn github_link_and_disabled_dev_login() {
    let stub = stub_backend::spawn();
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        http_state(&stub.api_url, false),
        session_settings().middleware(),
    ))
    .await;

    let page = test::call_service(
        &app,
        test::TestRequest::get().uri("/login?dev=show").to_request(),
    )
    .await;
    assert_eq!(page.status(), StatusCode::OK);
    let body = test::read_body(page).await;
    let body = String::from_utf8_lossy(&body).replace("&#x2F;", "/");
    assert!(body.contains(&format!("{}/auth/github", stub.api_url)));
    assert!(!body.contains("Development Login"));

    let submit = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login/dev")
            .set_form([("username", "ada"), ("email", "ada@example.com")])
            .to_request(),
    )
    .await;
    assert_eq!(submit.status(), StatusCode::NOT_FOUND);
    assert_eq!(stub.calls(), 0);
}

#[rstest]
#[actix_web::test]
async fn health_checks_are_served_outside_the_gate() {
    let stub = stub_backend::spawn();
    let health = web::Data::new(HealthState::new());
    let app = test::init_service(build_app(
        health.clone(),
        http_state(&stub.api_url, true),
        session_settings().middleware(),
    ))
    .await;

    let before = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let after = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::OK);
}
