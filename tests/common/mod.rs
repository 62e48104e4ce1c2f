use axum::{
    body::Body,
    http::{Method, Request},
};
use fragebogen::{router, state::Builder, AppState};

/// The router plus a handle on its builder state, so tests can assert on
/// what a request changed.
pub fn create_test_app() -> (axum::Router, Builder) {
    let builder = Builder::new();
    let state = AppState {
        builder: builder.clone(),
        secure_cookies: false,
    };
    (router(state), builder)
}

/// A form request the CSRF middleware accepts.
pub fn hx_form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("HX-Request", "true")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed")
}
