//! Drives the real router against a fresh on-disk database without binding a socket
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use exercise_server::{db, routes, AppState};
use serde::de::DeserializeOwned;
use shared::{
    api::{
        error::ErrorEnvelope,
        payloads::{AddExerciseResponse, UserSummary},
        Object,
    },
    types::Uuid,
};
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    router: Router,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("exercise.sqlite");
        let path = path.to_str().expect("Temp path is not utf-8");

        db::run_migrations(path).expect("Failed to run migrations");
        let pool = db::create_pool(path).expect("Failed to create pool");

        Self {
            router: routes::router(AppState::new(pool)),
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse { status, headers, body }
    }

    pub async fn request(&self, method: Method, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path).await
    }

    pub async fn get_query(&self, path: &str, query: &[(&str, &str)]) -> TestResponse {
        let query = serde_urlencoded::to_string(query).expect("Failed to encode query");
        self.get(&format!("{path}?{query}")).await
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        let body = serde_urlencoded::to_string(form).expect("Failed to encode form");
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn create_user(&self, username: &str) -> UserSummary {
        let response = self
            .post_form(Object::NewUser.path(), &[("username", username)])
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()
    }

    pub async fn add_exercise(
        &self,
        user: &Uuid,
        description: &str,
        duration: &str,
        date: &str,
    ) -> AddExerciseResponse {
        let user = user.to_string();
        let response = self
            .post_form(
                Object::Add.path(),
                &[
                    ("userId", user.as_str()),
                    ("description", description),
                    ("duration", duration),
                    ("date", date),
                ],
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        response.json()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Body is not utf-8")
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {e}", self.text()))
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Asserts the response is the error envelope for `code`
    pub fn assert_envelope(&self, code: StatusCode) {
        assert_eq!(self.status, code, "{}", self.text());
        assert_eq!(self.json::<ErrorEnvelope>(), ErrorEnvelope::new(code));
    }
}
