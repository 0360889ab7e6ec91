mod common;

use axum::http::{
    header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN},
    Method, StatusCode,
};
use common::TestApp;
use shared::api::Object;

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    app.get("/api/exercise/nothing-here")
        .await
        .assert_envelope(StatusCode::NOT_FOUND);
    app.get("/").await.assert_envelope(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let app = TestApp::new();

    let cases = [
        (Method::GET, Object::NewUser.path()),
        (Method::GET, Object::Add.path()),
        (Method::POST, Object::Users.path()),
        (Method::DELETE, Object::Log.path()),
        (Method::PUT, Object::Index.path()),
    ];

    for (method, path) in cases {
        app.request(method, path)
            .await
            .assert_envelope(StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn test_cors_headers_on_every_response() {
    let app = TestApp::new();

    let responses = [
        app.get(Object::Index.path()).await,
        app.get(Object::Users.path()).await,
        app.get("/missing").await,
        app.get_query(Object::Log.path(), &[("user_id", "bad")]).await,
    ];

    for response in responses {
        assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        assert_eq!(
            response.header(ACCESS_CONTROL_ALLOW_HEADERS),
            Some("Content-Type,Authorization,true")
        );
        assert_eq!(
            response.header(ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET,PUT,POST,DELETE,OPTIONS")
        );
    }
}
