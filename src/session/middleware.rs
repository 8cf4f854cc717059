//! Middleware that rejects requests without a session cookie.

use axum::{extract::Request, middleware::Next, response::{IntoResponse, Response}};
use axum_extra::extract::CookieJar;

use crate::{Error, session::cookie::COOKIE_SESSION};

/// Middleware function that checks for the session cookie.
///
/// The request is executed normally if the cookie is present, otherwise a
/// 401 response with a fixed message is returned and no handler runs.
/// Handlers behind this guard read the token from their own [CookieJar]
/// extractor.
pub async fn session_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    if jar.get(COOKIE_SESSION).is_none() {
        return Error::Unauthorized.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod session_guard_tests {
    use axum::{Router, middleware, response::Html, routing::get};
    use axum_test::TestServer;

    use crate::session::{SessionId, build_session_cookie, session_guard};

    const TEST_PROTECTED_ROUTE: &str = "/protected";

    async fn test_handler() -> Html<&'static str> {
        Html("<h1>Hello, World!</h1>")
    }

    fn get_test_server() -> TestServer {
        let app = Router::new()
            .route(TEST_PROTECTED_ROUTE, get(test_handler))
            .route_layer(middleware::from_fn(session_guard));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn request_with_session_cookie_reaches_the_handler() {
        let server = get_test_server();

        server
            .get(TEST_PROTECTED_ROUTE)
            .add_cookie(build_session_cookie(&SessionId::mint()))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn request_without_session_cookie_is_rejected() {
        let server = get_test_server();

        let response = server.get(TEST_PROTECTED_ROUTE).await;

        response.assert_status_unauthorized();
        response.assert_json(&serde_json::json!({ "error": "Unauthorized." }));
    }
}
