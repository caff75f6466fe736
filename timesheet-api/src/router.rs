use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use axum_login::{
    login_required,
    tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer},
    AuthManagerLayer, AuthManagerLayerBuilder,
};
use time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tower_sessions_moka_store::MokaStore;
use url::Url;

use crate::{
    app_state::AppState,
    auth::{self, AuthBackend},
    config::{AuthSettings, Settings},
    factory, routes,
};

pub fn create(config: &Settings) -> Router<()> {
    let base_app = Router::new()
        .nest("/tasks", routes::tasks::router())
        .nest("/entries", routes::entries::router())
        .nest("/timesheets", routes::timesheets::router());

    // If authentication is enabled, wrap the app with the auth middleware
    let app_with_auth = if config.application.disable_auth {
        tracing::warn!("authentication is disabled");
        base_app
    } else {
        base_app
            .route_layer(login_required!(AuthBackend))
            .merge(auth::router())
            .layer(new_auth_layer(&config.auth))
    };

    // Liveness stays reachable without a session
    let app = app_with_auth.route("/", get(|| async { "Timesheet API is running" }));

    let app_state = AppState::new(factory::timesheet_service(&config.timesheet));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(allowed_origin(&config.application.app_url));

    app.with_state(app_state)
        .layer(cors)
        .layer(CatchPanicLayer::custom(routes::error::panic_response))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// Sessions live in process memory and are lost on restart, like the task store.
fn new_auth_layer(settings: &AuthSettings) -> AuthManagerLayer<AuthBackend, MokaStore> {
    let session_store = MokaStore::new(Some(2_000));

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            settings.session_inactivity_days,
        )));

    let backend = AuthBackend::new(factory::credential_checker(settings));
    AuthManagerLayerBuilder::new(backend, session_layer).build()
}

/// Browsers send the origin without a trailing slash or path, so compare
/// against the normalized origin of `app_url`.
fn allowed_origin(app_url: &str) -> AllowOrigin {
    let origin = match Url::parse(app_url) {
        Ok(url) => url.origin().ascii_serialization(),
        Err(e) => {
            tracing::warn!("Invalid app_url {:?}, cross-origin requests disabled: {}", app_url, e);
            return AllowOrigin::list(Vec::<HeaderValue>::new());
        }
    };

    AllowOrigin::predicate(move |request_origin: &HeaderValue, _| {
        request_origin.as_bytes() == origin.as_bytes()
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::{ApplicationSettings, TimesheetSettings, UserSettings},
        routes::test_support::{get, json, send},
    };

    fn settings(disable_auth: bool) -> Settings {
        Settings {
            application: ApplicationSettings {
                port: 0,
                host: "127.0.0.1".to_string(),
                app_url: "http://localhost:3000/".to_string(),
                disable_auth,
            },
            auth: AuthSettings {
                insecure_plaintext_passwords: true,
                session_inactivity_days: 7,
                users: vec![UserSettings {
                    id: "1".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@tentwenty.com".to_string(),
                    password: "password123".to_string(),
                }],
            },
            timesheet: TimesheetSettings {
                weekly_target_hours: 40.0,
                seed_demo_entries: true,
            },
        }
    }

    fn login(password: &str) -> Request<Body> {
        json(
            Method::POST,
            "/login",
            &json!({ "email": "john@tentwenty.com", "password": password }),
        )
    }

    fn with_cookie(mut request: Request<Body>, cookie: &str) -> Request<Body> {
        request
            .headers_mut()
            .insert(header::COOKIE, cookie.parse().unwrap());
        request
    }

    async fn session_cookie(app: &Router) -> String {
        let response = app.clone().oneshot(login("password123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn liveness_needs_no_session() {
        let response = create(&settings(false)).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_requires_a_session() {
        let app = create(&settings(false));

        let (status, _) = send(&app, get("/tasks?weekId=1")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, get("/me")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Not authenticated");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (status, body) = send(&create(&settings(false)), login("letmein")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn login_grants_access_until_logout() {
        let app = create(&settings(false));
        let cookie = session_cookie(&app).await;

        let (status, body) = send(&app, with_cookie(get("/me"), &cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": "1", "name": "John Doe", "email": "john@tentwenty.com" })
        );

        let (status, body) = send(&app, with_cookie(get("/tasks?weekId=3"), &cookie)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tasks"][0]["id"], "e6");

        let logout = with_cookie(
            Request::builder()
                .method(Method::POST)
                .uri("/logout")
                .body(Body::empty())
                .unwrap(),
            &cookie,
        );
        let (status, _) = send(&app, logout).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, with_cookie(get("/me"), &cookie)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn disabled_auth_serves_without_session() {
        let (status, body) = send(&create(&settings(true)), get("/timesheets")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn cors_allows_only_the_app_origin() {
        let app = create(&settings(true));
        let preflight = |origin: &str| {
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/tasks")
                .header(header::ORIGIN, origin)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap()
        };

        let allowed = app.clone().oneshot(preflight("http://localhost:3000")).await.unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );

        let denied = app.oneshot(preflight("http://evil.example")).await.unwrap();
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
