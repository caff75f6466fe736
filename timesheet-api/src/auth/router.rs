use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(self::get::me))
        .route("/login", post(self::post::login))
        .route("/logout", post(self::post::logout))
}

mod post {
    use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
    use tracing::instrument;

    use crate::{
        adapters::inbound::http::UserResponse,
        auth::{AuthSession, Credentials},
        routes::{error::ErrorCode, ApiError},
    };

    #[instrument(name = "login", skip(auth_session, payload))]
    pub async fn login(
        mut auth_session: AuthSession,
        payload: Result<Json<Credentials>, JsonRejection>,
    ) -> Result<Json<UserResponse>, ApiError> {
        let Json(creds) = payload.map_err(ApiError::from)?;
        let email = creds.email.clone().unwrap_or_default();

        let user = match auth_session.authenticate(creds).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(email = %email, "rejected login attempt");
                return Err(ApiError::unauthorized("Invalid credentials")
                    .with_code(ErrorCode::InvalidCredentials));
            }
            Err(e) => {
                tracing::error!("Authentication failed: {}", e);
                return Err(ApiError::internal("Internal server error"));
            }
        };

        if let Err(e) = auth_session.login(&user).await {
            tracing::error!("Failed to log in user: {}", e);
            return Err(ApiError::internal("Internal server error"));
        }

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(Json(user.into()))
    }

    #[instrument(name = "logout", skip(auth_session))]
    pub async fn logout(mut auth_session: AuthSession) -> Result<StatusCode, ApiError> {
        match auth_session.logout().await {
            Ok(_) => Ok(StatusCode::OK),
            Err(e) => {
                tracing::error!("Failed to log out user: {}", e);
                Err(ApiError::internal("Internal server error"))
            }
        }
    }
}

mod get {
    use axum::Json;

    use crate::{adapters::inbound::http::UserResponse, auth::AuthUser};

    pub async fn me(user: AuthUser) -> Json<UserResponse> {
        Json((*user).clone().into())
    }
}
