use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, AuthUser, LoginRequest, PortalConfig};

/// Thin JSON client for the portal REST API. Every failure comes back as an
/// [`AppError`] so pages can show `message` and `field_errors` directly.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: Rc<PortalConfig>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: Rc<PortalConfig>) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// The signed-in user, or `None` when the API says there is none (401).
    pub async fn current_session(&self) -> Result<Option<AuthUser>, AppError> {
        match self.get_json::<AuthUser>("/auth/me").await {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.status_code_u16() == 401 => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthUser, AppError> {
        self.post_json("/auth/login", request).await
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.url("/auth/logout"))
            .send()
            .await
            .map_err(network_error)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from(response).await)
        }
    }
}

fn network_error(err: reqwest::Error) -> AppError {
    tracing::warn!(error = %err, "api request failed");
    AppError::network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(error_from(response).await);
    }
    let body = response.text().await.map_err(network_error)?;
    Ok(serde_json::from_str(&body)?)
}

/// Prefer the structured error the API embeds in the body; otherwise build
/// one from the status code.
async fn error_from(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_server_error(&body)
        .unwrap_or_else(|| AppError::from_status(status, format!("request failed ({status})")));
    tracing::debug!(status, kind = %err.kind, "api error response");
    err
}
