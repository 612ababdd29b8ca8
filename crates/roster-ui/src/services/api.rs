//! HTTP client for the Roster REST endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use roster_api_models::{HealthStatus, NewUser, UserRecord};

use crate::core::backend::{
    BackendError, HEALTH_PATH, RosterBackend, USERS_PATH, decode_health,
};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<T, BackendError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(&response)?;
        response.json::<T>().await.map_err(|err| BackendError::Decode {
            message: err.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl RosterBackend for ApiClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, BackendError> {
        self.get_json(USERS_PATH).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError> {
        let response = Request::post(&self.url(USERS_PATH))
            .json(user)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(&response)
    }

    async fn fetch_health(&self) -> Result<HealthStatus, BackendError> {
        let response = Request::get(&self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(transport)?;
        let body = response.text().await.map_err(transport)?;
        decode_health(&body)
    }
}

fn ensure_ok(response: &Response) -> Result<(), BackendError> {
    if response.ok() {
        Ok(())
    } else {
        Err(BackendError::Status {
            status: response.status(),
        })
    }
}

fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Transport {
        message: err.to_string(),
    }
}
