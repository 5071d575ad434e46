use async_trait::async_trait;
use fitplan_model::{plan::PlanResult, profile::Profile};
use log::debug;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request: {0}")]
    RequestError(String),
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn predict(&self, profile: &Profile) -> Result<PlanResult>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

#[async_trait]
impl Client for ClientImpl {
    async fn predict(&self, profile: &Profile) -> Result<PlanResult> {
        debug!("Requesting plan from {}", self.url);
        let resp = self
            .client
            .post(&self.url)
            .json(profile)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        let status = resp.status();
        if status.is_client_error() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(Error::RequestError(message));
        } else if status.is_server_error() {
            return Err(Error::InternalServerError);
        }

        resp.json().await.map_err(|_| Error::ResponseError)
    }
}
