//! carebook-client
//!
//! Typed HTTP client for the appointment service. One configured base
//! endpoint; every failure shape (transport error, non-success status,
//! malformed body) is normalized into [`ClientError`]. Requests are bounded
//! by a 10 second timeout and retried once on transport failure.

pub mod error;

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use carebook_core::models::{
    Appointment, AppointmentStatus, Evaluation, EvaluationType, SubmissionRequest,
    SubmissionResponse,
};

pub use error::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Health report from `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    pub backend: String,
    pub store: String,
}

/// Questionnaire listing entry from `GET /questionnaires`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    pub id: String,
    pub name: String,
    pub evaluation_type: EvaluationType,
}

/// Error body shape the server uses for every failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(serde::Serialize)]
struct StatusBody {
    status: AppointmentStatus,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against `base_url` (scheme + host + optional port, no
    /// trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(ApiClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        self.get_json("/health").await
    }

    pub async fn list_questionnaires(&self) -> Result<Vec<QuestionnaireSummary>, ClientError> {
        self.get_json("/questionnaires").await
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        self.get_json("/appointments").await
    }

    pub async fn list_evaluations(&self) -> Result<Vec<Evaluation>, ClientError> {
        self.get_json("/evaluations").await
    }

    /// Submit an intake form; returns the server-assigned ids.
    pub async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, ClientError> {
        let response = self
            .send(self.http.post(self.url("/appointments")).json(request))
            .await?;
        decode(response).await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<(), ClientError> {
        let url = self.url(&format!("/appointments/{id}/status"));
        let response = self
            .send(self.http.patch(url).json(&StatusBody { status }))
            .await?;
        check_status(response).await.map(drop)
    }

    pub async fn delete_appointment(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.url(&format!("/appointments/{id}"));
        let response = self.send(self.http.delete(url)).await?;
        check_status(response).await.map(drop)
    }

    pub async fn delete_evaluation(&self, id: Uuid) -> Result<(), ClientError> {
        let url = self.url(&format!("/evaluations/{id}"));
        let response = self.send(self.http.delete(url)).await?;
        check_status(response).await.map(drop)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        decode(response).await
    }

    /// Send with one retry on transport failure. Domain errors (any HTTP
    /// status) are returned to the caller untouched.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let retry = request.try_clone();
        match request.send().await {
            Ok(response) => Ok(response),
            Err(e) if is_transport(&e) => {
                let Some(retry) = retry else {
                    return Err(ClientError::Transport(e));
                };
                tracing::warn!("request failed ({e}), retrying once");
                retry.send().await.map_err(ClientError::Transport)
            }
            Err(e) => Err(ClientError::Transport(e)),
        }
    }
}

fn is_transport(e: &reqwest::Error) -> bool {
    e.is_connect() || e.is_timeout()
}

/// Map a non-success response to [`ClientError::Api`], pulling the message
/// out of the standard `{"error": ...}` body when the server sent one.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => canonical_reason(status),
    };
    tracing::warn!(status = status.as_u16(), %message, "request rejected");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn canonical_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    response.json().await.map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/appointments"), "http://localhost:3000/appointments");
    }

    #[test]
    fn api_error_displays_status_and_message() {
        let e = ClientError::Api {
            status: 404,
            message: "appointment not found: abc".to_string(),
        };
        assert_eq!(e.to_string(), "server error (404): appointment not found: abc");
        assert!(!e.is_transient());
    }
}
