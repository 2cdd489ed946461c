//! HTTP access to the employee API.
//!
//! Requests are described by [`EmployeeRequest`] and sent with `gloo-net`. All
//! four operations fail the same way: an [`ApiError`] that the calling component
//! hands to [`report_failure`], which logs it and shows one error toast.

use common::requests::{EmployeeRequest, Method};
use gloo_console::{error, log};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::api_url;
use crate::notifications::{show_toast, ToastKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("no se pudo contactar al servidor ({0})")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("el servidor respondió {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body is not the expected JSON.
    #[error("respuesta inválida del servidor ({0})")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("no se pudo preparar la solicitud ({0})")]
    Encode(String),
}

/// Sends `request` and checks the status, leaving the body unread.
pub async fn execute(request: &EmployeeRequest) -> Result<Response, ApiError> {
    let url = api_url(&request.path());
    log!(format!("{} {}", request.method().as_str(), url));

    let builder = match request.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };

    let sent = match request.body() {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response)
}

/// Sends `request` and decodes the JSON response body.
pub async fn send<T: DeserializeOwned>(request: &EmployeeRequest) -> Result<T, ApiError> {
    execute(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Formats the single user-facing failure message used by every operation.
pub fn failure_message(action: &str, err: &ApiError) -> String {
    format!("Error al {}: {}", action, err)
}

/// Logs a failed request to the console and tells the user about it.
pub fn report_failure(action: &str, err: &ApiError) {
    error!(format!("Error al {}: {:?}", action, err));
    show_toast(&failure_message(action, err), ToastKind::Error);
}
