pub mod reference;
pub mod utilization;

use crate::settings;
use gloo_net::http::Request;
use serde::Deserialize;

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Error Response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Common GET request handler. Endpoints return their payload as a bare
/// JSON document, no envelope.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error: {}", endpoint, err.error);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(payload)
}
