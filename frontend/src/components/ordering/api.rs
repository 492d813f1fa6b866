//! Outbound calls to the order backend.

use common::model::order::Order;
use common::order::SubmitError;
use gloo_net::http::Request;

/// POSTs `order` as JSON to `endpoint`.
///
/// Network failures and non-2xx answers are both errors; the response body
/// is never read.
pub async fn post_order(endpoint: &str, order: &Order) -> Result<(), SubmitError> {
    let request = Request::post(endpoint)
        .json(order)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}
