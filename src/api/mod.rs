//! Admin JSON API
//!
//! Fetch bindings to the admin's endpoints, organized by resource.

mod tasks;
mod team;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

// Re-export all public bindings
pub use tasks::*;
pub use team::*;

/// Mount path of the admin app when the host page does not override it
pub const DEFAULT_API_BASE: &str = "/admin/project";

/// Percent-encode a query-string value
pub(crate) fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// GET `url` and resolve the response body as JSON
pub(crate) async fn fetch_json(url: &str) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("request failed: {:?}", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|e| format!("unreadable body: {:?}", e))?;
    JsFuture::from(body)
        .await
        .map_err(|e| format!("invalid JSON body: {:?}", e))
}
