use gloo_net::http::{Method, Request, RequestBuilder};
use gloo_net::Error;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use web_sys::FormData;

use crate::storage;

/* API base URL */
pub const BASE: &str = "http://localhost:3000/api";

/// Response envelope used by every backend endpoint. Success / failure is
/// decided on `statusCode`, not only on the HTTP status line.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/* Pre-configured request: base URL + bearer token when one is stored */
fn builder(method: Method, path: &str) -> RequestBuilder {
    let url = format!("{BASE}{path}");
    let builder = match method {
        Method::GET => Request::get(&url),
        Method::POST => Request::post(&url),
        Method::PUT => Request::put(&url),
        Method::DELETE => Request::delete(&url),
        _ => Request::get(&url),
    }
    .header("Accept", "application/json");

    match storage::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Generic JSON call.
pub async fn fetch_json<T, U>(
    method: Method,
    path: &str,
    body: Option<&T>,
) -> Result<ApiResponse<U>, Error>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let builder = builder(method, path);

    let resp = if let Some(b) = body {
        builder.json(b)?.send().await?
    } else {
        builder.send().await?
    };

    resp.json().await
}

/// Multipart POST / PUT (product create and update). The browser fills in
/// the multipart boundary, so no Content-Type is set here.
pub async fn send_form<U>(
    method: Method,
    path: &str,
    form: FormData,
) -> Result<ApiResponse<U>, Error>
where
    U: DeserializeOwned,
{
    let resp = builder(method, path).body(form)?.send().await?;
    resp.json().await
}

/// Absolute URL of an uploaded product image.
pub fn image_url(file: &str) -> String {
    format!("http://localhost:3000/{file}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_full_response() {
        let resp: ApiResponse<Vec<String>> = serde_json::from_str(
            r#"{"statusCode":200,"message":"ok","data":["a","b"]}"#,
        )
        .unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.data.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn envelope_tolerates_missing_message_and_data() {
        let resp: ApiResponse<()> = serde_json::from_str(r#"{"statusCode":401}"#).unwrap();
        assert_eq!(resp.status_code, 401);
        assert_eq!(resp.message_or("fallback"), "fallback");
        assert!(resp.data.is_none());
    }

    #[test]
    fn image_url_points_at_backend_root() {
        assert_eq!(
            image_url("uploads/mug.png"),
            "http://localhost:3000/uploads/mug.png"
        );
    }
}
