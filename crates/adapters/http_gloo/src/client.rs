//! HTTP client bound to the fire-alarm backend.

use firewatch_app::ports::DeviceSource;
use firewatch_domain::device::Device;
use firewatch_domain::error::FetchError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Base address every request is resolved against.
pub const BASE_URL: &str = "https://fire-alarm-systems-back-end.onrender.com/api/";

/// Path of the device collection, relative to [`BASE_URL`].
pub const DEVICES_PATH: &str = "devices/";

const CONTENT_TYPE: &str = "application/json";

/// Preconfigured client for the backend API.
#[derive(Debug, Clone, Copy)]
pub struct HttpClient {
    base_url: &'static str,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self { base_url: BASE_URL }
    }
}

impl HttpClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `path` against the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        combine_url(self.base_url, path)
    }

    /// `GET <base><path>` and decode the JSON body.
    ///
    /// The `Content-Type: application/json` header is always sent, even
    /// though a GET carries no body. Browsers treat that header as
    /// non-simple, so every cross-origin call is preceded by a CORS preflight
    /// and the backend must answer `OPTIONS`. Clients that strip the header
    /// from body-less requests skip the preflight.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Gloo`] if the request fails or the body is not
    /// valid JSON for `T`, and [`HttpError::Status`] on a non-2xx response.
    #[tracing::instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.url(path);
        let resp = Request::get(&url)
            .header("Content-Type", CONTENT_TYPE)
            .send()
            .await?;
        let resp = check_response(resp)?;
        Ok(resp.json().await?)
    }
}

impl DeviceSource for HttpClient {
    async fn fetch_devices(&self) -> Result<Vec<Device>, FetchError> {
        let devices: Vec<Device> = self.get(DEVICES_PATH).await?;
        Ok(devices)
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, HttpError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(HttpError::Status {
        status: resp.status(),
        status_text: resp.status_text(),
    })
}

/// Join a base URL and a request path.
///
/// Absolute paths (`scheme://…` or `//…`) are returned unchanged and an empty
/// path yields the base. Otherwise slashes at the seam collapse into one.
fn combine_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    if is_absolute_url(path) {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    url.split_once("://").is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}
