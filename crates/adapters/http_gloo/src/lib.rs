//! # firewatch-adapter-http-gloo
//!
//! HTTP adapter built on [gloo-net](https://docs.rs/gloo-net).
//!
//! ## Responsibilities
//! - Issue `GET` requests against the fixed fire-alarm backend base URL with a
//!   `Content-Type: application/json` header
//! - Decode JSON bodies and map failures into the domain `FetchError`
//! - Implement the `DeviceSource` port (`GET devices/`)
//!
//! No retries, no timeout policy, no auth. The base URL is a compile-time
//! constant.
//!
//! ## Dependency rule
//! Depends on `firewatch-app` (for the port trait) and `firewatch-domain`
//! (for the device and error types). Never leaks `gloo-net` types into the
//! domain.

pub mod client;
pub mod error;

pub use client::{BASE_URL, HttpClient};
pub use error::HttpError;
