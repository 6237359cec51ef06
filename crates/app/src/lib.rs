//! # firewatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement:
//!   - `DeviceSource` — retrieve the device collection
//! - Hold the **dashboard state** (`Loading → Loaded | Failed`, map selection)
//! - Run the **mount lifecycle** (`DashboardService`): one fetch per mount
//! - Load the embedded **configuration** (map, theme, logging)
//!
//! ## Dependency rule
//! Depends on `firewatch-domain` only (plus `toml` for configuration).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod dashboard;
pub mod ports;
pub mod services;
