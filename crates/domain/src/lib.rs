//! # firewatch-domain
//!
//! Pure domain model for the firewatch device dashboard.
//!
//! ## Responsibilities
//! - Define **Devices** (sensor units reported by the fire-alarm backend)
//! - Parse raw GPS text into an explicit [`location::Location`] result
//! - Derive **summary counts** (total, active, inactive)
//! - Compute the **map view** (center and marker) for a device
//! - Define the single **fetch error** kind surfaced by the dashboard
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod location;
pub mod map;
pub mod summary;
