//! Backend services.
//!
//! # Services
//!
//! - [`analyze`] - Resume analysis request to the ATS backend

pub mod analyze;

pub use analyze::*;
