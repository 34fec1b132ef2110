//! linrgb - interactive sRGB to linear RGB converter
//!
//! This library exposes the session procedures for integration testing.

pub mod error;
pub mod session;
