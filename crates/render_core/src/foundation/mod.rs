//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the scaffold:
//! - Math types for scene geometry and projections
//! - Caller-owned singleton slots for the factories
//! - Logging setup

pub mod logging;
pub mod math;
pub mod singleton;
