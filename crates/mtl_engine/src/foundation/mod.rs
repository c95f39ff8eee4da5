//! Foundation module - Core utilities and types
//!
//! This module provides the small set of shared utilities the parser builds on:
//! - Math types used for colors
//! - Logging setup

pub mod math;
pub mod logging;
