//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and operations
//! - Colors
//! - Procedural noise
//! - Logging utilities

pub mod math;
pub mod color;
pub mod noise;
pub mod logging;
