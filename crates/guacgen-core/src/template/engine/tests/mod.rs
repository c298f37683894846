//! Tests for template engine
//!
//! Organized into focused submodules: basic rendering, escape sequences,
//! error handling, and placeholder scanning.

use super::*;

// Test helper functions
mod helpers;

// Rendering tests
mod render_basic;
