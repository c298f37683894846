//! Template module - Pure text substitution for configuration artifacts
//!
//! This module provides a lightweight template engine that expands
//! `{{NAME}}` placeholders against a prebuilt variable map.
//!
//! ## Philosophy
//!
//! - **Flat substitution**: no sections, loops, partials, or comments
//! - **Injected variables**: the engine never reads the process environment;
//!   callers build a [`VarMap`] up front, which keeps rendering pure
//! - **Quiet on absence**: placeholders without a mapped value render as the
//!   empty string, never an error
//! - **All-or-nothing**: syntax errors abort the render, no partial output
//!
//! ## Syntax
//!
//! - Placeholders: `{{NAME}}` or `{{ NAME }}` (ASCII whitespace optional)
//! - Names: `[A-Za-z_][A-Za-z0-9_]*` (environment-variable style)
//! - Escape sequences: `\{{literal}}` keeps the braces; backslash runs
//!   in front of `{{` are halved
//! - Lone `{`, `}` and `}}` outside a placeholder are literal text

pub mod engine;
pub mod error;

pub use engine::{render, render_file, scan, TemplateEngine, VarMap};
pub use error::TemplateError;
