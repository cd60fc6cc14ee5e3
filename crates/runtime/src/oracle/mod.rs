//! Runtime wrappers around static enemy content.
//!
//! The data is immutable at runtime; per-enemy state lives in each enemy's
//! executor and body.
mod templates;

pub use templates::TemplateRegistry;
