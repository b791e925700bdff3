//! Folio Core Types and Definitions
//!
//! This crate provides the foundational types for Folio schema diagrams.
//! It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Model**: The diagram data model rooted at [`model::DatabaseSchema`]
//! - **Draw**: Vector drawing instructions grouped by layer ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod model;
