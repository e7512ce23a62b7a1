//! Metrogram Core Types and Layout
//!
//! This crate provides the foundational types for the Metrogram schematic
//! transit-map renderer. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The [`draw::Drawable`] trait, layered SVG output, and the
//!   shaped-text measurement service ([`draw`] module)
//! - **Label**: Name-offset resolution and multi-line / vertical label
//!   layout around a point anchor ([`label`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod label;
