//! Station Type Plugins for Schematic Transit Maps
//!
//! This crate provides the station-type plugin architecture on top of the
//! layout primitives in `metrogram-core`:
//!
//! - **Theme**: opaque theme tuples and picker metadata ([`theme`] module)
//! - **Station**: attribute records, pointer-event contracts, declarative
//!   editor fields, renderers, and the descriptor registry ([`station`]
//!   module)
//!
//! The outer canvas owns the placed stations (id, position, attribute bag).
//! For each one it looks up a [`station::StationDescriptor`] by type tag and
//! invokes the renderer with live pointer handlers; when a station is
//! selected, it opens an [`station::AttributeSession`] to drive the
//! side-panel form.

pub mod station;
pub mod theme;
