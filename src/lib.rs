//! lifelines: deterministic dual-line relationship timeline engine.
//!
//! This crate turns a fetched story sequence into a fully materialized render
//! description (two smooth spline paths, colored event markers, labels, a
//! dashed center axis) and drives playback through the sequence on a single
//! cancellable, dt-stepped timer. Rendering backends, network fetch, and
//! celebratory effects are external collaborators behind small traits.

pub mod api;
pub mod core;
pub mod error;
pub mod playback;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
