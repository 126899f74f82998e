//! # Knob Builder
//!
//! Turns a validated parameter record into a single printable knob solid.
//!
//! ## Architecture
//!
//! ```text
//! KnobParams → assembler (primitives + boolean ops) → Mesh
//! ```
//!
//! The pipeline is a fixed sequence: base cylinder, optional outer
//! ridges, optional top indent, optional shaft bore. Every feature is
//! combined with true boolean CSG; there is no buffer-concatenation
//! fallback. Either a complete solid is returned or an error is - never
//! a half-constructed mesh.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use knob_builder::{build_knob, KnobParams};
//!
//! let solid = build_knob(&KnobParams::default())?;
//! assert!(!solid.is_empty());
//! ```

pub mod assembler;
pub mod error;
pub mod features;
pub mod params;

pub use assembler::{build_knob, build_knob_with, build_many};
pub use error::KnobError;
pub use params::{KnobParams, ShaftKind};
