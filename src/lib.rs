// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene: GPU code casts between float/int widths constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

//! Minimal real-time 3D mesh viewer built on wgpu.
//!
//! Facet loads a triangle mesh from a Wavefront-OBJ-style text file,
//! deduplicates its vertices into an indexed buffer, and renders it under a
//! free-fly camera with a small animated light rig (one directional light,
//! four point lights, one camera-attached spot light).
//!
//! # Key entry points
//!
//! - [`engine::MeshViewEngine`] - the render engine (one instance owns all
//!   GPU and scene state; there are no process-wide globals)
//! - [`camera::core::Camera`] - free-fly camera orientation math
//! - [`mesh::loader`] - the mesh file parser
//! - [`options::Options`] - runtime configuration (camera, lighting,
//!   display) with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous: the mesh is parsed to
//! completion before the first frame, and the render loop is a cooperative
//! poll → update → draw → present cycle driven by the windowing layer
//! (behind the `viewer` feature). The camera and the mesh loader are
//! independent; both are consumed by the engine, which uploads the parsed
//! mesh to the GPU once at startup and re-derives the view matrix each
//! frame.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod lighting;
pub mod mesh;
pub mod options;
pub mod renderer;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::FacetError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
