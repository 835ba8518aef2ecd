//! Isosurface and isocontour extraction from caller-supplied scalar fields.
//!
//! [`marching_cubes`] walks a regular grid of cubes and emits a flat
//! triangle soup; [`marching_squares`] is the 2D analogue, emitting line
//! segments. [`compute_normals`] derives flat-shaded normals from the soup
//! and [`write_ply`]/[`export_ply`] serialise the result as an ASCII PLY
//! model for downstream renderers.

pub mod cubes;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod ply;
pub mod squares;
pub mod tables;
pub mod types;
pub mod utils;

pub use cubes::marching_cubes;
pub use error::{ExtractError, Result};
pub use grid::{GridBounds, Region};
pub use mesh::compute_normals;
pub use ply::{export_ply, write_ply};
pub use squares::marching_squares;
pub use types::{PlaneField, PlanePoint, Point, ScalarField, Value, Vector};
