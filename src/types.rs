use nalgebra::{Point2, Point3, Vector3};

/// Scalar field value at a point in space.
pub type Value = f32;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 2D point with [`Value`] components.
pub type PlanePoint = Point2<Value>;

/// A 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// A 3D scalar field function: maps a [`Point`] to a [`Value`].
///
/// Return values **strictly below** the isovalue are considered "inside" the
/// surface. `Sync` so grid slices can be marched on worker threads.
pub type ScalarField = dyn Fn(Point) -> Value + Sync;

/// A 2D scalar field function: maps a [`PlanePoint`] to a [`Value`].
pub type PlaneField = dyn Fn(PlanePoint) -> Value;
