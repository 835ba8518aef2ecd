use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    grid::GridBounds,
    tables::TRI_TABLE,
    types::{Point, Value},
    utils::{cell_corners, cube_config, edge_vertex},
};

/// Extracts the isosurface of `field` at `isovalue` over `bounds` using
/// marching cubes.
///
/// Returns a flat triangle soup: 3 floats per vertex, 9 per triangle, in
/// grid traversal order (outer x, middle y, inner z) with the case table's
/// edge order within each cell. Cells whose corners are uniformly inside or
/// outside the surface emit nothing, so a field that never crosses the
/// isovalue yields an empty buffer.
///
/// The walk is partitioned by outer axis across the rayon thread pool and
/// per-slice buffers are concatenated in grid order, so the output is
/// identical to a serial pass. The field is re-evaluated at all 8 corners
/// of every cell; nothing is cached between calls.
///
/// The field must be defined everywhere in the sampled volume. Corners that
/// evaluate to NaN compare false against the isovalue and resolve to
/// "outside"; that cell still produces deterministic (if not meaningful)
/// geometry.
#[tracing::instrument(skip(field))]
pub fn marching_cubes<F>(field: F, isovalue: Value, bounds: &GridBounds) -> Vec<Value>
where
    F: Fn(Point) -> Value + Sync,
{
    let nsteps = bounds.steps();
    let stepsize = bounds.stepsize;

    let slices: Vec<Vec<Value>> = (0..nsteps)
        .into_par_iter()
        .map(|i| {
            let x0 = bounds.coord(i);
            let mut local: Vec<Value> = Vec::new();

            for j in 0..nsteps {
                let y0 = bounds.coord(j);
                for k in 0..nsteps {
                    let z0 = bounds.coord(k);

                    let values = cell_corners(x0, y0, z0, stepsize).map(&field);
                    let config = cube_config(&values, isovalue);

                    for edge in TRI_TABLE[config].iter().take_while(|&&e| e != -1) {
                        local.extend(edge_vertex(*edge as usize, x0, y0, z0, stepsize));
                    }
                }
            }
            local
        })
        .collect();

    // Merge per-slice buffers into one soup, preserving grid order.
    let total: usize = slices.iter().map(|s| s.len()).sum();
    let mut vertices = Vec::with_capacity(total);
    for mut slice in slices {
        vertices.append(&mut slice);
    }

    log::debug!(
        "marching cubes over {nsteps}^3 cells emitted {} triangles",
        vertices.len() / 9
    );
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere(p: Point) -> Value {
        p.x * p.x + p.y * p.y + p.z * p.z
    }

    #[test]
    fn constant_field_above_isovalue_emits_nothing() {
        let bounds = GridBounds::new(-1.0, 1.0, 0.5).unwrap();
        let vertices = marching_cubes(|_| 10.0, 1.0, &bounds);
        assert!(vertices.is_empty());
    }

    #[test]
    fn constant_field_below_isovalue_emits_nothing() {
        let bounds = GridBounds::new(-1.0, 1.0, 0.5).unwrap();
        let vertices = marching_cubes(|_| -10.0, 1.0, &bounds);
        assert!(vertices.is_empty());
    }

    #[test]
    fn sphere_emits_whole_triangles() {
        let bounds = GridBounds::new(-2.0, 2.0, 0.25).unwrap();
        let vertices = marching_cubes(sphere, 1.0, &bounds);
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 9, 0);
    }

    #[test]
    fn sphere_vertices_stay_near_the_surface() {
        let step = 0.25;
        let bounds = GridBounds::new(-2.0, 2.0, step).unwrap();
        let vertices = marching_cubes(sphere, 1.0, &bounds);

        // Midpoint placement keeps every vertex within one cell diagonal of
        // the unit sphere.
        let tolerance = step * 3f32.sqrt();
        for v in vertices.chunks_exact(3) {
            let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!(
                (r - 1.0).abs() <= tolerance,
                "vertex ({}, {}, {}) has radius {r}",
                v[0],
                v[1],
                v[2]
            );
        }
    }

    #[test]
    fn refinement_never_loses_triangles() {
        let mut last = 0;
        for step in [0.5, 0.25, 0.125] {
            let bounds = GridBounds::new(-2.0, 2.0, step).unwrap();
            let count = marching_cubes(sphere, 1.0, &bounds).len() / 9;
            assert!(
                count >= last,
                "step {step} produced {count} triangles, fewer than {last}"
            );
            last = count;
        }
        assert!(last > 0);
    }

    #[test]
    fn accepts_field_trait_objects() {
        // Host programs hand fields around as `&ScalarField`; the extractor
        // must take the trait object as readily as a closure.
        let bounds = GridBounds::new(-2.0, 2.0, 0.5).unwrap();
        let field: &crate::types::ScalarField = &sphere;
        assert_eq!(
            marching_cubes(field, 1.0, &bounds),
            marching_cubes(sphere, 1.0, &bounds)
        );
    }

    #[test]
    fn extraction_is_deterministic() {
        let bounds = GridBounds::new(-2.0, 2.0, 0.25).unwrap();
        let a = marching_cubes(sphere, 1.0, &bounds);
        let b = marching_cubes(sphere, 1.0, &bounds);
        assert_eq!(a, b);
    }

    #[test]
    fn nan_cells_do_not_panic() {
        let bounds = GridBounds::new(-1.0, 1.0, 0.5).unwrap();
        let field = |p: Point| if p.x < 0.0 { Value::NAN } else { sphere(p) };
        let a = marching_cubes(field, 1.0, &bounds);
        let b = marching_cubes(field, 1.0, &bounds);
        assert_eq!(a, b);
    }

    #[test]
    fn single_inside_corner_emits_one_triangle() {
        // One cell; only corner 0 (the cell origin) is below the isovalue.
        let bounds = GridBounds::new(0.0, 1.0, 1.0).unwrap();
        let field = |p: Point| {
            if p == Point::new(0.0, 0.0, 0.0) {
                -1.0
            } else {
                1.0
            }
        };
        let vertices = marching_cubes(field, 0.0, &bounds);

        // Config 1 is the row [0, 8, 3]: midpoints of the three edges that
        // meet at corner 0.
        assert_eq!(vertices.len(), 9);
        assert_relative_eq!(vertices[0], 0.5); // edge 0: (0.5, 0, 0)
        assert_relative_eq!(vertices[1], 0.0);
        assert_relative_eq!(vertices[2], 0.0);
        assert_relative_eq!(vertices[3], 0.0); // edge 8: (0, 0.5, 0)
        assert_relative_eq!(vertices[4], 0.5);
        assert_relative_eq!(vertices[5], 0.0);
        assert_relative_eq!(vertices[6], 0.0); // edge 3: (0, 0, 0.5)
        assert_relative_eq!(vertices[7], 0.0);
        assert_relative_eq!(vertices[8], 0.5);
    }
}
