use crate::{
    error::{ExtractError, Result},
    types::{Value, Vector},
};

/// Computes flat-shaded normals for a triangle soup.
///
/// `vertices` must hold 9 floats per triangle (the layout produced by
/// [`marching_cubes`](crate::cubes::marching_cubes)); anything else is
/// rejected with [`ExtractError::PartialTriangle`]. The returned buffer is
/// the same length as the input, with each triangle's face normal
/// `normalize((v1 - v0) × (v2 - v0))` written to all three of its vertex
/// slots. Triangles sharing a position get independent normals; there is no
/// smoothing.
///
/// A zero-area triangle has a zero-length cross product, so its normal
/// comes out non-finite. That is propagated as-is rather than patched over.
pub fn compute_normals(vertices: &[Value]) -> Result<Vec<Value>> {
    if vertices.len() % 9 != 0 {
        return Err(ExtractError::PartialTriangle {
            len: vertices.len(),
        });
    }

    let mut normals = Vec::with_capacity(vertices.len());
    for tri in vertices.chunks_exact(9) {
        let v0 = Vector::new(tri[0], tri[1], tri[2]);
        let v1 = Vector::new(tri[3], tri[4], tri[5]);
        let v2 = Vector::new(tri[6], tri[7], tri[8]);

        let normal = (v1 - v0).cross(&(v2 - v0)).normalize();
        for _ in 0..3 {
            normals.extend([normal.x, normal.y, normal.z]);
        }
    }
    Ok(normals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cubes::marching_cubes, grid::GridBounds, types::Point};
    use approx::assert_relative_eq;

    #[test]
    fn rejects_partial_triangles() {
        assert!(matches!(
            compute_normals(&[0.0; 7]),
            Err(ExtractError::PartialTriangle { len: 7 })
        ));
    }

    #[test]
    fn empty_soup_yields_empty_normals() {
        assert!(compute_normals(&[]).unwrap().is_empty());
    }

    #[test]
    fn follows_the_winding_convention() {
        // Triangle in the XY plane, counter-clockwise seen from +Z.
        let tri = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let normals = compute_normals(&tri).unwrap();
        assert_eq!(normals.len(), 9);
        for n in normals.chunks_exact(3) {
            assert_relative_eq!(n[0], 0.0);
            assert_relative_eq!(n[1], 0.0);
            assert_relative_eq!(n[2], 1.0);
        }
    }

    #[test]
    fn planar_patch_has_parallel_normals() {
        // f = y crosses iso 0 on the plane y = 0; every emitted triangle is
        // coplanar, so all normals must be parallel (up to sign).
        let bounds = GridBounds::new(-2.0, 2.0, 0.5).unwrap();
        let vertices = marching_cubes(|p: Point| p.y, 0.0, &bounds);
        assert!(!vertices.is_empty());

        let normals = compute_normals(&vertices).unwrap();
        for n in normals.chunks_exact(3) {
            assert_relative_eq!(n[0], 0.0, epsilon = 1e-6);
            assert_relative_eq!(n[1].abs(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(n[2], 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn degenerate_triangle_yields_nonfinite_normal() {
        let tri = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let normals = compute_normals(&tri).unwrap();
        assert!(normals.iter().all(|n| !n.is_finite()));
    }
}
