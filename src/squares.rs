use crate::{
    grid::Region,
    tables::{SEGMENT_TABLE, SQUARE_VERT_TABLE},
    types::{PlanePoint, Value},
    utils::square_config,
};

/// Extracts the isocontour of `field` at `isovalue` over `region` using
/// marching squares.
///
/// Returns a flat line-segment soup: 2 floats per endpoint, 4 per segment,
/// in traversal order (rows bottom to top, cells left to right) with the
/// case table's edge order within each cell. Squares whose corners are
/// uniformly inside or outside emit nothing; the two saddle configurations
/// emit two segments.
///
/// Traversal accumulates floating-point coordinates, matching [`Region`]'s
/// documented partial-final-cell behaviour.
#[tracing::instrument(skip(field))]
pub fn marching_squares<F>(field: F, isovalue: Value, region: &Region) -> Vec<Value>
where
    F: Fn(PlanePoint) -> Value,
{
    let s = region.stepsize;
    let mut vertices: Vec<Value> = Vec::new();
    let mut cells = 0usize;

    let mut y = region.min_y;
    while y < region.max_y {
        let mut x = region.min_x;
        while x < region.max_x {
            let tl = field(PlanePoint::new(x, y + s));
            let tr = field(PlanePoint::new(x + s, y + s));
            let br = field(PlanePoint::new(x + s, y));
            let bl = field(PlanePoint::new(x, y));

            let config = square_config(tl, tr, br, bl, isovalue);
            debug_assert!(config < SEGMENT_TABLE.len(), "5th corner bit set");
            let edges = &SEGMENT_TABLE[config];

            if edges[0] >= 0 {
                push_segment(&mut vertices, edges[0] as usize, edges[1] as usize, x, y, s);
            }
            if edges[2] >= 0 {
                push_segment(&mut vertices, edges[2] as usize, edges[3] as usize, x, y, s);
            }

            cells += 1;
            x += s;
        }
        y += s;
    }

    log::debug!(
        "marching squares over {cells} cells emitted {} segments",
        vertices.len() / 4
    );
    vertices
}

/// Emits one segment between the midpoints of square edges `e0` and `e1`,
/// for the cell with origin `(x, y)`.
#[inline]
fn push_segment(vertices: &mut Vec<Value>, e0: usize, e1: usize, x: Value, y: Value, s: Value) {
    for e in [e0, e1] {
        vertices.push(x + SQUARE_VERT_TABLE[e][0] * s);
        vertices.push(y + SQUARE_VERT_TABLE[e][1] * s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn circle(p: PlanePoint) -> Value {
        p.x * p.x + p.y * p.y
    }

    #[test]
    fn constant_field_emits_nothing() {
        let region = Region::square(-1.0, 1.0, 0.5).unwrap();
        assert!(marching_squares(|_| 10.0, 1.0, &region).is_empty());
        assert!(marching_squares(|_| -10.0, 1.0, &region).is_empty());
    }

    #[test]
    fn circle_contour_is_a_closed_ring() {
        let region = Region::square(-2.0, 2.0, 0.5).unwrap();
        let vertices = marching_squares(circle, 1.0, &region);

        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 4, 0);

        // Midpoint placement puts shared endpoints of adjacent cells at the
        // same coordinates, so a closed contour has every endpoint appearing
        // exactly twice.
        let mut counts: HashMap<(i64, i64), usize> = HashMap::new();
        for endpoint in vertices.chunks_exact(2) {
            let key = (
                (endpoint[0] * 1024.0).round() as i64,
                (endpoint[1] * 1024.0).round() as i64,
            );
            *counts.entry(key).or_default() += 1;
        }
        assert!(counts.values().all(|&n| n == 2), "contour is not closed");
    }

    #[test]
    fn circle_emits_one_segment_per_straddling_cell() {
        let region = Region::square(-2.0, 2.0, 0.5).unwrap();
        let vertices = marching_squares(circle, 1.0, &region);

        // Count cells whose corner signs are mixed; none of them is a
        // saddle for this field, so segments == straddling cells.
        let s = 0.5;
        let mut straddling = 0;
        let mut y = -2.0;
        while y < 2.0 {
            let mut x = -2.0;
            while x < 2.0 {
                let config = square_config(
                    circle(PlanePoint::new(x, y + s)),
                    circle(PlanePoint::new(x + s, y + s)),
                    circle(PlanePoint::new(x + s, y)),
                    circle(PlanePoint::new(x, y)),
                    1.0,
                );
                if config != 0 && config != 15 {
                    assert!(config != 5 && config != 10);
                    straddling += 1;
                }
                x += s;
            }
            y += s;
        }
        assert_eq!(vertices.len() / 4, straddling);
    }

    #[test]
    fn saddle_cell_emits_two_segments() {
        // One cell with opposite corners inside: config TL|BR = 10.
        let region = Region::square(0.0, 1.0, 1.0).unwrap();
        let field = |p: PlanePoint| {
            let tl = p.x == 0.0 && p.y == 1.0;
            let br = p.x == 1.0 && p.y == 0.0;
            if tl || br { -1.0 } else { 1.0 }
        };
        let vertices = marching_squares(field, 0.0, &region);
        assert_eq!(vertices.len(), 8);
    }

    #[test]
    fn accepts_field_trait_objects() {
        let region = Region::square(-2.0, 2.0, 0.5).unwrap();
        let field: &crate::types::PlaneField = &circle;
        assert_eq!(
            marching_squares(field, 1.0, &region),
            marching_squares(circle, 1.0, &region)
        );
    }

    #[test]
    fn extraction_is_deterministic() {
        let region = Region::square(-2.0, 2.0, 0.3).unwrap();
        let a = marching_squares(circle, 1.0, &region);
        let b = marching_squares(circle, 1.0, &region);
        assert_eq!(a, b);
    }
}
