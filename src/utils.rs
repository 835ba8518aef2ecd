use crate::{
    tables::{BOTTOM_LEFT, BOTTOM_RIGHT, CORNER_OFFSETS, TOP_LEFT, TOP_RIGHT, VERT_TABLE},
    types::{Point, Value},
};

/// Returns the 8 world-space corner positions of the cell with origin
/// `(x0, y0, z0)` and edge length `stepsize`.
///
/// Corners follow the ordering of [`CORNER_OFFSETS`], which the cube case
/// table depends on.
#[inline]
pub fn cell_corners(x0: Value, y0: Value, z0: Value, stepsize: Value) -> [Point; 8] {
    CORNER_OFFSETS.map(|[dx, dy, dz]| {
        Point::new(x0 + dx * stepsize, y0 + dy * stepsize, z0 + dz * stepsize)
    })
}

/// Computes the marching cubes configuration index for a cell.
///
/// Bit `i` is set when corner `i`'s value is **strictly below** the isovalue.
/// Values equal to the isovalue count as outside, and NaN compares false so
/// a NaN corner also resolves to outside.
///
/// ```text
/// corner index:  7  6  5  4  3  2  1  0
/// config bits:  [_][_][_][_][_][_][_][_]
///                                     ^-- corner 0 inside?
/// ```
#[inline]
pub fn cube_config(values: &[Value; 8], isovalue: Value) -> usize {
    let mut config = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < isovalue {
            config |= 1 << i;
        }
    }
    config
}

/// Computes the marching squares configuration index from the four corner
/// samples, using the named corner bits.
#[inline]
pub fn square_config(tl: Value, tr: Value, br: Value, bl: Value, isovalue: Value) -> usize {
    let mut config = 0;
    if tl < isovalue {
        config |= TOP_LEFT;
    }
    if tr < isovalue {
        config |= TOP_RIGHT;
    }
    if br < isovalue {
        config |= BOTTOM_RIGHT;
    }
    if bl < isovalue {
        config |= BOTTOM_LEFT;
    }
    config
}

/// World-space position of the crossing vertex on cube edge `edge`, for the
/// cell with origin `(x0, y0, z0)`.
///
/// Vertices sit on the edge midpoints given by [`VERT_TABLE`], scaled by the
/// step size — no interpolation against the field values.
#[inline]
pub fn edge_vertex(edge: usize, x0: Value, y0: Value, z0: Value, stepsize: Value) -> [Value; 3] {
    let [ex, ey, ez] = VERT_TABLE[edge];
    [
        x0 + ex * stepsize,
        y0 + ey * stepsize,
        z0 + ez * stepsize,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_inside_sets_every_bit() {
        assert_eq!(cube_config(&[-1.0; 8], 0.0), 255);
        assert_eq!(square_config(-1.0, -1.0, -1.0, -1.0, 0.0), 15);
    }

    #[test]
    fn all_outside_sets_no_bits() {
        assert_eq!(cube_config(&[1.0; 8], 0.0), 0);
        assert_eq!(square_config(1.0, 1.0, 1.0, 1.0, 0.0), 0);
    }

    #[test]
    fn boundary_values_count_as_outside() {
        // Strict less-than: a corner exactly at the isovalue stays outside.
        assert_eq!(cube_config(&[0.0; 8], 0.0), 0);
    }

    #[test]
    fn nan_corners_count_as_outside() {
        let mut values = [-1.0; 8];
        values[3] = Value::NAN;
        assert_eq!(cube_config(&values, 0.0), 255 & !(1 << 3));
    }

    #[test]
    fn square_bits_match_corner_names() {
        assert_eq!(square_config(-1.0, 1.0, 1.0, 1.0, 0.0), TOP_LEFT);
        assert_eq!(square_config(1.0, -1.0, 1.0, 1.0, 0.0), TOP_RIGHT);
        assert_eq!(square_config(1.0, 1.0, -1.0, 1.0, 0.0), BOTTOM_RIGHT);
        assert_eq!(square_config(1.0, 1.0, 1.0, -1.0, 0.0), BOTTOM_LEFT);
    }

    #[test]
    fn edge_vertex_scales_and_translates() {
        // Edge 0 is the bottom-front edge midpoint (0.5, 0, 0).
        assert_eq!(edge_vertex(0, 1.0, 2.0, 3.0, 2.0), [2.0, 2.0, 3.0]);
    }
}
