use crate::{
    error::{ExtractError, Result},
    types::Value,
};

/// Axis-aligned, isotropic 3D sampling lattice.
///
/// Covers `[min, max]` on each axis with cells of edge length `stepsize`;
/// `floor((max - min) / stepsize)` cells are marched per axis, so a range
/// that does not divide evenly loses its partial final cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub min: Value,
    pub max: Value,
    pub stepsize: Value,
}

impl GridBounds {
    /// Validates and builds grid bounds.
    ///
    /// Returns [`ExtractError::InvalidStepSize`] unless `stepsize > 0`, and
    /// [`ExtractError::InvalidBounds`] unless `min <= max`.
    pub fn new(min: Value, max: Value, stepsize: Value) -> Result<Self> {
        if !(stepsize > 0.0) {
            return Err(ExtractError::InvalidStepSize { stepsize });
        }
        if min > max {
            return Err(ExtractError::InvalidBounds { min, max });
        }
        Ok(Self { min, max, stepsize })
    }

    /// Number of cells marched along each axis.
    pub fn steps(&self) -> usize {
        ((self.max - self.min) / self.stepsize) as usize
    }

    /// Lattice coordinate of cell `i` along one axis.
    #[inline]
    pub fn coord(&self, i: usize) -> Value {
        self.min + i as Value * self.stepsize
    }
}

/// Axis-aligned 2D sampling region for contour extraction.
///
/// Unlike [`GridBounds`], traversal accumulates floating-point coordinates
/// (`y += stepsize`) rather than counting cells, so the final row/column may
/// be partial or missing when the range does not divide evenly. Host
/// programs have historically relied on that traversal, so it is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_x: Value,
    pub max_x: Value,
    pub min_y: Value,
    pub max_y: Value,
    pub stepsize: Value,
}

impl Region {
    /// Validates and builds a sampling region.
    ///
    /// Returns [`ExtractError::InvalidStepSize`] unless `stepsize > 0`, and
    /// [`ExtractError::InvalidBounds`] unless each axis has `min <= max`.
    pub fn new(
        min_x: Value,
        max_x: Value,
        min_y: Value,
        max_y: Value,
        stepsize: Value,
    ) -> Result<Self> {
        if !(stepsize > 0.0) {
            return Err(ExtractError::InvalidStepSize { stepsize });
        }
        if min_x > max_x {
            return Err(ExtractError::InvalidBounds {
                min: min_x,
                max: max_x,
            });
        }
        if min_y > max_y {
            return Err(ExtractError::InvalidBounds {
                min: min_y,
                max: max_y,
            });
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            stepsize,
        })
    }

    /// Square region covering `[min, max]` on both axes.
    pub fn square(min: Value, max: Value, stepsize: Value) -> Result<Self> {
        Self::new(min, max, min, max, stepsize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonpositive_stepsize() {
        assert!(matches!(
            GridBounds::new(-1.0, 1.0, 0.0),
            Err(ExtractError::InvalidStepSize { .. })
        ));
        assert!(matches!(
            GridBounds::new(-1.0, 1.0, -0.5),
            Err(ExtractError::InvalidStepSize { .. })
        ));
        assert!(matches!(
            Region::square(-1.0, 1.0, Value::NAN),
            Err(ExtractError::InvalidStepSize { .. })
        ));
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(matches!(
            GridBounds::new(2.0, -2.0, 0.5),
            Err(ExtractError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Region::new(0.0, 1.0, 3.0, 2.0, 0.5),
            Err(ExtractError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn counts_whole_cells_only() {
        let bounds = GridBounds::new(-1.0, 1.0, 0.5).unwrap();
        assert_eq!(bounds.steps(), 4);

        // A range that doesn't divide evenly drops the partial cell.
        let bounds = GridBounds::new(0.0, 1.0, 0.3).unwrap();
        assert_eq!(bounds.steps(), 3);
    }

    #[test]
    fn coord_walks_the_lattice() {
        let bounds = GridBounds::new(-5.0, 5.0, 0.1).unwrap();
        assert_eq!(bounds.coord(0), -5.0);
        assert!((bounds.coord(10) - -4.0).abs() < 1e-6);
    }
}
