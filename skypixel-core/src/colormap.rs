//! Matplotlib-style viridis colormap for rendering grids as raster output.

use ndarray::Array2;

/// Viridis control points, sampled evenly over [0, 1].
const VIRIDIS: [[u8; 3]; 10] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 73, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [110, 206, 88],
    [181, 222, 43],
    [253, 231, 37],
];

/// Map a normalized value in [0, 1] to an RGB triple. Values outside the
/// range are clamped.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let idx = scaled.floor() as usize;
    let frac = scaled - idx as f64;

    let lo = VIRIDIS[idx];
    let hi = VIRIDIS[(idx + 1).min(VIRIDIS.len() - 1)];

    [0, 1, 2].map(|k| {
        let v = f64::from(lo[k]) + (f64::from(hi[k]) - f64::from(lo[k])) * frac;
        v.round() as u8
    })
}

/// Rescale a grid to [0, 1] over its finite min/max. A constant (or fully
/// non-finite) grid maps to all zeros rather than dividing by zero.
pub fn normalize(grid: &Array2<f64>) -> Array2<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &v in grid.iter() {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !min.is_finite() || max <= min {
        return Array2::zeros(grid.raw_dim());
    }

    let span = max - min;
    grid.mapv(|v| if v.is_finite() { ((v - min) / span).clamp(0.0, 1.0) } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn endpoints_match_the_palette() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.5), viridis(1.0));
        assert_eq!(viridis(f64::NAN), viridis(0.0));
    }

    #[test]
    fn midpoints_interpolate_between_control_points() {
        // Halfway between the first two control points.
        let t = 0.5 / (VIRIDIS.len() - 1) as f64;
        assert_eq!(viridis(t), [70, 21, 102]);
    }

    #[test]
    fn normalize_rescales_to_unit_range() {
        let grid = array![[2.0, 4.0], [6.0, 10.0]];
        let norm = normalize(&grid);

        assert_eq!(norm[[0, 0]], 0.0);
        assert_eq!(norm[[1, 1]], 1.0);
        assert_eq!(norm[[0, 1]], 0.25);
    }

    #[test]
    fn constant_grid_normalizes_without_dividing_by_zero() {
        let grid = Array2::from_elem((3, 3), 5.0);
        let norm = normalize(&grid);

        assert!(norm.iter().all(|&v| v == 0.0));
    }
}
