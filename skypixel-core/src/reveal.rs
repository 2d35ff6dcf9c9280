//! Decoding pipeline for the scrambled image: load a flat NPY array,
//! reshape it into a square grid, rotate it clockwise.

use std::{fs::File, io::ErrorKind, path::Path};

use ndarray::{Array1, Array2};
use ndarray_npy::ReadNpyExt;
use tracing::debug;

use crate::error::RevealError;

/// Side length of the decoded grid. The encoded file must hold exactly
/// `GRID_SIDE * GRID_SIDE` elements.
pub const GRID_SIDE: usize = 100;

/// Read the flat encoded array from an NPY file.
pub fn load_encoded(path: impl AsRef<Path>) -> Result<Array1<f64>, RevealError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RevealError::FileNotFound { path: path.to_path_buf() },
        _ => RevealError::Io(err),
    })?;

    let flat = Array1::<f64>::read_npy(file)?;
    debug!(path = %path.display(), elements = flat.len(), "loaded encoded array");

    Ok(flat)
}

/// Reshape the flat buffer into a `GRID_SIDE` x `GRID_SIDE` grid, row-major.
pub fn decode(flat: Array1<f64>) -> Result<Array2<f64>, RevealError> {
    let actual = flat.len();

    flat.into_shape_with_order((GRID_SIDE, GRID_SIDE)).map_err(|_| RevealError::ShapeMismatch {
        side: GRID_SIDE,
        expected: GRID_SIDE * GRID_SIDE,
        actual,
    })
}

/// Rotate a grid 90 degrees clockwise: `output[r][c] = input[N-1-c][r]`,
/// so the top row of the input becomes the right column of the output.
pub fn rotate_cw(grid: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((cols, rows), |(r, c)| grid[[rows - 1 - c, r]])
}

/// Full pipeline: load, reshape, rotate. No render happens on failure.
pub fn reveal(path: impl AsRef<Path>) -> Result<Array2<f64>, RevealError> {
    let flat = load_encoded(path)?;
    let grid = decode(flat)?;
    Ok(rotate_cw(&grid))
}
