//! Truecolor terminal raster for decoded grids.
//!
//! Each text row carries two grid rows via the upper half block, with the
//! top pixel on the foreground and the bottom pixel on the background. No
//! axes, no ticks, no decoration.

use crossterm::style::{Color, Stylize};
use ndarray::Array2;
use skypixel_core::colormap;

const HALF_BLOCK: &str = "\u{2580}"; // ▀

/// Render a grid to an ANSI-colored string, one half-block per pixel pair.
pub fn render_to_string(grid: &Array2<f64>) -> String {
    let norm = colormap::normalize(grid);
    let (rows, cols) = norm.dim();

    let mut out = String::new();
    let mut r = 0;
    while r < rows {
        for c in 0..cols {
            let top = rgb(colormap::viridis(norm[[r, c]]));
            let bottom = if r + 1 < rows {
                rgb(colormap::viridis(norm[[r + 1, c]]))
            } else {
                // Odd row count: repeat the last row.
                top
            };

            out.push_str(&HALF_BLOCK.with(top).on(bottom).to_string());
        }
        out.push('\n');
        r += 2;
    }

    out
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn two_grid_rows_collapse_into_one_text_row() {
        let grid = Array2::from_shape_fn((100, 100), |(r, c)| (r * 100 + c) as f64);
        let rendered = render_to_string(&grid);

        assert_eq!(rendered.lines().count(), 50);
        assert!(rendered.contains(HALF_BLOCK));
    }

    #[test]
    fn odd_row_count_still_renders() {
        let grid = Array2::from_elem((3, 4), 1.0);
        let rendered = render_to_string(&grid);

        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn every_cell_becomes_exactly_one_glyph() {
        let grid = Array2::from_elem((2, 7), 0.5);
        let rendered = render_to_string(&grid);

        assert_eq!(rendered.matches(HALF_BLOCK).count(), 7);
    }
}
