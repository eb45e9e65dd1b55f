use super::surface::{Color, RenderSurface};
use crate::game::GameConfig;

/// A [`RenderSurface`] that rasterises onto the cell grid.
///
/// Every cell holds the colour of the last rectangle covering it, plus a
/// flag for grid lines crossing it. Anything outside the canvas is clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    cell_size: i32,
    width: i32,
    height: i32,
    columns: usize,
    rows: usize,
    fills: Vec<Option<Color>>,
    lines: Vec<Option<Color>>,
}

impl PixelCanvas {
    pub fn new(config: &GameConfig) -> Self {
        let columns = config.columns().max(0) as usize;
        let rows = config.rows().max(0) as usize;
        Self {
            cell_size: config.cell_size,
            width: config.canvas_width,
            height: config.canvas_height,
            columns,
            rows,
            fills: vec![None; columns * rows],
            lines: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Fill colour of a cell, `None` if nothing was drawn there since the
    /// last clear
    pub fn fill_at(&self, column: usize, row: usize) -> Option<Color> {
        self.index(column, row).and_then(|i| self.fills[i])
    }

    /// Colour of a grid line crossing a cell, if any is visible there
    pub fn line_at(&self, column: usize, row: usize) -> Option<Color> {
        self.index(column, row).and_then(|i| self.lines[i])
    }

    fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }

    /// Index of the cell containing a pixel, if the pixel is on the canvas
    fn cell_of(&self, x: i128, y: i128) -> Option<usize> {
        if x < 0 || y < 0 || x >= i128::from(self.width) || y >= i128::from(self.height) {
            return None;
        }
        let cell = i128::from(self.cell_size);
        self.index((x / cell) as usize, (y / cell) as usize)
    }
}

/// `value / divisor` rounded up, for non-negative `value`
fn ceil_div(value: i32, divisor: i32) -> i32 {
    value / divisor + i32::from(value % divisor != 0)
}

impl RenderSurface for PixelCanvas {
    fn clear(&mut self) {
        self.fills.fill(None);
        self.lines.fill(None);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        let left = x.max(0);
        let top = y.max(0);
        let right = x.saturating_add(width).min(self.width);
        let bottom = y.saturating_add(height).min(self.height);
        if left >= right || top >= bottom {
            return;
        }

        let first_col = (left / self.cell_size) as usize;
        let first_row = (top / self.cell_size) as usize;
        let last_col = ceil_div(right, self.cell_size) as usize;
        let last_row = ceil_div(bottom, self.cell_size) as usize;

        for row in first_row..last_row.min(self.rows) {
            for column in first_col..last_col.min(self.columns) {
                let i = row * self.columns + column;
                self.fills[i] = Some(color);
                self.lines[i] = None;
            }
        }
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let (x1, y1, x2, y2) = (i128::from(x1), i128::from(y1), i128::from(x2), i128::from(y2));
        let (dx, dy) = (x2 - x1, y2 - y1);

        // Walk the major axis, only over the part that lies on the canvas
        let points: Vec<(i128, i128)> = if dx == 0 && dy == 0 {
            vec![(x1, y1)]
        } else if dx.abs() >= dy.abs() {
            let first = x1.min(x2).max(0);
            let last = x1.max(x2).min(i128::from(self.width) - 1);
            (first..=last).map(|x| (x, y1 + dy * (x - x1) / dx)).collect()
        } else {
            let first = y1.min(y2).max(0);
            let last = y1.max(y2).min(i128::from(self.height) - 1);
            (first..=last).map(|y| (x1 + dx * (y - y1) / dy, y)).collect()
        };

        for (x, y) in points {
            if let Some(i) = self.cell_of(x, y) {
                self.lines[i] = Some(color);
            }
        }
    }
}
