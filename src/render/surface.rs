/// Colours the game draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
    Magenta,
    DarkGray,
}

/// A 2D drawing target addressed in canvas pixels.
///
/// The simulation loop only needs `clear` and `fill_rect`; lines and the
/// grid overlay are optional and do nothing unless a surface supports them.
pub trait RenderSurface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Stroke a line between two points
    fn draw_line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32, _color: Color) {}

    /// Stroke the inner lines of a `columns` x `rows` grid spanning a
    /// `width` x `height` canvas
    fn draw_grid(&mut self, columns: i32, rows: i32, width: i32, height: i32, color: Color) {
        for x in 1..columns {
            let line_x = width / columns * x;
            self.draw_line(line_x, 0, line_x, height, color);
        }

        for y in 1..rows {
            let line_y = height / rows * y;
            self.draw_line(0, line_y, width, line_y, color);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::recording::{DrawCall, RecordingSurface};
    use super::*;

    #[test]
    fn test_grid_lines() {
        let mut surface = RecordingSurface::default();
        surface.draw_grid(3, 2, 45, 30, Color::DarkGray);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Line {
                    from: (15, 0),
                    to: (15, 30),
                    color: Color::DarkGray
                },
                DrawCall::Line {
                    from: (30, 0),
                    to: (30, 30),
                    color: Color::DarkGray
                },
                DrawCall::Line {
                    from: (0, 15),
                    to: (45, 15),
                    color: Color::DarkGray
                },
            ]
        );
    }

    struct RectsOnly(usize);

    impl RenderSurface for RectsOnly {
        fn clear(&mut self) {}

        fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _color: Color) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_lines_optional() {
        let mut surface = RectsOnly(0);
        surface.draw_grid(4, 4, 60, 60, Color::DarkGray);
        assert_eq!(surface.0, 0);
    }
}
