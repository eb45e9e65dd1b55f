use super::surface::{Color, RenderSurface};
use crate::game::{GameConfig, GameState};

pub const BACKGROUND_COLOR: Color = Color::Black;
pub const SNAKE_COLOR: Color = Color::White;
pub const FOOD_COLOR: Color = Color::Magenta;
pub const GRID_COLOR: Color = Color::DarkGray;

/// Draw one frame of the game: background, optional grid, head, tail, food
pub fn draw_frame<S: RenderSurface + ?Sized>(surface: &mut S, state: &GameState, config: &GameConfig) {
    let cell = config.cell_size;

    surface.clear();
    surface.fill_rect(0, 0, config.canvas_width, config.canvas_height, BACKGROUND_COLOR);

    if config.show_grid {
        surface.draw_grid(
            config.columns(),
            config.rows(),
            config.canvas_width,
            config.canvas_height,
            GRID_COLOR,
        );
    }

    // Head first, then the tail from neck to end
    for segment in state.snake.segments() {
        surface.fill_rect(segment.x, segment.y, cell, cell, SNAKE_COLOR);
    }

    let food = state.food.position();
    surface.fill_rect(food.x, food.y, cell, cell, FOOD_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Food, Position, Snake};
    use crate::render::surface::recording::{DrawCall, RecordingSurface};

    fn rect(x: i32, y: i32, size: i32, color: Color) -> DrawCall {
        DrawCall::Rect {
            x,
            y,
            width: size,
            height: size,
            color,
        }
    }

    #[test]
    fn test_draw_order() {
        let config = GameConfig::default();
        let mut snake = Snake::new(Position::new(15, 15), Direction::Right, 15);
        snake.grow();
        snake.advance();
        let state = GameState::new(snake, Food::at(Position::new(90, 90)));

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, &config);

        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Clear,
                DrawCall::Rect {
                    x: 0,
                    y: 0,
                    width: 300,
                    height: 300,
                    color: Color::Black
                },
                rect(30, 15, 15, Color::White),
                rect(15, 15, 15, Color::White),
                rect(90, 90, 15, Color::Magenta),
            ]
        );
    }

    #[test]
    fn test_grid_drawn_after_background() {
        let config = GameConfig {
            show_grid: true,
            ..GameConfig::with_grid(3, 3)
        };
        let snake = Snake::new(Position::new(15, 15), Direction::Right, 15);
        let state = GameState::new(snake, Food::at(Position::new(0, 0)));

        let mut surface = RecordingSurface::default();
        draw_frame(&mut surface, &state, &config);

        let lines = surface
            .calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count();
        assert_eq!(lines, 4);
        assert!(matches!(surface.calls[2], DrawCall::Line { .. }));
        assert_eq!(surface.calls.len(), 2 + 4 + 2);
    }
}
