//! Drawing: the surface trait the game loop draws through, a cell raster
//! implementing it, and the ratatui presentation of that raster.

pub mod canvas;
pub mod frame;
pub mod renderer;
pub mod surface;

pub use canvas::PixelCanvas;
pub use frame::draw_frame;
pub use renderer::Renderer;
pub use surface::{Color, RenderSurface};
