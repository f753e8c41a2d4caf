//! Terminal presentation: framebuffer, diff renderer, and the board view.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
