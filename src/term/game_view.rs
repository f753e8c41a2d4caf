//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::{GameSnapshot, CELL_BODY, CELL_FOOD, CELL_HEAD};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Phase, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view for the Snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one snapshot into a fresh framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let board_bg = Style {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', board_bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..GRID_SIZE as u16 {
            for x in 0..GRID_SIZE as u16 {
                let code = snapshot.grid[y as usize][x as usize];
                let (ch, style) = match code {
                    CELL_HEAD => (
                        '█',
                        Style {
                            fg: Rgb::new(120, 240, 140),
                            bg: board_bg.bg,
                            bold: true,
                        },
                    ),
                    CELL_BODY => (
                        '█',
                        Style {
                            fg: Rgb::new(80, 190, 100),
                            bg: board_bg.bg,
                            bold: false,
                        },
                    ),
                    CELL_FOOD => (
                        '●',
                        Style {
                            fg: Rgb::new(230, 90, 80),
                            bg: board_bg.bg,
                            bold: true,
                        },
                    ),
                    _ => ('·', board_bg),
                };
                self.fill_cell_rect(&mut fb, start_x, start_y, x, y, ch, style);
            }
        }

        self.draw_status(&mut fb, snapshot, start_x, start_y, frame_h);

        match snapshot.phase {
            Phase::Paused => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
            }
            Phase::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
            Phase::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_h: u16,
    ) {
        let hud = Style {
            fg: Rgb::new(210, 210, 210),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let help = Style {
            fg: Rgb::new(130, 130, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let status = format!(
            " score {}  best {}  speed {}ms ",
            snapshot.score, snapshot.best, snapshot.speed_interval_ms
        );
        fb.put_str(start_x, start_y + frame_h, &status, hud);
        fb.put_str(
            start_x,
            start_y + frame_h + 1,
            " arrows/wasd move · p pause · r restart · q quit ",
            help,
        );
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 60, 70),
            bold: true,
        };
        let text_w = text.chars().count() as u16 + 2;
        let x = start_x + frame_w.saturating_sub(text_w) / 2;
        let y = start_y + frame_h / 2;
        fb.put_str(x, y, &format!(" {} ", text), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn glyph_at(fb: &FrameBuffer, x: u16, y: u16) -> char {
        fb.get(x, y).unwrap().ch
    }

    #[test]
    fn test_render_places_head_and_food_glyphs() {
        let view = GameView::default();
        let state = GameState::new(5);
        let snapshot = state.snapshot();
        let viewport = Viewport::new(80, 30);

        let fb = view.render(&snapshot, viewport);

        // Recompute the same layout the view uses.
        let frame_w = (GRID_SIZE as u16) * 2 + 2;
        let frame_h = (GRID_SIZE as u16) + 2;
        let start_x = (80 - frame_w) / 2;
        let start_y = (30 - frame_h) / 2;

        let head = state.snake().head();
        let hx = start_x + 1 + (head.x as u16) * 2;
        let hy = start_y + 1 + head.y as u16;
        assert_eq!(glyph_at(&fb, hx, hy), '█');

        let food = state.food();
        let fx = start_x + 1 + (food.x as u16) * 2;
        let fy = start_y + 1 + food.y as u16;
        assert_eq!(glyph_at(&fb, fx, fy), '●');
    }

    #[test]
    fn test_render_draws_border_corners() {
        let view = GameView::default();
        let snapshot = GameState::new(5).snapshot();
        let fb = view.render(&snapshot, Viewport::new(80, 30));

        let frame_w = (GRID_SIZE as u16) * 2 + 2;
        let frame_h = (GRID_SIZE as u16) + 2;
        let start_x = (80 - frame_w) / 2;
        let start_y = (30 - frame_h) / 2;

        assert_eq!(glyph_at(&fb, start_x, start_y), '┌');
        assert_eq!(glyph_at(&fb, start_x + frame_w - 1, start_y), '┐');
        assert_eq!(glyph_at(&fb, start_x, start_y + frame_h - 1), '└');
        assert_eq!(
            glyph_at(&fb, start_x + frame_w - 1, start_y + frame_h - 1),
            '┘'
        );
    }

    #[test]
    fn test_paused_overlay_is_drawn() {
        let view = GameView::default();
        let mut state = GameState::new(5);
        state.toggle_pause();
        let fb = view.render(&state.snapshot(), Viewport::new(80, 30));

        // Scan the whole buffer for the banner text.
        let mut found = false;
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).unwrap_or_default().ch)
                .collect();
            if row.contains("PAUSED") {
                found = true;
            }
        }
        assert!(found, "expected PAUSED banner");
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let view = GameView::default();
        let snapshot = GameState::new(5).snapshot();
        // Smaller than the board; everything out of range must clip.
        let fb = view.render(&snapshot, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }
}
