//! Drawing contract between the simulation and whatever paints it

use crate::{GameState, Params, Side};

/// RGBA color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const BACKGROUND: Color = Color([0.0, 0.0, 0.0, 1.0]);
    pub const FOREGROUND: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const CENTER_LINE: Color = Color([0.4, 0.4, 0.4, 1.0]); // #666
}

/// A 2D drawing target in field coordinates (origin top-left, y down)
pub trait Surface {
    fn clear(&mut self);
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_disc(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
}

/// Paint one frame: clear, center line, human paddle, opponent paddle, ball
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let config = state.config();

    surface.clear();

    // Dashed center line
    let line_x = (config.field_width - Params::CENTER_LINE_WIDTH) / 2.0;
    let mut y = 0.0;
    while y < config.field_height {
        let dash = Params::CENTER_DASH.min(config.field_height - y);
        surface.draw_rect(line_x, y, Params::CENTER_LINE_WIDTH, dash, Color::CENTER_LINE);
        y += Params::CENTER_DASH + Params::CENTER_GAP;
    }

    for side in [Side::Human, Side::Opponent] {
        if let Some(paddle) = state.paddle(side) {
            surface.draw_rect(
                paddle.x,
                paddle.y,
                config.paddle_width,
                config.paddle_height,
                Color::FOREGROUND,
            );
        }
    }

    if let Some(ball) = state.ball() {
        let radius = config.ball_size / 2.0;
        surface.draw_disc(
            ball.pos.x + radius,
            ball.pos.y + radius,
            radius,
            Color::FOREGROUND,
        );
    }
}

/// Draw call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Disc {
        center_x: f32,
        center_y: f32,
        radius: f32,
        color: Color,
    },
}

/// Surface that keeps the draw calls of the latest frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_disc(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Disc {
            center_x,
            center_y,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, SequenceRng};

    fn render_fresh_state() -> (GameState, RecordingSurface) {
        let mut rng = SequenceRng::new(vec![0.75]);
        let state = GameState::new(Config::new(), &mut rng).unwrap();
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        (state, surface)
    }

    #[test]
    fn test_center_line_color_matches_hex() {
        let gray = 0x66 as f32 / 255.0;
        assert_eq!(Color::CENTER_LINE.0, [gray, gray, gray, 1.0]);
    }

    #[test]
    fn test_render_order() {
        let (_state, surface) = render_fresh_state();
        let commands = &surface.commands;

        assert_eq!(commands.first(), Some(&DrawCommand::Clear));
        assert!(matches!(commands.last(), Some(DrawCommand::Disc { .. })));

        // 600 / (10 + 10) dashes, then two paddles
        let rects: Vec<_> = commands[1..commands.len() - 1].iter().collect();
        assert_eq!(rects.len(), 30 + 2);
        for dash in &rects[..30] {
            assert!(matches!(
                dash,
                DrawCommand::Rect { color, w, h, .. }
                    if *color == Color::CENTER_LINE && *w == 1.0 && *h == 10.0
            ));
        }
    }

    #[test]
    fn test_render_paddles_then_ball() {
        let (state, surface) = render_fresh_state();
        let config = state.config();
        let n = surface.commands.len();

        assert_eq!(
            surface.commands[n - 3],
            DrawCommand::Rect {
                x: 20.0,
                y: 250.0,
                w: config.paddle_width,
                h: config.paddle_height,
                color: Color::FOREGROUND,
            }
        );
        assert_eq!(
            surface.commands[n - 2],
            DrawCommand::Rect {
                x: 768.0,
                y: 250.0,
                w: config.paddle_width,
                h: config.paddle_height,
                color: Color::FOREGROUND,
            }
        );
        assert_eq!(
            surface.commands[n - 1],
            DrawCommand::Disc {
                center_x: 400.0,
                center_y: 300.0,
                radius: 7.0,
                color: Color::FOREGROUND,
            }
        );
    }

    #[test]
    fn test_recording_surface_keeps_latest_frame() {
        let (state, mut surface) = render_fresh_state();
        let first = surface.commands.clone();
        render(&state, &mut surface);
        assert_eq!(surface.commands, first);
        assert_eq!(surface.frames, 2);
    }
}
