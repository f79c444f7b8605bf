/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between field edge and paddle lane
    pub const PADDLE_SPEED: f32 = 7.0; // Units per frame (keyboard)

    // Opponent
    pub const AI_SPEED: f32 = 4.0; // Units per frame
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 7.0; // Units per frame
    pub const DEFLECTION_FACTOR: f32 = 0.25; // vy per unit of hit offset
    pub const HIT_JITTER: f32 = 1.0;

    // Center line
    pub const CENTER_DASH: f32 = 10.0;
    pub const CENTER_GAP: f32 = 10.0;
    pub const CENTER_LINE_WIDTH: f32 = 1.0;

    // Frame loop
    pub const FRAME_RATE: u32 = 60;
}
