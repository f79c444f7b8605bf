use crate::{Params, Side};
use glam::Vec2;
use thiserror::Error;

/// Rejected field/paddle/ball settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },
    #[error("ball size {ball} does not fit in the field ({width}x{height})")]
    BallTooLarge { ball: f32, width: f32, height: f32 },
    #[error("paddle lanes overlap or leave the field (human x {human}, opponent x {opponent})")]
    LanesOverlap { human: f32, opponent: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub deflection_factor: f32,
    pub hit_jitter: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            deflection_factor: Params::DEFLECTION_FACTOR,
            hit_jitter: Params::HIT_JITTER,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the field can hold both paddles and the ball
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ai_dead_zone", self.ai_dead_zone),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
            ("deflection_factor", self.deflection_factor),
            ("hit_jitter", self.hit_jitter),
        ];
        if let Some(&(name, value)) = all.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { name, value });
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }

        if self.ball_size >= self.field_height || self.ball_size >= self.field_width {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.field_width,
                height: self.field_height,
            });
        }

        let human = self.paddle_x(Side::Human);
        let opponent = self.paddle_x(Side::Opponent);
        if human < 0.0 || human + self.paddle_width >= opponent {
            return Err(ConfigError::LanesOverlap { human, opponent });
        }

        let non_negative = [
            ("ai_dead_zone", self.ai_dead_zone),
            ("deflection_factor", self.deflection_factor),
            ("hit_jitter", self.hit_jitter),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        Ok(())
    }

    /// Get the fixed lane (left edge) of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Human => self.paddle_margin,
            Side::Opponent => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp paddle top edge to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Top-left corner of a centered ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.field_width - self.ball_size) / 2.0,
            (self.field_height - self.ball_size) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Human), 20.0, "Human lane");
        assert_eq!(config.paddle_x(Side::Opponent), 768.0, "Opponent lane");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-50.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.field_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(250.0), 250.0);
    }

    #[test]
    fn test_config_spawn_positions_are_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 250.0);
        assert_eq!(config.ball_spawn(), Vec2::new(393.0, 293.0));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_non_positive_speed() {
        let config = Config {
            ai_speed: 0.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "ai_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan_dimension() {
        let config = Config {
            field_width: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "field_width",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_values() {
        for config in [
            Config {
                field_width: f32::INFINITY,
                ..Config::new()
            },
            Config {
                ball_speed: f32::INFINITY,
                ..Config::new()
            },
            Config {
                paddle_margin: f32::NEG_INFINITY,
                ..Config::new()
            },
        ] {
            assert!(
                matches!(config.validate(), Err(ConfigError::NonFinite { .. })),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_nan_tuning() {
        let config = Config {
            hit_jitter: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "hit_jitter",
                ..
            })
        ));

        let config = Config {
            deflection_factor: f32::NAN,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "deflection_factor",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_tuning() {
        let config = Config {
            deflection_factor: -0.25,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "deflection_factor",
                value: -0.25
            })
        );

        let config = Config {
            hit_jitter: -1.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "hit_jitter",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_allows_zero_tuning() {
        let config = Config {
            ai_dead_zone: 0.0,
            deflection_factor: 0.0,
            hit_jitter: 0.0,
            ..Config::new()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_tall_paddle() {
        let config = Config {
            paddle_height: 700.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_overlapping_lanes() {
        let config = Config {
            paddle_margin: 400.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LanesOverlap { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_dead_zone() {
        let config = Config {
            ai_dead_zone: -1.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                name: "ai_dead_zone",
                value: -1.0
            })
        );
    }
}
