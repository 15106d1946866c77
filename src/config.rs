use std::path::PathBuf;
use std::time::Duration;
use anyhow::{ensure, Result};
use clap::Parser;
use crate::constants::*;

/// Bounce a random image around the screen, picking a new one every session.
#[derive(Parser, Debug)]
#[command(name = "bouncer", version, about)]
pub struct Args {
    /// Directory holding the images to bounce
    #[arg(default_value = DEFAULT_ASSET_DIR)]
    pub image_dir: PathBuf,

    /// Sprite speed in pixels per frame
    #[arg(long, default_value_t = MAX_SPEED)]
    pub max_speed: f32,

    /// Seconds before a new image, position and direction are picked
    #[arg(long, default_value_t = SESSION_DURATION_SECS)]
    pub session_secs: u64,

    /// Seed for the random generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Open a regular window instead of going fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Window width when windowed
    #[arg(long, default_value_t = WINDOWED_WIDTH)]
    pub width: i32,

    /// Window height when windowed
    #[arg(long, default_value_t = WINDOWED_HEIGHT)]
    pub height: i32,
}

/// Drawing surface size, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        ensure!(width > 0 && height > 0, "invalid canvas size {}x{}", width, height);
        Ok(Self { width: width as f32, height: height as f32 })
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BounceConfig {
    pub canvas: Canvas,
    pub max_speed: f32,
    pub session_duration: Duration,
}

impl BounceConfig {
    pub fn new(canvas: Canvas, max_speed: f32, session_duration: Duration) -> Result<Self> {
        ensure!(max_speed.is_finite() && max_speed > 0.0, "max speed must be positive, got {}", max_speed);
        ensure!(!session_duration.is_zero(), "session duration must be positive");
        Ok(Self { canvas, max_speed, session_duration })
    }

    pub fn from_args(args: &Args, canvas: Canvas) -> Result<Self> {
        Self::new(canvas, args.max_speed, Duration::from_secs(args.session_secs))
    }
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas { width: 800.0, height: 600.0 },
            max_speed: MAX_SPEED,
            session_duration: Duration::from_secs(SESSION_DURATION_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_rejects_empty_size() {
        assert!(Canvas::new(0, 600).is_err());
        assert!(Canvas::new(800, -1).is_err());
        let canvas = Canvas::new(800, 600).unwrap();
        assert_eq!(canvas.center(), (400.0, 300.0));
    }

    #[test]
    fn test_config_rejects_bad_speed() {
        let canvas = Canvas::new(800, 600).unwrap();
        assert!(BounceConfig::new(canvas, 0.0, Duration::from_secs(30)).is_err());
        assert!(BounceConfig::new(canvas, f32::NAN, Duration::from_secs(30)).is_err());
        assert!(BounceConfig::new(canvas, 10.0, Duration::ZERO).is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["bouncer"]);
        assert_eq!(args.image_dir, PathBuf::from(DEFAULT_ASSET_DIR));
        assert_eq!(args.max_speed, MAX_SPEED);
        assert_eq!(args.session_secs, SESSION_DURATION_SECS);
        assert!(args.seed.is_none());
        assert!(!args.windowed);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from(["bouncer", "pics", "--max-speed", "4.5", "--session-secs", "5", "--seed", "7", "--windowed"]);
        assert_eq!(args.image_dir, PathBuf::from("pics"));
        let config = BounceConfig::from_args(&args, Canvas::new(640, 480).unwrap()).unwrap();
        assert_eq!(config.max_speed, 4.5);
        assert_eq!(config.session_duration, Duration::from_secs(5));
        assert_eq!(args.seed, Some(7));
        assert!(args.windowed);
    }
}
