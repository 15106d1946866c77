pub const FPS: u32 = 60;                        // Target frames per second (vsync usually wins)

pub const MAX_SPEED: f32 = 10.0;                // Sprite speed (pixels per frame)
pub const SESSION_DURATION_SECS: u64 = 30;      // Time before a new sprite is picked (seconds)

pub const DEFAULT_ASSET_DIR: &str = "assets";   // Image directory used when none is given

pub const WINDOWED_WIDTH: i32 = 1280;           // Window size when not running fullscreen
pub const WINDOWED_HEIGHT: i32 = 720;
