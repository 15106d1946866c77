use raylib::prelude::*;

/// A decoded image that can bounce around the canvas.
pub trait Sprite {
    fn pixel_width(&self) -> u32;
    fn pixel_height(&self) -> u32;
}

impl Sprite for Texture2D {
    fn pixel_width(&self) -> u32 {
        self.width().max(0) as u32
    }

    fn pixel_height(&self) -> u32 {
        self.height().max(0) as u32
    }
}

#[cfg(test)]
pub struct TestSprite {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
impl Sprite for TestSprite {
    fn pixel_width(&self) -> u32 {
        self.width
    }

    fn pixel_height(&self) -> u32 {
        self.height
    }
}
