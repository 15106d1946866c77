use std::f32::consts::TAU;
use std::time::Instant;
use anyhow::{bail, Result};
use rand::Rng;
use raylib::prelude::*;
use crate::config::BounceConfig;
use crate::sprite::Sprite;
use crate::state::{BounceState, SimulationState};

/// Moves one sprite at a time around the canvas, bouncing off the edges,
/// and starts a new session (sprite, position, direction) when the current
/// one has lasted `session_duration`.
pub struct BounceSimulator<'a, S: Sprite, R: Rng> {
    sprites: &'a [S],
    config: BounceConfig,
    rng: R,
    state: SimulationState,
}

impl<'a, S: Sprite, R: Rng> BounceSimulator<'a, S, R> {
    /// Fails when there is nothing to show. Starts the first session at `now`.
    pub fn new(sprites: &'a [S], config: BounceConfig, mut rng: R, now: Instant) -> Result<Self> {
        if sprites.is_empty() {
            bail!("no images to bounce");
        }

        let state = new_session(sprites.len(), &config, &mut rng, now);
        log_session(&state);

        Ok(Self { sprites, config, rng, state })
    }

    /// Picks a new random sprite and direction and moves the sprite's
    /// top-left corner to the canvas center.
    pub fn reset(&mut self, now: Instant) {
        self.state = new_session(self.sprites.len(), &self.config, &mut self.rng, now);
        log_session(&self.state);
    }

    /// One frame: either starts a new session (the frame is spent on it) or
    /// moves the sprite by its velocity and reflects it off crossed edges.
    pub fn advance(&mut self, now: Instant) -> BounceState {
        if now.saturating_duration_since(self.state.session_start) >= self.config.session_duration {
            self.reset(now);
            return BounceState::Resetting;
        }

        let sprite = &self.sprites[self.state.current];
        let width = sprite.pixel_width() as f32;
        let height = sprite.pixel_height() as f32;
        let canvas = self.config.canvas;
        let state = &mut self.state;

        state.position.x += state.velocity.x;
        state.position.y += state.velocity.y;

        // No clamping: the sprite may overshoot by one step before it turns back
        if state.position.x <= 0.0 || state.position.x + width >= canvas.width {
            state.velocity.x = -state.velocity.x;
            log::trace!("x reflection at {:.1}", state.position.x);
        }
        if state.position.y <= 0.0 || state.position.y + height >= canvas.height {
            state.velocity.y = -state.velocity.y;
            log::trace!("y reflection at {:.1}", state.position.y);
        }

        BounceState::Bouncing
    }

    pub fn position(&self) -> Vector2 {
        self.state.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.state.velocity
    }

    pub fn current_index(&self) -> usize {
        self.state.current
    }

    pub fn current_sprite(&self) -> &'a S {
        let sprites = self.sprites;
        &sprites[self.state.current]
    }

    pub fn session_start(&self) -> Instant {
        self.state.session_start
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}

fn new_session<R: Rng>(sprite_count: usize, config: &BounceConfig, rng: &mut R, now: Instant) -> SimulationState {
    let current = rng.random_range(0..sprite_count);
    let angle: f32 = rng.random_range(0.0..TAU);
    let (center_x, center_y) = config.canvas.center();

    SimulationState {
        position: Vector2::new(center_x, center_y),
        velocity: Vector2::new(config.max_speed * angle.cos(), config.max_speed * angle.sin()),
        current,
        session_start: now,
    }
}

fn log_session(state: &SimulationState) {
    log::debug!(
        "New session: image #{} heading ({:.2}, {:.2})",
        state.current, state.velocity.x, state.velocity.y
    );
}
