use raylib::prelude::*;
use std::time::Instant;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BounceState {
    Bouncing,  // Sprite moved and possibly reflected this frame
    Resetting, // Session timed out, a new sprite was picked instead of moving
}

/// Everything that changes between frames. Reassigned as a whole on reset.
#[derive(Clone, Copy)]
pub struct SimulationState {
    pub position: Vector2,   // Top-left corner of the current sprite
    pub velocity: Vector2,   // Pixels per frame
    pub current: usize,      // Index into the loaded sprite collection
    pub session_start: Instant,
}
