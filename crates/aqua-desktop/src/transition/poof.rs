//! Radial particle burst played when a window closes
//!
//! Purely cosmetic: a ring of blurred dots expands outward from the window
//! center and fades. The burst owns no element handles; a renderer creates
//! nodes while a burst exists and must drop them when it is gone, so the
//! no-leak rule reduces to "the controller never retains a finished or
//! cancelled burst".

use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::math::Vec2;
use super::{ease_out_cubic, POOF_DURATION_JITTER_MS, POOF_DURATION_MS, POOF_PARTICLE_COUNT};

/// Upward drift applied to every particle, in pixels
const POOF_LIFT: f32 = 20.0;

/// Minimum travel distance from the burst center, in pixels
const POOF_MIN_DISTANCE: f32 = 40.0;

/// Maximum random extra travel distance, in pixels
const POOF_DISTANCE_JITTER: f32 = 30.0;

/// One particle of a burst
#[derive(Clone, Debug)]
struct PoofParticle {
    /// Travel target relative to the burst center
    target: Vec2,
    /// Final scale (particles grow from zero)
    end_scale: f32,
    /// Per-particle duration in milliseconds
    duration_ms: u32,
}

/// Sampled state of one particle for rendering
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoofFrame {
    /// Offset from the burst center
    pub offset: Vec2,
    /// Current scale
    pub scale: f32,
    /// Current opacity
    pub opacity: f32,
}

/// A radial particle burst anchored at a fixed point
#[derive(Clone, Debug)]
pub struct PoofBurst {
    center: Vec2,
    start_ms: f64,
    particles: Vec<PoofParticle>,
}

impl PoofBurst {
    /// Spawn a burst at the given center point
    pub fn spawn<R: Rng>(center: Vec2, start_ms: f64, rng: &mut R) -> Self {
        let count = POOF_PARTICLE_COUNT;
        let mut particles = Vec::with_capacity(count);

        for i in 0..count {
            let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
            let distance = POOF_MIN_DISTANCE + rng.gen::<f32>() * POOF_DISTANCE_JITTER;
            let target = Vec2::new(
                angle.cos() * distance,
                angle.sin() * distance - POOF_LIFT,
            );
            let end_scale = 1.0 + rng.gen::<f32>() * 0.5;
            let duration_ms =
                POOF_DURATION_MS + (rng.gen::<f32>() * POOF_DURATION_JITTER_MS as f32) as u32;

            particles.push(PoofParticle {
                target,
                end_scale,
                duration_ms,
            });
        }

        Self {
            center,
            start_ms,
            particles,
        }
    }

    /// Get the burst center
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Number of particles
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Check if every particle has finished
    pub fn is_complete(&self, now_ms: f64) -> bool {
        let longest = self
            .particles
            .iter()
            .map(|p| p.duration_ms)
            .max()
            .unwrap_or(0);
        now_ms - self.start_ms >= longest as f64
    }

    /// Sample every particle at the given time
    pub fn sample(&self, now_ms: f64) -> Vec<PoofFrame> {
        let elapsed = (now_ms - self.start_ms).max(0.0);

        self.particles
            .iter()
            .map(|p| {
                let t = (elapsed / p.duration_ms as f64).clamp(0.0, 1.0) as f32;
                let eased = ease_out_cubic(t);
                PoofFrame {
                    offset: p.target * eased,
                    scale: p.end_scale * eased,
                    opacity: 0.8 * (1.0 - eased),
                }
            })
            .collect()
    }
}
