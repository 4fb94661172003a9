//! Sequential multi-step timeline

use crate::visual::VisualProps;
use super::Ease;

/// One step of a timeline: interpolate to `to` over `duration_ms`
#[derive(Clone, Debug)]
struct Step {
    duration_ms: u32,
    ease: Ease,
    to: VisualProps,
}

/// An ordered sequence of tween steps played back to back
///
/// Each step starts from the previous step's target, so a timeline is fully
/// described by its starting properties and the list of targets. Used for the
/// minimize animation (squash, then collapse toward the dock).
#[derive(Clone, Debug)]
pub struct Timeline {
    start_ms: f64,
    from: VisualProps,
    steps: Vec<Step>,
}

impl Timeline {
    /// Create an empty timeline starting from the given properties
    pub fn new(start_ms: f64, from: VisualProps) -> Self {
        Self {
            start_ms,
            from,
            steps: Vec::new(),
        }
    }

    /// Append a step (builder style)
    pub fn then(mut self, duration_ms: u32, ease: Ease, to: VisualProps) -> Self {
        self.steps.push(Step {
            duration_ms,
            ease,
            to,
        });
        self
    }

    /// Total duration across all steps in milliseconds
    pub fn total_duration_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_ms).sum()
    }

    /// Check if the timeline is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.total_duration_ms() as f64
    }

    /// Sample the current properties
    pub fn sample(&self, now_ms: f64) -> VisualProps {
        let mut elapsed = (now_ms - self.start_ms).max(0.0);
        let mut from = self.from;

        for step in &self.steps {
            let duration = step.duration_ms as f64;
            if elapsed < duration {
                let t = step.ease.apply((elapsed / duration) as f32);
                return VisualProps::lerp(&from, &step.to, t);
            }
            elapsed -= duration;
            from = step.to;
        }

        from
    }

    /// Get the final properties (last step's target)
    pub fn final_props(&self) -> VisualProps {
        self.steps.last().map(|s| s.to).unwrap_or(self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn two_step_timeline() -> Timeline {
        let squash = VisualProps {
            scale: Vec2::new(0.98, 1.04),
            ..VisualProps::identity()
        };
        let collapsed = VisualProps {
            translate: Vec2::new(-200.0, 300.0),
            scale: Vec2::new(0.15, 0.0),
            opacity: 0.0,
            ..VisualProps::identity()
        };
        Timeline::new(0.0, VisualProps::identity())
            .then(120, Ease::Linear, squash)
            .then(550, Ease::Linear, collapsed)
    }

    #[test]
    fn test_timeline_total_duration() {
        let tl = two_step_timeline();
        assert_eq!(tl.total_duration_ms(), 670);
        assert!(!tl.is_complete(669.0));
        assert!(tl.is_complete(670.0));
    }

    #[test]
    fn test_timeline_first_step() {
        let tl = two_step_timeline();

        // Midway through the squash
        let mid = tl.sample(60.0);
        assert!((mid.scale.y - 1.02).abs() < 0.001);
        assert!((mid.opacity - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_timeline_second_step_starts_from_first_target() {
        let tl = two_step_timeline();

        // Exactly at the step boundary the squash target holds
        let at_boundary = tl.sample(120.0);
        assert!((at_boundary.scale.y - 1.04).abs() < 0.001);

        // Midway through the collapse, vertical scale interpolates 1.04 -> 0
        let mid = tl.sample(120.0 + 275.0);
        assert!((mid.scale.y - 0.52).abs() < 0.001);
    }

    #[test]
    fn test_timeline_final_props() {
        let tl = two_step_timeline();
        let end = tl.sample(10_000.0);
        assert!((end.scale.y - 0.0).abs() < 0.001);
        assert!((end.opacity - 0.0).abs() < 0.001);
        assert_eq!(end, tl.final_props());
    }

    #[test]
    fn test_empty_timeline_is_complete() {
        let tl = Timeline::new(0.0, VisualProps::identity());
        assert!(tl.is_complete(0.0));
        assert_eq!(tl.sample(100.0), VisualProps::identity());
    }
}
