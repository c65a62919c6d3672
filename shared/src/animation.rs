//! Count-up animation math for headline figures.
//!
//! The frontend samples [`sample`] once per display frame. A new target always
//! restarts from 0 rather than from the previous displayed value; that matches
//! the shipped behavior, deliberately kept even though animating from the
//! current value would look smoother.

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 1200.0;

/// Ease-out-expo curve: `1 - 2^(-10·p)` for `p` in `[0, 1)`, pinned to exactly
/// 1.0 once progress completes so the final sample lands on the target.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else if progress <= 0.0 {
        0.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

/// Value to display `elapsed_ms` into an animation toward `target`.
/// Progress is clamped to `[0, 1]`, so the sequence starts at 0, never
/// overshoots, and ends exactly at `target`.
pub fn sample(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    ease_out_expo(progress) * target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_ends_at_target() {
        assert_eq!(sample(147.90, 0.0, 1200.0), 0.0);
        assert_eq!(sample(147.90, 1200.0, 1200.0), 147.90);
        // Past the duration the value stays pinned
        assert_eq!(sample(147.90, 5000.0, 1200.0), 147.90);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let target = 54.99;
        let mut prev = 0.0;
        for frame in 0..=75 {
            let value = sample(target, frame as f64 * 16.0, 1200.0);
            assert!(value >= prev, "sequence decreased at frame {}", frame);
            assert!(value <= target, "overshot target at frame {}", frame);
            prev = value;
        }
        assert_eq!(prev, target);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        assert_eq!(sample(42.0, 0.0, 0.0), 42.0);
    }

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        // Raw curve at p just under 1 is below 1 (2^-10 away)
        assert!(ease_out_expo(0.999) < 1.0);
        assert!(ease_out_expo(0.5) > 0.9); // fast start, slow finish
    }
}
