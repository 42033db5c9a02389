use std::f64::consts::PI;

/// Total vertical travel of the near shape at intensity 1, in px.
pub const SHAPE_A_TRAVEL: f64 = -40.0;
/// Total vertical travel of the far shape at intensity 1, in px.
pub const SHAPE_B_TRAVEL: f64 = -20.0;

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Derive the two parallax translations from a scroll fraction.
///
/// Shape A travels twice as far as shape B, so A reads as closer to the
/// viewer. Fractions outside [0, 1] are clamped.
pub fn parallax_offsets(progress: f64, intensity: f64) -> (f64, f64) {
    let t = progress.clamp(0.0, 1.0);
    (
        lerp(0.0, SHAPE_A_TRAVEL * intensity, t),
        lerp(0.0, SHAPE_B_TRAVEL * intensity, t),
    )
}

/// One sampled frame of an icon's float cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatFrame {
    pub y: f64,
    pub rotate: f64,
    pub opacity: f64,
}

impl FloatFrame {
    /// Frame rendered before an icon's delay has elapsed.
    pub const REST: FloatFrame = FloatFrame {
        y: 0.0,
        rotate: 0.0,
        opacity: 0.9,
    };

    /// Sample the cycle `t` seconds into the icon's own timeline.
    ///
    /// The loop runs y: 0 -> -dist -> 0, rotate: 0 -> 3deg -> 0 and
    /// opacity: 0.9 -> 1.0 -> 0.9 over `dur` seconds. The sin^2 shaping
    /// keeps both ends of the cycle smooth.
    pub fn at(t: f64, dur: f64, dist: f64) -> FloatFrame {
        if t <= 0.0 || dur <= 0.0 {
            return Self::REST;
        }
        let phase = (t / dur).fract();
        let wave = (PI * phase).sin().powi(2);
        FloatFrame {
            y: -dist * wave,
            rotate: 3.0 * wave,
            opacity: 0.9 + 0.1 * wave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "expected {b}, got {a}");
    }

    #[test]
    fn offsets_are_zero_at_the_top() {
        for intensity in [0.0, 0.4, 1.0, 2.5] {
            let (a, b) = parallax_offsets(0.0, intensity);
            assert_close(a, 0.0);
            assert_close(b, 0.0);
        }
    }

    #[test]
    fn offsets_reach_full_travel_at_the_bottom() {
        let (a, b) = parallax_offsets(1.0, 1.0);
        assert_close(a, -40.0);
        assert_close(b, -20.0);

        let (a, b) = parallax_offsets(1.0, 2.0);
        assert_close(a, -80.0);
        assert_close(b, -40.0);
    }

    #[test]
    fn offsets_are_linear_in_progress_and_intensity() {
        for progress in [0.1, 0.25, 0.5, 0.75, 0.9] {
            for intensity in [0.0, 0.5, 1.0, 3.0] {
                let (a, b) = parallax_offsets(progress, intensity);
                let (unit_a, unit_b) = parallax_offsets(progress, 1.0);
                assert_close(a, unit_a * intensity);
                assert_close(b, unit_b * intensity);
                // the near shape always moves twice as fast
                assert_close(a, 2.0 * b);
            }
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(parallax_offsets(-0.5, 1.0), parallax_offsets(0.0, 1.0));
        assert_eq!(parallax_offsets(1.5, 1.0), parallax_offsets(1.0, 1.0));
    }

    #[test]
    fn float_frame_rests_until_the_delay_elapses() {
        assert_eq!(FloatFrame::at(-0.3, 5.0, 12.0), FloatFrame::REST);
        assert_eq!(FloatFrame::at(0.0, 5.0, 12.0), FloatFrame::REST);
    }

    #[test]
    fn float_frame_peaks_at_half_period() {
        let f = FloatFrame::at(2.5, 5.0, 12.0);
        assert_close(f.y, -12.0);
        assert_close(f.rotate, 3.0);
        assert_close(f.opacity, 1.0);
    }

    #[test]
    fn float_frame_is_periodic() {
        for t in [0.7, 1.3, 2.2, 4.9] {
            let a = FloatFrame::at(t, 5.0, 16.0);
            let b = FloatFrame::at(t + 5.0, 5.0, 16.0);
            assert_close(a.y, b.y);
            assert_close(a.rotate, b.rotate);
            assert_close(a.opacity, b.opacity);
        }
    }

    #[test]
    fn degenerate_duration_is_safe() {
        assert_eq!(FloatFrame::at(1.0, 0.0, 12.0), FloatFrame::REST);
    }
}
