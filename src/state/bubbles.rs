// Smoke bubbles rising out of the cauldron while a brew runs.
use std::f64::consts::TAU;

pub const BUBBLE_COUNT: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub size_px: f64,
    pub alpha: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub start_x: f64,
    pub end_x: f64,
    /// Negative: bubbles travel upwards.
    pub end_y: f64,
}

/// Lays bubbles out evenly around the rim; `rand` must yield values in [0, 1).
pub fn sample_bubbles(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Bubble> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU;
            Bubble {
                delay_s: rand() * 0.8,
                duration_s: 2.0 + rand(),
                size_px: 15.0 + rand() * 20.0,
                alpha: 0.4 + rand() * 0.3,
                start_x: angle.cos() * 20.0,
                end_x: angle.cos() * 40.0,
                end_y: -120.0 - rand() * 60.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubbles_stay_within_their_ranges() {
        let mut seq = [0.0, 0.999, 0.5, 0.25].into_iter().cycle();
        let bubbles = sample_bubbles(BUBBLE_COUNT, || seq.next().unwrap_or(0.0));
        assert_eq!(bubbles.len(), BUBBLE_COUNT);
        for b in &bubbles {
            assert!((15.0..35.0).contains(&b.size_px));
            assert!((0.4..0.7).contains(&b.alpha));
            assert!((0.0..0.8).contains(&b.delay_s));
            assert!((2.0..3.0).contains(&b.duration_s));
            assert!((-180.0..=-120.0).contains(&b.end_y));
        }
    }

    #[test]
    fn first_bubble_starts_on_the_right_of_the_rim() {
        let bubbles = sample_bubbles(4, || 0.0);
        assert!((bubbles[0].start_x - 20.0).abs() < 1e-9);
        assert!((bubbles[0].end_x - 40.0).abs() < 1e-9);
        assert!((bubbles[2].start_x + 20.0).abs() < 1e-9);
    }
}
