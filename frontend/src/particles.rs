/// A floating dot behind the hero. Purely decorative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

const MIN_DURATION_MS: f64 = 3000.0;
const DURATION_SPREAD_MS: f64 = 2000.0;
const MAX_DELAY_MS: f64 = 2000.0;

impl Particle {
    /// Draws a particle from `sample`, which yields uniform values in [0, 1).
    pub fn sample(sample: &mut impl FnMut() -> f64) -> Self {
        let unit = |value: f64| value.clamp(0.0, 1.0);
        let left_pct = unit(sample()) * 100.0;
        let top_pct = unit(sample()) * 100.0;
        let duration_ms = (MIN_DURATION_MS + unit(sample()) * DURATION_SPREAD_MS) as u32;
        let delay_ms = (unit(sample()) * MAX_DELAY_MS) as u32;
        Particle { left_pct, top_pct, duration_ms, delay_ms }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {}ms; animation-delay: {}ms;",
            self.left_pct, self.top_pct, self.duration_ms, self.delay_ms
        )
    }
}

pub fn scatter(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::sample(&mut sample)).collect()
}

/// Keyframes for the particle loop: drift up 20px and brighten, then back.
pub const PARTICLE_CSS: &str = r#"
    @keyframes particle-float {
        0% { transform: translateY(0); opacity: 0.2; }
        50% { transform: translateY(-20px); opacity: 0.5; }
        100% { transform: translateY(0); opacity: 0.2; }
    }
    .particle {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #60a5fa;
        opacity: 0.2;
        animation-name: particle-float;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
        pointer-events: none;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PARTICLE_COUNT;

    /// Small LCG so tests cover many positions without a random source.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn scatter_yields_fixed_count() {
        for seed in 0..5 {
            assert_eq!(scatter(PARTICLE_COUNT, lcg(seed)).len(), 20);
        }
    }

    #[test]
    fn positions_and_timings_stay_in_range() {
        for particle in scatter(500, lcg(42)) {
            assert!((0.0..=100.0).contains(&particle.left_pct));
            assert!((0.0..=100.0).contains(&particle.top_pct));
            assert!((3000..=5000).contains(&particle.duration_ms));
            assert!(particle.delay_ms <= 2000);
        }
    }

    #[test]
    fn axes_are_sampled_independently() {
        let mut values = [0.25, 0.75, 0.5, 0.5].into_iter();
        let particle = Particle::sample(&mut || values.next().unwrap_or(0.0));
        assert_eq!(particle.left_pct, 25.0);
        assert_eq!(particle.top_pct, 75.0);
        assert_eq!(particle.duration_ms, 4000);
        assert_eq!(particle.delay_ms, 1000);
    }

    #[test]
    fn style_positions_particle() {
        let particle = Particle { left_pct: 12.5, top_pct: 80.0, duration_ms: 3500, delay_ms: 250 };
        assert_eq!(
            particle.style(),
            "left: 12.50%; top: 80.00%; animation-duration: 3500ms; animation-delay: 250ms;"
        );
    }
}
