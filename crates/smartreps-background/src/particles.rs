//! Drifting particle field (stateful).

/// Number of particles in the field; fixed for the mounted lifetime.
pub const PARTICLE_COUNT: usize = 50;

/// Largest per-axis drift speed, in pixels per frame.
const MAX_DRIFT: f32 = 0.25;

/// Smallest particle radius, in pixels.
const MIN_SIZE: f32 = 1.0;

/// Largest particle radius, in pixels (exclusive).
const MAX_SIZE: f32 = 4.0;

/// Resting opacity of the pulse.
const PULSE_BASE: f32 = 0.2;

/// Peak swing of the pulse around its resting value.
const PULSE_SWING: f32 = 0.3;

/// Pulse rate in radians per millisecond.
const PULSE_RATE: f32 = 0.001;

/// xorshift64 step.
fn next_u64(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

/// Uniform sample in `[0, 1)` from the top 24 bits of the generator.
fn next_unit(state: &mut u64) -> f32 {
    (next_u64(state) >> 40) as f32 / (1u64 << 24) as f32
}

/// A single drifting particle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current x position in surface pixels.
    pub x: f32,
    /// Current y position in surface pixels.
    pub y: f32,
    /// Horizontal drift per frame; fixed at creation.
    pub vx: f32,
    /// Vertical drift per frame; fixed at creation.
    pub vy: f32,
    /// Radius in pixels; fixed at creation.
    pub size: f32,
    /// Current opacity; recomputed on every update.
    pub opacity: f32,
}

/// The particle collection owned by the backdrop.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Create a field seeded from the current time.
    pub fn new(width: f32, height: f32) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(width, height, seed)
    }

    /// Create a field from an explicit seed. Same seed, same field.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        // Avoid the zero state, which xorshift never leaves.
        let mut state = seed.wrapping_add(1);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: next_unit(&mut state) * width,
                y: next_unit(&mut state) * height,
                vx: (next_unit(&mut state) - 0.5) * 2.0 * MAX_DRIFT,
                vy: (next_unit(&mut state) - 0.5) * 2.0 * MAX_DRIFT,
                size: MIN_SIZE + next_unit(&mut state) * (MAX_SIZE - MIN_SIZE),
                opacity: PULSE_BASE + next_unit(&mut state) * PULSE_SWING,
            })
            .collect();

        Self { particles }
    }

    /// Advance every particle one frame against the current surface bounds.
    pub fn update(&mut self, width: f32, height: f32, elapsed_ms: u64) {
        for particle in &mut self.particles {
            advance(particle, width, height, elapsed_ms);
        }
    }

    /// The particles, in their fixed collection order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Advance one particle: drift, wrap, recompute the opacity pulse.
fn advance(p: &mut Particle, width: f32, height: f32, elapsed_ms: u64) {
    p.x += p.vx;
    p.y += p.vy;

    // Each axis wraps on its own; the checks are independent, not
    // mutually exclusive.
    if p.x < 0.0 {
        p.x = width;
    }
    if p.x > width {
        p.x = 0.0;
    }
    if p.y < 0.0 {
        p.y = height;
    }
    if p.y > height {
        p.y = 0.0;
    }

    // Pulse phase is tied to the wrapped x, so the shimmer travels
    // across the surface instead of flickering per particle.
    p.opacity = PULSE_BASE + (elapsed_ms as f32 * PULSE_RATE + p.x).sin() * PULSE_SWING;
}
