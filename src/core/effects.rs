use super::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

#[inline]
fn pick<R: Rng + ?Sized>(palette: &[&'static str], rng: &mut R) -> &'static str {
    palette.choose(rng).copied().unwrap_or("#ff4d6d")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleShape {
    Heart,
    Circle,
}

/// A floating background particle; loops forever through CSS animation.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f32,
    pub left_vw: f32,
    pub color: &'static str,
    pub shape: ParticleShape,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let size_px = rng.gen::<f32>() * PARTICLE_SIZE_SPAN_PX + PARTICLE_SIZE_MIN_PX;
        let left_vw = rng.gen::<f32>() * 100.0;
        let color = pick(&PARTICLE_COLORS, rng);
        let shape = if rng.gen_bool(0.5) {
            ParticleShape::Heart
        } else {
            ParticleShape::Circle
        };
        Self {
            size_px,
            left_vw,
            color,
            shape,
            duration_s: rng.gen::<f32>() * PARTICLE_DURATION_SPAN_S + PARTICLE_DURATION_MIN_S,
            delay_s: rng.gen::<f32>() * PARTICLE_DELAY_MAX_S,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SparkleSpec {
    pub x: f32,
    pub y: f32,
    pub color: &'static str,
}

impl SparkleSpec {
    pub fn random<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        Self {
            x,
            y,
            color: pick(&SPARKLE_COLORS, rng),
        }
    }
}

/// Rate limiter for the pointer sparkle trail.
#[derive(Clone, Debug)]
pub struct SparkleThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Default for SparkleThrottle {
    fn default() -> Self {
        Self::new(SPARKLE_INTERVAL_MS)
    }
}

impl SparkleThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// True when a sparkle may be spawned at `now_ms`; records the spawn.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last <= self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Evenly spaced burst directions in degrees.
pub fn burst_angles(parts: usize) -> SmallVec<[f32; BURST_PARTS]> {
    if parts == 0 {
        return SmallVec::new();
    }
    let step = 360.0 / parts as f32;
    (0..parts).map(|i| i as f32 * step).collect()
}

/// One confetti dot flying out from the screen center.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    pub dx: f32,
    pub dy: f32,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let velocity = rng.gen::<f32>() * CONFETTI_VELOCITY_SPAN + CONFETTI_VELOCITY_MIN;
        Self {
            color: pick(&CONFETTI_COLORS, rng),
            dx: angle.cos() * velocity,
            dy: angle.sin() * velocity,
        }
    }
}

pub fn confetti_volley<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ConfettiPiece> {
    (0..count).map(|_| ConfettiPiece::random(rng)).collect()
}

/// Counts transient effect nodes so the document never grows without bound.
#[derive(Clone, Debug)]
pub struct EffectBudget {
    live: usize,
    max: usize,
}

impl Default for EffectBudget {
    fn default() -> Self {
        Self::new(MAX_LIVE_EFFECT_NODES)
    }
}

impl EffectBudget {
    pub fn new(max: usize) -> Self {
        Self { live: 0, max }
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    pub fn try_acquire(&mut self) -> bool {
        if self.live >= self.max {
            return false;
        }
        self.live += 1;
        true
    }

    pub fn release(&mut self) {
        self.live = self.live.saturating_sub(1);
    }
}
