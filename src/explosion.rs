use std::f32::consts::TAU;

use nannou::prelude::*;
use rand::Rng;

use crate::constants::*;

const PALETTE: [Srgb<u8>; 3] = [RED, ORANGE, YELLOW];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    velocity: Vec2,
    pub size: f32,
    pub color: Srgb<u8>,
    life: f32,
}

impl Particle {
    fn random<R: Rng>(origin: Vec2, rng: &mut R) -> Self {
        let angle: f32 = rng.random_range(0.0..TAU);
        let speed: f32 = rng.random_range(1.0..5.0);

        Particle {
            position: origin,
            velocity: vec2(angle.cos(), angle.sin()) * speed,
            size: rng.random_range(2..=8) as f32,
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            life: rng.random_range(0.5..1.0),
        }
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    /// Opacity in `0.0..=1.0`, fading out with the remaining life
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0., 1.)
    }
}

/// Ring plus particle burst shown when a mine goes off. Purely visual, it
/// only knows how to step itself forward.
#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    center: Vec2,
    radius: f32,
    max_radius: f32,
    growing: bool,
    particles: Vec<Particle>,
}

impl Explosion {
    pub fn new<R: Rng>(center: Vec2, size: f32, rng: &mut R) -> Self {
        let particles = (0..EXPLOSION_PARTICLES)
            .map(|_| Particle::random(center, rng))
            .collect();

        Explosion {
            center,
            radius: EXPLOSION_START_RADIUS,
            max_radius: size * 2.,
            growing: true,
            particles,
        }
    }

    /// Steps the ring and every particle once. Returns whether anything is
    /// left to show.
    pub fn advance(&mut self) -> bool {
        if self.growing {
            self.radius += EXPLOSION_GROW_RATE;
            if self.radius >= self.max_radius {
                self.growing = false;
            }
        } else {
            self.radius = (self.radius - EXPLOSION_SHRINK_RATE).max(0.);
        }

        for particle in &mut self.particles {
            particle.position += particle.velocity;
            particle.life -= PARTICLE_LIFE_DECAY;
        }
        self.particles.retain(|particle| particle.life > 0.);

        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.radius > 0. || !self.particles.is_empty()
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Ring opacity, proportional to how big the ring still is
    pub fn ring_alpha(&self) -> f32 {
        if self.max_radius <= 0. {
            return 0.;
        }
        (self.radius / self.max_radius).clamp(0., 1.)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
