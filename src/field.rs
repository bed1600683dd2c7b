// The fixed set of particles making up one animation

use crate::color::Color;
use crate::config::FieldOptions;
use crate::error::FieldError;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Box<[Particle]>,
}

impl ParticleField {
    pub fn new(particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            particles: particles.into_boxed_slice(),
        }
    }

    pub fn generate<R: Rng>(rng: &mut R, bounds: Vector2<f64>, options: &FieldOptions) -> Self {
        let particles = (0..options.particle_count())
            .map(|_| Particle::random(rng, bounds, options.speed_range(), options.size_range()))
            .collect::<Vec<_>>();
        ParticleField::new(particles)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step(&mut self, bounds: Vector2<f64>) {
        for particle in self.particles.iter_mut() {
            particle.step(bounds);
        }
    }

    // One animation frame: clear, then move and draw each particle in order
    pub fn render<S: Surface>(&mut self, surface: &mut S, color: &Color) -> Result<(), FieldError> {
        let bounds = surface.size();
        surface.clear();
        surface.set_fill(color);
        for particle in self.particles.iter_mut() {
            particle.step(bounds);
            surface.fill_circle(particle.pos, particle.size)?;
        }
        Ok(())
    }
}
