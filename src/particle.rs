// Simple particle struct to keep track of individual position, velocity, and radius

use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
        }
    }

    // Position anywhere in [0, bounds), velocity and size drawn from the half-open ranges
    pub fn random<R: Rng>(
        rng: &mut R,
        bounds: Vector2<f64>,
        speed: (f64, f64),
        size: (f64, f64),
    ) -> Particle {
        let (min_vel, max_vel) = speed;
        let (min_size, max_size) = size;
        let pos_x = rng.gen::<f64>() * bounds[0];
        let pos_y = rng.gen::<f64>() * bounds[1];
        let vel_x = rng.gen::<f64>() * (max_vel - min_vel) + min_vel;
        let vel_y = rng.gen::<f64>() * (max_vel - min_vel) + min_vel;
        let size = rng.gen::<f64>() * (max_size - min_size) + min_size;
        Particle::new(pos_x, pos_y, vel_x, vel_y, size)
    }

    // Moves by one velocity step, then reverses any axis whose new position
    // lies outside [0, bounds]. Position is left where it landed.
    pub fn step(&mut self, bounds: Vector2<f64>) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > bounds[axis] {
                self.vel[axis] *= -1.0;
            }
        }
    }
}
