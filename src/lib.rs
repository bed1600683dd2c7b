mod utils;

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod particle;
pub mod scheduler;
pub mod surface;
mod timer;
pub mod web;

#[cfg(test)]
mod testing;

use wasm_bindgen::prelude::*;

pub use animation::{launch, Animation, Host};
pub use color::Color;
pub use config::FieldOptions;
pub use error::FieldError;
pub use field::ParticleField;
pub use particle::Particle;
pub use web::{start_particle_field, start_particle_field_with, ParticleFieldHandle};

// Smaller allocator for the wasm build when the `wee_alloc` feature is enabled
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}
