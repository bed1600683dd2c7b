// Options for a particle field, settable from JS one field at a time.
// Checked once by `validate` when the field is launched.

use crate::color::Color;
use crate::error::FieldError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOptions {
    canvas_id: String,
    particle_count: u32,
    color: Color,
    speed_range: (f64, f64),
    size_range: (f64, f64),
    seed: Option<u64>,
    debug: bool,
}

impl FieldOptions {
    pub const DEFAULT_CANVAS_ID: &'static str = "canvasOne";
    pub const DEFAULT_PARTICLE_COUNT: u32 = 50;
    pub const DEFAULT_SPEED_RANGE: (f64, f64) = (-1.0, 1.0);
    pub const DEFAULT_SIZE_RANGE: (f64, f64) = (1.0, 4.0);
}

impl Default for FieldOptions {
    fn default() -> Self {
        FieldOptions {
            canvas_id: FieldOptions::DEFAULT_CANVAS_ID.to_owned(),
            particle_count: FieldOptions::DEFAULT_PARTICLE_COUNT,
            color: Color::DEFAULT_FILL,
            speed_range: FieldOptions::DEFAULT_SPEED_RANGE,
            size_range: FieldOptions::DEFAULT_SIZE_RANGE,
            seed: None,
            debug: false,
        }
    }
}

#[wasm_bindgen]
impl FieldOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FieldOptions {
        FieldOptions::default()
    }

    pub fn set_canvas_id(&mut self, canvas_id: &str) {
        self.canvas_id = canvas_id.to_owned();
    }

    pub fn set_particle_count(&mut self, particle_count: u32) {
        self.particle_count = particle_count;
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8, alpha: f64) {
        self.color = Color::rgba(r, g, b, alpha);
    }

    pub fn set_color_hex(&mut self, rgba: u32) {
        self.color = Color::from_u32(rgba);
    }

    pub fn set_speed_range(&mut self, min: f64, max: f64) {
        self.speed_range = (min, max);
    }

    pub fn set_size_range(&mut self, min: f64, max: f64) {
        self.size_range = (min, max);
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }
}

impl FieldOptions {
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count as usize
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed_range(&self) -> (f64, f64) {
        self.speed_range
    }

    pub fn size_range(&self) -> (f64, f64) {
        self.size_range
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.color.is_valid() {
            return Err(FieldError::InvalidOption(format!(
                "color alpha {} is outside [0, 1]",
                self.color.alpha
            )));
        }
        check_range("speed_range", self.speed_range)?;
        check_range("size_range", self.size_range)?;
        if self.size_range.0 < 0.0 {
            return Err(FieldError::InvalidOption(format!(
                "size_range minimum {} is negative",
                self.size_range.0
            )));
        }
        Ok(())
    }
}

fn check_range(name: &str, (min, max): (f64, f64)) -> Result<(), FieldError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(FieldError::InvalidOption(format!(
            "{} [{}, {}) is not finite",
            name, min, max
        )));
    }
    if min > max {
        return Err(FieldError::InvalidOption(format!(
            "{} minimum {} exceeds maximum {}",
            name, min, max
        )));
    }
    Ok(())
}
