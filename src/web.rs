// Browser host and the functions exported to JS

use crate::animation::{self, Animation, Host};
use crate::config::FieldOptions;
use crate::error::FieldError;
use crate::scheduler::AnimationFrameScheduler;
use crate::surface::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlCanvasElement, Window};

pub struct BrowserHost {
    window: Window,
    document: Document,
    profile: bool,
}

impl BrowserHost {
    pub fn new(profile: bool) -> Result<Self, FieldError> {
        let window = web_sys::window().ok_or(FieldError::NoWindow)?;
        let document = window.document().ok_or(FieldError::NoDocument)?;
        Ok(BrowserHost {
            window,
            document,
            profile,
        })
    }
}

impl Host for BrowserHost {
    type Surface = CanvasSurface;
    type Scheduler = AnimationFrameScheduler;

    fn find_surface(&self, id: &str) -> Result<Option<CanvasSurface>, FieldError> {
        let element = match self.document.get_element_by_id(id) {
            Some(element) => element,
            None => return Ok(None),
        };
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FieldError::NotACanvas(id.to_owned()))?;
        CanvasSurface::new(canvas, id).map(Some)
    }

    fn scheduler(&self) -> Result<AnimationFrameScheduler, FieldError> {
        Ok(AnimationFrameScheduler::new(
            self.window.clone(),
            self.profile,
        ))
    }
}

#[wasm_bindgen]
pub struct ParticleFieldHandle {
    animation: Animation<CanvasSurface, AnimationFrameScheduler>,
    canvas_id: String,
    debug: bool,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    pub fn stop(&self) -> bool {
        let stopped = self.animation.stop();
        if stopped && self.debug {
            console::log_1(
                &format!(
                    "particle field on '{}' stopped after {} frames",
                    self.canvas_id,
                    self.animation.frame_count()
                )
                .into(),
            );
        }
        stopped
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    // f64 so JS sees a plain number rather than a BigInt
    pub fn frame_count(&self) -> f64 {
        self.animation.frame_count() as f64
    }

    pub fn particle_count(&self) -> u32 {
        self.animation.particle_count() as u32
    }

    pub fn last_error(&self) -> Option<String> {
        self.animation.last_error().map(|err| err.to_string())
    }
}

#[wasm_bindgen]
pub fn start_particle_field() -> Result<Option<ParticleFieldHandle>, JsValue> {
    start_particle_field_with(&FieldOptions::default())
}

// Resolves to undefined when the page has no canvas with the configured id
#[wasm_bindgen]
pub fn start_particle_field_with(
    options: &FieldOptions,
) -> Result<Option<ParticleFieldHandle>, JsValue> {
    let host = BrowserHost::new(options.debug())?;
    let mut rng = match options.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let animation = match animation::launch(&host, options, &mut rng)? {
        Some(animation) => animation,
        None => return Ok(None),
    };

    let canvas_id = options.canvas_id().to_owned();
    if options.debug() {
        let id = canvas_id.clone();
        animation.set_error_hook(Box::new(move |err| {
            console::error_1(&format!("particle field on '{}' halted: {}", id, err).into());
        }));
        let [width, height] = animation.surface_size();
        console::log_1(
            &format!(
                "particle field started: {} particles on '{}' ({}x{})",
                animation.particle_count(),
                canvas_id,
                width,
                height
            )
            .into(),
        );
    }

    Ok(Some(ParticleFieldHandle {
        animation,
        canvas_id,
        debug: options.debug(),
    }))
}
