// Refresh-synchronized callback scheduling, backed by requestAnimationFrame in the browser

use crate::error::FieldError;
use crate::timer::Timer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Window};

pub trait FrameScheduler {
    type Handle;

    // Runs `callback` once, before the next repaint
    fn request_frame(&mut self, callback: Box<dyn FnOnce()>) -> Result<Self::Handle, FieldError>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub struct AnimationFrameScheduler {
    window: Window,
    profile_label: Option<&'static str>,
}

impl AnimationFrameScheduler {
    pub const FRAME_LABEL: &'static str = "ParticleField::frame";

    pub fn new(window: Window, profile: bool) -> Self {
        AnimationFrameScheduler {
            window,
            profile_label: if profile {
                Some(AnimationFrameScheduler::FRAME_LABEL)
            } else {
                None
            },
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    type Handle = i32;

    fn request_frame(&mut self, callback: Box<dyn FnOnce()>) -> Result<i32, FieldError> {
        let label = self.profile_label;
        // Frees itself after running; a cancelled frame leaks only this closure
        let closure = Closure::once_into_js(move || {
            let _timer = Timer::start(label);
            callback();
        });
        let id = self
            .window
            .request_animation_frame(closure.unchecked_ref::<js_sys::Function>())?;
        Ok(id)
    }

    fn cancel_frame(&mut self, handle: i32) {
        // A frame that already ran or was never queued leaves nothing to cancel
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            if self.profile_label.is_some() {
                console::warn_2(&"cancelAnimationFrame failed:".into(), &err);
            }
        }
    }
}
