//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

use particle_field_backend::scheduler::{AnimationFrameScheduler, FrameScheduler};
use particle_field_backend::{start_particle_field, start_particle_field_with, FieldOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str, width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(width);
    canvas.set_height(height);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn page_without_canvas_starts_nothing() {
    let mut options = FieldOptions::new();
    options.set_canvas_id("noSuchCanvas");
    let handle = start_particle_field_with(&options).unwrap();
    assert!(handle.is_none());
}

#[wasm_bindgen_test]
fn default_canvas_gets_fifty_particles() {
    let canvas = add_canvas("canvasOne", 320, 200);
    let handle = start_particle_field().unwrap().expect("canvasOne exists");
    assert!(handle.is_running());
    assert_eq!(handle.particle_count(), 50);
    assert_eq!(handle.frame_count(), 1.0);
    assert!(handle.stop());
    assert!(!handle.is_running());
    assert!(!handle.stop());
    assert_eq!(handle.last_error(), None);
    canvas.remove();
}

#[wasm_bindgen_test]
fn options_pick_the_canvas_and_count() {
    let canvas = add_canvas("hero", 64, 64);
    let mut options = FieldOptions::new();
    options.set_canvas_id("hero");
    options.set_particle_count(5);
    options.set_seed(11);
    options.set_debug(true);
    let handle = start_particle_field_with(&options).unwrap().unwrap();
    assert_eq!(handle.particle_count(), 5);
    handle.stop();
    canvas.remove();
}

#[wasm_bindgen_test]
fn non_canvas_element_is_an_error() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("notACanvas");
    document.body().unwrap().append_child(&div).unwrap();

    let mut options = FieldOptions::new();
    options.set_canvas_id("notACanvas");
    assert!(start_particle_field_with(&options).is_err());
    div.remove();
}

#[wasm_bindgen_test]
fn cancelling_stale_frames_is_harmless() {
    let window = web_sys::window().unwrap();
    let mut scheduler = AnimationFrameScheduler::new(window, true);
    let id = scheduler.request_frame(Box::new(|| {})).unwrap();
    scheduler.cancel_frame(id);
    scheduler.cancel_frame(id);
    scheduler.cancel_frame(-1);
}
