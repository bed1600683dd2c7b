// Drawable surface abstraction. The field only needs to clear, pick a fill
// and fill circles, so anything exposing those can host an animation.

use crate::color::Color;
use crate::error::FieldError;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    // Current size in pixels, read again every frame
    fn size(&self) -> Vector2<f64>;

    fn clear(&mut self);

    fn set_fill(&mut self, color: &Color);

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64) -> Result<(), FieldError>;
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, canvas_id: &str) -> Result<Self, FieldError> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| FieldError::ContextUnavailable(canvas_id.to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::ContextUnavailable(canvas_id.to_owned()))?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vector2<f64> {
        [self.canvas.width() as f64, self.canvas.height() as f64]
    }

    fn clear(&mut self) {
        let [width, height] = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn set_fill(&mut self, color: &Color) {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64) -> Result<(), FieldError> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, 2.0 * std::f64::consts::PI)?;
        self.context.fill();
        Ok(())
    }
}
