// In-memory stand-ins for the canvas and requestAnimationFrame

use crate::animation::Host;
use crate::color::Color;
use crate::error::FieldError;
use crate::scheduler::FrameScheduler;
use crate::surface::Surface;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Fill(Color),
    Circle(Vector2<f64>, f64),
}

#[derive(Clone)]
pub struct RecordingSurface {
    size: Rc<RefCell<Vector2<f64>>>,
    calls: Rc<RefCell<Vec<DrawCall>>>,
    failing: Rc<Cell<bool>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingSurface {
            size: Rc::new(RefCell::new([width, height])),
            calls: Rc::new(RefCell::new(Vec::new())),
            failing: Rc::new(Cell::new(false)),
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        *self.size.borrow_mut() = [width, height];
    }

    // Makes every later fill_circle fail the way a detached canvas would
    pub fn fail_draws(&self) {
        self.failing.set(true);
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == DrawCall::Clear)
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vector2<f64> {
        *self.size.borrow()
    }

    fn clear(&mut self) {
        self.calls.borrow_mut().push(DrawCall::Clear);
    }

    fn set_fill(&mut self, color: &Color) {
        self.calls.borrow_mut().push(DrawCall::Fill(*color));
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64) -> Result<(), FieldError> {
        if self.failing.get() {
            return Err(FieldError::Js("InvalidStateError".to_owned()));
        }
        self.calls.borrow_mut().push(DrawCall::Circle(center, radius));
        Ok(())
    }
}

type Pending = Vec<(u32, Box<dyn FnOnce()>)>;

// Frames run only when a test calls `fire`
#[derive(Clone, Default)]
pub struct ManualScheduler {
    next_id: Rc<RefCell<u32>>,
    pending: Rc<RefCell<Pending>>,
    cancelled: Rc<RefCell<Vec<u32>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn cancelled(&self) -> Vec<u32> {
        self.cancelled.borrow().clone()
    }

    // Runs every callback due this refresh; callbacks queued while firing wait for the next one
    pub fn fire(&self) -> usize {
        let due = std::mem::take(&mut *self.pending.borrow_mut());
        let count = due.len();
        for (_, callback) in due {
            callback();
        }
        count
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&mut self, callback: Box<dyn FnOnce()>) -> Result<u32, FieldError> {
        let mut next_id = self.next_id.borrow_mut();
        *next_id += 1;
        let id = *next_id;
        self.pending.borrow_mut().push((id, callback));
        Ok(id)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.pending.borrow_mut().retain(|(id, _)| *id != handle);
        self.cancelled.borrow_mut().push(handle);
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub surfaces: HashMap<String, RecordingSurface>,
    pub scheduler: ManualScheduler,
}

impl FakeHost {
    pub fn with_surface(id: &str, surface: RecordingSurface) -> Self {
        let mut host = FakeHost::default();
        host.surfaces.insert(id.to_owned(), surface);
        host
    }
}

impl Host for FakeHost {
    type Surface = RecordingSurface;
    type Scheduler = ManualScheduler;

    fn find_surface(&self, id: &str) -> Result<Option<RecordingSurface>, FieldError> {
        Ok(self.surfaces.get(id).cloned())
    }

    fn scheduler(&self) -> Result<ManualScheduler, FieldError> {
        Ok(self.scheduler.clone())
    }
}
