// The frame loop. A runner owns the surface, the particles and the scheduler;
// every frame renders once and requests the next until stopped.

use crate::color::Color;
use crate::config::FieldOptions;
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::scheduler::FrameScheduler;
use crate::surface::Surface;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use vecmath::Vector2;

// Where an animation finds its surface and its frame clock
pub trait Host {
    type Surface: Surface + 'static;
    type Scheduler: FrameScheduler + 'static;

    fn find_surface(&self, id: &str) -> Result<Option<Self::Surface>, FieldError>;

    fn scheduler(&self) -> Result<Self::Scheduler, FieldError>;
}

pub type ErrorHook = Box<dyn Fn(&FieldError)>;

// Returns Ok(None) without touching the host's scheduler when the surface is missing
pub fn launch<H: Host, R: Rng>(
    host: &H,
    options: &FieldOptions,
    rng: &mut R,
) -> Result<Option<Animation<H::Surface, H::Scheduler>>, FieldError> {
    options.validate()?;
    let surface = match host.find_surface(options.canvas_id())? {
        Some(surface) => surface,
        None => return Ok(None),
    };
    let field = ParticleField::generate(rng, surface.size(), options);
    let scheduler = host.scheduler()?;
    Animation::start(surface, scheduler, field, options.color()).map(Some)
}

struct Runner<S, F: FrameScheduler> {
    surface: S,
    field: ParticleField,
    color: Color,
    scheduler: F,
    pending: Option<F::Handle>,
    running: bool,
    frames: u64,
    last_error: Option<FieldError>,
    on_error: Option<ErrorHook>,
}

pub struct Animation<S: Surface + 'static, F: FrameScheduler + 'static> {
    runner: Rc<RefCell<Runner<S, F>>>,
}

impl<S: Surface + 'static, F: FrameScheduler + 'static> Animation<S, F> {
    // Draws the first frame right away, then keeps itself scheduled
    pub fn start(
        surface: S,
        scheduler: F,
        field: ParticleField,
        color: Color,
    ) -> Result<Self, FieldError> {
        let runner = Rc::new(RefCell::new(Runner {
            surface,
            field,
            color,
            scheduler,
            pending: None,
            running: true,
            frames: 0,
            last_error: None,
            on_error: None,
        }));
        run_frame(&runner)?;
        Ok(Animation { runner })
    }

    pub fn set_error_hook(&self, hook: ErrorHook) {
        self.runner.borrow_mut().on_error = Some(hook);
    }

    // Cancels the pending frame. Returns false if the loop had already ended.
    pub fn stop(&self) -> bool {
        let mut state = self.runner.borrow_mut();
        let was_running = state.running;
        state.running = false;
        if let Some(handle) = state.pending.take() {
            state.scheduler.cancel_frame(handle);
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.runner.borrow().running
    }

    pub fn frame_count(&self) -> u64 {
        self.runner.borrow().frames
    }

    pub fn particle_count(&self) -> usize {
        self.runner.borrow().field.len()
    }

    pub fn last_error(&self) -> Option<FieldError> {
        self.runner.borrow().last_error.clone()
    }

    pub fn surface_size(&self) -> Vector2<f64> {
        self.runner.borrow().surface.size()
    }

    pub fn snapshot(&self) -> ParticleField {
        self.runner.borrow().field.clone()
    }
}

impl<S: Surface + 'static, F: FrameScheduler + 'static> Drop for Animation<S, F> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_frame<S, F>(runner: &Rc<RefCell<Runner<S, F>>>) -> Result<(), FieldError>
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    let mut guard = runner.borrow_mut();
    let state = &mut *guard;
    if !state.running {
        return Ok(());
    }
    state.pending = None;
    state.field.render(&mut state.surface, &state.color)?;
    state.frames += 1;

    let weak = Rc::downgrade(runner);
    let handle = state.scheduler.request_frame(Box::new(move || {
        if let Some(runner) = weak.upgrade() {
            scheduled_frame(&runner);
        }
    }))?;
    state.pending = Some(handle);
    Ok(())
}

// Nobody is waiting on a scheduled frame, so failures end the loop and are kept
fn scheduled_frame<S, F>(runner: &Rc<RefCell<Runner<S, F>>>)
where
    S: Surface + 'static,
    F: FrameScheduler + 'static,
{
    if let Err(err) = run_frame(runner) {
        let hook = {
            let mut state = runner.borrow_mut();
            state.running = false;
            state.last_error = Some(err.clone());
            state.on_error.take()
        };
        // The hook may read the animation, so it runs with the runner released
        if let Some(hook) = hook {
            hook(&err);
            let mut state = runner.borrow_mut();
            if state.on_error.is_none() {
                state.on_error = Some(hook);
            }
        }
    }
}
