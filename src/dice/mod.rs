//! Decorative glass die for the hero banner. Non-interactive: the only
//! input is the frame clock.

pub mod geometry;
pub mod material;
pub mod render;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::dom;
use crate::error::DomError;
use geometry::frame_geometry;
use render::Renderer;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// A `requestAnimationFrame` chain. Each frame receives seconds elapsed
/// since the first frame. Dropping it cancels the pending frame.
pub struct AnimationLoop {
    // Scheduled frames only hold a weak handle to this, so dropping the
    // loop drops the pending `AnimationFrame` and cancels it.
    _pending: FrameSlot,
}

impl AnimationLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let pending: FrameSlot = Rc::new(RefCell::new(None));
        let on_frame: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(on_frame));
        schedule(&pending, on_frame, Rc::new(Cell::new(None)));
        Self { _pending: pending }
    }
}

fn schedule(slot: &FrameSlot, on_frame: Rc<RefCell<dyn FnMut(f64)>>, started_at: Rc<Cell<Option<f64>>>) {
    let weak = Rc::downgrade(slot);
    let handle = request_animation_frame(move |timestamp| {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        let start = started_at.get().unwrap_or(timestamp);
        started_at.set(Some(start));
        (&mut *on_frame.borrow_mut())((timestamp - start) / 1000.0);
        schedule(&slot, on_frame, started_at);
    });
    *slot.borrow_mut() = Some(handle);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")?
        .ok_or(DomError::CanvasUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DomError::CanvasUnavailable)
}

/// Matches the backing store to the element's CSS size. Returns the CSS
/// size the frame should be laid out in.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> Result<(f64, f64), DomError> {
    let dpr = dom::window()?.device_pixel_ratio().clamp(1.0, 2.0);
    let width = canvas.client_width().max(1) as f64;
    let height = canvas.client_height().max(1) as f64;
    let backing_width = (width * dpr).round() as u32;
    let backing_height = (height * dpr).round() as u32;
    if canvas.width() != backing_width || canvas.height() != backing_height {
        canvas.set_width(backing_width);
        canvas.set_height(backing_height);
    }
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    Ok((width, height))
}

fn start_scene(canvas: HtmlCanvasElement) -> Result<AnimationLoop, DomError> {
    let ctx = context_2d(&canvas)?;
    let renderer = Renderer::new();
    let mut failed = false;
    Ok(AnimationLoop::start(move |elapsed| {
        if failed {
            return;
        }
        let result = fit_canvas(&canvas, &ctx).and_then(|(width, height)| {
            let frame = frame_geometry(elapsed, width, height);
            renderer.draw(&ctx, &frame, width, height)
        });
        if let Err(e) = result {
            log::warn!("Dice scene stopped drawing: {}", e);
            failed = true;
        }
    }))
}

#[function_component(DiceScene)]
pub fn dice_scene() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let animation = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(DomError::MissingElement("dice canvas".to_string()))
                    .and_then(start_scene);
                let animation = match animation {
                    Ok(animation) => {
                        log::debug!("Dice scene started");
                        Some(animation)
                    }
                    Err(e) => {
                        log::warn!("Dice scene unavailable: {}", e);
                        None
                    }
                };
                move || drop(animation)
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="dice-scene"
            aria-hidden="true"
            style="width: 100%; height: 100%; display: block;"
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn loop_runs_until_dropped() {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let animation = {
            let frames = frames.clone();
            AnimationLoop::start(move |elapsed| frames.borrow_mut().push(elapsed))
        };

        TimeoutFuture::new(300).await;
        let seen = frames.borrow().len();
        assert!(seen >= 2, "only {} frames ran", seen);
        assert_eq!(frames.borrow()[0], 0.0);
        assert!(frames.borrow().windows(2).all(|w| w[1] >= w[0]));

        drop(animation);
        let frozen = frames.borrow().len();
        TimeoutFuture::new(200).await;
        assert_eq!(frames.borrow().len(), frozen);
    }
}
