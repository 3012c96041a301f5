//! Background Component
//!
//! Full-page canvas with the drifting particle field.

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlCanvasElement;

use crate::animation::{Animator, CanvasSurface, FrameLoop, JsRandom, Viewport};

struct Scene {
    animator: Animator,
    surface: CanvasSurface,
}

impl Scene {
    /// Match the current viewport and scatter a fresh set of particles
    fn reset(&mut self) {
        if let Some(window) = web_sys::window() {
            let viewport = Viewport::from_window(&window);
            self.animator
                .reset(viewport, &mut self.surface, &mut JsRandom);
        }
    }
}

struct Running {
    frames: FrameLoop,
    resize: WindowListenerHandle,
}

impl Running {
    fn stop(self) {
        self.frames.cancel();
        self.resize.remove();
    }
}

/// Animated background canvas
#[component]
pub fn BackgroundCanvas() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let running: Rc<RefCell<Option<Running>>> = Rc::new(RefCell::new(None));

    let running_for_effect = running.clone();
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let canvas: &HtmlCanvasElement = &canvas;

        let Some(surface) = CanvasSurface::new(canvas.clone()) else {
            web_sys::console::error_1(&"Background canvas has no 2D context".into());
            return;
        };

        let scene = Rc::new(RefCell::new(Scene {
            animator: Animator::new(),
            surface,
        }));
        scene.borrow_mut().reset();

        let scene_for_resize = scene.clone();
        let resize = window_event_listener(ev::resize, move |_| {
            scene_for_resize.borrow_mut().reset();
        });

        let frames = FrameLoop::start(move |timestamp| {
            let mut scene = scene.borrow_mut();
            let Scene { animator, surface } = &mut *scene;
            animator.draw_frame(timestamp, surface);
        });

        if let Some(previous) = running_for_effect.replace(Some(Running { frames, resize })) {
            previous.stop();
        }
    });

    on_cleanup(move || {
        if let Some(running) = running.take() {
            running.stop();
        }
    });

    view! {
        <canvas id="bg-canvas" node_ref=canvas_ref aria-hidden="true" />
    }
}
