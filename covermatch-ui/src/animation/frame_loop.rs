//! Frame Loop
//!
//! Runs a callback once per animation frame until cancelled or dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

struct Inner {
    handle: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn request(&self) {
        if self.cancelled.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };

        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => {
                web_sys::console::error_2(&"requestAnimationFrame failed:".into(), &e);
                self.handle.set(None);
            }
        }
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Handle to a running per-frame callback
///
/// The browser only holds a weak reference back to the loop, so dropping the
/// handle stops the loop as well.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    /// Schedule `on_frame` for the next frame and every frame after it; the
    /// argument is the frame timestamp in milliseconds
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(Inner {
            handle: Cell::new(None),
            cancelled: Cell::new(false),
            callback: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            if inner.cancelled.get() {
                return;
            }
            on_frame(timestamp);
            inner.request();
        });

        *inner.callback.borrow_mut() = Some(closure);
        inner.request();

        Self { inner }
    }

    /// Stop scheduling frames; a pending frame is withdrawn
    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
