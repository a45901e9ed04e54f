use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};
use yew::Callback;

use super::driver::RevealDriver;
use super::frame::Frame;
use super::trigger::Geometry;

const LISTENED_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Default)]
struct FrameLoop {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    request_id: Cell<Option<i32>>,
}

impl FrameLoop {
    fn request(&self, window: &Window) {
        if self.request_id.get().is_some() {
            return;
        }
        if let Some(callback) = self.callback.borrow().as_ref() {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => self.request_id.set(Some(id)),
                Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
            }
        }
    }

    fn cancel(&self, window: &Window) {
        if let Some(id) = self.request_id.take() {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Live connection between the window's scroll position and a
/// [`RevealDriver`]. Dropping it removes the listeners and cancels any
/// pending animation frame.
pub struct ScrollBinding {
    window: Window,
    driver: Rc<RefCell<RevealDriver>>,
    frame_loop: Rc<FrameLoop>,
    listener: Closure<dyn FnMut()>,
}

impl ScrollBinding {
    /// Starts observing `element` and emits the driver's frames through
    /// `on_frames` whenever they change. The current scroll position is
    /// applied immediately, so a page restored mid-scroll reveals at once.
    pub fn attach(
        window: Window,
        element: Element,
        driver: RevealDriver,
        on_frames: Callback<Vec<Frame>>,
    ) -> Result<Self, JsValue> {
        let driver = Rc::new(RefCell::new(driver));
        let frame_loop = Rc::new(FrameLoop::default());

        {
            let driver = driver.clone();
            let on_frames = on_frames.clone();
            let window = window.clone();
            let weak_loop: Weak<FrameLoop> = Rc::downgrade(&frame_loop);
            let tick = Closure::wrap(Box::new(move |timestamp: f64| {
                let Some(frame_loop) = weak_loop.upgrade() else {
                    return;
                };
                frame_loop.request_id.set(None);
                let running = driver.borrow_mut().on_animation_frame(timestamp);
                on_frames.emit(driver.borrow().frames());
                if running {
                    frame_loop.request(&window);
                }
            }) as Box<dyn FnMut(f64)>);
            *frame_loop.callback.borrow_mut() = Some(tick);
        }

        let sync = {
            let driver = driver.clone();
            let frame_loop = frame_loop.clone();
            let window = window.clone();
            move || {
                let Some(geometry) = measure(&window, &element) else {
                    return;
                };
                let mut driver = driver.borrow_mut();
                let before = driver.timeline().time();
                let needs_frames = driver.on_scroll(&geometry);
                if driver.timeline().time() != before {
                    on_frames.emit(driver.frames());
                }
                if needs_frames {
                    frame_loop.request(&window);
                }
            }
        };
        sync();
        let listener = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);

        // A registration failure drops the binding, which unregisters
        // whatever was added before it.
        let binding = Self { window, driver, frame_loop, listener };
        for event in LISTENED_EVENTS {
            binding
                .window
                .add_event_listener_with_callback(event, binding.listener.as_ref().unchecked_ref())?;
        }
        debug!("scroll binding attached");
        Ok(binding)
    }
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        for event in LISTENED_EVENTS {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref())
            {
                warn!("failed to remove {} listener: {:?}", event, err);
            }
        }
        self.frame_loop.cancel(&self.window);
        self.driver.borrow_mut().detach();
        debug!("scroll binding dropped");
    }
}

fn measure(window: &Window, element: &Element) -> Option<Geometry> {
    let rect = element.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(Geometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}
