//! requestAnimationFrame driver.
//!
//! The frame closure owns a handle to the stage and re-requests itself
//! while `StageCore::tick` says so. `cancel` drops the pending request and
//! the closure, breaking the self-reference.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::StageError;
use crate::simulation::StageCore;

use super::canvas::CanvasPainter;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct RafDriver {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl RafDriver {
    pub fn start(
        window: Window,
        stage: Rc<RefCell<StageCore>>,
        painter: Option<CanvasPainter>,
    ) -> Result<Self, StageError> {
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let frame_handle = handle.clone();
        let frame_callback = callback.clone();
        let frame_window = window.clone();
        let closure: FrameCallback = Closure::new(move |_timestamp: f64| {
            frame_handle.set(None);

            let keep_going = {
                let mut stage = stage.borrow_mut();
                let keep_going = stage.tick();
                if keep_going {
                    if let Some(painter) = painter.as_ref() {
                        if let Err(err) = painter.paint(stage.debug_commands()) {
                            log::warn!("debug paint failed: {}", err);
                        }
                    }
                }
                keep_going
            };
            if !keep_going {
                return;
            }

            if let Some(next) = frame_callback.borrow().as_ref() {
                match frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    Ok(id) => frame_handle.set(Some(id)),
                    Err(err) => log::error!("requestAnimationFrame failed: {:?}", err),
                }
            }
        });

        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(StageError::dom)?;
        handle.set(Some(id));
        *callback.borrow_mut() = Some(closure);

        Ok(Self { window, handle, callback })
    }

    /// Drop the pending frame and release the closure
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        self.callback.borrow_mut().take();
    }
}
