use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use crate::core::{ContainerMetrics, StageError};
use crate::domain::StageConfig;
use crate::simulation::{PerfStats, StageCore, CONTAINER_STYLE, SLOT_STYLE};

use super::canvas::CanvasPainter;
use super::raf::RafDriver;

/// Physics stage bound to one container element
#[wasm_bindgen]
pub struct PhysicsStage {
    core: Rc<RefCell<StageCore>>,
    canvas: Option<HtmlCanvasElement>,
    driver: Option<RafDriver>,
}

#[wasm_bindgen]
impl PhysicsStage {
    /// Create a stage from a JSON config (`gravX`, `gravY`, `sleeping`,
    /// `debug`, `wallOptions`); missing fields take their defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PhysicsStage, JsValue> {
        let config = match config_json {
            Some(json) => StageConfig::from_json(&json)?,
            None => StageConfig::default(),
        };
        Ok(Self::with_config(config))
    }

    /// Style the container, wrap its children, build the walls, attach the
    /// debug canvas and start the frame loop.
    ///
    /// Returns false when `container` is null. A second mount fails before
    /// the page is touched.
    pub fn mount(&mut self, container: Option<HtmlElement>) -> Result<bool, JsValue> {
        self.core.borrow().ensure_mountable()?;
        let Some(container) = container else {
            return Ok(self.core.borrow_mut().mount(None)?);
        };
        let window = web_sys::window().ok_or(StageError::NoWindow)?;
        let document = window.document().ok_or(StageError::NoDocument)?;

        apply_style(&container, &CONTAINER_STYLE)?;
        container.set_draggable(false);
        let children = wrap_children(&document, &container)?;

        let metrics = measure(&container);
        let debug_size = {
            let mut core = self.core.borrow_mut();
            core.set_children(children);
            if !core.mount(Some(metrics))? {
                return Ok(false);
            }
            core.renderer().map(|r| (r.options().width, r.options().height))
        };

        let painter = match debug_size {
            Some((width, height)) => {
                match CanvasPainter::attach(&document, &container, width, height) {
                    Ok((painter, canvas)) => {
                        self.canvas = Some(canvas);
                        Some(painter)
                    }
                    Err(err) => {
                        self.core.borrow_mut().unmount();
                        return Err(err.into());
                    }
                }
            }
            None => None,
        };

        if self.core.borrow().frame_loop().is_pending() {
            self.driver = Some(RafDriver::start(window, self.core.clone(), painter)?);
        }
        Ok(true)
    }

    /// Cancel the frame loop and remove the debug canvas
    pub fn unmount(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.cancel();
        }
        self.core.borrow_mut().unmount();
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.core.borrow().is_mounted()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.borrow().frame()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.borrow().body_count()
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        Ok(self.core.borrow().config().to_json()?)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.borrow_mut().set_gravity(x, y);
    }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.borrow_mut().enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.borrow().perf_stats()
    }

    // === BODY API ===

    /// Spawn a dynamic rectangle centred at (x, y); returns the body id
    pub fn spawn_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.borrow_mut().spawn_rectangle(x, y, w, h)
    }

    /// Spawn a dynamic circle centred at (x, y); returns the body id
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32) -> u32 {
        self.core.borrow_mut().spawn_circle(x, y, radius)
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.borrow_mut().remove_body(id)
    }

    /// Tie child wrapper `slot` to a body so `slot_transforms` reports it
    pub fn bind_child(&mut self, slot: usize, body_id: u32) -> bool {
        self.core.borrow_mut().bind_child(slot, body_id)
    }

    /// `[id, x, y, angle]` per non-static body
    pub fn body_transforms(&self) -> Vec<f32> {
        self.core.borrow().body_transforms()
    }

    /// `[slot, x, y, angle]` per bound child wrapper
    pub fn slot_transforms(&self) -> Vec<f32> {
        self.core.borrow().slot_transforms()
    }
}

impl PhysicsStage {
    pub fn with_config(config: StageConfig) -> Self {
        Self {
            core: Rc::new(RefCell::new(StageCore::new(config))),
            canvas: None,
            driver: None,
        }
    }
}

impl Drop for PhysicsStage {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn apply_style(element: &HtmlElement, props: &[(&str, &str)]) -> Result<(), StageError> {
    let style = element.style();
    for (name, value) in props {
        style.set_property(name, value).map_err(StageError::dom)?;
    }
    Ok(())
}

/// Move every child element into its own hidden wrapper; returns the count
fn wrap_children(document: &Document, container: &HtmlElement) -> Result<usize, StageError> {
    let collection = container.children();
    let children: Vec<_> = (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect();

    for child in children.iter() {
        let wrapper = document
            .create_element("div")
            .map_err(StageError::dom)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| StageError::Dom("wrapper is not an HtmlElement".to_string()))?;
        apply_style(&wrapper, &SLOT_STYLE)?;
        wrapper.set_draggable(false);
        container
            .insert_before(&wrapper, Some(&**child))
            .map_err(StageError::dom)?;
        wrapper.append_child(child).map_err(StageError::dom)?;
    }

    Ok(children.len())
}

fn measure(container: &HtmlElement) -> ContainerMetrics {
    let rect = container.get_bounding_client_rect();
    ContainerMetrics::new(rect.width() as f32, rect.height() as f32).with_client_size(
        container.client_width().max(0) as u32,
        container.client_height().max(0) as u32,
    )
}
