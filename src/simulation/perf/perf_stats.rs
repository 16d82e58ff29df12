use wasm_bindgen::prelude::*;

/// Snapshot of the last stage tick (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) bodies: u32,
    pub(super) static_bodies: u32,
    pub(super) sleeping_bodies: u32,
    pub(super) contacts: u32,
    pub(super) frame: u64,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn static_bodies(&self) -> u32 { self.static_bodies }
    #[wasm_bindgen(getter)]
    pub fn sleeping_bodies(&self) -> u32 { self.sleeping_bodies }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
