use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

#[wasm_bindgen]
pub struct Diagram { pub(crate) inner: arcfill::Diagram }

impl Diagram {
    pub fn rs_new() -> Diagram { Diagram { inner: arcfill::Diagram::new() } }
    pub fn rs_geom_version(&self) -> u64 { self.inner.geom_version() }
}
