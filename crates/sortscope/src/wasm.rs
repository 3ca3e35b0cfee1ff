//! WebAssembly bindings for Sortscope
//!
//! Lets a browser page drive a sorter step by step and paint each snapshot
//! on its own canvas, or use the text renderer directly.

use wasm_bindgen::prelude::*;

use crate::algorithms::{algorithm_names as names, create_sorter, Sorter};
use crate::core::{CharacterSet, RenderConfig, Step};
use crate::generate::list_kind_names as kind_names;
use crate::render::BarRenderer;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = crate::core::logging::init_logging(Some("info"), None);
}

/// Algorithm identifiers in menu order, as a JSON array
#[wasm_bindgen]
pub fn algorithm_names() -> String {
    serde_json::Value::from(names()).to_string()
}

/// List kind names in menu order, as a JSON array
#[wasm_bindgen]
pub fn list_kind_names() -> String {
    serde_json::Value::from(kind_names()).to_string()
}

/// A sorter over plain numbers, advanced from JavaScript
#[wasm_bindgen]
pub struct WebSorter {
    sorter: Sorter<u32>,
}

#[wasm_bindgen]
impl WebSorter {
    /// Create a sorter by algorithm name; throws on unknown names
    #[wasm_bindgen(constructor)]
    pub fn new(algorithm: &str, values: Vec<u32>) -> Result<WebSorter, JsValue> {
        create_sorter(values, algorithm)
            .map(|sorter| WebSorter { sorter })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advance one step; returns false once the run is over
    pub fn advance(&mut self) -> bool {
        matches!(self.sorter.advance(), Step::Yielded(_))
    }

    pub fn is_sorted(&self) -> bool {
        self.sorter.is_sorted()
    }

    pub fn steps(&self) -> usize {
        self.sorter.steps()
    }

    /// Values of the current snapshot
    pub fn values(&self) -> Vec<u32> {
        self.sorter.snapshot().list.as_slice().to_vec()
    }

    /// Role of every bar as a JSON array of names
    pub fn roles(&self) -> String {
        let roles: Vec<String> = self
            .sorter
            .snapshot()
            .roles()
            .iter()
            .map(ToString::to_string)
            .collect();
        serde_json::Value::from(roles).to_string()
    }

    /// Color name for every bar as a JSON array
    pub fn colors(&self) -> String {
        let colors: Vec<&str> = self
            .sorter
            .snapshot()
            .roles()
            .iter()
            .map(|role| role.color_name())
            .collect();
        serde_json::Value::from(colors).to_string()
    }

    /// Render the last frame as text; throws on unknown styles
    pub fn render(&self, style: &str, width: usize, height: usize) -> Result<String, JsValue> {
        let charset: CharacterSet = style.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let renderer = BarRenderer::new(RenderConfig::new(charset, width, height));
        Ok(renderer.render(&self.sorter.frame()))
    }
}
