//! WASM bindings for Kirchhoff Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmAnalyzer } from 'kirchhoff_core';
//!
//! await init();
//!
//! const analyzer = new WasmAnalyzer(`
//!   R  0 1
//!   L1 1 2
//!   C  1 2
//!   E  2 0
//!   L2 1 2
//! `);
//!
//! console.log(analyzer.kvl());
//! console.log(analyzer.model());
//! ```

use wasm_bindgen::prelude::*;

use crate::analysis::{Analysis, AnalysisConfig};
use crate::dsl;
use crate::error::KirchhoffError;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(error: KirchhoffError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Analysis of one netlist, with every equation set rendered as text.
#[wasm_bindgen]
pub struct WasmAnalyzer {
    analysis: Analysis,
}

#[wasm_bindgen]
impl WasmAnalyzer {
    /// Parse and analyze a netlist.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str) -> Result<WasmAnalyzer, JsValue> {
        Self::with_config(netlist, true)
    }

    /// Parse and analyze a netlist, optionally keeping its branch order.
    #[wasm_bindgen]
    pub fn with_config(netlist: &str, normalize: bool) -> Result<WasmAnalyzer, JsValue> {
        let circuit = dsl::parse(netlist).map_err(to_js)?;
        let config = AnalysisConfig::new().with_normalize(normalize);
        let analysis = Analysis::with_config::<f64>(circuit, config).map_err(to_js)?;
        Ok(WasmAnalyzer { analysis })
    }

    /// The model system, unknowns first.
    #[wasm_bindgen]
    pub fn model(&self) -> String {
        self.analysis.model_equations().to_string()
    }

    /// KCL equations from the cut-set matrix.
    #[wasm_bindgen]
    pub fn kcl(&self) -> String {
        self.analysis.kcl_equations().to_string()
    }

    /// KVL equations from the loop matrix.
    #[wasm_bindgen]
    pub fn kvl(&self) -> String {
        self.analysis.kvl_equations().to_string()
    }

    #[wasm_bindgen]
    pub fn constitutive(&self) -> String {
        self.analysis.constitutive_equations().join("\n")
    }

    #[wasm_bindgen(getter)]
    pub fn branch_count(&self) -> usize {
        self.analysis.branch_count()
    }

    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.analysis.node_count()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
