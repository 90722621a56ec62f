//! WebAssembly bindings for the sorting visualizer.
//!
//! Browser players receive the untagged pair stream plus the dialect name,
//! or the already decoded playback steps.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    animation::{EventPair, PlaybackStep},
    compute::SortEngine,
    schema::{Algorithm, ArrayConfig, Dialect, Value, VisualizerConfig, generate_values},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

/// Result of one engine run as handed to JavaScript.
#[derive(Serialize)]
struct TraceSnapshot<'a> {
    dialect: Dialect,
    sorted: &'a [Value],
    animations: Vec<EventPair>,
}

/// WebAssembly wrapper around a sorting engine.
#[wasm_bindgen]
pub struct WasmSorter {
    engine: SortEngine,
}

#[wasm_bindgen]
impl WasmSorter {
    /// Create a sorter; pass a seed for reproducible quick sort pivots.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WasmSorter {
        WasmSorter {
            engine: SortEngine::from_seed(seed),
        }
    }

    /// Run an algorithm and return `{ dialect, sorted, animations }`.
    ///
    /// `animations` is the untagged `[a, b]` pair stream.
    #[wasm_bindgen(js_name = getAnimations)]
    pub fn get_animations(&mut self, algorithm: &str, values: Vec<i64>) -> Result<JsValue, JsValue> {
        let algorithm = parse_algorithm(algorithm)?;
        let mut values = values;
        let trace = self.engine.run(algorithm, &mut values);

        let snapshot = TraceSnapshot {
            dialect: trace.dialect(),
            sorted: &values,
            animations: trace.encode(),
        };
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Run an algorithm and return decoded playback steps.
    #[wasm_bindgen(js_name = getSteps)]
    pub fn get_steps(&mut self, algorithm: &str, values: Vec<i64>) -> Result<JsValue, JsValue> {
        let algorithm = parse_algorithm(algorithm)?;
        let mut values = values;
        let steps: Vec<PlaybackStep> = self.engine.run(algorithm, &mut values).steps();
        serde_wasm_bindgen::to_value(&steps)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

/// Generate a random demo array.
#[wasm_bindgen(js_name = randomArray)]
pub fn random_array(size: usize, min_value: i64, max_value: i64) -> Result<Vec<i64>, JsValue> {
    let config = VisualizerConfig {
        array: ArrayConfig {
            size,
            min_value,
            max_value,
            seed: None,
        },
        ..Default::default()
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(generate_values(&config.array))
}

fn parse_algorithm(name: &str) -> Result<Algorithm, JsValue> {
    name.parse::<Algorithm>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
