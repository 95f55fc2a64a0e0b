// WebAssembly bindings so a browser form can drive the converter state
use crate::config::Config;
use crate::convert::types::Unit;
use crate::form::state::ConverterForm;
use crate::form::view::FormView;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    form: ConverterForm,
    config: Config,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_unit(unit: &str) -> Result<Unit, JsValue> {
    unit.parse::<Unit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = Config::empty();
        Self {
            form: ConverterForm::from_config(&config),
            config,
        }
    }

    /// Create a converter from TOML configuration content
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            form: ConverterForm::from_config(&config),
            config,
        })
    }

    /// Commit field text for a unit (called when the field loses focus)
    /// Returns JSON of the section whose values changed
    #[wasm_bindgen]
    pub fn commit(&mut self, unit: &str, text: &str) -> Result<String, JsValue> {
        let unit = parse_unit(unit)?;
        let changed = self
            .form
            .commit_text(unit, text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let section = self.form.section_snapshot(changed);
        serde_json::to_string(&section)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize section: {}", e)))
    }

    /// Current value of a unit's field
    #[wasm_bindgen]
    pub fn value(&self, unit: &str) -> Result<f64, JsValue> {
        Ok(self.form.value(parse_unit(unit)?))
    }

    /// Text shown in a unit's field
    #[wasm_bindgen]
    pub fn display_value(&self, unit: &str) -> Result<String, JsValue> {
        Ok(self.form.display_value(parse_unit(unit)?))
    }

    /// JSON snapshot of the whole form
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let snapshot = self.form.snapshot(&self.config);
        serde_json::to_string(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize form: {}", e)))
    }

    #[wasm_bindgen]
    pub fn render(&self) -> String {
        FormView::new(&self.form, &self.config).render()
    }

    /// Unit identifiers in display order
    #[wasm_bindgen]
    pub fn units(&self) -> js_sys::Array {
        Unit::ALL
            .iter()
            .map(|unit| JsValue::from_str(unit.id()))
            .collect()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.form.reset();
    }
}
