//! WASM bindings for the page model and series

pub mod flat_buffer;

use crate::{Page, PageVars, WindowSpec};
use flat_buffer::SeriesBuffer;
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed page wrapper
#[wasm_bindgen]
pub struct WasmPager {
    page: Page,
    buffer: SeriesBuffer,
}

#[wasm_bindgen]
impl WasmPager {
    /// Create a pager for `count` items, `items` per page, showing `page`
    #[wasm_bindgen(constructor)]
    pub fn new(count: u32, items: u32, page: u32) -> Result<WasmPager, JsError> {
        let vars = PageVars::new(u64::from(count))
            .with_items(u64::from(items))
            .with_page(u64::from(page));
        Self::from_vars(&vars)
    }

    /// Create a pager from a JSON object of vars, e.g. `{"count": 300, "page": "2"}`
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(vars: &str) -> Result<WasmPager, JsError> {
        let value: serde_json::Value = serde_json::from_str(vars)?;
        let vars = PageVars::from_json(&value)?;
        Self::from_vars(&vars)
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> f64 {
        self.page.count() as f64
    }

    /// Effective items per page
    #[wasm_bindgen(getter)]
    pub fn items(&self) -> f64 {
        self.page.items() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn page(&self) -> f64 {
        self.page.page() as f64
    }

    #[wasm_bindgen(getter = requestedPage)]
    pub fn requested_page(&self) -> f64 {
        self.page.requested_page() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn last(&self) -> f64 {
        self.page.last() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> f64 {
        self.page.offset() as f64
    }

    #[wasm_bindgen(getter = from)]
    pub fn first_item(&self) -> f64 {
        self.page.from() as f64
    }

    #[wasm_bindgen(getter = to)]
    pub fn last_item(&self) -> f64 {
        self.page.to() as f64
    }

    /// Number of items on this page
    #[wasm_bindgen(getter = in)]
    pub fn in_page(&self) -> f64 {
        self.page.in_page() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn prev(&self) -> Option<f64> {
        self.page.prev().map(|n| n as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn next(&self) -> Option<f64> {
        self.page.next().map(|n| n as f64)
    }

    /// Series as a JS array: numbers, the current page as a string, `"gap"` for gaps
    pub fn series(&self, size: &[u32]) -> Result<Array, JsError> {
        let series = self.page.series(&WindowSpec::from_slice(size)?)?;
        Ok(series
            .iter()
            .map(|item| match item {
                crate::SeriesItem::Page(n) => JsValue::from_f64(*n as f64),
                crate::SeriesItem::Current(n) => JsValue::from_str(&n.to_string()),
                crate::SeriesItem::Gap => JsValue::from_str("gap"),
            })
            .collect())
    }

    /// Encode the series into the shared buffer; read it through
    /// `bufferPtr`/`bufferLen` (see [`flat_buffer`] for the layout)
    #[wasm_bindgen(js_name = writeSeries)]
    pub fn write_series(&mut self, size: &[u32]) -> Result<(), JsError> {
        let series = self.page.series(&WindowSpec::from_slice(size)?)?;
        self.buffer
            .write_series(self.page.page(), self.page.last(), &series);
        Ok(())
    }

    #[wasm_bindgen(js_name = bufferPtr)]
    pub fn buffer_ptr(&self) -> u32 {
        self.buffer.u32_ptr()
    }

    #[wasm_bindgen(js_name = bufferLen)]
    pub fn buffer_len(&self) -> u32 {
        self.buffer.u32_len()
    }

    /// Page metadata plus series as a JSON string
    #[wasm_bindgen(js_name = metadataJson)]
    pub fn metadata_json(&self, size: &[u32]) -> Result<String, JsError> {
        let metadata = self.page.metadata(&WindowSpec::from_slice(size)?)?;
        Ok(metadata.to_json()?)
    }
}

impl WasmPager {
    fn from_vars(vars: &PageVars) -> Result<WasmPager, JsError> {
        Ok(Self {
            page: Page::new(vars)?,
            buffer: SeriesBuffer::new(),
        })
    }

    /// The wrapped page
    pub fn inner(&self) -> &Page {
        &self.page
    }

    /// Encoded series from the last `write_series` call
    pub fn buffer(&self) -> &[u32] {
        self.buffer.as_slice()
    }
}
