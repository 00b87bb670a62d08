//! Browser-side checks for the WASM bindings (`wasm-pack test --headless --firefox`)

#![cfg(target_arch = "wasm32")]

use page_series::wasm::flat_buffer::{decode_series, OP_CURRENT};
use page_series::WasmPager;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_pager_accessors() {
    let pager = WasmPager::new(100, 20, 4).map_err(JsValue::from).unwrap();
    assert_eq!(pager.count(), 100.0);
    assert_eq!(pager.items(), 20.0);
    assert_eq!(pager.page(), 4.0);
    assert_eq!(pager.requested_page(), 4.0);
    assert_eq!(pager.last(), 5.0);
    assert_eq!(pager.first_item(), 61.0);
    assert_eq!(pager.last_item(), 80.0);
    assert_eq!(pager.in_page(), 20.0);
    assert_eq!(pager.prev(), Some(3.0));
    assert_eq!(pager.next(), Some(5.0));
}

#[wasm_bindgen_test]
fn test_series_array() {
    let pager = WasmPager::new(720, 20, 4).map_err(JsValue::from).unwrap();
    let series = pager.series(&[1, 0, 0, 1]).map_err(JsValue::from).unwrap();
    assert_eq!(series.length(), 5);
    assert_eq!(series.get(0), JsValue::from_f64(1.0));
    assert_eq!(series.get(1), JsValue::from_str("gap"));
    assert_eq!(series.get(2), JsValue::from_str("4"));
}

#[wasm_bindgen_test]
fn test_series_buffer() {
    let mut pager = WasmPager::new(720, 20, 4).map_err(JsValue::from).unwrap();
    pager.write_series(&[5]).map_err(JsValue::from).unwrap();
    let decoded = decode_series(pager.buffer()).unwrap();
    assert_eq!(decoded.series.current(), Some(4));
    assert!(pager.buffer().contains(&OP_CURRENT));
}

#[wasm_bindgen_test]
fn test_from_json_and_errors() {
    let pager = WasmPager::from_json(r#"{"count": 50, "items": "10", "page": "2"}"#).map_err(JsValue::from).unwrap();
    assert_eq!(pager.offset(), 10.0);
    assert!(WasmPager::new(50, 0, 1).is_err());
    assert!(WasmPager::new(50, 10, 9).is_err());
    assert!(pager.metadata_json(&[1, 2]).is_err());
}
