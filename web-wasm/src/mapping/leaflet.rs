//! Leaflet（グローバル `L`）へのバインディング

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = Layer)]
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(extends = Layer, js_namespace = L, js_name = LayerGroup)]
    #[derive(Debug, Clone)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = Control)]
    #[derive(Debug, Clone)]
    pub type Control;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = imageOverlay)]
    pub fn image_overlay(url: &str, bounds: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn layers_control(base_layers: &Object, overlays: &Object, options: &JsValue) -> Control;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = scale)]
    pub fn scale_control(options: &JsValue) -> Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_control_to(this: &Control, map: &LeafletMap) -> Control;

    #[wasm_bindgen(method, js_name = addOverlay)]
    pub fn add_overlay(this: &Control, layer: &Layer, name: &str) -> Control;
}

/// Leaflet が読み込まれているか
pub fn is_loaded() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

/// 計測プラグイン（`L.control.measure`）があれば地図に追加する
pub fn add_measure_control(map: &LeafletMap, options: &JsValue) -> Result<bool, JsValue> {
    let leaflet = Reflect::get(&js_sys::global(), &JsValue::from_str("L"))?;
    let control = Reflect::get(&leaflet, &JsValue::from_str("control"))?;
    let measure = Reflect::get(&control, &JsValue::from_str("measure"))?;

    let Some(factory) = measure.dyn_ref::<Function>() else {
        return Ok(false);
    };
    let instance: Control = factory.call1(&control, options)?.unchecked_into();
    instance.add_control_to(map);
    Ok(true)
}
