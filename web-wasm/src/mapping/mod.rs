//! マッピングページのコントローラ
//!
//! GeoTIFF アップロードフォームの検証、地図の初期化、解析結果の表示・ダウンロード。

mod leaflet;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use farm_vision_common::download::DownloadLink;
use farm_vision_common::map::{BASE_LAYERS, SAMPLE_OVERLAY_TITLE};
use farm_vision_common::{DetailKind, FileConstraints, MapSettings, Notifier, PendingUpload};
use gloo::events::EventListener;
use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::feedback::{self, show_file_info, Coordinator};
use crate::{dom, forms};
use leaflet::{Control, LeafletMap};

thread_local! {
    static MAP: RefCell<Option<LeafletMap>> = const { RefCell::new(None) };
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: [f64; 2],
    zoom: u8,
    zoom_control: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    attribution: &'static str,
    max_zoom: u8,
}

#[derive(Serialize)]
struct LayersControlOptions {
    collapsed: bool,
}

#[derive(Serialize)]
struct ScaleOptions {
    metric: bool,
    imperial: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeasureOptions {
    position: &'static str,
    primary_length_unit: &'static str,
    primary_area_unit: &'static str,
}

#[derive(Serialize)]
struct OverlayOptions {
    opacity: f64,
}

/// マッピングフォームと地図を結線する。対象が無ければ false。
pub fn wire(coordinator: &Rc<Coordinator>) -> bool {
    let form_elements = dom::query_all(&coordinator.config().mapping_form_selector);

    for form in &form_elements {
        forms::guard_submit(coordinator, form, FileConstraints::geotiff());

        if let Some(input) = dom::query_in::<HtmlInputElement>(form, forms::IMAGE_INPUT) {
            wire_file_info(input);
        }
        panel::wire(coordinator, form);
    }

    let has_map = dom::by_id::<HtmlElement>(&coordinator.config().map.container_id).is_some();
    if has_map {
        if let Err(e) = initialize(&coordinator.config().map) {
            gloo::console::error!(format!("harita başlatılamadı: {:?}", e));
        }
    }

    !form_elements.is_empty() || has_map
}

/// GeoTIFF はプレビューせず、ファイル情報だけ出す
fn wire_file_info(input: HtmlInputElement) {
    let target = input.clone();
    EventListener::new(&input, "change", move |_| {
        let upload = dom::selected_file(&target).map(|file| PendingUpload::new(dom::file_meta(&file)));
        show_file_info(&target, upload.as_ref());
    })
    .forget();
}

/// 地図を作成し、ベースレイヤー・コントロール・解析オーバーレイを登録する
fn initialize(settings: &MapSettings) -> Result<LeafletMap, JsValue> {
    if let Some(existing) = MAP.with(|map| map.borrow().clone()) {
        return Ok(existing);
    }
    if !leaflet::is_loaded() {
        return Err(JsValue::from_str("Leaflet yüklenmedi"));
    }
    if dom::by_id::<HtmlElement>(&settings.container_id).is_none() {
        return Err(JsValue::from_str(&format!("harita alanı yok: #{}", settings.container_id)));
    }

    let map = leaflet::create_map(
        &settings.container_id,
        &to_value(&MapOptions {
            center: settings.center,
            zoom: settings.zoom,
            zoom_control: true,
        })?,
    )?;

    let base_layers = Object::new();
    for layer in BASE_LAYERS.iter() {
        let tile = leaflet::tile_layer(
            layer.url,
            &to_value(&TileOptions {
                attribution: layer.attribution,
                max_zoom: layer.max_zoom,
            })?,
        );
        if layer.active_by_default {
            tile.add_to(&map);
        }
        Reflect::set(&base_layers, &JsValue::from_str(layer.title), &tile)?;
    }

    let layers_control = leaflet::layers_control(
        &base_layers,
        &Object::new(),
        &to_value(&LayersControlOptions { collapsed: false })?,
    );
    layers_control.add_control_to(&map);

    leaflet::scale_control(&to_value(&ScaleOptions {
        metric: true,
        imperial: false,
    })?)
    .add_control_to(&map);

    let measure_options = to_value(&MeasureOptions {
        position: "topleft",
        primary_length_unit: "meters",
        primary_area_unit: "sqmeters",
    })?;
    match leaflet::add_measure_control(&map, &measure_options) {
        Ok(true) => {}
        Ok(false) => gloo::console::log!("ölçüm eklentisi yok, atlanıyor"),
        Err(e) => gloo::console::warn!(format!("ölçüm aracı eklenemedi: {:?}", e)),
    }

    if let Err(e) = load_analysis_layers(&map, &layers_control, settings) {
        gloo::console::warn!(format!("analiz katmanları yüklenemedi: {:?}", e));
    }

    MAP.with(|slot| *slot.borrow_mut() = Some(map.clone()));
    gloo::console::log!("harita başlatıldı");
    Ok(map)
}

/// 解析オーバーレイ群（サンプル画像入り）を地図とレイヤー切替に登録する
fn load_analysis_layers(
    map: &LeafletMap,
    layers_control: &Control,
    settings: &MapSettings,
) -> Result<(), JsValue> {
    let group = leaflet::layer_group();
    let overlay = leaflet::image_overlay(
        &settings.sample_overlay_url,
        &to_value(&settings.sample_overlay_bounds)?,
        &to_value(&OverlayOptions {
            opacity: settings.sample_overlay_opacity,
        })?,
    );
    group.add_layer(&overlay);
    group.add_to(map);

    layers_control.add_overlay(&group, &settings.overlay_group_name);
    gloo::console::log!(format!("{} katmana eklendi", SAMPLE_OVERLAY_TITLE));
    Ok(())
}

#[wasm_bindgen(js_name = initializeMap)]
pub fn initialize_map() -> Result<JsValue, JsValue> {
    let settings = feedback::current()
        .map(|coordinator| coordinator.config().map.clone())
        .unwrap_or_default();
    initialize(&settings).map(JsValue::from)
}

/// 初期化済みの地図（未初期化なら undefined）
#[wasm_bindgen(js_name = mapInstance)]
pub fn map_instance() -> JsValue {
    MAP.with(|map| {
        map.borrow()
            .clone()
            .map(JsValue::from)
            .unwrap_or(JsValue::UNDEFINED)
    })
}

#[wasm_bindgen(js_name = viewAnalysis)]
pub fn view_analysis(id: i32) {
    if let Some(coordinator) = feedback::current() {
        coordinator.open_detail_modal(DetailKind::Analysis, i64::from(id));
    }
}

#[wasm_bindgen(js_name = downloadAnalysis)]
pub fn download_analysis(id: i32) {
    let Some(coordinator) = feedback::current() else {
        return;
    };
    let link = DownloadLink::analysis(coordinator.endpoints(), i64::from(id));
    if let Err(e) = dom::trigger_download(&link) {
        gloo::console::error!(format!("indirme başlatılamadı: {:?}", e));
        coordinator.notifier().error("İndirme başlatılamadı.");
    }
}
