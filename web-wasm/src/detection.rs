//! 検出ページのコントローラ
//!
//! 画像アップロードフォームの検証と進捗表示、結果テーブルの操作（表示・ダウンロード・
//! 削除）、複数画像の一括処理を扱う。

use std::rc::Rc;

use farm_vision_common::batch::{process_batch, BatchProgressView, BATCH_BUSY_MESSAGE};
use farm_vision_common::download::DownloadLink;
use farm_vision_common::{DetailKind, FileConstraints, Notifier};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::feedback::{self, Coordinator, DomBatchBar};
use crate::{dom, forms};

/// 検出フォームを結線する。対象フォームが無ければ false。
pub fn wire(coordinator: &Rc<Coordinator>) -> bool {
    let form_elements = dom::query_all(&coordinator.config().detection_form_selector);
    let constraints =
        FileConstraints::detection_image().with_max_size(coordinator.config().max_image_size);

    for form in &form_elements {
        forms::guard_submit(coordinator, form, constraints);

        if let Some(input) = dom::query_in::<HtmlInputElement>(form, forms::IMAGE_INPUT) {
            wire_preview(coordinator, input);
        }
    }

    if let Some(input) = batch_input() {
        wire_preview_info(input);
    }

    !form_elements.is_empty()
}

fn wire_preview(coordinator: &Rc<Coordinator>, input: HtmlInputElement) {
    let coordinator = coordinator.clone();
    let target = input.clone();
    EventListener::new(&input, "change", move |_| {
        coordinator.preview_image(dom::selected_file(&target), &target);
    })
    .forget();
}

/// 一括入力欄は選択数だけ表示する
fn wire_preview_info(input: HtmlInputElement) {
    let target = input.clone();
    EventListener::new(&input, "change", move |_| {
        let count = dom::selected_files(&target).len();
        if let Some(info) = dom::by_id::<web_sys::HtmlElement>("batchImages-info") {
            info.set_text_content(Some(&format!("{} dosya seçildi", count)));
        }
    })
    .forget();
}

fn batch_input() -> Option<HtmlInputElement> {
    dom::by_id::<HtmlInputElement>("batchImages")
        .or_else(|| dom::query::<HtmlInputElement>("input[type=\"file\"][name=\"images\"]"))
}

#[wasm_bindgen(js_name = viewDetection)]
pub fn view_detection(id: i32) {
    if let Some(coordinator) = feedback::current() {
        coordinator.open_detail_modal(DetailKind::Detection, i64::from(id));
    }
}

#[wasm_bindgen(js_name = downloadResult)]
pub fn download_result(id: i32) {
    let Some(coordinator) = feedback::current() else {
        return;
    };
    let link = DownloadLink::detection(coordinator.endpoints(), i64::from(id));
    if let Err(e) = dom::trigger_download(&link) {
        gloo::console::error!(format!("indirme başlatılamadı: {:?}", e));
        coordinator.notifier().error("İndirme başlatılamadı.");
    }
}

#[wasm_bindgen(js_name = deleteDetection)]
pub fn delete_detection(id: i32) {
    let Some(coordinator) = feedback::current() else {
        return;
    };
    let id = i64::from(id);
    spawn_local(async move {
        let endpoint = coordinator.endpoints().detection_delete(id);
        coordinator
            .confirm_and_delete(DetailKind::Detection, id, &endpoint)
            .await;
    });
}

/// 一括処理完了後に呼ばれる結果更新フックを登録する（null で解除）
#[wasm_bindgen(js_name = setResultsRefreshHook)]
pub fn set_results_refresh_hook(hook: Option<js_sys::Function>) {
    if let Some(coordinator) = feedback::current() {
        coordinator.set_refresh_hook(hook);
    }
}

#[wasm_bindgen(js_name = processBatchImages)]
pub fn process_batch_images() {
    let Some(coordinator) = feedback::current() else {
        return;
    };
    let Some(guard) = coordinator.begin_batch() else {
        coordinator.notifier().warning(BATCH_BUSY_MESSAGE);
        return;
    };
    let files = batch_input()
        .map(|input| dom::selected_files(&input))
        .unwrap_or_default();

    spawn_local(async move {
        let bar = DomBatchBar::find();
        let upload = coordinator
            .client()
            .batch_upload(&coordinator.config().batch_field, files);
        let total = upload.len();

        if process_batch(total, &upload, &bar, coordinator.notifier()).await.is_none() {
            return;
        }

        // 完了表示を見せてから片付ける。それまでは次の一括処理を受け付けない
        let hook = coordinator.refresh_hook();
        Timeout::new(coordinator.config().refresh_delay_ms, move || {
            let _guard = guard;
            bar.hide();
            if let Some(hook) = hook {
                if let Err(e) = hook.call0(&JsValue::NULL) {
                    gloo::console::error!(format!("yenileme kancası hata verdi: {:?}", e));
                }
            }
        })
        .forget();
    });
}
