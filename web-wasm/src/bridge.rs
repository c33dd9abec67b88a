//! ページ側ウィジェット（通知・モーダル）への JavaScript バインディング

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/ui-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = "showNotification", catch)]
    fn show_notification_js(message: &str, level: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = "showModal", catch)]
    fn show_modal_js(id: &str) -> Result<bool, JsValue>;
}

pub fn show_notification(message: &str, level: &str) {
    if let Err(e) = show_notification_js(message, level) {
        gloo::console::error!(format!("bildirim gösterilemedi: {:?}", e));
    }
}

/// モーダルを開く（ウィジェットが無ければ false）
pub fn show_modal(id: &str) -> bool {
    match show_modal_js(id) {
        Ok(shown) => shown,
        Err(e) => {
            gloo::console::error!(format!("modal açılamadı ({}): {:?}", id, e));
            false
        }
    }
}
