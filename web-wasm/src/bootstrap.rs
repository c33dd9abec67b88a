//! 起動処理
//!
//! DOM 構築後に設定を読み込み、調整役を作ってページ上のフォームと地図を結線する。

use std::rc::Rc;

use farm_vision_common::config::CONFIG_ELEMENT_ID;
use farm_vision_common::UiConfig;
use gloo::events::EventListener;
use web_sys::Element;

use crate::feedback::{self, Coordinator};
use crate::{detection, dom, mapping};

pub fn start() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| wire_page()).forget();
    } else {
        wire_page();
    }
}

fn wire_page() {
    let coordinator = Rc::new(Coordinator::new(load_config()));
    feedback::install(coordinator.clone());

    let detection = detection::wire(&coordinator);
    let mapping = mapping::wire(&coordinator);
    gloo::console::log!(format!(
        "farm-vision hazır (tespit: {}, haritalama: {})",
        detection, mapping
    ));
}

/// 埋め込み設定を読む。無い・壊れている場合は既定値。
fn load_config() -> UiConfig {
    let Some(raw) = dom::by_id::<Element>(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!("yapılandırma okunamadı, varsayılanlar kullanılıyor: {}", e));
            UiConfig::default()
        }
    }
}
