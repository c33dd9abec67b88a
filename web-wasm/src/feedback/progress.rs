//! フォーム送信中・一括処理のプログレス表示（DOM）

use farm_vision_common::batch::BatchProgressView;
use farm_vision_common::progress::BatchProgress;
use farm_vision_common::ProgressSurface;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// 元のボタン内容を保存する属性（表示中の目印を兼ねる）
const ORIGINAL_CONTENT_ATTR: &str = "data-original-content";

/// フォーム1つ分のプログレス表示
#[derive(Debug, Clone)]
pub struct DomProgress {
    button: HtmlElement,
    indicator: Option<HtmlElement>,
}

impl DomProgress {
    /// 送信ボタンが無いフォームは対象外
    pub fn for_form(form: &Element) -> Option<Self> {
        let button = dom::query_in::<HtmlElement>(form, "button[type=\"submit\"]")?;
        let indicator = dom::query_in::<HtmlElement>(form, ".upload-progress, .progress");
        Some(Self { button, indicator })
    }
}

impl ProgressSurface for DomProgress {
    fn button_content(&self) -> String {
        self.button.inner_html()
    }

    fn set_button_content(&self, content: &str) {
        self.button.set_inner_html(content);
    }

    fn set_button_disabled(&self, disabled: bool) {
        if disabled {
            let _ = self.button.set_attribute("disabled", "");
        } else {
            let _ = self.button.remove_attribute("disabled");
        }
    }

    fn saved_content(&self) -> Option<String> {
        self.button.get_attribute(ORIGINAL_CONTENT_ATTR)
    }

    fn save_content(&self, content: Option<&str>) {
        let _ = match content {
            Some(content) => self.button.set_attribute(ORIGINAL_CONTENT_ATTR, content),
            None => self.button.remove_attribute(ORIGINAL_CONTENT_ATTR),
        };
    }

    fn set_indicator_visible(&self, visible: bool) {
        if let Some(indicator) = &self.indicator {
            dom::set_visible(indicator, visible);
        }
    }
}

/// 一括処理の共有プログレスバー（ページに無ければ表示を省く）
pub struct DomBatchBar {
    container: Option<HtmlElement>,
    bar: Option<HtmlElement>,
}

impl DomBatchBar {
    pub fn find() -> Self {
        let container = dom::by_id::<HtmlElement>("batchProgress");
        if container.is_none() {
            gloo::console::warn!("batchProgress bulunamadı");
        }
        let bar = container
            .as_ref()
            .and_then(|container| dom::query_in::<HtmlElement>(container, ".progress-bar"));
        Self { container, bar }
    }

    fn set(&self, percent: u8, label: &str) {
        if let Some(bar) = &self.bar {
            let _ = bar.style().set_property("width", &format!("{}%", percent));
            let _ = bar.set_attribute("aria-valuenow", &percent.to_string());
            bar.set_text_content(Some(label));
        }
    }

    fn set_visible(&self, visible: bool) {
        if let Some(container) = &self.container {
            dom::set_visible(container, visible);
        }
    }
}

impl BatchProgressView for DomBatchBar {
    fn start(&self) {
        self.set(0, "");
        self.set_visible(true);
    }

    fn complete(&self, progress: BatchProgress) {
        self.set(100, &progress.label());
    }

    fn hide(&self) {
        self.set_visible(false);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use farm_vision_common::show_progress;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn form() -> Element {
        let document = dom::document().expect("document");
        let form = document.create_element("form").expect("form");
        form.set_inner_html(
            r#"<button type="submit">Analiz Et</button><div class="upload-progress d-none"></div>"#,
        );
        document.body().expect("body").append_child(&form).expect("append");
        form
    }

    #[wasm_bindgen_test]
    fn wasm_show_progress_then_restore() {
        let form = form();
        let handle = show_progress(DomProgress::for_form(&form).expect("button"));

        let button: HtmlElement = form
            .query_selector("button")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert!(button.has_attribute("disabled"));
        assert!(button.inner_html().contains("İşleniyor"));

        handle.restore();
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.inner_html(), "Analiz Et");
        assert!(button.get_attribute(ORIGINAL_CONTENT_ATTR).is_none());
        form.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_show_progress_twice_keeps_one_spinner() {
        let form = form();
        let first = show_progress(DomProgress::for_form(&form).expect("button"));
        let second = show_progress(DomProgress::for_form(&form).expect("button"));

        let button: HtmlElement = form
            .query_selector("button")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(button.inner_html().matches("spinner-border").count(), 1);
        assert_eq!(first.original_content(), "Analiz Et");
        assert_eq!(second.original_content(), "Analiz Et");

        second.restore();
        assert_eq!(button.inner_html(), "Analiz Et");
        drop(first);
        form.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_form_without_submit_button_is_skipped() {
        let document = dom::document().expect("document");
        let form = document.create_element("form").expect("form");
        assert!(DomProgress::for_form(&form).is_none());
    }
}
