//! DOM ヘルパー

use farm_vision_common::download::DownloadLink;
use farm_vision_common::FileMeta;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `d-none` で表示を切り替える。インラインの `display` は消して要素本来の表示（flex 等）に任せる。
pub fn set_visible(element: &HtmlElement, visible: bool) {
    let _ = element.style().remove_property("display");
    let _ = element.class_list().toggle_with_force("d-none", !visible);
}

/// 入力欄で選択されているファイル（先頭のみ）
pub fn selected_file(input: &HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

pub fn selected_files(input: &HtmlInputElement) -> Vec<web_sys::File> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), file.size() as u64)
}

/// 一時的なリンクを作ってクリックし、ブラウザにダウンロードさせる
pub fn trigger_download(link: &DownloadLink) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("document yok"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("body yok"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&link.href);
    anchor.set_download(&link.file_name);
    anchor.style().set_property("display", "none")?;

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// `<meta name="csrf-token">` の値
pub fn csrf_token() -> Option<String> {
    query::<Element>("meta[name=\"csrf-token\"]")
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|token| !token.is_empty())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_set_visible_keeps_flex_display() {
        let document = document().expect("document");
        let progress: HtmlElement = document
            .create_element("div")
            .expect("div")
            .dyn_into()
            .expect("HtmlElement");
        progress.set_class_name("progress d-none");
        progress.style().set_property("display", "none").expect("style");

        set_visible(&progress, true);
        assert_eq!(progress.style().get_property_value("display").unwrap(), "");
        assert!(!progress.class_list().contains("d-none"));

        set_visible(&progress, false);
        assert!(progress.class_list().contains("d-none"));
        assert_eq!(progress.style().get_property_value("display").unwrap(), "");
    }
}
