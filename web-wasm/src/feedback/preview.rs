//! ファイル入力のプレビューとファイル情報表示（DOM）

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use farm_vision_common::preview::{PreviewCard, PreviewSlot, PreviewSurface};
use farm_vision_common::{Error, PendingUpload};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::components::preview_card::PreviewCardView;
use crate::dom;

/// 入力欄の直後に1つだけ置かれるプレビュー枠
#[derive(Clone, Copy)]
pub struct DomPreview {
    card: RwSignal<Option<PreviewCard>>,
}

impl DomPreview {
    fn attach(anchor: &HtmlInputElement) -> Option<Self> {
        let document = dom::document()?;
        let container: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
        container.set_class_name("image-preview-container");

        let parent = anchor.parent_node()?;
        parent
            .insert_before(&container, anchor.next_sibling().as_ref())
            .ok()?;

        let card = RwSignal::new(None::<PreviewCard>);
        leptos::mount::mount_to(container, move || view! { <PreviewCardView card=card /> }).forget();
        Some(Self { card })
    }
}

impl PreviewSurface for DomPreview {
    fn show(&self, card: PreviewCard) {
        self.card.set(Some(card));
    }

    fn clear(&self) {
        self.card.set(None);
    }
}

/// 入力欄ごとのプレビュー枠
#[derive(Default)]
pub struct PreviewRegistry {
    slots: RefCell<HashMap<String, Rc<PreviewSlot<DomPreview>>>>,
}

impl PreviewRegistry {
    fn slot_for(&self, anchor: &HtmlInputElement) -> Option<Rc<PreviewSlot<DomPreview>>> {
        let key = anchor_key(anchor);
        if let Some(slot) = self.slots.borrow().get(&key) {
            return Some(slot.clone());
        }
        let slot = Rc::new(PreviewSlot::new(DomPreview::attach(anchor)?));
        self.slots.borrow_mut().insert(key, slot.clone());
        Some(slot)
    }

    /// 入力欄のプレビューを消す（枠がまだ無ければ何もしない）
    pub fn clear(&self, anchor: &HtmlInputElement) {
        let slot = self.slots.borrow().get(&anchor_key(anchor)).cloned();
        if let Some(slot) = slot {
            slot.clear();
        }
    }

    /// 選択ファイルを読み込み、入力欄の下にプレビューを表示する
    pub fn preview_image(&self, file: web_sys::File, anchor: &HtmlInputElement) {
        let Some(slot) = self.slot_for(anchor) else {
            gloo::console::warn!("önizleme alanı oluşturulamadı");
            return;
        };

        let upload = PendingUpload::new(dom::file_meta(&file));
        let read = async move {
            let file = gloo::file::File::from(file);
            gloo::file::futures::read_as_data_url(&file)
                .await
                .map_err(|e| Error::FileRead(e.to_string()))
        };

        spawn_local(async move {
            match slot.load(upload, read).await {
                Ok(true) => {}
                Ok(false) => gloo::console::log!("eski önizleme yok sayıldı"),
                Err(e) => gloo::console::error!(e.to_string()),
            }
        });
    }
}

/// 入力欄の識別子（id が無ければ name）
fn anchor_key(anchor: &HtmlInputElement) -> String {
    let id = anchor.id();
    if id.is_empty() {
        anchor.name()
    } else {
        id
    }
}

/// 入力欄に対応するファイル情報表示を更新する（None なら隠す）
pub fn show_file_info(anchor: &HtmlInputElement, upload: Option<&PendingUpload>) {
    let target = dom::by_id::<HtmlElement>(&format!("{}-info", anchor_key(anchor))).or_else(|| {
        anchor
            .parent_element()
            .and_then(|parent| dom::query_in::<HtmlElement>(&parent, ".file-info"))
    });
    let Some(target) = target else {
        return;
    };
    let Some(upload) = upload else {
        target.set_text_content(None);
        dom::set_visible(&target, false);
        return;
    };

    target.set_text_content(Some(&format!(
        "{} ({}, {})",
        upload.file.name,
        upload.display_type(),
        upload.display_size()
    )));
    dom::set_visible(&target, true);
}
