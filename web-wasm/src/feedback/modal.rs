//! 詳細モーダルの表示面（DOM）

use farm_vision_common::{DetailKind, Endpoints, ModalSurface, ModalView};
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::bridge;
use crate::components::detail_body::DetailBody;
use crate::dom;

/// Bootstrap モーダル1つ分。本文は状態シグナルから描画する。
#[derive(Clone, Copy)]
pub struct DomModal {
    kind: DetailKind,
    state: RwSignal<ModalView>,
}

impl DomModal {
    /// モーダル本文の要素が無いページでは None
    pub fn attach(kind: DetailKind, endpoints: &Endpoints) -> Option<Self> {
        let body = dom::by_id::<HtmlElement>(kind.body_id())?;
        body.set_inner_html("");
        if let Some(title) = dom::query::<HtmlElement>(&format!("#{} .modal-title", kind.modal_id())) {
            title.set_text_content(Some(kind.title()));
        }

        let state = RwSignal::new(ModalView::Loading);
        let endpoints = endpoints.clone();
        leptos::mount::mount_to(body, move || view! { <DetailBody state=state endpoints=endpoints.clone() /> })
            .forget();
        Some(Self { kind, state })
    }
}

impl ModalSurface for DomModal {
    fn open(&self) {
        // 既に開いていれば Bootstrap 側で同じインスタンスが使われる
        if !bridge::show_modal(self.kind.modal_id()) {
            gloo::console::warn!(format!("modal bulunamadı: {}", self.kind.modal_id()));
        }
    }

    fn render(&self, view: ModalView) {
        self.state.set(view);
    }
}
