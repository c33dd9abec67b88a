//! アップロードフォームの送信時検証と送信ボタンの進捗表示

use std::cell::RefCell;
use std::rc::Rc;

use farm_vision_common::{validate_file, FileConstraints, Notifier, RestoreHandle};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom;
use crate::feedback::{Coordinator, DomProgress};

/// アップロード対象のファイル入力
pub const IMAGE_INPUT: &str = "input[type=\"file\"][name=\"image\"]";

/// 復元ハンドルの置き場所（フォームごとに所有）
type PendingRestore = Rc<RefCell<Option<RestoreHandle<DomProgress>>>>;

/// 送信時に検証し、通れば進捗を出してネイティブ送信に任せる
pub fn guard_submit(coordinator: &Rc<Coordinator>, form: &Element, constraints: FileConstraints) {
    let restore: PendingRestore = Rc::new(RefCell::new(None));

    let coordinator = coordinator.clone();
    let form_el = form.clone();
    let pending = restore.clone();
    EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let file = dom::query_in::<HtmlInputElement>(&form_el, IMAGE_INPUT)
                .and_then(|input| dom::selected_file(&input))
                .map(|file| dom::file_meta(&file));

            if let Err(error) = validate_file(file.as_ref(), &constraints) {
                event.prevent_default();
                coordinator.notifier().warning(&error.to_string());
                return;
            }

            let handle = coordinator.show_progress(&form_el);
            if pending.borrow().is_none() {
                *pending.borrow_mut() = handle;
            }
        },
    )
    .forget();

    restore_on_pageshow(restore);
}

/// bfcache から戻ったときに送信ボタンを元に戻す
fn restore_on_pageshow(restore: PendingRestore) {
    let Some(window) = web_sys::window() else {
        return;
    };
    EventListener::new(&window, "pageshow", move |event| {
        let persisted = event
            .dyn_ref::<web_sys::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if persisted {
            if let Some(handle) = restore.borrow_mut().take() {
                handle.restore();
            }
        }
    })
    .forget();
}
