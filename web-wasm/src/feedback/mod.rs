//! UIフィードバック調整役
//!
//! 検出・マッピングの両コントローラが共有する副作用（進捗表示、プレビュー、
//! 詳細モーダル、確認付き削除、通知）をまとめる。

mod delete;
mod modal;
mod notify;
mod preview;
mod progress;

use std::cell::RefCell;
use std::rc::Rc;

use farm_vision_common::batch::{BatchGuard, BatchLock};
use farm_vision_common::delete::confirm_and_delete;
use farm_vision_common::{
    show_progress, DetailKind, DetailModal, Endpoints, Notifier, PendingUpload, RestoreHandle,
    UiConfig,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::api::HttpClient;

pub use delete::{DialogPrompt, DomResultsTable};
pub use modal::DomModal;
pub use notify::ToastNotifier;
pub use preview::{show_file_info, PreviewRegistry};
pub use progress::{DomBatchBar, DomProgress};

type Modal = DetailModal<DomModal, HttpClient>;

pub struct Coordinator {
    config: UiConfig,
    client: HttpClient,
    notifier: ToastNotifier,
    previews: PreviewRegistry,
    detection_modal: Option<Rc<Modal>>,
    analysis_modal: Option<Rc<Modal>>,
    refresh_hook: RefCell<Option<js_sys::Function>>,
    batch_lock: BatchLock,
}

impl Coordinator {
    pub fn new(config: UiConfig) -> Self {
        let client = HttpClient::new(config.endpoints());
        let modal = |kind| {
            DomModal::attach(kind, client.endpoints()).map(|surface| Rc::new(DetailModal::new(kind, surface, client.clone())))
        };
        let detection_modal = modal(DetailKind::Detection);
        let analysis_modal = modal(DetailKind::Analysis);

        Self {
            config,
            client,
            notifier: ToastNotifier,
            previews: PreviewRegistry::default(),
            detection_modal,
            analysis_modal,
            refresh_hook: RefCell::new(None),
            batch_lock: BatchLock::new(),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.client.endpoints()
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn notifier(&self) -> &ToastNotifier {
        &self.notifier
    }

    /// フォームのプログレス表示を出す（送信ボタンが無ければ None）
    pub fn show_progress(&self, form: &Element) -> Option<RestoreHandle<DomProgress>> {
        DomProgress::for_form(form).map(show_progress)
    }

    /// ファイル情報を表示し、画像ならプレビューを読み込む
    ///
    /// 画像以外の選択や選択解除では前のプレビューを消し、読み込み中の結果も捨てる。
    pub fn preview_image(&self, file: Option<web_sys::File>, anchor: &HtmlInputElement) {
        let Some(file) = file else {
            show_file_info(anchor, None);
            self.previews.clear(anchor);
            return;
        };

        let upload = PendingUpload::new(crate::dom::file_meta(&file));
        show_file_info(anchor, Some(&upload));
        if upload.file.is_image() {
            self.previews.preview_image(file, anchor);
        } else {
            self.previews.clear(anchor);
        }
    }

    /// 詳細モーダルを開いて読み込む
    pub fn open_detail_modal(&self, kind: DetailKind, record_id: i64) {
        let modal = match kind {
            DetailKind::Detection => self.detection_modal.clone(),
            DetailKind::Analysis => self.analysis_modal.clone(),
        };
        let Some(modal) = modal else {
            gloo::console::warn!(format!("{} için modal yok", kind.modal_id()));
            self.notifier.error(kind.fallback_error());
            return;
        };

        spawn_local(async move {
            if !modal.open(record_id).await {
                gloo::console::log!(format!("eski yanıt yok sayıldı: {} #{}", modal.kind().modal_id(), record_id));
            }
        });
    }

    /// 確認のうえ削除要求を送る
    pub async fn confirm_and_delete(&self, kind: DetailKind, record_id: i64, endpoint: &str) -> bool {
        confirm_and_delete(
            record_id,
            endpoint,
            &DialogPrompt,
            &self.client,
            &DomResultsTable::new(kind),
            &self.notifier,
        )
        .await
    }

    /// 一括処理を占有する（実行中なら None）
    pub fn begin_batch(&self) -> Option<BatchGuard> {
        self.batch_lock.try_acquire()
    }

    pub fn set_refresh_hook(&self, hook: Option<js_sys::Function>) {
        *self.refresh_hook.borrow_mut() = hook;
    }

    pub fn refresh_hook(&self) -> Option<js_sys::Function> {
        self.refresh_hook.borrow().clone()
    }
}

thread_local! {
    static COORDINATOR: RefCell<Option<Rc<Coordinator>>> = const { RefCell::new(None) };
}

pub fn install(coordinator: Rc<Coordinator>) {
    COORDINATOR.with(|slot| *slot.borrow_mut() = Some(coordinator));
}

/// 起動済みの調整役（未起動なら警告して None）
pub fn current() -> Option<Rc<Coordinator>> {
    let coordinator = COORDINATOR.with(|slot| slot.borrow().clone());
    if coordinator.is_none() {
        gloo::console::warn!("farm-vision henüz başlatılmadı");
    }
    coordinator
}
