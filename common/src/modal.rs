//! 詳細モーダルの読み込み
//!
//! 同じ種類のモーダルに対して読み込みが重なった場合、最後に発行した要求の
//! 応答だけを描画する。古い応答は破棄する（要求自体は中断しない）。

use std::future::Future;

use crate::error::{Error, Result};
use crate::records::RecordDetails;
use crate::sequence::RequestSequencer;

/// モーダルの種類（種類ごとにモーダルは1つ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Detection,
    Analysis,
}

impl DetailKind {
    /// 結果テーブルの行に付く種類名（`data-record-kind`、行IDの接頭辞）
    pub fn key(&self) -> &'static str {
        match self {
            DetailKind::Detection => "detection",
            DetailKind::Analysis => "analysis",
        }
    }

    /// 結果テーブルで1レコード分の行を選ぶセレクタ
    ///
    /// 検出と解析で ID が重なっても、もう一方の行は選ばない。
    pub fn row_selector(&self, record_id: i64) -> String {
        format!(
            "tr[data-record-kind=\"{kind}\"][data-record-id=\"{id}\"], #{kind}-row-{id}",
            kind = self.key(),
            id = record_id
        )
    }

    pub fn modal_id(&self) -> &'static str {
        match self {
            DetailKind::Detection => "detectionModal",
            DetailKind::Analysis => "analysisModal",
        }
    }

    pub fn body_id(&self) -> &'static str {
        match self {
            DetailKind::Detection => "detectionModalBody",
            DetailKind::Analysis => "analysisModalBody",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DetailKind::Detection => "Tespit Detayları",
            DetailKind::Analysis => "Analiz Detayları",
        }
    }

    /// 取得失敗時（サーバーからの文言が無い場合）の表示
    pub fn fallback_error(&self) -> &'static str {
        match self {
            DetailKind::Detection => "Tespit detayları yüklenemedi.",
            DetailKind::Analysis => "Analiz detayları yüklenemedi.",
        }
    }
}

/// モーダル本文の状態
#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Loading,
    Loaded(RecordDetails),
    Failed(String),
}

impl ModalView {
    fn from_result(kind: DetailKind, result: Result<RecordDetails>) -> Self {
        match result {
            Ok(details) => ModalView::Loaded(details),
            Err(Error::Application(message)) => ModalView::Failed(message),
            Err(Error::Network(_)) | Err(Error::Json(_)) => {
                ModalView::Failed(kind.fallback_error().to_string())
            }
            Err(other) => ModalView::Failed(other.to_string()),
        }
    }
}

/// モーダルの表示面
pub trait ModalSurface {
    fn open(&self);
    fn render(&self, view: ModalView);
}

/// レコード詳細の取得元
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch(&self, kind: DetailKind, id: i64) -> Result<RecordDetails>;
}

/// 種類ごとの詳細モーダル
pub struct DetailModal<S, R> {
    kind: DetailKind,
    surface: S,
    source: R,
    sequence: RequestSequencer,
}

impl<S: ModalSurface, R: RecordSource> DetailModal<S, R> {
    pub fn new(kind: DetailKind, surface: S, source: R) -> Self {
        Self {
            kind,
            surface,
            source,
            sequence: RequestSequencer::new(),
        }
    }

    pub fn kind(&self) -> DetailKind {
        self.kind
    }

    /// モーダルを開いてレコードを読み込む
    ///
    /// 表示と要求番号の発行は呼び出し時点で行う。応答を描画した場合は true、
    /// 後続の要求に追い越されて破棄した場合は false。
    pub fn open(&self, id: i64) -> impl Future<Output = bool> + '_ {
        let ticket = self.sequence.issue();
        self.surface.open();
        self.surface.render(ModalView::Loading);

        async move {
            let result = self.source.fetch(self.kind, id).await;

            if !self.sequence.is_current(ticket) {
                return false;
            }
            self.surface.render(ModalView::from_result(self.kind, result));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::DetectionRecord;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSurface {
        opened: RefCell<usize>,
        views: RefCell<Vec<ModalView>>,
    }

    impl ModalSurface for &RecordingSurface {
        fn open(&self) {
            *self.opened.borrow_mut() += 1;
        }
        fn render(&self, view: ModalView) {
            self.views.borrow_mut().push(view);
        }
    }

    struct FixedSource(fn(i64) -> Result<RecordDetails>);

    impl RecordSource for FixedSource {
        async fn fetch(&self, _kind: DetailKind, id: i64) -> Result<RecordDetails> {
            (self.0)(id)
        }
    }

    fn record(id: i64) -> RecordDetails {
        RecordDetails::Detection(DetectionRecord {
            id,
            detection_type: "tree".into(),
            count: 3,
            fruit_type: None,
            confidence: Some(0.9),
            created_at: String::new(),
            image_path: None,
            processing_time: None,
        })
    }

    #[test]
    fn test_open_renders_loading_then_record() {
        let surface = RecordingSurface::default();
        let modal = DetailModal::new(DetailKind::Detection, &surface, FixedSource(|id| Ok(record(id))));

        assert!(block_on(modal.open(5)));
        assert_eq!(*surface.opened.borrow(), 1);
        assert_eq!(
            *surface.views.borrow(),
            vec![ModalView::Loading, ModalView::Loaded(record(5))]
        );
    }

    #[test]
    fn test_application_error_shows_server_message() {
        let surface = RecordingSurface::default();
        let modal = DetailModal::new(
            DetailKind::Analysis,
            &surface,
            FixedSource(|_| Err(Error::Application("Analiz sonucu alınamadı".into()))),
        );

        block_on(modal.open(1));
        assert_eq!(
            surface.views.borrow().last(),
            Some(&ModalView::Failed("Analiz sonucu alınamadı".into()))
        );
    }

    #[test]
    fn test_network_error_shows_fallback() {
        let surface = RecordingSurface::default();
        let modal = DetailModal::new(
            DetailKind::Analysis,
            &surface,
            FixedSource(|_| Err(Error::Network("offline".into()))),
        );

        block_on(modal.open(1));
        assert_eq!(
            surface.views.borrow().last(),
            Some(&ModalView::Failed(DetailKind::Analysis.fallback_error().into()))
        );
    }

    #[test]
    fn test_row_selector_is_scoped_by_kind() {
        let detection = DetailKind::Detection.row_selector(7);
        assert_eq!(
            detection,
            "tr[data-record-kind=\"detection\"][data-record-id=\"7\"], #detection-row-7"
        );
        let analysis = DetailKind::Analysis.row_selector(7);
        assert!(!analysis.contains("detection"));
        assert!(analysis.contains("#analysis-row-7"));
    }

    #[test]
    fn test_kind_ids() {
        assert_eq!(DetailKind::Detection.modal_id(), "detectionModal");
        assert_eq!(DetailKind::Analysis.body_id(), "analysisModalBody");
    }
}
