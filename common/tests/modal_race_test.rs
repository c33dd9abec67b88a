//! 詳細モーダルの競合テスト
//!
//! 応答の到着順が発行順と逆になっても、最後に発行した要求の内容が残ることを検証

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use farm_vision_common::records::{AnalysisRecord, RecordDetails};
use farm_vision_common::{DetailKind, DetailModal, Error, ModalSurface, ModalView, RecordSource, Result};
use futures::channel::oneshot;
use futures::FutureExt;
use std::pin::pin;

#[derive(Default)]
struct ModalLog {
    views: RefCell<Vec<ModalView>>,
}

#[derive(Clone, Default)]
struct SharedSurface(Rc<ModalLog>);

impl ModalSurface for SharedSurface {
    fn open(&self) {}
    fn render(&self, view: ModalView) {
        self.0.views.borrow_mut().push(view);
    }
}

/// 要求IDごとに応答を外部から流し込めるソース
#[derive(Default)]
struct ControlledSource {
    pending: RefCell<HashMap<i64, oneshot::Receiver<Result<RecordDetails>>>>,
}

impl ControlledSource {
    fn expect(&self, id: i64) -> oneshot::Sender<Result<RecordDetails>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(id, rx);
        tx
    }
}

#[derive(Clone, Default)]
struct Source(Rc<ControlledSource>);

impl Source {
    fn expect(&self, id: i64) -> oneshot::Sender<Result<RecordDetails>> {
        self.0.expect(id)
    }
}

impl RecordSource for Source {
    async fn fetch(&self, _kind: DetailKind, id: i64) -> Result<RecordDetails> {
        let rx = self
            .0
            .pending
            .borrow_mut()
            .remove(&id)
            .expect("unexpected request");
        rx.await
            .unwrap_or_else(|_| Err(Error::Network("cancelled".into())))
    }
}

fn analysis(id: i64, algorithm: &str) -> RecordDetails {
    RecordDetails::Analysis(AnalysisRecord {
        id,
        algorithm: algorithm.into(),
        colormap: "viridis".into(),
        min_range: Some(-1.0),
        max_range: Some(1.0),
        created_at: String::new(),
        result_path: None,
        statistics: None,
    })
}

/// 先に発行した要求の応答が後から届いても、後の要求の内容が残る
#[test]
fn test_later_request_wins_over_late_response() {
    let surface = SharedSurface::default();
    let source = Source::default();
    let first_tx = source.expect(1);
    let second_tx = source.expect(2);

    let modal = DetailModal::new(DetailKind::Analysis, surface.clone(), source.clone());

    let mut first = pin!(modal.open(1));
    let mut second = pin!(modal.open(2));
    assert_eq!(first.as_mut().now_or_never(), None);
    assert_eq!(second.as_mut().now_or_never(), None);

    // 2番目の応答が先に届く
    second_tx.send(Ok(analysis(2, "gli"))).unwrap();
    assert_eq!(second.as_mut().now_or_never(), Some(true));

    first_tx.send(Ok(analysis(1, "ndvi"))).unwrap();
    assert_eq!(first.as_mut().now_or_never(), Some(false));

    let views = surface.0.views.borrow();
    assert_eq!(views.last(), Some(&ModalView::Loaded(analysis(2, "gli"))));
    assert!(!views.contains(&ModalView::Loaded(analysis(1, "ndvi"))));
}

/// 古い要求のエラーも後の内容を上書きしない
#[test]
fn test_stale_error_is_discarded() {
    let surface = SharedSurface::default();
    let source = Source::default();
    let first_tx = source.expect(10);
    let second_tx = source.expect(11);

    let modal = DetailModal::new(DetailKind::Analysis, surface.clone(), source.clone());

    let mut first = pin!(modal.open(10));
    let mut second = pin!(modal.open(11));
    assert_eq!(first.as_mut().now_or_never(), None);
    assert_eq!(second.as_mut().now_or_never(), None);

    second_tx.send(Ok(analysis(11, "bai"))).unwrap();
    first_tx
        .send(Err(Error::Application("Analiz sonucu alınamadı".into())))
        .unwrap();
    assert_eq!(second.as_mut().now_or_never(), Some(true));
    assert_eq!(first.as_mut().now_or_never(), Some(false));

    let views = surface.0.views.borrow();
    assert_eq!(views.last(), Some(&ModalView::Loaded(analysis(11, "bai"))));
    assert!(!views
        .iter()
        .any(|view| matches!(view, ModalView::Failed(_))));
}

/// 順番どおりに届けば両方描画され、最後が残る
#[test]
fn test_in_order_responses() {
    let surface = SharedSurface::default();
    let source = Source::default();
    let modal = DetailModal::new(DetailKind::Analysis, surface.clone(), source.clone());

    let tx = source.expect(1);
    tx.send(Ok(analysis(1, "ndvi"))).unwrap();
    assert!(futures::executor::block_on(modal.open(1)));

    let tx = source.expect(2);
    tx.send(Ok(analysis(2, "savi"))).unwrap();
    assert!(futures::executor::block_on(modal.open(2)));

    assert_eq!(
        surface.0.views.borrow().last(),
        Some(&ModalView::Loaded(analysis(2, "savi")))
    );
}
