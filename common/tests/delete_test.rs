//! 確認付き削除のテスト

mod support;

use std::cell::RefCell;

use farm_vision_common::delete::{
    confirm_and_delete, DeleteTransport, Prompt, ResultsTable, DELETE_FAILURE_MESSAGE,
    DELETE_SUCCESS_MESSAGE,
};
use farm_vision_common::{Error, NotificationLevel, Result};
use futures::executor::block_on;
use support::RecordingNotifier;

struct FixedPrompt(bool);

impl Prompt for FixedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

struct FakeTransport {
    calls: RefCell<Vec<String>>,
    response: fn() -> Result<()>,
}

impl FakeTransport {
    fn new(response: fn() -> Result<()>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response,
        }
    }
}

impl DeleteTransport for FakeTransport {
    async fn delete(&self, endpoint: &str) -> Result<()> {
        self.calls.borrow_mut().push(endpoint.to_string());
        (self.response)()
    }
}

struct FakeTable {
    rows: RefCell<Vec<i64>>,
}

impl FakeTable {
    fn with_rows(rows: &[i64]) -> Self {
        Self {
            rows: RefCell::new(rows.to_vec()),
        }
    }
}

impl ResultsTable for FakeTable {
    fn remove_row(&self, record_id: i64) {
        self.rows.borrow_mut().retain(|id| *id != record_id);
    }
}

/// キャンセル時は要求を送らず行も残る
#[test]
fn test_cancelled_prompt_makes_no_request() {
    let transport = FakeTransport::new(|| Ok(()));
    let table = FakeTable::with_rows(&[1, 2, 3]);
    let notifier = RecordingNotifier::default();

    let deleted = block_on(confirm_and_delete(
        2,
        "/detection/delete/2",
        &FixedPrompt(false),
        &transport,
        &table,
        &notifier,
    ));

    assert!(!deleted);
    assert!(transport.calls.borrow().is_empty());
    assert_eq!(*table.rows.borrow(), vec![1, 2, 3]);
    assert!(notifier.messages.borrow().is_empty());
}

/// 成功時は行を削除して成功通知
#[test]
fn test_confirmed_delete_removes_row() {
    let transport = FakeTransport::new(|| Ok(()));
    let table = FakeTable::with_rows(&[1, 2, 3]);
    let notifier = RecordingNotifier::default();

    let deleted = block_on(confirm_and_delete(
        2,
        "/detection/delete/2",
        &FixedPrompt(true),
        &transport,
        &table,
        &notifier,
    ));

    assert!(deleted);
    assert_eq!(*transport.calls.borrow(), vec!["/detection/delete/2".to_string()]);
    assert_eq!(*table.rows.borrow(), vec![1, 3]);
    assert_eq!(
        notifier.last(),
        Some((NotificationLevel::Success, DELETE_SUCCESS_MESSAGE.to_string()))
    );
}

/// アプリケーションエラーはサーバーの文言で通知し、行は残す
#[test]
fn test_application_failure_keeps_row() {
    let transport = FakeTransport::new(|| Err(Error::Application("Kayıt bulunamadı".into())));
    let table = FakeTable::with_rows(&[4]);
    let notifier = RecordingNotifier::default();

    let deleted = block_on(confirm_and_delete(
        4,
        "/detection/delete/4",
        &FixedPrompt(true),
        &transport,
        &table,
        &notifier,
    ));

    assert!(!deleted);
    assert_eq!(*table.rows.borrow(), vec![4]);
    assert_eq!(
        notifier.last(),
        Some((NotificationLevel::Error, "Kayıt bulunamadı".to_string()))
    );
}

/// 通信エラーは汎用文言で通知
#[test]
fn test_network_failure_keeps_row() {
    let transport = FakeTransport::new(|| Err(Error::Network("connection reset".into())));
    let table = FakeTable::with_rows(&[9]);
    let notifier = RecordingNotifier::default();

    let deleted = block_on(confirm_and_delete(
        9,
        "/detection/delete/9",
        &FixedPrompt(true),
        &transport,
        &table,
        &notifier,
    ));

    assert!(!deleted);
    assert_eq!(*table.rows.borrow(), vec![9]);
    assert_eq!(
        notifier.last(),
        Some((NotificationLevel::Error, DELETE_FAILURE_MESSAGE.to_string()))
    );
}
