//! 複数画像の一括処理
//!
//! 選択された全ファイルを1つのマルチパート要求で送り、共有のプログレスバーを更新する。

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::progress::BatchProgress;

pub const NO_FILES_MESSAGE: &str = "Lütfen en az bir görüntü seçin.";
pub const BATCH_FAILURE_MESSAGE: &str = "Toplu işlem sırasında hata oluştu.";
pub const BATCH_BUSY_MESSAGE: &str = "Toplu işlem devam ediyor, lütfen bekleyin.";

/// 一括処理の実行中フラグ（ページで1つだけ共有する）
#[derive(Debug, Clone, Default)]
pub struct BatchLock(Rc<Cell<bool>>);

impl BatchLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 実行中でなければ占有する。ガードを捨てると解放される。
    pub fn try_acquire(&self) -> Option<BatchGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(BatchGuard(self.0.clone()))
    }

    pub fn is_busy(&self) -> bool {
        self.0.get()
    }
}

/// 一括処理の占有ガード
///
/// 完了表示の後片付け（バーを隠して更新フックを呼ぶ）まで持ち回す。
#[derive(Debug)]
pub struct BatchGuard(Rc<Cell<bool>>);

impl Drop for BatchGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// 一括アップロードの送信
#[allow(async_fn_in_trait)]
pub trait BatchUploader {
    /// 処理済み件数を返す
    async fn upload(&self) -> Result<usize>;
}

/// 一括処理用のプログレスバー
pub trait BatchProgressView {
    fn start(&self);
    fn complete(&self, progress: BatchProgress);
    fn hide(&self);
}

/// 一括処理を実行する
///
/// 成功時は進捗を返す。ファイル未選択・失敗時は None。
pub async fn process_batch(
    total: usize,
    uploader: &impl BatchUploader,
    view: &impl BatchProgressView,
    notifier: &impl Notifier,
) -> Option<BatchProgress> {
    if total == 0 {
        notifier.warning(NO_FILES_MESSAGE);
        return None;
    }

    view.start();
    match uploader.upload().await {
        Ok(processed) => {
            let progress = BatchProgress::new(processed, total);
            view.complete(progress);
            notifier.success(&format!("{} görüntü başarıyla işlendi.", processed));
            Some(progress)
        }
        Err(error) => {
            view.hide();
            let message = match error {
                Error::Application(message) => message,
                _ => BATCH_FAILURE_MESSAGE.to_string(),
            };
            notifier.error(&message);
            None
        }
    }
}
