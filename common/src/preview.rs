//! 画像プレビュー
//!
//! ファイル入力ごとにプレビューは1枚だけ。読み込みの完了順が入れ替わっても、
//! 最後に選択されたファイルの結果を表示する。画像以外の選択や選択解除も
//! 「新しい選択」として扱い、読み込み中の結果を無効にする。

use std::future::Future;

use crate::error::Result;
use crate::sequence::RequestSequencer;
use crate::upload::PendingUpload;

/// プレビューカードの内容
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCard {
    pub file_name: String,
    pub file_type: String,
    pub file_size: String,
    pub data_url: String,
}

impl PreviewCard {
    fn from_upload(upload: &PendingUpload, data_url: String) -> Self {
        Self {
            file_name: upload.file.name.clone(),
            file_type: upload.display_type().to_string(),
            file_size: upload.display_size(),
            data_url,
        }
    }
}

/// プレビューの表示先（差し替え表示すること）
pub trait PreviewSurface {
    fn show(&self, card: PreviewCard);
    /// 表示中のカードを消す
    fn clear(&self);
}

/// 1つのファイル入力に紐づくプレビュー枠
pub struct PreviewSlot<S> {
    surface: S,
    sequence: RequestSequencer,
}

impl<S: PreviewSurface> PreviewSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            sequence: RequestSequencer::new(),
        }
    }

    /// ファイル内容の読み込みを待ってプレビューを表示する
    ///
    /// 要求番号は呼び出し時点で発行する。後から選択されたファイルがある場合は
    /// 何もせず `Ok(false)` を返す。
    pub fn load<F>(&self, upload: PendingUpload, read: F) -> impl Future<Output = Result<bool>> + '_
    where
        F: Future<Output = Result<String>> + 'static,
    {
        let ticket = self.sequence.issue();
        async move {
            let data_url = read.await;

            if !self.sequence.is_current(ticket) {
                return Ok(false);
            }
            let data_url = data_url?;
            self.surface.show(PreviewCard::from_upload(&upload, data_url));
            Ok(true)
        }
    }

    /// プレビューを消し、読み込み中の結果も表示させない
    pub fn clear(&self) {
        self.sequence.issue();
        self.surface.clear();
    }
}
