//! 確認付きの削除
//!
//! ユーザーの確認後にだけ削除要求を送り、成功が確定してから結果テーブルの行を消す。

use crate::error::Result;
use crate::notify::Notifier;

pub const CONFIRM_DELETE_MESSAGE: &str = "Bu sonucu silmek istediğinizden emin misiniz?";
pub const DELETE_SUCCESS_MESSAGE: &str = "Sonuç başarıyla silindi.";
pub const DELETE_FAILURE_MESSAGE: &str = "Silme işlemi başarısız oldu.";

/// 確認ダイアログ
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

/// 削除要求の送信（`success: false` はエラーとして返す）
#[allow(async_fn_in_trait)]
pub trait DeleteTransport {
    async fn delete(&self, endpoint: &str) -> Result<()>;
}

/// 結果一覧のテーブル
pub trait ResultsTable {
    fn remove_row(&self, record_id: i64);
}

/// 確認のうえレコードを削除する
///
/// 削除した場合は true。キャンセル時は要求を送らず false。
pub async fn confirm_and_delete(
    record_id: i64,
    endpoint: &str,
    prompt: &impl Prompt,
    transport: &impl DeleteTransport,
    table: &impl ResultsTable,
    notifier: &impl Notifier,
) -> bool {
    if !prompt.confirm(CONFIRM_DELETE_MESSAGE) {
        return false;
    }

    match transport.delete(endpoint).await {
        Ok(()) => {
            table.remove_row(record_id);
            notifier.success(DELETE_SUCCESS_MESSAGE);
            true
        }
        Err(error) => {
            let message = match error {
                crate::Error::Application(message) => message,
                _ => DELETE_FAILURE_MESSAGE.to_string(),
            };
            notifier.error(&message);
            false
        }
    }
}
