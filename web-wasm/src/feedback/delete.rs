//! 削除フローの DOM 実装

use farm_vision_common::delete::{Prompt, ResultsTable};
use farm_vision_common::DetailKind;

use crate::dom;

#[derive(Debug, Clone, Copy, Default)]
pub struct DialogPrompt;

impl Prompt for DialogPrompt {
    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

/// ページ内の結果テーブル（1種類のレコード分）
#[derive(Debug, Clone, Copy)]
pub struct DomResultsTable {
    kind: DetailKind,
}

impl DomResultsTable {
    pub fn new(kind: DetailKind) -> Self {
        Self { kind }
    }
}

impl ResultsTable for DomResultsTable {
    fn remove_row(&self, record_id: i64) {
        for row in dom::query_all(&self.kind.row_selector(record_id)) {
            row.remove();
        }
    }
}
