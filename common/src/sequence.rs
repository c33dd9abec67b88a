//! 要求シーケンス番号
//!
//! 非同期の完了順は発行順と一致しないため、最後に発行した要求だけを反映する。
//! 進行中の処理は中断せず、古い完了を捨てることで上書きを防ぐ。

use std::cell::Cell;

/// 発行済み要求の番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// 単調増加する要求カウンタ（UIスレッド専用）
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい要求を発行し、それ以前の要求を古いものとする
    pub fn issue(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    pub fn latest(&self) -> Option<Ticket> {
        match self.latest.get() {
            0 => None,
            n => Some(Ticket(n)),
        }
    }
}
