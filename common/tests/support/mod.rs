//! テスト用のフェイク実装

#![allow(dead_code)]

use std::cell::RefCell;

use farm_vision_common::{NotificationLevel, Notifier};

/// 通知を記録するだけの Notifier
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(NotificationLevel, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl RecordingNotifier {
    pub fn levels(&self) -> Vec<NotificationLevel> {
        self.messages.borrow().iter().map(|(level, _)| *level).collect()
    }

    pub fn last(&self) -> Option<(NotificationLevel, String)> {
        self.messages.borrow().last().cloned()
    }
}
