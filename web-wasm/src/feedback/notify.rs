//! 通知ユーティリティへの出口

use farm_vision_common::{NotificationLevel, Notifier};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        if level == NotificationLevel::Error {
            gloo::console::warn!(message.to_string());
        }
        bridge::show_notification(message, level.as_str());
    }
}
