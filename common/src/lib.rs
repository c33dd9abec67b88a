//! Farm Vision UI Core
//!
//! ブラウザ側コントローラ（検出・マッピング）で共有される型とロジック。
//! DOMやネットワークには依存せず、境界はトレイトで切り出している。

pub mod batch;
pub mod catalog;
pub mod config;
pub mod delete;
pub mod download;
pub mod error;
pub mod map;
pub mod modal;
pub mod notify;
pub mod preview;
pub mod progress;
pub mod records;
pub mod sequence;
pub mod upload;
pub mod validation;

pub use config::{Endpoints, MapSettings, UiConfig};
pub use error::{Error, Result, ValidationError};
pub use modal::{DetailKind, DetailModal, ModalSurface, ModalView, RecordSource};
pub use notify::{NotificationLevel, Notifier};
pub use progress::{ProgressSurface, RestoreHandle, show_progress};
pub use records::{AnalysisRecord, DetailRow, DetectionRecord, RecordDetails, Statistics};
pub use sequence::{RequestSequencer, Ticket};
pub use upload::{FileMeta, PendingUpload};
pub use validation::{FileConstraints, validate_file};
