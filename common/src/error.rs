//! エラー型定義
//!
//! 表示文字列はそのまま通知に使うため、バックエンドと同じトルコ語で記述する。

use thiserror::Error;

/// ファイル入力の検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Lütfen bir dosya seçin.")]
    MissingFile,

    #[error("Desteklenmeyen dosya türü: {mime}. Lütfen JPG veya PNG dosyası yükleyin.")]
    UnsupportedType { mime: String },

    #[error("Dosya boyutu çok büyük: {size} bayt (en fazla {limit} bayt).")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Geçersiz dosya formatı: {name}. Lütfen GeoTIFF (.tif/.tiff) dosyası yükleyin.")]
    InvalidExtension { name: String },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Sunucuya ulaşılamadı: {0}")]
    Network(String),

    #[error("{0}")]
    Application(String),

    #[error("Geçersiz yanıt: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Yapılandırma hatası: {0}")]
    Config(String),

    #[error("Dosya okunamadı: {0}")]
    FileRead(String),
}

/// `success: false` で `error` が無い場合の文言
pub const GENERIC_FAILURE: &str = "İşlem başarısız oldu";

impl Error {
    /// アプリケーションエラー（`error` 欠落時は汎用文言）
    pub fn application(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.trim().is_empty() => Error::Application(message),
            _ => Error::Application(GENERIC_FAILURE.to_string()),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
