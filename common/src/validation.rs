//! ファイル入力の検証
//!
//! 送信前にクライアント側で型・拡張子・サイズを確認する。
//! 失敗時はネットワーク呼び出しを行わない。

use crate::error::ValidationError;
use crate::upload::FileMeta;

/// 1ファイル分の検証条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileConstraints {
    /// 許可するMIMEタイプ（空なら判定しない）
    pub allowed_types: &'static [&'static str],
    /// 許可する拡張子（小文字、ドット付き。空なら判定しない）
    pub allowed_extensions: &'static [&'static str],
    /// 最大バイト数（この値ちょうどは許可）
    pub max_size: Option<u64>,
}

/// 検出フォームの上限（100 MiB）
pub const DETECTION_MAX_SIZE: u64 = 100 * 1024 * 1024;

impl FileConstraints {
    /// 検出フォーム: JPEG/PNG、100 MiB まで
    pub const fn detection_image() -> Self {
        Self {
            allowed_types: &["image/jpeg", "image/png"],
            allowed_extensions: &[],
            max_size: Some(DETECTION_MAX_SIZE),
        }
    }

    /// マッピングフォーム: .tif / .tiff のみ
    pub const fn geotiff() -> Self {
        Self {
            allowed_types: &[],
            allowed_extensions: &[".tif", ".tiff"],
            max_size: None,
        }
    }

    pub const fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

/// 選択ファイルを検証する
pub fn validate_file(
    file: Option<&FileMeta>,
    constraints: &FileConstraints,
) -> Result<(), ValidationError> {
    let file = file.ok_or(ValidationError::MissingFile)?;

    if file.name.is_empty() {
        return Err(ValidationError::MissingFile);
    }

    if !constraints.allowed_types.is_empty()
        && !constraints
            .allowed_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&file.mime))
    {
        return Err(ValidationError::UnsupportedType {
            mime: file.mime.clone(),
        });
    }

    if !constraints.allowed_extensions.is_empty() && !has_extension(&file.name, constraints.allowed_extensions) {
        return Err(ValidationError::InvalidExtension {
            name: file.name.clone(),
        });
    }

    if let Some(limit) = constraints.max_size {
        if file.size > limit {
            return Err(ValidationError::FileTooLarge {
                size: file.size,
                limit,
            });
        }
    }

    Ok(())
}

fn has_extension(name: &str, extensions: &[&str]) -> bool {
    let lower = name.to_ascii_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}
