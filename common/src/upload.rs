//! 選択中のアップロードファイル

/// ファイル入力から取り出したメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// ブラウザが判定したMIMEタイプ（不明な場合は空文字列）
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// 選択されたファイルと表示用の派生情報
///
/// ファイル入力の change イベントごとに作り直される。
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub file: FileMeta,
    /// プレビュー用の data URI（読み込み完了まで None）
    pub preview: Option<String>,
}

impl PendingUpload {
    pub fn new(file: FileMeta) -> Self {
        Self { file, preview: None }
    }

    pub fn with_preview(mut self, data_url: String) -> Self {
        self.preview = Some(data_url);
        self
    }

    pub fn display_type(&self) -> &str {
        if self.file.mime.is_empty() {
            "bilinmiyor"
        } else {
            &self.file.mime
        }
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.file.size)
    }
}

/// バイト数を人間向けの表記に変換
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(100 * 1024 * 1024), "100.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_display_type_unknown() {
        let upload = PendingUpload::new(FileMeta::new("field.tif", "", 10));
        assert_eq!(upload.display_type(), "bilinmiyor");
        assert!(!upload.file.is_image());
    }

    #[test]
    fn test_with_preview() {
        let upload = PendingUpload::new(FileMeta::new("a.png", "image/png", 4))
            .with_preview("data:image/png;base64,AAAA".to_string());
        assert!(upload.file.is_image());
        assert_eq!(upload.preview.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
