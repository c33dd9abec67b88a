//! バックエンドが返す検出・解析レコード
//!
//! この層はレコードを描画するだけで変更しない。

use chrono::{DateTime, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog;
use crate::error::{Error, Result};

/// 値が無い項目の表示
pub const NOT_AVAILABLE: &str = "N/A";

/// 検出結果 (`GET /api/detection/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: i64,
    pub detection_type: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub fruit_type: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub processing_time: Option<f64>,
}

/// 解析結果の統計値（各値は欠落しうる）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// 植生指数の解析結果 (`GET /api/analysis/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub algorithm: String,
    #[serde(default)]
    pub colormap: String,
    #[serde(default)]
    pub min_range: Option<f64>,
    #[serde(default)]
    pub max_range: Option<f64>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub result_path: Option<String>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

/// 詳細テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// モーダルに表示するレコード
#[derive(Debug, Clone, PartialEq)]
pub enum RecordDetails {
    Detection(DetectionRecord),
    Analysis(AnalysisRecord),
}

impl RecordDetails {
    pub fn id(&self) -> i64 {
        match self {
            RecordDetails::Detection(record) => record.id,
            RecordDetails::Analysis(record) => record.id,
        }
    }

    pub fn image_path(&self) -> Option<&str> {
        let path = match self {
            RecordDetails::Detection(record) => record.image_path.as_deref(),
            RecordDetails::Analysis(record) => record.result_path.as_deref(),
        };
        path.filter(|path| !path.is_empty())
    }

    pub fn rows(&self) -> Vec<DetailRow> {
        match self {
            RecordDetails::Detection(record) => record.rows(),
            RecordDetails::Analysis(record) => record.rows(),
        }
    }
}

impl DetectionRecord {
    pub fn rows(&self) -> Vec<DetailRow> {
        let mut rows = vec![
            DetailRow::new("ID", self.id.to_string()),
            DetailRow::new("Tespit Türü", detection_type_label(&self.detection_type)),
        ];
        if let Some(fruit) = self.fruit_type.as_deref().filter(|f| !f.is_empty()) {
            rows.push(DetailRow::new("Meyve Türü", fruit));
        }
        rows.push(DetailRow::new("Tespit Sayısı", self.count.to_string()));
        rows.push(DetailRow::new("Güven Skoru", format_confidence(self.confidence)));
        if let Some(seconds) = self.processing_time {
            rows.push(DetailRow::new("İşlem Süresi", format!("{:.2} sn", seconds)));
        }
        rows.push(DetailRow::new("Tarih", format_timestamp(&self.created_at)));
        rows
    }
}

impl AnalysisRecord {
    pub fn rows(&self) -> Vec<DetailRow> {
        let stats = self.statistics.clone().unwrap_or_default();
        vec![
            DetailRow::new("ID", self.id.to_string()),
            DetailRow::new("Algoritma", catalog::algorithm_title(&self.algorithm)),
            DetailRow::new("Renk Haritası", catalog::colormap_name(&self.colormap)),
            DetailRow::new(
                "Değer Aralığı",
                format!("{} / {}", format_optional(self.min_range), format_optional(self.max_range)),
            ),
            DetailRow::new("Ortalama", format_optional(stats.mean)),
            DetailRow::new("Standart Sapma", format_optional(stats.std)),
            DetailRow::new("Minimum", format_optional(stats.min)),
            DetailRow::new("Maksimum", format_optional(stats.max)),
            DetailRow::new("Tarih", format_timestamp(&self.created_at)),
        ]
    }
}

/// 検出種別の表示名
pub fn detection_type_label(kind: &str) -> &str {
    match kind {
        "fruit" => "Meyve Tespiti",
        "leaf" => "Yaprak Hastalık Tespiti",
        "tree" => "Ağaç Tespiti",
        other => other,
    }
}

/// 信頼度を百分率で表示（0..=1 の比率は100倍する）
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(value) if value <= 1.0 => format!("%{:.1}", value * 100.0),
        Some(value) => format!("%{:.1}", value),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_optional(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// ISO 8601 のタイムスタンプを `dd.mm.yyyy HH:MM` に整形（解析できなければ原文）
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%d.%m.%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// `{success, error?, ...}` 形式の応答からレコードを取り出す
pub fn parse_record<T: DeserializeOwned>(value: Value) -> Result<T> {
    ensure_success(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// `success: false` ならアプリケーションエラーにする
pub fn ensure_success(value: &Value) -> Result<()> {
    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if success {
        Ok(())
    } else {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        Err(Error::application(message))
    }
}

/// 一括処理応答の処理件数
pub fn parse_batch_response(value: &Value) -> Result<usize> {
    ensure_success(value)?;
    Ok(value
        .get("processed_count")
        .and_then(Value::as_u64)
        .unwrap_or(0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detection_json() -> Value {
        json!({
            "success": true,
            "id": 7,
            "detection_type": "fruit",
            "fruit_type": "elma",
            "count": 42,
            "confidence": 0.873,
            "image_path": "static/results/7.jpg",
            "created_at": "2024-05-03T14:22:10.123456",
            "processing_time": 1.5
        })
    }

    #[test]
    fn test_parse_detection_record() {
        let record: DetectionRecord = parse_record(detection_json()).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.count, 42);
        assert_eq!(record.fruit_type.as_deref(), Some("elma"));
    }

    #[test]
    fn test_detection_rows() {
        let record: DetectionRecord = parse_record(detection_json()).unwrap();
        let rows = record.rows();
        let find = |label: &str| rows.iter().find(|r| r.label == label).map(|r| r.value.clone());

        assert_eq!(find("Tespit Türü").as_deref(), Some("Meyve Tespiti"));
        assert_eq!(find("Meyve Türü").as_deref(), Some("elma"));
        assert_eq!(find("Güven Skoru").as_deref(), Some("%87.3"));
        assert_eq!(find("İşlem Süresi").as_deref(), Some("1.50 sn"));
        assert_eq!(find("Tarih").as_deref(), Some("03.05.2024 14:22"));
    }

    #[test]
    fn test_parse_failure_uses_server_error() {
        let value = json!({"success": false, "error": "Tespit sonucu alınamadı"});
        let result: Result<DetectionRecord> = parse_record(value);
        match result {
            Err(Error::Application(msg)) => assert_eq!(msg, "Tespit sonucu alınamadı"),
            other => panic!("Expected Application error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_success_flag_is_failure() {
        let result: Result<DetectionRecord> = parse_record(json!({"id": 1}));
        assert!(matches!(result, Err(Error::Application(_))));
    }

    #[test]
    fn test_analysis_rows_with_missing_statistics() {
        let value = json!({
            "success": true,
            "id": 3,
            "algorithm": "ndvi",
            "colormap": "rdylgn",
            "min_range": -1.0,
            "max_range": 1.0,
            "created_at": "2024-01-10T08:00:00",
            "result_path": null,
            "statistics": {"mean": 0.42, "std": null}
        });
        let record: AnalysisRecord = parse_record(value).unwrap();
        let rows = record.rows();
        let find = |label: &str| rows.iter().find(|r| r.label == label).map(|r| r.value.clone());

        assert_eq!(find("Algoritma").as_deref(), Some("NDVI - Normalized Difference Vegetation Index"));
        assert_eq!(find("Renk Haritası").as_deref(), Some("RdYlGn"));
        assert_eq!(find("Değer Aralığı").as_deref(), Some("-1.000 / 1.000"));
        assert_eq!(find("Ortalama").as_deref(), Some("0.420"));
        assert_eq!(find("Standart Sapma").as_deref(), Some(NOT_AVAILABLE));
        assert_eq!(find("Maksimum").as_deref(), Some(NOT_AVAILABLE));
        assert_eq!(RecordDetails::Analysis(record).image_path(), None);
    }

    #[test]
    fn test_analysis_without_statistics_object() {
        let value = json!({"success": true, "id": 4, "algorithm": "bai", "statistics": null});
        let record: AnalysisRecord = parse_record(value).unwrap();
        let rows = record.rows();
        assert!(rows
            .iter()
            .filter(|r| ["Ortalama", "Standart Sapma", "Minimum", "Maksimum"].contains(&r.label))
            .all(|r| r.value == NOT_AVAILABLE));
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(format_timestamp("2024-05-03T14:22:10+03:00"), "03.05.2024 14:22");
        assert_eq!(format_timestamp("2024-05-03T14:22:10"), "03.05.2024 14:22");
        assert_eq!(format_timestamp("dün"), "dün");
        assert_eq!(format_timestamp(""), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(Some(0.5)), "%50.0");
        assert_eq!(format_confidence(Some(92.0)), "%92.0");
        assert_eq!(format_confidence(None), NOT_AVAILABLE);
    }

    #[test]
    fn test_parse_batch_response() {
        assert_eq!(parse_batch_response(&json!({"success": true, "processed_count": 5})).unwrap(), 5);
        let err = parse_batch_response(&json!({"success": false, "error": "Toplu işleme hatası"}))
            .unwrap_err();
        assert_eq!(err.to_string(), "Toplu işleme hatası");
    }
}
