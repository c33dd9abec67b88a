//! 画面設定
//!
//! ページに埋め込まれた JSON（`#farm-vision-config`）から読み込む。
//! 要素が無ければ既定値を使う。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::DETECTION_MAX_SIZE;

/// 設定を埋め込む `<script type="application/json">` のID
pub const CONFIG_ELEMENT_ID: &str = "farm-vision-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// 全エンドポイントの前に付けるパス（末尾のスラッシュは無視）
    pub api_base: String,
    pub max_image_size: u64,
    /// 一括処理完了後、更新フックを呼ぶまでの待ち時間
    pub refresh_delay_ms: u32,
    /// 一括アップロードのマルチパートフィールド名
    pub batch_field: String,
    pub detection_form_selector: String,
    pub mapping_form_selector: String,
    pub map: MapSettings,
}

/// 地図の初期表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub container_id: String,
    /// [緯度, 経度]
    pub center: [f64; 2],
    pub zoom: u8,
    pub overlay_group_name: String,
    pub sample_overlay_url: String,
    /// [[南, 西], [北, 東]]
    pub sample_overlay_bounds: [[f64; 2]; 2],
    pub sample_overlay_opacity: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            max_image_size: DETECTION_MAX_SIZE,
            refresh_delay_ms: 2000,
            batch_field: "images[]".into(),
            detection_form_selector: "form.detection-upload-form".into(),
            mapping_form_selector: "form.vegetation-upload-form".into(),
            map: MapSettings::default(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            container_id: "map".into(),
            center: [39.9334, 32.8597],
            zoom: 13,
            overlay_group_name: "Analiz Katmanları".into(),
            sample_overlay_url: "/static/images/sample_ndvi.png".into(),
            sample_overlay_bounds: [[39.92, 32.84], [39.95, 32.88]],
            sample_overlay_opacity: 0.7,
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.batch_field.trim().is_empty() {
            return Err(Error::Config("batch_field boş olamaz".into()));
        }
        let [[south, west], [north, east]] = self.map.sample_overlay_bounds;
        if south >= north || west >= east {
            return Err(Error::Config("sample_overlay_bounds geçersiz".into()));
        }
        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.api_base)
    }
}

/// バックエンドAPIのURL組み立て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// サーバーが返す相対パス（`static/...` など）を配信URLにする
    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    pub fn detection_detail(&self, id: i64) -> String {
        self.url(&format!("/api/detection/{}", id))
    }

    pub fn detection_batch(&self) -> String {
        self.url("/api/detection/batch")
    }

    pub fn detection_delete(&self, id: i64) -> String {
        self.url(&format!("/detection/delete/{}", id))
    }

    pub fn detection_download(&self, id: i64) -> String {
        self.url(&format!("/detection/download/{}", id))
    }

    pub fn analysis_detail(&self, id: i64) -> String {
        self.url(&format!("/api/analysis/{}", id))
    }

    pub fn analysis_download(&self, id: i64) -> String {
        self.url(&format!("/mapping/download/{}", id))
    }
}
