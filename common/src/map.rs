//! 地図のベースレイヤー定義

/// 切替可能なベースレイヤー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseLayer {
    pub key: &'static str,
    /// レイヤー切替コントロールに表示する名前
    pub title: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
    pub max_zoom: u8,
    pub active_by_default: bool,
}

pub const BASE_LAYERS: [BaseLayer; 3] = [
    BaseLayer {
        key: "street",
        title: "Sokak Haritası",
        url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; OpenStreetMap contributors",
        max_zoom: 19,
        active_by_default: true,
    },
    BaseLayer {
        key: "satellite",
        title: "Uydu Görüntüsü",
        url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles &copy; Esri",
        max_zoom: 19,
        active_by_default: false,
    },
    BaseLayer {
        key: "terrain",
        title: "Arazi",
        url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "&copy; OpenTopoMap (CC-BY-SA)",
        max_zoom: 17,
        active_by_default: false,
    },
];

/// サンプルオーバーレイの表示名
pub const SAMPLE_OVERLAY_TITLE: &str = "Örnek NDVI Analizi";
