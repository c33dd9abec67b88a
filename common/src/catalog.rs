//! 植生指数アルゴリズムとカラーマップの静的テーブル

/// アルゴリズムの説明パネル用情報
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// 指数がとりうる値の範囲（表示用）
    pub value_range: &'static str,
    pub interpretation: &'static str,
}

/// 範囲入力の既定値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeDefaults {
    pub min: f64,
    pub max: f64,
}

/// カラーマップのプレビュー用情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    pub id: &'static str,
    pub name: &'static str,
    /// CSS `background` にそのまま渡すグラデーション
    pub gradient: &'static str,
}

pub const DEFAULT_ALGORITHM: &str = "ndvi";
pub const DEFAULT_COLORMAP: &str = "rdylgn";

pub const ALGORITHMS: &[AlgorithmInfo] = &[
    AlgorithmInfo {
        id: "ndvi",
        title: "NDVI - Normalized Difference Vegetation Index",
        description: "Bitki sağlığını ve yoğunluğunu ölçen en yaygın vejetasyon indeksi.",
        value_range: "-1 ile +1",
        interpretation: "0.6 üzeri yoğun ve sağlıklı bitki örtüsü, 0.2 altı çıplak toprak veya su.",
    },
    AlgorithmInfo {
        id: "gli",
        title: "GLI - Green Leaf Index",
        description: "RGB görüntülerden yeşil yaprak miktarını tahmin eder.",
        value_range: "-1 ile +1",
        interpretation: "Pozitif değerler yeşil bitki örtüsünü, negatif değerler toprak ve cansız yüzeyleri gösterir.",
    },
    AlgorithmInfo {
        id: "vari",
        title: "VARI - Visual Atmospheric Resistance Index",
        description: "Atmosferik etkilere dayanıklı, görünür bantlara dayalı indeks.",
        value_range: "-1 ile +1",
        interpretation: "Yüksek değerler daha fazla yeşil bitki örtüsüne işaret eder.",
    },
    AlgorithmInfo {
        id: "ndyi",
        title: "NDYI - Normalized Difference Yellowness Index",
        description: "Çiçeklenme ve sararma dönemlerini izlemek için sarılık indeksi.",
        value_range: "-1 ile +1",
        interpretation: "Yüksek değerler sarı çiçeklenmeyi veya yaprak sararmasını gösterir.",
    },
    AlgorithmInfo {
        id: "ndre",
        title: "NDRE - Normalized Difference Red Edge Index",
        description: "Kırmızı kenar bandı ile klorofil içeriğini ölçer.",
        value_range: "-1 ile +1",
        interpretation: "Olgun bitkilerde azot ve klorofil durumunu NDVI'dan daha hassas gösterir.",
    },
    AlgorithmInfo {
        id: "ndwi",
        title: "NDWI - Normalized Difference Water Index",
        description: "Su kütlelerini ve bitki su içeriğini belirler.",
        value_range: "-1 ile +1",
        interpretation: "Pozitif değerler su yüzeylerini, negatif değerler kuru alanları gösterir.",
    },
    AlgorithmInfo {
        id: "ndvi_blue",
        title: "NDVI (Blue) - Blue-based NDVI",
        description: "Kırmızı yerine mavi bant kullanan NDVI varyantı.",
        value_range: "-1 ile +1",
        interpretation: "Modifiye kameralarla çekilen görüntülerde bitki canlılığını gösterir.",
    },
    AlgorithmInfo {
        id: "endvi",
        title: "ENDVI - Enhanced NDVI",
        description: "Yeşil ve mavi bantları birlikte kullanan geliştirilmiş NDVI.",
        value_range: "-1 ile +1",
        interpretation: "Yüksek değerler sağlıklı bitki örtüsünü gösterir.",
    },
    AlgorithmInfo {
        id: "vndvi",
        title: "vNDVI - Visible NDVI",
        description: "Yalnızca görünür bantlardan NDVI tahmini.",
        value_range: "0 ile +1",
        interpretation: "0.5 üzeri değerler canlı bitki örtüsüne işaret eder.",
    },
    AlgorithmInfo {
        id: "mpri",
        title: "MPRI - Modified Photochemical Reflectance Index",
        description: "Fotosentetik verimliliği görünür bantlarla tahmin eder.",
        value_range: "-1 ile +1",
        interpretation: "Yüksek değerler aktif fotosentezi gösterir.",
    },
    AlgorithmInfo {
        id: "exg",
        title: "EXG - Excess Green Index",
        description: "Yeşil bitkiyi topraktan ayırmak için fazla yeşil indeksi.",
        value_range: "-2 ile +2",
        interpretation: "Pozitif değerler yeşil bitkiyi, sıfır civarı toprağı gösterir.",
    },
    AlgorithmInfo {
        id: "tgi",
        title: "TGI - Triangular Greenness Index",
        description: "Klorofil içeriğini üçgen yöntemiyle tahmin eder.",
        value_range: "-100 ile +100",
        interpretation: "Yüksek değerler daha fazla klorofil içeriğini gösterir.",
    },
    AlgorithmInfo {
        id: "bai",
        title: "BAI - Burn Area Index",
        description: "Yanmış alanları tespit etmek için kullanılır.",
        value_range: "0 ile 100+",
        interpretation: "Yüksek değerler yanmış veya hasar görmüş alanları gösterir.",
    },
    AlgorithmInfo {
        id: "gndvi",
        title: "GNDVI - Green NDVI",
        description: "Kırmızı yerine yeşil bant kullanan NDVI varyantı.",
        value_range: "-1 ile +1",
        interpretation: "Klorofil yoğunluğuna NDVI'dan daha duyarlıdır.",
    },
    AlgorithmInfo {
        id: "savi",
        title: "SAVI - Soil Adjusted Vegetation Index",
        description: "Toprak parlaklığı etkisini düzelten vejetasyon indeksi.",
        value_range: "-1.5 ile +1.5",
        interpretation: "Seyrek bitki örtüsüne sahip alanlarda NDVI'dan daha güvenilirdir.",
    },
];

pub const DEFAULT_RANGES: &[(&str, RangeDefaults)] = &[
    ("ndvi", RangeDefaults { min: -1.0, max: 1.0 }),
    ("gli", RangeDefaults { min: -1.0, max: 1.0 }),
    ("vari", RangeDefaults { min: -1.0, max: 1.0 }),
    ("ndyi", RangeDefaults { min: -1.0, max: 1.0 }),
    ("ndre", RangeDefaults { min: -1.0, max: 1.0 }),
    ("ndwi", RangeDefaults { min: -1.0, max: 1.0 }),
    ("ndvi_blue", RangeDefaults { min: -1.0, max: 1.0 }),
    ("endvi", RangeDefaults { min: -1.0, max: 1.0 }),
    ("vndvi", RangeDefaults { min: 0.0, max: 1.0 }),
    ("mpri", RangeDefaults { min: -1.0, max: 1.0 }),
    ("exg", RangeDefaults { min: -2.0, max: 2.0 }),
    ("tgi", RangeDefaults { min: -100.0, max: 100.0 }),
    ("bai", RangeDefaults { min: 0.0, max: 100.0 }),
    ("gndvi", RangeDefaults { min: -1.0, max: 1.0 }),
    ("savi", RangeDefaults { min: -1.5, max: 1.5 }),
];

pub const COLORMAPS: &[Colormap] = &[
    Colormap {
        id: "rdylgn",
        name: "RdYlGn",
        gradient: "linear-gradient(to right, #a50026, #f46d43, #fee08b, #d9ef8b, #66bd63, #006837)",
    },
    Colormap {
        id: "spectral",
        name: "Spectral",
        gradient: "linear-gradient(to right, #9e0142, #f46d43, #fee08b, #e6f598, #66c2a5, #5e4fa2)",
    },
    Colormap {
        id: "rdylgn_r",
        name: "RdYlGn (Reverse)",
        gradient: "linear-gradient(to right, #006837, #66bd63, #d9ef8b, #fee08b, #f46d43, #a50026)",
    },
    Colormap {
        id: "spectral_r",
        name: "Spectral (Reverse)",
        gradient: "linear-gradient(to right, #5e4fa2, #66c2a5, #e6f598, #fee08b, #f46d43, #9e0142)",
    },
    Colormap {
        id: "viridis",
        name: "Viridis",
        gradient: "linear-gradient(to right, #440154, #3b528b, #21918c, #5ec962, #fde725)",
    },
    Colormap {
        id: "plasma",
        name: "Plasma",
        gradient: "linear-gradient(to right, #0d0887, #7e03a8, #cc4778, #f89540, #f0f921)",
    },
    Colormap {
        id: "inferno",
        name: "Inferno",
        gradient: "linear-gradient(to right, #000004, #57106e, #bc3754, #f98e09, #fcffa4)",
    },
    Colormap {
        id: "magma",
        name: "Magma",
        gradient: "linear-gradient(to right, #000004, #51127c, #b73779, #fc8961, #fcfdbf)",
    },
    Colormap {
        id: "jet",
        name: "Jet",
        gradient: "linear-gradient(to right, #00007f, #0000ff, #00ffff, #ffff00, #ff0000, #7f0000)",
    },
    Colormap {
        id: "terrain",
        name: "Terrain",
        gradient: "linear-gradient(to right, #333399, #0099ff, #00cc66, #ffff99, #996633, #ffffff)",
    },
];

pub fn algorithm_info(id: &str) -> Option<&'static AlgorithmInfo> {
    ALGORITHMS.iter().find(|info| info.id == id)
}

pub fn default_range(id: &str) -> Option<RangeDefaults> {
    DEFAULT_RANGES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, range)| *range)
}

pub fn colormap(id: &str) -> Option<&'static Colormap> {
    COLORMAPS.iter().find(|map| map.id == id)
}

/// 表示用のアルゴリズム名（未知のIDはそのまま返す）
pub fn algorithm_title(id: &str) -> &str {
    algorithm_info(id).map(|info| info.title).unwrap_or(id)
}

/// 表示用のカラーマップ名（未知のIDはそのまま返す）
pub fn colormap_name(id: &str) -> &str {
    colormap(id).map(|map| map.name).unwrap_or(id)
}

/// 範囲入力の整合性に関する注意
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeWarning {
    pub min: f64,
    pub max: f64,
}

impl RangeWarning {
    pub fn message(&self) -> &'static str {
        "Minimum değer maksimum değerden küçük olmalıdır."
    }
}

/// min < max を確認する（警告のみで送信は止めない）
pub fn check_range(min: f64, max: f64) -> Result<(), RangeWarning> {
    if min >= max {
        Err(RangeWarning { min, max })
    } else {
        Ok(())
    }
}

/// 入力欄の文字列を範囲値として読む（空や非数値は None）
pub fn parse_range_input(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// 範囲入力欄に書き込む表記
pub fn format_range_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
