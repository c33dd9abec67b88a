//! フォーム検証とアルゴリズム選択のテスト

use farm_vision_common::catalog::{self, RangeDefaults};
use farm_vision_common::validation::DETECTION_MAX_SIZE;
use farm_vision_common::{validate_file, FileConstraints, FileMeta, UiConfig, ValidationError};

/// 検出フォームはJPEG/PNG以外を拒否
#[test]
fn test_detection_form_rejects_non_image_types() {
    let constraints = FileConstraints::detection_image().with_max_size(UiConfig::default().max_image_size);

    for (name, mime) in [
        ("scan.bmp", "image/bmp"),
        ("field.tif", "image/tiff"),
        ("notes.txt", "text/plain"),
        ("photo.heic", "image/heic"),
    ] {
        let file = FileMeta::new(name, mime, 1000);
        assert_eq!(
            validate_file(Some(&file), &constraints),
            Err(ValidationError::UnsupportedType { mime: mime.to_string() })
        );
    }
}

/// 100 MiB ちょうどは許可、1バイト超えると拒否
#[test]
fn test_detection_form_size_limit() {
    let constraints = FileConstraints::detection_image().with_max_size(UiConfig::default().max_image_size);
    assert_eq!(DETECTION_MAX_SIZE, 104_857_600);

    let at_limit = FileMeta::new("big.png", "image/png", 104_857_600);
    assert!(validate_file(Some(&at_limit), &constraints).is_ok());

    let over = FileMeta::new("big.png", "image/png", 104_857_601);
    assert!(matches!(
        validate_file(Some(&over), &constraints),
        Err(ValidationError::FileTooLarge { .. })
    ));
}

/// マッピングフォームは .tif/.tiff 以外を拒否
#[test]
fn test_mapping_form_extensions() {
    let constraints = FileConstraints::geotiff();

    for name in ["ortho.TIF", "ortho.Tiff", "ortho.tif", "ORTHO.TIFF"] {
        assert!(validate_file(Some(&FileMeta::new(name, "", 1)), &constraints).is_ok());
    }
    for name in ["ortho.jpg", "ortho.png", "ortho.tif.bak"] {
        assert!(matches!(
            validate_file(Some(&FileMeta::new(name, "", 1)), &constraints),
            Err(ValidationError::InvalidExtension { .. })
        ));
    }
    assert_eq!(validate_file(None, &constraints), Err(ValidationError::MissingFile));
}

/// ndvi → gli は同じ既定値、bai は 0..100
#[test]
fn test_algorithm_selection_defaults() {
    let sequence = ["ndvi", "gli", "bai"];
    let ranges: Vec<RangeDefaults> = sequence
        .iter()
        .map(|id| catalog::default_range(id).unwrap())
        .collect();

    assert_eq!(ranges[0], RangeDefaults { min: -1.0, max: 1.0 });
    assert_eq!(ranges[1], RangeDefaults { min: -1.0, max: 1.0 });
    assert_eq!(ranges[2], RangeDefaults { min: 0.0, max: 100.0 });

    let bai = catalog::algorithm_info("bai").unwrap();
    assert!(bai.title.starts_with("BAI"));
}

/// 範囲の検証は警告だけ
#[test]
fn test_range_warning_is_advisory() {
    let warning = catalog::check_range(1.0, -1.0).unwrap_err();
    assert_eq!(warning.min, 1.0);
    assert!(!warning.message().is_empty());
}
