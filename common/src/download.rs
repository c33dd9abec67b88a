//! ダウンロードリンクの生成
//!
//! 取得はブラウザのネイティブダウンロードに任せ、ここでは href とファイル名だけ決める。

use crate::config::Endpoints;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub file_name: String,
}

impl DownloadLink {
    pub fn detection(endpoints: &Endpoints, id: i64) -> Self {
        Self {
            href: endpoints.detection_download(id),
            file_name: format!("detection_result_{}.jpg", id),
        }
    }

    pub fn analysis(endpoints: &Endpoints, id: i64) -> Self {
        Self {
            href: endpoints.analysis_download(id),
            file_name: format!("vegetation_analysis_{}.tif", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let endpoints = Endpoints::new("");
        let detection = DownloadLink::detection(&endpoints, 12);
        assert_eq!(detection.href, "/detection/download/12");
        assert_eq!(detection.file_name, "detection_result_12.jpg");

        let analysis = DownloadLink::analysis(&endpoints, 3);
        assert_eq!(analysis.href, "/mapping/download/3");
        assert_eq!(analysis.file_name, "vegetation_analysis_3.tif");
    }
}
