//! バックエンドAPIクライアント
//!
//! 詳細取得・削除・一括アップロードを gloo-net で送る。
//! 応答本文が JSON なら HTTP ステータスに関わらず `success` フラグで判定する。

use farm_vision_common::batch::BatchUploader;
use farm_vision_common::delete::DeleteTransport;
use farm_vision_common::records::{self, AnalysisRecord, DetectionRecord, RecordDetails};
use farm_vision_common::{DetailKind, Endpoints, Error, RecordSource, Result};
use gloo::net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::{File, FormData};

use crate::dom;

#[derive(Debug, Clone)]
pub struct HttpClient {
    endpoints: Endpoints,
    csrf_token: Option<String>,
}

impl HttpClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            csrf_token: dom::csrf_token(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("X-Requested-With", "XMLHttpRequest");
        match &self.csrf_token {
            Some(token) => builder.header("X-CSRFToken", token),
            None => builder,
        }
    }

    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .prepare(Request::get(url))
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// 1件のアップロードをまとめた一括処理要求
    pub fn batch_upload(&self, field: &str, files: Vec<File>) -> BatchUpload<'_> {
        BatchUpload {
            client: self,
            field: field.to_string(),
            files,
        }
    }
}

fn network_error(error: gloo::net::Error) -> Error {
    gloo::console::error!(format!("istek başarısız: {}", error));
    Error::Network(error.to_string())
}

async fn read_json(response: Response) -> Result<Value> {
    let ok = response.ok();
    let status = response.status();
    match response.json::<Value>().await {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(Error::Network(format!("HTTP {}", status))),
        Err(e) => Err(Error::Network(e.to_string())),
    }
}

impl RecordSource for HttpClient {
    async fn fetch(&self, kind: DetailKind, id: i64) -> Result<RecordDetails> {
        match kind {
            DetailKind::Detection => {
                let value = self.get_json(&self.endpoints.detection_detail(id)).await?;
                records::parse_record::<DetectionRecord>(value).map(RecordDetails::Detection)
            }
            DetailKind::Analysis => {
                let value = self.get_json(&self.endpoints.analysis_detail(id)).await?;
                records::parse_record::<AnalysisRecord>(value).map(RecordDetails::Analysis)
            }
        }
    }
}

impl DeleteTransport for HttpClient {
    async fn delete(&self, endpoint: &str) -> Result<()> {
        let response = self
            .prepare(Request::delete(endpoint))
            .send()
            .await
            .map_err(network_error)?;
        let value = read_json(response).await?;
        records::ensure_success(&value)
    }
}

/// 複数ファイルを1つのマルチパート要求で送る
pub struct BatchUpload<'a> {
    client: &'a HttpClient,
    field: String,
    files: Vec<File>,
}

impl BatchUpload<'_> {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    fn form_data(&self) -> Result<FormData> {
        let form = FormData::new().map_err(|e| Error::Network(format!("{:?}", e)))?;
        for file in &self.files {
            form.append_with_blob_and_filename(&self.field, file, &file.name())
                .map_err(|e| Error::Network(format!("{:?}", e)))?;
        }
        Ok(form)
    }
}

impl BatchUploader for BatchUpload<'_> {
    async fn upload(&self) -> Result<usize> {
        let url = self.client.endpoints.detection_batch();
        let request = self
            .client
            .prepare(Request::post(&url))
            .body(self.form_data()?)
            .map_err(network_error)?;
        let response = request.send().await.map_err(network_error)?;
        let value = read_json(response).await?;
        records::parse_batch_response(&value)
    }
}
