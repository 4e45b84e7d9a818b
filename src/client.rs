//! 推論サービスのHTTPクライアント（reqwest multipart）

use crate::error::Result;
use crate::scanner::ImageUpload;
use detector_common::{
    parse_prediction_response, Endpoint, SubmissionResult, UNREACHABLE_MESSAGE, UPLOAD_FIELD,
};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

/// `GET /` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl PredictClient {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// 画像を1枚送信する
    ///
    /// 失敗はすべて `SubmissionResult::Error` として返り、リトライはしない。
    pub async fn predict(&self, upload: &ImageUpload) -> SubmissionResult {
        let bytes = match tokio::fs::read(&upload.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("読み込み失敗 {}: {}", upload.path.display(), e);
                return SubmissionResult::error(format!("Could not read {}: {}", upload.file_name, e));
            }
        };

        match self.post(upload, bytes).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("推論リクエスト失敗 {}: {}", self.endpoint, e);
                SubmissionResult::error(UNREACHABLE_MESSAGE)
            }
        }
    }

    async fn post(&self, upload: &ImageUpload, bytes: Vec<u8>) -> Result<SubmissionResult> {
        let part = Part::bytes(bytes)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!("POST {} ({})", self.endpoint, upload.file_name);
        let response = self
            .http
            .post(self.endpoint.as_str())
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("status {}: {}", status, body);

        Ok(parse_prediction_response(status, &body))
    }

    /// サービスの稼働確認
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint.health_url()?;
        let status = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<HealthStatus>()
            .await?;
        Ok(status)
    }
}
