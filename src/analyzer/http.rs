//! HTTP経由のVision解析クライアント
//!
//! プロファイルごとにエンドポイントを切り替える:
//! - golf-ai: `/api/analyze-image-prompt`
//! - general: `/api/analyze-image-general`

use super::types::{AnalyzeRequest, AnalyzeResponse};
use super::VisionContentAnalyzer;
use crate::config::Config;
use crate::error::{PhotoSceneError, Result};
use async_trait::async_trait;
use photo_scene_common::MetadataProfile;
use std::time::Duration;

pub const ANALYSIS_TITLE: &str = "이미지 타입 감지";

pub struct HttpVisionAnalyzer {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpVisionAnalyzer {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PhotoSceneError::Config(format!("HTTPクライアント生成エラー: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut analyzer = Self::new(config.get_analyzer_url()?, config.timeout())?;
        analyzer.api_key = config.get_api_key();
        Ok(analyzer)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn endpoint(&self, profile: MetadataProfile) -> String {
        let path = match profile {
            MetadataProfile::GolfAi => "/api/analyze-image-prompt",
            MetadataProfile::General => "/api/analyze-image-general",
        };
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl VisionContentAnalyzer for HttpVisionAnalyzer {
    async fn analyze(&self, image_url: &str, profile: MetadataProfile) -> Result<String> {
        let request = AnalyzeRequest {
            image_url,
            title: ANALYSIS_TITLE,
            excerpt: "",
        };

        let mut builder = self.client.post(self.endpoint(profile)).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                PhotoSceneError::AnalyzerRequest(format!("タイムアウト: {}", e))
            } else {
                PhotoSceneError::AnalyzerRequest(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PhotoSceneError::AnalyzerStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| PhotoSceneError::AnalyzerParse(e.to_string()))?;

        Ok(payload.into_text())
    }
}
