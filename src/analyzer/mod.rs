//! Vision解析（外部サービス）
//!
//! 画像URLを渡して自由記述のキーワード・説明文を受け取るだけの境界。
//! 中身のスキーマには依存せず、分類側で部分一致に使う。

mod http;
mod types;

pub use http::{HttpVisionAnalyzer, ANALYSIS_TITLE};
pub use types::{AnalyzeRequest, AnalyzeResponse, Keywords};

use crate::error::Result;
use async_trait::async_trait;
use photo_scene_common::MetadataProfile;
use std::sync::Arc;

/// Vision解析の呼び出し口
///
/// 失敗（通信エラー・非2xx・不正なレスポンス）は1つのエラーとして返す。
/// 再試行はしない。
#[async_trait]
pub trait VisionContentAnalyzer: Send + Sync {
    async fn analyze(&self, image_url: &str, profile: MetadataProfile) -> Result<String>;
}

#[async_trait]
impl<T: VisionContentAnalyzer + ?Sized> VisionContentAnalyzer for Arc<T> {
    async fn analyze(&self, image_url: &str, profile: MetadataProfile) -> Result<String> {
        (**self).analyze(image_url, profile).await
    }
}

#[async_trait]
impl<T: VisionContentAnalyzer + ?Sized> VisionContentAnalyzer for Box<T> {
    async fn analyze(&self, image_url: &str, profile: MetadataProfile) -> Result<String> {
        (**self).analyze(image_url, profile).await
    }
}
