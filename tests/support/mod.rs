//! テスト用のモック解析器と記録用オブザーバ

#![allow(dead_code)]

use async_trait::async_trait;
use photo_scene_ai::error::{PhotoSceneError, Result};
use photo_scene_ai::{ClassificationObserver, TierEvent, VisionContentAnalyzer};
use photo_scene_common::MetadataProfile;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// URLごとに応答を決められるモック
#[derive(Default)]
pub struct MockAnalyzer {
    /// URL → (遅延, 応答テキスト)。None は失敗
    responses: HashMap<String, (Duration, Option<String>)>,
    fallback: Option<String>,
    fail_first: usize,
    misconfigured: bool,
    calls: AtomicUsize,
}

impl MockAnalyzer {
    /// どのURLにも同じテキストを返す
    pub fn returning(text: &str) -> Self {
        Self {
            fallback: Some(text.to_string()),
            ..Default::default()
        }
    }

    /// 常に失敗する
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, delay: Duration, text: Option<&str>) -> Self {
        self.responses
            .insert(url.to_string(), (delay, text.map(str::to_string)));
        self
    }

    /// 解析API以外の理由（設定不備）で失敗する
    pub fn misconfigured() -> Self {
        Self {
            misconfigured: true,
            ..Default::default()
        }
    }

    /// 最初のn回だけ失敗させる
    pub fn fail_first(mut self, n: usize) -> Self {
        self.fail_first = n;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionContentAnalyzer for MockAnalyzer {
    async fn analyze(&self, image_url: &str, _profile: MetadataProfile) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.misconfigured {
            return Err(PhotoSceneError::MissingAnalyzerUrl);
        }
        if call < self.fail_first {
            return Err(PhotoSceneError::AnalyzerRequest("connection reset".into()));
        }

        let (delay, text) = match self.responses.get(image_url) {
            Some((delay, text)) => (*delay, text.clone()),
            None => (Duration::ZERO, self.fallback.clone()),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        text.ok_or(PhotoSceneError::AnalyzerStatus {
            status: 500,
            body: "internal error".into(),
        })
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TierEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<TierEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ClassificationObserver for RecordingObserver {
    fn on_tier(&self, event: &TierEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
