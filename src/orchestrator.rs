//! 段階的な分類の制御
//!
//! | 段階 | 処理 | 採用条件 |
//! |---|---|---|
//! | 1 | ファイル名ヒューリスティック | 信頼度 >= 0.9 で即採用 |
//! | 2 | Vision解析呼び出し | 失敗時は段階1の結果を返す |
//! | 3 | ストーリーシーン分類 | >= 0.7 |
//! | 4 | 旧キーワード分類 | >= 0.8 |
//! | 5 | 段階1の結果 | >= 0.7 かつ S3 以外 |
//! | 6 | 段階3の結果 | >= 0.5 |
//! | 7 | 段階4の結果 | 無条件 |
//!
//! 段階の順序が信頼度の大小比較より優先される。
//! 呼び出しごとに完結し、呼び出し間で状態を持たない。

use crate::analyzer::VisionContentAnalyzer;
use crate::error::{PhotoSceneError, Result};
use crate::observer::{ClassificationObserver, Tier, TierEvent, TracingObserver};
use photo_scene_common::{
    ClassificationInput, ClassificationResult, ConfidenceConfig, DetectionMethod,
    FilenameSceneHeuristic, LegacyKeywordClassifier, StorySceneClassifier,
};
use std::sync::Arc;
use std::time::Duration;

/// 既定値の分岐で否定的なシーン（S3）を返さない
///
/// 既定値（どのルールにも一致しなかった結果）は必ずここを通す。
/// S3 が紛れ込んだ場合は手がかりなしの S1 に置き換える。
pub fn enforce_no_negative_default(result: ClassificationResult, no_signal: f64) -> ClassificationResult {
    if !result.scene.is_negative() {
        return result;
    }

    tracing::error!(
        scene = result.scene.number(),
        method = %result.method,
        "Fallback branch produced a negative scene; replacing with positive default"
    );
    ClassificationResult::positive_default(no_signal, DetectionMethod::Default)
}

/// 1段階分の結果（ルール一致か既定値か）
struct Stage {
    result: ClassificationResult,
    defaulted: bool,
}

impl Stage {
    fn from_rules(matched: Option<ClassificationResult>, default: impl FnOnce() -> ClassificationResult) -> Self {
        match matched {
            Some(result) => Stage { result, defaulted: false },
            None => Stage { result: default(), defaulted: true },
        }
    }

    fn finish(self, no_signal: f64) -> ClassificationResult {
        if self.defaulted {
            enforce_no_negative_default(self.result, no_signal)
        } else {
            self.result
        }
    }
}

/// 分類オーケストレータ
pub struct ClassificationOrchestrator<A> {
    analyzer: A,
    config: ConfidenceConfig,
    filename: FilenameSceneHeuristic,
    story: StorySceneClassifier,
    legacy: LegacyKeywordClassifier,
    observer: Arc<dyn ClassificationObserver>,
    analyzer_timeout: Option<Duration>,
    max_retries: u32,
}

impl<A: VisionContentAnalyzer> ClassificationOrchestrator<A> {
    pub fn new(analyzer: A, config: ConfidenceConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            filename: FilenameSceneHeuristic::new(&config)?,
            story: StorySceneClassifier::new(&config)?,
            legacy: LegacyKeywordClassifier::new(&config)?,
            analyzer,
            config,
            observer: Arc::new(TracingObserver),
            analyzer_timeout: None,
            max_retries: 0,
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn ClassificationObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 解析呼び出し1回あたりの制限時間（超過は失敗扱い）
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.analyzer_timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// 段階1のみ（ネットワークなし）
    pub fn classify_offline(&self, file_name: &str, file_path: Option<&str>) -> ClassificationResult {
        self.filename_stage(file_name, file_path).finish(self.config.no_signal)
    }

    /// 1枚の画像を分類する
    ///
    /// 解析APIが失敗しても必ず結果を返す。
    pub async fn classify(&self, input: &ClassificationInput) -> ClassificationResult {
        let cfg = &self.config;

        // 1. ファイル名
        let tier1 = self.filename_stage(&input.file_name, input.file_path.as_deref());
        let accepted = tier1.result.confidence >= cfg.filename_accept;
        self.emit(TierEvent::evaluated(Tier::Filename, &tier1.result, cfg.filename_accept, accepted));
        if accepted {
            return tier1.finish(cfg.no_signal);
        }

        // 2. Vision解析
        let analysis = match self.analyze(input).await {
            Ok(text) => {
                self.emit(TierEvent::analyzer_succeeded());
                text
            }
            Err(e) => {
                self.emit(TierEvent::analyzer_failed(e.to_string()));
                return tier1.finish(cfg.no_signal);
            }
        };

        // 3. ストーリーシーン
        let alt_text = input.existing_alt_text.as_deref();
        let description = input.existing_description.as_deref();
        let tier3 = Stage::from_rules(self.story.evaluate(&analysis, alt_text, description), || {
            self.story.default_result(&analysis, alt_text, description)
        });
        let accepted = tier3.result.confidence >= cfg.story_accept;
        self.emit(TierEvent::evaluated(Tier::StoryScene, &tier3.result, cfg.story_accept, accepted));
        if accepted {
            return tier3.finish(cfg.no_signal);
        }

        // 4. 旧キーワード
        let tier4 = Stage::from_rules(self.legacy.evaluate(&analysis), || self.legacy.default_result());
        let accepted = tier4.result.confidence >= cfg.legacy_accept;
        self.emit(TierEvent::evaluated(Tier::Legacy, &tier4.result, cfg.legacy_accept, accepted));
        if accepted {
            return tier4.finish(cfg.no_signal);
        }

        // 5. 弱い書類判定・否定的シーンは段階1から採用しない
        let accepted = tier1.result.confidence >= cfg.filename_fallback_accept && !tier1.result.scene.is_negative();
        self.emit(TierEvent::evaluated(
            Tier::FilenameFallback,
            &tier1.result,
            cfg.filename_fallback_accept,
            accepted,
        ));
        if accepted {
            return tier1.finish(cfg.no_signal);
        }

        // 6. 旧分類の大雑把な既定値よりストーリーシーンを優先
        let accepted = tier3.result.confidence >= cfg.story_fallback_accept;
        self.emit(TierEvent::evaluated(
            Tier::StoryFallback,
            &tier3.result,
            cfg.story_fallback_accept,
            accepted,
        ));
        if accepted {
            return tier3.finish(cfg.no_signal);
        }

        // 7. どの段階にも手がかりがなければ手がかりなしの信頼度にする
        let tier7 = if tier4.defaulted {
            Stage {
                result: ClassificationResult::positive_default(cfg.no_signal, DetectionMethod::AiAnalysis),
                defaulted: true,
            }
        } else {
            tier4
        };
        self.emit(TierEvent::evaluated(Tier::FinalFallback, &tier7.result, 0.0, true));
        tier7.finish(cfg.no_signal)
    }

    fn filename_stage(&self, file_name: &str, file_path: Option<&str>) -> Stage {
        Stage::from_rules(self.filename.evaluate(file_name, file_path), || {
            self.filename.default_result()
        })
    }

    /// 解析API呼び出し（制限時間・再試行つき）
    ///
    /// 再試行するのは解析API由来のエラーだけ。設定不備などは即座に失敗を返す。
    async fn analyze(&self, input: &ClassificationInput) -> Result<String> {
        let mut attempt = 0;
        loop {
            let call = self.analyzer.analyze(&input.image_url, input.metadata_profile);
            let outcome = match self.analyzer_timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(PhotoSceneError::AnalyzerTimeout(limit.as_millis() as u64)),
                },
                None => call.await,
            };

            match outcome {
                Ok(text) => return Ok(text),
                Err(e) if e.is_analyzer_failure() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::debug!(attempt, error = %e, "Retrying vision analysis");
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn emit(&self, event: TierEvent) {
        self.observer.on_tier(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_scene_common::{ContentType, Scene};

    #[test]
    fn test_guard_passes_positive_results() {
        let result = ClassificationResult::positive_default(0.6, DetectionMethod::StoryScene);
        assert_eq!(enforce_no_negative_default(result.clone(), 0.4), result);
    }

    #[test]
    fn test_guard_replaces_negative_default() {
        let negative = ClassificationResult::new(
            Scene::PROBLEM,
            ContentType::Problem,
            0.6,
            &["store"],
            DetectionMethod::AiAnalysis,
        );
        let guarded = enforce_no_negative_default(negative, 0.4);
        assert_eq!(guarded.scene, Scene::HAPPY_SOLO);
        assert_eq!(guarded.content_type, ContentType::Happy);
        assert!((guarded.confidence - 0.4).abs() < f64::EPSILON);
        assert_eq!(guarded.method, DetectionMethod::Default);
    }
}
