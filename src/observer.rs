//! 段階遷移の観測フック
//!
//! 分類ロジック本体はログを直接出さず、段階ごとに1件の `TierEvent` を通知する。
//! 既定は `tracing` へ出力し、テストでは記録用の実装を差し込む。

use photo_scene_common::{ClassificationResult, Scene};

/// 分類の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// 1: ファイル名ヒューリスティック
    Filename,
    /// 2: Vision解析呼び出し
    Analyzer,
    /// 3: ストーリーシーン分類
    StoryScene,
    /// 4: 旧キーワード分類
    Legacy,
    /// 5: 段階1の結果で妥協
    FilenameFallback,
    /// 6: 段階3の結果で妥協
    StoryFallback,
    /// 7: 段階4の結果を無条件に採用
    FinalFallback,
}

impl Tier {
    pub fn number(self) -> u8 {
        match self {
            Tier::Filename => 1,
            Tier::Analyzer => 2,
            Tier::StoryScene => 3,
            Tier::Legacy => 4,
            Tier::FilenameFallback => 5,
            Tier::StoryFallback => 6,
            Tier::FinalFallback => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TierOutcome {
    /// この段階の結果を採用して終了
    Accepted,
    /// 閾値未満で次の段階へ
    Passed,
    /// 解析APIの失敗
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierEvent {
    pub tier: Tier,
    pub outcome: TierOutcome,
    pub scene: Option<Scene>,
    pub confidence: Option<f64>,
    pub threshold: Option<f64>,
}

impl TierEvent {
    pub fn evaluated(tier: Tier, result: &ClassificationResult, threshold: f64, accepted: bool) -> Self {
        Self {
            tier,
            outcome: if accepted { TierOutcome::Accepted } else { TierOutcome::Passed },
            scene: Some(result.scene),
            confidence: Some(result.confidence),
            threshold: Some(threshold),
        }
    }

    pub fn analyzer_succeeded() -> Self {
        Self {
            tier: Tier::Analyzer,
            outcome: TierOutcome::Passed,
            scene: None,
            confidence: None,
            threshold: None,
        }
    }

    pub fn analyzer_failed(reason: impl Into<String>) -> Self {
        Self {
            tier: Tier::Analyzer,
            outcome: TierOutcome::Failed(reason.into()),
            scene: None,
            confidence: None,
            threshold: None,
        }
    }
}

pub trait ClassificationObserver: Send + Sync {
    fn on_tier(&self, event: &TierEvent);
}

/// `tracing` へ構造化イベントとして出力
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ClassificationObserver for TracingObserver {
    fn on_tier(&self, event: &TierEvent) {
        match &event.outcome {
            TierOutcome::Failed(reason) => {
                tracing::warn!(
                    tier = event.tier.number(),
                    error = %reason,
                    "Vision analysis failed, degrading to filename result"
                );
            }
            outcome => {
                tracing::debug!(
                    tier = event.tier.number(),
                    accepted = matches!(outcome, TierOutcome::Accepted),
                    scene = ?event.scene.map(|s| s.number()),
                    confidence = ?event.confidence,
                    threshold = ?event.threshold,
                    "Classification tier evaluated"
                );
            }
        }
    }
}
