//! 旧キーワード分類（後方互換性のため維持）
//!
//! Vision解析のテキストだけを見る単純な1パス照合。
//! 既存の alt テキスト・説明文は使わない。

use crate::confidence::ConfidenceConfig;
use crate::error::Result;
use crate::keywords::{
    LEGACY_ARTWALL, LEGACY_DOCUMENT, LEGACY_GOLF, LEGACY_GUIDE, LEGACY_SIMULATOR, SIGNATURE, SWING,
};
use crate::rules::{contains_any, Rule, RuleTable};
use crate::types::{ClassificationResult, ContentType, DetectionMethod, Scene};

pub fn legacy_rules(config: &ConfidenceConfig) -> Result<RuleTable> {
    RuleTable::new(vec![
        Rule::new("document", Scene::DOCUMENT, ContentType::Document, config.legacy_document,
            &["document", "scan"],
            |t| contains_any(t, LEGACY_DOCUMENT)),
        Rule::new("artwall", Scene::FITTING, ContentType::Fitting, config.legacy_match,
            &["artwall", "display"],
            |t| contains_any(t, LEGACY_ARTWALL)),
        Rule::new("simulator", Scene::PROBLEM, ContentType::Fitting, config.legacy_match,
            &["sita", "simulator"],
            |t| contains_any(t, LEGACY_SIMULATOR)),
        Rule::new("guide", Scene::GUIDE, ContentType::Guide, config.legacy_match,
            &["guide", "consultation", "fitting"],
            |t| contains_any(t, LEGACY_GUIDE)),
        Rule::new("golf-course", Scene::HAPPY_SOLO, ContentType::GolfCourse, config.legacy_match,
            &["golf-course", "green"],
            |t| contains_any(t, LEGACY_GOLF)),
        Rule::new("swing", Scene::SOLO_WITH_OTHERS, ContentType::Swing, config.legacy_motion,
            &["swing"],
            |t| contains_any(t, SWING)),
        Rule::new("signature", Scene::SOLO_WITH_OTHERS, ContentType::Signature, config.legacy_motion,
            &["signature"],
            |t| contains_any(t, SIGNATURE)),
    ])
}

/// 旧キーワード分類器
#[derive(Debug)]
pub struct LegacyKeywordClassifier {
    rules: RuleTable,
    default_confidence: f64,
}

impl LegacyKeywordClassifier {
    pub fn new(config: &ConfidenceConfig) -> Result<Self> {
        Ok(Self {
            rules: legacy_rules(config)?,
            default_confidence: config.legacy_default,
        })
    }

    /// ルールだけを評価する（一致なしは None）
    pub fn evaluate(&self, analysis: &str) -> Option<ClassificationResult> {
        self.rules.classify(&analysis.to_lowercase(), DetectionMethod::AiAnalysis)
    }

    pub fn classify(&self, analysis: &str) -> ClassificationResult {
        self.evaluate(analysis).unwrap_or_else(|| self.default_result())
    }

    pub fn default_result(&self) -> ClassificationResult {
        ClassificationResult::positive_default(self.default_confidence, DetectionMethod::AiAnalysis)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}
