//! ストーリーシーン分類
//!
//! Vision解析のテキストに既存の alt テキスト・説明文を連結し、
//! 複合条件のルールを優先順に評価して S1〜S7 を決める。
//!
//! ## 優先順
//! 1. ゴルフ場 + 笑顔 + 背景に複数人 → S6
//! 2. ゴルフ場 + 笑顔 → S1
//! 3. ゴルフ場のみ（笑顔・否定・グループの手がかりなし） → S1（弱）
//! 4. ゴルフ場 + 複数人 → S2
//! 5. 否定的な手がかり → S3（S3 を出すのはこのルールだけ）
//! 6. 相談・フィッティング + 電話・店舗 → S4
//! 7. フィッティング・スクリーンゴルフ + 屋内 → S5
//! 8. 単独 + 背景に複数人 + 笑顔（厳密版） → S6
//! 9. 製品・ロゴ + クローズアップ → S7
//! 10. 既定値: ゴルフ関連語あり → S1(0.6)、なし → S1(0.4)

use crate::confidence::ConfidenceConfig;
use crate::error::Result;
use crate::keywords::*;
use crate::rules::{contains_any, Rule, RuleTable};
use crate::types::{ClassificationResult, ContentType, DetectionMethod, Scene};

fn has_golf_course(t: &str) -> bool {
    contains_any(t, STORY_GOLF_COURSE)
}

fn has_happy_expression(t: &str) -> bool {
    contains_any(t, STORY_HAPPY)
}

/// 単独ショットの構図（明示的な単独語、またはグループ語がない）
fn has_solo_framing(t: &str) -> bool {
    contains_any(t, STORY_SOLO) || !contains_any(t, STORY_GROUP_HINT)
}

fn has_background_crowd(t: &str) -> bool {
    contains_any(t, STORY_BACKGROUND_CROWD)
}

fn has_multiple_people(t: &str) -> bool {
    contains_any(t, STORY_GROUP)
}

fn has_negative_cue(t: &str) -> bool {
    contains_any(t, STORY_NEGATIVE)
}

fn is_happy_golf_moment(t: &str) -> bool {
    has_golf_course(t) && has_solo_framing(t) && has_happy_expression(t)
}

/// ストーリーシーン用のルールテーブル
pub fn story_rules(config: &ConfidenceConfig) -> Result<RuleTable> {
    RuleTable::new(vec![
        Rule::new("happy-with-crowd", Scene::SOLO_WITH_OTHERS, ContentType::Happy, config.story_strong,
            &["golf-course", "solo-with-others", "smiling", "happy", "luxurious-golf"],
            |t| is_happy_golf_moment(t) && has_background_crowd(t)),
        Rule::new("happy-solo", Scene::HAPPY_SOLO, ContentType::Happy, config.story_strong,
            &["golf-course", "solo-shot", "happy", "luxurious-golf", "peaceful"],
            is_happy_golf_moment),
        Rule::new("golf-course-only", Scene::HAPPY_SOLO, ContentType::Happy, config.story_golf_only,
            &["golf-course", "solo-shot"],
            |t| {
                has_golf_course(t)
                    && !has_happy_expression(t)
                    && !has_negative_cue(t)
                    && !has_multiple_people(t)
            }),
        Rule::new("group", Scene::GROUP, ContentType::Group, config.story_secondary,
            &["golf-course", "multiple-people", "group", "together"],
            |t| has_multiple_people(t) && contains_any(t, STORY_GROUP_VENUE)),
        Rule::new("problem", Scene::PROBLEM, ContentType::Problem, config.story_strong,
            &["problem", "trouble", "negative-expression", "worry"],
            has_negative_cue),
        Rule::new("guide", Scene::GUIDE, ContentType::Guide, config.story_secondary,
            &["consultation", "fitting", "guide", "sita"],
            |t| contains_any(t, STORY_CONSULTATION) && contains_any(t, STORY_CONTACT_POINT)),
        Rule::new("fitting-shop", Scene::FITTING, ContentType::Fitting, config.story_secondary,
            &["fitting-shop", "screen-golf", "indoor", "sita", "masgoo"],
            |t| contains_any(t, STORY_FITTING) && contains_any(t, STORY_INDOOR)),
        Rule::new("solo-with-crowd-strict", Scene::SOLO_WITH_OTHERS, ContentType::Happy, config.story_strong,
            &["golf-course", "solo-with-others", "smiling", "happy"],
            |t| {
                contains_any(t, STORY_GROUP_VENUE)
                    && contains_any(t, STORY_SOLO_STRICT)
                    && contains_any(t, STORY_CROWD_STRICT)
                    && contains_any(t, STORY_HAPPY_STRICT)
            }),
        Rule::new("product-close-up", Scene::PRODUCT, ContentType::Product, config.story_secondary,
            &["product", "close-up", "equipment", "masgoo-logo"],
            |t| contains_any(t, STORY_PRODUCT) && contains_any(t, STORY_CLOSE_UP)),
    ])
}

/// ストーリーシーン分類器
#[derive(Debug)]
pub struct StorySceneClassifier {
    rules: RuleTable,
    golf_fallback: f64,
    no_signal: f64,
}

impl StorySceneClassifier {
    pub fn new(config: &ConfidenceConfig) -> Result<Self> {
        Ok(Self {
            rules: story_rules(config)?,
            golf_fallback: config.story_golf_fallback,
            no_signal: config.no_signal,
        })
    }

    /// ルールだけを評価する（一致なしは None）
    pub fn evaluate(
        &self,
        analysis: &str,
        alt_text: Option<&str>,
        description: Option<&str>,
    ) -> Option<ClassificationResult> {
        let text = combined_text(analysis, alt_text, description);
        self.rules.classify(&text, DetectionMethod::StoryScene)
    }

    pub fn classify(
        &self,
        analysis: &str,
        alt_text: Option<&str>,
        description: Option<&str>,
    ) -> ClassificationResult {
        self.evaluate(analysis, alt_text, description)
            .unwrap_or_else(|| self.default_result(analysis, alt_text, description))
    }

    /// どのルールにも一致しなかった場合の結果（ゴルフ関連語の有無で信頼度が変わる）
    pub fn default_result(
        &self,
        analysis: &str,
        alt_text: Option<&str>,
        description: Option<&str>,
    ) -> ClassificationResult {
        let text = combined_text(analysis, alt_text, description);
        let confidence = if contains_any(&text, GOLF_RELATED) {
            self.golf_fallback
        } else {
            self.no_signal
        };
        ClassificationResult::positive_default(confidence, DetectionMethod::StoryScene)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

/// 解析テキストと既存メタデータを1つの小文字テキストにする
pub fn combined_text(analysis: &str, alt_text: Option<&str>, description: Option<&str>) -> String {
    format!(
        "{} {} {}",
        analysis,
        alt_text.unwrap_or_default(),
        description.unwrap_or_default()
    )
    .to_lowercase()
}
