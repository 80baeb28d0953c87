//! ファイル名・パスによるシーン判定
//!
//! ネットワークを使わない最初の段階。書類判定を最優先し、
//! 次にキーワード群を固定順で照合する。

use crate::confidence::ConfidenceConfig;
use crate::document::DocumentPatternMatcher;
use crate::error::Result;
use crate::keywords::{
    FILENAME_ARTWALL, FILENAME_GOLF, FILENAME_GUIDE, FILENAME_SIMULATOR, SIGNATURE, SWING,
};
use crate::rules::{contains_any, Rule, RuleTable};
use crate::types::{ClassificationResult, ContentType, DetectionMethod, Scene};

/// 書類判定時のタグ
const DOCUMENT_KEYWORDS: &[&str] = &["document", "scan"];

/// ファイル名ヒューリスティック用のルールテーブル
pub fn filename_rules(config: &ConfidenceConfig) -> Result<RuleTable> {
    let confidence = config.filename_match;

    RuleTable::new(vec![
        Rule::new("golf-course", Scene::HAPPY_SOLO, ContentType::GolfCourse, confidence,
            &["golf-course", "green"],
            |t| contains_any(t, FILENAME_GOLF)),
        // S5 はアートウォール（ストーリー分類ではフィッティング店舗）
        Rule::new("artwall", Scene::FITTING, ContentType::Fitting, confidence,
            &["artwall", "display"],
            |t| contains_any(t, FILENAME_ARTWALL)),
        Rule::new("simulator", Scene::PROBLEM, ContentType::Fitting, confidence,
            &["sita", "simulator"],
            |t| contains_any(t, FILENAME_SIMULATOR)),
        Rule::new("guide", Scene::GUIDE, ContentType::Guide, confidence,
            &["guide", "consultation", "fitting"],
            |t| contains_any(t, FILENAME_GUIDE)),
        Rule::new("swing", Scene::SOLO_WITH_OTHERS, ContentType::Swing, confidence,
            &["swing"],
            |t| contains_any(t, SWING)),
        Rule::new("signature", Scene::SOLO_WITH_OTHERS, ContentType::Signature, confidence,
            &["signature"],
            |t| contains_any(t, SIGNATURE)),
    ])
}

/// ファイル名・パスのシーン判定器
#[derive(Debug)]
pub struct FilenameSceneHeuristic {
    documents: DocumentPatternMatcher,
    rules: RuleTable,
    document_confidence: f64,
    no_signal: f64,
}

impl FilenameSceneHeuristic {
    pub fn new(config: &ConfidenceConfig) -> Result<Self> {
        Ok(Self {
            documents: DocumentPatternMatcher::new(config),
            rules: filename_rules(config)?,
            document_confidence: config.document_match,
            no_signal: config.no_signal,
        })
    }

    pub fn classify(&self, file_name: &str, file_path: Option<&str>) -> ClassificationResult {
        self.evaluate(file_name, file_path)
            .unwrap_or_else(|| self.default_result())
    }

    /// どのルールにも一致しなかった場合の結果
    pub fn default_result(&self) -> ClassificationResult {
        ClassificationResult::positive_default(self.no_signal, DetectionMethod::Filename)
    }

    /// 書類判定とルールだけを評価する（一致なしは None）
    pub fn evaluate(&self, file_name: &str, file_path: Option<&str>) -> Option<ClassificationResult> {
        if self.documents.detect(file_name, file_path).is_document {
            return Some(ClassificationResult::new(
                Scene::DOCUMENT,
                ContentType::Document,
                self.document_confidence,
                DOCUMENT_KEYWORDS,
                DetectionMethod::Filename,
            ));
        }

        // 改行区切りにしてファイル名とパスをまたいだ一致を防ぐ
        let text = format!(
            "{}\n{}",
            file_name.to_lowercase(),
            file_path.unwrap_or_default().to_lowercase()
        );

        self.rules.classify(&text, DetectionMethod::Filename)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> FilenameSceneHeuristic {
        FilenameSceneHeuristic::new(&ConfidenceConfig::default()).unwrap()
    }

    #[test]
    fn test_document_takes_priority() {
        // ゴルフ語を含んでいても書類が優先される
        let result = heuristic().classify("golf-scan-survey.jpg", None);
        assert_eq!(result.scene, Scene::DOCUMENT);
        assert_eq!(result.content_type, ContentType::Document);
        assert!((result.confidence - 0.9).abs() < f64::EPSILON);
        assert_eq!(result.method, DetectionMethod::Filename);
    }

    #[test]
    fn test_document_other_still_high_confidence() {
        let result = heuristic().classify("seukaen-01.webp", None);
        assert_eq!(result.scene, Scene::DOCUMENT);
        assert!((result.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyword_groups() {
        let h = heuristic();
        let cases = [
            ("green_01.jpg", Scene::HAPPY_SOLO, ContentType::GolfCourse),
            ("art-wall-front.jpg", Scene::FITTING, ContentType::Fitting),
            ("시타_03.jpg", Scene::PROBLEM, ContentType::Fitting),
            ("consultation.png", Scene::GUIDE, ContentType::Guide),
            ("swing_practice.jpg", Scene::SOLO_WITH_OTHERS, ContentType::Swing),
            ("customer_signature.jpg", Scene::SOLO_WITH_OTHERS, ContentType::Signature),
        ];
        for (name, scene, content_type) in cases {
            let result = h.classify(name, None);
            assert_eq!(result.scene, scene, "{}", name);
            assert_eq!(result.content_type, content_type, "{}", name);
            assert!((result.confidence - 0.8).abs() < f64::EPSILON, "{}", name);
        }
    }

    #[test]
    fn test_first_group_wins() {
        // ゴルフ語とスイング語の両方 → ゴルフ場が先
        let result = heuristic().classify("golf_swing.jpg", None);
        assert_eq!(result.content_type, ContentType::GolfCourse);
    }

    #[test]
    fn test_path_participates() {
        let result = heuristic().classify("IMG_0001.jpg", Some("customers/kim/swing/IMG_0001.jpg"));
        assert_eq!(result.content_type, ContentType::Swing);
    }

    #[test]
    fn test_default_guard_never_negative() {
        let result = heuristic().classify("IMG_0001.jpg", None);
        assert_eq!(result.scene, Scene::HAPPY_SOLO);
        assert_eq!(result.content_type, ContentType::Happy);
        assert!((result.confidence - 0.4).abs() < f64::EPSILON);
        assert_eq!(result.matched_keywords, vec!["golf-course", "solo-shot"]);
        assert_eq!(result.method, DetectionMethod::Filename);
    }

    #[test]
    fn test_default_result_matches_unmatched_classify() {
        let h = heuristic();
        assert!(h.evaluate("IMG_0001.jpg", None).is_none());
        assert_eq!(h.default_result(), h.classify("IMG_0001.jpg", None));
    }

    #[test]
    fn test_empty_file_name() {
        let result = heuristic().classify("", None);
        assert_eq!(result.scene, Scene::HAPPY_SOLO);
        assert!((result.confidence - 0.4).abs() < f64::EPSILON);
    }
}
