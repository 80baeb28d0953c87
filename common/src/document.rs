//! スキャン書類の判定
//!
//! ファイル名・パスにスキャン印があれば書類とみなし、
//! 注文仕様書 → アンケート → 同意書 の順に種別を特定する。

use crate::confidence::ConfidenceConfig;
use crate::keywords::SCAN_MARKERS;
use crate::rules::contains_any;
use crate::types::{DocumentDetection, DocumentType};
use regex::Regex;

lazy_static::lazy_static! {
    static ref ORDER_SPEC_RE: Regex =
        Regex::new(r"order[-_ ]?spec|specification|주문\s*사양서?|주문서|사양서").unwrap();
    static ref SURVEY_RE: Regex = Regex::new(r"survey|questionnaire|설문").unwrap();
    static ref CONSENT_RE: Regex = Regex::new(r"consent|agreement|동의서?").unwrap();
}

/// スキャン書類判定器
#[derive(Debug, Clone)]
pub struct DocumentPatternMatcher {
    match_confidence: f64,
    other_confidence: f64,
}

impl Default for DocumentPatternMatcher {
    fn default() -> Self {
        Self::new(&ConfidenceConfig::default())
    }
}

impl DocumentPatternMatcher {
    pub fn new(config: &ConfidenceConfig) -> Self {
        Self {
            match_confidence: config.document_match,
            other_confidence: config.document_other,
        }
    }

    pub fn detect(&self, file_name: &str, file_path: Option<&str>) -> DocumentDetection {
        let name = file_name.to_lowercase();
        // 相対パス先頭のフォルダもフォルダ印に一致させる
        let path = file_path
            .map(|p| format!("/{}", p.to_lowercase()))
            .unwrap_or_default();

        if !contains_any(&name, SCAN_MARKERS) && !contains_any(&path, SCAN_MARKERS) {
            return DocumentDetection::not_document();
        }

        let document_type = document_type_of(&name, &path);
        let confidence = if document_type == DocumentType::Other {
            self.other_confidence
        } else {
            self.match_confidence
        };

        DocumentDetection {
            is_document: true,
            document_type,
            confidence,
        }
    }
}

/// 既定の信頼度で書類判定
pub fn detect_scanned_document(file_name: &str, file_path: Option<&str>) -> DocumentDetection {
    DocumentPatternMatcher::default().detect(file_name, file_path)
}

fn document_type_of(name: &str, path: &str) -> DocumentType {
    let groups: [(&Regex, DocumentType); 3] = [
        (&ORDER_SPEC_RE, DocumentType::OrderSpec),
        (&SURVEY_RE, DocumentType::Survey),
        (&CONSENT_RE, DocumentType::Consent),
    ];

    groups
        .iter()
        .find(|(re, _)| re.is_match(name) || re.is_match(path))
        .map(|(_, document_type)| *document_type)
        .unwrap_or(DocumentType::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_spec_scan() {
        let detection = detect_scanned_document("seukaen-order-spec-01.webp", None);
        assert!(detection.is_document);
        assert_eq!(detection.document_type, DocumentType::OrderSpec);
        assert!((detection.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_korean_markers() {
        let detection = detect_scanned_document("스캔_주문사양서.png", None);
        assert_eq!(detection.document_type, DocumentType::OrderSpec);

        let detection = detect_scanned_document("scan_설문_02.jpg", None);
        assert_eq!(detection.document_type, DocumentType::Survey);

        let detection = detect_scanned_document("SCAN-동의서.jpg", None);
        assert_eq!(detection.document_type, DocumentType::Consent);
    }

    #[test]
    fn test_priority_order() {
        // 注文仕様書がアンケートより優先される
        let detection = detect_scanned_document("scan-survey-order-spec.jpg", None);
        assert_eq!(detection.document_type, DocumentType::OrderSpec);
    }

    #[test]
    fn test_marker_without_subtype() {
        let detection = detect_scanned_document("seukaen-20260126-2_01.webp", None);
        assert!(detection.is_document);
        assert_eq!(detection.document_type, DocumentType::Other);
        assert!((detection.confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_marker_in_path_subtype_in_name() {
        let detection = detect_scanned_document(
            "consent_01.jpg",
            Some("originals/customers/2024/docs/consent_01.jpg"),
        );
        assert!(detection.is_document);
        assert_eq!(detection.document_type, DocumentType::Consent);
    }

    #[test]
    fn test_top_level_docs_folder() {
        // スキャン起点直下の docs/ フォルダ
        let detection = detect_scanned_document("a.jpg", Some("docs/a.jpg"));
        assert!(detection.is_document);
        assert_eq!(detection.document_type, DocumentType::Other);

        // フォルダ名の一部だけでは一致しない
        let detection = detect_scanned_document("a.jpg", Some("mydocs/a.jpg"));
        assert!(!detection.is_document);
    }

    #[test]
    fn test_subtype_without_marker_is_not_document() {
        // スキャン印がなければ種別語があっても書類扱いしない
        let detection = detect_scanned_document("order-spec.png", None);
        assert_eq!(detection, DocumentDetection::not_document());
    }

    #[test]
    fn test_empty_input() {
        let detection = detect_scanned_document("", None);
        assert!(!detection.is_document);
        assert_eq!(detection.confidence, 0.0);
    }

    #[test]
    fn test_uses_configured_confidence() {
        let config = ConfidenceConfig {
            document_match: 0.95,
            ..Default::default()
        };
        let detection = DocumentPatternMatcher::new(&config).detect("scan-survey.jpg", None);
        assert!((detection.confidence - 0.95).abs() < f64::EPSILON);
    }
}
