//! 分類結果の型定義
//!
//! CLIとバッチ処理で共有される型:
//! - ClassificationInput: 1枚の画像に対する分類リクエスト
//! - ClassificationResult: 各段階の分類器が返す最終形
//! - DocumentDetection: スキャン書類判定（分類内部でのみ使用）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// マーケティング用のシーン番号（S0〜S7）
///
/// S0 はスキャン書類専用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scene(u8);

impl Scene {
    pub const DOCUMENT: Scene = Scene(0);
    pub const HAPPY_SOLO: Scene = Scene(1);
    pub const GROUP: Scene = Scene(2);
    pub const PROBLEM: Scene = Scene(3);
    pub const GUIDE: Scene = Scene(4);
    pub const FITTING: Scene = Scene(5);
    pub const SOLO_WITH_OTHERS: Scene = Scene(6);
    pub const PRODUCT: Scene = Scene(7);

    pub const MAX: u8 = 7;

    pub fn new(number: u8) -> Result<Self> {
        if number > Self::MAX {
            return Err(Error::InvalidScene(number));
        }
        Ok(Scene(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn is_document(self) -> bool {
        self == Self::DOCUMENT
    }

    /// 否定的なシーン（S3）か
    pub fn is_negative(self) -> bool {
        self == Self::PROBLEM
    }
}

impl TryFrom<u8> for Scene {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Scene::new(value)
    }
}

impl From<Scene> for u8 {
    fn from(scene: Scene) -> u8 {
        scene.0
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// 画像の内容タイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Document,
    GolfCourse,
    Happy,
    Problem,
    Group,
    Guide,
    Fitting,
    Product,
    Swing,
    Signature,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Document => "document",
            ContentType::GolfCourse => "golf-course",
            ContentType::Happy => "happy",
            ContentType::Problem => "problem",
            ContentType::Group => "group",
            ContentType::Guide => "guide",
            ContentType::Fitting => "fitting",
            ContentType::Product => "product",
            ContentType::Swing => "swing",
            ContentType::Signature => "signature",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 最終結果を出した段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMethod {
    Filename,
    AiAnalysis,
    StoryScene,
    Default,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionMethod::Filename => write!(f, "filename"),
            DetectionMethod::AiAnalysis => write!(f, "ai-analysis"),
            DetectionMethod::StoryScene => write!(f, "story-scene"),
            DetectionMethod::Default => write!(f, "default"),
        }
    }
}

/// 既定値に載せるタグ
pub const DEFAULT_KEYWORDS: &[&str] = &["golf-course", "solo-shot"];

/// 分類結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub scene: Scene,
    pub content_type: ContentType,
    /// 0.0〜1.0
    pub confidence: f64,
    /// 既定値（フォールバック）の場合のみ空になりうる
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    pub method: DetectionMethod,
}

impl ClassificationResult {
    pub fn new(
        scene: Scene,
        content_type: ContentType,
        confidence: f64,
        matched_keywords: &[&str],
        method: DetectionMethod,
    ) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence), "confidence out of range: {}", confidence);
        Self {
            scene,
            content_type,
            confidence,
            matched_keywords: matched_keywords.iter().map(|k| k.to_string()).collect(),
            method,
        }
    }

    /// 既定値の判定（S1・happy）
    ///
    /// どの段階でも既定値は否定的なシーン（S3）にしない。
    pub fn positive_default(confidence: f64, method: DetectionMethod) -> Self {
        Self::new(
            Scene::HAPPY_SOLO,
            ContentType::Happy,
            confidence,
            DEFAULT_KEYWORDS,
            method,
        )
    }

    /// 同じ判定内容で段階だけ差し替える
    pub fn with_method(mut self, method: DetectionMethod) -> Self {
        self.method = method;
        self
    }
}

/// 解析プロファイル（Vision解析のエンドポイント選択のみに使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetadataProfile {
    #[default]
    GolfAi,
    General,
}

impl std::str::FromStr for MetadataProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "golf-ai" | "golf" => Ok(MetadataProfile::GolfAi),
            "general" => Ok(MetadataProfile::General),
            _ => Err(format!("Unknown profile: {}. Use golf-ai or general", s)),
        }
    }
}

impl std::fmt::Display for MetadataProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataProfile::GolfAi => write!(f, "golf-ai"),
            MetadataProfile::General => write!(f, "general"),
        }
    }
}

/// 分類リクエスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationInput {
    pub image_url: String,

    /// 不明な場合は空文字
    #[serde(default)]
    pub file_name: String,

    #[serde(default)]
    pub file_path: Option<String>,

    #[serde(default)]
    pub metadata_profile: MetadataProfile,

    #[serde(default)]
    pub existing_alt_text: Option<String>,

    #[serde(default)]
    pub existing_description: Option<String>,
}

impl ClassificationInput {
    pub fn new(image_url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

/// スキャン書類の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    OrderSpec,
    Survey,
    Consent,
    Other,
    #[serde(rename = "none")]
    NotDocument,
}

/// スキャン書類判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetection {
    pub is_document: bool,
    pub document_type: DocumentType,
    /// 0.0 / 0.7 / 0.9 のいずれか
    pub confidence: f64,
}

impl DocumentDetection {
    pub fn not_document() -> Self {
        Self {
            is_document: false,
            document_type: DocumentType::NotDocument,
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_range() {
        assert_eq!(Scene::new(7).unwrap(), Scene::PRODUCT);
        assert!(matches!(Scene::new(8), Err(Error::InvalidScene(8))));
        assert!(Scene::DOCUMENT.is_document());
        assert!(Scene::PROBLEM.is_negative());
        assert_eq!(Scene::GUIDE.to_string(), "S4");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ClassificationResult::new(
            Scene::SOLO_WITH_OTHERS,
            ContentType::Swing,
            0.8,
            &["swing"],
            DetectionMethod::Filename,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scene"], 6);
        assert_eq!(json["contentType"], "swing");
        assert_eq!(json["matchedKeywords"][0], "swing");
        assert_eq!(json["method"], "filename");
    }

    #[test]
    fn test_result_rejects_unknown_scene() {
        let json = r#"{"scene": 9, "contentType": "happy", "confidence": 0.5, "method": "default"}"#;
        assert!(serde_json::from_str::<ClassificationResult>(json).is_err());
    }

    #[test]
    fn test_input_defaults() {
        let json = r#"{"imageUrl": "https://example.com/a.webp", "fileName": "a.webp"}"#;
        let input: ClassificationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.metadata_profile, MetadataProfile::GolfAi);
        assert!(input.file_path.is_none());
        assert!(input.existing_alt_text.is_none());
    }

    #[test]
    fn test_method_tags() {
        assert_eq!(serde_json::to_string(&DetectionMethod::AiAnalysis).unwrap(), "\"ai-analysis\"");
        assert_eq!(serde_json::to_string(&DetectionMethod::StoryScene).unwrap(), "\"story-scene\"");
        assert_eq!(serde_json::to_string(&DocumentType::OrderSpec).unwrap(), "\"order_spec\"");
        assert_eq!(serde_json::to_string(&DocumentType::NotDocument).unwrap(), "\"none\"");
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("general".parse::<MetadataProfile>().unwrap(), MetadataProfile::General);
        assert_eq!("GOLF-AI".parse::<MetadataProfile>().unwrap(), MetadataProfile::GolfAi);
        assert!("vision".parse::<MetadataProfile>().is_err());
    }
}
