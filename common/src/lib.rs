//! Photo Scene Common Library
//!
//! CLIとバッチ処理で共有される型と分類ルール（ネットワーク非依存）

pub mod confidence;
pub mod document;
pub mod error;
pub mod filename;
pub mod keywords;
pub mod legacy;
pub mod rules;
pub mod story;
pub mod types;

pub use confidence::ConfidenceConfig;
pub use document::{detect_scanned_document, DocumentPatternMatcher};
pub use error::{Error, Result};
pub use filename::FilenameSceneHeuristic;
pub use legacy::LegacyKeywordClassifier;
pub use rules::{Rule, RuleTable};
pub use story::StorySceneClassifier;
pub use types::{
    ClassificationInput, ClassificationResult, ContentType, DetectionMethod, DocumentDetection,
    DocumentType, MetadataProfile, Scene,
};
