//! 顧客写真のマーケティングシーン自動分類
//!
//! 分類ルール本体は `photo_scene_common`、外部解析の呼び出しと
//! 段階制御・バッチ処理・CLIはこのクレートが持つ。

pub mod analyzer;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod observer;
pub mod orchestrator;
pub mod scanner;

pub use analyzer::{HttpVisionAnalyzer, VisionContentAnalyzer};
pub use batch::{classify_batch, BatchItem};
pub use observer::{ClassificationObserver, Tier, TierEvent, TierOutcome, TracingObserver};
pub use orchestrator::{enforce_no_negative_default, ClassificationOrchestrator};
