//! バッチ分類
//!
//! 画像ごとに1タスクを発行し、同時実行数を制限して処理する。
//! 完了順ではなく入力のインデックスで結果を並べ直す。

use crate::analyzer::VisionContentAnalyzer;
use crate::orchestrator::ClassificationOrchestrator;
use futures::stream::{self, StreamExt};
use photo_scene_common::{ClassificationInput, ClassificationResult};

/// 入力順の分類結果
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub index: usize,
    pub result: ClassificationResult,
}

pub async fn classify_batch<A: VisionContentAnalyzer>(
    orchestrator: &ClassificationOrchestrator<A>,
    inputs: &[ClassificationInput],
    concurrency: usize,
) -> Vec<BatchItem> {
    let total = inputs.len();

    let mut items: Vec<BatchItem> = stream::iter(inputs.iter().enumerate())
        .map(|(index, input)| async move {
            let result = orchestrator.classify(input).await;
            tracing::debug!(
                index,
                file = %input.file_name,
                scene = result.scene.number(),
                method = %result.method,
                "Image classified"
            );
            BatchItem { index, result }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    items.sort_by_key(|item| item.index);
    tracing::info!(total, "Batch classification completed");
    items
}

/// 結果だけを入力順に取り出す
pub fn into_results(items: Vec<BatchItem>) -> Vec<ClassificationResult> {
    items.into_iter().map(|item| item.result).collect()
}
