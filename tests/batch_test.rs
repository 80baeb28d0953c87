//! バッチ分類の統合テスト

mod support;

use photo_scene_ai::batch::into_results;
use photo_scene_ai::{classify_batch, ClassificationOrchestrator};
use photo_scene_common::{ClassificationInput, ConfidenceConfig, ContentType, DetectionMethod, Scene};
use std::sync::Arc;
use std::time::Duration;
use support::MockAnalyzer;

/// 完了順が入れ替わっても結果は入力順に並ぶ
#[tokio::test]
async fn test_batch_preserves_input_order() {
    let analyzer = Arc::new(
        MockAnalyzer::default()
            .respond("https://cdn.example.com/slow.jpg", Duration::from_millis(80), Some("골프장"))
            .respond("https://cdn.example.com/fast.jpg", Duration::ZERO, Some("a simulator bay"))
            .respond("https://cdn.example.com/broken.jpg", Duration::from_millis(10), None),
    );
    let orch = ClassificationOrchestrator::new(Arc::clone(&analyzer), ConfidenceConfig::default()).unwrap();

    let inputs = vec![
        ClassificationInput::new("https://cdn.example.com/slow.jpg", "IMG_0001.jpg"),
        ClassificationInput::new("https://cdn.example.com/doc.jpg", "seukaen-consent.jpg"),
        ClassificationInput::new("https://cdn.example.com/fast.jpg", "IMG_0002.jpg"),
        ClassificationInput::new("https://cdn.example.com/broken.jpg", "swing_01.jpg"),
    ];

    let items = classify_batch(&orch, &inputs, 4).await;

    let indexes: Vec<usize> = items.iter().map(|item| item.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3]);

    let results = into_results(items);
    assert_eq!(results[0].method, DetectionMethod::StoryScene);
    assert_eq!(results[1].scene, Scene::DOCUMENT);
    assert_eq!(results[2].content_type, ContentType::Fitting);
    // 1件の失敗は他の画像に影響しない
    assert_eq!(results[3].content_type, ContentType::Swing);
    assert_eq!(results[3].method, DetectionMethod::Filename);

    // 書類は解析APIを呼ばない
    assert_eq!(analyzer.calls(), 3);
}

/// 同時実行数0でも1として処理する
#[tokio::test]
async fn test_batch_zero_concurrency() {
    let analyzer = Arc::new(MockAnalyzer::returning("골프장"));
    let orch = ClassificationOrchestrator::new(Arc::clone(&analyzer), ConfidenceConfig::default()).unwrap();

    let inputs = vec![
        ClassificationInput::new("https://cdn.example.com/a.jpg", "a.jpg"),
        ClassificationInput::new("https://cdn.example.com/b.jpg", "b.jpg"),
    ];
    let items = classify_batch(&orch, &inputs, 0).await;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item.result.scene == Scene::HAPPY_SOLO));
}

#[tokio::test]
async fn test_batch_empty() {
    let analyzer = Arc::new(MockAnalyzer::failing());
    let orch = ClassificationOrchestrator::new(analyzer, ConfidenceConfig::default()).unwrap();

    let items = classify_batch(&orch, &[], 4).await;
    assert!(items.is_empty());
}
