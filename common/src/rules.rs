//! 宣言的なルールテーブル
//!
//! 各分類器は `(条件, シーン, 内容タイプ, 信頼度)` の順序付きリストを持ち、
//! 最初に一致したルールが採用される。ルールの追加・削除で制御フローは変わらない。

use crate::error::{Error, Result};
use crate::types::{ClassificationResult, ContentType, DetectionMethod, Scene};
use std::collections::HashSet;

/// 小文字化済みテキストに対する条件
pub type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// 分類ルール1件
pub struct Rule {
    pub name: &'static str,
    pub scene: Scene,
    pub content_type: ContentType,
    pub confidence: f64,
    /// 一致時に結果へ載せるタグ
    pub keywords: &'static [&'static str],
    predicate: Predicate,
}

impl Rule {
    pub fn new<F>(
        name: &'static str,
        scene: Scene,
        content_type: ContentType,
        confidence: f64,
        keywords: &'static [&'static str],
        predicate: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            scene,
            content_type,
            confidence,
            keywords,
            predicate: Box::new(predicate),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        (self.predicate)(text)
    }

    pub fn to_result(&self, method: DetectionMethod) -> ClassificationResult {
        ClassificationResult::new(self.scene, self.content_type, self.confidence, self.keywords, method)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidRule {
            rule: self.name.to_string(),
            reason: reason.to_string(),
        };

        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(invalid("confidence must be within 0.0..=1.0"));
        }
        if self.scene.is_document() != (self.content_type == ContentType::Document) {
            return Err(invalid("scene 0 is reserved for documents"));
        }
        if self.keywords.is_empty() {
            return Err(invalid("matched keyword list is empty"));
        }
        // 空テキストに一致する条件は無条件ルールとみなす
        if self.matches("") {
            return Err(invalid("predicate matches unconditionally"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("scene", &self.scene)
            .field("content_type", &self.content_type)
            .field("confidence", &self.confidence)
            .finish()
    }
}

/// 先勝ち評価のルールテーブル
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// ルールを検証してテーブルを構築
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let mut names = HashSet::new();
        for rule in &rules {
            rule.validate()?;
            if !names.insert(rule.name) {
                return Err(Error::InvalidRule {
                    rule: rule.name.to_string(),
                    reason: "duplicate rule name".to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// 最初に一致したルール
    pub fn first_match(&self, text: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(text))
    }

    pub fn classify(&self, text: &str, method: DetectionMethod) -> Option<ClassificationResult> {
        self.first_match(text).map(|rule| rule.to_result(method))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// テキストにキーワードのいずれかが含まれるか
///
/// `text` は呼び出し側で小文字化しておくこと。
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
