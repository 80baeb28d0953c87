use serde::{Deserialize, Serialize};

/// Vision解析APIへのリクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest<'a> {
    pub image_url: &'a str,
    pub title: &'a str,
    pub excerpt: &'a str,
}

/// keywords は文字列か文字列配列のどちらでも返ってくる
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    Text(String),
    List(Vec<String>),
}

/// Vision解析APIのレスポンス（必要なフィールドのみ）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub keywords: Option<Keywords>,

    #[serde(default)]
    pub description: Option<String>,
}

impl AnalyzeResponse {
    /// 分類に使うテキスト（keywords → description → 空文字の順）
    pub fn into_text(self) -> String {
        let keywords = match self.keywords {
            Some(Keywords::Text(text)) => text,
            Some(Keywords::List(list)) => list.join(", "),
            None => String::new(),
        };
        if !keywords.trim().is_empty() {
            return keywords;
        }

        self.description.unwrap_or_default()
    }
}
