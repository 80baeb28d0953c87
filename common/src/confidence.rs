//! 信頼度と段階ごとの採用閾値
//!
//! 全段階の分類器とオーケストレータが同じ設定を参照する。
//! 閾値の調整はここの1行を変えるだけで済む。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 信頼度設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfidenceConfig {
    // --- 書類判定 ---
    /// 書類の種別まで特定できた場合
    pub document_match: f64,
    /// スキャン印はあるが種別不明の場合
    pub document_other: f64,

    // --- ファイル名ヒューリスティック ---
    pub filename_match: f64,

    // --- ストーリーシーン分類 ---
    /// 骨格 + 表情まで揃った判定
    pub story_strong: f64,
    /// グループ・ガイド・フィッティング・製品
    pub story_secondary: f64,
    /// ゴルフ場のみ（感情未確認）
    pub story_golf_only: f64,
    /// どこかにゴルフ関連語がある場合の既定値
    pub story_golf_fallback: f64,

    // --- 旧キーワード分類 ---
    pub legacy_document: f64,
    pub legacy_match: f64,
    /// スイング・サイン
    pub legacy_motion: f64,
    pub legacy_default: f64,

    /// 何の手がかりもない場合の既定値
    pub no_signal: f64,

    // --- 段階ごとの採用閾値 ---
    pub filename_accept: f64,
    pub story_accept: f64,
    pub legacy_accept: f64,
    pub filename_fallback_accept: f64,
    pub story_fallback_accept: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            document_match: 0.9,
            document_other: 0.7,
            filename_match: 0.8,
            story_strong: 0.9,
            story_secondary: 0.85,
            story_golf_only: 0.7,
            story_golf_fallback: 0.6,
            legacy_document: 0.9,
            legacy_match: 0.85,
            legacy_motion: 0.8,
            legacy_default: 0.5,
            no_signal: 0.4,
            filename_accept: 0.9,
            story_accept: 0.7,
            legacy_accept: 0.8,
            filename_fallback_accept: 0.7,
            story_fallback_accept: 0.5,
        }
    }
}

impl ConfidenceConfig {
    /// すべての値が 0.0〜1.0 に収まっているか検証
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(Error::Config(format!(
                    "{} は 0.0〜1.0 の範囲で指定してください（値: {}）",
                    name, value
                )));
            }
        }
        Ok(())
    }

    fn entries(&self) -> [(&'static str, f64); 17] {
        [
            ("documentMatch", self.document_match),
            ("documentOther", self.document_other),
            ("filenameMatch", self.filename_match),
            ("storyStrong", self.story_strong),
            ("storySecondary", self.story_secondary),
            ("storyGolfOnly", self.story_golf_only),
            ("storyGolfFallback", self.story_golf_fallback),
            ("legacyDocument", self.legacy_document),
            ("legacyMatch", self.legacy_match),
            ("legacyMotion", self.legacy_motion),
            ("legacyDefault", self.legacy_default),
            ("noSignal", self.no_signal),
            ("filenameAccept", self.filename_accept),
            ("storyAccept", self.story_accept),
            ("legacyAccept", self.legacy_accept),
            ("filenameFallbackAccept", self.filename_fallback_accept),
            ("storyFallbackAccept", self.story_fallback_accept),
        ]
    }
}
