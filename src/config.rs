use crate::error::{PhotoSceneError, Result};
use photo_scene_common::ConfidenceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const ANALYZER_URL_ENV: &str = "PHOTO_SCENE_ANALYZER_URL";
const API_KEY_ENV: &str = "PHOTO_SCENE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vision解析APIのベースURL（例: https://example.com）
    pub analyzer_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    /// 解析API失敗時の再試行回数（0 = 1回のみ）
    pub max_retries: u32,
    /// バッチ処理の同時実行数
    pub concurrency: usize,
    pub thresholds: ConfidenceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzer_url: None,
            api_key: None,
            timeout_seconds: 60,
            max_retries: 0,
            concurrency: 4,
            thresholds: ConfidenceConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = Self::load_unvalidated_from(config_path)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// 閾値を検証せずに読み込む（`config` サブコマンドで壊れた設定を直すため）
    pub fn load_unvalidated() -> Result<Self> {
        Self::load_unvalidated_from(&Self::config_path()?)
    }

    pub fn load_unvalidated_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        Ok(serde_json::from_str::<Config>(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoSceneError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-scene").join("config.json"))
    }

    pub fn get_analyzer_url(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(url) = std::env::var(ANALYZER_URL_ENV) {
            if !url.trim().is_empty() {
                return Ok(url);
            }
        }

        self.analyzer_url.clone().ok_or(PhotoSceneError::MissingAnalyzerUrl)
    }

    pub fn get_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn set_analyzer_url(&mut self, url: String) -> Result<()> {
        self.analyzer_url = Some(url);
        self.save()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
