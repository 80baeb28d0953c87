use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoSceneError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("解析APIのURLが設定されていません。`photo-scene config --set-analyzer-url URL` で設定してください")]
    MissingAnalyzerUrl,

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("解析API呼び出しエラー: {0}")]
    AnalyzerRequest(String),

    #[error("解析APIがエラーを返しました (status {status}): {body}")]
    AnalyzerStatus { status: u16, body: String },

    #[error("解析APIレスポンスのパースに失敗: {0}")]
    AnalyzerParse(String),

    #[error("解析APIがタイムアウトしました ({0}ms)")]
    AnalyzerTimeout(u64),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_scene_common::Error),
}

impl PhotoSceneError {
    /// 解析API由来のエラーか（再試行の対象）
    pub fn is_analyzer_failure(&self) -> bool {
        matches!(
            self,
            PhotoSceneError::AnalyzerRequest(_)
                | PhotoSceneError::AnalyzerStatus { .. }
                | PhotoSceneError::AnalyzerParse(_)
                | PhotoSceneError::AnalyzerTimeout(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhotoSceneError>;
