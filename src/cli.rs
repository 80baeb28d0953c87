use clap::{Parser, Subcommand};
use photo_scene_common::MetadataProfile;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-scene")]
#[command(about = "顧客写真のマーケティングシーン自動分類ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1枚の画像を分類（Vision解析あり）
    Classify {
        /// 画像URL
        #[arg(long, required = true)]
        url: String,

        /// ファイル名（不明なら空）
        #[arg(long, default_value = "")]
        file_name: String,

        /// ストレージ上のパス
        #[arg(long)]
        file_path: Option<String>,

        /// 解析プロファイル (golf-ai/general)
        #[arg(long, default_value = "golf-ai")]
        profile: MetadataProfile,

        /// 既存の alt テキスト
        #[arg(long)]
        alt_text: Option<String>,

        /// 既存の説明文
        #[arg(long)]
        description: Option<String>,
    },

    /// JSON配列の入力をまとめて分類
    Batch {
        /// 入力JSONファイル（ClassificationInputの配列）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 同時実行数（省略時は設定値）
        #[arg(short, long)]
        concurrency: Option<usize>,
    },

    /// ファイル名・パスだけで分類（ネットワークなし）
    Filename {
        /// ファイル名
        #[arg(required = true)]
        name: String,

        /// ストレージ上のパス
        #[arg(long)]
        path: Option<String>,
    },

    /// フォルダ内の画像をファイル名・パスだけで分類
    Scan {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析APIのベースURLを設定
        #[arg(long)]
        set_analyzer_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
