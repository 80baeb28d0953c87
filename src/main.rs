use anyhow::Context;
use clap::Parser;
use photo_scene_ai::{batch, cli, config, scanner};
use photo_scene_ai::{ClassificationOrchestrator, HttpVisionAnalyzer};
use photo_scene_common::{ClassificationInput, FilenameSceneHeuristic};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = if matches!(cli.command, Commands::Config { .. }) {
        Config::load_unvalidated()?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Classify { url, file_name, file_path, profile, alt_text, description } => {
            let orchestrator = build_orchestrator(&config)?;
            let input = ClassificationInput {
                image_url: url,
                file_name,
                file_path,
                metadata_profile: profile,
                existing_alt_text: alt_text,
                existing_description: description,
            };

            let result = orchestrator.classify(&input).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Batch { input, output, concurrency } => {
            eprintln!("📸 photo-scene - バッチ分類\n");

            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("入力ファイルを読み込めません: {}", input.display()))?;
            let inputs: Vec<ClassificationInput> = serde_json::from_str(&content)
                .with_context(|| format!("入力JSONが不正です: {}", input.display()))?;
            eprintln!("✔ {}件の入力を読み込み", inputs.len());

            let orchestrator = build_orchestrator(&config)?;
            let concurrency = concurrency.unwrap_or(config.concurrency);
            let items = batch::classify_batch(&orchestrator, &inputs, concurrency).await;
            let json = serde_json::to_string_pretty(&batch::into_results(items))?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("✔ 結果を保存: {}", path.display());
                }
                None => println!("{}", json),
            }

            eprintln!("\n✅ 分類完了");
        }

        Commands::Filename { name, path } => {
            let heuristic = FilenameSceneHeuristic::new(&config.thresholds)?;
            let result = heuristic.classify(&name, path.as_deref());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Scan { folder, recursive } => {
            println!("📁 photo-scene - ファイル名スキャン\n");

            let images = scanner::scan_folder(&folder, recursive)?;
            println!("✔ {}枚の写真を検出\n", images.len());

            let heuristic = FilenameSceneHeuristic::new(&config.thresholds)?;
            for image in &images {
                let result = heuristic.classify(&image.file_name, Some(&image.relative_path));
                println!(
                    "  {}\t{}\t{}\t{:.2}",
                    image.relative_path, result.scene, result.content_type, result.confidence
                );
            }
        }

        Commands::Config { set_analyzer_url, show } => {
            let mut config = config;

            if let Some(url) = set_analyzer_url {
                config.set_analyzer_url(url)?;
                println!("✔ 解析APIのURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  解析API: {}", config.analyzer_url.as_deref().unwrap_or("未設定"));
                println!("  APIキー: {}", if config.api_key.is_some() { "設定済み" } else { "未設定" });
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  再試行回数: {}", config.max_retries);
                println!("  同時実行数: {}", config.concurrency);
                println!("  閾値: {}", serde_json::to_string(&config.thresholds)?);
                if let Err(e) = config.thresholds.validate() {
                    println!("  ⚠ 閾値が不正です: {}", e);
                }
            }
        }
    }

    Ok(())
}

fn build_orchestrator(config: &Config) -> anyhow::Result<ClassificationOrchestrator<HttpVisionAnalyzer>> {
    let analyzer = HttpVisionAnalyzer::from_config(config)?;
    let orchestrator = ClassificationOrchestrator::new(analyzer, config.thresholds.clone())?
        .with_timeout(config.timeout())
        .with_retries(config.max_retries);
    Ok(orchestrator)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "photo_scene_ai=debug"
    } else {
        "photo_scene_ai=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
