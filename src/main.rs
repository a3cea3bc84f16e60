use clap::Parser;
use breach_report::{cli, client, config, error, export, logging, terminal};
use breach_report_common::{AnalysisResult, ResultPipeline};
use cli::{Cli, Commands};
use client::{CsvUpload, HttpClient};
use config::Config;
use error::Result;
use std::path::{Path, PathBuf};
use terminal::TerminalView;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { csv, output, format, dashboard, url, escape_csv, save_json } => {
            println!("📊 breach-report - プロセス逸脱解析\n");

            let analyzer = config.analyzer(dashboard, url.as_deref());
            let client = HttpClient::new(&analyzer);
            let mut pipeline = ResultPipeline::new(TerminalView::new())
                .with_quoting(config.quoting(escape_csv));

            // 1. アップロード・解析
            println!("[1/2] 解析サーバーに送信中... ({})", client.url());
            let upload = csv.as_deref().map(CsvUpload::read).transpose()?;
            pipeline.submit(&client, upload).await?;

            if let Some(path) = save_json {
                let json = serde_json::to_string_pretty(pipeline.result())?;
                std::fs::write(&path, json)?;
                println!("✔ 解析結果を保存: {}", path.display());
            }

            // 2. レポート出力
            println!("\n[2/2] レポートを出力中...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let written = export::export_results(
                pipeline.result(),
                &format,
                &output_dir,
                config.quoting(escape_csv),
            )?;
            print_written(&written);

            println!("\n✅ 完了");
        }

        Commands::Export { input, output, format, escape_csv } => {
            println!("📄 breach-report - エクスポート\n");

            if !input.is_file() {
                return Err(error::BreachReportError::FileNotFound(input.display().to_string()));
            }
            let content = std::fs::read_to_string(&input)?;
            let result: AnalysisResult = serde_json::from_str(&content)?;
            println!("✔ 逸脱レコード: {}件", result.len());

            let output_dir = output.unwrap_or_else(|| {
                input.parent().unwrap_or(Path::new(".")).to_path_buf()
            });
            let written = export::export_results(
                &result,
                &format,
                &output_dir,
                config.quoting(escape_csv),
            )?;
            print_written(&written);

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_base_url, dashboard, escape_csv, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.base_url = url;
                changed = true;
            }
            if let Some(value) = dashboard {
                config.use_dashboard = value;
                changed = true;
            }
            if let Some(value) = escape_csv {
                config.escape_csv = value;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  接続先: {}", config.base_url());
                println!("  ダッシュボード解析: {}", if config.use_dashboard { "有効" } else { "無効" });
                println!("  CSVエスケープ: {}", if config.escape_csv { "有効" } else { "無効" });
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn print_written(paths: &[PathBuf]) {
    for path in paths {
        println!("✔ 出力: {}", path.display());
    }
}
