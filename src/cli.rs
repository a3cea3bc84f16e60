use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "breach-report")]
#[command(about = "プロセス逸脱解析・レポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// イベントログCSVを解析サーバーに送り、レポートを出力
    Analyze {
        /// イベントログCSV（未指定なら「ファイル未選択」として扱う）
        csv: Option<PathBuf>,

        /// 出力ディレクトリ（デフォルト: カレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (html/csv/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// ダッシュボード画像付きで解析
        #[arg(long)]
        dashboard: bool,

        /// 接続先ベースURL
        #[arg(long)]
        url: Option<String>,

        /// CSVの値を正しくエスケープする
        #[arg(long)]
        escape_csv: bool,

        /// 受信した解析結果をJSONで保存
        #[arg(long)]
        save_json: Option<PathBuf>,
    },

    /// 保存済みの解析結果JSONからレポートを出力
    Export {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ（デフォルト: 入力ファイルと同じ場所）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (html/csv/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// CSVの値を正しくエスケープする
        #[arg(long)]
        escape_csv: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 接続先ベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// ダッシュボード解析を既定にする
        #[arg(long)]
        dashboard: Option<bool>,

        /// CSVエスケープを既定にする
        #[arg(long)]
        escape_csv: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(ExportFormat::Html),
            "csv" => Ok(ExportFormat::Csv),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use html, csv, or both", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parse() {
        assert_eq!("HTML".parse::<ExportFormat>(), Ok(ExportFormat::Html));
        assert_eq!("csv".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("both".parse::<ExportFormat>(), Ok(ExportFormat::Both));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_analyze_without_csv_parses() {
        let cli = Cli::try_parse_from(["breach-report", "analyze"]).expect("解析失敗");
        match cli.command {
            Commands::Analyze { csv, format, .. } => {
                assert!(csv.is_none());
                assert_eq!(format, ExportFormat::Both);
            }
            _ => panic!("想定外のコマンド"),
        }
    }

    #[test]
    fn test_config_bool_flags() {
        let cli = Cli::try_parse_from(["breach-report", "config", "--dashboard", "true", "--show"])
            .expect("解析失敗");
        match cli.command {
            Commands::Config { dashboard, escape_csv, show, .. } => {
                assert_eq!(dashboard, Some(true));
                assert_eq!(escape_csv, None);
                assert!(show);
            }
            _ => panic!("想定外のコマンド"),
        }
    }
}
