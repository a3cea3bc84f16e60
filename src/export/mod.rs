use crate::cli::ExportFormat;
use crate::error::Result;
use crate::report::{render_report, REPORT_FILE_NAME};
use breach_report_common::{export_csv, AnalysisResult, CsvQuoting, Error};
use std::path::{Path, PathBuf};

/// CSVを書き出す。0件なら何も書かずにエラー
pub fn write_csv(result: &AnalysisResult, output_dir: &Path, quoting: CsvQuoting) -> Result<PathBuf> {
    let export = export_csv(&result.results, quoting)?;
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(export.file_name);
    std::fs::write(&path, export.content)?;
    Ok(path)
}

pub fn write_html(result: &AnalysisResult, output_dir: &Path, generated_at: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, render_report(result, generated_at))?;
    Ok(path)
}

/// 指定形式で書き出し、作成したファイルを返す
///
/// both のときは0件でもHTMLだけは出力する。
pub fn export_results(
    result: &AnalysisResult,
    format: &ExportFormat,
    output_dir: &Path,
    quoting: CsvQuoting,
) -> Result<Vec<PathBuf>> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let mut written = Vec::new();

    match format {
        ExportFormat::Html => {
            written.push(write_html(result, output_dir, &generated_at)?);
        }
        ExportFormat::Csv => {
            written.push(write_csv(result, output_dir, quoting)?);
        }
        ExportFormat::Both => {
            written.push(write_html(result, output_dir, &generated_at)?);
            match write_csv(result, output_dir, quoting) {
                Ok(path) => written.push(path),
                Err(crate::error::BreachReportError::Common(Error::NothingToExport)) => {
                    tracing::warn!("no breach records; skipping CSV");
                }
                Err(e) => return Err(e),
            }
        }
    }

    for path in &written {
        tracing::info!(path = %path.display(), "written");
    }
    Ok(written)
}
