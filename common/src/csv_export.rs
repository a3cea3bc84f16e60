//! CSV出力
//!
//! 既定（Verbatim）は全値をダブルクォートで囲むだけでエスケープしない。
//! 値に `"` や `,` を含むと列がずれるので、Escaped を選ぶと csv クレートで RFC 4180 準拠に書く。

use csv::{QuoteStyle, Terminator, WriterBuilder};
use crate::columns::Field;
use crate::error::{Error, Result};
use crate::types::BreachRecord;

pub const CSV_FILE_NAME: &str = "breach_report.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// クォート方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvQuoting {
    /// 無条件クォート・エスケープなし
    #[default]
    Verbatim,
    /// RFC 4180（`"` を二重化、ヘッダーもクォート）
    Escaped,
}

/// ダウンロード用の成果物
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

/// ヘッダー行の列名
pub fn csv_header() -> Vec<&'static str> {
    Field::ALL.iter().map(|f| f.label()).collect()
}

fn record_values(record: &BreachRecord) -> Vec<String> {
    Field::ALL.iter().map(|f| f.value(record)).collect()
}

/// 解析結果をCSVに書き出す
///
/// 0件なら `NothingToExport`。同じ入力からは常に同じバイト列を返す。
pub fn export_csv(records: &[BreachRecord], quoting: CsvQuoting) -> Result<CsvExport> {
    if records.is_empty() {
        return Err(Error::NothingToExport);
    }

    let content = match quoting {
        CsvQuoting::Verbatim => write_verbatim(records),
        CsvQuoting::Escaped => write_escaped(records)?,
    };

    tracing::debug!(rows = records.len(), bytes = content.len(), "csv export built");

    Ok(CsvExport {
        file_name: CSV_FILE_NAME,
        mime_type: CSV_MIME_TYPE,
        content,
    })
}

fn write_verbatim(records: &[BreachRecord]) -> String {
    let mut content = csv_header().join(",");
    content.push('\n');
    for record in records {
        let line = record_values(record)
            .iter()
            .map(|v| format!("\"{}\"", v))
            .collect::<Vec<_>>()
            .join(",");
        content.push_str(&line);
        content.push('\n');
    }
    content
}

fn write_escaped(records: &[BreachRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(csv_header())
        .map_err(|e| Error::Csv(e.to_string()))?;
    for record in records {
        writer
            .write_record(record_values(record))
            .map_err(|e| Error::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<BreachRecord> {
        vec![
            BreachRecord {
                order_id: Some("1001".to_string()),
                item_id: Some("IT-1".to_string()),
                breach_type: Some("None".to_string()),
                planned_steps_count: Some(12),
                time_planned_minutes: Some(60.0),
                time_actual_minutes: Some(72.5),
                total_yield: Some(80.0),
                total_scrap: Some(20.0),
                ..Default::default()
            },
            BreachRecord {
                order_id: Some("1002".to_string()),
                time_planned_minutes: Some(f64::NAN),
                ..Default::default()
            },
        ]
    }

    fn lines(content: &str) -> Vec<&str> {
        content.lines().collect()
    }

    #[test]
    fn test_export_empty_fails() {
        let err = export_csv(&[], CsvQuoting::Verbatim).unwrap_err();
        assert!(matches!(err, Error::NothingToExport));
    }

    #[test]
    fn test_export_artifact_metadata() {
        let export = export_csv(&sample_records(), CsvQuoting::Verbatim).expect("CSV出力失敗");
        assert_eq!(export.file_name, "breach_report.csv");
        assert_eq!(export.mime_type, "text/csv");
    }

    #[test]
    fn test_header_lists_every_field_once() {
        let export = export_csv(&sample_records(), CsvQuoting::Verbatim).expect("CSV出力失敗");
        let header: Vec<&str> = lines(&export.content)[0].split(',').collect();
        assert_eq!(header.len(), Field::ALL.len());
        for field in Field::ALL {
            assert_eq!(header.iter().filter(|h| **h == field.label()).count(), 1);
        }
    }

    #[test]
    fn test_rows_are_quoted_in_header_order() {
        let export = export_csv(&sample_records(), CsvQuoting::Verbatim).expect("CSV出力失敗");
        let rows = lines(&export.content);
        assert_eq!(rows.len(), 3);

        let first: Vec<&str> = rows[1].split(',').collect();
        assert_eq!(first.len(), Field::ALL.len());
        assert!(first.iter().all(|v| v.starts_with('"') && v.ends_with('"')));
        assert_eq!(first[0], "\"1001\"");
        assert_eq!(first[2], "\"IT-1\"");

        let position = |field: Field| Field::ALL.iter().position(|f| *f == field).unwrap();
        assert_eq!(first[position(Field::TimeDeviationMinutes)], "\"12.50\"");
        assert_eq!(first[position(Field::QuantityDeviationPercent)], "\"20.00\"");
    }

    #[test]
    fn test_nan_exports_as_empty() {
        let export = export_csv(&sample_records(), CsvQuoting::Verbatim).expect("CSV出力失敗");
        assert!(!export.content.contains("NaN"));
        assert!(!export.content.contains("undefined"));

        let second: Vec<&str> = lines(&export.content)[2].split(',').collect();
        let position = Field::ALL
            .iter()
            .position(|f| *f == Field::TimePlannedMinutes)
            .unwrap();
        assert_eq!(second[position], "\"\"");
    }

    #[test]
    fn test_export_is_idempotent() {
        let records = sample_records();
        let first = export_csv(&records, CsvQuoting::Verbatim).expect("CSV出力失敗");
        let second = export_csv(&records, CsvQuoting::Verbatim).expect("CSV出力失敗");
        assert_eq!(first.content.as_bytes(), second.content.as_bytes());
    }

    #[test]
    fn test_line_endings_are_lf() {
        let export = export_csv(&sample_records(), CsvQuoting::Verbatim).expect("CSV出力失敗");
        assert!(!export.content.contains('\r'));
        assert!(export.content.ends_with('\n'));
    }

    #[test]
    fn test_verbatim_does_not_escape_quotes() {
        let records = vec![BreachRecord {
            details: Some("say \"hi\", then".to_string()),
            ..Default::default()
        }];
        let export = export_csv(&records, CsvQuoting::Verbatim).expect("CSV出力失敗");
        assert!(export.content.contains("\"say \"hi\", then\""));
    }

    #[test]
    fn test_escaped_round_trips_through_reader() {
        let records = vec![BreachRecord {
            order_id: Some("A,1".to_string()),
            details: Some("say \"hi\"".to_string()),
            ..Default::default()
        }];
        let export = export_csv(&records, CsvQuoting::Escaped).expect("CSV出力失敗");
        assert!(!export.content.contains('\r'));

        let mut reader = csv::Reader::from_reader(export.content.as_bytes());
        let headers = reader.headers().expect("ヘッダー読込失敗").clone();
        assert_eq!(headers.len(), Field::ALL.len());

        let row = reader
            .records()
            .next()
            .expect("行がない")
            .expect("行読込失敗");
        assert_eq!(&row[0], "A,1");
        assert_eq!(&row[Field::ALL.len() - 1], "say \"hi\"");
    }
}
