//! CSV Report Repository Implementation
//!
//! ReportRepositoryのCSV実装

use async_trait::async_trait;
use log::info;
use serde::Serialize;
use std::io;
use std::path::Path;

use crate::domain::entities::image_record::ImageRecord;
use crate::domain::errors::SyncError;
use crate::domain::repositories::report_repository::ReportRepository;

/// レポートのヘッダー行
pub const REPORT_HEADER: [&str; 2] = ["Filename", "URL"];

/// CSVファイルベースのレポートリポジトリ
pub struct CsvReportRepository;

/// CSVの1行（出力用の内部表現）
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    filename: &'a str,
    url: &'a str,
}

impl<'a> From<&'a ImageRecord> for ReportRow<'a> {
    fn from(record: &'a ImageRecord) -> Self {
        Self {
            filename: &record.filename,
            url: &record.url,
        }
    }
}

impl CsvReportRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルにレポートを書き込む（同期処理）
    fn write_sync(path: &Path, records: &[ImageRecord]) -> io::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(REPORT_HEADER)?;
        for record in records {
            writer.serialize(ReportRow::from(record))?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {}", records.len(), path.display());

        Ok(())
    }
}

#[async_trait]
impl ReportRepository for CsvReportRepository {
    async fn write_report(&self, path: &Path, records: &[ImageRecord]) -> Result<(), SyncError> {
        let target = path.to_path_buf();
        let records = records.to_vec();
        tokio::task::spawn_blocking(move || Self::write_sync(&target, &records))
            .await
            .map_err(io::Error::other)
            .and_then(|result| result)
            .map_err(|source| SyncError::writing(path, source))
    }
}

impl Default for CsvReportRepository {
    fn default() -> Self {
        Self::new()
    }
}
