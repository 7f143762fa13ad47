//! # Write Report Use Case
//!
//! アップロード結果レポートの書き込みユースケース

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::image_record::ImageRecord;
use crate::domain::errors::SyncError;
use crate::domain::repositories::report_repository::ReportRepository;

/// レポート書き込みユースケース
pub struct WriteReportUseCase<R: ReportRepository + ?Sized> {
    report_repository: Arc<R>,
}

impl<R: ReportRepository + ?Sized> WriteReportUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(report_repository: Arc<R>) -> Self {
        Self { report_repository }
    }

    /// レコードをレポートに書き込む
    ///
    /// レコードが0件でもヘッダーのみのレポートを書き込む
    pub async fn execute(&self, path: &Path, records: &[ImageRecord]) -> Result<(), SyncError> {
        self.report_repository.write_report(path, records).await
    }
}
