//! # Report Repository Trait
//!
//! アップロード結果レポートの書き込みを抽象化

use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::image_record::ImageRecord;
use crate::domain::errors::SyncError;

/// レポートリポジトリ
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// レコードをレポートに書き込む（既存ファイルは上書き）
    ///
    /// # Errors
    ///
    /// 書き込めない場合に `SyncError::Filesystem` を返す
    async fn write_report(&self, path: &Path, records: &[ImageRecord]) -> Result<(), SyncError>;
}
