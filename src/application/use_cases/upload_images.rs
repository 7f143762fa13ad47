//! # Upload Images Use Case
//!
//! バッチスケジューラ
//!
//! 画像パス列を固定サイズのバッチに分割し、バッチ番号に比例した遅延の後に
//! バッチ内のアップロードを同時に開始する。全バッチが確定するまで待ち、
//! 結果をバッチ順・投入順に並べ直して返す。
//!
//! - バッチ `i` の開始時刻はスケジュール開始から `batch_delay × i`
//!   （前のバッチの完了は待たないため、遅いバッチとは実行が重なりうる）
//! - バッチ内の1件でも失敗すればそのバッチは失敗する
//! - 失敗したバッチがあっても他のバッチはキャンセルされない
//! - すべて単一タスク上の協調的並行処理（スレッドやタスクは生成しない）

use futures::future::join_all;
use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::{sleep_until, Instant};

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::image_record::ImageRecord;
use crate::domain::entities::upload_batch::UploadBatch;
use crate::domain::errors::SyncError;
use crate::domain::repositories::upload_repository::UploadRepository;

/// 画像アップロードユースケース
pub struct UploadImagesUseCase<U: UploadRepository + ?Sized> {
    upload_repository: Arc<U>,
}

impl<U: UploadRepository + ?Sized> UploadImagesUseCase<U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    pub fn new(upload_repository: Arc<U>) -> Self {
        Self { upload_repository }
    }

    /// 画像をバッチ単位でアップロードし、結果を集約する
    ///
    /// # Arguments
    ///
    /// * `paths` - アップロードする画像のパス（この順序が結果の順序になる）
    /// * `config` - バッチサイズ、バッチ遅延、アップロードオプション
    ///
    /// # Returns
    ///
    /// 全ファイルのレコード（バッチ順、バッチ内は投入順）
    ///
    /// # Errors
    ///
    /// いずれかのバッチが失敗した場合、全バッチの確定を待ってから
    /// 最小のバッチ番号の失敗を `SyncError::Aggregation` として返す
    pub async fn execute(
        &self,
        paths: Vec<PathBuf>,
        config: &UploadConfig,
    ) -> Result<Vec<ImageRecord>, SyncError> {
        if paths.is_empty() {
            return Ok(Vec::new());
        }

        let total_files = paths.len();
        let batches = UploadBatch::split_by_size(paths, config.batch_size);
        info!(
            "Scheduling {} files in {} batches ({}ms apart)",
            total_files,
            batches.len(),
            config.batch_delay.as_millis()
        );

        let start = Instant::now();
        let results = join_all(
            batches
                .iter()
                .map(|batch| self.upload_batch(batch, config, start)),
        )
        .await;

        let mut records = Vec::with_capacity(total_files);
        let mut first_failure = None;

        for result in results {
            match result {
                Ok(batch_records) => records.extend(batch_records),
                Err(err) => {
                    if first_failure.is_none() {
                        first_failure = Some(err);
                    }
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(records),
        }
    }

    /// 1バッチを開始時刻まで待ってからアップロードする
    async fn upload_batch(
        &self,
        batch: &UploadBatch,
        config: &UploadConfig,
        start: Instant,
    ) -> Result<Vec<ImageRecord>, SyncError> {
        sleep_until(start + batch.start_delay(config.batch_delay)).await;

        debug!(
            "Starting batch {} ({} files)",
            batch.number(),
            batch.len()
        );

        let outcomes = join_all(
            batch
                .paths()
                .iter()
                .map(|path| self.upload_repository.upload(path, &config.options)),
        )
        .await;

        match outcomes.into_iter().collect::<Result<Vec<_>, _>>() {
            Ok(records) => {
                println!("✓ Batch {} uploaded successfully.", batch.number());
                Ok(records)
            }
            Err(source) => {
                eprintln!("✗ Failed to upload batch {}: {}", batch.number(), source);
                error!("Batch {} failed: {:?}", batch.number(), source);
                Err(SyncError::Aggregation {
                    batch: batch.index(),
                    source,
                })
            }
        }
    }
}
