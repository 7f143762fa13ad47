//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::adapter::auth::CloudinaryCredentials;
use crate::adapter::cloudinary::client::HttpCloudinaryClient;
use crate::adapter::config::Config;
use crate::adapter::repositories::cloudinary_upload_repository::CloudinaryUploadRepository;
use crate::adapter::repositories::csv_report_repository::CsvReportRepository;
use crate::adapter::repositories::file_image_repository::FileImageRepository;
use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::discover_images::DiscoverImagesUseCase;
use crate::application::use_cases::upload_images::UploadImagesUseCase;
use crate::application::use_cases::write_report::WriteReportUseCase;
use crate::domain::entities::upload_batch::UploadBatch;
use crate::domain::repositories::upload_repository::UploadRepository;

use super::cli::Args;

/// ドライランで表示するバッチ計画の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBatch {
    /// 1始まりのバッチ番号
    pub number: usize,
    /// バッチ内のファイル数
    pub size: usize,
    /// スケジュール開始からの開始時刻
    pub offset: Duration,
}

/// パス列からバッチ計画を作成
pub fn plan_batches(paths: &[PathBuf], config: &UploadConfig) -> Vec<PlannedBatch> {
    UploadBatch::split_by_size(paths.to_vec(), config.batch_size)
        .iter()
        .map(|batch| PlannedBatch {
            number: batch.number(),
            size: batch.len(),
            offset: batch.start_delay(config.batch_delay),
        })
        .collect()
}

/// アップロード完了時に表示する行
pub fn upload_summary(uploaded: usize) -> String {
    if uploaded == 0 {
        "No image files to upload.".to_string()
    } else {
        format!("✓ All {} images uploaded successfully.", uploaded)
    }
}

/// Image Sync Workflow
pub struct ImageSyncWorkflow {
    config: Config,
    discover_use_case: Arc<DiscoverImagesUseCase<FileImageRepository>>,
    report_use_case: Arc<WriteReportUseCase<CsvReportRepository>>,
    upload_repository: Option<Arc<dyn UploadRepository>>,
}

impl ImageSyncWorkflow {
    /// Create a new workflow instance with dependency injection
    ///
    /// The Cloudinary uploader is created from environment credentials on execute
    pub fn new(config: Config) -> Self {
        let image_repo = Arc::new(FileImageRepository::new());
        let report_repo = Arc::new(CsvReportRepository::new());

        Self {
            config,
            discover_use_case: Arc::new(DiscoverImagesUseCase::new(image_repo)),
            report_use_case: Arc::new(WriteReportUseCase::new(report_repo)),
            upload_repository: None,
        }
    }

    /// Use the given uploader instead of the Cloudinary client
    pub fn with_upload_repository(mut self, upload_repository: Arc<dyn UploadRepository>) -> Self {
        self.upload_repository = Some(upload_repository);
        self
    }

    fn upload_repository(&self) -> Result<Arc<dyn UploadRepository>> {
        if let Some(repo) = &self.upload_repository {
            return Ok(repo.clone());
        }

        let credentials = CloudinaryCredentials::from_env()?
            .with_signature_algorithm(self.config.signature_algorithm);
        let client = HttpCloudinaryClient::new(&self.config.api_base_url, &credentials.cloud_name)?;
        println!(
            "✓ Created Cloudinary client for cloud '{}'",
            credentials.cloud_name
        );
        info!(
            "Upload endpoint: {} (signature: {:?})",
            client.endpoint(),
            credentials.signature_algorithm()
        );

        Ok(Arc::new(CloudinaryUploadRepository::new(
            Arc::new(client),
            credentials,
        )))
    }

    /// Execute the upload workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting image uploader...");
        info!("Dry run: {}", args.dry_run);

        let image_dir = self.config.image_dir_path();
        let report_path = self.config.report_path_buf();
        let upload_config = self.config.upload_config();

        println!("✓ Using configuration:");
        println!("  Images: {}", image_dir.display());
        println!("  Report: {}", report_path.display());
        println!(
            "  Batches: {} files every {}ms",
            upload_config.batch_size,
            upload_config.batch_delay.as_millis()
        );
        if !upload_config.options.is_empty() {
            println!("  Options: {:?}", upload_config.options);
        }

        let image_files = self.discover_use_case.execute(&image_dir).await?;
        println!(
            "✓ Found {} image files in {}",
            image_files.len(),
            image_dir.display()
        );

        if args.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            for batch in plan_batches(&image_files, &upload_config) {
                println!(
                    "  Batch {}: {} files, starts at +{}ms",
                    batch.number,
                    batch.size,
                    batch.offset.as_millis()
                );
            }
            return Ok(());
        }

        let records = if image_files.is_empty() {
            Vec::new()
        } else {
            let upload_use_case = UploadImagesUseCase::new(self.upload_repository()?);
            match upload_use_case.execute(image_files, &upload_config).await {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("✗ Failed to upload images: {}", e);
                    return Err(e.into());
                }
            }
        };
        println!("{}", upload_summary(records.len()));

        if let Err(e) = self.report_use_case.execute(&report_path, &records).await {
            eprintln!("✗ Failed to save image details to CSV: {}", e);
            return Err(e).context("Failed to save image details");
        }
        println!("✓ Image details saved to {}", report_path.display());

        Ok(())
    }
}
