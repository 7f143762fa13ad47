//! imgsync - Batch Image Uploader
//!
//! 画像をCloudinaryにバッチアップロードし、URLをCSVに記録

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use log::error;
use std::process::ExitCode;

use imgsync::adapter::config::Config;
use imgsync::driver::exit_code::EXIT_SUCCESS;
use imgsync::driver::{exit_code_for, Args, ImageSyncWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    // .env から CLOUD_NAME / API_KEY / API_SECRET を読み込む（なくてもよい）
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            error!("imgsync failed: {:?}", err);
            eprintln!("✗ {:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(args: Args) -> Result<()> {
    // Load configuration (file, then CLI overrides)
    let mut config = Config::load_or_default(args.config.as_deref())?;
    args.apply_to(&mut config);
    config.validate()?;

    // Create workflow with injected dependencies
    let workflow = ImageSyncWorkflow::new(config);

    workflow.execute(args).await
}
