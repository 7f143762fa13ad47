//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::{parse_option, Config};

/// 画像をCloudinaryにバッチアップロードし、URLをCSVに記録するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "imgsync")]
#[command(about = "Upload images to Cloudinary in batches and record their URLs", long_about = None)]
pub struct Args {
    /// Dry run mode - list images and the batch plan without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path (defaults to ./imgsync.json when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory containing the images to upload
    #[arg(short, long)]
    pub dir: Option<String>,

    /// CSV report output path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of files uploaded concurrently per batch
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Delay in milliseconds between the start of consecutive batches
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Upload option passed through to Cloudinary (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, String)>,
}

impl Args {
    /// CLIで指定された値で設定を上書きする
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.dir {
            config.image_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.report_path = output.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.upload_batch_size = batch_size;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.batch_delay_ms = delay_ms;
        }
        for (key, value) in &self.options {
            config.upload_options.insert(key.clone(), value.clone());
        }
    }
}
