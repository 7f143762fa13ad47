//! # Image Repository Trait
//!
//! アップロード対象の画像ファイルの発見を抽象化

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::errors::SyncError;

/// 画像リポジトリ
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// 画像ファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `image_dir` - 画像ディレクトリのパス
    ///
    /// # Returns
    ///
    /// 拡張子が許可リストに含まれるファイルのパス（ファイル名順、サブディレクトリは除外）
    ///
    /// # Errors
    ///
    /// ディレクトリが存在しない、または読み取れない場合に `SyncError::Filesystem` を返す
    async fn discover_images(&self, image_dir: &Path) -> Result<Vec<PathBuf>, SyncError>;
}
