//! File Image Repository Implementation
//!
//! ImageRepositoryのファイルシステム実装

use async_trait::async_trait;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::errors::SyncError;
use crate::domain::repositories::image_repository::ImageRepository;
use crate::domain::services::image_filter::ImageFilter;

/// ファイルシステムベースの画像リポジトリ
pub struct FileImageRepository;

impl FileImageRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 画像ファイルを発見する（内部実装）
    ///
    /// 直下のエントリのみを対象とし、ファイル名順に返す
    fn discover_images_internal(image_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let metadata = fs::metadata(image_dir)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a directory",
            ));
        }

        let mut image_files = Vec::new();

        for entry in WalkDir::new(image_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            // 個々のエントリの失敗（リンク切れなど）はスキップし、ディレクトリ自体の失敗のみ致命的
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() > 0 => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            let path = entry.path();
            if !entry.file_type().is_file() {
                debug!("Skipping non-file entry: {}", path.display());
                continue;
            }
            if ImageFilter::is_image(path) {
                image_files.push(path.to_path_buf());
            } else {
                debug!("Skipping non-image file: {}", path.display());
            }
        }

        info!(
            "Found {} image files in {}",
            image_files.len(),
            image_dir.display()
        );

        Ok(image_files)
    }
}

#[async_trait]
impl ImageRepository for FileImageRepository {
    async fn discover_images(&self, image_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
        // 非同期なので、tokio::task::spawn_blockingでラップ
        let dir = image_dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::discover_images_internal(&dir))
            .await
            .map_err(io::Error::other)
            .and_then(|result| result)
            .map_err(|source| SyncError::listing(image_dir, source))
    }
}

impl Default for FileImageRepository {
    fn default() -> Self {
        Self::new()
    }
}
