//! # Discover Images Use Case
//!
//! 画像ファイル発見ユースケース

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::errors::SyncError;
use crate::domain::repositories::image_repository::ImageRepository;

/// 画像ファイル発見ユースケース
///
/// 指定されたディレクトリからアップロード対象の画像を発見する
pub struct DiscoverImagesUseCase<R: ImageRepository + ?Sized> {
    image_repository: Arc<R>,
}

impl<R: ImageRepository + ?Sized> DiscoverImagesUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `image_repository` - 画像リポジトリ
    pub fn new(image_repository: Arc<R>) -> Self {
        Self { image_repository }
    }

    /// 画像ファイルを発見する
    ///
    /// # Errors
    ///
    /// ディレクトリの読み取りに失敗した場合にエラーを返す（回復しない）
    pub async fn execute(&self, image_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
        self.image_repository.discover_images(image_dir).await
    }
}
