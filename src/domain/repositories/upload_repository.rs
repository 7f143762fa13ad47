//! # Upload Repository Trait
//!
//! 画像1ファイルのリモートアップロードを抽象化

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::entities::image_record::ImageRecord;
use crate::domain::errors::UploadError;

/// アップロードオプション
///
/// アップロード先にそのまま渡される不透明なキーと値（例: `folder`, `tags`）
pub type UploadOptions = BTreeMap<String, String>;

/// アップロードリポジトリ
///
/// 画像のアップロードを担当するリポジトリ
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// 画像を1ファイルアップロード
    ///
    /// # Arguments
    ///
    /// * `path` - アップロードする画像のパス
    /// * `options` - アップロード先にそのまま渡すオプション
    ///
    /// # Returns
    ///
    /// ファイルのベース名とリモートURL
    ///
    /// # Errors
    ///
    /// リモート呼び出しが失敗した場合に `UploadError` を返す（リトライしない）
    async fn upload(&self, path: &Path, options: &UploadOptions) -> Result<ImageRecord, UploadError>;
}
