//! # Domain Errors
//!
//! 同期処理全体で発生するエラーの分類
//!
//! - **Filesystem**: 画像ディレクトリの読み取り、レポートの書き込み
//! - **Aggregation**: バッチ集約時に伝播される最初のバッチ失敗

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 1ファイルのアップロード失敗
///
/// 失敗したローカルパスと、リモート呼び出しの根本原因を保持する
#[derive(Debug, Error)]
#[error("failed to upload {}: {source}", path.display())]
pub struct UploadError {
    /// アップロードしようとしたファイル
    pub path: PathBuf,
    /// 根本原因（ネットワーク、認証、クォータ、不正なファイルなど）
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

impl UploadError {
    /// 新しいアップロードエラーを作成
    pub fn new(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// 同期処理のエラー
#[derive(Debug, Error)]
pub enum SyncError {
    /// 画像一覧の取得やレポート書き込みでのファイルシステムエラー
    #[error("filesystem error while {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// バッチの失敗（バッチ番号は0始まり、表示は1始まり）
    #[error("batch {} failed: {source}", batch + 1)]
    Aggregation {
        batch: usize,
        #[source]
        source: UploadError,
    },
}

impl SyncError {
    /// ディレクトリ一覧取得の失敗
    pub fn listing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action: "listing",
            path: path.into(),
            source,
        }
    }

    /// レポート書き込みの失敗
    pub fn writing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action: "writing",
            path: path.into(),
            source,
        }
    }

    /// ファイルシステム由来のエラーかどうか
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_display() {
        let err = UploadError::new("./still/cat.jpg", "quota exceeded");
        assert_eq!(err.to_string(), "failed to upload ./still/cat.jpg: quota exceeded");
    }

    #[test]
    fn test_upload_error_source() {
        let err = UploadError::new("a.png", "boom");
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "boom");
    }

    #[test]
    fn test_aggregation_display_is_one_based() {
        let err = SyncError::Aggregation {
            batch: 2,
            source: UploadError::new("c.jpg", "network down"),
        };
        assert_eq!(
            err.to_string(),
            "batch 3 failed: failed to upload c.jpg: network down"
        );
    }

    #[test]
    fn test_listing_error() {
        let err = SyncError::listing(
            "./missing",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_filesystem());
        assert_eq!(
            err.to_string(),
            "filesystem error while listing ./missing: not found"
        );
    }
}
