//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

use std::time::Duration;

use crate::domain::repositories::upload_repository::UploadOptions;

/// アップロード設定
///
/// バッチスケジューラに渡す設定情報
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 1バッチあたりのファイル数
    pub batch_size: usize,
    /// バッチ番号1つあたりの開始遅延
    pub batch_delay: Duration,
    /// アップロード先にそのまま渡すオプション
    pub options: UploadOptions,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use imgsync::application::dto::upload_config::UploadConfig;
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    ///
    /// let mut options = BTreeMap::new();
    /// options.insert("folder".to_string(), "stills".to_string());
    ///
    /// let config = UploadConfig::new(5, Duration::from_millis(500), options);
    ///
    /// assert_eq!(config.batch_size, 5);
    /// assert_eq!(config.batch_delay, Duration::from_millis(500));
    /// assert_eq!(config.options["folder"], "stills");
    /// ```
    pub fn new(batch_size: usize, batch_delay: Duration, options: UploadOptions) -> Self {
        Self {
            batch_size,
            batch_delay,
            options,
        }
    }

    /// `n` 件のファイルを処理するバッチ数（`ceil(n / batch_size)`）
    pub fn batch_count(&self, n: usize) -> usize {
        if n == 0 {
            0
        } else if self.batch_size == 0 {
            1
        } else {
            n.div_ceil(self.batch_size)
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::new(5, Duration::from_millis(500), UploadOptions::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = UploadConfig::default();
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.batch_delay, Duration::from_millis(500));
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_batch_count() {
        let config = UploadConfig::new(5, Duration::ZERO, UploadOptions::new());
        assert_eq!(config.batch_count(0), 0);
        assert_eq!(config.batch_count(1), 1);
        assert_eq!(config.batch_count(5), 1);
        assert_eq!(config.batch_count(6), 2);
        assert_eq!(config.batch_count(12), 3);
    }

    #[test]
    fn test_batch_count_zero_size() {
        let config = UploadConfig::new(0, Duration::ZERO, UploadOptions::new());
        assert_eq!(config.batch_count(7), 1);
    }
}
