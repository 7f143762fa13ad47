//! # ImageRecord Entity
//!
//! アップロード済み画像の記録

use std::path::Path;

/// アップロード済み画像
///
/// アップロードに成功したファイル1件につき1つ作成され、レポートの1行になる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// ファイル名（ディレクトリを含まないベース名）
    pub filename: String,
    /// リモートが割り当てたURL（不透明なロケータ）
    pub url: String,
}

impl ImageRecord {
    /// 新しいレコードを作成
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }

    /// パスのベース名とURLからレコードを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use imgsync::domain::entities::image_record::ImageRecord;
    /// use std::path::Path;
    ///
    /// let record = ImageRecord::from_path(Path::new("./still/cat.jpg"), "http://x/cat");
    /// assert_eq!(record.filename, "cat.jpg");
    /// assert_eq!(record.url, "http://x/cat");
    /// ```
    pub fn from_path(path: &Path, url: impl Into<String>) -> Self {
        Self::new(base_name(path), url)
    }
}

/// パスのベース名を返す（取得できない場合はパス全体）
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_nested() {
        assert_eq!(base_name(Path::new("/a/b/dog.PNG")), "dog.PNG");
    }

    #[test]
    fn test_base_name_plain() {
        assert_eq!(base_name(Path::new("cat.jpg")), "cat.jpg");
    }

    #[test]
    fn test_base_name_without_file_name() {
        assert_eq!(base_name(Path::new("/")), "/");
    }

    #[test]
    fn test_record_new() {
        let record = ImageRecord::new("a.jpg", "http://x/a");
        assert_eq!(record, ImageRecord::from_path(Path::new("dir/a.jpg"), "http://x/a"));
    }
}
