//! # Image Filter Service
//!
//! アップロード対象の画像ファイルを拡張子で判定するDomain Service

use std::path::Path;

/// アップロード対象の拡張子（小文字）
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 画像判定サービス
pub struct ImageFilter;

impl ImageFilter {
    /// 拡張子が許可リストに含まれるかを判定します（大文字小文字を区別しない）。
    ///
    /// # 例
    ///
    /// ```
    /// use imgsync::domain::services::image_filter::ImageFilter;
    /// use std::path::Path;
    ///
    /// assert!(ImageFilter::is_image(Path::new("cat.jpg")));
    /// assert!(ImageFilter::is_image(Path::new("dog.PNG")));
    /// assert!(!ImageFilter::is_image(Path::new("notes.txt")));
    /// ```
    pub fn is_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_lowercase() {
        assert!(ImageFilter::is_image(Path::new("a.jpg")));
        assert!(ImageFilter::is_image(Path::new("a.jpeg")));
        assert!(ImageFilter::is_image(Path::new("a.png")));
    }

    #[test]
    fn test_is_image_mixed_case() {
        assert!(ImageFilter::is_image(Path::new("a.JPG")));
        assert!(ImageFilter::is_image(Path::new("a.JpEg")));
    }

    #[test]
    fn test_is_image_rejects_other_extensions() {
        assert!(!ImageFilter::is_image(Path::new("a.gif")));
        assert!(!ImageFilter::is_image(Path::new("a.txt")));
        assert!(!ImageFilter::is_image(Path::new("a.jpg.bak")));
    }

    #[test]
    fn test_is_image_without_extension() {
        assert!(!ImageFilter::is_image(Path::new("jpg")));
        assert!(!ImageFilter::is_image(Path::new(".png")));
    }
}
