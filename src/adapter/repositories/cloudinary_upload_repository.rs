//! Cloudinary Upload Repository Implementation
//!
//! UploadRepositoryのCloudinary実装

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

use crate::adapter::auth::CloudinaryCredentials;
use crate::adapter::cloudinary::client::CloudinaryApi;
use crate::adapter::cloudinary::models::SignedUploadRequest;
use crate::domain::entities::image_record::ImageRecord;
use crate::domain::errors::UploadError;
use crate::domain::repositories::upload_repository::{UploadOptions, UploadRepository};

/// Cloudinaryアップロードリポジトリ
pub struct CloudinaryUploadRepository {
    api: Arc<dyn CloudinaryApi>,
    credentials: CloudinaryCredentials,
}

impl CloudinaryUploadRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn CloudinaryApi>, credentials: CloudinaryCredentials) -> Self {
        Self { api, credentials }
    }

    /// オプションとタイムスタンプに署名したリクエストを組み立てる
    ///
    /// `api_key` と `signature` は署名対象に含めない
    pub fn build_request(
        &self,
        path: &Path,
        options: &UploadOptions,
        timestamp: i64,
    ) -> SignedUploadRequest {
        let mut params = options.clone();
        params.insert("timestamp".to_string(), timestamp.to_string());

        let signature = self.credentials.sign(&params);
        params.insert("signature".to_string(), signature);
        params.insert("api_key".to_string(), self.credentials.api_key.clone());

        SignedUploadRequest {
            file_path: path.to_path_buf(),
            params,
        }
    }
}

#[async_trait]
impl UploadRepository for CloudinaryUploadRepository {
    async fn upload(&self, path: &Path, options: &UploadOptions) -> Result<ImageRecord, UploadError> {
        let request = self.build_request(path, options, Utc::now().timestamp());
        debug!("Uploading {}", path.display());

        match self.api.upload(&request).await {
            Ok(response) => {
                debug!(
                    "Uploaded {} -> {} (public_id: {})",
                    path.display(),
                    response.url,
                    response.public_id.as_deref().unwrap_or("-")
                );
                Ok(ImageRecord::from_path(path, response.url))
            }
            Err(e) => {
                warn!("Upload of {} failed: {:#}", path.display(), e);
                Err(UploadError::new(path, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::auth::SignatureAlgorithm;
    use crate::adapter::cloudinary::client::MockCloudinaryApi;
    use crate::adapter::cloudinary::models::UploadResponse;
    use anyhow::Context;
    use std::error::Error;
    use std::path::PathBuf;

    fn create_test_credentials() -> CloudinaryCredentials {
        CloudinaryCredentials::new("demo", "1234", "abcd")
    }

    fn create_test_options() -> UploadOptions {
        let mut options = UploadOptions::new();
        options.insert("folder".to_string(), "stills".to_string());
        options
    }

    #[test]
    fn test_build_request_signs_options_and_timestamp() {
        let repo = CloudinaryUploadRepository::new(
            Arc::new(MockCloudinaryApi::new()),
            create_test_credentials(),
        );

        let request = repo.build_request(
            Path::new("./still/cat.jpg"),
            &create_test_options(),
            1_700_000_000,
        );

        assert_eq!(request.file_path, PathBuf::from("./still/cat.jpg"));
        assert_eq!(request.params["folder"], "stills");
        assert_eq!(request.params["timestamp"], "1700000000");
        assert_eq!(request.params["api_key"], "1234");
        assert_eq!(
            request.params["signature"],
            "0081c998802eaa689e4e9d2b15887068ab890b4a"
        );
    }

    #[test]
    fn test_build_request_sha256() {
        let repo = CloudinaryUploadRepository::new(
            Arc::new(MockCloudinaryApi::new()),
            create_test_credentials().with_signature_algorithm(SignatureAlgorithm::Sha256),
        );

        let request = repo.build_request(
            Path::new("./still/cat.jpg"),
            &create_test_options(),
            1_700_000_000,
        );

        assert_eq!(
            request.params["signature"],
            "721f992085b8c834673f242808ad72e3d416d581fb3c0c14dd35636e182a8201"
        );
    }

    #[test]
    fn test_build_request_without_options() {
        let repo = CloudinaryUploadRepository::new(
            Arc::new(MockCloudinaryApi::new()),
            create_test_credentials(),
        );

        let request = repo.build_request(Path::new("a.png"), &UploadOptions::new(), 1_700_000_000);

        assert_eq!(request.params.len(), 3);
        assert_eq!(
            request.params["signature"],
            "565e337b7f63b66286d82fccb51ae468584c7d5d"
        );
    }

    #[tokio::test]
    async fn test_upload_success() {
        let mut mock = MockCloudinaryApi::new();
        mock.expect_upload()
            .withf(|request| {
                request.file_path == Path::new("./still/cat.jpg")
                    && request.params["folder"] == "stills"
                    && request.params.contains_key("signature")
            })
            .times(1)
            .returning(|_| {
                Ok(UploadResponse {
                    url: "http://res.cloudinary.com/demo/image/upload/v1/stills/cat.jpg"
                        .to_string(),
                    public_id: Some("stills/cat".to_string()),
                })
            });

        let repo = CloudinaryUploadRepository::new(Arc::new(mock), create_test_credentials());
        let record = repo
            .upload(Path::new("./still/cat.jpg"), &create_test_options())
            .await
            .unwrap();

        assert_eq!(record.filename, "cat.jpg");
        assert_eq!(
            record.url,
            "http://res.cloudinary.com/demo/image/upload/v1/stills/cat.jpg"
        );
    }

    #[tokio::test]
    async fn test_upload_failure_carries_cause() {
        let mut mock = MockCloudinaryApi::new();
        mock.expect_upload()
            .times(1)
            .returning(|_| {
                Err(anyhow::anyhow!("HTTP 420: Rate Limit Exceeded"))
                    .context("Cloudinary rejected the upload")
            });

        let repo = CloudinaryUploadRepository::new(Arc::new(mock), create_test_credentials());
        let err = repo
            .upload(Path::new("./still/dog.png"), &UploadOptions::new())
            .await
            .unwrap_err();

        assert_eq!(err.path, PathBuf::from("./still/dog.png"));
        assert!(err.to_string().contains("Cloudinary rejected the upload"));

        // 原因のチェーンが文字列に潰されず保持される
        let root_cause = err
            .source
            .source()
            .expect("underlying cause should be kept");
        assert_eq!(root_cause.to_string(), "HTTP 420: Rate Limit Exceeded");
    }
}
