//! Cloudinary Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};

#[cfg(test)]
use mockall::automock;

use super::models::{describe_failure, SignedUploadRequest, UploadResponse};
use crate::domain::entities::image_record::base_name;

/// Trait for Cloudinary upload calls
/// This enables mocking in tests while using the real HTTP client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CloudinaryApi: Send + Sync {
    /// Upload one file with already-signed parameters
    async fn upload(&self, request: &SignedUploadRequest) -> Result<UploadResponse>;
}

/// Build the image upload endpoint for a cloud
pub fn upload_endpoint(api_base_url: &str, cloud_name: &str) -> String {
    format!(
        "{}/{}/image/upload",
        api_base_url.trim_end_matches('/'),
        cloud_name
    )
}

/// reqwest based client for the Cloudinary Upload API
pub struct HttpCloudinaryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCloudinaryClient {
    pub fn new(api_base_url: &str, cloud_name: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: upload_endpoint(api_base_url, cloud_name),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl CloudinaryApi for HttpCloudinaryClient {
    async fn upload(&self, request: &SignedUploadRequest) -> Result<UploadResponse> {
        let bytes = tokio::fs::read(&request.file_path)
            .await
            .with_context(|| format!("Failed to read image file: {}", request.file_path.display()))?;

        debug!(
            "POST {} ({} bytes from {})",
            self.endpoint,
            bytes.len(),
            request.file_path.display()
        );

        let part = Part::bytes(bytes).file_name(base_name(&request.file_path));
        let form = request
            .params
            .iter()
            .fold(Form::new().part("file", part), |form, (key, value)| {
                form.text(key.clone(), value.clone())
            });

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .context("Cloudinary upload request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Cloudinary rejected the upload: {}",
                describe_failure(status.as_u16(), &body)
            );
        }

        response
            .json::<UploadResponse>()
            .await
            .context("Failed to parse Cloudinary upload response")
    }
}
