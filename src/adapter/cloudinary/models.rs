//! Cloudinary API Models
//!
//! Upload APIのリクエストとレスポンス

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 署名済みアップロードリクエスト
///
/// `params` には `api_key`, `timestamp`, `signature` とアップロードオプションが含まれる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUploadRequest {
    pub file_path: PathBuf,
    pub params: BTreeMap<String, String>,
}

/// アップロード成功時のレスポンス（使用するフィールドのみ）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(default)]
    pub public_id: Option<String>,
}

/// エラーレスポンス `{"error": {"message": "..."}}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTPステータスとレスポンス本文から失敗理由を組み立てる
pub fn describe_failure(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => format!("HTTP {}: {}", status, response.error.message),
        Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body.trim()),
    }
}
