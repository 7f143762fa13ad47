//! Configuration
//!
//! JSON設定ファイルの読み込みと検証

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::adapter::auth::SignatureAlgorithm;
use crate::application::dto::upload_config::UploadConfig;

/// `--config` 未指定時に参照する設定ファイル
pub const DEFAULT_CONFIG_PATH: &str = "./imgsync.json";

/// 署名付きアップロードで予約されているパラメータ名
///
/// `resource_type` と `cloud_name` はURLの一部で、署名対象にならない
pub const RESERVED_OPTION_KEYS: &[&str] = &[
    "file",
    "api_key",
    "timestamp",
    "signature",
    "resource_type",
    "cloud_name",
];

/// 設定・認証情報のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("missing credential: environment variable {0} is not set")]
    MissingCredential(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// アップロード対象の画像ディレクトリ
    pub image_dir: String,
    /// CSVレポートの出力先
    pub report_path: String,
    /// 1バッチあたりのファイル数
    pub upload_batch_size: usize,
    /// バッチ番号1つあたりの開始遅延（ミリ秒）
    pub batch_delay_ms: u64,
    /// アップロード先にそのまま渡すオプション
    pub upload_options: BTreeMap<String, String>,
    /// Cloudinary APIのベースURL
    pub api_base_url: String,
    /// 署名アルゴリズム（`sha1` または `sha256`）
    pub signature_algorithm: SignatureAlgorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: "./still".to_string(),
            report_path: "./imageURLs.csv".to_string(),
            upload_batch_size: 5,
            batch_delay_ms: 500,
            upload_options: BTreeMap::new(),
            api_base_url: "https://api.cloudinary.com/v1_1".to_string(),
            signature_algorithm: SignatureAlgorithm::Sha1,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む（省略されたフィールドはデフォルト値）
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// 指定された設定ファイル、なければ `DEFAULT_CONFIG_PATH`、それもなければデフォルト値
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// 設定値を検証する
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload_batch_size == 0 {
            return Err(ConfigError::Invalid(
                "upload_batch_size must be at least 1".to_string(),
            ));
        }
        if self.image_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("image_dir must not be empty".to_string()));
        }
        if self.report_path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "report_path must not be empty".to_string(),
            ));
        }
        for key in self.upload_options.keys() {
            validate_option_key(key)?;
        }
        Ok(())
    }

    /// `~` を展開した画像ディレクトリ
    pub fn image_dir_path(&self) -> PathBuf {
        expand_path(&self.image_dir)
    }

    /// `~` を展開したレポート出力先
    pub fn report_path_buf(&self) -> PathBuf {
        expand_path(&self.report_path)
    }

    /// バッチスケジューラ用の設定に変換
    pub fn upload_config(&self) -> UploadConfig {
        UploadConfig::new(
            self.upload_batch_size,
            Duration::from_millis(self.batch_delay_ms),
            self.upload_options.clone(),
        )
    }
}

/// `key=value` 形式のアップロードオプションをパースする
pub fn parse_option(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    validate_option_key(key).map_err(|e| e.to_string())?;
    Ok((key.to_string(), value.to_string()))
}

fn validate_option_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::Invalid(
            "upload option keys must not be empty".to_string(),
        ));
    }
    if RESERVED_OPTION_KEYS.contains(&key) {
        return Err(ConfigError::Invalid(format!(
            "upload option '{}' is reserved",
            key
        )));
    }
    Ok(())
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
