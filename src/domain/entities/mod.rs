//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ImageRecord**: アップロード済み画像のファイル名とURL
//! - **UploadBatch**: 同時にアップロードされる画像パスのまとまり

pub mod image_record;
pub mod upload_batch;
