//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - ファイルシステムやアップロード先APIについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ImageRecord, UploadBatch）
//! - **errors**: ドメインエラー（SyncError, UploadError）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（画像拡張子の判定）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
