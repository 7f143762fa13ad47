//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverImagesUseCase**: 画像ファイルの発見
//! - **UploadImagesUseCase**: バッチ単位の時間差アップロードと結果の集約
//! - **WriteReportUseCase**: CSVレポートの書き込み

pub mod discover_images;
pub mod upload_images;
pub mod write_report;
