//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod cloudinary_upload_repository;
pub mod csv_report_repository;
pub mod file_image_repository;
