//! Adapter Layer
//!
//! 外部システム（Cloudinary, ファイルシステム）との統合

pub mod auth;
pub mod cloudinary;
pub mod config;
pub mod repositories;
