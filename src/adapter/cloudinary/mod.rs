//! Cloudinary Adapter Modules
//!
//! Cloudinary Upload API統合のためのアダプターモジュール

pub mod client;
pub mod models;
