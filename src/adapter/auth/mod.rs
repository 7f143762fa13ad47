//! Authentication Module
//!
//! Cloudinary認証関連の機能（認証情報と署名）

pub mod cloudinary_auth;

pub use cloudinary_auth::{CloudinaryCredentials, SignatureAlgorithm};
