//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod image_filter;
