//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **exit_code**: エラー種別ごとの終了コード
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod exit_code;
pub mod workflow;

pub use cli::Args;
pub use exit_code::exit_code_for;
pub use workflow::ImageSyncWorkflow;
