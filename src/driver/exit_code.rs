//! Exit Codes
//!
//! エラーの種類からプロセスの終了コードを決める
//!
//! | 結果 | コード |
//! |---|---|
//! | 成功（ドライランを含む） | 0 |
//! | アップロード・バッチ集約の失敗 | 1 |
//! | ファイルシステムの失敗（一覧取得、レポート書き込み） | 2 |
//! | 設定・認証情報のエラー | 3 |

use crate::adapter::config::ConfigError;
use crate::domain::errors::SyncError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_UPLOAD_FAILURE: u8 = 1;
pub const EXIT_FILESYSTEM_FAILURE: u8 = 2;
pub const EXIT_CONFIG_ERROR: u8 = 3;

/// エラーチェーンをたどって終了コードを決める
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(sync_error) = cause.downcast_ref::<SyncError>() {
            return if sync_error.is_filesystem() {
                EXIT_FILESYSTEM_FAILURE
            } else {
                EXIT_UPLOAD_FAILURE
            };
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return EXIT_CONFIG_ERROR;
        }
    }
    EXIT_UPLOAD_FAILURE
}
