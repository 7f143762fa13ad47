//! # UploadBatch Value Object
//!
//! 同時にアップロードされる画像パスのまとまり

use std::path::PathBuf;
use std::time::Duration;

/// アップロードバッチ
///
/// 入力パス列の連続した一部分。インデックス以外の識別子は持たない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadBatch {
    index: usize,
    paths: Vec<PathBuf>,
}

impl UploadBatch {
    /// 新しいアップロードバッチを作成
    ///
    /// # Arguments
    ///
    /// * `index` - 0始まりのバッチ番号
    /// * `paths` - バッチに含まれる画像パス
    pub fn new(index: usize, paths: Vec<PathBuf>) -> Self {
        Self { index, paths }
    }

    /// 0始まりのバッチ番号
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 表示用の1始まりのバッチ番号
    #[inline]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// バッチ内のパス数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// バッチが空かどうかを返す
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// パスへの参照を返す
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// スケジュール開始からこのバッチを開始するまでの遅延
    ///
    /// 前のバッチの完了を待たない固定のずらし幅（`per_batch × index`）
    pub fn start_delay(&self, per_batch: Duration) -> Duration {
        let index = u32::try_from(self.index).unwrap_or(u32::MAX);
        per_batch.saturating_mul(index)
    }

    /// パス列をサイズで分割
    ///
    /// `ceil(N / batch_size)` 個の連続したバッチを入力順に返す。
    /// 最後のバッチ以外はすべて `batch_size` 件。
    ///
    /// # Arguments
    ///
    /// * `paths` - 分割するパス列
    /// * `batch_size` - 各バッチのサイズ（0の場合は全体を1バッチとする）
    pub fn split_by_size(paths: Vec<PathBuf>, batch_size: usize) -> Vec<UploadBatch> {
        if paths.is_empty() {
            return Vec::new();
        }
        if batch_size == 0 {
            return vec![UploadBatch::new(0, paths)];
        }

        paths
            .chunks(batch_size)
            .enumerate()
            .map(|(index, chunk)| UploadBatch::new(index, chunk.to_vec()))
            .collect()
    }
}
