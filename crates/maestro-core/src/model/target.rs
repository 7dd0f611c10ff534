//! ターゲット定義

use crate::error::{MaestroError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1回の実行でどのアプリケーションを対象とするかの包含・除外ルール
///
/// すべてのフィールドは省略可能で、空の定義は「全アプリケーション対象」。
/// 未知のフィールドは無視する（定義ファイルはツールのバージョン間で
/// 行き来するため、アプリケーション側と違い厳格にしない）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Target {
    /// このタグを持つアプリケーションを対象に含める（"*" は全許可）
    #[serde(default)]
    pub tags_include: Vec<String>,
    /// このタグを持つアプリケーションを除外する（包含より優先）
    #[serde(default)]
    pub tags_exclude: Vec<String>,
    /// 対象ホスト
    #[serde(default)]
    pub hosts_include: Vec<String>,
    /// 除外ホスト
    #[serde(default)]
    pub hosts_exclude: Vec<String>,
}

impl Target {
    /// YAMLファイルから読み込む。
    ///
    /// ファイルが存在しない・壊れている場合は致命的エラー（実行全体を中断）。
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MaestroError::TargetLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // 空ファイルは妥当な「全対象」定義
        if content.trim().is_empty() {
            return Ok(Target::default());
        }

        serde_yaml::from_str(&content).map_err(|e| MaestroError::TargetLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
