use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error(
        "フックを起動できません: {dir} で `make {action}` を実行できませんでした\n理由: {message}\nヒント: make がインストールされているか確認してください"
    )]
    Spawn {
        dir: PathBuf,
        action: &'static str,
        message: String,
    },

    #[error("フックが失敗しました: {dir} の `make {action}` ({status})")]
    Failed {
        dir: PathBuf,
        action: &'static str,
        status: String,
    },
}

pub type Result<T> = std::result::Result<T, HookError>;
