//! ライフサイクルフックの実行
//!
//! 各アプリケーションディレクトリの Makefile にある `up` / `down`
//! ターゲットを起動順に呼び出します。出力は端末へそのまま流します。

pub mod error;

pub use error::*;

use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

/// フックとして呼び出すコマンド
const HOOK_COMMAND: &str = "make";

/// ライフサイクルの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookAction {
    Up,
    Down,
}

impl HookAction {
    /// 対応する make ターゲット名
    pub fn as_str(&self) -> &'static str {
        match self {
            HookAction::Up => "up",
            HookAction::Down => "down",
        }
    }
}

impl std::fmt::Display for HookAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フック実行機
#[derive(Debug, Clone, Copy)]
pub struct HookRunner {
    dry_run: bool,
}

impl HookRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// アプリケーションディレクトリで `make {action}` を実行する
    ///
    /// 標準入出力は端末を継承する。起動失敗・非ゼロ終了はそのまま
    /// エラーとして返す (リトライも握り潰しもしない)。
    /// dry_run の場合は何も実行せず成功扱い。
    pub async fn invoke(&self, app_dir: &Path, action: HookAction) -> Result<()> {
        if self.dry_run {
            info!(dir = %app_dir.display(), action = %action, "Dry run, skipping hook");
            return Ok(());
        }

        debug!(dir = %app_dir.display(), "Running: {} {}", HOOK_COMMAND, action);

        let status = Command::new(HOOK_COMMAND)
            .arg(action.as_str())
            .current_dir(app_dir)
            .status()
            .await
            .map_err(|e| HookError::Spawn {
                dir: app_dir.to_path_buf(),
                action: action.as_str(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(HookError::Failed {
                dir: app_dir.to_path_buf(),
                action: action.as_str(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
