//! モデル定義
//!
//! フリート内の1アプリケーションのメタデータ（[`AppConfig`]）と、
//! 実行対象を決めるターゲット定義（[`Target`]）。

mod app;
mod target;

// Re-exports
pub use app::*;
pub use target::*;
