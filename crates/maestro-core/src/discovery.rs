//! アプリケーション発見機能
//!
//! アプリケーションディレクトリ直下のサブディレクトリを走査し、
//! composeファイルのラベルからメタデータを読み取ります。

use crate::compose::ComposeFile;
use crate::error::{Diagnostic, MaestroError, Result};
use crate::labels;
use crate::model::AppConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// composeファイルの候補名 (優先順)
pub const COMPOSE_FILE_CANDIDATES: &[&str] = &[
    "docker-compose.yaml",
    "docker-compose.yml",
    "compose.yaml",
    "compose.yml",
];

/// 1アプリケーションディレクトリからメタデータを読み込む
///
/// 候補ファイルを優先順に試し、maestroラベルを持つ最初のファイルを採用する。
/// 存在してもラベルが空のファイルは次の候補へ倒れる。
///
/// 戻り値 `None` は「このアプリケーションは対象外」。理由は diagnostics に残る:
/// - どの候補もラベルを持たない → 管理対象外 (情報)
/// - パース・検証エラー → 検証エラー (該当アプリのみ除外、走査は継続)
#[tracing::instrument(skip(app_dir, diagnostics), fields(app_dir = %app_dir.display()))]
pub fn load_app_config(app_dir: &Path, diagnostics: &mut Vec<Diagnostic>) -> Option<AppConfig> {
    let name = app_dir.file_name()?.to_string_lossy().to_string();

    for candidate in COMPOSE_FILE_CANDIDATES {
        let path = app_dir.join(candidate);
        if !path.exists() {
            continue;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to read compose file");
                diagnostics.push(Diagnostic::Invalid {
                    application: name,
                    message: format!("{}: 読み込みに失敗: {}", path.display(), e),
                });
                return None;
            }
        };

        let compose: ComposeFile = match serde_yaml::from_str(&content) {
            Ok(compose) => compose,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Compose file failed to parse");
                diagnostics.push(Diagnostic::Invalid {
                    application: name,
                    message: format!("{}: {}", path.display(), e),
                });
                return None;
            }
        };

        let label_map = match labels::extract_labels(&compose) {
            Ok(map) => map,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Label extraction failed");
                diagnostics.push(Diagnostic::Invalid {
                    application: name,
                    message: format!("{}: {}", path.display(), e),
                });
                return None;
            }
        };

        // ラベルが空なら次の候補ファイルへ
        if label_map.is_empty() {
            debug!(file = %path.display(), "No maestro labels, trying next candidate");
            continue;
        }

        return match AppConfig::from_labels(name.clone(), app_dir.to_path_buf(), label_map) {
            Ok(config) => {
                debug!(
                    file = %path.display(),
                    priority = config.priority,
                    enable = config.enable,
                    "Loaded application config"
                );
                Some(config)
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Metadata failed validation");
                diagnostics.push(Diagnostic::Invalid {
                    application: name,
                    message: format!("{}: {}", path.display(), e),
                });
                None
            }
        };
    }

    debug!("No compose file with maestro labels");
    diagnostics.push(Diagnostic::NotManaged { application: name });
    None
}

/// アプリケーションディレクトリ直下を走査してメタデータを集める
///
/// サブディレクトリは名前順に処理され、結果は決定的になる。
/// 隠しディレクトリ (`.git` など) と通常ファイルは対象外。
/// ディレクトリ自体が存在しない場合のみ致命的エラー。
#[tracing::instrument(skip(base_dir, diagnostics), fields(base_dir = %base_dir.display()))]
pub fn discover_applications(
    base_dir: &Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<AppConfig>> {
    if !base_dir.is_dir() {
        return Err(MaestroError::ApplicationsDirNotFound(
            base_dir.to_path_buf(),
        ));
    }

    let entries = std::fs::read_dir(base_dir).map_err(|e| MaestroError::DiscoveryError {
        path: base_dir.to_path_buf(),
        message: format!("ディレクトリの読み込みに失敗: {}", e),
    })?;

    let mut app_dirs: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MaestroError::DiscoveryError {
            path: base_dir.to_path_buf(),
            message: format!("ディレクトリエントリの読み込みに失敗: {}", e),
        })?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }
        // 隠しディレクトリはアプリケーションとして扱わない
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        app_dirs.push(path);
    }

    // 名前順で決定的に
    app_dirs.sort();

    let mut apps = Vec::new();
    for dir in &app_dirs {
        if let Some(config) = load_app_config(dir, diagnostics) {
            apps.push(config);
        }
    }

    info!(
        found = apps.len(),
        scanned = app_dirs.len(),
        "Application discovery complete"
    );

    Ok(apps)
}
