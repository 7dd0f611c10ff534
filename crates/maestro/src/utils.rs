use colored::Colorize;
use maestro_core::{AppConfig, Diagnostic, Target, discover_applications, select_applications};
use std::path::Path;

/// ターゲット読み込み → 発見 → 選択の共通パス
///
/// 戻り値は起動順に並んだアプリケーション列と、走査中に積まれた診断。
/// `include_all` は包含・除外ルールと enable を無視してフリート全体を返す。
pub fn resolve_applications(
    applications_dir: &Path,
    target_file: &Path,
    include_all: bool,
) -> anyhow::Result<(Vec<AppConfig>, Vec<Diagnostic>)> {
    let target = Target::load(target_file)?;

    let mut diagnostics = Vec::new();
    let apps = discover_applications(applications_dir, &mut diagnostics)?;
    let selected = select_applications(apps, &target, include_all, &mut diagnostics);

    Ok((selected, diagnostics))
}

/// 診断をstderrにまとめて表示する（表・プランのstdoutと混ぜない）
///
/// 戻り値はエラー扱いの診断数。検証エラーは該当アプリケーションの
/// 除外で済んでいるため、呼び出し側で実行を止める必要はない。
pub fn print_diagnostics(diagnostics: &[Diagnostic]) -> usize {
    let mut errors = 0;

    for diagnostic in diagnostics {
        if diagnostic.is_error() {
            errors += 1;
            eprintln!("{}", format!("✗ {}", diagnostic).red());
        } else {
            eprintln!("  ℹ {}", diagnostic.to_string().dimmed());
        }
    }

    errors
}
