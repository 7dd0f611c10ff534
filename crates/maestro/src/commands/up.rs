use crate::utils;
use colored::Colorize;
use maestro_hooks::{HookAction, HookRunner};
use std::path::Path;

pub async fn handle(
    applications_dir: &Path,
    target_file: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    println!(
        "ターゲット定義: {}",
        target_file.display().to_string().cyan()
    );

    let (selected, diagnostics) =
        utils::resolve_applications(applications_dir, target_file, false)?;
    utils::print_diagnostics(&diagnostics);

    if selected.is_empty() {
        println!();
        println!("{}", "対象のアプリケーションはありません".dimmed());
        return Ok(());
    }

    println!();
    println!("{}", format!("起動順 ({} 個):", selected.len()).bold());
    for app in &selected {
        println!("  • {} (priority={})", app.name.cyan(), app.priority);
    }

    if dry_run {
        println!();
        println!("{}", "ドライラン: フックは実行されません".yellow());
    }

    let runner = HookRunner::new(dry_run);

    // 最初のフック失敗で中断し、残りは起動しない
    for app in &selected {
        println!();
        println!("{}", format!("▶ {} を起動中...", app.name).green().bold());
        runner.invoke(&app.dir, HookAction::Up).await?;
        if dry_run {
            println!("  ℹ スキップ (ドライラン)");
        } else {
            println!("  ✓ 起動完了");
        }
    }

    println!();
    if dry_run {
        println!("{}", "✓ ドライラン完了".green().bold());
    } else {
        println!(
            "{}",
            "✓ すべてのアプリケーションが起動しました！".green().bold()
        );
    }

    Ok(())
}
