use crate::utils;
use colored::Colorize;
use maestro_hooks::{HookAction, HookRunner};
use std::path::Path;

pub async fn handle(
    applications_dir: &Path,
    target_file: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    println!("{}", "フリートを停止中...".yellow());
    println!(
        "ターゲット定義: {}",
        target_file.display().to_string().cyan()
    );

    let (mut selected, diagnostics) =
        utils::resolve_applications(applications_dir, target_file, false)?;
    utils::print_diagnostics(&diagnostics);

    if selected.is_empty() {
        println!();
        println!("{}", "対象のアプリケーションはありません".dimmed());
        return Ok(());
    }

    // 停止順は起動順の厳密な逆
    selected.reverse();

    println!();
    println!("{}", format!("停止順 ({} 個):", selected.len()).bold());
    for app in &selected {
        println!("  • {} (priority={})", app.name.cyan(), app.priority);
    }

    if dry_run {
        println!();
        println!("{}", "ドライラン: フックは実行されません".yellow());
    }

    let runner = HookRunner::new(dry_run);

    for app in &selected {
        println!();
        println!("{}", format!("■ {} を停止中...", app.name).yellow().bold());
        runner.invoke(&app.dir, HookAction::Down).await?;
        if dry_run {
            println!("  ℹ スキップ (ドライラン)");
        } else {
            println!("  ✓ 停止完了");
        }
    }

    println!();
    if dry_run {
        println!("{}", "✓ ドライラン完了".green().bold());
    } else {
        println!(
            "{}",
            "✓ すべてのアプリケーションが停止しました！".green().bold()
        );
    }

    Ok(())
}
