use crate::utils;
use colored::Colorize;
use maestro_core::Target;
use std::path::Path;

pub async fn handle(applications_dir: &Path, target_file: &Path) -> anyhow::Result<()> {
    println!("{}", "フリート定義を検証中...".blue());

    // ターゲット定義の読み込み (欠落・破損は即エラー)
    let target = match Target::load(target_file) {
        Ok(target) => {
            println!(
                "ターゲット定義: {}",
                target_file.display().to_string().cyan()
            );
            target
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ ターゲット定義エラー".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let mut diagnostics = Vec::new();
    let apps = match maestro_core::discover_applications(applications_dir, &mut diagnostics) {
        Ok(apps) => apps,
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ アプリケーション走査エラー".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let discovered = apps.len();
    let selected = maestro_core::select_applications(apps, &target, false, &mut diagnostics);

    println!();
    let errors = utils::print_diagnostics(&diagnostics);
    if errors > 0 {
        eprintln!();
        eprintln!(
            "{}",
            format!(
                "✗ 検証エラー: {}個のアプリケーションに問題があります",
                errors
            )
            .red()
            .bold()
        );
        std::process::exit(1);
    }

    println!("{}", "✓ フリート定義は正常です！".green().bold());
    println!();
    println!("サマリー:");
    println!("  発見: {}個 / 選択: {}個", discovered, selected.len());
    println!("  起動順:");
    for app in &selected {
        let mut notes = Vec::new();
        if !app.tags.is_empty() {
            notes.push(format!("tags: {}", app.tags.join(", ")));
        }
        if !app.hosts.is_empty() {
            notes.push(format!("hosts: {}", app.hosts.join(", ")));
        }
        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join("; "))
        };
        println!(
            "    - {} priority={}{}",
            app.name.cyan(),
            app.priority,
            suffix
        );
    }

    Ok(())
}
