use crate::docker;
use crate::utils;
use colored::Colorize;
use maestro_core::{AppConfig, Target};
use maestro_docker::{ContainerState, StatusRow, fetch_container_records, merge_status};
use std::path::Path;

pub async fn handle(
    applications_dir: &Path,
    target_file: &Path,
    status: bool,
    all: bool,
) -> anyhow::Result<()> {
    let target = Target::load(target_file)?;
    print_target_rules(&target);

    let mut diagnostics = Vec::new();
    let apps = maestro_core::discover_applications(applications_dir, &mut diagnostics)?;
    let selected = maestro_core::select_applications(apps, &target, all, &mut diagnostics);
    utils::print_diagnostics(&diagnostics);

    if !status {
        print_config_table(&selected);
        return Ok(());
    }

    // Docker接続は状態表示のときだけ
    println!();
    println!("{}", "Dockerに接続中...".blue());
    let docker_conn = docker::init_docker_with_error_handling().await?;
    let records = fetch_container_records(&docker_conn).await?;

    let rows = merge_status(selected, &records, all);
    print_status_table(&rows);

    Ok(())
}

fn print_target_rules(target: &Target) {
    println!("{}", "ターゲットルール:".bold());
    println!("  tags_include:  {}", format_rule(&target.tags_include));
    println!("  tags_exclude:  {}", format_rule(&target.tags_exclude));
    println!("  hosts_include: {}", format_rule(&target.hosts_include));
    println!("  hosts_exclude: {}", format_rule(&target.hosts_exclude));
}

fn format_rule(rules: &[String]) -> colored::ColoredString {
    if rules.is_empty() {
        "(なし)".dimmed()
    } else {
        rules.join(", ").cyan()
    }
}

fn print_config_table(apps: &[AppConfig]) {
    println!();
    if apps.is_empty() {
        println!("{}", "対象のアプリケーションはありません".dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<10} {:<8} {:<24} {:<24} {:<24}",
            "PRIORITY", "ENABLE", "APPLICATION", "TAGS", "HOSTS"
        )
        .bold()
    );
    println!("{}", "─".repeat(94).dimmed());

    for app in apps {
        // 色はパディング後に付ける (エスケープ列が幅に数えられるため)
        let enable = if app.enable {
            format!("{:<8}", "true").green()
        } else {
            format!("{:<8}", "false").red()
        };
        println!(
            "{:<10} {} {} {:<24} {:<24}",
            app.priority,
            enable,
            format!("{:<24}", app.name).cyan(),
            app.tags.join(", "),
            app.hosts.join(", ")
        );
    }
}

/// STATUS列のセル本文。稼働コンテナのないアプリは not running と表示する。
fn state_cell(state: Option<ContainerState>) -> String {
    match state {
        Some(state) => format!("{:<12}", state.as_str()),
        None => format!("{:<12}", "not running"),
    }
}

fn print_status_table(rows: &[StatusRow]) {
    println!();
    if rows.is_empty() {
        println!("{}", "対象のアプリケーションはありません".dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<10} {:<8} {:<24} {:<16} {:<16} {:<12} {:<32}",
            "PRIORITY", "ENABLE", "APPLICATION", "TAGS", "HOSTS", "STATUS", "CONTAINER"
        )
        .bold()
    );
    println!("{}", "─".repeat(124).dimmed());

    for row in rows {
        let (priority, enable, tags, hosts) = match &row.config {
            Some(config) => (
                format!("{:<10}", config.priority),
                if config.enable {
                    format!("{:<8}", "true").green()
                } else {
                    format!("{:<8}", "false").red()
                },
                format!("{:<16}", config.tags.join(",")),
                format!("{:<16}", config.hosts.join(",")),
            ),
            // 管理外コンテナは構成を持たない
            None => (
                format!("{:<10}", "-"),
                format!("{:<8}", "-").dimmed(),
                format!("{:<16}", "-"),
                format!("{:<16}", "-"),
            ),
        };

        let cell = state_cell(row.state);
        let status = match row.state {
            Some(ContainerState::Running) => cell.green(),
            Some(ContainerState::Paused | ContainerState::Restarting) => cell.yellow(),
            Some(_) => cell.red(),
            None => cell.dimmed(),
        };

        println!(
            "{} {} {} {} {} {} {}",
            priority,
            enable,
            format!("{:<24}", row.application).cyan(),
            tags,
            hosts,
            status,
            row.container.as_deref().unwrap_or("-").dimmed()
        );
    }
}
