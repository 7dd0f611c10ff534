mod commands;
mod docker;
mod utils;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "maestro")]
#[command(about = "見つける。並べる。フリートは、指揮で動く。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// DEBUGレベルの詳細ログを表示
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 選択したアプリケーションを優先度順に起動
    Up {
        /// アプリケーションを集めた親ディレクトリ
        #[arg(long, env = "MAESTRO_APPLICATIONS_DIR", default_value = "applications")]
        applications_dir: PathBuf,
        /// ターゲット定義ファイル (包含・除外ルール)
        #[arg(long, env = "MAESTRO_TARGET_FILE", default_value = "maestro.yaml")]
        target_file: PathBuf,
        /// フックを実行せず、起動順の確認だけ行う
        #[arg(long)]
        dry_run: bool,
    },
    /// 選択したアプリケーションを起動の逆順に停止
    Down {
        /// アプリケーションを集めた親ディレクトリ
        #[arg(long, env = "MAESTRO_APPLICATIONS_DIR", default_value = "applications")]
        applications_dir: PathBuf,
        /// ターゲット定義ファイル (包含・除外ルール)
        #[arg(long, env = "MAESTRO_TARGET_FILE", default_value = "maestro.yaml")]
        target_file: PathBuf,
        /// フックを実行せず、停止順の確認だけ行う
        #[arg(long)]
        dry_run: bool,
    },
    /// アプリケーションの一覧を表示
    List {
        /// アプリケーションを集めた親ディレクトリ
        #[arg(long, env = "MAESTRO_APPLICATIONS_DIR", default_value = "applications")]
        applications_dir: PathBuf,
        /// ターゲット定義ファイル (包含・除外ルール)
        #[arg(long, env = "MAESTRO_TARGET_FILE", default_value = "maestro.yaml")]
        target_file: PathBuf,
        /// コンテナの稼働状態も表示 (Docker接続が必要)
        #[arg(short, long)]
        status: bool,
        /// 無効・選択外のアプリケーションと管理外コンテナも含める
        #[arg(short, long)]
        all: bool,
    },
    /// フリート定義を検証
    Validate {
        /// アプリケーションを集めた親ディレクトリ
        #[arg(long, env = "MAESTRO_APPLICATIONS_DIR", default_value = "applications")]
        applications_dir: PathBuf,
        /// ターゲット定義ファイル (包含・除外ルール)
        #[arg(long, env = "MAESTRO_TARGET_FILE", default_value = "maestro.yaml")]
        target_file: PathBuf,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrに出力 (表・プランのstdoutと混ぜない)
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::DEBUG.into()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    // Versionコマンドはフリート定義不要
    if matches!(cli.command, Commands::Version) {
        println!("maestro {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // コマンドディスパッチ
    match cli.command {
        Commands::Up {
            applications_dir,
            target_file,
            dry_run,
        } => {
            commands::up::handle(&applications_dir, &target_file, dry_run).await?;
        }
        Commands::Down {
            applications_dir,
            target_file,
            dry_run,
        } => {
            commands::down::handle(&applications_dir, &target_file, dry_run).await?;
        }
        Commands::List {
            applications_dir,
            target_file,
            status,
            all,
        } => {
            commands::list::handle(&applications_dir, &target_file, status, all).await?;
        }
        Commands::Validate {
            applications_dir,
            target_file,
        } => {
            commands::validate::handle(&applications_dir, &target_file).await?;
        }
        Commands::Version => {
            unreachable!("Version is handled before dispatch");
        }
    }

    Ok(())
}
