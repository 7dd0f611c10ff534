use colored::Colorize;

/// Docker接続を初期化（エラーハンドリング付き）
///
/// 接続とpingの両方を確認する。`list --status` 以外のコマンドは
/// Dockerに依存しないため、ここは状態取得時にだけ呼ばれる。
pub async fn init_docker_with_error_handling() -> anyhow::Result<bollard::Docker> {
    let docker = match bollard::Docker::connect_with_local_defaults() {
        Ok(docker) => docker,
        Err(e) => {
            print_connection_help(&e.to_string());
            return Err(anyhow::anyhow!("Docker接続に失敗しました"));
        }
    };

    match docker.ping().await {
        Ok(_) => Ok(docker),
        Err(e) => {
            print_connection_help(&e.to_string());
            Err(anyhow::anyhow!("Docker接続に失敗しました"))
        }
    }
}

fn print_connection_help(cause: &str) {
    eprintln!();
    eprintln!("{}", "✗ Docker接続エラー".red().bold());
    eprintln!();
    eprintln!("{}", "原因:".yellow());
    eprintln!("  {}", cause);
    eprintln!();
    eprintln!("{}", "解決方法:".yellow());
    eprintln!("  • Dockerが起動しているか確認してください");
    eprintln!("  • OrbStackまたはDocker Desktopがインストールされているか確認してください");
    eprintln!("  • docker ps コマンドが正常に動作するか確認してください");
}
