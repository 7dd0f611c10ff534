//! 稼働中コンテナのステータス取得
//!
//! compose が各コンテナへ付与する `com.docker.compose.project` ラベルを
//! アプリケーション名として読み、表示用のレコードへ正規化します。

use crate::error::Result;
use std::collections::HashMap;
use tracing::debug;

/// docker compose がコンテナに付けるプロジェクトラベル
pub const COMPOSE_PROJECT_LABEL: &str = "com.docker.compose.project";

/// コンテナの状態 (docker の State 値に対応)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Exited,
    Dead,
    Unknown,
}

impl ContainerState {
    /// docker の状態文字列から変換。未知の値は Unknown に倒す。
    pub fn parse(state: &str) -> Self {
        match state {
            "created" => ContainerState::Created,
            "running" => ContainerState::Running,
            "paused" => ContainerState::Paused,
            "restarting" => ContainerState::Restarting,
            "exited" => ContainerState::Exited,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerState::Created => "created",
            ContainerState::Running => "running",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
            ContainerState::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ContainerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 稼働中コンテナ1つ分のレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    /// 所属アプリケーション (composeプロジェクト名)
    pub application: String,
    /// コンテナ名 (先頭の `/` は除去済み)
    pub container: String,
    /// 現在の状態
    pub state: ContainerState,
}

/// 稼働中の compose コンテナを列挙する
///
/// composeプロジェクトラベルを持つコンテナだけが対象。停止中の
/// コンテナは含めない (docker ps と同じ範囲)。
pub async fn fetch_container_records(docker: &bollard::Docker) -> Result<Vec<ContainerRecord>> {
    let mut filter_map = HashMap::new();
    filter_map.insert(
        "label".to_string(),
        vec![COMPOSE_PROJECT_LABEL.to_string()],
    );

    #[allow(deprecated)]
    let options = bollard::container::ListContainersOptions {
        all: false,
        filters: filter_map,
        ..Default::default()
    };

    #[allow(deprecated)]
    let containers = docker.list_containers(Some(options)).await?;

    let mut records = Vec::with_capacity(containers.len());
    for container in containers {
        let Some(application) = container
            .labels
            .as_ref()
            .and_then(|labels| labels.get(COMPOSE_PROJECT_LABEL))
            .cloned()
        else {
            continue;
        };

        let name = container
            .names
            .as_ref()
            .and_then(|names| names.first())
            .map(|name| name.trim_start_matches('/').to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let state = container
            .state
            .as_ref()
            .map(|state| ContainerState::parse(&state.to_string()))
            .unwrap_or(ContainerState::Unknown);

        records.push(ContainerRecord {
            application,
            container: name,
            state,
        });
    }

    debug!(count = records.len(), "Fetched container records");
    Ok(records)
}
