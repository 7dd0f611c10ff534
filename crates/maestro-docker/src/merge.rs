//! 選択結果と稼働ステータスの結合
//!
//! エンジンが選んだアプリケーション列に稼働レコードを結合して
//! 表示用の行を作ります。結合は素朴なマップとループだけで行います。

use crate::status::{ContainerRecord, ContainerState};
use maestro_core::AppConfig;
use std::collections::{BTreeMap, HashSet};

/// ステータス表示の1行
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    /// アプリケーション名
    pub application: String,
    /// 選択済みアプリのメタデータ (孤児コンテナ行では None)
    pub config: Option<AppConfig>,
    /// コンテナ名 (稼働コンテナのないアプリ行では None)
    pub container: Option<String>,
    /// コンテナの状態
    pub state: Option<ContainerState>,
}

/// 稼働レコードをアプリケーション列へ左結合する
///
/// 選択順は保たれる。コンテナのないアプリは状態空の1行になり、
/// 複数コンテナのアプリはコンテナ名順に1行ずつ (各行がメタデータを
/// 繰り返し持つ)。`include_orphans` を立てると、どの選択アプリにも
/// 属さないコンテナを (アプリ名, コンテナ名) 順で末尾に加える。
pub fn merge_status(
    apps: Vec<AppConfig>,
    records: &[ContainerRecord],
    include_orphans: bool,
) -> Vec<StatusRow> {
    // アプリケーション名 → 稼働レコード列
    let mut by_app: BTreeMap<&str, Vec<&ContainerRecord>> = BTreeMap::new();
    for record in records {
        by_app
            .entry(record.application.as_str())
            .or_default()
            .push(record);
    }
    for group in by_app.values_mut() {
        group.sort_by(|a, b| a.container.cmp(&b.container));
    }

    let selected: HashSet<String> = apps.iter().map(|app| app.name.clone()).collect();

    let mut rows = Vec::new();
    for app in apps {
        match by_app.get(app.name.as_str()) {
            Some(group) => {
                for record in group {
                    rows.push(StatusRow {
                        application: app.name.clone(),
                        config: Some(app.clone()),
                        container: Some(record.container.clone()),
                        state: Some(record.state),
                    });
                }
            }
            None => {
                rows.push(StatusRow {
                    application: app.name.clone(),
                    config: Some(app),
                    container: None,
                    state: None,
                });
            }
        }
    }

    if include_orphans {
        for (application, group) in &by_app {
            if selected.contains(*application) {
                continue;
            }
            for record in group {
                rows.push(StatusRow {
                    application: record.application.clone(),
                    config: None,
                    container: Some(record.container.clone()),
                    state: Some(record.state),
                });
            }
        }
    }

    rows
}
