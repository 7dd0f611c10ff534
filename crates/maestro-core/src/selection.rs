//! ターゲットによる選択と起動順の決定
//!
//! 発見済みアプリケーションにターゲット定義の包含・除外ルールを適用し、
//! (priority, name) の全順序で並べます。停止はこの列の逆順を使います。

use crate::error::Diagnostic;
use crate::model::{AppConfig, Target};
use tracing::debug;

/// 包含ルールの全許可ワイルドカード
pub const WILDCARD: &str = "*";

/// アプリケーション列へターゲットを適用し、起動順に並べる
///
/// `include_all` は俯瞰モード: enable も包含・除外ルールも無視して
/// フリート全体を返す。既定モードで enable=false により外れたものは
/// diagnostics に情報として残る。ターゲットのルールで外れるのは
/// 通常の選択動作なので診断は残さない。
pub fn select_applications(
    apps: Vec<AppConfig>,
    target: &Target,
    include_all: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<AppConfig> {
    let mut selected: Vec<AppConfig> = Vec::with_capacity(apps.len());

    for app in apps {
        if !include_all {
            if !app.enable {
                debug!(application = %app.name, "Skipping disabled application");
                diagnostics.push(Diagnostic::Disabled {
                    application: app.name,
                });
                continue;
            }
            if !dimension_allows(&app.hosts, &target.hosts_include, &target.hosts_exclude) {
                debug!(application = %app.name, "Filtered out by hosts rules");
                continue;
            }
            if !dimension_allows(&app.tags, &target.tags_include, &target.tags_exclude) {
                debug!(application = %app.name, "Filtered out by tags rules");
                continue;
            }
        }
        selected.push(app);
    }

    // 起動順: priority 昇順、同値は名前順 — 全順序で実行ごとに揺れない
    selected.sort_by(|a, b| (a.priority, a.name.as_str()).cmp(&(b.priority, b.name.as_str())));

    selected
}

/// 1次元 (tags または hosts) の包含・除外判定
///
/// 包含: ルールが空、ワイルドカードを含む、または値を1つでも共有していれば通過。
/// 除外: 値を1つでも共有していれば脱落。除外は包含に勝つ。
fn dimension_allows(values: &[String], include: &[String], exclude: &[String]) -> bool {
    let included = include.is_empty()
        || include.iter().any(|rule| rule == WILDCARD)
        || values.iter().any(|value| include.contains(value));
    let excluded = values.iter().any(|value| exclude.contains(value));

    included && !excluded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app(name: &str, priority: i32, enable: bool, tags: &[&str], hosts: &[&str]) -> AppConfig {
        AppConfig {
            name: name.to_string(),
            dir: PathBuf::from(format!("/fleet/{}", name)),
            priority,
            enable,
            tags: tags.iter().map(|s| s.to_string()).collect(),
            hosts: hosts.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn tags_target(include: &[&str], exclude: &[&str]) -> Target {
        Target {
            tags_include: include.iter().map(|s| s.to_string()).collect(),
            tags_exclude: exclude.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn names(apps: &[AppConfig]) -> Vec<&str> {
        apps.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_startup_order_and_reverse_teardown() {
        let apps = vec![
            app("a", 10, true, &["web"], &[]),
            app("b", 5, true, &["db"], &[]),
            app("c", 0, false, &[], &[]),
        ];

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &Target::default(), false, &mut diagnostics);

        // 起動: priority 昇順
        assert_eq!(names(&selected), vec!["b", "a"]);

        // 停止: 厳密に逆順
        let mut teardown = selected;
        teardown.reverse();
        assert_eq!(names(&teardown), vec!["a", "b"]);
    }

    #[test]
    fn test_priority_tie_breaks_by_name() {
        let apps = vec![
            app("delta", 1, true, &[], &[]),
            app("alpha", 1, true, &[], &[]),
            app("casper", 0, true, &[], &[]),
        ];

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &Target::default(), false, &mut diagnostics);

        assert_eq!(names(&selected), vec!["casper", "alpha", "delta"]);
    }

    #[test]
    fn test_disabled_excluded_with_diagnostic() {
        let apps = vec![app("off", 1, false, &[], &[]), app("on", 2, true, &[], &[])];

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &Target::default(), false, &mut diagnostics);

        assert_eq!(names(&selected), vec!["on"]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::Disabled {
                application: "off".to_string()
            }]
        );
    }

    #[test]
    fn test_include_all_keeps_disabled() {
        let apps = vec![app("off", 1, false, &[], &[]), app("on", 2, true, &[], &[])];

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &Target::default(), true, &mut diagnostics);

        assert_eq!(names(&selected), vec!["off", "on"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_include_passes_everything() {
        let apps = vec![app("a", 1, true, &["web"], &[]), app("b", 2, true, &[], &[])];

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &Target::default(), false, &mut diagnostics);

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_wildcard_include_passes_everything() {
        let apps = vec![
            app("tagged", 1, true, &["web"], &[]),
            app("untagged", 2, true, &[], &[]),
        ];
        let target = tags_target(&["*"], &[]);

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &target, false, &mut diagnostics);

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_include_requires_intersection() {
        let apps = vec![
            app("web", 1, true, &["web"], &[]),
            app("db", 2, true, &["db"], &[]),
            app("bare", 3, true, &[], &[]),
        ];
        let target = tags_target(&["web"], &[]);

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &target, false, &mut diagnostics);

        // タグなしのアプリも非空の包含ルールには掛からない
        assert_eq!(names(&selected), vec!["web"]);
    }

    #[test]
    fn test_exclude_dominates_include() {
        let apps = vec![app("both", 1, true, &["web", "legacy"], &[])];
        let target = tags_target(&["web"], &["legacy"]);

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &target, false, &mut diagnostics);

        assert!(selected.is_empty());
    }

    #[test]
    fn test_exclude_dominates_wildcard() {
        let apps = vec![
            app("keep", 1, true, &["web"], &[]),
            app("drop", 2, true, &["experimental"], &[]),
        ];
        let target = tags_target(&["*"], &["experimental"]);

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &target, false, &mut diagnostics);

        assert_eq!(names(&selected), vec!["keep"]);
    }

    #[test]
    fn test_hosts_dimension_filters_independently() {
        let apps = vec![
            app("here", 1, true, &["web"], &["alpha"]),
            app("elsewhere", 2, true, &["web"], &["omega"]),
        ];
        let target = Target {
            tags_include: vec!["web".to_string()],
            hosts_include: vec!["alpha".to_string()],
            ..Default::default()
        };

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &target, false, &mut diagnostics);

        // タグは両方通るが hosts で elsewhere が落ちる
        assert_eq!(names(&selected), vec!["here"]);
    }

    #[test]
    fn test_include_all_skips_target_filters() {
        let apps = vec![app("off-target", 1, true, &["db"], &[])];
        let target = tags_target(&["web"], &[]);

        let mut diagnostics = Vec::new();
        let selected = select_applications(apps, &target, true, &mut diagnostics);

        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let apps = vec![
            app("a", 10, true, &["web"], &[]),
            app("b", 5, true, &["db"], &[]),
            app("c", 5, false, &[], &[]),
        ];
        let target = tags_target(&["web", "db"], &[]);

        let mut diagnostics = Vec::new();
        let once = select_applications(apps, &target, false, &mut diagnostics);
        let twice = select_applications(once.clone(), &target, false, &mut diagnostics);

        assert_eq!(once, twice);
    }
}
