//! アプリケーションメタデータ

use crate::error::ConfigError;
use crate::labels::{LabelMap, LabelValue};
use std::path::PathBuf;

/// 1アプリケーション分の検証済みメタデータ
///
/// Raw Label Map から [`AppConfig::from_labels`] で型付き構築される。
/// name / dir は構築後に変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// アプリケーション名（ディレクトリ名由来）
    pub name: String,
    /// composeファイルを含むディレクトリ
    pub dir: PathBuf,
    /// 起動順。小さいほど先に起動する
    pub priority: i32,
    /// false なら既定の選択から外れる
    pub enable: bool,
    /// ターゲット選択用のタグ
    pub tags: Vec<String>,
    /// 動作対象ホスト
    pub hosts: Vec<String>,
}

impl AppConfig {
    /// Raw Label Map から構築する。
    ///
    /// 未知のキーは受け付けない。タイプミス（`maestro.prioriti` など）を
    /// この境界で検出し、文字列のままのレコードを先へ流さない。
    pub fn from_labels(name: String, dir: PathBuf, labels: LabelMap) -> Result<Self, ConfigError> {
        let mut config = AppConfig {
            name,
            dir,
            priority: 0,
            enable: true,
            tags: Vec::new(),
            hosts: Vec::new(),
        };

        // tags / hosts 以外は抽出段階で必ずスカラーになっている
        for (key, value) in labels {
            match (key.as_str(), value) {
                ("priority", LabelValue::Text(text)) => {
                    config.priority = text
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidPriority(text))?;
                }
                ("enable", LabelValue::Text(text)) => {
                    config.enable = parse_enable(&text)?;
                }
                ("tags", LabelValue::List(items)) => config.tags = items,
                ("hosts", LabelValue::List(items)) => config.hosts = items,
                (_, _) => return Err(ConfigError::UnknownKey(key)),
            }
        }

        Ok(config)
    }
}

/// enable に使える真偽値表現
fn parse_enable(text: &str) -> Result<bool, ConfigError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidEnable(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn labels(entries: &[(&str, LabelValue)]) -> LabelMap {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            map.insert(key.to_string(), value.clone());
        }
        map
    }

    fn text(value: &str) -> LabelValue {
        LabelValue::Text(value.to_string())
    }

    #[test]
    fn test_defaults_from_empty_map() {
        let config =
            AppConfig::from_labels("app".to_string(), PathBuf::from("/fleet/app"), labels(&[]))
                .unwrap();

        assert_eq!(config.name, "app");
        assert_eq!(config.dir, PathBuf::from("/fleet/app"));
        assert_eq!(config.priority, 0);
        assert!(config.enable);
        assert!(config.tags.is_empty());
        assert!(config.hosts.is_empty());
    }

    #[test]
    fn test_full_construction() {
        let config = AppConfig::from_labels(
            "web".to_string(),
            PathBuf::from("/fleet/web"),
            labels(&[
                ("priority", text("10")),
                ("enable", text("true")),
                (
                    "tags",
                    LabelValue::List(vec!["web".to_string(), "frontend".to_string()]),
                ),
                ("hosts", LabelValue::List(vec!["alpha".to_string()])),
            ]),
        )
        .unwrap();

        assert_eq!(config.priority, 10);
        assert!(config.enable);
        assert_eq!(config.tags, vec!["web", "frontend"]);
        assert_eq!(config.hosts, vec!["alpha"]);
    }

    #[test]
    fn test_negative_priority() {
        let config = AppConfig::from_labels(
            "infra".to_string(),
            PathBuf::from("/fleet/infra"),
            labels(&[("priority", text("-5"))]),
        )
        .unwrap();

        assert_eq!(config.priority, -5);
    }

    #[test]
    fn test_invalid_priority_names_field() {
        let result = AppConfig::from_labels(
            "web".to_string(),
            PathBuf::from("/fleet/web"),
            labels(&[("priority", text("abc"))]),
        );

        assert!(matches!(result, Err(ConfigError::InvalidPriority(v)) if v == "abc"));
    }

    #[test]
    fn test_enable_accepts_common_forms() {
        for (raw, expected) in [
            ("true", true),
            ("TRUE", true),
            ("yes", true),
            ("on", true),
            ("1", true),
            ("false", false),
            ("No", false),
            ("off", false),
            ("0", false),
        ] {
            let config = AppConfig::from_labels(
                "app".to_string(),
                PathBuf::from("/fleet/app"),
                labels(&[("enable", text(raw))]),
            )
            .unwrap();
            assert_eq!(config.enable, expected, "enable={}", raw);
        }
    }

    #[test]
    fn test_invalid_enable_is_error() {
        let result = AppConfig::from_labels(
            "app".to_string(),
            PathBuf::from("/fleet/app"),
            labels(&[("enable", text("treu"))]),
        );

        assert!(matches!(result, Err(ConfigError::InvalidEnable(v)) if v == "treu"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = AppConfig::from_labels(
            "app".to_string(),
            PathBuf::from("/fleet/app"),
            labels(&[("prioriti", text("10"))]),
        );

        assert!(matches!(result, Err(ConfigError::UnknownKey(k)) if k == "prioriti"));
    }
}
