//! maestroラベルの抽出
//!
//! composeファイルの全サービスからネームスペース配下のラベルを集め、
//! プレフィックスを剥がした Raw Label Map を返す。
//! 空のマップは「管理対象外」を意味する (エラーではない)。

use crate::compose::{ComposeFile, LabelEntry};
use crate::error::ConfigError;
use std::collections::BTreeMap;

/// メタデータラベルのネームスペースプレフィックス
pub const LABEL_PREFIX: &str = "maestro.";

/// カンマ区切り文字列として後処理するキー
const LIST_KEYS: &[&str] = &["tags", "hosts"];

/// 抽出済みラベル値。tags / hosts はカンマ分割済みの列になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelValue {
    Text(String),
    List(Vec<String>),
}

/// プレフィックスを剥がしたキー → 値
pub type LabelMap = BTreeMap<String, LabelValue>;

/// composeファイルから maestro ラベルを抽出する。
///
/// 複数サービスのラベルは1つのマップへマージされる。
/// 同じキーが複数サービスに現れた場合、どちらの値が残るかは保証しない。
pub fn extract_labels(compose: &ComposeFile) -> Result<LabelMap, ConfigError> {
    let mut raw: BTreeMap<String, String> = BTreeMap::new();

    for service in compose.services.values() {
        for entry in &service.labels {
            match entry {
                LabelEntry::Map(map) => {
                    for (key, value) in map {
                        if let Some(stripped) = key.strip_prefix(LABEL_PREFIX) {
                            raw.insert(stripped.to_string(), value.clone().into_string());
                        }
                    }
                }
                LabelEntry::Text(text) => {
                    let (key, value) = text.split_once('=').ok_or_else(|| {
                        ConfigError::LabelShape(format!(
                            "'=' を含まないラベル文字列: {:?}",
                            text
                        ))
                    })?;
                    if let Some(stripped) = key.strip_prefix(LABEL_PREFIX) {
                        raw.insert(stripped.to_string(), value.to_string());
                    }
                }
            }
        }
    }

    // プレフィックス除去後の後処理: tags / hosts をカンマ分割
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let value = if LIST_KEYS.contains(&key.as_str()) {
                LabelValue::List(split_csv(&value))
            } else {
                LabelValue::Text(value)
            };
            (key, value)
        })
        .collect())
}

/// カンマ区切りを分割する。前後の空白は刈り、空要素は捨てる。
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
