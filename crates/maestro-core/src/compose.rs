//! docker-compose ファイルの読み取りモデル
//!
//! maestro が見るのは各サービスの labels だけなので、
//! compose スキーマ全体はモデル化しない。他のキーはすべて無視される。

use serde::Deserialize;
use std::collections::BTreeMap;

/// composeファイル (必要な部分のみ)
#[derive(Debug, Clone, Deserialize)]
pub struct ComposeFile {
    /// サービス定義 (サービス名 → 定義)
    pub services: BTreeMap<String, ComposeService>,
}

/// サービス定義のうち labels だけを読む
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeService {
    /// ラベル列。各要素はマッピング形式か "key=value" 文字列形式
    #[serde(default)]
    pub labels: Vec<LabelEntry>,
}

/// ラベル1件の元表現。2形式をタグなし union として受ける。
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelEntry {
    /// `- maestro.priority: 10` 形式 (キー/値のマッピング)
    Map(BTreeMap<String, LabelScalar>),
    /// `- "maestro.priority=10"` 形式
    Text(String),
}

/// マッピング形式のラベル値。YAML上の数値・真偽値は文字列へ正規化する。
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LabelScalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl LabelScalar {
    /// 文字列表現へ正規化
    pub fn into_string(self) -> String {
        match self {
            LabelScalar::Text(text) => text,
            LabelScalar::Int(value) => value.to_string(),
            LabelScalar::Float(value) => value.to_string(),
            LabelScalar::Bool(value) => value.to_string(),
        }
    }
}
