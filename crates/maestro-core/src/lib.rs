//! Maestro core — composeアプリケーションフリートの発見・選択・順序付け
//!
//! ホスト上のフリート (アプリケーションディレクトリ群) を走査し、
//! composeファイルの `maestro.` ラベルからメタデータを取り出して、
//! ターゲット定義に合う部分集合を起動順に並べます。
//!
//! - **発見**: [`discover_applications`] がディレクトリを走査してメタデータを集める
//! - **選択**: [`select_applications`] が包含・除外ルールと起動順を適用する
//! - 停止は選択結果の厳密な逆順
//!
//! アプリケーション単位の問題は [`Diagnostic`] として呼び出し元の sink に
//! 積まれ、ログ (tracing) はあくまで副次的な観測手段です。

pub mod compose;
pub mod discovery;
pub mod error;
pub mod labels;
pub mod model;
pub mod selection;

pub use compose::*;
pub use discovery::*;
pub use error::*;
pub use labels::{LABEL_PREFIX, LabelMap, LabelValue, extract_labels};
pub use model::*;
pub use selection::*;
