use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaestroError {
    #[error("YAMLパースエラー: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ターゲット定義の読み込みエラー: {path}\n理由: {message}")]
    TargetLoad { path: PathBuf, message: String },

    #[error("ディレクトリ走査エラー: {path}\n理由: {message}")]
    DiscoveryError { path: PathBuf, message: String },

    #[error(
        "アプリケーションディレクトリが見つかりません: {0}\nヒント: --applications-dir で compose アプリケーションの親ディレクトリを指定してください"
    )]
    ApplicationsDirNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, MaestroError>;

/// アプリケーション単体の検証エラー。
/// 該当アプリケーションのみ除外され、フリート全体の走査は継続する。
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("不明なメタデータキー: maestro.{0}")]
    UnknownKey(String),

    #[error("priority は整数が必要です: {0:?}")]
    InvalidPriority(String),

    #[error("enable は真偽値が必要です: {0:?}")]
    InvalidEnable(String),

    #[error("サポート外のラベル形式: {0}")]
    LabelShape(String),
}

/// アプリケーション単位の診断。エンジンは判断せず、呼び出し元の sink に積む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// maestroラベルを持つcomposeファイルがない(管理対象外)
    NotManaged { application: String },

    /// enable=false によりスキップされた
    Disabled { application: String },

    /// メタデータ検証エラー(該当アプリケーションのみ除外)
    Invalid { application: String, message: String },
}

impl Diagnostic {
    /// 対象アプリケーション名
    pub fn application(&self) -> &str {
        match self {
            Diagnostic::NotManaged { application }
            | Diagnostic::Disabled { application }
            | Diagnostic::Invalid { application, .. } => application,
        }
    }

    /// エラー扱いの診断か (Invalid のみ true、他は情報)
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Invalid { .. })
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::NotManaged { application } => {
                write!(
                    f,
                    "管理対象外: {} (maestroラベルを持つcomposeファイルがありません)",
                    application
                )
            }
            Diagnostic::Disabled { application } => {
                write!(f, "無効化: {} (enable=false)", application)
            }
            Diagnostic::Invalid {
                application,
                message,
            } => {
                write!(f, "検証エラー: {}\n理由: {}", application, message)
            }
        }
    }
}
