use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockerError {
    #[error(
        "Dockerに接続できません: {0}\n\nヒント:\n  • Dockerが起動しているか確認してください\n  • docker ps コマンドが正常に動作するか確認してください"
    )]
    ConnectionFailed(String),

    #[error("Docker APIエラー: {0}")]
    Api(String),
}

impl From<bollard::errors::Error> for DockerError {
    fn from(err: bollard::errors::Error) -> Self {
        let err_str = err.to_string();
        // ソケット不在・デーモン停止は接続エラーとして案内する
        if err_str.contains("Connection refused") || err_str.contains("No such file or directory")
        {
            DockerError::ConnectionFailed(err_str)
        } else {
            DockerError::Api(err_str)
        }
    }
}

pub type Result<T> = std::result::Result<T, DockerError>;
