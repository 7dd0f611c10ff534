//! Docker稼働ステータスの取得と結合
//!
//! bollard 経由で稼働中の compose コンテナを列挙し、
//! エンジンの選択結果へ結合して表示用の行を作ります。

pub mod error;
pub mod merge;
pub mod status;

pub use error::*;
pub use merge::*;
pub use status::*;
