//! `.strings-merge.json` の読み込み

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    MergeSettings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".strings-merge.json";

/// `root` 直下の設定ファイルを読み込む
///
/// ファイルがなければ `Ok(None)`。存在確認と読み込みを分けず、`NotFound` で判定する。
///
/// # Errors
/// - `ConfigError::Read`: `NotFound` 以外の読み込みエラー
/// - `ConfigError::Parse`: JSON として不正、または型が合わない
pub(super) fn read_config_file(root: &Path) -> Result<Option<MergeSettings>, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    tracing::debug!("Loading configuration from {}", path.display());
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path, source })
}
