//! 负责处理应用的持久化配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::{
    converter::types::OutputFormat,
    error::Result,
    providers::{LyricsKind, validate_media_user_token},
};

const CONFIG_DIR_NAME: &str = "ttml-lrc";
const CONFIG_FILE_NAME: &str = "config.json";

fn default_storefront() -> String {
    "us".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

/// 获取歌词所需的全部配置项。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LyricsConfig {
    /// 地区代码。
    #[serde(default = "default_storefront")]
    pub storefront: String,
    /// 期望的本地化语言。
    #[serde(default = "default_language")]
    pub language: String,
    /// 请求逐行还是逐字歌词。
    #[serde(default)]
    pub lyrics_kind: LyricsKind,
    /// 输出原始 TTML 还是 LRC。
    #[serde(default)]
    pub output_format: OutputFormat,
    /// 开发者令牌。
    #[serde(default)]
    pub authorization_token: String,
    /// 用户令牌。
    #[serde(default)]
    pub media_user_token: String,
}

impl Default for LyricsConfig {
    fn default() -> Self {
        Self {
            storefront: default_storefront(),
            language: default_language(),
            lyrics_kind: LyricsKind::default(),
            output_format: OutputFormat::default(),
            authorization_token: String::new(),
            media_user_token: String::new(),
        }
    }
}

impl LyricsConfig {
    /// 检查凭据是否可用。
    ///
    /// # 错误
    /// 用户令牌短于 50 个字符时返回 `LyricsError::Configuration`。
    pub fn validate(&self) -> Result<()> {
        validate_media_user_token(&self.media_user_token)
    }
}

/// 获取应用配置目录下指定文件的完整路径。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "config.json"。
pub fn get_config_file_path(filename: &str) -> Result<PathBuf> {
    if let Some(mut config_dir) = dirs::config_dir() {
        config_dir.push(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir)?;
        config_dir.push(filename);
        Ok(config_dir)
    } else {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "无法找到用户配置目录").into())
    }
}

/// 从文件加载配置。文件不存在时返回默认配置。
pub fn load_config() -> Result<LyricsConfig> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)?;

    match fs::read_to_string(&config_path) {
        Ok(content) => {
            let config = serde_json::from_str(&content)?;
            info!("已从 {} 加载配置。", config_path.display());
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("配置文件不存在，将使用默认配置。");
            Ok(LyricsConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// 将配置序列化为 JSON 并保存到文件。
pub fn save_config(config: &LyricsConfig) -> Result<()> {
    let config_path = get_config_file_path(CONFIG_FILE_NAME)?;
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content)?;
    info!("配置已保存。");
    Ok(())
}
