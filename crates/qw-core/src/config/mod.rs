//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation inside `from_toml` / `from_toml` 内禁止默认值计算**

use std::path::PathBuf;

/// API base used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// File name of the long-lived session credential inside the data dir.
pub const ACCESS_TOKEN_FILE: &str = "session.json";

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the Qwiz Me API (may be empty - this is a fact, not an error)
    /// API 基础地址（可能为空 - 这就是事实，不是错误）
    pub api_base_url: String,

    /// Directory holding the long-lived session credential
    /// 长期会话凭据所在目录（仅路径信息，不检查是否存在）
    pub data_dir: PathBuf,

    /// Directory for log files
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// Empty strings are valid "facts"; callers decide how to fill the gaps.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: toml_value
                .get("api")
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            data_dir: PathBuf::new(),
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    /// 生产环境使用：创建具有系统默认路径的 AppConfig
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_dir: data_dir.join("logs"),
            data_dir,
        }
    }

    /// Fill empty fields from `defaults`, keeping everything the file did set.
    pub fn or_defaults(self, defaults: AppConfig) -> Self {
        Self {
            api_base_url: if self.api_base_url.is_empty() {
                defaults.api_base_url
            } else {
                self.api_base_url
            },
            data_dir: if self.data_dir.as_os_str().is_empty() {
                defaults.data_dir
            } else {
                self.data_dir
            },
            log_dir: if self.log_dir.as_os_str().is_empty() {
                defaults.log_dir
            } else {
                self.log_dir
            },
        }
    }

    pub fn access_token_path(&self) -> PathBuf {
        self.data_dir.join(ACCESS_TOKEN_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_str = r#"
            [api]
            # base_url is missing
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [api]
            base_url = "https://api.qwizme.test"

            [storage]
            data_dir = "/var/lib/qwizme"

            [logging]
            dir = "/var/log/qwizme"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.api_base_url, "https://api.qwizme.test");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/qwizme"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/qwizme"));
    }

    #[test]
    fn test_or_defaults_only_fills_gaps() {
        let loaded = AppConfig {
            api_base_url: "https://api.qwizme.test".to_string(),
            ..AppConfig::empty()
        };

        let config = loaded.or_defaults(AppConfig::with_system_defaults(PathBuf::from("/tmp/qw")));

        assert_eq!(config.api_base_url, "https://api.qwizme.test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/qw"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/qw/logs"));
        assert_eq!(config.access_token_path(), PathBuf::from("/tmp/qw/session.json"));
    }
}
