//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! Defaults are filled in afterwards by [`resolve_config`], never by the loader.

use anyhow::Context;
use std::path::{Path, PathBuf};
use qw_core::config::AppConfig;

const APP_DIR_NAME: &str = "qwizme";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: empty strings and missing sections are
/// kept as empty values.
/// **不执行任何验证**：空字符串与缺失的部分都保留为空值。
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Platform data directory for the client, e.g. `~/.local/share/qwizme`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Build the effective configuration.
///
/// Precedence: `api_base_override` (flag or `QWIZME_API_BASE`), then the
/// config file, then system defaults rooted at `data_dir`.
pub fn resolve_config(
    config_path: Option<&Path>,
    api_base_override: Option<String>,
    data_dir: PathBuf,
) -> anyhow::Result<AppConfig> {
    let loaded = match config_path {
        Some(path) => load_config(path.to_path_buf())?,
        None => AppConfig::empty(),
    };

    let mut config = loaded.or_defaults(AppConfig::with_system_defaults(data_dir));
    if let Some(base) = api_base_override.filter(|b| !b.trim().is_empty()) {
        config.api_base_url = base;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [api]
            base_url = "https://api.qwizme.test"

            [storage]
            data_dir = "/tmp/qwizme-data"
            "#
        )
        .unwrap();

        let config = load_config(file.path().to_path_buf()).unwrap();

        assert_eq!(config.api_base_url, "https://api.qwizme.test");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/qwizme-data"));
        assert_eq!(config.log_dir, PathBuf::new());
    }

    #[test]
    fn test_load_config_accepts_empty_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"\"").unwrap();

        let config = load_config(file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = load_config(file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_resolve_config_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://from-file.test\"").unwrap();

        let from_file =
            resolve_config(Some(file.path()), None, PathBuf::from("/tmp/qw")).unwrap();
        assert_eq!(from_file.api_base_url, "https://from-file.test");
        assert_eq!(from_file.data_dir, PathBuf::from("/tmp/qw"));

        let overridden = resolve_config(
            Some(file.path()),
            Some("https://from-env.test".into()),
            PathBuf::from("/tmp/qw"),
        )
        .unwrap();
        assert_eq!(overridden.api_base_url, "https://from-env.test");

        let defaults = resolve_config(None, Some("  ".into()), PathBuf::from("/tmp/qw")).unwrap();
        assert_eq!(
            defaults.api_base_url,
            qw_core::config::DEFAULT_API_BASE_URL
        );
    }
}
