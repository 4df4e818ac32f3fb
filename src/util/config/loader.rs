//! 配置加载和管理模块
//! 处理配置文件的读取、写入、验证和默认值生成

use super::types::*;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub const ENV_DB_PATH: &str = "PAGESMANAGER_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "PAGESMANAGER_LOG_LEVEL";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从YAML文件读取配置
    pub fn read_yaml(path: impl AsRef<Path>) -> Result<Config> {
        let config_str = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&config_str)?;
        Ok(config)
    }

    /// 从环境变量读取配置覆盖
    pub fn apply_env_overrides(config: Config) -> Config {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok())
    }

    fn apply_overrides_from(
        mut config: Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Config {
        if let Some(db_path) = lookup(ENV_DB_PATH).filter(|v| !v.trim().is_empty()) {
            tracing::info!(event = "config.env_override", key = ENV_DB_PATH, value = %db_path);
            config.database.path = db_path;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            tracing::info!(event = "config.env_override", key = ENV_LOG_LEVEL, value = %level);
            config.logging.level = level.trim().to_lowercase();
        }

        config
    }

    /// 智能配置加载（配置文件 + 环境变量）
    pub fn load_with_env_overrides(path: impl AsRef<Path>) -> Result<Config> {
        let base_config = Self::read_yaml(path)?;
        let config = Self::apply_env_overrides(base_config);
        Self::validate_config(&config)?;

        tracing::info!(event = "config.load.complete", "配置加载完成");
        Ok(config)
    }

    /// 验证配置的有效性
    pub fn validate_config(config: &Config) -> Result<()> {
        if config.database.path.trim().is_empty() {
            return Err(anyhow::anyhow!("数据库路径不能为空"));
        }

        if config.database.max_connections == 0 {
            return Err(anyhow::anyhow!("数据库连接数必须大于0"));
        }

        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(anyhow::anyhow!("无效的日志级别: {}", config.logging.level));
        }

        if config.logging.file.enabled && config.logging.file.directory.trim().is_empty() {
            return Err(anyhow::anyhow!("启用文件日志时必须配置日志目录"));
        }

        Ok(())
    }
}

/// 配置写入器
pub struct ConfigWriter;

impl ConfigWriter {
    /// 写入配置到指定路径，确保目录存在
    pub fn write_yaml_with_dir(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml_content = serde_yaml::to_string(config)?;
        fs::write(path, yaml_content)?;
        Ok(())
    }

    /// 生成配置模板
    pub fn generate_template() -> Config {
        Config {
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_yaml_with_defaults_for_missing_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "database:\n  path: /data/pm.db\nlogging:\n  level: debug\n  structured: true\n",
        )
        .unwrap();

        let config = ConfigLoader::read_yaml(&path).unwrap();
        assert_eq!(config.database.path, "/data/pm.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.structured, Some(true));
        assert_eq!(config.logging.file, LogFileConfig::default());
    }

    #[test]
    fn template_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf/config.yaml");

        let template = Config::default();
        template.write_yaml_to_path(&path).unwrap();

        let loaded = ConfigLoader::load_with_env_overrides(&path).unwrap();
        assert_eq!(loaded.database, template.database);
        assert!(ConfigLoader::validate_config(&template).is_ok());
    }

    #[test]
    fn overrides_replace_configured_values() {
        let env: HashMap<&str, &str> = [
            (ENV_DB_PATH, "/srv/pagesmanager/admin.db"),
            (ENV_LOG_LEVEL, " WARN "),
        ]
        .into_iter()
        .collect();

        let config = ConfigLoader::apply_overrides_from(Config::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });

        assert_eq!(config.database.path, "/srv/pagesmanager/admin.db");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = ConfigLoader::apply_overrides_from(Config::default(), |_| Some("  ".into()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_invalid_settings() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(ConfigLoader::validate_config(&config).is_err());

        let mut config = Config::default();
        config.database.path = " ".to_string();
        assert!(ConfigLoader::validate_config(&config).is_err());

        let mut config = Config::default();
        config.database.max_connections = 0;
        assert!(ConfigLoader::validate_config(&config).is_err());

        let mut config = Config::default();
        config.logging.file.directory = String::new();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }
}
