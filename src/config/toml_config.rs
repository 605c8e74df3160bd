use crate::utils::error::{Result, TestkitError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestkitConfig {
    pub cleanup: Option<CleanupConfig>,
    pub fixtures: Option<FixturesConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    pub max_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixturesConfig {
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TestkitConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TestkitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TestkitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TEST_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_path("fixtures.base_dir", self.base_dir())?;

        crate::utils::validation::validate_positive_number(
            "cleanup.max_attempts",
            self.delete_attempts() as usize,
            1,
        )?;

        if let Some(delay) = self.cleanup.as_ref().and_then(|c| c.retry_delay_ms) {
            crate::utils::validation::validate_range("cleanup.retry_delay_ms", delay, 0, 60_000)?;
        }

        Ok(())
    }

    /// 取得刪除目錄的最大重試次數
    pub fn delete_attempts(&self) -> u32 {
        self.cleanup
            .as_ref()
            .and_then(|c| c.max_attempts)
            .unwrap_or(5)
    }

    /// 取得刪除目錄的重試間隔
    pub fn retry_delay(&self) -> Duration {
        let delay_ms = self
            .cleanup
            .as_ref()
            .and_then(|c| c.retry_delay_ms)
            .unwrap_or(1000);
        Duration::from_millis(delay_ms)
    }

    /// 取得測試資料目錄
    pub fn base_dir(&self) -> &str {
        self.fixtures
            .as_ref()
            .and_then(|f| f.base_dir.as_deref())
            .unwrap_or("./target/test-data")
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TestkitConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_testkit_config() {
        let toml_content = r#"
[cleanup]
max_attempts = 3
retry_delay_ms = 50

[fixtures]
base_dir = "./target/it-data"

[logging]
verbose = true
"#;

        let config = TestkitConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.delete_attempts(), 3);
        assert_eq!(config.retry_delay(), Duration::from_millis(50));
        assert_eq!(config.base_dir(), "./target/it-data");
        assert!(config.verbose());
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = TestkitConfig::from_toml_str("").unwrap();

        assert_eq!(config.delete_attempts(), 5);
        assert_eq!(config.retry_delay(), Duration::from_millis(1000));
        assert_eq!(config.base_dir(), "./target/test-data");
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TESTKIT_BASE_DIR", "/tmp/testkit-data");

        let toml_content = r#"
[fixtures]
base_dir = "${TESTKIT_BASE_DIR}"
"#;

        let config = TestkitConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_dir(), "/tmp/testkit-data");

        std::env::remove_var("TESTKIT_BASE_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[cleanup]
max_attempts = 0
"#;

        let config = TestkitConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[cleanup]
max_attempts = 2
retry_delay_ms = 10
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TestkitConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.delete_attempts(), 2);
        assert_eq!(config.retry_delay(), Duration::from_millis(10));
    }
}
