use crate::core::catalog::MIN_RECORDS;
use crate::core::ConfigProvider;
use crate::utils::error::{DrawError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: Option<CatalogConfig>,
    pub output: Option<OutputConfig>,
    pub draw: Option<DrawConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 每筆格式為 "<id> <name> <weight>"
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| DrawError::ConfigError {
                message: format!(
                    "cannot read config file {}: {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrawError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRIZE_OUTPUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrawError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 未提供 [catalog] 時由命令列或預設值補上
        if let Some(catalog) = &self.catalog {
            validation::validate_min_count("catalog.items", catalog.items.len(), MIN_RECORDS)?;
            for item in &catalog.items {
                validation::validate_non_empty_string("catalog.items", item)?;
            }
        }

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
        }

        Ok(())
    }

    pub fn output_path_override(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.path.as_str())
    }
}

impl ConfigProvider for TomlConfig {
    fn records(&self) -> &[String] {
        self.catalog
            .as_ref()
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    fn output_path(&self) -> &str {
        self.output_path_override()
            .unwrap_or(super::DEFAULT_OUTPUT_PATH)
    }

    fn seed(&self) -> Option<u64> {
        self.draw.as_ref().and_then(|d| d.seed)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
