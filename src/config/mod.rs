pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_OUTPUT_PATH: &str = "results.txt";

/// Prize pool used when neither the command line nor a config file lists any.
pub const DEFAULT_RECORDS: [&str; 5] = [
    "1 Constructor 20",
    "2 Robot 15",
    "3 Doll 30",
    "4 Car 25",
    "5 Puzzle 10",
];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "prize-draw")]
#[command(about = "Draw prizes from a weighted pool and save the results")]
pub struct CliConfig {
    /// Prize records, each "<id> <name> <weight>" (quote each record)
    pub records: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// File the draw results are written to
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the prize pool and odds without drawing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列、設定檔與預設值
    pub fn resolve(&self) -> Result<DrawSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Ok(DrawSettings::merge(
            &self.records,
            self.output.as_deref(),
            self.seed,
            file_config.as_ref(),
        ))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSettings {
    pub records: Vec<String>,
    pub output_path: String,
    pub seed: Option<u64>,
}

impl DrawSettings {
    /// Explicit values win over the config file, which wins over the defaults.
    pub fn merge(
        records: &[String],
        output_path: Option<&str>,
        seed: Option<u64>,
        file_config: Option<&TomlConfig>,
    ) -> Self {
        let file_records = file_config.map(|c| c.records()).unwrap_or(&[]);
        let records = if !records.is_empty() {
            records.to_vec()
        } else if !file_records.is_empty() {
            file_records.to_vec()
        } else {
            DEFAULT_RECORDS.iter().map(|r| r.to_string()).collect()
        };

        let output_path = output_path
            .or_else(|| file_config.and_then(|c| c.output_path_override()))
            .unwrap_or(DEFAULT_OUTPUT_PATH)
            .to_string();

        let seed = seed.or_else(|| file_config.and_then(|c| c.seed()));

        Self {
            records,
            output_path,
            seed,
        }
    }
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self::merge(&[], None, None, None)
    }
}

impl ConfigProvider for DrawSettings {
    fn records(&self) -> &[String] {
        &self.records
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for DrawSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_min_count(
            "records",
            self.records.len(),
            crate::core::catalog::MIN_RECORDS,
        )?;
        for record in &self.records {
            validation::validate_non_empty_string("records", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[catalog]
items = ["7 Kite 5", "8 Ball 5", "9 Yoyo 5"]

[output]
path = "from-file.txt"

[draw]
seed = 9
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_without_any_source() {
        let settings = DrawSettings::default();
        assert_eq!(settings.records.len(), 5);
        assert_eq!(settings.output_path, "results.txt");
        assert_eq!(settings.seed, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_config_overrides_defaults() {
        let config = file_config();
        let settings = DrawSettings::merge(&[], None, None, Some(&config));

        assert_eq!(settings.records[0], "7 Kite 5");
        assert_eq!(settings.output_path, "from-file.txt");
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_explicit_values_override_file_config() {
        let config = file_config();
        let records = vec![
            "1 A 1".to_string(),
            "2 B 1".to_string(),
            "3 C 1".to_string(),
        ];
        let settings = DrawSettings::merge(&records, Some("cli.txt"), Some(1), Some(&config));

        assert_eq!(settings.records, records);
        assert_eq!(settings.output_path, "cli.txt");
        assert_eq!(settings.seed, Some(1));
    }

    #[test]
    fn test_file_without_catalog_keeps_cli_or_default_records() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
path = "from-file.txt"
"#,
        )
        .unwrap();

        let settings = DrawSettings::merge(&[], None, None, Some(&config));
        assert_eq!(settings.records.len(), DEFAULT_RECORDS.len());
        assert_eq!(settings.records[0], DEFAULT_RECORDS[0]);
        assert_eq!(settings.output_path, "from-file.txt");
        assert!(settings.validate().is_ok());

        let records = vec![
            "1 A 1".to_string(),
            "2 B 1".to_string(),
            "3 C 1".to_string(),
        ];
        let settings = DrawSettings::merge(&records, None, None, Some(&config));
        assert_eq!(settings.records, records);
        assert_eq!(settings.output_path, "from-file.txt");
    }

    #[test]
    fn test_validation_rejects_short_record_list() {
        let records = vec!["1 A 1".to_string(), "2 B 1".to_string()];
        let settings = DrawSettings::merge(&records, None, None, None);
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::parse_from([
            "prize-draw",
            "--output",
            "out.txt",
            "--seed",
            "5",
            "1 A 10",
            "2 B 20",
            "3 C 30",
        ]);

        assert_eq!(cli.records.len(), 3);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.output_path, "out.txt");
        assert_eq!(settings.seed, Some(5));
        assert!(!cli.dry_run);
    }
}
