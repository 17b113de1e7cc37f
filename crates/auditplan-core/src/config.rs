//! Configuration management for auditplan
//!
//! Repository-level settings: which template catalog to use, the team size
//! bounds the input form enforces, and report layout defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{AuditPlanError, CatalogKind, Result};

/// Directory holding the config file, relative to the repository root
pub const CONFIG_DIR: &str = ".auditplan";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Repository-level auditplan configuration
///
/// Loaded from `.auditplan/config.toml` in the repo root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditPlanConfig {
    /// Sector template catalog to draw plans from
    #[serde(default)]
    pub catalog: CatalogKind,

    /// Team size bounds
    #[serde(default)]
    pub team: TeamConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Team size bounds applied by the input form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    #[serde(default = "default_min_team_size")]
    pub min_size: u32,

    #[serde(default = "default_max_team_size")]
    pub max_size: u32,

    /// Used when no team size is given
    #[serde(default = "default_team_size")]
    pub default_size: u32,
}

/// Report layout and output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// First line of the title block
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub page_size: PageSize,

    /// Page margin in points, applied on all four sides
    #[serde(default = "default_margin")]
    pub margin: f32,
}

/// Supported paper sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Width and height in points
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            Self::Letter => (612.0, 792.0),
            Self::A4 => (595.28, 841.89),
        }
    }
}

// Default value providers
fn default_min_team_size() -> u32 {
    1
}

fn default_max_team_size() -> u32 {
    20
}

fn default_team_size() -> u32 {
    5
}

fn default_title() -> String {
    "Financial Audit Plan".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_margin() -> f32 {
    50.0
}

impl AuditPlanConfig {
    /// Path of the config file for a repository root
    pub fn path_in(repo_root: &Path) -> PathBuf {
        repo_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.auditplan/config.toml` or use defaults
    pub fn load_or_default(repo_root: &Path) -> Result<Self> {
        let config_path = Self::path_in(repo_root);

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            debug!("No config at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            AuditPlanError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.validate()?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Write default configuration to `.auditplan/config.toml`
    pub fn write_default(repo_root: &Path) -> Result<PathBuf> {
        let config_dir = repo_root.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(&Self::default())
            .map_err(|e| AuditPlanError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Reject settings no report could be produced with
    pub fn validate(&self) -> Result<()> {
        let team = &self.team;
        if team.min_size == 0 {
            return Err(AuditPlanError::Config(
                "team.min_size must be at least 1".to_string(),
            ));
        }
        if team.min_size > team.max_size {
            return Err(AuditPlanError::Config(format!(
                "team.min_size ({}) exceeds team.max_size ({})",
                team.min_size, team.max_size
            )));
        }
        if !(team.min_size..=team.max_size).contains(&team.default_size) {
            return Err(AuditPlanError::Config(format!(
                "team.default_size ({}) is outside {}..={}",
                team.default_size, team.min_size, team.max_size
            )));
        }

        let (width, height) = self.report.page_size.dimensions();
        let margin = self.report.margin;
        if !margin.is_finite() || margin < 0.0 || margin * 2.0 >= width.min(height) {
            return Err(AuditPlanError::Config(format!(
                "report.margin ({}) leaves no room on the page",
                margin
            )));
        }
        Ok(())
    }
}

impl TeamConfig {
    /// Clamp a requested team size into the configured range
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(self.min_size, self.max_size)
    }
}

impl Default for AuditPlanConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogKind::default(),
            team: TeamConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            min_size: default_min_team_size(),
            max_size: default_max_team_size(),
            default_size: default_team_size(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output_dir: default_output_dir(),
            page_size: PageSize::default(),
            margin: default_margin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditPlanConfig::default();
        assert_eq!(config.catalog, CatalogKind::Compliance);
        assert_eq!(config.team.min_size, 1);
        assert_eq!(config.team.max_size, 20);
        assert_eq!(config.team.default_size, 5);
        assert_eq!(config.report.title, "Financial Audit Plan");
        assert_eq!(config.report.page_size, PageSize::Letter);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AuditPlanConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, AuditPlanConfig::default());
    }

    #[test]
    fn test_write_default_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = AuditPlanConfig::write_default(dir.path()).unwrap();
        assert!(path.ends_with(".auditplan/config.toml"));

        let config = AuditPlanConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, AuditPlanConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "catalog = \"topical\"\n\n[report]\npage_size = \"a4\"\n",
        )
        .unwrap();

        let config = AuditPlanConfig::load(&path).unwrap();
        assert_eq!(config.catalog, CatalogKind::Topical);
        assert_eq!(config.report.page_size, PageSize::A4);
        assert_eq!(config.report.margin, 50.0);
        assert_eq!(config.team.max_size, 20);
    }

    #[test]
    fn test_invalid_team_bounds_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[team]\nmin_size = 10\nmax_size = 5\n").unwrap();

        let err = AuditPlanConfig::load(&path).unwrap_err();
        assert!(matches!(err, AuditPlanError::Config(_)));
    }

    #[test]
    fn test_non_finite_margin_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for value in ["nan", "inf", "-1.0", "400.0"] {
            let path = dir.path().join("margin.toml");
            std::fs::write(&path, format!("[report]\nmargin = {}\n", value)).unwrap();

            assert!(
                matches!(AuditPlanConfig::load(&path), Err(AuditPlanError::Config(_))),
                "margin = {value}"
            );
        }
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "catalog = [").unwrap();

        assert!(matches!(
            AuditPlanConfig::load(&path),
            Err(AuditPlanError::Config(_))
        ));
    }

    #[test]
    fn test_clamp() {
        let team = TeamConfig::default();
        assert_eq!(team.clamp(0), 1);
        assert_eq!(team.clamp(7), 7);
        assert_eq!(team.clamp(99), 20);
    }
}
