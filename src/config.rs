use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};
use crate::release::{AssignMode, ReleaseOrder};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "changelog.toml";

/// File name looked up in the user configuration directory.
pub const USER_CONFIG_FILE: &str = ".changelog.toml";

/// Represents the complete configuration for git-changelog.
///
/// Contains the recognition patterns and the output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub patterns: PatternsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_headline() -> String {
    r"#[0-9]{4,5}".to_string()
}

fn default_release_tag() -> String {
    r"^v([0-9]+\.[0-9]+\.[0-9]+)$".to_string()
}

fn default_release_branch() -> String {
    r"^refs/remotes/[A-Za-z0-9_]+/release/[0-9]+\.[0-9]+\.x$".to_string()
}

fn default_main_branch() -> String {
    "refs/heads/master".to_string()
}

fn default_fence() -> String {
    "changelog".to_string()
}

fn default_start_ref() -> String {
    "HEAD".to_string()
}

/// Source text of the recognition patterns.
///
/// `release_tag` must contain one capture group holding the release label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PatternsConfig {
    #[serde(default = "default_headline")]
    pub headline: String,

    #[serde(default = "default_release_tag")]
    pub release_tag: String,

    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    #[serde(default = "default_main_branch")]
    pub main_branch: String,

    /// Info string of the fenced block holding entries (```` ```changelog ````)
    #[serde(default = "default_fence")]
    pub fence: String,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        PatternsConfig {
            headline: default_headline(),
            release_tag: default_release_tag(),
            release_branch: default_release_branch(),
            main_branch: default_main_branch(),
            fence: default_fence(),
        }
    }
}

impl PatternsConfig {
    /// Compiles the pattern sources into a [Patterns] object.
    ///
    /// # Returns
    /// * `Ok(Patterns)` - All patterns compiled
    /// * `Err(ChangelogError::Config)` - A pattern is not a valid regex, or the
    ///   release tag pattern has no capture group
    pub fn compile(&self) -> Result<Patterns> {
        let headline = compile_pattern("headline", &self.headline)?;
        let release_tag = compile_pattern("release_tag", &self.release_tag)?;
        let release_branch = compile_pattern("release_branch", &self.release_branch)?;

        if release_tag.captures_len() < 2 {
            return Err(ChangelogError::config(format!(
                "Pattern 'release_tag' must capture the release label: {}",
                self.release_tag
            )));
        }
        if self.fence.trim().is_empty() {
            return Err(ChangelogError::config("Fence info string must not be empty"));
        }

        Ok(Patterns {
            headline,
            release_tag,
            release_branch,
            main_branch: self.main_branch.clone(),
            fence_open: format!("```{}", self.fence.trim()),
            fence_close: "```".to_string(),
        })
    }
}

fn compile_pattern(name: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| {
        ChangelogError::config(format!("Invalid '{}' pattern '{}': {}", name, source, e))
    })
}

/// Compiled recognition patterns.
///
/// Built once at start-up and passed by reference to the extractor, the tag
/// map builder and the branch filter. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub headline: Regex,
    pub release_tag: Regex,
    pub release_branch: Regex,
    pub main_branch: String,
    pub fence_open: String,
    pub fence_close: String,
}

/// Output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub mode: AssignMode,

    #[serde(default)]
    pub release_order: ReleaseOrder,

    #[serde(default = "default_start_ref")]
    pub start_ref: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            mode: AssignMode::default(),
            release_order: ReleaseOrder::default(),
            start_ref: default_start_ref(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        read_config_file(Path::new(LOCAL_CONFIG_FILE))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            read_config_file(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ChangelogError::config(e.to_string()))
}

fn read_config_file(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "loading configuration");
    fs::read_to_string(path)
        .map_err(|e| ChangelogError::config(format!("Cannot read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_compile() {
        let patterns = PatternsConfig::default().compile().unwrap();
        assert!(patterns.headline.is_match("Merge pull request #5555 from x/y"));
        assert_eq!(patterns.fence_open, "```changelog");
        assert_eq!(patterns.fence_close, "```");
        assert_eq!(patterns.main_branch, "refs/heads/master");
    }

    #[test]
    fn test_invalid_regex_is_config_error() {
        let config = PatternsConfig {
            headline: "#(".to_string(),
            ..PatternsConfig::default()
        };
        let err = config.compile().unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
        assert!(err.to_string().contains("headline"));
    }

    #[test]
    fn test_release_tag_requires_capture_group() {
        let config = PatternsConfig {
            release_tag: r"^v\d+\.\d+\.\d+$".to_string(),
            ..PatternsConfig::default()
        };
        assert!(config.compile().is_err());
    }

    #[test]
    fn test_custom_fence() {
        let config = PatternsConfig {
            fence: " release-note ".to_string(),
            ..PatternsConfig::default()
        };
        let patterns = config.compile().unwrap();
        assert_eq!(patterns.fence_open, "```release-note");
    }

    #[test]
    fn test_empty_fence_rejected() {
        let config = PatternsConfig {
            fence: "  ".to_string(),
            ..PatternsConfig::default()
        };
        assert!(config.compile().is_err());
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"
[output]
mode = "current"
"#,
        )
        .unwrap();
        assert_eq!(config.output.mode, AssignMode::CurrentRelease);
        assert_eq!(config.output.release_order, ReleaseOrder::Lexicographic);
        assert_eq!(config.output.start_ref, "HEAD");
        assert_eq!(config.patterns, PatternsConfig::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[output\nmode = ").unwrap_err();
        assert!(matches!(err, ChangelogError::Config(_)));
    }

    #[test]
    fn test_parse_unknown_mode() {
        assert!(parse_config("[output]\nmode = \"sometimes\"\n").is_err());
    }
}
