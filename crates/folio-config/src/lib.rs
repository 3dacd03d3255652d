//! Site configuration loading for Folio.
//!
//! Parses `folio.toml` or `folio.json` with serde and provides auto-discovery
//! of config files in parent directories. The result is a raw [`SiteConfig`]:
//! the sidebar is kept exactly as declared and structural checks are left to
//! `folio-nav`.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `docs.source_dir`

mod expand;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config filenames searched for during discovery, in order of preference.
const CONFIG_FILENAMES: [&str; 2] = ["folio.toml", "folio.json"];

/// Default markdown source directory, relative to the config file.
const DEFAULT_SOURCE_DIR: &str = "docs";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Site configuration as declared in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Optional site description.
    pub description: Option<String>,
    /// Sidebar entries in declaration order.
    pub sidebar: Vec<NavEntry>,
    /// Theme options.
    pub theme: ThemeConfig,
    /// Documentation source settings (paths are relative strings from the file).
    docs: DocsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// One sidebar entry, exactly as written in the config file.
///
/// Nothing is enforced here: an entry may carry `link`, `items`, both, or
/// neither. `folio_nav::validate` decides which shapes are legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavEntry {
    /// Display label.
    #[serde(default)]
    pub text: String,
    /// Route this entry links to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Nested entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavEntry>>,
}

impl NavEntry {
    /// Create a leaf entry.
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            items: None,
        }
    }

    /// Create a group entry without a landing page.
    pub fn group(text: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            items: Some(items),
        }
    }

    /// Attach a link, turning a group into a clickable group header.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Palette used by the renderer.
    #[serde(rename = "colorScheme", alias = "color_scheme")]
    pub color_scheme: ColorScheme,
}

/// Renderer palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark palette.
    Dark,
    /// Light palette.
    #[default]
    Light,
}

impl ColorScheme {
    /// Name as written in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Raw docs configuration as parsed from the file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Config file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `folio.toml`
    Toml,
    /// `folio.json`
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            Self::Json
        } else {
            Self::Toml
        }
    }
}

/// Error loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Explicit config file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No config file in the start directory or any parent.
    #[error("No folio.toml or folio.json found in {} or its parents", .0.display())]
    NotDiscovered(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl SiteConfig {
    /// Build a config in code, with sources resolved against the current directory.
    pub fn new(title: impl Into<String>, sidebar: Vec<NavEntry>) -> Self {
        Self {
            title: title.into(),
            sidebar,
            ..Self::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the theme palette.
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.theme.color_scheme = color_scheme;
        self
    }

    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// the current directory and its parents for `folio.toml`, then
    /// `folio.json`.
    ///
    /// CLI settings are applied after loading and path resolution.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, LoadError> {
        let path = match config_path {
            Some(path) if !path.exists() => return Err(LoadError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir()?;
                discover_config(&cwd).ok_or_else(|| LoadError::NotDiscovered(cwd))?
            }
        };

        let mut config = Self::load_from_file(&path)?;
        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        Ok(config)
    }

    /// Parse a TOML document. Paths resolve against the current directory.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Self::parse(content, ConfigFormat::Toml)
    }

    /// Parse a JSON document. Paths resolve against the current directory.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Self::parse(content, ConfigFormat::Json)
    }

    fn parse(content: &str, format: ConfigFormat) -> Result<Self, LoadError> {
        let mut config = Self::deserialize_as(content, format)?;
        config.expand_env_vars()?;
        config.resolve_paths(Path::new("."));
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let format = ConfigFormat::from_path(path);
        let mut config = Self::deserialize_as(&content, format)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            ?format,
            entries = config.sidebar.len(),
            "Loaded site configuration"
        );

        Ok(config)
    }

    fn deserialize_as(content: &str, format: ConfigFormat) -> Result<Self, LoadError> {
        Ok(match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: String::new(),
            description: None,
            sidebar: Vec::new(),
            theme: ThemeConfig::default(),
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join(DEFAULT_SOURCE_DIR),
            },
            config_path: None,
        }
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), LoadError> {
        self.title = expand::expand_env(&self.title, "title")?;
        expand::expand_env_opt(&mut self.description, "description")?;
        expand::expand_env_opt(&mut self.docs.source_dir, "docs.source_dir")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self.docs.source_dir.as_deref().unwrap_or(DEFAULT_SOURCE_DIR);
        self.docs_resolved = DocsConfig {
            source_dir: config_dir.join(source_dir),
        };
    }
}

/// Search `start` and its parents for a config file.
///
/// Within one directory `folio.toml` wins over `folio.json`.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILENAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}
