use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::types::TraceListTimeRange;
use crate::domain::explorer::{ColorMode, ForestOptions, Palette, RenderOptions, TreeGuides};
use crate::domain::traces::TraceTableOptions;
use crate::utils::file::expand_path;

use super::cli::CliConfig;
use super::constants::{APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_PREVIEW_CHARS};

// =============================================================================
// File Configuration
// =============================================================================

/// Rendering configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RenderFileConfig {
    pub color: Option<ColorMode>,
    pub guides: Option<TreeGuides>,
    pub show_attributes: Option<bool>,
}

/// Span explorer configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ExplorerFileConfig {
    pub promote_orphans: Option<bool>,
}

/// Trace list configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListFileConfig {
    pub search_preview_chars: Option<usize>,
    pub default_time_range: Option<TraceListTimeRange>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub render: Option<RenderFileConfig>,
    pub explorer: Option<ExplorerFileConfig>,
    pub list: Option<ListFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(render) = other.render {
            let current = self.render.get_or_insert_with(RenderFileConfig::default);
            if render.color.is_some() {
                tracing::trace!(color = ?render.color, "Merging render.color");
                current.color = render.color;
            }
            if render.guides.is_some() {
                tracing::trace!(guides = ?render.guides, "Merging render.guides");
                current.guides = render.guides;
            }
            if render.show_attributes.is_some() {
                tracing::trace!(show_attributes = ?render.show_attributes, "Merging render.show_attributes");
                current.show_attributes = render.show_attributes;
            }
        }

        if let Some(explorer) = other.explorer {
            let current = self.explorer.get_or_insert_with(ExplorerFileConfig::default);
            if explorer.promote_orphans.is_some() {
                tracing::trace!(promote_orphans = ?explorer.promote_orphans, "Merging explorer.promote_orphans");
                current.promote_orphans = explorer.promote_orphans;
            }
        }

        if let Some(list) = other.list {
            let current = self.list.get_or_insert_with(ListFileConfig::default);
            if list.search_preview_chars.is_some() {
                tracing::trace!(search_preview_chars = ?list.search_preview_chars, "Merging list.search_preview_chars");
                current.search_preview_chars = list.search_preview_chars;
            }
            if list.default_time_range.is_some() {
                tracing::trace!(default_time_range = ?list.default_time_range, "Merging list.default_time_range");
                current.default_time_range = list.default_time_range;
            }
        }
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: ColorMode,
    pub guides: TreeGuides,
    pub show_attributes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub promote_orphans: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub search_preview_chars: usize,
    /// `None` shows every trace in the document
    pub default_time_range: Option<TraceListTimeRange>,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub explorer: ExplorerConfig,
    pub list: ListConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.amp-traces/amp-traces.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        Self::load_with_profile(cli, get_profile_config_path().as_deref())
    }

    fn load_with_profile(cli: &CliConfig, profile_path: Option<&Path>) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        // 1. Profile dir, skipped when absent
        if let Some(profile_path) = profile_path
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        // 2. CLI-specified path OR local directory
        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        // 3. Extract file config values with defaults
        let file_render = file_config.render.unwrap_or_default();
        let file_explorer = file_config.explorer.unwrap_or_default();
        let file_list = file_config.list.unwrap_or_default();

        // 4. Layer configs: defaults -> file config -> CLI/env overrides
        let render = RenderConfig {
            color: cli.color.or(file_render.color).unwrap_or_default(),
            guides: cli.guides.or(file_render.guides).unwrap_or_default(),
            // --no-attributes only ever hides
            show_attributes: !cli.no_attributes && file_render.show_attributes.unwrap_or(true),
        };

        let explorer = ExplorerConfig {
            promote_orphans: cli.promote_orphans || file_explorer.promote_orphans.unwrap_or(false),
        };

        let list = ListConfig {
            search_preview_chars: file_list
                .search_preview_chars
                .unwrap_or(DEFAULT_PREVIEW_CHARS),
            default_time_range: file_list.default_time_range,
        };

        let config = Self {
            render,
            explorer,
            list,
        };
        config.validate()?;

        tracing::debug!(
            color = config.render.color.as_str(),
            guides = config.render.guides.as_str(),
            show_attributes = config.render.show_attributes,
            promote_orphans = config.explorer.promote_orphans,
            search_preview_chars = config.list.search_preview_chars,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.list.search_preview_chars == 0 {
            anyhow::bail!("Configuration error: list.search_preview_chars must be greater than 0");
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.render.color)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            guides: self.render.guides,
            palette: self.palette(),
            show_attributes: self.render.show_attributes,
        }
    }

    pub fn forest_options(&self) -> ForestOptions {
        ForestOptions {
            promote_orphans: self.explorer.promote_orphans,
        }
    }

    pub fn table_options(&self) -> TraceTableOptions {
        TraceTableOptions {
            preview_chars: self.list.search_preview_chars,
            palette: self.palette(),
        }
    }
}

/// Get the profile config path (~/.amp-traces/amp-traces.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}
