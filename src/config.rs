use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

use crate::api::parse_base_url;
use crate::posts::{Category, CategoryFilter, SortBy};

/// Environment override for the API base URL
pub const API_BASE_ENV: &str = "VOY_API_BASE";

#[derive(Parser, Debug)]
#[command(name = "voy", about = "Community feedback board")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the posts API, e.g. http://localhost:8000/api
    #[arg(long)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the dashboard
    List {
        #[arg(long, value_enum, default_value_t = SortBy::Recent)]
        sort: SortBy,

        /// "all" or a category name
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Show moderation controls
        #[arg(long)]
        moderation: bool,
    },

    /// Share a voice
    Submit {
        #[arg(short, long)]
        category: Option<Category>,

        message: String,
    },

    /// Upvote a post, then show the refreshed dashboard
    Upvote {
        id: i64,

        #[arg(long, value_enum, default_value_t = SortBy::Recent)]
        sort: SortBy,

        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },

    /// Show community analytics
    Analytics,

    /// List the categories a voice can be filed under
    Categories,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout; none by default
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        Self::load_with_env(cli, std::env::var(API_BASE_ENV).ok())
    }

    /// Precedence: defaults, then file, then env, then CLI
    pub fn load_with_env(cli: &Cli, env_base: Option<String>) -> anyhow::Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("config.toml"));

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("parsing {}", config_path.display()))?
        } else {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        };

        if let Some(base) = env_base {
            config.api.base_url = base;
        }
        if let Some(ref base) = cli.api_base {
            config.api.base_url = base.clone();
        }

        config.api.base_url = parse_base_url(&config.api.base_url)?;

        Ok(config)
    }

    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".voy")
    }
}
