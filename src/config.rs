use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::parser::{LinkReference, ReferenceMap};

/// What `render` produces.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Html,
    /// Indented node-per-line dump of the document tree
    Tree,
    /// The document tree as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "tree" | "ast" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendering extensions beyond CommonMark.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// Render soft line breaks as `<br />`.
    pub hard_line_breaks: bool,
}

/// Link target as written in the `[references]` table: either a bare
/// destination or a table with `url` and `title`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ReferenceEntry {
    Url(String),
    Full {
        url: String,
        #[serde(default)]
        title: String,
    },
}

impl From<&ReferenceEntry> for LinkReference {
    fn from(entry: &ReferenceEntry) -> Self {
        match entry {
            ReferenceEntry::Url(url) => LinkReference::new(url.as_str()),
            ReferenceEntry::Full { url, title } => {
                LinkReference::new(url.as_str()).with_title(title.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub line_ending: Option<LineEnding>,
    pub extensions: Extensions,
    /// Targets for reference-style links, keyed by label.
    pub references: BTreeMap<String, ReferenceEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            line_ending: Some(LineEnding::Auto),
            extensions: Extensions::default(),
            references: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn reference_map(&self) -> ReferenceMap {
        self.references
            .iter()
            .map(|(label, entry)| (label, LinkReference::from(entry)))
            .collect()
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = Some(ending);
        self
    }

    pub fn hard_line_breaks(mut self, enabled: bool) -> Self {
        self.config.extensions.hard_line_breaks = enabled;
        self
    }

    pub fn reference(mut self, label: &str, url: &str) -> Self {
        self.config
            .references
            .insert(label.to_string(), ReferenceEntry::Url(url.to_string()));
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    Auto,
    Lf,
    Crlf,
}

const CANDIDATE_NAMES: &[&str] = &[".markee.toml", "markee.toml"];

fn parse_config_str(s: &str, path: &Path) -> Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })
}

fn read_config(path: &Path) -> Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("markee").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    let p = dirs::config_dir()?.join("markee").join("config.toml");
    p.is_file().then_some(p)
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .markee.toml, markee.toml
/// 3) $XDG_CONFIG_HOME/markee/config.toml or the platform config directory
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
