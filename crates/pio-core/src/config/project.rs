//! Public read API over a merged project configuration
//!
//! [`ProjectConfig`] is built once, atomically: either the root document and
//! every `extra_configs` entry load and merge, or construction fails and no
//! instance exists. Reads never mutate it; interpolation runs on each read.

use pio_fs::NormalizedPath;
use pio_ini::{Document, Value};
use serde_json::Value as JsonValue;
use std::str::FromStr;

use super::envs::{self, section_for_env};
use super::interpolate::Interpolator;
use super::merge::MergedConfig;
use super::source::{DocumentSource, FsSource, NoSource, load_document};
use super::values::multi_values;
use crate::env::{EnvProvider, ProcessEnv};
use crate::{Error, Result};

/// Which section an `items`/`options` call reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// A section by its full name
    Section(&'a str),
    /// An environment by its bare name, i.e. section `env:<name>`
    Env(&'a str),
}

impl<'a> Selector<'a> {
    /// Build a selector from optional arguments; exactly one must be given.
    pub fn from_args(section: Option<&'a str>, env: Option<&'a str>) -> Result<Self> {
        match (section, env) {
            (Some(section), None) => Ok(Self::Section(section)),
            (None, Some(env)) => Ok(Self::Env(env)),
            _ => Err(Error::AmbiguousSelector),
        }
    }

    /// Full section name this selector refers to.
    pub fn section_name(&self) -> String {
        match self {
            Self::Section(name) => (*name).to_string(),
            Self::Env(env) => section_for_env(env),
        }
    }
}

/// Builder for [`ProjectConfig`] with injected capabilities.
#[derive(Default)]
pub struct ProjectConfigBuilder {
    source: Option<Box<dyn DocumentSource>>,
    env: Option<Box<dyn EnvProvider>>,
}

impl ProjectConfigBuilder {
    /// Use `source` to resolve `extra_configs` entries.
    pub fn with_source(mut self, source: impl DocumentSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Use `env` for `${sysenv.NAME}` lookups.
    pub fn with_env(mut self, env: impl EnvProvider + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Load the root document at `path`.
    ///
    /// Without an explicit source, `extra_configs` entries are read from
    /// disk relative to the root document's directory.
    pub fn load(self, path: impl Into<NormalizedPath>) -> Result<ProjectConfig> {
        let path = path.into();
        let root = load_document(&path)?;
        let source: Box<dyn DocumentSource> = match self.source {
            Some(source) => source,
            None => Box::new(FsSource::for_root(&path)),
        };
        Self::assemble(Some(path), root, source.as_ref(), self.env)
    }

    /// Build from an already parsed root document.
    ///
    /// Without an explicit source, any `extra_configs` entry is missing.
    pub fn build(self, root: Document) -> Result<ProjectConfig> {
        let source = self.source.unwrap_or_else(|| Box::new(NoSource));
        Self::assemble(None, root, source.as_ref(), self.env)
    }

    /// Parse `text` as the root document and build from it.
    pub fn parse(self, text: &str) -> Result<ProjectConfig> {
        let root = Document::parse(text)?;
        self.build(root)
    }

    fn assemble(
        path: Option<NormalizedPath>,
        root: Document,
        source: &dyn DocumentSource,
        env: Option<Box<dyn EnvProvider>>,
    ) -> Result<ProjectConfig> {
        let merged = MergedConfig::build(root, source)?;
        tracing::debug!(
            path = ?path.as_ref().map(NormalizedPath::as_str),
            sections = merged.sections().len(),
            "Built project configuration"
        );
        Ok(ProjectConfig {
            path,
            merged,
            env: env.unwrap_or_else(|| Box::new(ProcessEnv)),
        })
    }
}

/// Merged, lazily interpolated project configuration.
///
/// # Example
///
/// ```
/// use pio_core::ProjectConfig;
///
/// let config: ProjectConfig = "
/// [platformio]
/// env_default = release
///
/// [common]
/// flags = -Os
///
/// [env:release]
/// build_flags = ${common.flags} -DNDEBUG
/// ".parse().unwrap();
///
/// assert_eq!(config.envs(), vec!["release"]);
/// assert_eq!(config.get("env:release", "build_flags").unwrap(), "-Os -DNDEBUG");
/// ```
pub struct ProjectConfig {
    path: Option<NormalizedPath>,
    merged: MergedConfig,
    env: Box<dyn EnvProvider>,
}

impl ProjectConfig {
    /// Load `path` and its `extra_configs` from disk, reading the process
    /// environment for `${sysenv.NAME}`.
    pub fn load(path: impl Into<NormalizedPath>) -> Result<Self> {
        Self::builder().load(path)
    }

    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    /// Root document path, when loaded from disk.
    pub fn path(&self) -> Option<&NormalizedPath> {
        self.path.as_ref()
    }

    /// The underlying merged structure, uninterpolated.
    pub fn merged(&self) -> &MergedConfig {
        &self.merged
    }

    /// Section names in merged order.
    pub fn sections(&self) -> Vec<String> {
        self.merged.section_names().map(str::to_string).collect()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.merged.section(section).is_some()
    }

    pub fn has_option(&self, section: &str, option: &str) -> bool {
        self.merged.get(section, option).is_some()
    }

    /// Resolved value of `section.option`.
    ///
    /// List values are joined with newlines; use [`get_list`](Self::get_list)
    /// or [`get_value`](Self::get_value) to keep the elements apart.
    pub fn get(&self, section: &str, option: &str) -> Result<String> {
        Ok(self.get_value(section, option)?.to_string())
    }

    /// Like [`get`](Self::get), but a missing section or option yields
    /// `default` as written, without interpolation.
    pub fn get_or(&self, section: &str, option: &str, default: &str) -> Result<String> {
        if !self.has_option(section, option) {
            return Ok(default.to_string());
        }
        self.get(section, option)
    }

    /// Resolved value of `section.option`, keeping its scalar/list shape.
    pub fn get_value(&self, section: &str, option: &str) -> Result<Value> {
        self.require_section(section)?;
        if !self.has_option(section, option) {
            return Err(Error::OptionNotFound {
                section: section.to_string(),
                option: option.to_string(),
            });
        }
        self.interpolator().resolve_option(section, option)
    }

    /// Resolved value split into items on newlines and commas.
    pub fn get_list(&self, section: &str, option: &str) -> Result<Vec<String>> {
        Ok(multi_values(&self.get_value(section, option)?))
    }

    /// Resolved entries of one section or environment, in stored order.
    ///
    /// Exactly one of `section` and `env` must be given.
    pub fn items(&self, section: Option<&str>, env: Option<&str>) -> Result<Vec<(String, Value)>> {
        self.items_of(Selector::from_args(section, env)?)
    }

    /// Resolved entries for an explicit [`Selector`].
    pub fn items_of(&self, selector: Selector<'_>) -> Result<Vec<(String, Value)>> {
        let name = selector.section_name();
        let section = self.require_section(&name)?;
        let interpolator = self.interpolator();
        section
            .keys()
            .map(|key| -> Result<(String, Value)> {
                Ok((key.to_string(), interpolator.resolve_option(&name, key)?))
            })
            .collect()
    }

    /// Option names of one section or environment, in stored order.
    pub fn options(&self, section: Option<&str>, env: Option<&str>) -> Result<Vec<String>> {
        self.options_of(Selector::from_args(section, env)?)
    }

    /// Option names for an explicit [`Selector`].
    pub fn options_of(&self, selector: Selector<'_>) -> Result<Vec<String>> {
        let section = self.require_section(&selector.section_name())?;
        Ok(section.keys().map(str::to_string).collect())
    }

    /// Declared environment names, in section order.
    pub fn envs(&self) -> Vec<String> {
        envs::envs(&self.merged)
    }

    /// Default environments in directive order, limited to declared ones.
    pub fn default_envs(&self) -> Vec<String> {
        envs::default_envs(&self.merged)
    }

    /// Check that environments exist.
    ///
    /// Every name in `requested` and every name listed by the
    /// default-environments directive must be declared. Fails when no
    /// environment is declared at all.
    pub fn validate<S: AsRef<str>>(&self, requested: &[S]) -> Result<()> {
        let known = self.envs();
        if known.is_empty() {
            return Err(Error::NoEnvironments);
        }

        let mut unknown: Vec<String> = Vec::new();
        let candidates = requested
            .iter()
            .map(|name| name.as_ref().to_string())
            .chain(envs::declared_default_envs(&self.merged));
        for name in candidates {
            if !known.contains(&name) && !unknown.contains(&name) {
                unknown.push(name);
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(Error::UnknownEnvironments {
                names: unknown,
                known,
            })
        }
    }

    /// Fully resolved configuration as `[[section, [[option, value], ...]], ...]`.
    pub fn to_json(&self) -> Result<JsonValue> {
        let sections = self
            .merged
            .section_names()
            .map(|name| -> Result<(String, Vec<(String, Value)>)> {
                Ok((name.to_string(), self.items_of(Selector::Section(name))?))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(serde_json::to_value(sections)?)
    }

    fn require_section(&self, section: &str) -> Result<&pio_ini::Section> {
        self.merged
            .section(section)
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
            })
    }

    fn interpolator(&self) -> Interpolator<'_> {
        Interpolator::new(&self.merged, self.env.as_ref())
    }
}

impl FromStr for ProjectConfig {
    type Err = Error;

    /// Build from root text alone, with the process environment.
    fn from_str(text: &str) -> Result<Self> {
        Self::builder().parse(text)
    }
}

impl std::fmt::Debug for ProjectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectConfig")
            .field("path", &self.path)
            .field("sections", &self.sections())
            .finish_non_exhaustive()
    }
}
