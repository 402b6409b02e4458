//! `${section.option}` and `${sysenv.NAME}` resolution
//!
//! Resolution is pull-based: nothing is precomputed or cached, and each
//! top-level call starts with an empty set of options being resolved. An
//! option met again while it is still being resolved is a circular reference.

use pio_ini::Value;
use regex::Regex;
use std::sync::LazyLock;

use super::merge::MergedConfig;
use crate::env::EnvProvider;
use crate::{Error, Result};

/// Pseudo-section mapping to environment variables.
pub const SYSENV_NAMESPACE: &str = "sysenv";

/// `${SECTION.OPTION}`; the section part stops at the first dot.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^.}]+)\.([^}]+)\}").expect("token pattern is valid"));

/// Options currently being resolved, outermost first.
type Visiting = Vec<(String, String)>;

/// Resolves interpolation tokens against a merged configuration.
pub struct Interpolator<'a> {
    config: &'a MergedConfig,
    env: &'a dyn EnvProvider,
}

impl<'a> Interpolator<'a> {
    pub fn new(config: &'a MergedConfig, env: &'a dyn EnvProvider) -> Self {
        Self { config, env }
    }

    /// Resolve the stored value of `section.option`.
    ///
    /// Lists are resolved element by element.
    pub fn resolve_option(&self, section: &str, option: &str) -> Result<Value> {
        let value = self.lookup(section, option)?;
        let mut visiting = vec![(section.to_string(), option.to_string())];
        value.try_map(|template| self.expand(template, &mut visiting))
    }

    /// Resolve a value that does not live in the configuration.
    pub fn resolve_value(&self, value: &Value) -> Result<Value> {
        let mut visiting = Visiting::new();
        value.try_map(|template| self.expand(template, &mut visiting))
    }

    /// Resolve a single template string.
    pub fn resolve_str(&self, template: &str) -> Result<String> {
        self.expand(template, &mut Visiting::new())
    }

    fn lookup(&self, section: &str, option: &str) -> Result<&'a Value> {
        self.config
            .get(section, option)
            .ok_or_else(|| Error::UndefinedReference {
                section: section.to_string(),
                option: option.to_string(),
            })
    }

    fn expand(&self, template: &str, visiting: &mut Visiting) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut last = 0;

        for caps in TOKEN_PATTERN.captures_iter(template) {
            let token = caps.get_match();
            let (_, [section, option]) = caps.extract();
            out.push_str(&template[last..token.start()]);
            out.push_str(&self.reference(section, option, visiting)?);
            last = token.end();
        }

        out.push_str(&template[last..]);
        Ok(out)
    }

    fn reference(&self, section: &str, option: &str, visiting: &mut Visiting) -> Result<String> {
        if section == SYSENV_NAMESPACE {
            let value = self.env.var(option).unwrap_or_default();
            tracing::trace!(name = option, "Resolved sysenv reference");
            return Ok(value);
        }

        let value = self.lookup(section, option)?;
        if visiting.iter().any(|(s, o)| s == section && o == option) {
            let mut chain: Vec<String> = visiting.iter().map(|(s, o)| format!("{s}.{o}")).collect();
            chain.push(format!("{section}.{option}"));
            return Err(Error::CircularReference { chain });
        }

        visiting.push((section.to_string(), option.to_string()));
        let resolved = value.try_map(|template| self.expand(template, visiting));
        visiting.pop();

        tracing::trace!(section, option, "Resolved option reference");
        // A referenced list is spliced in one element per line.
        Ok(resolved?.to_string())
    }
}
