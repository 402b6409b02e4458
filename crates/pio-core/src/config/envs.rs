//! Environment views over the merged configuration
//!
//! An environment is a section named `env:<NAME>`. Section names are the
//! only stored representation; bare names exist at the API boundary and are
//! translated with [`section_for_env`] and [`env_of_section`].

use super::merge::{MergedConfig, PLATFORMIO_SECTION};
use super::values::multi_values;

/// Section-name prefix marking an environment.
pub const ENV_PREFIX: &str = "env:";

/// Options naming the default environments, in lookup order.
///
/// `default_envs` is preferred; `env_default` is the older spelling.
pub const DEFAULT_ENVS_OPTIONS: [&str; 2] = ["default_envs", "env_default"];

/// Section name for the environment called `env`.
pub fn section_for_env(env: &str) -> String {
    format!("{ENV_PREFIX}{env}")
}

/// Environment name of `section`, if it is an environment section.
pub fn env_of_section(section: &str) -> Option<&str> {
    section.strip_prefix(ENV_PREFIX)
}

/// Declared environments in section order.
pub fn envs(config: &MergedConfig) -> Vec<String> {
    config
        .section_names()
        .filter_map(env_of_section)
        .map(str::to_string)
        .collect()
}

/// Names listed by the default-environments directive, unfiltered.
pub fn declared_default_envs(config: &MergedConfig) -> Vec<String> {
    DEFAULT_ENVS_OPTIONS
        .iter()
        .find_map(|option| config.get(PLATFORMIO_SECTION, option))
        .map(multi_values)
        .unwrap_or_default()
}

/// Default environments in directive order, restricted to declared ones.
///
/// Names that match no environment are dropped without error.
pub fn default_envs(config: &MergedConfig) -> Vec<String> {
    let known = envs(config);
    declared_default_envs(config)
        .into_iter()
        .filter(|name| {
            let declared = known.contains(name);
            if !declared {
                tracing::debug!(env = %name, "Dropping default environment that is not declared");
            }
            declared
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pio_ini::Document;
    use pretty_assertions::assert_eq;

    fn config(text: &str) -> MergedConfig {
        MergedConfig::from_documents([Document::parse(text).unwrap()])
    }

    #[test]
    fn envs_follow_section_order_not_lexical_order() {
        let cfg = config("[env:zeta]\n[common]\n[env:alpha]\n[envy]\n[env:mid]\n");
        assert_eq!(envs(&cfg), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn default_envs_follow_directive_order() {
        let cfg = config("[platformio]\nenv_default = b, a\n[env:a]\n[env:b]\n[env:c]\n");
        assert_eq!(envs(&cfg), vec!["a", "b", "c"]);
        assert_eq!(default_envs(&cfg), vec!["b", "a"]);
    }

    #[test]
    fn default_envs_drop_undeclared_names() {
        let cfg = config("[platformio]\nenv_default =\n  ghost\n  a\n[env:a]\n");
        assert_eq!(default_envs(&cfg), vec!["a"]);
        assert_eq!(declared_default_envs(&cfg), vec!["ghost", "a"]);
    }

    #[test]
    fn default_envs_empty_without_directive() {
        let cfg = config("[platformio]\n[env:a]\n");
        assert!(default_envs(&cfg).is_empty());
        assert!(default_envs(&MergedConfig::default()).is_empty());
    }

    #[test]
    fn default_envs_option_takes_precedence_over_env_default() {
        let cfg = config("[platformio]\nenv_default = a\ndefault_envs = b\n[env:a]\n[env:b]\n");
        assert_eq!(default_envs(&cfg), vec!["b"]);
    }

    #[test]
    fn env_name_translation() {
        assert_eq!(section_for_env("uno"), "env:uno");
        assert_eq!(env_of_section("env:uno"), Some("uno"));
        assert_eq!(env_of_section("common"), None);
    }
}
