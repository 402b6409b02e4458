//! Read-only views over a project configuration

use colored::Colorize;
use pio_core::{Error as CoreError, ProjectConfig, Selector, Value};
use pio_fs::NormalizedPath;

use crate::cli::PROJECT_CONF_ENV;
use crate::error::{CliError, Result};

/// Load the project rooted at `path` with the process environment.
pub fn load_project(path: &str) -> Result<ProjectConfig> {
    let path = NormalizedPath::new(path);
    match ProjectConfig::load(path.clone()) {
        Err(CoreError::MissingSource { path: missing }) if missing == path.as_str() => {
            Err(CliError::user(format!(
                "Project configuration '{}' not found. Use --project-conf or set {}.",
                missing, PROJECT_CONF_ENV
            )))
        }
        result => Ok(result?),
    }
}

pub fn run_sections(config: &ProjectConfig) -> Result<()> {
    print_lines(config.sections());
    Ok(())
}

pub fn run_envs(config: &ProjectConfig) -> Result<()> {
    print_lines(config.envs());
    Ok(())
}

pub fn run_default_envs(config: &ProjectConfig) -> Result<()> {
    print_lines(config.default_envs());
    Ok(())
}

/// Print one resolved value, or `default` verbatim when it is missing.
pub fn run_get(
    config: &ProjectConfig,
    section: &str,
    option: &str,
    default: Option<&str>,
) -> Result<()> {
    let value = match default {
        Some(default) => config.get_or(section, option, default)?,
        None => config.get(section, option)?,
    };
    println!("{value}");
    Ok(())
}

pub fn run_items(config: &ProjectConfig, selector: Selector<'_>, json: bool) -> Result<()> {
    let items = config.items_of(selector)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    for (key, value) in &items {
        print_entry(key, value);
    }
    Ok(())
}

pub fn run_options(config: &ProjectConfig, selector: Selector<'_>) -> Result<()> {
    print_lines(config.options_of(selector)?);
    Ok(())
}

/// Print the whole configuration, as INI text or JSON.
pub fn run_dump(config: &ProjectConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.to_json()?)?);
        return Ok(());
    }

    for (index, section) in config.sections().iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", format!("[{section}]").bold());
        for (key, value) in config.items_of(Selector::Section(section.as_str()))? {
            print_entry(&key, &value);
        }
    }
    Ok(())
}

/// Check `envs` and the default environments against the declared ones.
pub fn run_validate(config: &ProjectConfig, envs: &[String]) -> Result<()> {
    config.validate(envs)?;

    let checked = if envs.is_empty() {
        config.default_envs()
    } else {
        envs.to_vec()
    };
    println!(
        "{} {} environment(s) declared",
        "OK".green().bold(),
        config.envs().len()
    );
    for env in checked {
        println!("    {} {}", "+".green(), env);
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn print_entry(key: &str, value: &Value) {
    match value {
        Value::Scalar(text) => println!("{} = {}", key.cyan(), text),
        Value::List(items) => {
            println!("{} =", key.cyan());
            for item in items {
                println!("  {item}");
            }
        }
    }
}
