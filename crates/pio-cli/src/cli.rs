//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};

/// Environment variable naming the project file when `--project-conf` is absent.
pub const PROJECT_CONF_ENV: &str = "PLATFORMIO_PROJECT_CONF";

/// Inspect a PlatformIO project configuration
#[derive(Parser, Debug)]
#[command(name = "pio-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root project file
    #[arg(
        short = 'c',
        long,
        global = true,
        env = PROJECT_CONF_ENV,
        default_value = "platformio.ini"
    )]
    pub project_conf: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Which section `items` and `options` read.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct SelectorArgs {
    /// Full section name, e.g. `common` or `env:uno`
    #[arg(short, long)]
    pub section: Option<String>,

    /// Environment name, e.g. `uno`
    #[arg(short, long)]
    pub env: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List section names in merged order
    Sections,

    /// List declared environments
    Envs,

    /// List default environments
    DefaultEnvs,

    /// Print one resolved value
    ///
    /// Examples:
    ///   pio-config get env:uno build_flags
    ///   pio-config get common debug_flags --default -Os
    Get {
        /// Section name
        section: String,

        /// Option name
        option: String,

        /// Printed as-is when the section or option is missing
        #[arg(long)]
        default: Option<String>,
    },

    /// Print the resolved entries of a section or environment
    Items {
        #[command(flatten)]
        selector: SelectorArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List option names of a section or environment
    Options {
        #[command(flatten)]
        selector: SelectorArgs,
    },

    /// Print the whole resolved configuration
    Dump {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check that environments are declared
    ///
    /// Names given on the command line and names listed by the default
    /// environments directive must all match an `[env:NAME]` section.
    Validate {
        /// Environments to check
        envs: Vec<String>,
    },
}
