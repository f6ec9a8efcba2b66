//! CLI command definitions, routing, and tracing setup.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use profilegen_core::save_catalog;
use profilegen_lookup::{Lookup, LookupOptions};
use profilegen_shared::{
    AppConfig, RenderConfig, init_config, load_config, load_settings_from, save_settings_to,
};
use tracing::info;

use crate::console::Console;
use crate::shell::{Shell, ShellPaths};
use crate::spinner;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// profilegen: answer a few questions, get a GitHub profile README.
#[derive(Parser)]
#[command(
    name = "profilegen",
    version,
    about = "Interactive generator for GitHub profile README files.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of ~/.profilegen/profilegen.toml.
    #[arg(long, env = "PROFILEGEN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Open the interactive menu.
    Menu,

    /// Run the interview once and write the README.
    Generate {
        /// Write here instead of the configured output file.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Don't check the username against the GitHub API.
        #[arg(long)]
        offline: bool,
    },

    /// Render settings management.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Icon catalog management.
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Configuration management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Settings subcommands.
#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Print the current settings as JSON.
    Show,
    /// Restore default settings.
    Reset,
    /// Print the settings file location.
    Path,
}

/// Catalog subcommands.
#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// Download the Devicon catalog and save it locally.
    Refresh,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout
/// belongs to the prompts.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "profilegen=warn",
        1 => "profilegen=info",
        2 => "profilegen=debug",
        _ => "profilegen=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => profilegen_shared::load_config_from(path)?,
        None => load_config()?,
    };

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => cmd_menu(&config).await,
        Command::Generate { out, offline } => cmd_generate(&config, out, offline).await,
        Command::Settings { action } => match action {
            SettingsAction::Show => cmd_settings_show(&config),
            SettingsAction::Reset => cmd_settings_reset(&config),
            SettingsAction::Path => cmd_settings_path(&config),
        },
        Command::Catalog { action } => match action {
            CatalogAction::Refresh => cmd_catalog_refresh(&config).await,
        },
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn shell_paths(config: &AppConfig) -> Result<ShellPaths> {
    Ok(ShellPaths {
        output_file: PathBuf::from(&config.paths.output_file),
        catalog_file: PathBuf::from(&config.paths.catalog_file),
        settings_file: config.settings_path()?,
    })
}

fn load_render_settings(config: &AppConfig) -> Result<RenderConfig> {
    let path = config.settings_path()?;
    load_settings_from(&path).wrap_err_with(|| format!("loading settings from {}", path.display()))
}

async fn cmd_menu(config: &AppConfig) -> Result<()> {
    let paths = shell_paths(config)?;
    let settings = load_render_settings(config)?;
    let lookup = Lookup::new(LookupOptions::from(&config.remote))?;

    info!(settings = %paths.settings_file.display(), "starting menu");

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut shell = Shell::new(
        console,
        &lookup,
        paths,
        settings,
        config.remote.verify_username,
    );
    shell.run().await
}

async fn cmd_generate(config: &AppConfig, out: Option<PathBuf>, offline: bool) -> Result<()> {
    let mut paths = shell_paths(config)?;
    if let Some(out) = out {
        paths.output_file = out;
    }
    let settings = load_render_settings(config)?;
    let lookup = Lookup::new(LookupOptions::from(&config.remote))?;

    let console = Console::new(io::stdin().lock(), io::stdout());
    let verify = config.remote.verify_username && !offline;
    let mut shell = Shell::new(console, &lookup, paths, settings, verify);

    if !shell.generate_once().await? {
        return Err(eyre!("no README was generated"));
    }
    Ok(())
}

fn cmd_settings_show(config: &AppConfig) -> Result<()> {
    let settings = load_render_settings(config)?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn cmd_settings_reset(config: &AppConfig) -> Result<()> {
    let path = config.settings_path()?;
    save_settings_to(&path, &RenderConfig::default())?;
    println!("Settings reset: {}", path.display());
    Ok(())
}

fn cmd_settings_path(config: &AppConfig) -> Result<()> {
    println!("{}", config.settings_path()?.display());
    Ok(())
}

async fn cmd_catalog_refresh(config: &AppConfig) -> Result<()> {
    let lookup = Lookup::new(LookupOptions::from(&config.remote))?;
    let path = PathBuf::from(&config.paths.catalog_file);

    let bar = spinner("Fetching Devicon catalog");
    let fetched = lookup.fetch_catalog().await;
    bar.finish_and_clear();

    let catalog = fetched.wrap_err("could not fetch Devicon data")?;
    save_catalog(&path, &catalog)?;

    println!("✅ Saved {} tools to {}", catalog.len(), path.display());
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
