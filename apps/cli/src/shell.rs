//! Menu-driven shell.
//!
//! The menu is a small state machine: [`MenuState::Idle`] reads a choice
//! and [`next_state`] decides where to go. Each state's handler returns
//! the state to enter next; [`MenuState::Exit`] ends the loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use color_eyre::eyre::Result;
use profilegen_core::{assemble, load_catalog, save_catalog, write_document};
use profilegen_shared::{ProfileRecord, RenderConfig, ToolCatalog, save_settings_to};
use tracing::{info, warn};

use crate::console::Console;
use crate::interview::collect_profile;
use crate::remote::RemoteLookup;
use crate::settings::{edit_settings, show_settings};
use crate::spinner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuState {
    Idle,
    Collecting,
    Rendering,
    EditingSettings,
    Exit,
}

/// A parsed main-menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Generate,
    EditSettings,
    RefreshCatalog,
    ShowSettings,
    Exit,
    Invalid,
}

impl MenuChoice {
    pub(crate) fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "1" => Self::Generate,
            "2" => Self::EditSettings,
            "3" => Self::RefreshCatalog,
            "4" => Self::ShowSettings,
            "0" | "q" | "quit" | "exit" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Transition out of `Idle` for a menu choice.
///
/// Catalog refresh and settings display run in place, so they stay `Idle`.
pub(crate) fn next_state(choice: MenuChoice) -> MenuState {
    match choice {
        MenuChoice::Generate => MenuState::Collecting,
        MenuChoice::EditSettings => MenuState::EditingSettings,
        MenuChoice::Exit => MenuState::Exit,
        MenuChoice::RefreshCatalog | MenuChoice::ShowSettings | MenuChoice::Invalid => {
            MenuState::Idle
        }
    }
}

/// File locations the shell reads and writes.
#[derive(Debug, Clone)]
pub(crate) struct ShellPaths {
    pub output_file: PathBuf,
    pub catalog_file: PathBuf,
    pub settings_file: PathBuf,
}

pub(crate) struct Shell<'a, R, W, L> {
    console: Console<R, W>,
    remote: &'a L,
    paths: ShellPaths,
    verify_username: bool,
    settings: RenderConfig,
    catalog: Option<ToolCatalog>,
    pending: Option<ProfileRecord>,
}

impl<'a, R, W, L> Shell<'a, R, W, L>
where
    R: BufRead,
    W: Write,
    L: RemoteLookup,
{
    pub(crate) fn new(
        console: Console<R, W>,
        remote: &'a L,
        paths: ShellPaths,
        settings: RenderConfig,
        verify_username: bool,
    ) -> Self {
        Self {
            console,
            remote,
            paths,
            verify_username,
            settings,
            catalog: None,
            pending: None,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub(crate) async fn run(&mut self) -> Result<()> {
        let mut state = MenuState::Idle;
        loop {
            state = match state {
                MenuState::Idle => self.idle().await?,
                MenuState::Collecting => self.collecting().await?,
                MenuState::Rendering => self.rendering()?,
                MenuState::EditingSettings => self.editing_settings()?,
                MenuState::Exit => break,
            };
        }
        self.console.say("Goodbye!")?;
        Ok(())
    }

    /// One interview and render, without the menu.
    pub(crate) async fn generate_once(&mut self) -> Result<bool> {
        if self.collecting().await? != MenuState::Rendering {
            return Ok(false);
        }
        self.rendering()?;
        Ok(true)
    }

    async fn idle(&mut self) -> Result<MenuState> {
        self.console.say("\n=== profilegen ===")?;
        self.console.say("  1) Generate README")?;
        self.console.say("  2) Edit settings")?;
        self.console.say("  3) Refresh icon catalog")?;
        self.console.say("  4) Show settings")?;
        self.console.say("  0) Exit")?;

        let Some(answer) = self.console.ask("Choose an option:")? else {
            return Ok(MenuState::Exit);
        };

        let choice = MenuChoice::parse(&answer);
        match choice {
            MenuChoice::RefreshCatalog => {
                self.refresh_catalog().await?;
            }
            MenuChoice::ShowSettings => {
                show_settings(&mut self.console, &self.settings)?;
            }
            MenuChoice::Invalid => {
                self.console
                    .say(&format!("❌ '{}' is not a menu option.", answer.trim()))?;
            }
            MenuChoice::Generate | MenuChoice::EditSettings | MenuChoice::Exit => {}
        }

        Ok(next_state(choice))
    }

    async fn collecting(&mut self) -> Result<MenuState> {
        if !self.ensure_catalog().await? {
            return Ok(MenuState::Idle);
        }
        let Some(catalog) = self.catalog.as_ref() else {
            return Ok(MenuState::Idle);
        };

        let remote = self.verify_username.then_some(self.remote);
        match collect_profile(&mut self.console, catalog, remote).await? {
            Some(profile) => {
                self.pending = Some(profile);
                Ok(MenuState::Rendering)
            }
            None => {
                self.console.say("Interview cancelled.")?;
                Ok(MenuState::Idle)
            }
        }
    }

    fn rendering(&mut self) -> Result<MenuState> {
        let Some(profile) = self.pending.take() else {
            return Ok(MenuState::Idle);
        };
        let markdown = match &self.catalog {
            Some(catalog) => assemble(&profile, catalog, &self.settings),
            None => assemble(&profile, &ToolCatalog::default(), &self.settings),
        };
        match write_document(&self.paths.output_file, &markdown) {
            Ok(()) => self.console.say(&format!(
                "✅ README written to {}",
                self.paths.output_file.display()
            ))?,
            Err(e) => {
                warn!(error = %e, "could not write README");
                self.console.say(&format!("❌ Could not write README: {e}"))?;
            }
        }
        Ok(MenuState::Idle)
    }

    fn editing_settings(&mut self) -> Result<MenuState> {
        self.settings = edit_settings(&mut self.console, self.settings.clone())?;

        match save_settings_to(&self.paths.settings_file, &self.settings) {
            Ok(()) => self.console.say(&format!(
                "Settings saved to {}",
                self.paths.settings_file.display()
            ))?,
            Err(e) => {
                warn!(error = %e, "could not save settings");
                self.console.say(&format!("❌ Could not save settings: {e}"))?;
            }
        }
        Ok(MenuState::Idle)
    }

    /// Load the catalog from disk, fetching it first if the file is missing.
    /// Returns `false` when no catalog could be obtained.
    async fn ensure_catalog(&mut self) -> Result<bool> {
        if self.catalog.is_some() {
            return Ok(true);
        }

        if self.paths.catalog_file.exists() {
            match load_catalog(&self.paths.catalog_file) {
                Ok(catalog) => {
                    self.catalog = Some(catalog);
                    return Ok(true);
                }
                Err(e) => {
                    warn!(error = %e, "local catalog unreadable, refetching");
                    self.console
                        .say(&format!("Icon catalog is unreadable ({e}), fetching a fresh copy."))?;
                }
            }
        } else {
            self.console.say("Icon catalog not found, fetching it now.")?;
        }

        self.refresh_catalog().await
    }

    async fn refresh_catalog(&mut self) -> Result<bool> {
        let bar = spinner("Fetching Devicon catalog");
        let fetched = self.remote.fetch_catalog().await;
        bar.finish_and_clear();

        let catalog = match fetched {
            Ok(catalog) => catalog,
            Err(e) => {
                self.console
                    .say(&format!("❌ Could not fetch Devicon data: {e}"))?;
                return Ok(false);
            }
        };

        if let Err(e) = save_catalog(&self.paths.catalog_file, &catalog) {
            warn!(error = %e, "could not save catalog");
            self.console.say(&format!("❌ Could not save catalog: {e}"))?;
        } else {
            info!(tools = catalog.len(), "catalog refreshed");
            self.console.say(&format!(
                "✅ Saved {} tools to {}",
                catalog.len(),
                self.paths.catalog_file.display()
            ))?;
        }

        self.catalog = Some(catalog);
        Ok(true)
    }

    #[cfg(test)]
    fn into_parts(self) -> (W, RenderConfig) {
        (self.console.into_output(), self.settings)
    }
}
