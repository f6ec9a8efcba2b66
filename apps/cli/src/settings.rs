//! Interactive settings editor.
//!
//! Takes the current [`RenderConfig`] by value and hands back the edited
//! one; persisting it is the caller's job.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use profilegen_shared::{RenderConfig, SettingKey};

use crate::console::Console;

/// Print every setting with its menu number.
pub(crate) fn show_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &RenderConfig,
) -> Result<()> {
    for (i, key) in SettingKey::ALL.iter().enumerate() {
        console.say(&format!(
            "  {:>2}) {:<22} {}",
            i + 1,
            key.name(),
            settings.get(*key)
        ))?;
    }
    Ok(())
}

/// Edit until the user picks `0` (or input ends).
///
/// Numbers toggle flags; text settings prompt for a new value, where a
/// blank answer clears it.
pub(crate) fn edit_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut settings: RenderConfig,
) -> Result<RenderConfig> {
    loop {
        console.say("\nSettings:")?;
        show_settings(console, &settings)?;
        console.say("   0) Save and return")?;

        let Some(answer) = console.ask("Choose a setting to change:")? else {
            return Ok(settings);
        };

        let key = match answer.trim().parse::<usize>() {
            Ok(0) => return Ok(settings),
            Ok(n) if n <= SettingKey::ALL.len() => SettingKey::ALL[n - 1],
            _ => {
                console.say(&format!("❌ '{}' is not a valid choice.", answer.trim()))?;
                continue;
            }
        };

        if key.is_flag() {
            settings = settings.toggled(key);
            console.say(&format!("{} is now {}", key.name(), settings.get(key)))?;
            continue;
        }

        let prompt = format!("New value for {} (leave blank to clear):", key.name());
        let Some(value) = console.ask(&prompt)? else {
            return Ok(settings);
        };
        settings = settings.with_text(key, value.trim());
        console.say(&format!("{} is now {}", key.name(), settings.get(key)))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn toggles_and_sets_text() {
        // 1 = show_stats, 11 = stats_theme, 12 = quote
        let mut c = console("1\n11\ndark\n12\nStay hungry.\n0\n");
        let edited = edit_settings(&mut c, RenderConfig::default()).unwrap();

        assert!(!edited.show_stats);
        assert_eq!(edited.stats_theme, "dark");
        assert_eq!(edited.quote, "Stay hungry.");
        assert_eq!(edited.show_streak, RenderConfig::default().show_streak);
    }

    #[test]
    fn invalid_choice_keeps_going() {
        let mut c = console("99\nabc\n0\n");
        let edited = edit_settings(&mut c, RenderConfig::default()).unwrap();
        assert_eq!(edited, RenderConfig::default());

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("'99' is not a valid choice"));
        assert!(out.contains("'abc' is not a valid choice"));
    }

    #[test]
    fn blank_clears_text() {
        let start = RenderConfig::default().with_text(SettingKey::Quote, "old");
        let mut c = console("12\n\n0\n");
        let edited = edit_settings(&mut c, start).unwrap();
        assert!(edited.quote.is_empty());
    }

    #[test]
    fn eof_returns_current_value() {
        let mut c = console("2\n");
        let edited = edit_settings(&mut c, RenderConfig::default()).unwrap();
        assert!(!edited.show_streak);
    }

    #[test]
    fn listing_shows_values() {
        let mut c = console("");
        show_settings(&mut c, &RenderConfig::default()).unwrap();
        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("   1) show_stats             on"));
        assert!(out.contains("stats_theme            \"radical\""));
        assert_eq!(out.lines().count(), SettingKey::ALL.len());
    }
}
