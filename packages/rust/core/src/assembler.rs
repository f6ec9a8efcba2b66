//! Profile README assembler.
//!
//! Takes a validated profile, the icon catalog, and the render settings,
//! then lays out the Markdown document section by section.

use std::path::Path;

use tracing::{debug, info, instrument};

use profilegen_shared::{
    ProfileGenError, ProfileRecord, RenderConfig, Result, SettingKey, ToolCatalog,
};

use crate::icons::resolve_icon;

/// Separator the typing banner uses between lines.
pub const TYPING_LINE_SEPARATOR: &str = ";";

const TYPING_SVG_URL: &str = "https://readme-typing-svg.demolab.com";
const STATS_URL: &str = "https://github-readme-stats.vercel.app/api";
const TOP_LANGS_URL: &str = "https://github-readme-stats.vercel.app/api/top-langs/";
const STREAK_URL: &str = "https://streak-stats.demolab.com";
const VISITOR_COUNTER_URL: &str = "https://komarev.com/ghpvc/";

const BADGES: &[&str] = &[
    "![Open Source Love](https://img.shields.io/badge/Open%20Source-%E2%9D%A4-red?style=for-the-badge)",
    "![Made with Markdown](https://img.shields.io/badge/Made%20with-Markdown-1f425f?style=for-the-badge&logo=markdown)",
    "![Profile README](https://img.shields.io/badge/Profile-README-2ea44f?style=for-the-badge&logo=github)",
];

const CREDITS: &str = "---\n\n<sub>This README was generated with profilegen.</sub>";

/// One block of the rendered document, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    TypingBanner,
    Greeting,
    Identity,
    About,
    Quote,
    GifBanner,
    Tools,
    Stats,
    Streak,
    TopLangs,
    VisitorCounter,
    Badges,
    Journey,
    Credits,
}

impl Section {
    /// The setting that decides whether this section appears at all.
    ///
    /// `None` for sections that are always rendered (some of those still
    /// have cosmetic settings, such as centering or the greeting emoji).
    pub fn gate(self) -> Option<SettingKey> {
        match self {
            Self::Quote => Some(SettingKey::ShowQuote),
            Self::GifBanner => Some(SettingKey::AddGifBanner),
            Self::Stats => Some(SettingKey::ShowStats),
            Self::Streak => Some(SettingKey::ShowStreak),
            Self::TopLangs => Some(SettingKey::ShowTopLangs),
            Self::VisitorCounter => Some(SettingKey::ShowVisitorCounter),
            Self::Badges => Some(SettingKey::ShowBadges),
            Self::Journey => Some(SettingKey::ShowJourney),
            Self::TypingBanner
            | Self::Greeting
            | Self::Identity
            | Self::About
            | Self::Tools
            | Self::Credits => None,
        }
    }
}

/// Render the complete README.
///
/// Total over any profile/config pair: unknown tools fall back to text,
/// disabled or empty sections are left out, and user text is inserted
/// verbatim (no Markdown or HTML escaping).
pub fn assemble(profile: &ProfileRecord, catalog: &ToolCatalog, config: &RenderConfig) -> String {
    let body = sections(profile, catalog, config)
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("\n\n");

    body.trim().to_string()
}

/// The sections [`assemble`] would emit, in order, each paired with its text.
pub fn sections(
    profile: &ProfileRecord,
    catalog: &ToolCatalog,
    config: &RenderConfig,
) -> Vec<(Section, String)> {
    let username = &profile.username;
    let theme = &config.stats_theme;

    let mut out = vec![
        (Section::TypingBanner, typing_banner(profile, config)),
        (Section::Greeting, greeting(profile, config)),
        (
            Section::Identity,
            format!("**{}** | {}", profile.job_title, profile.skills),
        ),
        (Section::About, profile.about.clone()),
    ];

    if config.show_quote && !config.quote.is_empty() {
        out.push((Section::Quote, format!("> {}", config.quote)));
    }

    if config.add_gif_banner && !config.gif_banner_url.is_empty() {
        out.push((
            Section::GifBanner,
            format!(r#"<img src="{}" width="100%"/>"#, config.gif_banner_url),
        ));
    }

    if !profile.tools.is_empty() {
        let mut block = String::from("## Languages & Tools\n");
        for tool in &profile.tools {
            block.push('\n');
            block.push_str(&resolve_icon(tool.as_str(), catalog));
        }
        out.push((Section::Tools, block));
    }

    if config.show_stats {
        out.push((
            Section::Stats,
            format!("![GitHub Stats]({STATS_URL}?username={username}&show_icons=true&theme={theme})"),
        ));
    }
    if config.show_streak {
        out.push((
            Section::Streak,
            format!("![GitHub Streak]({STREAK_URL}?user={username}&theme={theme})"),
        ));
    }
    if config.show_top_langs {
        out.push((
            Section::TopLangs,
            format!(
                "![Top Languages]({TOP_LANGS_URL}?username={username}&layout=compact&theme={theme})"
            ),
        ));
    }
    if config.show_visitor_counter {
        out.push((
            Section::VisitorCounter,
            format!("![Profile Views]({VISITOR_COUNTER_URL}?username={username}&style=flat)"),
        ));
    }

    if config.show_badges {
        out.push((Section::Badges, BADGES.join("\n")));
    }

    if config.show_journey {
        out.push((
            Section::Journey,
            format!(
                "<details>\n<summary>My Coding Journey</summary>\n\n{}\n\n</details>",
                profile.journey
            ),
        ));
    }

    out.push((Section::Credits, CREDITS.to_string()));

    debug!(sections = out.len(), "sections laid out");
    out
}

/// Write the rendered document verbatim, replacing any existing file.
#[instrument(skip(content), fields(path = %path.display(), bytes = content.len()))]
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ProfileGenError::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| ProfileGenError::io(path, e))?;

    info!("README written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn typing_banner(profile: &ProfileRecord, config: &RenderConfig) -> String {
    // The banner service reads `+` as a space; the query is not otherwise encoded.
    let lines = profile
        .typing_lines
        .join(TYPING_LINE_SEPARATOR)
        .replace(' ', "+");

    let image = format!(
        "![Typing SVG]({TYPING_SVG_URL}?font=Fira+Code&pause=1000&color={}&center=true&vCenter=true&width=435&lines={lines})",
        profile.color_hex
    );

    if config.center_content {
        format!("<div align=\"center\">\n\n{image}\n\n</div>")
    } else {
        image
    }
}

fn greeting(profile: &ProfileRecord, config: &RenderConfig) -> String {
    if config.use_emojis {
        format!("# Hi there, I'm {} 👋", profile.name)
    } else {
        format!("# Hi there, I'm {}", profile.name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use profilegen_shared::{ToolId, load_settings_from, save_settings_to};

    fn make_catalog() -> ToolCatalog {
        [
            ("python", "python/python-original.svg"),
            ("rust", "rust/rust-original.svg"),
            ("git", "git/git-original.svg"),
        ]
        .into_iter()
        .collect()
    }

    fn make_profile() -> ProfileRecord {
        ProfileRecord {
            name: "Ada".into(),
            username: "ada-dev".into(),
            color_hex: "36BCF7".into(),
            typing_lines: vec!["Welcome!".into(), "I'm Ada".into()],
            job_title: "Software Engineer".into(),
            skills: "Developer • Creator • Problem Solver".into(),
            about: "I build compilers and tinker with embedded boards on weekends.".into(),
            journey: "Started with a graphing calculator, then a Raspberry Pi, then Rust.".into(),
            tools: ["python", "rust", "haskell"]
                .into_iter()
                .map(|t| ToolId::new(t).unwrap())
                .collect(),
        }
    }

    fn all_on() -> RenderConfig {
        RenderConfig {
            show_stats: true,
            show_streak: true,
            show_top_langs: true,
            show_visitor_counter: true,
            show_badges: true,
            show_journey: true,
            show_quote: true,
            add_gif_banner: true,
            center_content: true,
            use_emojis: true,
            stats_theme: "dark".into(),
            quote: "Simplicity is prerequisite for reliability.".into(),
            gif_banner_url: "https://example.com/banner.gif".into(),
        }
    }

    #[test]
    fn sections_follow_fixed_order() {
        let order: Vec<Section> = sections(&make_profile(), &make_catalog(), &all_on())
            .into_iter()
            .map(|(s, _)| s)
            .collect();

        assert_eq!(
            order,
            vec![
                Section::TypingBanner,
                Section::Greeting,
                Section::Identity,
                Section::About,
                Section::Quote,
                Section::GifBanner,
                Section::Tools,
                Section::Stats,
                Section::Streak,
                Section::TopLangs,
                Section::VisitorCounter,
                Section::Badges,
                Section::Journey,
                Section::Credits,
            ]
        );
    }

    #[test]
    fn assemble_is_deterministic() {
        let profile = make_profile();
        let catalog = make_catalog();
        let config = all_on();
        assert_eq!(
            assemble(&profile, &catalog, &config),
            assemble(&profile, &catalog, &config)
        );
    }

    #[test]
    fn output_is_trimmed() {
        let out = assemble(&make_profile(), &make_catalog(), &RenderConfig::default());
        assert_eq!(out, out.trim());
        assert!(out.starts_with("<div align=\"center\">"));
        assert!(out.ends_with("</sub>"));
    }

    #[test]
    fn tools_render_in_order_with_fallback() {
        let out = assemble(&make_profile(), &make_catalog(), &all_on());
        let tools_block: Vec<&str> = out
            .lines()
            .skip_while(|l| *l != "## Languages & Tools")
            .skip(2)
            .take(3)
            .collect();

        assert!(tools_block[0].contains("python/python-original.svg"));
        assert!(tools_block[1].contains("rust/rust-original.svg"));
        assert_eq!(tools_block[2], "`haskell`");
    }

    #[test]
    fn empty_tool_list_omits_section() {
        let mut profile = make_profile();
        profile.tools.clear();
        let out = assemble(&profile, &make_catalog(), &all_on());
        assert!(!out.contains("Languages & Tools"));
    }

    #[test]
    fn typing_banner_encodes_lines_and_color() {
        let out = assemble(&make_profile(), &make_catalog(), &all_on());
        assert!(out.contains("color=36BCF7"));
        assert!(out.contains("lines=Welcome!;I'm+Ada)"));
    }

    #[test]
    fn centering_wraps_only_the_banner() {
        let mut config = all_on();
        config.center_content = false;
        let out = assemble(&make_profile(), &make_catalog(), &config);
        assert!(out.starts_with("![Typing SVG]("));
        assert!(!out.contains("<div align=\"center\">"));
    }

    #[test]
    fn emoji_toggle_changes_greeting() {
        let profile = make_profile();
        let catalog = make_catalog();
        let mut config = all_on();
        assert!(assemble(&profile, &catalog, &config).contains("# Hi there, I'm Ada 👋"));

        config.use_emojis = false;
        let out = assemble(&profile, &catalog, &config);
        assert!(out.contains("# Hi there, I'm Ada\n"));
        assert!(!out.contains('👋'));
    }

    #[test]
    fn stats_cards_use_username_and_theme() {
        let out = assemble(&make_profile(), &make_catalog(), &all_on());
        assert!(out.contains(
            "![GitHub Stats](https://github-readme-stats.vercel.app/api?username=ada-dev&show_icons=true&theme=dark)"
        ));
        assert!(out.contains("streak-stats.demolab.com?user=ada-dev&theme=dark"));
        assert!(out.contains("top-langs/?username=ada-dev&layout=compact&theme=dark"));
        assert!(out.contains("komarev.com/ghpvc/?username=ada-dev"));
    }

    #[test]
    fn stats_off_keeps_other_blocks() {
        let mut config = all_on();
        config.show_stats = false;
        let out = assemble(&make_profile(), &make_catalog(), &config);

        assert!(!out.contains("![GitHub Stats]"));
        assert!(out.contains("![GitHub Streak]"));
        assert!(out.contains("![Top Languages]"));
        assert!(out.contains("![Open Source Love]"));
    }

    #[test]
    fn each_gate_removes_exactly_its_section() {
        let profile = make_profile();
        let catalog = make_catalog();
        let base = all_on();
        let full = sections(&profile, &catalog, &base);

        for key in SettingKey::ALL.into_iter().filter(|k| {
            full.iter().any(|(s, _)| s.gate() == Some(*k))
        }) {
            let expected: Vec<(Section, String)> = full
                .iter()
                .filter(|(s, _)| s.gate() != Some(key))
                .cloned()
                .collect();
            let got = sections(&profile, &catalog, &base.clone().toggled(key));
            assert_eq!(got, expected, "toggling {} off", key.name());
            assert_eq!(got.len(), full.len() - 1);
        }
    }

    #[test]
    fn quote_and_banner_need_content() {
        let mut config = all_on();
        config.quote.clear();
        config.gif_banner_url.clear();
        let kinds: Vec<Section> = sections(&make_profile(), &make_catalog(), &config)
            .into_iter()
            .map(|(s, _)| s)
            .collect();

        assert!(!kinds.contains(&Section::Quote));
        assert!(!kinds.contains(&Section::GifBanner));
    }

    #[test]
    fn user_text_is_not_escaped() {
        let mut profile = make_profile();
        profile.about = "I like <b>bold</b> claims and *stars* more than thirty chars.".into();
        let out = assemble(&profile, &make_catalog(), &all_on());
        assert!(out.contains("I like <b>bold</b> claims and *stars*"));
    }

    #[test]
    fn journey_is_collapsible() {
        let out = assemble(&make_profile(), &make_catalog(), &all_on());
        assert!(out.contains(
            "<details>\n<summary>My Coding Journey</summary>\n\nStarted with a graphing calculator"
        ));
    }

    #[test]
    fn persisted_settings_render_identically() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        let profile = make_profile();
        let catalog = make_catalog();
        let config = all_on().toggled(SettingKey::ShowStreak);

        let before = assemble(&profile, &catalog, &config);
        save_settings_to(&path, &config).unwrap();
        let reloaded = load_settings_from(&path).unwrap();

        assert_eq!(assemble(&profile, &catalog, &reloaded), before);
    }

    #[test]
    fn write_document_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("README.md");
        std::fs::write(&path, "old content that is much longer than the new one").unwrap();

        write_document(&path, "# new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# new");
    }
}
