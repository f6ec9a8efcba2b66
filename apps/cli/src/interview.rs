//! The question-and-answer flow that produces a [`ProfileRecord`].

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use profilegen_core::validate::{
    MIN_PARAGRAPH_LEN, ValidationError, normalize_color, parse_tools, parse_typing_lines,
    validate_clean, validate_min_length, validate_non_empty,
};
use profilegen_shared::{ProfileRecord, ToolCatalog};
use tracing::{debug, warn};

use crate::console::Console;
use crate::remote::RemoteLookup;

/// Tools suggested in the prompt; all of them exist in the Devicon catalog.
const SUGGESTED_TOOLS: &str = "Python, C, HTML, CSS, JavaScript, PHP, MySQL, Git, GitHub";

/// Ask every question in turn. Returns `None` if input ends part-way.
///
/// When `remote` is given, the username must exist on GitHub; lookup
/// failures are shown and the question is asked again.
pub(crate) async fn collect_profile<R, W, L>(
    console: &mut Console<R, W>,
    catalog: &ToolCatalog,
    remote: Option<&L>,
) -> Result<Option<ProfileRecord>>
where
    R: BufRead,
    W: Write,
    L: RemoteLookup,
{
    console.say("*** GitHub Profile README Generator ***")?;
    console.say(
        "Answer a few questions to generate a README.md for your GitHub profile.\n\
         Please answer as accurately as possible.\n",
    )?;

    let Some(name) = console.ask_until("What is your real name?", |a| {
        text_answer("name", a)
    })?
    else {
        return Ok(None);
    };

    let Some(username) = ask_username(console, remote).await? else {
        return Ok(None);
    };

    let Some(color_hex) = console.ask_until(
        "What is your preferred colour? (HEX code, e.g. 36BCF7)",
        normalize_color,
    )?
    else {
        return Ok(None);
    };

    let Some(typing_lines) = console.ask_until(
        "Typing SVG lines (separate with ; like 'Welcome!👋;I'm Kieran!')",
        |a| {
            validate_clean("typing lines", a)?;
            parse_typing_lines(a)
        },
    )?
    else {
        return Ok(None);
    };

    let Some(job_title) = console.ask_until(
        "What do you call yourself? (e.g., Software Engineer, Web Developer, Student)",
        |a| text_answer("job title", a),
    )?
    else {
        return Ok(None);
    };

    let Some(skills) = console.ask_until(
        "List 3 skills or qualities (e.g., Developer • Creator • Problem Solver)",
        |a| text_answer("skills", a),
    )?
    else {
        return Ok(None);
    };

    let Some(about) = console.ask_until(
        "Write a short paragraph about yourself (who you are, what you're into):",
        |a| paragraph_answer("about", a),
    )?
    else {
        return Ok(None);
    };

    let Some(journey) = console.ask_until(
        "How did you get into coding? Describe your journey or origin story:",
        |a| paragraph_answer("journey", a),
    )?
    else {
        return Ok(None);
    };

    let Some(tools) = console.ask_until(
        &format!(
            "Languages & tools to show (separate with commas). Options include:\n{SUGGESTED_TOOLS}"
        ),
        |a| parse_tools(a, catalog),
    )?
    else {
        return Ok(None);
    };

    debug!(%username, tools = tools.len(), "interview complete");

    Ok(Some(ProfileRecord {
        name,
        username,
        color_hex,
        typing_lines,
        job_title,
        skills,
        about,
        journey,
        tools,
    }))
}

async fn ask_username<R, W, L>(
    console: &mut Console<R, W>,
    remote: Option<&L>,
) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
    L: RemoteLookup,
{
    loop {
        let Some(username) =
            console.ask_until("What is your GitHub username?", |a| {
                validate_non_empty("username", a)?;
                Ok(a.trim().to_string())
            })?
        else {
            return Ok(None);
        };

        let Some(remote) = remote else {
            return Ok(Some(username));
        };

        match remote.user_exists(&username).await {
            Ok(true) => return Ok(Some(username)),
            Ok(false) => {
                console.say(&format!(
                    "❌ GitHub user '{username}' was not found. Please try again."
                ))?;
            }
            Err(e) => {
                warn!(error = %e, "username check failed");
                console.say(&format!(
                    "❌ Could not verify '{username}': {e}. Please try again."
                ))?;
            }
        }
    }
}

fn text_answer(field: &'static str, answer: &str) -> std::result::Result<String, ValidationError> {
    validate_non_empty(field, answer)?;
    validate_clean(field, answer)?;
    Ok(answer.trim().to_string())
}

fn paragraph_answer(
    field: &'static str,
    answer: &str,
) -> std::result::Result<String, ValidationError> {
    validate_min_length(field, answer, MIN_PARAGRAPH_LEN)?;
    validate_clean(field, answer)?;
    Ok(answer.trim().to_string())
}
