use anyhow::Result;
use console::Term;
use dialoguer::{Confirm, Input};
use std::time::Duration;
use tokio::sync::watch;

use super::fire::{render_ashes, render_fire};
use super::style;
use crate::ritual::{Incinerator, IncineratorState, ResponseSource, Snapshot};

const FRAME_INTERVAL: Duration = Duration::from_millis(180);

/// Interactive ritual on the terminal: prompt, burn, show ashes, repeat.
///
/// Returns when the user declines another round or interrupts the prompt.
pub async fn run_interactive<S: ResponseSource>(
    incinerator: &mut Incinerator<S>,
    locale: &str,
) -> Result<()> {
    let term = Term::stdout();
    print_banner(&term, locale)?;

    loop {
        term.write_line(&render_fire(incinerator.state(), 0))?;
        term.write_line("")?;

        let Some(text) = read_thought(locale) else {
            break;
        };

        let animation = tokio::spawn(animate_burning(
            incinerator.subscribe(),
            term.clone(),
            t!("ui.burning", locale = locale).to_string(),
        ));

        let response = match incinerator.submit(text).await {
            Ok(response) => response,
            Err(err) => {
                animation.abort();
                return Err(err.into());
            }
        };
        animation.await??;

        term.write_line(&render_fire(IncineratorState::Cooling, 0))?;
        term.write_line("")?;
        term.write_line(&render_ashes(&response))?;
        term.write_line("")?;

        let again = Confirm::new()
            .with_prompt(format!("  {}", t!("ui.again", locale = locale)))
            .default(true)
            .interact()
            .unwrap_or(false);
        if !again {
            break;
        }
        incinerator.reset()?;
        term.clear_screen()?;
        print_banner(&term, locale)?;
    }

    term.write_line("")?;
    term.write_line(&format!(
        "  {}",
        style::dim(t!("ui.footer", locale = locale))
    ))?;
    Ok(())
}

fn print_banner(term: &Term, locale: &str) -> std::io::Result<()> {
    term.write_line("")?;
    term.write_line(&format!(
        "  {} {}",
        style::ember("🔥"),
        style::header(t!("ui.title", locale = locale))
    ))?;
    term.write_line(&format!(
        "  {}",
        style::dim(t!("ui.subtitle", locale = locale))
    ))?;
    term.write_line("")
}

/// Prompt until the user writes something. `None` means they left.
fn read_thought(locale: &str) -> Option<String> {
    loop {
        let input: Result<String, _> = Input::new()
            .with_prompt(format!("  {}", t!("ui.prompt", locale = locale)))
            .allow_empty(true)
            .report(false)
            .interact_text();

        match input {
            Ok(text) if text.trim().is_empty() => {}
            Ok(text) => return Some(text),
            Err(err) => {
                tracing::debug!("Prompt closed: {err}");
                return None;
            }
        }
    }
}

/// Redraw the burning fire until the incinerator leaves Burning.
async fn animate_burning(
    mut snapshots: watch::Receiver<Snapshot>,
    term: Term,
    label: String,
) -> std::io::Result<()> {
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut frame = 0usize;
    let mut drawn = 0usize;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if drawn > 0 {
                    term.clear_last_lines(drawn)?;
                }
                let art = render_fire(IncineratorState::Burning, frame);
                term.write_line(&art)?;
                term.write_line(&format!("  {}", style::flame(&label)))?;
                drawn = art.lines().count() + 1;
                frame = frame.wrapping_add(1);
            }
            changed = snapshots.changed() => {
                let done = changed.is_err()
                    || snapshots.borrow_and_update().state == IncineratorState::Cooling;
                if done {
                    break;
                }
            }
        }
    }

    if drawn > 0 {
        term.clear_last_lines(drawn)?;
    }
    Ok(())
}
