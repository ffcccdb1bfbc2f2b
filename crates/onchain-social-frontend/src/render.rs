//! Rendering of the profile page.

use crate::view::{ProfileService, ProfileView, ViewState};
use std::future::Future;
use std::io::{self, Write};

/// Shown until a profile has been loaded.
pub const LOADING_PLACEHOLDER: &str = "Loading profile...";

/// Lines of the page for `state`. Profile fields are inserted verbatim.
pub fn render(state: &ViewState) -> Vec<String> {
    match state {
        ViewState::Loading | ViewState::Failed(_) => vec![LOADING_PLACEHOLDER.to_string()],
        ViewState::Loaded(profile) => vec![
            format!("Welcome, {}", profile.username),
            format!("Email: {}", profile.email),
            format!("Bio: {}", profile.bio),
        ],
    }
}

/// Write a rendered page to a terminal.
///
/// Control characters are escaped so field content cannot emit terminal
/// sequences.
pub fn write_page<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        for c in line.chars() {
            if c.is_control() {
                write!(out, "{}", c.escape_default())?;
            } else {
                write!(out, "{c}")?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// How [`present`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The profile was shown.
    Loaded,
    /// `shutdown` resolved before a profile arrived.
    Interrupted,
}

/// Mount `view` and write each distinct page to `out` until the profile has
/// been shown or `shutdown` resolves.
pub async fn present<S, W, F>(view: &ProfileView<S>, out: &mut W, shutdown: F) -> io::Result<Outcome>
where
    S: ProfileService,
    W: Write,
    F: Future<Output = ()>,
{
    let mut updates = view.subscribe();
    let mut shown = render(&updates.borrow_and_update());
    write_page(out, &shown)?;

    let _mount = view.mount();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    return Ok(Outcome::Interrupted);
                }
                let state = updates.borrow_and_update().clone();
                let page = render(&state);
                if page != shown {
                    write_page(out, &page)?;
                    shown = page;
                }
                if state.profile().is_some() {
                    return Ok(Outcome::Loaded);
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Interrupted");
                return Ok(Outcome::Interrupted);
            }
        }
    }
}
