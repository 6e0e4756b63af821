//! Plain-text rendering of a quiz session.

use std::io::{self, Write};

use selectall_core::i18n::Message;
use selectall_core::model::{DocumentedItem, Item, Locale};
use selectall_core::selection::DisplayMode;
use selectall_core::session::QuizSession;

pub fn header(session: &QuizSession, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", Message::Title.text(locale))?;
    if session.policy().penalizes_decoys() {
        writeln!(out, "{}", Message::PenaltyNotice.text(locale))?;
    }
    Ok(())
}

/// Status line: selection count while choosing, score afterwards.
pub fn status(session: &QuizSession, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    match session.mode() {
        DisplayMode::Choosing => writeln!(
            out,
            "{}:{}/{}",
            Message::Selected.text(locale),
            session.selected_count(),
            session.total_real()
        ),
        DisplayMode::Reviewing | DisplayMode::Auditing => writeln!(
            out,
            "{}:{}/{}",
            Message::Score.text(locale),
            session.score(),
            session.total_real()
        ),
    }
}

/// Full view for the current mode, ending with the actions it offers.
pub fn render(session: &QuizSession, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    status(session, locale, out)?;
    match session.mode() {
        DisplayMode::Choosing => render_choosing(session, out)?,
        DisplayMode::Reviewing => render_reviewing(session, locale, out)?,
        DisplayMode::Auditing => render_auditing(session, locale, out)?,
    }
    actions(session.mode(), locale, out)
}

/// Button row: answer while choosing, back and check once results show.
pub fn actions(mode: DisplayMode, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    match mode {
        DisplayMode::Choosing => writeln!(out, "[:a] {}", Message::Answer.text(locale)),
        DisplayMode::Reviewing | DisplayMode::Auditing => writeln!(
            out,
            "[:b] {}  [:c] {}",
            Message::Back.text(locale),
            Message::CheckIncorrect.text(locale)
        ),
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn render_choosing(session: &QuizSession, out: &mut impl Write) -> io::Result<()> {
    for (i, item) in session.display_order().iter().enumerate() {
        writeln!(
            out,
            "{:>4}. {} {}",
            i + 1,
            checkbox(session.is_selected(item.name())),
            item.name()
        )?;
    }
    Ok(())
}

/// Mark for an item once results are shown.
fn verdict(item: &Item, checked: bool) -> Option<Message> {
    match (item, checked) {
        (Item::Documented(_), true) => Some(Message::MarkOk),
        (Item::Documented(_), false) => Some(Message::MarkMissed),
        (Item::Decoy { .. }, true) => Some(Message::MarkNotElement),
        (Item::Decoy { .. }, false) => None,
    }
}

fn render_item(
    item: &Item,
    checked: bool,
    locale: Locale,
    out: &mut impl Write,
) -> io::Result<()> {
    match verdict(item, checked) {
        Some(mark) => writeln!(
            out,
            "  {} {}  ({})",
            checkbox(checked),
            item.name(),
            mark.text(locale)
        )?,
        None => writeln!(out, "  {} {}", checkbox(checked), item.name())?,
    }
    match item {
        Item::Documented(doc) => render_reference(doc, locale, out),
        Item::Decoy { .. } => Ok(()),
    }
}

fn render_reference(doc: &DocumentedItem, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "      {}", doc.description.get(locale))?;
    writeln!(
        out,
        "      {}: {}",
        Message::ReferenceLink.text(locale),
        doc.reference_url.get(locale)
    )?;
    writeln!(
        out,
        "      {}: {}",
        Message::SpecLink.text(locale),
        doc.specification_url
    )
}

fn render_reviewing(session: &QuizSession, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    for item in session.display_order() {
        render_item(item, session.is_selected(item.name()), locale, out)?;
    }
    Ok(())
}

fn render_auditing(session: &QuizSession, locale: Locale, out: &mut impl Write) -> io::Result<()> {
    let unselected = session.unselected_correct();
    writeln!(
        out,
        "{} {}{}",
        Message::Unselected.text(locale),
        unselected.len(),
        Message::ItemsSuffix.text(locale)
    )?;
    for doc in unselected {
        render_item(&Item::Documented(doc.clone()), false, locale, out)?;
    }

    let decoys = session.selected_decoys();
    writeln!(
        out,
        "{} {}{}",
        Message::NonExistentSelected.text(locale),
        decoys.len(),
        Message::ItemsSuffix.text(locale)
    )?;
    for name in decoys {
        render_item(&Item::decoy(name), true, locale, out)?;
    }
    Ok(())
}
