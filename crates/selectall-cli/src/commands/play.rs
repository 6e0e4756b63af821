//! The `selectall play` command.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use selectall_core::error::QuizError;
use selectall_core::i18n::Message;
use selectall_core::model::Locale;
use selectall_core::scoring::ScoringPolicy;
use selectall_core::selection::{DisplayMode, ModeChange};
use selectall_core::session::QuizSession;

use crate::settings::{Overrides, Settings};
use crate::view;

pub fn execute(overrides: Overrides) -> Result<()> {
    let settings = Settings::resolve(overrides)?;
    let session = match settings.seed {
        Some(seed) => QuizSession::with_seed(settings.catalog, settings.policy, seed),
        None => QuizSession::random(settings.catalog, settings.policy),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(session, settings.locale, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Toggle(Target),
    Answer,
    Check,
    Back,
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Position(usize),
    Name(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    // Element names like `a`, `b` and `q` are valid answers, so commands
    // carry a `:` prefix.
    let Some(word) = line.strip_prefix(':') else {
        return Some(match line.parse::<usize>() {
            Ok(n) => Command::Toggle(Target::Position(n)),
            Err(_) => Command::Toggle(Target::Name(line.to_string())),
        });
    };
    let command = match word.trim().to_lowercase().as_str() {
        "answer" | "a" => Command::Answer,
        "check" | "c" => Command::Check,
        "back" | "b" => Command::Back,
        "list" | "l" => Command::List,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Help,
    };
    Some(command)
}

fn print_help<W: Write>(locale: Locale, out: &mut W) -> io::Result<()> {
    let rows = [
        ("<number> | <name>", Message::HelpToggle),
        (":answer  (:a)", Message::Answer),
        (":check   (:c)", Message::CheckIncorrect),
        (":back    (:b)", Message::Back),
        (":list    (:l)", Message::HelpList),
        (":help    (:h)", Message::HelpShowHelp),
        (":quit    (:q)", Message::HelpQuit),
    ];
    writeln!(out, "{}", Message::HelpHeading.text(locale))?;
    for (keys, label) in rows {
        writeln!(out, "  {keys:<20}{}", label.text(locale))?;
    }
    Ok(())
}

fn policy_label(policy: ScoringPolicy) -> Message {
    match policy {
        ScoringPolicy::Strict => Message::StrictPolicy,
        ScoringPolicy::Lenient => Message::LenientPolicy,
    }
}

/// Drive a session from `input` until `quit` or end of input, then print the
/// final score.
pub fn run<R: BufRead, W: Write>(
    mut session: QuizSession,
    locale: Locale,
    input: R,
    out: &mut W,
) -> io::Result<QuizSession> {
    view::header(&session, locale, out)?;
    view::render(&session, locale, out)?;
    writeln!(out, "{}", Message::HelpHint.text(locale))?;

    for line in input.lines() {
        let Some(command) = parse_command(&line?) else {
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(locale, out)?,
            Command::List => view::render(&session, locale, out)?,
            Command::Answer => {
                let change = session.answer();
                after_mode_change(&session, locale, change, out)?;
            }
            Command::Check => {
                let change = session.toggle_audit();
                after_mode_change(&session, locale, change, out)?;
            }
            Command::Back => {
                let change = session.back();
                after_mode_change(&session, locale, change, out)?;
            }
            Command::Toggle(target) => toggle(&mut session, locale, target, out)?,
        }
    }

    let card = session.score_card();
    writeln!(
        out,
        "{}: {}/{} ({})",
        Message::FinalScore.text(locale),
        card.score,
        card.total_real,
        policy_label(card.policy).text(locale)
    )?;
    Ok(session)
}

fn after_mode_change<W: Write>(
    session: &QuizSession,
    locale: Locale,
    change: Result<ModeChange, QuizError>,
    out: &mut W,
) -> io::Result<()> {
    match change {
        Ok(change) => {
            if change.reset_viewport() {
                writeln!(out)?;
            }
            view::render(session, locale, out)
        }
        Err(e) if e.is_transition() => {
            tracing::debug!(error = %e, "mode change rejected");
            writeln!(
                out,
                "{}: {}",
                Message::ErrorPrefix.text(locale),
                Message::AnswerFirst.text(locale)
            )
        }
        Err(e) => writeln!(out, "{}: {e}", Message::ErrorPrefix.text(locale)),
    }
}

fn toggle<W: Write>(
    session: &mut QuizSession,
    locale: Locale,
    target: Target,
    out: &mut W,
) -> io::Result<()> {
    if session.mode() != DisplayMode::Choosing {
        return writeln!(out, "{}", Message::AnswersLocked.text(locale));
    }

    let name = match &target {
        Target::Position(n) => session.item_at(*n).map(|item| item.name().to_string()),
        Target::Name(name) => session.catalog().get(name).map(|item| item.name().to_string()),
    };

    let Some(name) = name else {
        return match target {
            Target::Position(n) => writeln!(out, "{}: {n}", Message::NoItemAt.text(locale)),
            Target::Name(name) => writeln!(out, "{}: {name}", Message::UnknownItem.text(locale)),
        };
    };

    let selected = session.toggle(&name);
    writeln!(out, "{} {}", if selected { "[x]" } else { "[ ]" }, name)?;
    view::status(session, locale, out)
}
