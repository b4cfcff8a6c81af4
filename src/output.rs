//! Output formatting for one-shot CLI commands.

use crate::catalog::ItemKind;
use crate::index::{SearchIndex, SearchItem};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stream(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print ranked search results, one per line: kind, title, href, description.
pub fn print_results(results: &[&SearchItem], color: bool) -> io::Result<()> {
    let mut stdout = stream(color);

    if results.is_empty() {
        writeln!(stdout, "No results")?;
        return Ok(());
    }

    for item in results {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "{:<9}", item.kind.label())?;
        stdout.reset()?;

        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{}", item.title)?;
        stdout.reset()?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "  {}", item.href)?;
        stdout.reset()?;

        writeln!(stdout)?;
        writeln!(stdout, "         {}", item.description)?;
    }

    Ok(())
}

/// Print ranked search results as a JSON array.
pub fn print_results_json(results: &[&SearchItem]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    println!("{}", json);
    Ok(())
}

/// Print catalog entries, optionally restricted to one kind.
pub fn print_list(index: &SearchIndex, kind: Option<ItemKind>) -> io::Result<()> {
    let mut stdout = stream(true);

    for section in ItemKind::ALL {
        if kind.is_some_and(|k| k != section) {
            continue;
        }
        let ids = index.ids_of_kind(section);
        if ids.is_empty() {
            continue;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(stdout, "{}", section.section_title())?;
        stdout.reset()?;

        for id in ids {
            let item = &index.items()[id];
            write!(stdout, "  {:<28}", item.title)?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
            writeln!(stdout, "{}", item.href)?;
            stdout.reset()?;
        }
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print per-kind entry counts.
pub fn print_stats(index: &SearchIndex) -> io::Result<()> {
    let mut stdout = stream(true);

    writeln!(stdout, "Catalog statistics:")?;
    for kind in ItemKind::ALL {
        let count = index.ids_of_kind(kind).len();
        write!(stdout, "  {:<16}", kind.section_title())?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", count)?;
        stdout.reset()?;
    }
    writeln!(stdout, "  {:<16}{}", "Total", index.len())?;

    Ok(())
}
