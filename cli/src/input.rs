use anyhow::{Context, bail};
use samegame_core::{Action, Coord};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Click(Action),
    Quit,
}

/// Parses one line of player input. Blank lines yield `None`.
pub(crate) fn parse(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if matches!(line, "q" | "quit" | "exit") {
        return Ok(Some(Command::Quit));
    }

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected `row col`, got {line:?}");
    };

    let row = parse_coord(row)?;
    let col = parse_coord(col)?;
    Ok(Some(Command::Click(Action::ClickCell((row, col)))))
}

/// Values that do not fit a coordinate become `Coord::MAX`, which is never a valid index since boards are at
/// most `Coord::MAX` tiles wide.
fn parse_coord(part: &str) -> anyhow::Result<Coord> {
    let value: i64 = part
        .parse()
        .with_context(|| format!("{part:?} is not a number"))?;
    Ok(Coord::try_from(value).unwrap_or(Coord::MAX))
}
