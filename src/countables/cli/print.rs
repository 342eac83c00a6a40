use colored::Colorize;
use countables::api::{CmdMessage, MessageLevel};
use countables::error::Result;
use countables::model::Countable;
use countables::view::DisplayCountable;
use unicode_width::UnicodeWidthStr;

const NAME_MIN_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_countables(rows: &[DisplayCountable]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.countable.name.width())
        .max()
        .unwrap_or(0)
        .max(NAME_MIN_WIDTH);
    let count_width = rows
        .iter()
        .map(|r| r.countable.count.to_string().len())
        .max()
        .unwrap_or(1);
    let pos_width = rows.len().to_string().len();

    let mut output = String::new();
    for row in rows {
        let pos = format!("{:>width$}.", row.position, width = pos_width);
        let name = &row.countable.name;
        let padding = name_width.saturating_sub(name.width());
        let count = format!("{:>width$}", row.countable.count, width = count_width);
        let count = if row.countable.count == 0 {
            count.dimmed()
        } else {
            count.yellow()
        };
        output.push_str(&format!(
            "  {} {}{}  {}\n",
            pos.dimmed(),
            name,
            " ".repeat(padding),
            count
        ));
    }
    output
}

/// Display order, without positions or indexes.
pub(super) fn render_json(rows: &[DisplayCountable]) -> Result<String> {
    let sorted: Vec<&Countable> = rows.iter().map(|r| &r.countable).collect();
    Ok(serde_json::to_string_pretty(&sorted)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use countables::view::project;

    fn rows() -> Vec<DisplayCountable> {
        project(&[
            Countable::with_count("Crow", 2),
            Countable::new("Jay"),
            Countable::with_count("Great Horned Owl", 11),
        ])
    }

    #[test]
    fn renders_one_line_per_row_in_display_order() {
        colored::control::set_override(false);
        let output = render_countables(&rows());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  1. Great Horned Owl  11");
        assert_eq!(lines[1], "  2. Crow               2");
        assert_eq!(lines[2], "  3. Jay                0");
    }

    #[test]
    fn renders_nothing_for_empty_list() {
        assert_eq!(render_countables(&[]), "");
    }

    #[test]
    fn json_is_sorted_array() {
        let json = render_json(&rows()).unwrap();
        let parsed: Vec<Countable> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].name, "Great Horned Owl");
        assert_eq!(parsed[2], Countable::new("Jay"));
    }
}
