#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 6;

/// Render an aligned plain-text table.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().map(|h| (*h).to_string()), &widths, false);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(row.iter().cloned(), &widths, options.color));
    }
    lines.join("\n")
}

/// Trim the widest column one char at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some((idx, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(&cell, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            let numeric = !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit());
            let text = if color { colorize_state(&text) } else { text };
            if numeric {
                format!("{pad}{text}")
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn colorize_state(value: &str) -> String {
    match value {
        "detailed" => format!("\u{1b}[32m{value}\u{1b}[0m"),
        "summary" => format!("\u{1b}[33m{value}\u{1b}[0m"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_columns() {
        let rows = vec![
            vec!["Bulbasaur".to_string(), "7".to_string()],
            vec!["Mew".to_string(), "4".to_string()],
        ];
        let rendered = render(&["name", "height"], &rows, PLAIN);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "name       height");
        assert_eq!(lines[2], "Bulbasaur       7");
        assert_eq!(lines[3], "Mew             4");
    }

    #[test]
    fn truncates_to_max_width() {
        let rows = vec![vec![
            "a-very-long-entity-name".to_string(),
            "https://example.invalid/pokemon/1/".to_string(),
        ]];
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let rendered = render(&["name", "details_url"], &rows, options);
        assert!(rendered.lines().all(|line| line.chars().count() <= 30));
        assert!(rendered.contains('…'));
    }

    #[test]
    fn colors_only_state_values() {
        assert_eq!(colorize_state("detailed"), "\u{1b}[32mdetailed\u{1b}[0m");
        assert_eq!(colorize_state("Pikachu"), "Pikachu");
    }
}
