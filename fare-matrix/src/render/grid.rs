//! Bordered plain-text tables.

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render a bordered grid table.
///
/// Every row is separated by a `-` rule and the header by a `=` rule.
/// `align[i]` applies to column `i` (header included); missing entries
/// default to left. Short rows are padded with blank cells. Widths are
/// counted in characters. The result has no trailing newline.
///
/// ```text
/// +---------+---+
/// | From\To | B |
/// +=========+===+
/// | A       | 3 |
/// +---------+---+
/// ```
pub fn grid_table(header: &[String], rows: &[Vec<String>], align: &[Align]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for line in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat_n(fill, w + 2));
            line.push('+');
        }
        line
    };

    let row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width - cell.chars().count();
            let (left, right) = match align.get(i).copied().unwrap_or(Align::Left) {
                Align::Left => (0, pad),
                Align::Right => (pad, 0),
            };
            line.push(' ');
            line.extend(std::iter::repeat_n(' ', left));
            line.push_str(cell);
            line.extend(std::iter::repeat_n(' ', right));
            line.push_str(" |");
        }
        line
    };

    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);
    lines.push(rule('-'));
    lines.push(row(header));
    lines.push(rule('='));
    for cells in rows {
        lines.push(row(cells));
        lines.push(rule('-'));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_header_and_rows() {
        let table = grid_table(
            &strings(&["From\\To", "B", "C"]),
            &[strings(&["A", "3", ""]), strings(&["B", "", "12"])],
            &[Align::Left, Align::Right, Align::Right],
        );

        let expected = "\
+---------+---+----+
| From\\To | B |  C |
+=========+===+====+
| A       | 3 |    |
+---------+---+----+
| B       |   | 12 |
+---------+---+----+";
        assert_eq!(table, expected);
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let table = grid_table(&strings(&["ঢাকা"]), &[strings(&["x"])], &[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "+------+");
        assert_eq!(lines[1], "| ঢাকা |");
        assert_eq!(lines[3], "| x    |");
    }

    #[test]
    fn short_rows_padded() {
        let table = grid_table(&strings(&["a", "b"]), &[strings(&["1"])], &[]);
        assert!(table.contains("| 1 |   |"));
    }

    #[test]
    fn blank_column_alignment_is_invisible() {
        let header = strings(&["From\\To", "Dhaka"]);
        let rows = [strings(&["A", ""]), strings(&["B", ""])];

        let right = grid_table(&header, &rows, &[Align::Left, Align::Right]);
        let left = grid_table(&header, &rows, &[Align::Left, Align::Left]);
        assert_eq!(right, left);
    }

    #[test]
    fn header_only() {
        let table = grid_table(&strings(&["only"]), &[], &[]);
        assert_eq!(table, "+------+\n| only |\n+======+");
    }
}
