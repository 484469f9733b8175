//! Plain-text grid tables for terminal output.

pub fn render_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let separator = |fill: char| {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat(fill).take(w + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = w - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(pad + 1));
            line.push('|');
        }
        line.push('\n');
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = separator('-');
    out.push_str(&format_row(&header_cells));
    out.push_str(&separator('='));
    for row in rows {
        out.push_str(&format_row(row));
        out.push_str(&separator('-'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid() {
        let table = render_grid(
            &["Code", "Qty"],
            &[vec!["A1".to_string(), "150".to_string()]],
        );
        let expected = "+------+-----+\n\
                        | Code | Qty |\n\
                        +======+=====+\n\
                        | A1   | 150 |\n\
                        +------+-----+\n";
        assert_eq!(table, expected);
    }
}
