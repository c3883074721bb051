use std::borrow::Cow;

const COLUMN_GAP: &str = "  ";

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Renders the header, a dashed rule and one line per row. Cells past the
    /// header count are dropped; trailing spaces are trimmed.
    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| text_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(text_width(cell));
            }
        }

        let mut table = String::with_capacity(256);
        self.write_line(&mut table, self.headers, &col_widths);

        let rule: Vec<Cow<'_, str>> = col_widths
            .iter()
            .map(|&width| Cow::Owned("-".repeat(width)))
            .collect();
        self.write_line(&mut table, &rule, &col_widths);

        for row in &self.rows {
            self.write_line(&mut table, row.as_ref(), &col_widths);
        }

        table
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'_, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, &width) in col_widths.iter().enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let cell = cells.get(i).map(|cell| &**cell).unwrap_or("");
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            line.push_str(&pad(cell, width, alignment));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(text_width(text));
    let (left, right) = match alignment {
        Alignment::Left => (0, fill),
        Alignment::Center => (fill / 2, fill - fill / 2),
        Alignment::Right => (fill, 0),
    };
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns_by_widest_cell() {
        let headers = [Cow::Borrowed("Persona"), Cow::Borrowed("Monto")];
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers)
            .row([Cow::Borrowed("María"), Cow::Borrowed("30.00")])
            .row([Cow::Borrowed("Juan"), Cow::Borrowed("120.50")])
            .build();

        assert_eq!(
            table,
            "Persona   Monto\n\
             -------  ------\n\
             María     30.00\n\
             Juan     120.50\n"
        );
    }

    #[test]
    fn centers_and_drops_extra_cells() {
        let headers = [Cow::Borrowed("A")];
        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Center])
            .headers(&headers)
            .row(vec![Cow::Borrowed("abc"), Cow::Borrowed("ignored")])
            .build();

        assert_eq!(table, " A\n---\nabc\n");
    }

    #[test]
    fn no_headers_means_no_table() {
        let table = TextTableBuilder::<Vec<Cow<'_, str>>>::new().build();
        assert!(table.is_empty());
    }
}
