use std::fmt::{self, Display, Write};

use crate::models::ResultSet;

pub const HEADER: [&str; 4] = [
    "Language",
    "Vacancies Found",
    "Vacancies Processed",
    "Average Salary",
];

/// Summary table of one provider's result set.
/// The first row is always the header.
#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    rows: Vec<[String; 4]>,
}

impl Table {
    pub fn new(title: Option<String>, results: &ResultSet) -> Self {
        let mut rows = Vec::with_capacity(results.len() + 1);
        rows.push(HEADER.map(String::from));
        for (language, aggregate) in results.iter() {
            rows.push([
                language.to_owned(),
                aggregate.vacancies_found.to_string(),
                aggregate.vacancies_processed.to_string(),
                aggregate.average_salary.to_string(),
            ]);
        }
        Self { title, rows }
    }

    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = [0; 4];
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn border(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Places the title at the start of the top border, if there is room for it
fn titled_border(border: &str, title: &str) -> String {
    let title_width = title.chars().count();
    let border_width = border.chars().count();
    if title_width + 2 > border_width {
        return border.to_owned();
    }
    let rest = border.chars().skip(title_width + 1).collect::<String>();
    format!("+{}{}", title, rest)
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let separator = border(&widths);
        let top = match &self.title {
            Some(title) => titled_border(&separator, title),
            None => separator.clone(),
        };
        let mut out = String::new();
        writeln!(out, "{}", top)?;
        for (index, row) in self.rows.iter().enumerate() {
            out.push('|');
            for (cell, width) in row.iter().zip(widths) {
                let padding = width - cell.chars().count();
                write!(out, " {}{} |", cell, " ".repeat(padding))?;
            }
            out.push('\n');
            if index == 0 {
                writeln!(out, "{}", separator)?;
            }
        }
        if self.rows.len() > 1 {
            write!(out, "{}", separator)?;
        } else {
            out.pop();
        }
        f.write_str(&out)
    }
}
