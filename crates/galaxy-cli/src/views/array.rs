//! Array model: rows and columns of stars.

use galaxy_model::{Fact, Multiplier, Table};

use super::heading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayModelView {
    /// Number of columns.
    pub multiplier: Multiplier,
}

impl Default for ArrayModelView {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::clamped(4),
        }
    }
}

impl ArrayModelView {
    pub fn render(&self, table: Table) -> String {
        let fact = Fact::new(table, self.multiplier);
        let mut out = heading(
            "مدل شکلی (آرایه)",
            "ببین چطور ستاره‌ها در ردیف و ستون مرتب میشن",
        );
        out.push('\n');

        let row = vec!["★"; self.multiplier.get() as usize].join(" ");
        for _ in 0..table.get() {
            out.push_str(&format!("  {row}\n"));
        }
        out.push_str(&format!(
            "\n  {table} ردیف × {} ستون\n  {fact}\n  تعداد کل ستاره‌ها: {}\n",
            self.multiplier,
            fact.product()
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let text = ArrayModelView::default().render(Table::new(3).unwrap());
        let rows: Vec<&str> = text.lines().filter(|l| l.contains('★')).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.matches('★').count() == 4));
        assert!(text.contains("3 × 4 = 12"));
    }
}
