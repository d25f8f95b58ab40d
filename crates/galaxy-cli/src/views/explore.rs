//! Explore: every fact of the table plus the full grid.

use galaxy_model::{Fact, Multiplier, Table, facts_of};

use super::heading;
use crate::render::multiplication_grid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreView {
    /// The cell picked with `pick r c`.
    pub pick: Option<Fact>,
}

impl ExploreView {
    /// Pick cell `row × column` of the full grid.
    pub fn pick(&mut self, row: Table, column: Multiplier) {
        self.pick = Some(Fact::new(row, column));
    }

    pub fn render(&self, table: Table) -> String {
        let mut out = heading(
            &format!("جدول ضرب عدد {table}"),
            "با pick r c هر خونه‌ی جدول رو از نزدیک ببین!",
        );
        out.push('\n');
        for fact in facts_of(table) {
            out.push_str(&format!("  {fact}\n"));
        }
        out.push('\n');
        out.push_str(&multiplication_grid(table).to_string());
        out.push_str("\n\nمیدونی چرا؟\n");
        match self.pick {
            Some(fact) => {
                out.push_str(&format!("  {fact}\n  {}\n", fact.groups_sentence()));
            }
            None => {
                out.push_str(&format!(
                    "  یعنی عدد {table} رو باید چند بار با خودش جمع کنی!\n"
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_ten_facts() {
        let text = ExploreView::default().render(Table::new(7).unwrap());
        assert!(text.contains("جدول ضرب عدد 7"));
        assert!(text.contains("7 × 1 = 7"));
        assert!(text.contains("7 × 10 = 70"));
    }

    #[test]
    fn test_pick_shows_groups() {
        let mut view = ExploreView::default();
        view.pick(Table::new(3).unwrap(), Multiplier::new(4).unwrap());
        let text = view.render(Table::new(7).unwrap());
        assert!(text.contains("3 × 4 = 12"));
        assert!(text.contains("3 دسته 4 تایی میشه 12 تا!"));
    }
}
