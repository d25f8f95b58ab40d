//! Repeated addition: groups of apples.

use galaxy_model::{Fact, Multiplier, Table};

use super::heading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedAdditionView {
    /// Number of groups.
    pub multiplier: Multiplier,
}

impl Default for RepeatedAdditionView {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::clamped(3),
        }
    }
}

impl RepeatedAdditionView {
    pub fn render(&self, table: Table) -> String {
        let fact = Fact::new(table, self.multiplier);
        let mut out = heading(
            "روش جمع تکراری",
            "ضرب یعنی یک عدد رو چند بار با خودش جمع کنی!",
        );

        let group = format!("({})", "🍎".repeat(table.get() as usize));
        let groups = vec![group; self.multiplier.get() as usize].join(" + ");
        out.push_str(&format!("\n  {groups}\n"));

        let sum = fact
            .addends()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        out.push_str(&format!("  {sum} = {}\n\n", fact.product()));
        out.push_str(&format!("  {fact}\n"));
        out.push_str(&format!(
            "  در واقع داری {} بار عدد {} رو با هم جمع می‌کنی.\n",
            self.multiplier, table
        ));
        out.push_str("  چند دسته سیب داشته باشیم؟ (m 1 تا m 10)\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_three_groups() {
        let text = RepeatedAdditionView::default().render(Table::new(4).unwrap());
        assert!(text.contains("4 + 4 + 4 = 12"));
        assert!(text.contains("(🍎🍎🍎🍎) + (🍎🍎🍎🍎) + (🍎🍎🍎🍎)"));
        assert!(text.contains("در واقع داری 3 بار عدد 4"));
    }

    #[test]
    fn test_single_group_has_no_plus() {
        let view = RepeatedAdditionView {
            multiplier: Multiplier::new(1).unwrap(),
        };
        let text = view.render(Table::new(6).unwrap());
        assert!(text.contains("  6 = 6\n"));
    }
}
