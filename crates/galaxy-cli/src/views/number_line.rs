//! Number line: jumps of the table's size.

use galaxy_model::{Fact, Multiplier, Table};

use super::heading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLineView {
    /// Number of jumps.
    pub multiplier: Multiplier,
}

impl Default for NumberLineView {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::clamped(3),
        }
    }
}

impl NumberLineView {
    pub fn render(&self, table: Table) -> String {
        let fact = Fact::new(table, self.multiplier);
        let mut out = heading(
            "پرش روی محور اعداد (شمارش چندتا چندتا)",
            "ببین چطور با هر پرش به جواب بعدی می‌رسی!",
        );

        let stops = fact
            .jumps()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(&format!(" ⤻{table} "));
        out.push_str(&format!("\n  {stops}\n\n"));
        out.push_str(&format!("  {} پرشِ {table} تایی\n", self.multiplier));
        out.push_str(&format!(
            "  وقتی {} بار به اندازه {table} تا جلو می‌پری، به عدد {} می‌رسی!\n",
            self.multiplier,
            fact.product()
        ));
        out.push_str(&format!("  {fact}\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_from_zero() {
        let text = NumberLineView::default().render(Table::new(4).unwrap());
        insta::assert_snapshot!(
            text.lines().nth(3).unwrap_or_default().trim(),
            @"0 ⤻4 4 ⤻4 8 ⤻4 12"
        );
        assert!(text.contains("به عدد 12 می‌رسی"));
    }
}
