//! Area model: counting the cells of a rectangle, split at five.

use galaxy_model::{Fact, Multiplier, Table};

use super::heading;

/// Column after which the rectangle is split.
const SPLIT_COLUMN: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaModelView {
    /// Number of columns.
    pub multiplier: Multiplier,
    /// Number each cell instead of drawing a block.
    pub show_count: bool,
}

impl Default for AreaModelView {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::clamped(4),
            show_count: false,
        }
    }
}

impl AreaModelView {
    /// Flip cell numbering; returns the new setting.
    pub fn toggle_count(&mut self) -> bool {
        self.show_count = !self.show_count;
        self.show_count
    }

    pub fn render(&self, table: Table) -> String {
        let fact = Fact::new(table, self.multiplier);
        let columns = self.multiplier.get();
        let split = fact.split_at_five();
        let mut out = heading(
            "روش مستطیل (شمارش خانه‌ها)",
            "ضرب یعنی شمارش خانه‌های یک مستطیل!",
        );
        out.push_str(&format!("\n  {table} ردیف × {columns} ستون\n\n"));

        for row in 0..table.get() {
            out.push_str("  ");
            for col in 0..columns {
                if split.is_some() && col == SPLIT_COLUMN {
                    out.push_str("│ ");
                }
                if self.show_count {
                    out.push_str(&format!("{:>3} ", row * columns + col + 1));
                } else {
                    out.push_str("■ ");
                }
            }
            out.push('\n');
        }

        out.push_str(&format!("\n  شمردیم: {} خانه\n", fact.product()));
        out.push_str(&format!("  پس {fact}\n"));
        if let Some((five, rest)) = split {
            out.push_str(&format!(
                "  {table} × {columns} = ({table} × 5) + ({table} × {}) = {five} + {rest} = {}\n",
                columns - SPLIT_COLUMN,
                fact.product()
            ));
        }
        let toggle = if self.show_count {
            "🔢 مخفی کردن اعداد"
        } else {
            "🔢 نمایش شماره خانه‌ها"
        };
        out.push_str(&format!("  (count: {toggle})\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(m: u32) -> AreaModelView {
        AreaModelView {
            multiplier: Multiplier::new(m).unwrap(),
            show_count: false,
        }
    }

    #[test]
    fn test_no_split_up_to_five() {
        let text = view(5).render(Table::new(3).unwrap());
        assert!(!text.contains('│'));
        assert!(text.contains("شمردیم: 15 خانه"));
    }

    #[test]
    fn test_split_above_five() {
        let text = view(8).render(Table::new(7).unwrap());
        assert!(text.contains("7 × 8 = (7 × 5) + (7 × 3) = 35 + 21 = 56"));
        assert_eq!(text.matches('│').count(), 7);
    }

    #[test]
    fn test_count_toggle_numbers_cells() {
        let mut v = view(4);
        assert!(v.toggle_count());
        let text = v.render(Table::new(2).unwrap());
        assert!(text.contains("  1   2   3   4"));
        assert!(text.contains("  8"));
        assert!(!v.toggle_count());
    }
}
