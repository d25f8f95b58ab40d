//! Finger method, with the nines trick.

use galaxy_model::{Fact, Multiplier, Table};

use super::heading;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerMethodView {
    /// The folded finger.
    pub multiplier: Multiplier,
}

impl Default for FingerMethodView {
    fn default() -> Self {
        Self {
            multiplier: Multiplier::clamped(4),
        }
    }
}

impl FingerMethodView {
    pub fn render(&self, table: Table) -> String {
        let fact = Fact::new(table, self.multiplier);
        let nines = fact.nines_fingers();
        let (title, subtitle) = if nines.is_some() {
            (
                "روش انگشتی (جادوی عدد ۹)",
                "ببین چطور با انگشتات میتونی ضرب ۹ رو سریع جواب بدی!",
            )
        } else {
            ("روش انگشتی", "ضرب رو با انگشتات حس کن!")
        };
        let mut out = heading(title, subtitle);

        out.push_str(&format!("\n  {}\n", self.hands()));
        if let Some(fingers) = nines {
            out.push_str(&format!(
                "  دهگان: {}    یکان: {}\n",
                fingers.tens, fingers.ones
            ));
        }
        out.push_str(&format!("\n  {fact}\n"));
        if nines.is_some() {
            out.push_str(&format!(
                "  راز انگشتی ۹: انگشت شماره {} رو بخوابون. تعداد انگشت‌های سمت چپ میشه دهگان و سمت راست میشه یکان!\n",
                self.multiplier
            ));
        } else {
            out.push_str("  برای ضرب‌های دیگه هم میتونی از انگشتات استفاده کنی، مثلا برای عدد ۵!\n");
        }
        out.push_str(&format!(
            "  کدوم انگشت رو بخوابونیم؟ (عدد {})\n",
            self.multiplier
        ));
        out
    }

    /// Ten fingers, two hands; the folded one drawn low.
    fn hands(&self) -> String {
        let folded = self.multiplier.get();
        let finger = |i: u32| if i == folded { "_" } else { "|" };
        let left: String = (1..=5).map(finger).collect::<Vec<_>>().join(" ");
        let right: String = (6..=10).map(finger).collect::<Vec<_>>().join(" ");
        format!("{left}    {right}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(m: u32) -> FingerMethodView {
        FingerMethodView {
            multiplier: Multiplier::new(m).unwrap(),
        }
    }

    #[test]
    fn test_nines_trick() {
        let text = view(7).render(Table::new(9).unwrap());
        assert!(text.contains("جادوی عدد ۹"));
        assert!(text.contains("دهگان: 6    یکان: 3"));
        assert!(text.contains("9 × 7 = 63"));
    }

    #[test]
    fn test_hands_fold_one_finger() {
        insta::assert_snapshot!(view(7).hands(), @"| | | | |    | _ | | |");
        insta::assert_snapshot!(view(1).hands(), @"_ | | | |    | | | | |");
    }

    #[test]
    fn test_other_tables_have_no_trick() {
        let text = view(4).render(Table::new(6).unwrap());
        assert!(!text.contains("دهگان"));
        assert!(text.contains("6 × 4 = 24"));
    }
}
