//! Pattern explorer: each table's secret.

use galaxy_model::{Table, facts_of, secret_for};

use super::heading;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternsView;

impl PatternsView {
    pub fn render(self, table: Table) -> String {
        let secret = secret_for(table);
        let mut out = heading(
            &format!("الگویاب و اسرار عدد {table}"),
            "هر عدد یک رمز مخفی داره، بیا کشفش کنیم!",
        );
        out.push_str(&format!("\n  ✨ {}\n  {}\n", secret.title, secret.hint));
        for rule in secret.rules {
            out.push_str(&format!("   • {rule}\n"));
        }
        out.push_str("\n  بیا الگو رو توی جدول ببینی:\n");
        for fact in facts_of(table) {
            out.push_str(&format!("    {fact}\n"));
        }
        out.push_str(
            "\n  نکته طلایی: وقتی الگوها رو یاد بگیری، دیگه لازم نیست حفظ کنی، فقط کافیه فکر کنی!\n",
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_secret_and_products() {
        let table = Table::new(9).unwrap();
        let text = PatternsView.render(table);
        assert!(text.contains(secret_for(table).title));
        assert!(text.contains("9 × 10 = 90"));
        for rule in secret_for(table).rules {
            assert!(text.contains(rule));
        }
    }
}
