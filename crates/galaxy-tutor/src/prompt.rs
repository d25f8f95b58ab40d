//! Prompt text and the offline fallback.

use galaxy_model::Fact;

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a kind, funny, and encouraging Persian math teacher \
for 3rd graders. Use simple language and emojis.";

/// The question put to the model for `a × b`.
pub fn prompt_for(fact: Fact) -> String {
    let a = fact.table.get();
    let b = fact.multiplier.get();
    format!(
        "توضیح بده چرا {a} ضربدر {b} میشه {}. از مثال‌های کودکانه و جذاب مثل دسته‌های سیب یا پریدن روی اعداد استفاده کن. مخاطب یک بچه ۹ ساله کلاس سومیه. خیلی صمیمی و مهربون حرف بزن. پاسخ رو کوتاه و در حد ۲-۳ جمله بنویس.",
        fact.product()
    )
}

/// Shown whenever the model cannot be reached: "a groups of b make a*b".
pub fn fallback_explanation(fact: Fact) -> String {
    format!(
        "اوه! ارتباطم با کهکشان قطع شد. ولی یادت باشه: {} دسته {} تایی میشه {}!",
        fact.table,
        fact.multiplier,
        fact.product()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_model::{Multiplier, Table};

    fn fact(a: u32, b: u32) -> Fact {
        Fact::new(Table::new(a).unwrap(), Multiplier::new(b).unwrap())
    }

    #[test]
    fn test_fallback_mentions_the_fact() {
        let text = fallback_explanation(fact(4, 6));
        assert_eq!(
            text,
            "اوه! ارتباطم با کهکشان قطع شد. ولی یادت باشه: 4 دسته 6 تایی میشه 24!"
        );
    }

    #[test]
    fn test_prompt_mentions_the_fact() {
        let prompt = prompt_for(fact(7, 8));
        assert!(prompt.starts_with("توضیح بده چرا 7 ضربدر 8 میشه 56."));
    }
}
