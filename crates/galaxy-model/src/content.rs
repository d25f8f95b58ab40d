//! Static per-table content: pattern secrets and teaching notes.
//!
//! Lookups never fail. Tables without an entry get a fallback.

use crate::table::Table;

/// The "secret" of a table, shown by the pattern explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSecret {
    pub title: &'static str,
    pub hint: &'static str,
    pub rules: &'static [&'static str],
}

/// Explanatory notes for a table, shown by the tutor view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeachingNotes {
    pub concept: &'static str,
    pub real_world: &'static str,
    pub trick: &'static str,
    pub example: &'static str,
}

static FALLBACK_SECRET: TableSecret = TableSecret {
    title: "راز کهکشانی",
    hint: "هر عددی رازی داره!",
    rules: &["تمرین مداوم بهترین راه یادگیریه."],
};

static SECRETS: [TableSecret; 10] = [
    TableSecret {
        title: "آینه جادویی",
        hint: "عدد ۱ مثل آینه عمل می‌کنه!",
        rules: &["هر عددی در ۱ ضرب بشه، خودش باقی می‌مونه.", "مثال: ۱ × ۵ = ۵"],
    },
    TableSecret {
        title: "دوستان دوقلو",
        hint: "ضرب در ۲ یعنی عدد رو دو برابر کن!",
        rules: &[
            "جواب همیشه یک عدد زوج هست (آخرش ۰، ۲، ۴، ۶، یا ۸ داره).",
            "مثل اینه که عدد رو با خودش جمع کنی.",
        ],
    },
    TableSecret {
        title: "الگوی زیگزاگی",
        hint: "مجموع رقم‌های جواب رو چک کن!",
        rules: &[
            "اگه رقم‌های جواب رو با هم جمع کنی، همیشه یکی از عددهای ۳، ۶ یا ۹ میشه.",
            "مثال: ۳ × ۴ = ۱۲ -> ۱ + ۲ = ۳",
        ],
    },
    TableSecret {
        title: "دوبار دوبرابر",
        hint: "یه ترفند سریع برای عدد ۴!",
        rules: &[
            "عدد رو یکبار دوبرابر کن، بعد دوباره جواب رو دوبرابر کن.",
            "مثال: ۴ × ۵ -> اول ۵+۵=۱۰، بعد ۱۰+۱۰=۲۰",
        ],
    },
    TableSecret {
        title: "ساعت ۵ عصر",
        hint: "پنج‌تا پنج‌تا بشمار!",
        rules: &[
            "جواب همیشه یا به ۰ ختم میشه یا به ۵.",
            "اگه در عدد زوج ضرب بشه به ۰ و اگه در عدد فرد ضرب بشه به ۵ ختم میشه.",
        ],
    },
    TableSecret {
        title: "زوج‌های مهربون",
        hint: "راز عدد ۶ با عددهای زوج!",
        rules: &[
            "وقتی ۶ رو در یک عدد زوج ضرب می‌کنی، رقم آخر جواب همون عدد هست!",
            "مثال: ۶ × ۴ = ۲۴ (آخرش ۴ داره)",
        ],
    },
    TableSecret {
        title: "سخت‌ترین قهرمان",
        hint: "برای ۷ باید بیشتر تمرین کنی!",
        rules: &[
            "۷ × ۸ = ۵۶ (این یکی از سخت‌ترین‌هاست، یادت بمونه!)",
            "الگوی خاصی نداره، ولی با تکرار ملکه‌ی ذهنت میشه.",
        ],
    },
    TableSecret {
        title: "نصف عدد ۴",
        hint: "هشت یعنی سه بار دوبرابر!",
        rules: &[
            "عدد رو سه بار دوبرابر کن: دوبرابرِ دوبرابرِ دوبرابر!",
            "مثال: ۸ × ۳ -> ۶، ۱۲، ۲۴",
        ],
    },
    TableSecret {
        title: "جادوی انگشتان",
        hint: "راز عدد ۹ شگفت‌انگیزه!",
        rules: &[
            "مجموع رقم‌های جواب همیشه ۹ میشه! (مثال: ۹ × ۴ = ۳۶ -> ۳ + ۶ = ۹)",
            "دهگان جواب همیشه یکی کمتر از عددیه که در ۹ ضرب کردی.",
        ],
    },
    TableSecret {
        title: "غول صفر",
        hint: "راحت‌ترین ضرب دنیا!",
        rules: &[
            "فقط یک صفر بذار جلوی عددی که در ۱۰ ضرب شده.",
            "مثال: ۱۰ × ۷ = ۷۰",
        ],
    },
];

static NOTES: [TeachingNotes; 10] = [
    TeachingNotes {
        concept: "هر عددی ضرب در ۱ میشه خودش! مثل اینه که یه چیزو یک بار داشته باشی.",
        real_world: "اگه یک پیتزا داشته باشی، همون یک پیتزا رو خواهی خورد!",
        trick: "ساده‌ترین جدول! فقط کافیه عدد رو بنویسی.",
        example: "۱ × ۵ = ۵ چون یک دسته ۵ تایی داریم.",
    },
    TeachingNotes {
        concept: "ضرب در ۲ یعنی دوبرابر! مثل اینکه دو تا از یه چیز داشته باشی.",
        real_world: "اگه دو تا دست داری و هرکدوم ۳ تا انگشت داشته باشن، جمعاً ۶ تا انگشتی!",
        trick: "عدد رو اول با خودش جمع کن: ۴ × ۲ = ۴ + ۴ = ۸",
        example: "۲ × ۶ = ۱۲ چون دو دسته ۶ تایی میشه ۱۲ تا.",
    },
    TeachingNotes {
        concept: "ضرب در ۳ یعنی سه تا! مثل سه قسمت یک چیز.",
        real_world: "سه نفر دوست داری، به هرکدوم ۴ تا شیرینی میدی = ۱۲ تا شیرینی!",
        trick: "عدد رو سه بار جمع کن: ۳ × ۴ = ۴ + ۴ + ۴ = ۱۲",
        example: "۳ × ۵ = ۱۵ چون سه دسته ۵ تایی میشه ۱۵.",
    },
    TeachingNotes {
        concept: "ضرب در ۴ مثل چهار گوشه یک چیزه! دو برابر دو برابر.",
        real_world: "یه میز ۴ پا داره، اگه ۳ تا میز داشته باشی = ۱۲ تا پا!",
        trick: "دو بار دوبرابر کن: ۴ × ۳ → ابتدا ۳ × ۲ = ۶ بعد ۶ × ۲ = ۱۲",
        example: "۴ × ۵ = ۲۰ چون چهار دسته ۵ تایی.",
    },
    TeachingNotes {
        concept: "ضرب در ۵ خیلی راحته! همیشه به ۰ یا ۵ ختم میشه.",
        real_world: "پنج انگشت داری، ۴ نفر = ۲۰ انگشت کل!",
        trick: "عدد رو ضرب در ۱۰ کن و نصفش کن: ۵ × ۶ → ۶ × ۱۰ = ۶۰، نصفش = ۳۰",
        example: "۵ × ۷ = ۳۵ چون پنج دسته ۷ تایی.",
    },
    TeachingNotes {
        concept: "ضرب در ۶ ترکیب ۲ و ۳ هست! راحت‌تر از چیزی که فکر می‌کنی.",
        real_world: "یه تخم مرغ بسته ۶ تایی داره، ۴ بسته = ۲۴ تا تخم مرغ!",
        trick: "ابتدا ضرب در ۳ کن، بعد دو برابر: ۶ × ۴ → ۳ × ۴ = ۱۲، بعد ۱۲ × ۲ = ۲۴",
        example: "۶ × ۵ = ۳۰ چون شش دسته ۵ تایی.",
    },
    TeachingNotes {
        concept: "ضرب در ۷ یکم سخت‌تره ولی با تمرین راحت میشه!",
        real_world: "هفته ۷ روزه، ۳ هفته = ۲۱ روز!",
        trick: "از ۵ کمک بگیر: ۷ × ۶ = (۵ × ۶) + (۲ × ۶) = ۳۰ + ۱۲ = ۴۲",
        example: "۷ × ۸ = ۵۶ چون هفت دسته ۸ تایی.",
    },
    TeachingNotes {
        concept: "ضرب در ۸ یعنی دو برابر، دو برابر، دو برابر!",
        real_world: "یه اختاپوس ۸ تا پا داره، ۳ تا اختاپوس = ۲۴ پا!",
        trick: "سه بار دوبرابر کن: ۸ × ۵ → ۵×۲=۱۰ → ۱۰×۲=۲۰ → ۲۰×۲=۴۰",
        example: "۸ × ۶ = ۴۸ چون هشت دسته ۶ تایی.",
    },
    TeachingNotes {
        concept: "ضرب در ۹ یه ترفند جالب داره! انگشتات میتونن کمکت کنن.",
        real_world: "۹ تا موز در هر دسته، ۵ دسته = ۴۵ تا موز!",
        trick: "ضرب در ۱۰ کن، یکی کم کن: ۹ × ۷ = (۱۰ × ۷) - ۷ = ۷۰ - ۷ = ۶۳",
        example: "۹ × ۴ = ۳۶ چون نه دسته ۴ تایی.",
    },
    TeachingNotes {
        concept: "ساده‌ترین جدول بعد از ۱! فقط یه صفر اضافه کن.",
        real_world: "۱۰ تا انگشت داری، ۳ نفر = ۳۰ انگشت!",
        trick: "فقط صفر بنویس: ۱۰ × ۶ = ۶۰",
        example: "۱۰ × ۸ = ۸۰ چون ده دسته ۸ تایی.",
    },
];

fn slot(table: Table) -> usize {
    table.get() as usize - 1
}

/// The pattern secret for a table, or the generic galaxy secret.
pub fn secret_for(table: Table) -> &'static TableSecret {
    SECRETS.get(slot(table)).unwrap_or(&FALLBACK_SECRET)
}

/// Teaching notes for a table, falling back to the table of one.
pub fn notes_for(table: Table) -> &'static TeachingNotes {
    NOTES.get(slot(table)).unwrap_or(&NOTES[0])
}

/// The generic secret used when a table has no entry of its own.
pub fn fallback_secret() -> &'static TableSecret {
    &FALLBACK_SECRET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_has_its_own_secret() {
        for table in Table::all() {
            let secret = secret_for(table);
            assert_ne!(secret, fallback_secret());
            assert!(!secret.rules.is_empty());
        }
    }

    #[test]
    fn test_secret_lookup() {
        assert_eq!(secret_for(Table::new(9).unwrap()).title, "جادوی انگشتان");
    }

    #[test]
    fn test_notes_lookup() {
        let notes = notes_for(Table::new(7).unwrap());
        assert!(notes.real_world.contains("هفته"));
    }
}
