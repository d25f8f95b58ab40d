//! Teaching modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The nine teaching modes. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Explore,
    RepeatedAddition,
    ArrayModel,
    NumberLine,
    AreaModel,
    FingerMethod,
    Patterns,
    Quiz,
    AiTutor,
}

/// A one-time hint shown the first time a mode is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeHint {
    pub title: &'static str,
    pub message: &'static str,
}

impl Mode {
    /// Every mode, in navigation order.
    pub const ALL: [Mode; 9] = [
        Mode::Explore,
        Mode::RepeatedAddition,
        Mode::ArrayModel,
        Mode::NumberLine,
        Mode::AreaModel,
        Mode::FingerMethod,
        Mode::Patterns,
        Mode::Quiz,
        Mode::AiTutor,
    ];

    /// Stable key used in storage and on the command line.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Explore => "explore",
            Self::RepeatedAddition => "repeated_addition",
            Self::ArrayModel => "array_model",
            Self::NumberLine => "number_line",
            Self::AreaModel => "area_model",
            Self::FingerMethod => "finger_method",
            Self::Patterns => "patterns",
            Self::Quiz => "quiz",
            Self::AiTutor => "ai_tutor",
        }
    }

    /// Look a mode up by key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }

    /// Short navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Explore => "کاوش",
            Self::RepeatedAddition => "جمع",
            Self::ArrayModel => "شکل",
            Self::NumberLine => "محور",
            Self::AreaModel => "مستطیل",
            Self::FingerMethod => "انگشتی",
            Self::Patterns => "الگو",
            Self::Quiz => "مسابقه",
            Self::AiTutor => "معلم",
        }
    }

    /// Whether the mode needs the network to be fully useful.
    pub const fn needs_network(self) -> bool {
        matches!(self, Self::AiTutor)
    }

    /// The first-visit hint for this mode.
    pub const fn hint(self) -> ModeHint {
        match self {
            Self::Explore => ModeHint {
                title: "خوش اومدی قهرمان!",
                message: "در این بخش می‌تونی تمام ضرب‌های یک عدد رو یک‌جا ببینی و باهاشون آشنا بشی.",
            },
            Self::RepeatedAddition => ModeHint {
                title: "جمع تکراری چیه؟",
                message: "ضرب یعنی یک عدد رو چند بار با خودش جمع کنیم. اینجا می‌تونی دسته‌های سیب رو بشماری!",
            },
            Self::ArrayModel => ModeHint {
                title: "چیدمان ستاره‌ای",
                message: "وقتی اشیاء رو در ردیف و ستون مرتب می‌چینیم، با ضرب کردن تعداد ردیف در ستون، کل اون‌ها رو سریع پیدا می‌کنیم.",
            },
            Self::NumberLine => ModeHint {
                title: "پرش‌های بلند",
                message: "روی محور اعداد مثل یک کانگورو بپر! هر پرش تو رو به جواب بعدی جدول ضرب می‌رسونه.",
            },
            Self::AreaModel => ModeHint {
                title: "مستطیل جادویی (تجزیه)",
                message: "یاد بگیر چطور یک ضرب بزرگ رو مرحله به مرحله به دو تا ضرب کوچیک تقسیم کنی تا حل کردنش مثل آب خوردن بشه!",
            },
            Self::FingerMethod => ModeHint {
                title: "جادوی انگشتان",
                message: "دست‌های تو همیشه همراهتن! یاد بگیر چطوری با انگشتات ضرب‌های سخت رو در یک ثانیه جواب بدی.",
            },
            Self::Patterns => ModeHint {
                title: "کارآگاه اعداد",
                message: "هر عدد یک راز مخفی داره. الگوها رو کشف کن تا دیگه نیازی به حفظ کردن نداشته باشی.",
            },
            Self::Quiz => ModeHint {
                title: "میدان مسابقه",
                message: "وقتشه دانشت رو به چالش بکشی! سرعت عمل داشته باش تا بیشترین ستاره رو بگیری.",
            },
            Self::AiTutor => ModeHint {
                title: "معلم هوشمند",
                message: "هر سوالی داری از روبو بپرس. اون با مثال‌های واقعی برات توضیح میده که چرا ضرب اینطوری میشه.",
            },
        }
    }
}

impl FromStr for Mode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ModelError::UnknownMode(s.trim().to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_key(mode.key()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Mode::from_key("flashcards"), None);
        assert_eq!(
            "flashcards".parse::<Mode>(),
            Err(ModelError::UnknownMode("flashcards".to_string()))
        );
    }

    #[test]
    fn test_serde_key_matches_storage_key() {
        for mode in Mode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.key()));
        }
    }

    #[test]
    fn test_only_tutor_needs_network() {
        let online: Vec<Mode> = Mode::ALL.into_iter().filter(|m| m.needs_network()).collect();
        assert_eq!(online, vec![Mode::AiTutor]);
    }
}
