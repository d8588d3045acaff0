use rust_decimal::Decimal;

use crate::calculator::input::InputError;
use crate::calculator::{WeekdayBreakdown, WEEKEND_DAY_HOURS};
use crate::models::{Category, Rate, Totals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    MarkdownV2,
}

/// One outbound message, optionally carrying the main menu keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub menu: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            menu: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::MarkdownV2,
            menu: false,
        }
    }

    pub fn with_menu(mut self) -> Self {
        self.menu = true;
        self
    }
}

const HELP_TEXT: &str = "📘 *Cara guna:*\n\
1\\) Taip *rate sejam* \\(cth: `12.5`\\)\\.\n\
2\\) Guna butang:\n\
• 🏢 *Weekday* → balas `OT1 OT2 OT3` \\(cth: `2 1 0`\\); OT1 \\= 3j, OT2 \\= 4j, OT3 \\= 5j\\.\n\
• 📅 *Weekend* → balas *bilangan hari* \\(1 hari \\= 8 jam\\), cth: `2`\\.\n\
• 🎉 *Public Holiday* → balas *jumlah jam*, cth: `9`\\.\n\
• 💰 *Total* → lihat ringkasan kiraan\\.\n\
• ♻️ *Reset* → kosongkan semua kiraan dan rate\\.";

const WEEKDAY_PROMPT: &str = "Masukkan hari untuk OT1, OT2, OT3\\.\n\
Contoh: `2 1 0`\n\
Format: OT1 OT2 OT3";

const WEEKEND_PROMPT: &str =
    "Masukkan *bilangan hari* weekend \\(1 hari \\= 8 jam\\)\\. Contoh: `2`";

const HOLIDAY_PROMPT: &str = "Masukkan *jumlah jam* OT Public Holiday\\. Contoh: `10`";

pub fn help() -> Reply {
    Reply::markdown(HELP_TEXT).with_menu()
}

pub fn pong() -> Reply {
    Reply::plain("pong")
}

pub fn rate_prompt() -> Reply {
    Reply::plain("Masukkan kadar OT sejam (contoh: 10.5)")
}

pub fn rate_invalid(error: &InputError) -> Reply {
    match error {
        InputError::TooLarge { max } => {
            Reply::plain(format!("❌ Rate terlalu besar. Maksimum RM {max} sejam."))
        }
        _ => Reply::plain("❌ Tolong masukkan nombor rate sejam (cth: 10.5)"),
    }
}

pub fn rate_first() -> Reply {
    Reply::plain("⚠️ Sila masukkan rate sejam dahulu (cth: 10.5).")
}

pub fn rate_set(rate: Rate) -> Reply {
    Reply::plain(format!(
        "✅ Rate OT diset: RM {:.2}/jam\n\nSila pilih jenis OT:",
        rate.value().round_dp(2)
    ))
    .with_menu()
}

pub fn menu() -> Reply {
    Reply::plain("Sila pilih jenis OT:").with_menu()
}

pub fn category_prompt(category: Category) -> Reply {
    Reply::markdown(match category {
        Category::Weekday => WEEKDAY_PROMPT,
        Category::Weekend => WEEKEND_PROMPT,
        Category::Holiday => HOLIDAY_PROMPT,
    })
}

pub fn format_error(error: &InputError) -> Reply {
    let text = match error {
        InputError::WrongArity { .. } => "❌ Format salah. Contoh: 2 1 0".to_string(),
        InputError::Negative => "❌ Format salah. Nilai tidak boleh negatif.".to_string(),
        InputError::TooLarge { max } => format!("❌ Format salah. Nilai maksimum ialah {max}."),
        _ => "❌ Format salah. Masukkan nombor sahaja.\n\
              Jika perlukan bantuan, tekan 📘 Help."
            .to_string(),
    };
    Reply::plain(text).with_menu()
}

pub fn weekday(breakdown: &WeekdayBreakdown) -> Reply {
    let mut text = String::from("💰 Weekday:\n");
    for slot in &breakdown.slots {
        text.push_str(&format!(
            "{} ({}j × {}h): RM {:.2}\n",
            slot.label, slot.hours, slot.days, slot.amount
        ));
    }
    text.push_str(&format!("\n✅ Total Weekday: RM {:.2}", breakdown.total));
    Reply::plain(text).with_menu()
}

pub fn weekend(days: u32, amount: Decimal) -> Reply {
    Reply::plain(format!(
        "💰 Weekend: {days} hari × {WEEKEND_DAY_HOURS}j = RM {amount:.2}"
    ))
    .with_menu()
}

pub fn holiday(hours: Decimal, amount: Decimal) -> Reply {
    Reply::plain(format!("💰 Public Holiday: {}j = RM {amount:.2}", hours.normalize())).with_menu()
}

pub fn summary(totals: &Totals) -> Reply {
    let mut text = String::from("📊 Ringkasan OT:\n");
    for category in Category::ALL {
        text.push_str(&format!(
            "{} {}: RM {:.2}\n",
            category.emoji(),
            category.label(),
            totals.get(category)
        ));
    }
    text.push_str(&format!("\n💰 Total: RM {:.2}", totals.grand_total()));
    Reply::plain(text).with_menu()
}
