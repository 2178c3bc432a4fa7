// Mon Oct 19 2026 - Alex

use crate::ui::locale::Locale;
use colored::*;

pub struct Banner;

impl Banner {
    pub fn print(locale: &Locale) {
        for line in Self::lines(locale) {
            println!("{}", line);
        }
    }

    pub fn lines(locale: &Locale) -> Vec<String> {
        let title = format!("{} v{}", locale.get("title"), env!("CARGO_PKG_VERSION"));
        let width = title.chars().count().max(locale.get("subtitle").chars().count()) + 4;

        vec![
            "=".repeat(width).cyan().to_string(),
            format!("  {}", title.cyan().bold()),
            format!("  {}", locale.get("subtitle").dimmed()),
            "=".repeat(width).cyan().to_string(),
            locale.get("ready").green().to_string(),
        ]
    }
}
