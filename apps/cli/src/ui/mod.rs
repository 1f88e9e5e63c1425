use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use console::style;

pub fn heading(text: &str) {
    println!("\n{}", style(text).bold().underlined());
}

pub fn metric(label: &str, value: String) {
    println!("{} {}", style(format!("{label}:")).bold(), value);
}

pub fn warn(message: impl AsRef<str>) {
    println!("{} {}", style("warning:").yellow().bold(), message.as_ref());
}

pub fn info(message: impl AsRef<str>) {
    println!("{} {}", style("info:").cyan().bold(), message.as_ref());
}

/// Condensed table with a header row, ready for data rows.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(headers.iter().map(|h| Cell::new(h)));
    table
}

/// `$1,234,567` (rounded to whole dollars, sign preserved)
pub fn money(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn pct(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(999.0), "$999");
        assert_eq!(money(1_000.0), "$1,000");
        assert_eq!(money(25_000_000.0), "$25,000,000");
        assert_eq!(money(-1_234.5), "-$1,235");
    }
}
