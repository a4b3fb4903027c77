use super::config::UI_CONFIG;

pub fn section_heading(text: &str) -> String {
    format!("-- {} --", text)
}

pub fn separator() -> String {
    "=".repeat(UI_CONFIG.rule_width)
}

/// Dollar price, two decimals for anything a stock trades at, more below a cent.
pub fn format_price(price: f64) -> String {
    if price != 0.0 && price.abs() < 0.01 {
        format!("${:.6}", price)
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices() {
        assert_eq!(format_price(101.256), "$101.26");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(0.000123), "$0.000123");
    }
}
