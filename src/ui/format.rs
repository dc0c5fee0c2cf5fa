//! Number formatting for display.

use ratatui::style::{Color, Style};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::time::Duration;

/// Format with thousands separators and a fixed number of decimals.
pub fn grouped(value: Decimal, decimals: u32) -> String {
    let rounded = value.abs().round_dp(decimals);
    let text = format!("{:.*}", decimals as usize, rounded);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `$1,234.56`, with a leading minus for negatives.
pub fn usd(value: Decimal) -> String {
    let body = grouped(value.abs(), 2);
    if value < Decimal::ZERO {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// `+$1,234.56` / `-$1,234.56`.
pub fn signed_usd(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{}", usd(value))
    } else {
        usd(value)
    }
}

/// `+2.85%` / `-0.32%`.
pub fn signed_percent(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Compact dollars: `$285.4K`, `$1.2M`.
pub fn compact_usd(value: Decimal) -> String {
    let v = value.to_f64().unwrap_or_default();
    let abs = v.abs();
    if abs >= 1_000_000.0 {
        format!("${:.1}M", v / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("${:.1}K", v / 1_000.0)
    } else {
        format!("${:.0}", v)
    }
}

/// Price with precision suited to its magnitude.
pub fn price(value: Decimal) -> String {
    if value.abs() < Decimal::ONE {
        format!("${:.4}", value)
    } else {
        format!("${}", grouped(value, 2))
    }
}

/// Whole seconds, rounded up, e.g. `12s`.
pub fn countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
    format!("{secs}s")
}

/// Green for gains, red for losses.
pub fn pnl_style(value: Decimal) -> Style {
    if value >= Decimal::ZERO {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

/// Convert for chart axes.
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(dec!(285430.5), 2), "285,430.50");
        assert_eq!(grouped(dec!(100), 0), "100");
        assert_eq!(grouped(dec!(1000), 0), "1,000");
        assert_eq!(grouped(dec!(-1234567.891), 2), "-1,234,567.89");
    }

    #[test]
    fn test_usd_and_signed() {
        assert_eq!(usd(dec!(3946)), "$3,946.00");
        assert_eq!(signed_usd(dec!(2850.75)), "+$2,850.75");
        assert_eq!(signed_usd(dec!(-320.85)), "-$320.85");
        assert_eq!(signed_percent(dec!(-0.32)), "-0.32%");
    }

    #[test]
    fn test_compact_and_price() {
        assert_eq!(compact_usd(dec!(285430.50)), "$285.4K");
        assert_eq!(compact_usd(dec!(1300000)), "$1.3M");
        assert_eq!(price(dec!(0.67)), "$0.6700");
        assert_eq!(price(dec!(87516.52)), "$87,516.52");
    }

    #[test]
    fn test_countdown_rounds_up() {
        assert_eq!(countdown(Duration::from_millis(11_200)), "12s");
        assert_eq!(countdown(Duration::from_secs(15)), "15s");
        assert_eq!(countdown(Duration::ZERO), "0s");
    }
}
