//! Text and JSON rendering of catalog entries and results.
//!
//! Rounding happens here only; computed amounts stay unrounded.

use serde::Serialize;
use split_types::{AllocationMethod, AllocationResult};
use std::fmt::Write as _;

use crate::config::DisplayConfig;

pub const TOTAL_LABEL: &str = "Salaire total";

pub fn format_amount(amount: f64, display: &DisplayConfig) -> String {
    format!("{amount:.prec$} {currency}", prec = display.decimals, currency = display.currency)
}

/// `Salaire total : …` followed by one `label : amount` line per category.
pub fn render_result(result: &AllocationResult, display: &DisplayConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TOTAL_LABEL} : {}", format_amount(result.salary, display));
    for allocation in result {
        let _ = writeln!(out, "{} : {}", allocation.label, format_amount(allocation.amount, display));
    }
    out
}

pub fn render_methods(methods: &[AllocationMethod]) -> String {
    let mut out = String::new();
    for method in methods {
        let breakdown = method
            .shares
            .iter()
            .map(|share| format!("{}% {}", format_percent(share.fraction), share.label))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{}\t{}\t{}", method.id, method.name, breakdown);
    }
    out
}

fn format_percent(fraction: f64) -> String {
    let percent = format!("{:.2}", fraction * 100.0);
    percent.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use split_calculator::{Catalog, calculate};

    #[test]
    fn amounts_use_fixed_decimals_and_currency() {
        let display = DisplayConfig::default();
        assert_eq!(format_amount(1234.5, &display), "1234.50 dh");
        assert_eq!(format_amount(1.0 / 3.0, &display), "0.33 dh");

        let display = DisplayConfig { currency: "EUR".to_string(), decimals: 0 };
        assert_eq!(format_amount(99.6, &display), "100 EUR");
    }

    #[test]
    fn result_lists_total_then_categories() {
        let result = calculate(1000.0, Catalog::builtin().find_method("80/20")).unwrap();
        let text = render_result(&result, &DisplayConfig::default());
        assert_eq!(
            text,
            "Salaire total : 1000.00 dh\nDépenses courantes : 800.00 dh\nÉpargne : 200.00 dh\n"
        );
    }

    #[test]
    fn percentages_drop_trailing_zeros() {
        assert_eq!(format_percent(0.5), "50");
        assert_eq!(format_percent(0.05), "5");
        assert_eq!(format_percent(0.125), "12.5");
    }

    #[test]
    fn method_listing_has_one_line_per_method() {
        let text = render_methods(Catalog::builtin().list_methods());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[1],
            "80/20\tMéthode 80/20 (Pareto)\t80% Dépenses courantes, 20% Épargne"
        );
    }
}
