//! Cart total calculation.

/// A sku and quantity pair submitted for quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    pub sku: String,
    pub qty: i64,
}

/// The result of quoting a set of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub items: Vec<QuoteLine>,
    pub total_cents: u64,
    pub currency: String,
}

/// Quote a set of lines.
///
/// Pricing rules (promotions, taxes, tiered prices) have not landed yet, so
/// the total is always zero. The lines are echoed back so clients can render
/// the quote shape they will eventually receive.
#[must_use]
pub fn calculate_total(items: Vec<QuoteLine>) -> Quote {
    Quote {
        items,
        total_cents: 0,
        currency: "USD".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_zero_for_empty_input() {
        let quote = calculate_total(Vec::new());

        assert_eq!(quote.total_cents, 0);
        assert_eq!(quote.currency, "USD");
        assert!(quote.items.is_empty());
    }

    #[test]
    fn lines_are_echoed_back_unchanged() {
        let lines = vec![
            QuoteLine {
                sku: "TEE-RED-M".to_string(),
                qty: 2,
            },
            QuoteLine {
                sku: "MUG-01".to_string(),
                qty: 1,
            },
        ];

        let quote = calculate_total(lines.clone());

        assert_eq!(quote.items, lines);
        assert_eq!(quote.total_cents, 0, "pricing is not implemented yet");
    }
}
