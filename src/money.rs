//! Money Maths
//!
//! Cart totals and the frozen per-line amounts recorded at checkout. All
//! amounts are whole rupees.

/// Flat delivery fee charged on every order, in rupees.
pub const DELIVERY_FEE: u64 = 49;

/// Flat tax charged on every order, in rupees.
pub const TAX_AMOUNT: u64 = 29;

/// Minutes between placing an order and its estimated delivery.
pub const DELIVERY_ETA_MINUTES: i64 = 45;

/// A cart or order line reduced to the numbers pricing cares about.
///
/// For product lines `original_price` and `final_price` come from the catalog
/// row; service lines carry their flat price in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePricing {
    /// Unit list price before any discount, in rupees.
    pub original_price: u64,

    /// Unit display price after discount, in rupees.
    pub final_price: u64,

    /// Unit price agreed through negotiation, if any.
    pub negotiated_price: Option<u64>,

    /// Units on the line.
    pub quantity: u32,
}

impl LinePricing {
    /// Unit price actually charged: the negotiated price when present,
    /// otherwise the display price.
    #[must_use]
    pub fn effective_unit_price(&self) -> u64 {
        self.negotiated_price.unwrap_or(self.final_price)
    }

    /// Line total at the effective unit price.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.effective_unit_price() * u64::from(self.quantity)
    }

    /// Freeze the amounts an order line records at checkout. Later catalog or
    /// cart edits never touch the snapshot.
    #[must_use]
    pub fn charge_snapshot(&self) -> ChargeSnapshot {
        let charged_unit_price = self.effective_unit_price();

        ChargeSnapshot {
            unit_price: self.original_price,
            charged_unit_price,
            total_price: charged_unit_price * u64::from(self.quantity),
        }
    }
}

/// Per-line amounts recorded on an order at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeSnapshot {
    /// Unit list price at checkout time, in rupees.
    pub unit_price: u64,

    /// Unit price the buyer is charged, in rupees.
    pub charged_unit_price: u64,

    /// `charged_unit_price` times the line quantity.
    pub total_price: u64,
}

/// Sum of line totals at effective unit prices, before delivery fee and tax.
pub fn cart_total<I>(lines: I) -> u64
where
    I: IntoIterator<Item = LinePricing>,
{
    lines.into_iter().map(|line| line.line_total()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_line(final_price: u64, negotiated_price: Option<u64>, quantity: u32) -> LinePricing {
        LinePricing {
            original_price: final_price + 400,
            final_price,
            negotiated_price,
            quantity,
        }
    }

    #[test]
    fn display_price_is_charged_without_negotiation() {
        assert_eq!(product_line(1599, None, 1).effective_unit_price(), 1599);
    }

    #[test]
    fn negotiated_price_overrides_display_price() {
        assert_eq!(
            product_line(1599, Some(1299), 1).effective_unit_price(),
            1299
        );
    }

    #[test]
    fn line_total_multiplies_by_quantity() {
        assert_eq!(product_line(1599, None, 2).line_total(), 3198);
    }

    #[test]
    fn cart_total_sums_mixed_lines() {
        let lines = [
            product_line(1599, None, 2),
            product_line(2000, Some(1800), 1),
            // a flat-price service
            LinePricing {
                original_price: 499,
                final_price: 499,
                negotiated_price: None,
                quantity: 1,
            },
        ];

        assert_eq!(cart_total(lines), 3198 + 1800 + 499);
    }

    #[test]
    fn cart_total_of_no_lines_is_zero() {
        assert_eq!(cart_total([]), 0);
    }

    #[test]
    fn snapshot_keeps_list_price_and_charged_price_apart() {
        let snapshot = product_line(1599, Some(1299), 1).charge_snapshot();

        assert_eq!(snapshot.unit_price, 1999);
        assert_eq!(snapshot.charged_unit_price, 1299);
        assert_eq!(snapshot.total_price, 1299);
    }

    #[test]
    fn snapshot_without_negotiation_charges_the_display_price() {
        let snapshot = product_line(1599, None, 3).charge_snapshot();

        assert_eq!(snapshot.charged_unit_price, 1599);
        assert_eq!(snapshot.total_price, 4797);
    }
}
