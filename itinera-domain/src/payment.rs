use rust_decimal::Decimal;

/// Derived paid/unpaid flag over a billing scope. Never persisted and never
/// part of the wire document; computed where it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    /// A scope is paid when the summed totals and summed payments agree
    /// within a cent.
    pub fn from_totals(total: Decimal, paid: Decimal) -> Self {
        if (total - paid).abs() < Decimal::new(1, 2) {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }

    /// Sums `(total_amount, paid_amount)` pairs, treating missing amounts as
    /// zero. An empty scope therefore comes out paid.
    pub fn from_amounts<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (Option<Decimal>, Option<Decimal>)>,
    {
        let mut total = Decimal::ZERO;
        let mut paid = Decimal::ZERO;
        for (t, p) in amounts {
            total += t.unwrap_or_default();
            paid += p.unwrap_or_default();
        }
        Self::from_totals(total, paid)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }
}
