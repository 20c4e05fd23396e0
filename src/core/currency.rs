use rust_decimal::Decimal;

/// Currency of every amount in the sales report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Currency {
    /// Euro (2 decimal places)
    #[default]
    EUR,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::EUR => 2,
        }
    }

    /// Symbol printed after amounts in the report
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "€",
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    /// (banker's rounding)
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Formats the bare number with exactly `scale()` decimals, e.g. `25.00`
    pub fn format_number(&self, amount: Decimal) -> String {
        let scale = self.scale() as usize;
        format!("{:.width$}", self.round(amount), width = scale)
    }

    /// Formats an amount for display, e.g. `25.00 €`
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self.format_number(amount), self.symbol())
    }
}
