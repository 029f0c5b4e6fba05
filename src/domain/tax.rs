//! Tax rate escalation.

use tracing::info;

/// Escalates the tax rate once the tax-increase window opens.
///
/// The escalation is one-shot: after the first firing `tax_rate_updated`
/// pins the rate until something resets it.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxManager {
    pub current_tax_rate: f64,
    pub tax_rate_updated: bool,
    pub tax_step: f64,
    pub max_tax_rate: f64,
}

impl Default for TaxManager {
    fn default() -> Self {
        Self {
            current_tax_rate: 0.0,
            tax_rate_updated: false,
            tax_step: 0.10,
            max_tax_rate: 0.99,
        }
    }
}

impl TaxManager {
    /// Bump the rate by one step, capped, when the window is open.
    pub fn update_tax_rate(&mut self, tax_increase_active: bool) {
        if tax_increase_active
            && !self.tax_rate_updated
            && self.current_tax_rate < self.max_tax_rate
        {
            self.current_tax_rate = (self.current_tax_rate + self.tax_step).min(self.max_tax_rate);
            self.tax_rate_updated = true;
            info!(rate_pct = self.current_tax_rate * 100.0, "tax rate increased");
        }
    }
}
