//! Turn-scheduled rent reduction.

use tracing::info;

use crate::domain::registry::EstateRegistry;

/// Shaves a step off every estate's rent at a fixed turn interval, up to a
/// cumulative cap. The final step is clamped to the remaining headroom.
#[derive(Debug, Clone, PartialEq)]
pub struct RentManager {
    pub rent_reduction_step: f64,
    pub rent_reduction_interval_turns: u32,
    pub max_rent_reduction: f64,
    pub current_rent_reduction: f64,
    pub next_rent_reduction_turn: u32,
}

impl Default for RentManager {
    fn default() -> Self {
        Self {
            rent_reduction_step: 0.10,
            rent_reduction_interval_turns: 20,
            max_rent_reduction: 0.50,
            current_rent_reduction: 0.0,
            next_rent_reduction_turn: 20,
        }
    }
}

impl RentManager {
    /// Apply the next reduction step if the schedule has come due.
    pub fn reduce_rent(&mut self, current_turn: u32, registry: &mut EstateRegistry) {
        if current_turn >= self.next_rent_reduction_turn
            && self.current_rent_reduction < self.max_rent_reduction
        {
            let remaining = self.max_rent_reduction - self.current_rent_reduction;
            let step = self.rent_reduction_step.min(remaining);
            for estate in registry.iter_mut() {
                estate.reduce_rent(step * 100.0);
            }
            self.current_rent_reduction += step;
            self.next_rent_reduction_turn += self.rent_reduction_interval_turns;
            info!(
                step_pct = step * 100.0,
                total_pct = self.current_rent_reduction * 100.0,
                "rent reduced"
            );
            if self.current_rent_reduction >= self.max_rent_reduction {
                info!("maximum rent reduction reached");
            }
        }
    }
}
