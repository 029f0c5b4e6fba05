//! Start-of-board bonus.

use tracing::info;

use crate::domain::funds::Funds;
use crate::domain::player::Player;

#[derive(Debug, Clone, PartialEq)]
pub struct BonusManager {
    pub pass_start_bonus: Funds,
    pub player_starting_funds: Funds,
}

impl Default for BonusManager {
    fn default() -> Self {
        Self {
            pass_start_bonus: Funds::from(2000u32),
            player_starting_funds: Funds::from(2000u32),
        }
    }
}

impl BonusManager {
    /// Credit the pass-start bonus while the bonus window is open.
    pub fn pass_start(&self, player: &mut Player, bonus_active: bool) {
        if bonus_active {
            player.funds = player.funds.add(self.pass_start_bonus);
            info!(player = %player.identity, bonus = %self.pass_start_bonus, "start bonus granted");
        } else {
            info!(player = %player.identity, "start passed, bonus window closed");
        }
    }
}
