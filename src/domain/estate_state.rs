//! Estate ownership state machine.
//!
//! What an estate action does depends on both the current ownership state
//! and who is acting, so each action dispatches once over the state:
//!
//! | state     | buy             | mortgage          | buyback          | advance_turn          |
//! |-----------|-----------------|-------------------|------------------|-----------------------|
//! | NotOwned  | → Owned         | `EstateNotOwned`  | `EstateNotOwned` | no-op                 |
//! | Owned     | `AlreadyOwned`  | → Mortgaged(15)   | `EstateMortgaged`| no-op                 |
//! | Mortgaged | `EstateMortgaged`| `EstateMortgaged`| → Owned          | countdown → repossess |
//!
//! Mortgage and buyback additionally require the actor to be the owner
//! (`EstatePermission` otherwise). The machine owns only the estate-local
//! fields; callers holding owned-estate collections mirror every ownership
//! change themselves.

use std::fmt;

use tracing::info;

use crate::domain::error::TycoonError;
use crate::domain::estate::Estate;
use crate::domain::player::PlayerId;

/// Turns a mortgaged estate waits before it is repossessed.
pub const TURNS_UNTIL_BUYBACK: u32 = 15;

/// Ownership status of an estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstateState {
    NotOwned,
    Owned,
    Mortgaged { turns_until_buyback: u32 },
}

/// Action attempted against an estate, for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstateAction {
    Buy,
    Mortgage,
    Buyback,
    Trade,
    BuildStar,
}

impl fmt::Display for EstateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EstateAction::Buy => "buy",
            EstateAction::Mortgage => "mortgage",
            EstateAction::Buyback => "buy back",
            EstateAction::Trade => "trade",
            EstateAction::BuildStar => "build a star",
        };
        f.write_str(name)
    }
}

impl Estate {
    /// Purchase by `player`. Legal only while nobody owns the estate.
    pub fn buy(&mut self, player: PlayerId) -> Result<(), TycoonError> {
        match self.state() {
            EstateState::NotOwned => {
                self.set_owner(Some(player));
                self.set_state(EstateState::Owned);
                info!(estate = %self.name, %player, "estate purchased");
                Ok(())
            }
            EstateState::Owned => Err(TycoonError::EstateAlreadyOwned {
                estate: self.name.clone(),
            }),
            EstateState::Mortgaged { .. } => Err(TycoonError::EstateMortgaged {
                estate: self.name.clone(),
                action: EstateAction::Buy,
            }),
        }
    }

    /// Mortgage by the owner, starting the buyback countdown.
    pub fn mortgage(&mut self, player: PlayerId) -> Result<(), TycoonError> {
        match self.state() {
            EstateState::NotOwned => Err(TycoonError::EstateNotOwned {
                estate: self.name.clone(),
                action: EstateAction::Mortgage,
            }),
            EstateState::Owned => {
                if self.owner() != Some(player) {
                    return Err(TycoonError::EstatePermission {
                        estate: self.name.clone(),
                        action: EstateAction::Mortgage,
                    });
                }
                self.set_state(EstateState::Mortgaged {
                    turns_until_buyback: TURNS_UNTIL_BUYBACK,
                });
                info!(estate = %self.name, price = %self.mortgage_price, "estate mortgaged");
                Ok(())
            }
            EstateState::Mortgaged { .. } => Err(TycoonError::EstateMortgaged {
                estate: self.name.clone(),
                action: EstateAction::Mortgage,
            }),
        }
    }

    /// Buy back a mortgaged estate, restoring full ownership.
    pub fn buyback(&mut self, player: PlayerId) -> Result<(), TycoonError> {
        match self.state() {
            EstateState::NotOwned => Err(TycoonError::EstateNotOwned {
                estate: self.name.clone(),
                action: EstateAction::Buyback,
            }),
            EstateState::Owned => Err(TycoonError::EstateMortgaged {
                estate: self.name.clone(),
                action: EstateAction::Buyback,
            }),
            EstateState::Mortgaged { .. } => {
                if self.owner() != Some(player) {
                    return Err(TycoonError::EstatePermission {
                        estate: self.name.clone(),
                        action: EstateAction::Buyback,
                    });
                }
                self.set_state(EstateState::Owned);
                info!(estate = %self.name, price = %self.buyback_price, "estate bought back");
                Ok(())
            }
        }
    }

    /// Advance the game clock by one turn.
    ///
    /// Only a mortgaged estate reacts: the countdown decrements, and when
    /// it hits zero the estate is repossessed (back to not-owned, owner
    /// cleared). Former owners notice via the cleared owner field.
    pub fn advance_turn(&mut self) {
        if let EstateState::Mortgaged { turns_until_buyback } = self.state() {
            if turns_until_buyback > 0 {
                let remaining = turns_until_buyback - 1;
                if remaining == 0 {
                    self.set_state(EstateState::NotOwned);
                    self.set_owner(None);
                    info!(estate = %self.name, "buyback window expired, estate repossessed");
                } else {
                    self.set_state(EstateState::Mortgaged {
                        turns_until_buyback: remaining,
                    });
                }
            }
        }
    }
}
