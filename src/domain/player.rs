//! Player entity and the transaction engine.
//!
//! Every funds-and-ownership mutation is all-or-nothing: the ownership
//! transition runs first and funds move only once it has succeeded, so a
//! failed operation leaves both the wallet and the portfolio untouched.

use std::collections::BTreeSet;
use std::fmt;

use tracing::info;

use crate::domain::error::TycoonError;
use crate::domain::estate::{Estate, EstateId};
use crate::domain::estate_state::EstateAction;
use crate::domain::funds::Funds;
use crate::domain::registry::EstateRegistry;

/// Player identifier. Never interchangeable with [`EstateId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant holding funds and a portfolio of estates.
///
/// The estate set mirrors the owner field on the estates themselves; the
/// two views stay consistent because every code path that changes
/// ownership updates both.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub identity: PlayerId,
    pub funds: Funds,
    estates: BTreeSet<EstateId>,
}

impl Player {
    pub fn new(identity: PlayerId, funds: Funds) -> Self {
        Self {
            identity,
            funds,
            estates: BTreeSet::new(),
        }
    }

    pub fn owns(&self, estate: EstateId) -> bool {
        self.estates.contains(&estate)
    }

    pub fn estates(&self) -> impl Iterator<Item = EstateId> + '_ {
        self.estates.iter().copied()
    }

    pub fn estate_count(&self) -> usize {
        self.estates.len()
    }

    /// Buy an unowned estate.
    ///
    /// Funds are debited only after the ownership transition succeeds; a
    /// rejected purchase leaves funds and portfolio unchanged.
    pub fn buy_estate(&mut self, estate: &mut Estate) -> Result<(), TycoonError> {
        if self.funds < estate.price {
            return Err(TycoonError::InsufficientFunds {
                required: estate.price,
                available: self.funds,
            });
        }
        estate.buy(self.identity)?;
        self.funds = self.funds.subtract(estate.price)?;
        self.estates.insert(estate.identity);
        info!(player = %self.identity, estate = %estate.name, funds = %self.funds, "purchase settled");
        Ok(())
    }

    /// Mortgage an owned estate in exchange for its mortgage price.
    pub fn mortgage(&mut self, estate: &mut Estate) -> Result<(), TycoonError> {
        estate.mortgage(self.identity)?;
        self.funds = self.funds.add(estate.mortgage_price);
        Ok(())
    }

    /// Pay the buyback premium to restore full ownership of a mortgaged
    /// estate. Affordability is checked before the transition is attempted.
    pub fn buyback(&mut self, estate: &mut Estate) -> Result<(), TycoonError> {
        if self.funds < estate.buyback_price {
            return Err(TycoonError::InsufficientFunds {
                required: estate.buyback_price,
                available: self.funds,
            });
        }
        estate.buyback(self.identity)?;
        self.funds = self.funds.subtract(estate.buyback_price)?;
        Ok(())
    }

    /// Advance every owned estate by one turn, then drop the ids the
    /// registry no longer attributes to this player (mortgage expiry
    /// repossesses without player involvement).
    pub fn advance_turn(&mut self, registry: &mut EstateRegistry) {
        for id in &self.estates {
            if let Some(estate) = registry.get_mut(*id) {
                estate.advance_turn();
            }
        }
        let identity = self.identity;
        self.estates
            .retain(|id| registry.get(*id).is_some_and(|e| e.owner() == Some(identity)));
    }

    /// Exchange estates and funds with another player.
    ///
    /// Validation order: at least one estate must change hands, both sides
    /// must own what they put up, neither side may give more than twice
    /// what it receives, and both sides must cover their funds component.
    /// Nothing mutates until every check has passed.
    pub fn trade_estates(
        &mut self,
        other: &mut Player,
        registry: &mut EstateRegistry,
        estates_to_give: &[EstateId],
        estates_to_receive: &[EstateId],
        funds_to_give: Funds,
        funds_to_receive: Funds,
    ) -> Result<(), TycoonError> {
        if estates_to_give.is_empty() && estates_to_receive.is_empty() {
            return Err(TycoonError::TradeMustIncludeAtLeastOneEstate);
        }

        let given_estates = side_total(registry, estates_to_give, self)?;
        let received_estates = side_total(registry, estates_to_receive, other)?;

        let total_given = given_estates.add(funds_to_give);
        let total_received = received_estates.add(funds_to_receive);
        if total_given.amount() > 2 * total_received.amount()
            || total_received.amount() > 2 * total_given.amount()
        {
            return Err(TycoonError::TradeDifferenceExceeded {
                given: total_given,
                received: total_received,
            });
        }

        if self.funds < funds_to_give {
            return Err(TycoonError::InsufficientFunds {
                required: funds_to_give,
                available: self.funds,
            });
        }
        if other.funds < funds_to_receive {
            return Err(TycoonError::InsufficientFunds {
                required: funds_to_receive,
                available: other.funds,
            });
        }

        self.funds = self.funds.subtract(funds_to_give)?.add(funds_to_receive);
        other.funds = other.funds.subtract(funds_to_receive)?.add(funds_to_give);

        for id in estates_to_give {
            transfer(registry, *id, self, other);
        }
        for id in estates_to_receive {
            transfer(registry, *id, other, self);
        }
        info!(
            from = %self.identity,
            to = %other.identity,
            given = %total_given,
            received = %total_received,
            "trade settled"
        );
        Ok(())
    }
}

/// Sum the prices on one side of a trade, verifying that `owner` really
/// owns each estate put up.
fn side_total(
    registry: &EstateRegistry,
    estates: &[EstateId],
    owner: &Player,
) -> Result<Funds, TycoonError> {
    let mut total = Funds::ZERO;
    for id in estates {
        match registry.get(*id) {
            Some(estate) if estate.owner() == Some(owner.identity) && owner.owns(*id) => {
                total = total.add(estate.price);
            }
            Some(estate) => {
                return Err(TycoonError::EstateNotOwned {
                    estate: estate.name.clone(),
                    action: EstateAction::Trade,
                });
            }
            None => {
                return Err(TycoonError::EstateNotOwned {
                    estate: id.to_string(),
                    action: EstateAction::Trade,
                });
            }
        }
    }
    Ok(total)
}

/// The single ownership-transfer path shared by both trade directions:
/// collection remove, owner re-point, collection add.
fn transfer(registry: &mut EstateRegistry, id: EstateId, from: &mut Player, to: &mut Player) {
    from.estates.remove(&id);
    if let Some(estate) = registry.get_mut(id) {
        estate.transfer_to(to.identity);
    }
    to.estates.insert(id);
}
