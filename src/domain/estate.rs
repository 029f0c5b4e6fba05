//! Estate entity and static attributes.

use std::fmt;

use tracing::info;

use crate::domain::error::TycoonError;
use crate::domain::estate_state::{EstateAction, EstateState};
use crate::domain::funds::Funds;
use crate::domain::player::PlayerId;

/// Estate identifier. Never interchangeable with [`PlayerId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EstateId(pub u32);

impl fmt::Display for EstateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Estate {}", self.0)
    }
}

/// Closed set of estate categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstateCategory {
    Perfumery,
    Electronics,
    Automobiles,
    Hotels,
    Restaurants,
    Airlines,
    Beverages,
    WebServices,
    Clothing,
}

impl EstateCategory {
    pub const ALL: [EstateCategory; 9] = [
        EstateCategory::Perfumery,
        EstateCategory::Electronics,
        EstateCategory::Automobiles,
        EstateCategory::Hotels,
        EstateCategory::Restaurants,
        EstateCategory::Airlines,
        EstateCategory::Beverages,
        EstateCategory::WebServices,
        EstateCategory::Clothing,
    ];

    /// Whether estates in this category support improvement stars.
    ///
    /// A capability of the category, not of individual estates.
    #[must_use]
    pub const fn is_buildable(self) -> bool {
        !matches!(self, EstateCategory::Automobiles)
    }
}

impl fmt::Display for EstateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EstateCategory::Perfumery => "Perfumery",
            EstateCategory::Electronics => "Electronics",
            EstateCategory::Automobiles => "Automobiles",
            EstateCategory::Hotels => "Hotels",
            EstateCategory::Restaurants => "Restaurants",
            EstateCategory::Airlines => "Airlines",
            EstateCategory::Beverages => "Beverages",
            EstateCategory::WebServices => "Web Services",
            EstateCategory::Clothing => "Clothing",
        };
        f.pad(name)
    }
}

/// Maximum improvement stars an estate can carry.
pub const MAX_STARS: u8 = 5;

/// A property that can be owned, mortgaged, and bought back.
///
/// `state` and `owner` change only through the ownership state machine and
/// the trade transfer path; the static attributes are set at construction
/// and never change. Estates are never destroyed; repossession returns
/// them to the not-owned state.
#[derive(Debug, Clone, PartialEq)]
pub struct Estate {
    pub identity: EstateId,
    pub name: String,
    pub price: Funds,
    pub mortgage_price: Funds,
    pub buyback_price: Funds,
    pub rent: Funds,
    pub category: EstateCategory,
    state: EstateState,
    owner: Option<PlayerId>,
    stars: u8,
}

impl Estate {
    pub fn new(
        identity: EstateId,
        name: impl Into<String>,
        price: Funds,
        mortgage_price: Funds,
        buyback_price: Funds,
        rent: Funds,
        category: EstateCategory,
    ) -> Self {
        Self {
            identity,
            name: name.into(),
            price,
            mortgage_price,
            buyback_price,
            rent,
            category,
            state: EstateState::NotOwned,
            owner: None,
            stars: 0,
        }
    }

    pub fn state(&self) -> EstateState {
        self.state
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn is_mortgaged(&self) -> bool {
        matches!(self.state, EstateState::Mortgaged { .. })
    }

    pub(crate) fn set_state(&mut self, state: EstateState) {
        self.state = state;
    }

    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }

    /// Move ownership to another player without touching the state.
    ///
    /// Trade path only; a mortgaged estate keeps its buyback countdown
    /// under the new owner.
    pub(crate) fn transfer_to(&mut self, new_owner: PlayerId) {
        self.owner = Some(new_owner);
    }

    /// Reduce rent by a percentage of its current value, rounded to whole
    /// currency units.
    pub fn reduce_rent(&mut self, percentage: f64) {
        let reduced = (self.rent.amount() as f64 * (1.0 - percentage / 100.0)).round() as i64;
        self.rent = Funds::new(reduced.max(0)).unwrap_or(Funds::ZERO);
    }

    /// Build an improvement star.
    ///
    /// Requires a buildable category, full (unmortgaged) ownership by the
    /// acting player, and headroom under [`MAX_STARS`].
    pub fn build_star(&mut self, player: PlayerId) -> Result<(), TycoonError> {
        if !self.category.is_buildable() {
            return Err(TycoonError::EstateNotBuildable {
                estate: self.name.clone(),
            });
        }
        match self.state {
            EstateState::NotOwned => Err(TycoonError::EstateNotOwned {
                estate: self.name.clone(),
                action: EstateAction::BuildStar,
            }),
            EstateState::Mortgaged { .. } => Err(TycoonError::EstateMortgaged {
                estate: self.name.clone(),
                action: EstateAction::BuildStar,
            }),
            EstateState::Owned => {
                if self.owner != Some(player) {
                    return Err(TycoonError::EstatePermission {
                        estate: self.name.clone(),
                        action: EstateAction::BuildStar,
                    });
                }
                if self.stars >= MAX_STARS {
                    return Err(TycoonError::MaxStarsReached {
                        estate: self.name.clone(),
                        max_stars: MAX_STARS,
                    });
                }
                self.stars += 1;
                info!(estate = %self.name, stars = self.stars, "star built");
                Ok(())
            }
        }
    }
}
