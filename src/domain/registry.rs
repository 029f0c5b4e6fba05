//! Estate registry.
//!
//! Explicitly constructed and passed to whoever needs it; no process-wide
//! state. The registry owns every [`Estate`], players hold identities only.

use std::collections::BTreeMap;

use crate::domain::estate::{Estate, EstateCategory, EstateId};
use crate::domain::funds::Funds;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstateRegistry {
    estates: BTreeMap<EstateId, Estate>,
}

impl EstateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an estate.
    ///
    /// Panics if an estate with the same identity already exists.
    pub fn register(&mut self, estate: Estate) {
        if self.estates.contains_key(&estate.identity) {
            panic!("estate {:?} already registered", estate.identity);
        }
        self.estates.insert(estate.identity, estate);
    }

    #[must_use]
    pub fn get(&self, id: EstateId) -> Option<&Estate> {
        self.estates.get(&id)
    }

    pub fn get_mut(&mut self, id: EstateId) -> Option<&mut Estate> {
        self.estates.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: EstateId) -> bool {
        self.estates.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.estates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Estate> {
        self.estates.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Estate> {
        self.estates.values_mut()
    }

    pub fn in_category(&self, category: EstateCategory) -> impl Iterator<Item = &Estate> {
        self.estates.values().filter(move |e| e.category == category)
    }

    /// First estate on the market, in identity order.
    #[must_use]
    pub fn first_unowned(&self) -> Option<EstateId> {
        self.estates
            .values()
            .find(|e| e.owner().is_none())
            .map(|e| e.identity)
    }

    /// The standard board: two estates per category, classic pricing
    /// (mortgage at half price, buyback at a 10% premium on the mortgage).
    #[must_use]
    pub fn standard_board() -> Self {
        use EstateCategory::*;

        let defs: [(&str, u32, u32, u32, u32, EstateCategory); 18] = [
            ("Honey Street", 60, 30, 33, 6, Clothing),
            ("Baltimore Street", 60, 30, 33, 6, Clothing),
            ("Rose Boulevard", 100, 50, 55, 10, Perfumery),
            ("Amber Lane", 100, 50, 55, 10, Perfumery),
            ("Circuit Avenue", 140, 70, 77, 14, Electronics),
            ("Solder Row", 140, 70, 77, 14, Electronics),
            ("Piston Drive", 160, 80, 88, 16, Automobiles),
            ("Camshaft Court", 160, 80, 88, 16, Automobiles),
            ("Grand Plaza Hotel", 200, 100, 110, 20, Hotels),
            ("Harbour View Hotel", 200, 100, 110, 20, Hotels),
            ("Saffron Kitchen", 220, 110, 121, 22, Restaurants),
            ("Dockside Diner", 220, 110, 121, 22, Restaurants),
            ("Meridian Air", 260, 130, 143, 26, Airlines),
            ("Polar Air", 260, 130, 143, 26, Airlines),
            ("Cascade Bottling", 280, 140, 154, 28, Beverages),
            ("Juniper Brewing", 280, 140, 154, 28, Beverages),
            ("Nimbus Hosting", 350, 175, 193, 35, WebServices),
            ("Lattice Cloud", 350, 175, 193, 35, WebServices),
        ];

        let mut registry = Self::new();
        for (i, (name, price, mortgage, buyback, rent, category)) in defs.into_iter().enumerate() {
            registry.register(Estate::new(
                EstateId(i as u32 + 1),
                name,
                Funds::from(price),
                Funds::from(mortgage),
                Funds::from(buyback),
                Funds::from(rent),
                category,
            ));
        }
        registry
    }
}
