#![allow(dead_code)]

use std::cell::Cell;

use chrono::{DateTime, Duration, TimeZone, Utc};

use tycoon::domain::estate::{Estate, EstateCategory, EstateId};
use tycoon::domain::funds::Funds;
use tycoon::domain::player::{Player, PlayerId};
use tycoon::domain::registry::EstateRegistry;
use tycoon::ports::clock_port::ClockPort;

/// Clock that reports a settable instant.
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn start() -> Self {
        Self::at(game_start())
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

pub fn game_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

pub fn clothing_estate(id: u32, name: &str) -> Estate {
    Estate::new(
        EstateId(id),
        name,
        Funds::from(60u32),
        Funds::from(30u32),
        Funds::from(33u32),
        Funds::from(6u32),
        EstateCategory::Clothing,
    )
}

pub fn sample_player(id: u32) -> Player {
    Player::new(PlayerId(id), Funds::from(1500u32))
}

pub fn two_estate_registry() -> EstateRegistry {
    let mut registry = EstateRegistry::new();
    registry.register(clothing_estate(1, "Honey Street"));
    registry.register(clothing_estate(2, "Baltimore Street"));
    registry
}
