//! Application-wide member state shared by every view.
//!
//! Views never touch the fields directly; each mutation below is one
//! complete state transition and leaves the store untouched on error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemId};
use crate::config::RewardsConfig;
use crate::error::StoreError;
use crate::identity::{Identity, Rank};
use crate::verification::WizardListener;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointsReason {
    SignupBonus,
    WheelPrize,
    MemoryGame,
    Purchase(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Positive for credits, negative for debits.
    pub delta: i64,
    pub reason: PointsReason,
    pub balance_after: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub item: ItemId,
    pub price: u32,
    pub at_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ClubStore {
    rank_thresholds: [u32; 3],

    member: Option<Identity>,
    points: u32,
    lifetime_points: u32,
    inventory: BTreeMap<ItemId, u32>,
    purchases: Vec<Purchase>,
    ledger: Vec<LedgerEntry>,

    // Set by the wizard listener when the sign-up modal should go away.
    auth_prompt_open: bool,
}

impl ClubStore {
    pub fn new(rewards: &RewardsConfig) -> Self {
        Self {
            rank_thresholds: rewards.rank_thresholds,
            member: None,
            points: 0,
            lifetime_points: 0,
            inventory: BTreeMap::new(),
            purchases: Vec::new(),
            ledger: Vec::new(),
            auth_prompt_open: false,
        }
    }

    pub fn member(&self) -> Option<&Identity> {
        self.member.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.member.is_some()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn lifetime_points(&self) -> u32 {
        self.lifetime_points
    }

    pub fn rank(&self) -> Option<Rank> {
        self.member.as_ref().map(|m| m.rank)
    }

    pub fn inventory(&self) -> &BTreeMap<ItemId, u32> {
        &self.inventory
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub fn auth_prompt_open(&self) -> bool {
        self.auth_prompt_open
    }

    pub fn request_sign_in(&mut self) {
        self.auth_prompt_open = true;
    }

    /// Replaces any current member; the identity's points become the opening balance.
    pub fn sign_in(&mut self, identity: Identity) {
        log::info!("Member signed in: {} ({})", identity.name, identity.id);
        self.clear_member_state();
        self.points = identity.points;
        self.lifetime_points = identity.points;
        self.ledger.push(LedgerEntry {
            delta: i64::from(identity.points),
            reason: PointsReason::SignupBonus,
            balance_after: self.points,
        });
        self.member = Some(identity);
        self.refresh_rank();
    }

    pub fn sign_out(&mut self) {
        if let Some(member) = &self.member {
            log::info!("Member signed out: {}", member.name);
        }
        self.clear_member_state();
    }

    pub fn award_points(&mut self, amount: u32, reason: PointsReason) -> Result<u32, StoreError> {
        if self.member.is_none() {
            return Err(StoreError::NotSignedIn);
        }
        self.points = self.points.saturating_add(amount);
        self.lifetime_points = self.lifetime_points.saturating_add(amount);
        self.ledger.push(LedgerEntry {
            delta: i64::from(amount),
            reason,
            balance_after: self.points,
        });
        log::info!("Awarded {} points for {:?}, balance {}", amount, reason, self.points);
        self.refresh_rank();
        Ok(self.points)
    }

    pub fn spend_points(&mut self, amount: u32, reason: PointsReason) -> Result<u32, StoreError> {
        if self.member.is_none() {
            return Err(StoreError::NotSignedIn);
        }
        if amount > self.points {
            return Err(StoreError::InsufficientPoints {
                needed: amount,
                available: self.points,
            });
        }
        self.points -= amount;
        self.ledger.push(LedgerEntry {
            delta: -i64::from(amount),
            reason,
            balance_after: self.points,
        });
        Ok(self.points)
    }

    pub fn add_to_inventory(&mut self, item: ItemId, quantity: u32) {
        *self.inventory.entry(item).or_insert(0) += quantity;
    }

    /// Redeems one unit of `item`. Checks everything before mutating anything.
    pub fn purchase(
        &mut self,
        catalog: &mut Catalog,
        item: ItemId,
        now: u64,
    ) -> Result<Purchase, StoreError> {
        if self.member.is_none() {
            return Err(StoreError::NotSignedIn);
        }
        catalog.check_available(item)?;
        let price = catalog.entry(item).price;
        if price > self.points {
            log::warn!("Purchase of {:?} refused: {} < {}", item, self.points, price);
            return Err(StoreError::InsufficientPoints {
                needed: price,
                available: self.points,
            });
        }

        catalog.take_one(item)?;
        self.spend_points(price, PointsReason::Purchase(item))?;
        self.add_to_inventory(item, 1);
        let purchase = Purchase {
            item,
            price,
            at_ms: now,
        };
        self.purchases.push(purchase.clone());
        log::info!("Purchased {:?} for {} points", item, price);
        Ok(purchase)
    }

    fn refresh_rank(&mut self) {
        let earned = Rank::for_points(self.lifetime_points, self.rank_thresholds);
        if let Some(member) = self.member.as_mut() {
            if earned > member.rank {
                log::info!("{} promoted to {:?}", member.name, earned);
                member.rank = earned;
            }
        }
    }

    fn clear_member_state(&mut self) {
        self.member = None;
        self.points = 0;
        self.lifetime_points = 0;
        self.inventory.clear();
        self.purchases.clear();
        self.ledger.clear();
    }
}

impl WizardListener for ClubStore {
    fn on_complete(&mut self, identity: Identity) {
        self.sign_in(identity);
        self.auth_prompt_open = false;
    }

    fn on_close(&mut self) {
        self.auth_prompt_open = false;
    }
}
