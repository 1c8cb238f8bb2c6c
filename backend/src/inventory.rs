//! In-memory prize stock and one-spin-per-session bookkeeping.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use spinwheel_shared::constants::ALREADY_SPUN_MESSAGE;
use spinwheel_shared::wheel::{InventoryStats, PrizeStats, SpinResponse};
use spinwheel_shared::{default_slices, Slice};

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct PrizeStock {
    pub name: String,
    pub slice_index: usize,
    pub total: u32,
    pub remaining: u32,
    pub weight: u32,
}

impl PrizeStock {
    pub fn new(name: impl Into<String>, slice_index: usize, total: u32, weight: u32) -> Self {
        Self {
            name: name.into(),
            slice_index,
            total,
            remaining: total,
            weight,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("an inventory needs at least one slice")]
    NoSlices,
    #[error("prize '{name}' points at slice {slice_index} but the wheel has {slice_count}")]
    PrizeOffWheel {
        name: String,
        slice_index: usize,
        slice_count: usize,
    },
}

pub struct Inventory {
    slices: Vec<Slice>,
    prizes: Vec<PrizeStock>,
    miss_weight: u32,
    total_spins: u64,
    total_wins: u64,
    spun_sessions: HashSet<String>,
}

impl Inventory {
    /// Every prize must sit on a slice of a non-empty wheel, so a spin can
    /// always be answered.
    pub fn new(
        slices: Vec<Slice>,
        prizes: Vec<PrizeStock>,
        miss_weight: u32,
    ) -> Result<Self, InventoryError> {
        if slices.is_empty() {
            return Err(InventoryError::NoSlices);
        }
        if let Some(prize) = prizes.iter().find(|prize| prize.slice_index >= slices.len()) {
            return Err(InventoryError::PrizeOffWheel {
                name: prize.name.clone(),
                slice_index: prize.slice_index,
                slice_count: slices.len(),
            });
        }
        Ok(Self::unchecked(slices, prizes, miss_weight))
    }

    fn unchecked(slices: Vec<Slice>, prizes: Vec<PrizeStock>, miss_weight: u32) -> Self {
        Self {
            slices,
            prizes,
            miss_weight,
            total_spins: 0,
            total_wins: 0,
            spun_sessions: HashSet::new(),
        }
    }

    /// The default wheel: three stocked prizes, three consolation slices.
    pub fn with_defaults() -> Self {
        Self::unchecked(
            default_slices(),
            vec![
                PrizeStock::new("T-shirt", 0, 20, 3),
                PrizeStock::new("USB Flash", 1, 30, 4),
                PrizeStock::new("Cap", 2, 25, 3),
            ],
            10,
        )
    }

    pub fn all_prizes_gone(&self) -> bool {
        self.prizes.iter().all(|prize| prize.remaining == 0)
    }

    pub fn has_spun(&self, session: &str) -> bool {
        self.spun_sessions.contains(session)
    }

    /// Record a spin for `session` and decide where it lands.
    pub fn spin<R: Rng + ?Sized>(&mut self, session: &str, rng: &mut R) -> Result<SpinResponse, ApiError> {
        if self.has_spun(session) {
            return Err(ApiError::AlreadySpun(ALREADY_SPUN_MESSAGE.to_string()));
        }
        self.spun_sessions.insert(session.to_string());
        self.total_spins += 1;

        let (slice_index, prize) = match self.draw_prize(rng) {
            Some(position) => {
                let stock = &mut self.prizes[position];
                stock.remaining -= 1;
                self.total_wins += 1;
                (stock.slice_index, true)
            }
            None => (self.miss_slice(rng), false),
        };

        Ok(SpinResponse {
            slice_index,
            label: self.slices[slice_index].label.clone(),
            prize,
            all_prizes_gone: self.all_prizes_gone(),
        })
    }

    /// Weighted pick among stocked prizes and the miss weight.
    fn draw_prize<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let stocked = self
            .prizes
            .iter()
            .enumerate()
            .filter(|(_, prize)| prize.remaining > 0 && prize.weight > 0);

        let prize_weight: u32 = stocked.clone().map(|(_, prize)| prize.weight).sum();
        let total = prize_weight + self.miss_weight;
        if prize_weight == 0 {
            return None;
        }

        let mut roll = rng.gen_range(0..total);
        for (position, prize) in stocked {
            if roll < prize.weight {
                return Some(position);
            }
            roll -= prize.weight;
        }
        None
    }

    fn miss_slice<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let misses: Vec<usize> = (0..self.slices.len())
            .filter(|index| !self.prizes.iter().any(|prize| prize.slice_index == *index))
            .collect();
        if misses.is_empty() {
            rng.gen_range(0..self.slices.len())
        } else {
            misses[rng.gen_range(0..misses.len())]
        }
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats {
            prizes: self
                .prizes
                .iter()
                .map(|prize| PrizeStats {
                    name: prize.name.clone(),
                    total: prize.total,
                    remaining: prize.remaining,
                    weight: prize.weight,
                })
                .collect(),
            total_spins: self.total_spins,
            total_wins: self.total_wins,
            all_prizes_gone: self.all_prizes_gone(),
        }
    }

    /// Restore stock and forget every spin and session.
    pub fn reset(&mut self) {
        for prize in &mut self.prizes {
            prize.remaining = prize.total;
        }
        self.total_spins = 0;
        self.total_wins = 0;
        self.spun_sessions.clear();
    }
}
