//! Deterministic event id generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use types::EventId;

/// Mints `EVT-` ids from a seeded stream, so repeated runs over the same
/// feeds produce the same ids.
pub struct EventIdGenerator {
    rng: StdRng,
}

impl EventIdGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next id: `EVT-` plus 12 uppercase hex characters.
    pub fn next_id(&mut self) -> EventId {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let mut id = String::from("EVT-");
        for _ in 0..12 {
            id.push(HEX[self.rng.gen_range(0..16)] as char);
        }
        EventId::from(id)
    }
}
