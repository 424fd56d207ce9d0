// Tickmap
//
// One bit per grid index; bit `tick / spacing + TICK_LIMIT` is set while the
// tick at that index holds liquidity. Searches never look further than
// `get_search_limit`.

use soroban_sdk::Bytes;
use tidal_math::{get_search_limit, TICKMAP_BYTES, TICKMAP_SIZE, TICK_LIMIT};
use crate::error::TickmapError;

/// Byte and bit of a tick in the tickmap
pub fn tick_to_position(tick: i32, tick_spacing: i32) -> Result<(usize, u8), TickmapError> {
    if tick_spacing <= 0 || tick % tick_spacing != 0 {
        return Err(TickmapError::TickNotAligned);
    }

    let index = tick / tick_spacing + TICK_LIMIT;
    if !(0..TICKMAP_SIZE).contains(&index) {
        return Err(TickmapError::TickOutsideTickmap);
    }

    Ok(((index / 8) as usize, (index % 8) as u8))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tickmap {
    pub bitmap: [u8; TICKMAP_BYTES],
}

impl Default for Tickmap {
    fn default() -> Self {
        Self { bitmap: [0u8; TICKMAP_BYTES] }
    }
}

impl Tickmap {
    /// Load a snapshot fetched from the pool; shorter snapshots are zero-padded
    pub fn from_bytes(bytes: &Bytes) -> Result<Self, TickmapError> {
        let len = bytes.len() as usize;
        if len > TICKMAP_BYTES {
            return Err(TickmapError::InvalidTickmapSize);
        }

        let mut tickmap = Self::default();
        bytes.copy_into_slice(&mut tickmap.bitmap[..len]);
        Ok(tickmap)
    }

    /// Whether the tick is initialized; unaligned or out-of-map ticks are not
    pub fn get(&self, tick: i32, tick_spacing: i32) -> bool {
        match tick_to_position(tick, tick_spacing) {
            Ok((byte, bit)) => self.bitmap[byte] & (1 << bit) != 0,
            Err(_) => false,
        }
    }

    /// Set or clear the bit of a tick
    pub fn flip(&mut self, value: bool, tick: i32, tick_spacing: i32) -> Result<(), TickmapError> {
        let (byte, bit) = tick_to_position(tick, tick_spacing)?;

        if self.get(tick, tick_spacing) == value {
            return Err(TickmapError::TickAlreadyInState);
        }

        self.bitmap[byte] ^= 1 << bit;
        Ok(())
    }

    /// Closest initialized tick strictly above `tick`
    ///
    /// `tick` must be aligned to `tick_spacing`.
    pub fn next_initialized(&self, tick: i32, tick_spacing: i32) -> Option<i32> {
        let limit = get_search_limit(tick, tick_spacing, true);
        let mut index = tick / tick_spacing + 1 + TICK_LIMIT;
        let end = limit / tick_spacing + TICK_LIMIT;

        while index <= end {
            if index < 0 {
                index = 0;
                continue;
            }
            let byte = (index / 8) as usize;
            let bit = index % 8;
            let value = *self.bitmap.get(byte)?;

            // skip empty bytes
            if bit == 0 && value == 0 {
                index += 8;
                continue;
            }
            if value & (1 << bit) != 0 {
                return Some((index - TICK_LIMIT) * tick_spacing);
            }
            index += 1;
        }

        None
    }

    /// Closest initialized tick at or below `tick`
    ///
    /// `tick` must be aligned to `tick_spacing`.
    pub fn prev_initialized(&self, tick: i32, tick_spacing: i32) -> Option<i32> {
        let limit = get_search_limit(tick, tick_spacing, false);
        let mut index = tick / tick_spacing + TICK_LIMIT;
        let end = (limit / tick_spacing + TICK_LIMIT).max(0);

        while index >= end {
            let byte = (index / 8) as usize;
            let bit = index % 8;
            let Some(&value) = self.bitmap.get(byte) else {
                index -= 1;
                continue;
            };

            // skip empty bytes
            if bit == 7 && value == 0 {
                index -= 8;
                continue;
            }
            if value & (1 << bit) != 0 {
                return Some((index - TICK_LIMIT) * tick_spacing);
            }
            index -= 1;
        }

        None
    }
}
