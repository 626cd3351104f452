use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity tag distinguishing positions that share tick bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Salt(pub [u8; 32]);

impl Salt {
    /// Encodes an output index big-endian in the low bytes.
    pub fn from_index(index: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&index.to_be_bytes());
        Self(bytes)
    }
}

impl From<u64> for Salt {
    fn from(index: u64) -> Self {
        Self::from_index(index)
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A concentrated-liquidity range ready to be minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub salt: Salt,
}

impl Position {
    pub fn new(tick_lower: i32, tick_upper: i32, liquidity: u128, salt: Salt) -> Self {
        Self {
            tick_lower,
            tick_upper,
            liquidity,
            salt,
        }
    }

    /// Returns a copy carrying a different salt.
    #[must_use]
    pub fn with_salt(mut self, salt: Salt) -> Self {
        self.salt = salt;
        self
    }

    /// Width of the range in ticks.
    pub fn width(&self) -> i64 {
        i64::from(self.tick_upper) - i64::from(self.tick_lower)
    }
}
