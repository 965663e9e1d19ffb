// Exact byte quantities: parsing human-readable size strings and formatting
// byte counts back into them.
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

pub mod unit;

pub use unit::{UnitPrefix, UnitSystem};

/// Fractional digits rendered when none are asked for explicitly.
pub const DEFAULT_PLACES: usize = 3;

// Mantissa, optional prefix group, mandatory trailing "B". Case-sensitive:
// the two-letter binary prefixes must come before the one-letter decimal
// ones so "Ki" is not consumed as "K" plus a stray "i".
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]*\.?[0-9]+)(Ki|Mi|Gi|Ti|Pi|K|M|G|T|P)?B$").expect("size pattern is valid")
});

/// An exact, non-negative number of bytes together with the unit prefix it
/// was expressed in.
///
/// The prefix only affects display: two counts are equal exactly when their
/// integer values are equal, whatever units they were written in.
#[derive(Debug, Clone, Copy)]
pub struct ByteCount {
    bytes: u64,
    prefix: UnitPrefix,
}

impl ByteCount {
    /// A count of raw bytes, displayed against the binary table.
    pub fn new(bytes: u64) -> Self {
        Self {
            bytes,
            prefix: UnitSystem::Binary.bare(),
        }
    }

    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    pub const fn prefix(&self) -> UnitPrefix {
        self.prefix
    }

    pub const fn system(&self) -> UnitSystem {
        self.prefix.system
    }

    /// The same integer value, re-expressed against another prefix.
    pub fn to_prefix(self, prefix: UnitPrefix) -> Self {
        Self {
            bytes: self.bytes,
            prefix,
        }
    }

    /// The same integer value, displayed against another unit table.
    pub fn to_system(self, system: UnitSystem) -> Self {
        self.to_prefix(system.prefix_for_power(self.prefix.power))
    }

    /// Parse a size string like "256B", "1.5MB", or "10GiB".
    ///
    /// Whitespace anywhere in the token is ignored; the unit letters are
    /// case-sensitive and the trailing "B" is mandatory, so a bare "1024"
    /// does not parse. One-letter prefixes are decimal (base 1000),
    /// two-letter prefixes ending in 'i' are binary (base 1024).
    ///
    /// Integer mantissas scale exactly; fractional mantissas are rounded
    /// half away from zero after scaling.
    pub fn parse(input: &str) -> Result<Self> {
        let stripped: String = input.split_whitespace().collect();
        let caps = SIZE_PATTERN
            .captures(&stripped)
            .ok_or_else(|| Error::InvalidFormat {
                input: input.trim().to_string(),
            })?;

        let mantissa = caps.get(1).map_or("", |m| m.as_str());
        if mantissa.starts_with('-') {
            return Err(Error::NegativeMantissa {
                input: input.trim().to_string(),
            });
        }

        let group = caps.get(2).map_or("", |m| m.as_str());
        let prefix = UnitSystem::for_prefix_group(group).lookup_by_symbol(group)?;

        let bytes = if mantissa.contains('.') {
            let value: f64 = mantissa.parse().map_err(|_| Error::InvalidFormat {
                input: input.trim().to_string(),
            })?;
            let product = value * prefix.multiplier() as f64;
            if product >= u64::MAX as f64 {
                return Err(Error::SizeOverflow {
                    input: input.trim().to_string(),
                });
            }
            product.round() as u64
        } else {
            let value: u64 = mantissa.parse().map_err(|_| Error::SizeOverflow {
                input: input.trim().to_string(),
            })?;
            value
                .checked_mul(prefix.multiplier())
                .ok_or_else(|| Error::SizeOverflow {
                    input: input.trim().to_string(),
                })?
        };

        Ok(Self { bytes, prefix })
    }

    /// Render against the count's own unit table, with `places` fractional
    /// digits whenever the reduced value does not divide evenly.
    ///
    /// The reduction loop advances to the next prefix only while the
    /// remainder strictly exceeds the base, so exactly 1024 bytes renders
    /// as "1024B" rather than "1KiB". Values past the last prefix stay at
    /// it with a mantissa above the base.
    pub fn format(&self, places: usize) -> String {
        let system = self.system();
        let base = system.base();

        let mut remainder = self.bytes;
        let mut fraction = 0.0_f64;
        let mut power = 0u32;
        while remainder > base && power < system.max_power() {
            fraction = (remainder % base) as f64 / base as f64;
            remainder /= base;
            power += 1;
        }

        let symbol = system.prefix_for_power(power).symbol;
        if fraction == 0.0 {
            format!("{remainder}{symbol}B")
        } else {
            let value = remainder as f64 + fraction;
            format!("{value:.places$}{symbol}B")
        }
    }
}

impl From<u64> for ByteCount {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl FromStr for ByteCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(DEFAULT_PLACES))
    }
}

impl PartialEq for ByteCount {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ByteCount {}

impl PartialOrd for ByteCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl Hash for ByteCount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}
