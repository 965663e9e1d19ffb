// Unit tables for decimal (base 1000) and binary (base 1024) byte prefixes
use std::fmt;

use crate::error::{Error, Result};

/// The two competing unit systems for byte quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Powers of 1000: K, M, G, T, P.
    Decimal,
    /// Powers of 1024: Ki, Mi, Gi, Ti, Pi.
    Binary,
}

/// A single entry in a unit table: its symbol, its power, and the system
/// whose base it scales by.
///
/// Power 0 is the shared bare byte ("B" with no prefix); it belongs to both
/// tables and its multiplier is 1 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitPrefix {
    pub symbol: &'static str,
    pub power: u32,
    pub system: UnitSystem,
}

impl UnitPrefix {
    /// Bytes per one unit of this prefix, i.e. base^power.
    pub const fn multiplier(&self) -> u64 {
        self.system.base().pow(self.power)
    }
}

const fn prefix(symbol: &'static str, power: u32, system: UnitSystem) -> UnitPrefix {
    UnitPrefix {
        symbol,
        power,
        system,
    }
}

const DECIMAL_PREFIXES: [UnitPrefix; 6] = [
    prefix("", 0, UnitSystem::Decimal),
    prefix("K", 1, UnitSystem::Decimal),
    prefix("M", 2, UnitSystem::Decimal),
    prefix("G", 3, UnitSystem::Decimal),
    prefix("T", 4, UnitSystem::Decimal),
    prefix("P", 5, UnitSystem::Decimal),
];

const BINARY_PREFIXES: [UnitPrefix; 6] = [
    prefix("", 0, UnitSystem::Binary),
    prefix("Ki", 1, UnitSystem::Binary),
    prefix("Mi", 2, UnitSystem::Binary),
    prefix("Gi", 3, UnitSystem::Binary),
    prefix("Ti", 4, UnitSystem::Binary),
    prefix("Pi", 5, UnitSystem::Binary),
];

impl UnitSystem {
    pub const fn base(&self) -> u64 {
        match self {
            UnitSystem::Decimal => 1000,
            UnitSystem::Binary => 1024,
        }
    }

    /// Largest power with a named prefix in either table.
    pub const fn max_power(&self) -> u32 {
        5
    }

    fn prefixes(&self) -> &'static [UnitPrefix; 6] {
        match self {
            UnitSystem::Decimal => &DECIMAL_PREFIXES,
            UnitSystem::Binary => &BINARY_PREFIXES,
        }
    }

    /// The shared zero-power byte unit, expressed in this system.
    pub fn bare(&self) -> UnitPrefix {
        self.prefixes()[0]
    }

    pub fn lookup_by_symbol(&self, symbol: &str) -> Result<UnitPrefix> {
        self.prefixes()
            .iter()
            .copied()
            .find(|p| p.symbol == symbol)
            .ok_or_else(|| Error::UnknownUnit {
                lookup: format!("symbol '{symbol}'"),
                system: *self,
            })
    }

    pub fn lookup_by_power(&self, power: u32) -> Result<UnitPrefix> {
        self.prefixes()
            .iter()
            .copied()
            .find(|p| p.power == power)
            .ok_or_else(|| Error::UnknownUnit {
                lookup: format!("power {power}"),
                system: *self,
            })
    }

    /// Infallible power lookup for the formatter, which clamps its power to
    /// `max_power` before asking.
    pub(crate) fn prefix_for_power(&self, power: u32) -> UnitPrefix {
        self.prefixes()[power.min(self.max_power()) as usize]
    }

    /// Select the table a parsed prefix group belongs to, purely from its
    /// shape: one letter is decimal, two letters ending in 'i' are binary.
    /// An empty group is the bare byte, displayed against the binary table
    /// by convention.
    pub fn for_prefix_group(group: &str) -> UnitSystem {
        if group.len() == 1 {
            UnitSystem::Decimal
        } else {
            UnitSystem::Binary
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Decimal => write!(f, "decimal"),
            UnitSystem::Binary => write!(f, "binary"),
        }
    }
}
