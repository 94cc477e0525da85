//! Per-truck time accounting.
//!
//! A [`TimeLedger`] holds four bounded tick counters, one per accounting
//! field.  Each tick a truck adds exactly 1 to exactly one field, so at the
//! end of a run the four fields sum to the number of ticks executed.
//!
//! The counters are `u16`: a run is capped at 65,535 ticks (> 5,000 hours at
//! 5 minutes per tick), so a field can never legitimately overflow.  An
//! overflow is still reported as an error rather than wrapped.
//!
//! # Packed layout
//!
//! For exchange with tools that expect a single 64-bit word, the ledger
//! converts to and from this layout:
//!
//! | Bits   | Field     |
//! |--------|-----------|
//! | 0–15   | waiting   |
//! | 16–31  | unloading |
//! | 32–47  | traveling |
//! | 48–63  | mining    |

use std::fmt;

use crate::{CoreError, CoreResult};

/// One of the four accounting fields.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerField {
    Waiting,
    Unloading,
    Traveling,
    Mining,
}

impl LedgerField {
    /// All fields in packed-layout order (lowest bits first).
    pub const ALL: [LedgerField; 4] = [
        LedgerField::Waiting,
        LedgerField::Unloading,
        LedgerField::Traveling,
        LedgerField::Mining,
    ];

    /// Bit offset of this field in the packed 64-bit word.
    #[inline]
    pub fn shift(self) -> u32 {
        match self {
            LedgerField::Waiting   => 0,
            LedgerField::Unloading => 16,
            LedgerField::Traveling => 32,
            LedgerField::Mining    => 48,
        }
    }

    /// Mask selecting this field in the packed word.
    #[inline]
    pub fn mask(self) -> u64 {
        0xFFFF_u64 << self.shift()
    }

    /// Label used in text reports.
    pub fn label(self) -> &'static str {
        match self {
            LedgerField::Waiting   => "Waiting",
            LedgerField::Unloading => "Unloading",
            LedgerField::Traveling => "Traveling",
            LedgerField::Mining    => "Mining",
        }
    }
}

impl fmt::Display for LedgerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ticks spent in each accounting field by one truck.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeLedger {
    waiting:   u16,
    unloading: u16,
    traveling: u16,
    mining:    u16,
}

impl TimeLedger {
    pub const fn new() -> Self {
        Self { waiting: 0, unloading: 0, traveling: 0, mining: 0 }
    }

    #[inline]
    fn slot(&mut self, field: LedgerField) -> &mut u16 {
        match field {
            LedgerField::Waiting   => &mut self.waiting,
            LedgerField::Unloading => &mut self.unloading,
            LedgerField::Traveling => &mut self.traveling,
            LedgerField::Mining    => &mut self.mining,
        }
    }

    /// Add one tick to `field`, leaving the others untouched.
    #[inline]
    pub fn record(&mut self, field: LedgerField) -> CoreResult<()> {
        let slot = self.slot(field);
        let value = *slot;
        *slot = value
            .checked_add(1)
            .ok_or(CoreError::LedgerOverflow { field, value })?;
        Ok(())
    }

    /// Ticks recorded against `field`.
    #[inline]
    pub fn get(&self, field: LedgerField) -> u16 {
        match field {
            LedgerField::Waiting   => self.waiting,
            LedgerField::Unloading => self.unloading,
            LedgerField::Traveling => self.traveling,
            LedgerField::Mining    => self.mining,
        }
    }

    #[inline]
    pub fn waiting(&self) -> u16 {
        self.waiting
    }

    #[inline]
    pub fn unloading(&self) -> u16 {
        self.unloading
    }

    #[inline]
    pub fn traveling(&self) -> u16 {
        self.traveling
    }

    #[inline]
    pub fn mining(&self) -> u16 {
        self.mining
    }

    /// Sum of all four fields, widened so it cannot overflow.
    pub fn total(&self) -> u64 {
        LedgerField::ALL.iter().map(|&f| self.get(f) as u64).sum()
    }

    /// Share of `total_ticks` spent in `field`, as a percentage.
    ///
    /// Returns 0.0 when `total_ticks` is zero.
    pub fn percent(&self, field: LedgerField, total_ticks: u64) -> f64 {
        if total_ticks == 0 {
            return 0.0;
        }
        self.get(field) as f64 / total_ticks as f64 * 100.0
    }

    // ── Packed layout ─────────────────────────────────────────────────────

    /// Encode as a single 64-bit word (see module docs for the layout).
    pub fn packed(&self) -> u64 {
        LedgerField::ALL
            .iter()
            .fold(0u64, |acc, &f| acc | ((self.get(f) as u64) << f.shift()))
    }

    /// Decode a 64-bit word produced by [`packed`](Self::packed).
    pub fn from_packed(word: u64) -> Self {
        let read = |f: LedgerField| ((word & f.mask()) >> f.shift()) as u16;
        Self {
            waiting:   read(LedgerField::Waiting),
            unloading: read(LedgerField::Unloading),
            traveling: read(LedgerField::Traveling),
            mining:    read(LedgerField::Mining),
        }
    }
}
