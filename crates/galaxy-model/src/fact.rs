//! Multiplication facts and the arithmetic behind each visual mode.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{Multiplier, Table};

/// Product of two operands.
#[inline]
pub const fn fact(a: u32, b: u32) -> u32 {
    a * b
}

/// One multiplication fact: `table × multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub table: Table,
    pub multiplier: Multiplier,
}

/// Finger positions for the nines trick.
///
/// Fold down finger `m`; the fingers left of it are the tens, the fingers
/// right of it are the ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NinesFingers {
    pub folded: u32,
    pub tens: u32,
    pub ones: u32,
}

impl Fact {
    pub const fn new(table: Table, multiplier: Multiplier) -> Self {
        Self { table, multiplier }
    }

    /// The product.
    #[inline]
    pub const fn product(&self) -> u32 {
        fact(self.table.get(), self.multiplier.get())
    }

    /// Addends for the repeated-addition view: `multiplier` copies of `table`.
    pub fn addends(&self) -> Vec<u32> {
        vec![self.table.get(); self.multiplier.get() as usize]
    }

    /// Number-line landing points, starting at zero.
    pub fn jumps(&self) -> Vec<u32> {
        (0..=self.multiplier.get())
            .map(|step| step * self.table.get())
            .collect()
    }

    /// Splits the multiplier at five for the area model.
    ///
    /// `7 × 8` becomes `(7 × 5) + (7 × 3)`. Multipliers of five or less do not
    /// split and return `None`.
    pub fn split_at_five(&self) -> Option<(u32, u32)> {
        let m = self.multiplier.get();
        (m > 5).then(|| (fact(self.table.get(), 5), fact(self.table.get(), m - 5)))
    }

    /// The nines finger trick, only meaningful for the table of nine.
    pub fn nines_fingers(&self) -> Option<NinesFingers> {
        if self.table.get() != 9 {
            return None;
        }
        let m = self.multiplier.get();
        Some(NinesFingers {
            folded: m,
            tens: m - 1,
            ones: 10 - m,
        })
    }

    /// The "a groups of b" reading used in hints and fallbacks.
    pub fn groups_sentence(&self) -> String {
        format!(
            "{} دسته {} تایی میشه {} تا!",
            self.table,
            self.multiplier,
            self.product()
        )
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = {}", self.table, self.multiplier, self.product())
    }
}

/// The ten facts of one table, multiplier ascending.
pub fn facts_of(table: Table) -> impl Iterator<Item = Fact> {
    Multiplier::all().map(move |m| Fact::new(table, m))
}
