// Copyright 2025 Cowboy AI, LLC.

//! Finite mapping enumerator for the currying demo.
//!
//! For finite sets A = {1..a}, B = {1..b}, C = {1..c} this lists the input
//! space of an uncurried function (A×B)→C next to its curried regrouping
//! A→(B→C). Both are enumerations of index spaces, not of individual
//! functions; the number of functions either way is c^(a·b), which is what
//! witnesses Set(A×B, C) ≅ Set(A, C^B).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use tracing::debug;

use crate::config::{BoundsPolicy, DemoConfig};
use crate::errors::{DemoError, DemoResult};

/// Sizes of the three finite sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetSizes {
    /// |A|
    pub a: u32,
    /// |B|
    pub b: u32,
    /// |C|
    pub c: u32,
}

impl Default for SetSizes {
    fn default() -> Self {
        Self { a: 2, b: 2, c: 2 }
    }
}

impl SetSizes {
    /// Sizes as given; positivity is checked by `enumerate`.
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// Apply the configured range and bounds policy to raw selector values.
    pub fn resolve(a: u32, b: u32, c: u32, config: &DemoConfig) -> DemoResult<Self> {
        config.validate()?;
        let range = config.set_sizes;
        let fit = |axis: char, value: u32| match config.bounds_policy {
            BoundsPolicy::Clamp => Ok(range.clamp(value)),
            BoundsPolicy::Reject if range.contains(value) => Ok(value),
            BoundsPolicy::Reject => Err(DemoError::InvalidSetSize {
                axis,
                value,
                min: range.min,
                max: range.max,
            }),
        };
        Ok(Self {
            a: fit('A', a)?,
            b: fit('B', b)?,
            c: fit('C', c)?,
        })
    }

    fn check_positive(&self) -> DemoResult<()> {
        for (axis, value) in [('A', self.a), ('B', self.b), ('C', self.c)] {
            if value == 0 {
                return Err(DemoError::InvalidSetSize {
                    axis,
                    value,
                    min: 1,
                    max: u32::MAX,
                });
            }
        }
        Ok(())
    }
}

/// One row of the uncurried table: input pair (a, b) against output c.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UncurriedEntry {
    /// Element of A
    pub a: u32,
    /// Element of B
    pub b: u32,
    /// Element of C
    pub c: u32,
}

impl Display for UncurriedEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) → {}", self.a, self.b, self.c)
    }
}

/// The uncurried table, lexicographic by (a, b, c).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UncurriedMapping {
    /// Entries in generation order
    pub entries: Vec<UncurriedEntry>,
}

impl UncurriedMapping {
    /// Number of entries (a·b·c).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One display line per entry, in generation order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

/// b ↦ the full range of C.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CurriedBranch {
    /// Element of B
    pub b: u32,
    /// Every element of C, ascending
    pub values: Vec<u32>,
}

impl Display for CurriedBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {{{}}}", self.b, join(&self.values, ","))
    }
}

/// a ↦ its branches over B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CurriedRow {
    /// Element of A
    pub a: u32,
    /// One branch per element of B, ascending
    pub branches: Vec<CurriedBranch>,
}

impl Display for CurriedRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {{{}}}", self.a, join(&self.branches, ", "))
    }
}

/// The curried regrouping A → (B → C).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CurriedView {
    /// Rows ordered by a
    pub rows: Vec<CurriedRow>,
}

impl CurriedView {
    /// Number of (a, b) branches across all rows (a·b).
    pub fn inner_len(&self) -> usize {
        self.rows.iter().map(|row| row.branches.len()).sum()
    }

    /// Number of leaf values across all branches (a·b·c).
    pub fn leaf_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.branches)
            .map(|branch| branch.values.len())
            .sum()
    }

    /// One display line per row, in generation order.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(ToString::to_string).collect()
    }
}

fn join<T: Display>(items: &[T], sep: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// List both representations of the index space for the given sizes.
pub fn enumerate(sizes: SetSizes) -> DemoResult<(UncurriedMapping, CurriedView)> {
    sizes.check_positive()?;

    let capacity = sizes.a.saturating_mul(sizes.b).saturating_mul(sizes.c);
    let mut entries = Vec::with_capacity(capacity as usize);
    for a in 1..=sizes.a {
        for b in 1..=sizes.b {
            for c in 1..=sizes.c {
                entries.push(UncurriedEntry { a, b, c });
            }
        }
    }

    let rows = (1..=sizes.a)
        .map(|a| CurriedRow {
            a,
            branches: (1..=sizes.b)
                .map(|b| CurriedBranch {
                    b,
                    values: (1..=sizes.c).collect(),
                })
                .collect(),
        })
        .collect();

    debug!(
        a = sizes.a,
        b = sizes.b,
        c = sizes.c,
        entries = entries.len(),
        "enumerated mappings"
    );
    Ok((UncurriedMapping { entries }, CurriedView { rows }))
}

/// Number of functions (A×B)→C, equal to the number A→C^B: c^(a·b).
///
/// Saturates at `u128::MAX`.
pub fn function_count(sizes: SetSizes) -> u128 {
    let exponent = u64::from(sizes.a) * u64::from(sizes.b);
    match u32::try_from(exponent) {
        Ok(exp) => u128::from(sizes.c).checked_pow(exp).unwrap_or(u128::MAX),
        Err(_) if sizes.c <= 1 => u128::from(sizes.c),
        Err(_) => u128::MAX,
    }
}
