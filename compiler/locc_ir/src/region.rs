//! Territory-level records.

use std::fmt;

use crate::pool::{PoolError, PoolKind};

/// Dense region id, assigned in territory-code order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct RegionId(u16);

impl RegionId {
    pub const fn new(raw: u16) -> Self {
        RegionId(raw)
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionDescriptor {
    /// Two-letter territory code; the sort key.
    pub iso2: String,
    pub iso3: Option<String>,
    pub win3: Option<String>,
    pub english_name: Option<String>,
    pub currency_symbol: Option<String>,
    pub iso_currency_symbol: Option<String>,
    pub currency_english_name: Option<String>,
    id: Option<RegionId>,
}

impl RegionDescriptor {
    pub fn new(iso2: impl Into<String>) -> Self {
        RegionDescriptor {
            iso2: iso2.into(),
            ..RegionDescriptor::default()
        }
    }

    pub fn id(&self) -> Option<RegionId> {
        self.id
    }

    /// Assign the dense id. Returns `false` if one was already assigned.
    pub fn assign_id(&mut self, id: RegionId) -> bool {
        if self.id.is_some() {
            return false;
        }
        self.id = Some(id);
        true
    }

    /// Visit every string the region table references.
    pub fn for_each_string<F>(&self, mut f: F) -> Result<(), PoolError>
    where
        F: FnMut(PoolKind, &str) -> Result<(), PoolError>,
    {
        f(PoolKind::General, &self.iso2)?;
        let rest = [
            &self.iso3,
            &self.win3,
            &self.english_name,
            &self.currency_symbol,
            &self.iso_currency_symbol,
            &self.currency_english_name,
        ];
        for text in rest.into_iter().flatten() {
            f(PoolKind::General, text.as_str())?;
        }
        Ok(())
    }
}
