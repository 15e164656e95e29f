//! Locale descriptors and the arena that owns them.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::pool::{PoolError, PoolKind};
use crate::{DateTimeFormatDescriptor, NumberFormatDescriptor, RegionId};

/// Number of optional-calendar slots per locale.
pub const NUM_CALENDARS: usize = 4;

/// Numeric locale identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Lcid(u32);

impl Lcid {
    pub const fn new(raw: u32) -> Self {
        Lcid(raw)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse `0x0C0A` style hex, or plain decimal.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let value = match text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => text.parse().ok()?,
        };
        Some(Lcid(value))
    }
}

impl fmt::Display for Lcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Index of a locale in a [`LocaleArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct LocaleIdx(u32);

impl LocaleIdx {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Code pages and text layout facts for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInfo {
    pub ansi_code_page: u32,
    pub ebcdic_code_page: u32,
    pub mac_code_page: u32,
    pub oem_code_page: u32,
    pub list_separator: Option<String>,
    pub is_right_to_left: bool,
}

/// Build the composed locale name: `lang[-Script][-TERR]`.
pub fn compose_name(language: &str, script: Option<&str>, territory: Option<&str>) -> String {
    let mut name = String::from(language);
    for part in [script, territory].into_iter().flatten() {
        name.push('-');
        name.push_str(part);
    }
    name
}

/// The resolved record for one language + territory combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleDescriptor {
    /// Composed name, e.g. `es-ES`.
    pub name: String,
    /// File stem of the locale's own source document.
    pub source_stem: String,
    pub language: String,
    pub script: Option<String>,
    pub territory: Option<String>,

    pub lcid: Lcid,
    pub parent_lcid: Lcid,
    pub specific_lcid: Lcid,
    pub iso2_language: Option<String>,
    pub iso3_language: Option<String>,
    pub win3_language: Option<String>,

    pub display_name: Option<String>,
    pub english_name: Option<String>,
    pub native_name: Option<String>,

    /// Optional calendar type codes; `-1` marks an unused slot.
    pub calendars: [i32; NUM_CALENDARS],
    pub datetime: DateTimeFormatDescriptor,
    pub number: NumberFormatDescriptor,
    pub text_info: TextInfo,

    region: Option<RegionId>,
    parent: Option<LocaleIdx>,
    row: Option<u32>,
}

impl LocaleDescriptor {
    pub fn new(name: impl Into<String>, source_stem: impl Into<String>, language: impl Into<String>) -> Self {
        LocaleDescriptor {
            name: name.into(),
            source_stem: source_stem.into(),
            language: language.into(),
            script: None,
            territory: None,
            lcid: Lcid::default(),
            parent_lcid: Lcid::default(),
            specific_lcid: Lcid::default(),
            iso2_language: None,
            iso3_language: None,
            win3_language: None,
            display_name: None,
            english_name: None,
            native_name: None,
            calendars: [-1; NUM_CALENDARS],
            datetime: DateTimeFormatDescriptor::default(),
            number: NumberFormatDescriptor::default(),
            text_info: TextInfo::default(),
            region: None,
            parent: None,
            row: None,
        }
    }

    /// A neutral locale names a language only.
    pub fn is_neutral(&self) -> bool {
        self.territory.is_none()
    }

    /// Replace the calendar slots, returning how many codes did not fit.
    pub fn set_calendars(&mut self, codes: &[i32]) -> usize {
        self.calendars = [-1; NUM_CALENDARS];
        for (slot, &code) in self.calendars.iter_mut().zip(codes) {
            *slot = code;
        }
        codes.len().saturating_sub(NUM_CALENDARS)
    }

    pub fn region(&self) -> Option<RegionId> {
        self.region
    }

    pub fn set_region(&mut self, region: Option<RegionId>) {
        self.region = region;
    }

    /// Row number in the emitted tables, once assigned.
    /// Arena entry of the parent locale, once [`LocaleArena::link_parents`]
    /// has run. `None` when the parent was not compiled.
    pub fn parent(&self) -> Option<LocaleIdx> {
        self.parent
    }

    pub fn row(&self) -> Option<u32> {
        self.row
    }

    /// Assign the row number. Returns `false` if one was already assigned.
    pub fn assign_row(&mut self, row: u32) -> bool {
        if self.row.is_some() {
            return false;
        }
        self.row = Some(row);
        true
    }

    /// Visit every string the emitted tables reference, with its pool.
    pub fn for_each_string<F>(&self, mut f: F) -> Result<(), PoolError>
    where
        F: FnMut(PoolKind, &str) -> Result<(), PoolError>,
    {
        let general = [
            Some(self.name.as_str()),
            Some(self.language.as_str()),
            self.territory.as_deref(),
            self.iso2_language.as_deref(),
            self.iso3_language.as_deref(),
            self.win3_language.as_deref(),
            self.display_name.as_deref(),
            self.english_name.as_deref(),
            self.native_name.as_deref(),
            self.text_info.list_separator.as_deref(),
        ];
        for text in general.into_iter().flatten() {
            f(PoolKind::General, text)?;
        }
        self.datetime.for_each_string(&mut f)?;
        self.number.for_each_string(&mut f)
    }
}

/// Flat storage for every locale of a compilation.
#[derive(Clone, Debug, Default)]
pub struct LocaleArena {
    locales: Vec<LocaleDescriptor>,
}

impl LocaleArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, locale: LocaleDescriptor) -> LocaleIdx {
        let idx = LocaleIdx(u32::try_from(self.locales.len()).unwrap_or(u32::MAX));
        self.locales.push(locale);
        idx
    }

    pub fn get(&self, idx: LocaleIdx) -> &LocaleDescriptor {
        &self.locales[idx.index()]
    }

    pub fn get_mut(&mut self, idx: LocaleIdx) -> &mut LocaleDescriptor {
        &mut self.locales[idx.index()]
    }

    /// Resolve each locale's `parent_lcid` to the arena entry carrying that
    /// lcid. Returns the locales whose parent is absent from the arena.
    pub fn link_parents(&mut self) -> Vec<LocaleIdx> {
        let by_lcid: FxHashMap<Lcid, LocaleIdx> = self
            .indices()
            .map(|idx| (self.get(idx).lcid, idx))
            .collect();
        let mut unlinked = Vec::new();
        for idx in self.indices().collect::<Vec<_>>() {
            let locale = self.get_mut(idx);
            if locale.parent_lcid == Lcid::default() {
                locale.parent = None;
                continue;
            }
            locale.parent = by_lcid
                .get(&locale.parent_lcid)
                .copied()
                .filter(|&parent| parent != idx);
            if locale.parent.is_none() {
                unlinked.push(idx);
            }
        }
        unlinked
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = LocaleIdx> {
        (0..self.locales.len()).map(|i| LocaleIdx(u32::try_from(i).unwrap_or(u32::MAX)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleDescriptor> {
        self.locales.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LocaleDescriptor> {
        self.locales.iter_mut()
    }
}
