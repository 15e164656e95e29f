//! Offset-addressed string pools.
//!
//! Every string in the emitted tables is stored once in one of three packed
//! buffers and referenced by its byte offset. Offsets are 16-bit on the
//! consumer side, so each pool is capped at [`POOL_BUDGET`] bytes.
//!
//! The buffer holds the *escaped* form of each entry, ready to be written as
//! a C string literal. Offsets and lengths count the bytes the literal
//! denotes (the raw UTF-8 content plus its terminator), which is what the
//! consumer indexes into.

use rustc_hash::FxHashMap;
use std::fmt::{self, Write};

/// Maximum length in bytes of one pool, including the reserved entry.
pub const POOL_BUDGET: usize = 65_535;

/// Which pool a string belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum PoolKind {
    /// Names, codes, separators and number symbols.
    General,
    /// Date and time format patterns.
    Pattern,
    /// Day and month names, AM/PM designators.
    DateTime,
}

impl PoolKind {
    pub const ALL: [PoolKind; 3] = [PoolKind::General, PoolKind::Pattern, PoolKind::DateTime];

    /// Name of the static array the pool is emitted as.
    pub fn symbol(self) -> &'static str {
        match self {
            PoolKind::General => "locale_strings",
            PoolKind::Pattern => "pattern_strings",
            PoolKind::DateTime => "datetime_strings",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::General => write!(f, "general"),
            PoolKind::Pattern => write!(f, "pattern"),
            PoolKind::DateTime => write!(f, "date-time symbol"),
        }
    }
}

/// Byte offset of an interned string. Offset 0 means "absent".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct StrOffset(u16);

impl StrOffset {
    /// The reserved offset for null and empty strings.
    pub const ABSENT: StrOffset = StrOffset(0);

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_absent(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StrOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error when a pool grows past its budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Appending an entry would make the pool `len` bytes long.
    Overflow {
        pool: PoolKind,
        len: usize,
        budget: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Overflow { pool, len, budget } => write!(
                f,
                "{pool} string pool exceeded its budget: {len} bytes (0x{len:X}), max is {budget} (0x{budget:X})"
            ),
        }
    }
}

impl std::error::Error for PoolError {}

/// Escaped form of a string together with the number of bytes it denotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Escaped {
    /// Text safe to place between double quotes in a C string literal.
    pub text: String,
    /// Raw UTF-8 length of the original content.
    pub encoded_len: usize,
}

/// Escape `content` into its canonical literal form.
///
/// Non-ASCII and control bytes become `\xNN`. Once the first escape has
/// been written, every later ASCII hex digit is escaped too, so no `\x`
/// sequence can run on into the text after it. Backslashes and double quotes
/// get a backslash prefix.
pub fn escape(content: &str) -> Escaped {
    let mut text = String::with_capacity(content.len());
    let mut escaped_any = false;
    for &byte in content.as_bytes() {
        if byte > 0x7f || byte < 0x20 || (escaped_any && byte.is_ascii_hexdigit()) {
            let _ = write!(text, "\\x{byte:02x}");
            escaped_any = true;
        } else {
            if byte == b'\\' || byte == b'"' {
                text.push('\\');
            }
            text.push(char::from(byte));
        }
    }
    Escaped {
        text,
        encoded_len: content.len(),
    }
}

/// One append-only, deduplicating string pool.
///
/// Offset 0 is pre-assigned to the empty string, so the first real entry
/// lands at offset 1.
#[derive(Clone, Debug)]
pub struct StringPool {
    kind: PoolKind,
    /// Map from escaped content to its offset.
    map: FxHashMap<String, StrOffset>,
    /// Escaped entries in insertion order, starting with the reserved one.
    entries: Vec<String>,
    /// Next free offset; also the pool's current length.
    cursor: usize,
    budget: usize,
}

impl StringPool {
    /// Create a pool with the standard 16-bit budget.
    pub fn new(kind: PoolKind) -> Self {
        Self::with_budget(kind, POOL_BUDGET)
    }

    /// Create a pool with a custom budget.
    pub fn with_budget(kind: PoolKind, budget: usize) -> Self {
        let mut map = FxHashMap::default();
        map.insert(String::new(), StrOffset::ABSENT);
        StringPool {
            kind,
            map,
            entries: vec![String::new()],
            cursor: 1,
            budget,
        }
    }

    /// Return the offset of `content`, appending it if unseen.
    ///
    /// `None` and the empty string both map to [`StrOffset::ABSENT`].
    pub fn acquire(&mut self, content: Option<&str>) -> Result<StrOffset, PoolError> {
        match content {
            None => Ok(StrOffset::ABSENT),
            Some(content) => self.intern(content),
        }
    }

    /// Intern a non-null string.
    pub fn intern(&mut self, content: &str) -> Result<StrOffset, PoolError> {
        let escaped = escape(content);
        if let Some(&offset) = self.map.get(escaped.text.as_str()) {
            return Ok(offset);
        }

        let next = self.cursor + escaped.encoded_len + 1;
        let overflow = || PoolError::Overflow {
            pool: self.kind,
            len: next,
            budget: self.budget,
        };
        if next > self.budget {
            return Err(overflow());
        }
        let offset = StrOffset(u16::try_from(self.cursor).map_err(|_| overflow())?);

        self.cursor = next;
        self.entries.push(escaped.text.clone());
        self.map.insert(escaped.text, offset);
        Ok(offset)
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    /// Current length in bytes (reserved entry included).
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// True when only the reserved empty entry is present.
    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    /// Escaped entries in offset order, starting with the reserved empty one.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// The general, pattern and date-time symbol pools of one compilation.
#[derive(Clone, Debug)]
pub struct InternPools {
    general: StringPool,
    pattern: StringPool,
    datetime: StringPool,
}

impl InternPools {
    pub fn new() -> Self {
        Self::with_budget(POOL_BUDGET)
    }

    /// All three pools share the same custom budget.
    pub fn with_budget(budget: usize) -> Self {
        InternPools {
            general: StringPool::with_budget(PoolKind::General, budget),
            pattern: StringPool::with_budget(PoolKind::Pattern, budget),
            datetime: StringPool::with_budget(PoolKind::DateTime, budget),
        }
    }

    pub fn pool(&self, kind: PoolKind) -> &StringPool {
        match kind {
            PoolKind::General => &self.general,
            PoolKind::Pattern => &self.pattern,
            PoolKind::DateTime => &self.datetime,
        }
    }

    pub fn pool_mut(&mut self, kind: PoolKind) -> &mut StringPool {
        match kind {
            PoolKind::General => &mut self.general,
            PoolKind::Pattern => &mut self.pattern,
            PoolKind::DateTime => &mut self.datetime,
        }
    }

    #[inline]
    pub fn acquire(&mut self, kind: PoolKind, content: Option<&str>) -> Result<StrOffset, PoolError> {
        self.pool_mut(kind).acquire(content)
    }
}

impl Default for InternPools {
    fn default() -> Self {
        Self::new()
    }
}
