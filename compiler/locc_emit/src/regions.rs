//! Region resolution: one record per territory, numbered in code order.

use locc_diagnostic::{Diagnostic, ErrorCode};
use locc_ir::{PoolError, RegionDescriptor, RegionId};
use locc_resolve::{Compilation, SideTables};

/// Every region of a compilation, ordered by two-letter code. A region's
/// id is its position.
#[derive(Clone, Debug, Default)]
pub struct RegionTable {
    regions: Vec<RegionDescriptor>,
}

impl RegionTable {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionDescriptor> {
        self.regions.iter()
    }

    /// Id of the region with the given two-letter code.
    pub fn find(&self, iso2: &str) -> Option<RegionId> {
        let pos = self
            .regions
            .binary_search_by(|region| region.iso2.as_str().cmp(iso2))
            .ok()?;
        self.regions[pos].id()
    }
}

/// The letter run right after the first `-` of a composed name.
pub fn territory_of(name: &str) -> Option<&str> {
    let (_, rest) = name.split_once('-')?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

fn describe(iso2: String, tables: &SideTables) -> RegionDescriptor {
    let mut region = RegionDescriptor::new(iso2);
    if let Some(codes) = tables.territory_codes.get(&region.iso2) {
        region.iso3.clone_from(&codes.alpha3);
        region.win3.clone_from(&codes.win);
    }
    region.english_name = tables.reference.territories.get(&region.iso2).cloned();
    if let Some(currency) = tables.currency_for(&region.iso2) {
        region.iso_currency_symbol = Some(currency.to_string());
        if let Some(names) = tables.reference.currencies.get(currency) {
            region.currency_symbol.clone_from(&names.symbol);
            region.currency_english_name.clone_from(&names.name);
        }
    }
    region
}

/// Build the region table and point every locale at its region.
///
/// Regions come from the territories of resolved locales and from the
/// currency table. A locale whose name yields no matching territory keeps
/// no region and is reported.
pub fn resolve_regions(compilation: &mut Compilation) -> Result<RegionTable, PoolError> {
    let mut codes: Vec<String> = compilation
        .locales
        .iter()
        .filter_map(|locale| locale.territory.clone())
        .chain(compilation.tables.currencies.keys().cloned())
        .collect();
    codes.sort_unstable();
    codes.dedup();

    let mut regions = Vec::with_capacity(codes.len());
    for (index, code) in codes.into_iter().enumerate() {
        let mut region = describe(code, &compilation.tables);
        region.assign_id(RegionId::new(u16::try_from(index).unwrap_or(u16::MAX)));
        region.for_each_string(|kind, text| compilation.pools.acquire(kind, Some(text)).map(drop))?;
        regions.push(region);
    }
    let table = RegionTable { regions };

    for locale in compilation.locales.iter_mut() {
        let territory = territory_of(&locale.name);
        let region = territory.and_then(|code| table.find(code));
        if region.is_none() {
            let note = match territory {
                Some(code) => format!("`{code}` is not a known territory"),
                None => "the name has no territory part".to_string(),
            };
            compilation.diagnostics.report(
                Diagnostic::warning(ErrorCode::W2003)
                    .with_message(format!("no region for `{}`", locale.name))
                    .with_locale(&locale.name)
                    .with_note(note),
            );
        }
        locale.set_region(region);
    }

    tracing::info!(regions = table.len(), "resolved regions");
    Ok(table)
}
