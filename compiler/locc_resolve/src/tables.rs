//! Side tables loaded once per run: the numeric-id directory, the
//! territory and currency mappings, text info, and English reference names.

use locc_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use locc_ir::{Lcid, TextInfo};
use locc_markup::{Document, MarkupSource, Node};
use rustc_hash::FxHashMap;

use crate::CompileError;

pub const LCIDS_PATH: &str = "lcids.xml";
pub const SUPPLEMENTAL_DATA_PATH: &str = "supplementalData.xml";
pub const TEXT_INFO_PATH: &str = "textinfo.xml";

/// One `lcids.xml` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LcidEntry {
    pub lcid: Lcid,
    pub parent: Lcid,
    pub specific: Lcid,
    pub iso2: Option<String>,
    pub iso3: Option<String>,
    pub win: Option<String>,
}

/// Alternative codes for a territory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerritoryCodes {
    pub alpha3: Option<String>,
    pub win: Option<String>,
}

/// Symbol and English name of a currency, from the English document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyNames {
    pub symbol: Option<String>,
    pub name: Option<String>,
}

/// English territory and currency names used by the region table.
#[derive(Clone, Debug, Default)]
pub struct ReferenceNames {
    pub territories: FxHashMap<String, String>,
    pub currencies: FxHashMap<String, CurrencyNames>,
}

impl ReferenceNames {
    pub fn from_document(doc: &Document) -> Self {
        let mut names = ReferenceNames::default();
        for territory in doc.select("ldml/localeDisplayNames/territories/territory") {
            if let (Some(code), text) = (territory.attr("type"), territory.text()) {
                if !text.is_empty() {
                    names
                        .territories
                        .entry(code.to_string())
                        .or_insert_with(|| text.to_string());
                }
            }
        }
        for currency in doc.select("ldml/numbers/currencies/currency") {
            if let Some(code) = currency.attr("type") {
                names.currencies.entry(code.to_string()).or_insert_with(|| CurrencyNames {
                    symbol: currency.value("symbol").map(str::to_string),
                    name: currency.value("displayName").map(str::to_string),
                });
            }
        }
        names
    }
}

#[derive(Clone, Debug, Default)]
pub struct SideTables {
    /// Keyed by composed locale name.
    pub lcids: FxHashMap<String, LcidEntry>,
    /// Territory code to ISO 4217 currency code.
    pub currencies: FxHashMap<String, String>,
    pub territory_codes: FxHashMap<String, TerritoryCodes>,
    pub text_info: FxHashMap<Lcid, TextInfo>,
    pub reference: ReferenceNames,
}

fn numeric_attr(
    node: Node<'_>,
    attr: &str,
    path: &str,
    diagnostics: &mut DiagnosticQueue,
) -> Option<u32> {
    let text = node.attr(attr)?;
    let parsed = Lcid::parse(text).map(Lcid::get);
    if parsed.is_none() {
        diagnostics.report(
            Diagnostic::warning(ErrorCode::W2006)
                .with_message(format!("attribute `{attr}` is not a number: `{text}`"))
                .with_note(format!("in {path}")),
        );
    }
    parsed
}

fn owned_attr(node: Node<'_>, attr: &str) -> Option<String> {
    node.attr(attr).filter(|v| !v.is_empty()).map(str::to_string)
}

impl SideTables {
    /// Load every side table. Only the numeric-id directory is required.
    pub fn load(
        source: &dyn MarkupSource,
        diagnostics: &mut DiagnosticQueue,
    ) -> Result<SideTables, CompileError> {
        let mut tables = SideTables::default();

        let lcids = source
            .load(LCIDS_PATH)?
            .ok_or_else(|| CompileError::MissingSideTable {
                path: LCIDS_PATH.to_string(),
            })?;
        tables.load_lcids(&lcids, diagnostics);

        if let Some(doc) = source.load(SUPPLEMENTAL_DATA_PATH)? {
            tables.load_supplemental(&doc);
        }
        if let Some(doc) = source.load(TEXT_INFO_PATH)? {
            tables.load_text_info(&doc, diagnostics);
        }

        tracing::info!(
            lcids = tables.lcids.len(),
            currencies = tables.currencies.len(),
            text_info = tables.text_info.len(),
            "loaded side tables"
        );
        Ok(tables)
    }

    fn load_lcids(&mut self, doc: &Document, diagnostics: &mut DiagnosticQueue) {
        for node in doc.select("lcids/lcid") {
            let Some(name) = node.attr("name") else {
                continue;
            };
            let Some(lcid) = numeric_attr(node, "id", LCIDS_PATH, diagnostics) else {
                continue;
            };
            let entry = LcidEntry {
                lcid: Lcid::new(lcid),
                parent: Lcid::new(numeric_attr(node, "parent", LCIDS_PATH, diagnostics).unwrap_or(0)),
                specific: Lcid::new(
                    numeric_attr(node, "specific", LCIDS_PATH, diagnostics).unwrap_or(lcid),
                ),
                iso2: owned_attr(node, "iso2"),
                iso3: owned_attr(node, "iso3"),
                win: owned_attr(node, "win"),
            };
            self.lcids.insert(name.to_string(), entry);
        }
    }

    fn load_supplemental(&mut self, doc: &Document) {
        for region in doc.select("supplementalData/currencyData/region") {
            let Some(territory) = region.attr("iso3166") else {
                continue;
            };
            // The first currency still in use wins; otherwise the first listed.
            let currencies = region.select("currency");
            let current = currencies
                .iter()
                .find(|c| c.attr("to").is_none())
                .or_else(|| currencies.first());
            if let Some(code) = current.and_then(|c| c.attr("iso4217")) {
                self.currencies
                    .entry(territory.to_string())
                    .or_insert_with(|| code.to_string());
            }
        }
        for codes in doc.select("supplementalData/codeMappings/territoryCodes") {
            if let Some(territory) = codes.attr("type") {
                self.territory_codes.insert(
                    territory.to_string(),
                    TerritoryCodes {
                        alpha3: owned_attr(codes, "alpha3"),
                        win: owned_attr(codes, "win"),
                    },
                );
            }
        }
    }

    fn load_text_info(&mut self, doc: &Document, diagnostics: &mut DiagnosticQueue) {
        for culture in doc.select("textinfo/culture") {
            let Some(lcid) = numeric_attr(culture, "lcid", TEXT_INFO_PATH, diagnostics) else {
                continue;
            };
            let mut page =
                |attr: &str| numeric_attr(culture, attr, TEXT_INFO_PATH, diagnostics).unwrap_or(0);
            let info = TextInfo {
                ansi_code_page: page("ansi"),
                ebcdic_code_page: page("ebcdic"),
                mac_code_page: page("mac"),
                oem_code_page: page("oem"),
                list_separator: owned_attr(culture, "listsep"),
                is_right_to_left: matches!(culture.attr("rtl"), Some("true" | "1")),
            };
            self.text_info.insert(Lcid::new(lcid), info);
        }
    }

    pub fn lcid(&self, name: &str) -> Option<&LcidEntry> {
        self.lcids.get(name)
    }

    pub fn currency_for(&self, territory: &str) -> Option<&str> {
        self.currencies.get(territory).map(String::as_str)
    }
}
