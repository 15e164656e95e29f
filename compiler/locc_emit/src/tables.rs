//! C table writer.
//!
//! Output order is fixed: header, counts, date-time rows, number rows,
//! culture rows, culture name index, region rows, region name index, then
//! the three string pools. Every string column is a byte offset into one of
//! the pools; `0` is the empty string.

use locc_ir::{
    GroupSizes, InternPools, LocaleDescriptor, LocaleIdx, PoolError, PoolKind, MAX_GROUP_SIZES,
    NUM_DAYS, NUM_LONG_DATE_PATTERNS, NUM_LONG_TIME_PATTERNS, NUM_MONTHS,
    NUM_SHORT_DATE_PATTERNS, NUM_SHORT_TIME_PATTERNS,
};
use locc_resolve::{Compilation, CompileError};

use crate::regions::{resolve_regions, RegionTable};
use crate::rows::{assign_rows, name_order};
use crate::{Emitter, StringEmitter};

const HEADER: &str = "/* generated by locc; do not edit */";

/// Padding for unused numeric slots.
const UNUSED: i32 = -1;

/// Writes rows into an emitter, resolving strings to pool offsets.
struct TableWriter<'a, E: Emitter> {
    out: &'a mut E,
    pools: &'a mut InternPools,
}

impl<E: Emitter> TableWriter<'_, E> {
    fn offset(&mut self, kind: PoolKind, text: Option<&str>) -> Result<String, PoolError> {
        Ok(self.pools.acquire(kind, text)?.to_string())
    }

    /// `{o1, o2, ...}` padded with `0` to `len` entries.
    fn offsets(&mut self, kind: PoolKind, texts: &[String], len: usize) -> Result<String, PoolError> {
        let mut items = Vec::with_capacity(len);
        for text in texts.iter().take(len) {
            items.push(self.offset(kind, Some(text.as_str()))?);
        }
        items.resize(len, "0".to_string());
        Ok(format!("{{{}}}", items.join(", ")))
    }

    fn open(&mut self, ty: &str, name: &str) {
        self.out.emit(&format!("static const {ty} {name} [] = {{"));
        self.out.emit_newline();
    }

    fn close(&mut self) {
        self.out.emit("};");
        self.out.emit_newline();
        self.out.emit_newline();
    }

    fn row(&mut self, fields: &[String], comment: &str) {
        self.out.emit_indent(1);
        self.out.emit(&format!("{{{}}},", fields.join(", ")));
        self.out.emit_space();
        self.out.emit(&format!("/* {comment} */"));
        self.out.emit_newline();
    }
}

fn numbers<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

/// Group sizes padded to the fixed slot count.
fn group_sizes(sizes: &GroupSizes) -> String {
    let mut slots: Vec<i32> = sizes.iter().map(|&size| i32::from(size)).collect();
    slots.resize(MAX_GROUP_SIZES, UNUSED);
    numbers(slots)
}

fn datetime_row<E: Emitter>(
    w: &mut TableWriter<'_, E>,
    locale: &LocaleDescriptor,
) -> Result<Vec<String>, PoolError> {
    use PoolKind::{DateTime, General, Pattern};
    let dt = &locale.datetime;
    Ok(vec![
        w.offset(Pattern, dt.long_date_pattern.as_deref())?,
        w.offset(Pattern, dt.short_date_pattern.as_deref())?,
        w.offset(Pattern, dt.long_time_pattern.as_deref())?,
        w.offset(Pattern, dt.short_time_pattern.as_deref())?,
        w.offset(Pattern, dt.year_month_pattern.as_deref())?,
        w.offset(Pattern, dt.month_day_pattern.as_deref())?,
        w.offset(Pattern, dt.full_date_time_pattern.as_deref())?,
        w.offset(DateTime, dt.am_designator.as_deref())?,
        w.offset(DateTime, dt.pm_designator.as_deref())?,
        w.offset(General, dt.date_separator.as_deref())?,
        w.offset(General, dt.time_separator.as_deref())?,
        dt.first_day_of_week.map_or(UNUSED, |day| day as i32).to_string(),
        dt.week_rule.map_or(UNUSED, |rule| rule as i32).to_string(),
        w.offsets(DateTime, &dt.day_names, NUM_DAYS)?,
        w.offsets(DateTime, &dt.abbreviated_day_names, NUM_DAYS)?,
        w.offsets(DateTime, &dt.month_names, NUM_MONTHS)?,
        w.offsets(DateTime, &dt.abbreviated_month_names, NUM_MONTHS)?,
        w.offsets(Pattern, &dt.short_date_patterns, NUM_SHORT_DATE_PATTERNS)?,
        w.offsets(Pattern, &dt.long_date_patterns, NUM_LONG_DATE_PATTERNS)?,
        w.offsets(Pattern, &dt.short_time_patterns, NUM_SHORT_TIME_PATTERNS)?,
        w.offsets(Pattern, &dt.long_time_patterns, NUM_LONG_TIME_PATTERNS)?,
    ])
}

fn number_row<E: Emitter>(
    w: &mut TableWriter<'_, E>,
    locale: &LocaleDescriptor,
) -> Result<Vec<String>, PoolError> {
    let n = &locale.number;
    let mut fields = Vec::with_capacity(21);
    for symbol in [
        &n.decimal_separator,
        &n.group_separator,
        &n.positive_sign,
        &n.negative_sign,
        &n.percent_symbol,
        &n.per_mille_symbol,
        &n.nan_symbol,
        &n.positive_infinity_symbol,
        &n.negative_infinity_symbol,
        &n.currency_symbol,
    ] {
        fields.push(w.offset(PoolKind::General, symbol.as_deref())?);
    }
    fields.extend(
        [
            n.number_decimal_digits,
            n.number_negative_pattern,
            n.percent_decimal_digits,
            n.percent_positive_pattern,
            n.percent_negative_pattern,
            n.currency_decimal_digits,
            n.currency_positive_pattern,
            n.currency_negative_pattern,
        ]
        .iter()
        .map(u8::to_string),
    );
    fields.push(group_sizes(&n.number_group_sizes));
    fields.push(group_sizes(&n.percent_group_sizes));
    fields.push(group_sizes(&n.currency_group_sizes));
    Ok(fields)
}

fn culture_row<E: Emitter>(
    w: &mut TableWriter<'_, E>,
    locale: &LocaleDescriptor,
) -> Result<Vec<String>, PoolError> {
    use PoolKind::General;
    let row = locale.row().map_or(UNUSED.to_string(), |row| row.to_string());
    let region = locale
        .region()
        .map_or(UNUSED.to_string(), |id| id.to_string());
    let info = &locale.text_info;
    Ok(vec![
        locale.lcid.to_string(),
        locale.parent_lcid.to_string(),
        locale.specific_lcid.to_string(),
        w.offset(General, Some(locale.name.as_str()))?,
        w.offset(General, locale.iso2_language.as_deref())?,
        w.offset(General, locale.iso3_language.as_deref())?,
        w.offset(General, locale.win3_language.as_deref())?,
        w.offset(General, locale.display_name.as_deref())?,
        w.offset(General, locale.english_name.as_deref())?,
        w.offset(General, locale.native_name.as_deref())?,
        info.ansi_code_page.to_string(),
        info.ebcdic_code_page.to_string(),
        info.mac_code_page.to_string(),
        info.oem_code_page.to_string(),
        w.offset(General, info.list_separator.as_deref())?,
        u8::from(info.is_right_to_left).to_string(),
        // Date-time and number rows share the culture's row number.
        row.clone(),
        row,
        region,
        numbers(locale.calendars),
    ])
}

/// Resolve regions, number the rows and render the whole artifact.
pub fn render(compilation: &mut Compilation) -> Result<String, CompileError> {
    let regions = resolve_regions(compilation)?;
    let rows = assign_rows(&mut compilation.locales);
    let names = name_order(&compilation.locales);

    let mut out = StringEmitter::with_capacity(64 * 1024);
    emit_tables(&mut out, compilation, &regions, &rows, &names)?;
    out.ensure_trailing_newline();

    tracing::info!(
        locales = rows.len(),
        regions = regions.len(),
        bytes = out.len(),
        "rendered tables"
    );
    Ok(out.output())
}

/// Write every table. `rows` is the row order and `names` the name-index
/// order of the compilation's locales.
pub fn emit_tables<E: Emitter>(
    out: &mut E,
    compilation: &mut Compilation,
    regions: &RegionTable,
    rows: &[LocaleIdx],
    names: &[LocaleIdx],
) -> Result<(), PoolError> {
    out.emit(HEADER);
    out.emit_newline();
    out.emit_newline();
    out.emit(&format!("#define NUM_CULTURE_ENTRIES {}", rows.len()));
    out.emit_newline();
    out.emit(&format!("#define NUM_REGION_ENTRIES {}", regions.len()));
    out.emit_newline();
    out.emit_newline();

    let locales = &compilation.locales;
    let mut w = TableWriter {
        out,
        pools: &mut compilation.pools,
    };

    w.open("DateTimeFormatEntry", "datetime_format_entries");
    for &idx in rows {
        let locale = locales.get(idx);
        let fields = datetime_row(&mut w, locale)?;
        w.row(&fields, &locale.name);
    }
    w.close();

    w.open("NumberFormatEntry", "number_format_entries");
    for &idx in rows {
        let locale = locales.get(idx);
        let fields = number_row(&mut w, locale)?;
        w.row(&fields, &locale.name);
    }
    w.close();

    w.open("CultureInfoEntry", "culture_entries");
    for &idx in rows {
        let locale = locales.get(idx);
        let fields = culture_row(&mut w, locale)?;
        w.row(&fields, &locale.name);
    }
    w.close();

    w.open("CultureInfoNameEntry", "culture_name_entries");
    for &idx in names {
        let locale = locales.get(idx);
        let fields = [
            w.offset(PoolKind::General, Some(locale.name.as_str()))?,
            locale.row().map_or(UNUSED.to_string(), |row| row.to_string()),
        ];
        w.row(&fields, &locale.name);
    }
    w.close();

    w.open("RegionInfoEntry", "region_entries");
    for region in regions.iter() {
        let mut fields = vec![w.offset(PoolKind::General, Some(region.iso2.as_str()))?];
        for text in [
            &region.iso3,
            &region.win3,
            &region.english_name,
            &region.currency_symbol,
            &region.iso_currency_symbol,
            &region.currency_english_name,
        ] {
            fields.push(w.offset(PoolKind::General, text.as_deref())?);
        }
        w.row(&fields, &region.iso2);
    }
    w.close();

    w.open("RegionInfoNameEntry", "region_name_entries");
    for region in regions.iter() {
        let fields = [
            w.offset(PoolKind::General, Some(region.iso2.as_str()))?,
            region.id().map_or(UNUSED.to_string(), |id| id.to_string()),
        ];
        w.row(&fields, &region.iso2);
    }
    w.close();

    for kind in PoolKind::ALL {
        emit_pool(&mut *w.out, &*w.pools, kind);
    }
    Ok(())
}

/// One pool as concatenated string literals, reserved empty entry first.
fn emit_pool<E: Emitter>(out: &mut E, pools: &InternPools, kind: PoolKind) {
    out.emit(&format!("static const char {} [] = {{", kind.symbol()));
    out.emit_newline();
    for entry in pools.pool(kind).entries() {
        out.emit_indent(1);
        out.emit(&format!("\"{entry}\\0\""));
        out.emit_newline();
    }
    out.emit("};");
    out.emit_newline();
    if kind != PoolKind::DateTime {
        out.emit_newline();
    }
}
