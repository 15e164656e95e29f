//! Per-locale resolution and the whole-run driver.

use locc_diagnostic::{Diagnostic, ErrorCode};
use locc_ir::{compose_name, LocaleDescriptor, LocaleIdx};
use locc_markup::MarkupSource;

use crate::context::{Compilation, Orphan};
use crate::datetime::merge_datetime;
use crate::finalize::{finalize, intern};
use crate::names::resolve_names;
use crate::number::merge_number;
use crate::targets::{discover_targets, Layer, Target};
use crate::{CompileContext, CompileError, CompileOptions};

/// Language, script and territory declared by a target's own document.
struct Identity {
    language: String,
    script: Option<String>,
    territory: Option<String>,
}

fn read_identity(ctx: &mut CompileContext<'_>, target: &Target) -> Result<Identity, CompileError> {
    let path = target.source_path();
    let doc = ctx
        .document(&path)?
        .ok_or_else(|| CompileError::MissingSource {
            stem: target.stem.clone(),
            path: path.clone(),
        })?;

    let stem_language = target.stem.split('_').next().unwrap_or_default();
    let language = doc
        .value("ldml/identity/language/@type")
        .unwrap_or(stem_language)
        .to_string();
    let script = doc.value("ldml/identity/script/@type").map(str::to_string);
    let territory = if target.neutral {
        None
    } else {
        doc.value("ldml/identity/territory/@type").map(str::to_string)
    };
    Ok(Identity {
        language,
        script,
        territory,
    })
}

/// Resolve one target. Returns `None` when the locale is excluded.
pub fn compile_locale(
    ctx: &mut CompileContext<'_>,
    target: &Target,
) -> Result<Option<LocaleIdx>, CompileError> {
    let identity = read_identity(ctx, target)?;
    let name = compose_name(
        &identity.language,
        identity.script.as_deref(),
        identity.territory.as_deref(),
    );

    let Some(entry) = ctx.tables.lcid(&name).cloned() else {
        ctx.report(
            Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("no numeric identifier for `{name}`"))
                .with_locale(&name)
                .with_note(format!("source {} is now an orphan", target.source_path()))
                .with_suggestion("add an entry to lcids.xml or run `locc prune`"),
        );
        ctx.orphans.push(Orphan {
            name,
            target: target.clone(),
        });
        return Ok(None);
    };

    let mut locale = LocaleDescriptor::new(&name, &target.stem, &identity.language);
    locale.script = identity.script;
    locale.territory = identity.territory;
    locale.lcid = entry.lcid;
    locale.parent_lcid = entry.parent;
    locale.specific_lcid = entry.specific;
    locale.iso2_language = entry.iso2;
    locale.iso3_language = entry.iso3;
    locale.win3_language = entry.win;
    if let Some(info) = ctx.tables.text_info.get(&entry.lcid) {
        locale.text_info = info.clone();
    }

    resolve_names(ctx, &mut locale)?;

    let currency = match locale.territory.as_deref() {
        Some(territory) => {
            let currency = ctx.tables.currency_for(territory).map(str::to_string);
            if currency.is_none() {
                ctx.report(
                    Diagnostic::warning(ErrorCode::W2002)
                        .with_message(format!("territory `{territory}` has no currency mapping"))
                        .with_locale(&name),
                );
            }
            currency
        }
        None => None,
    };

    for layer in Layer::ALL {
        let Some(path) = layer.path(target, &locale.language) else {
            continue;
        };
        let Some(doc) = ctx.document(&path)? else {
            if layer.is_required() {
                return Err(CompileError::MissingRootLayer { path });
            }
            tracing::trace!(locale = %name, %layer, path = %path, "layer absent");
            continue;
        };
        tracing::debug!(locale = %name, %layer, path = %path, "applying layer");
        merge_datetime(&mut locale, &doc, &mut ctx.diagnostics);
        merge_number(&mut locale, &doc, currency.as_deref(), &mut ctx.diagnostics);
    }

    finalize(&mut locale, &mut ctx.diagnostics);
    intern(&locale, &mut ctx.pools)?;

    tracing::debug!(locale = %name, lcid = %locale.lcid, "resolved");
    Ok(Some(ctx.locales.push(locale)))
}

/// Resolve every target the options select.
pub fn compile_all(
    source: &dyn MarkupSource,
    options: CompileOptions,
) -> Result<Compilation, CompileError> {
    let targets = discover_targets(source, &options)?;
    let mut ctx = CompileContext::new(source, options)?;
    tracing::info!(targets = targets.len(), "resolving locales");

    for target in &targets {
        compile_locale(&mut ctx, target)?;
    }

    for idx in ctx.locales.link_parents() {
        let locale = ctx.locales.get(idx);
        tracing::debug!(
            locale = %locale.name,
            parent = %locale.parent_lcid,
            "parent locale not compiled"
        );
    }

    tracing::info!(
        resolved = ctx.locales.len(),
        excluded = ctx.orphans.len(),
        "resolution finished"
    );
    Ok(ctx.into_compilation())
}
