//! Display, English and native names.

use locc_diagnostic::{Diagnostic, ErrorCode};
use locc_ir::LocaleDescriptor;
use locc_markup::Document;

use crate::targets::LANGS_DIR;
use crate::{CompileContext, CompileError};

const ENGLISH: &str = "en";

/// Language whose document holds the native name for `language`.
fn native_source_language(language: &str) -> &str {
    match language {
        // Both Norwegian written forms are named in the common document.
        "nb" | "nn" => "no",
        other => other,
    }
}

/// `language-name` or `language-name (territory-name)` as written in `doc`.
fn name_in(doc: &Document, language: &str, territory: Option<&str>) -> Result<String, String> {
    let language_name = doc
        .value(&format!(
            "ldml/localeDisplayNames/languages/language[@type='{language}']"
        ))
        .ok_or_else(|| format!("no name for language `{language}`"))?;
    let Some(territory) = territory else {
        return Ok(language_name.to_string());
    };
    let territory_name = doc
        .value(&format!(
            "ldml/localeDisplayNames/territories/territory[@type='{territory}']"
        ))
        .ok_or_else(|| format!("no name for territory `{territory}`"))?;
    Ok(format!("{language_name} ({territory_name})"))
}

fn lookup(
    ctx: &mut CompileContext<'_>,
    locale: &LocaleDescriptor,
    which: &str,
    source_language: &str,
    name_language: &str,
) -> Result<Option<String>, CompileError> {
    let path = format!("{LANGS_DIR}/{source_language}.xml");
    let reason = match ctx.document(&path)? {
        Some(doc) => match name_in(&doc, name_language, locale.territory.as_deref()) {
            Ok(name) => return Ok(Some(name)),
            Err(reason) => reason,
        },
        None => "document is missing".to_string(),
    };
    ctx.report(
        Diagnostic::warning(ErrorCode::W2005)
            .with_message(format!("cannot resolve the {which} name"))
            .with_locale(&locale.name)
            .with_note(format!("{path}: {reason}")),
    );
    Ok(None)
}

/// Fill in the three names; each missing one is reported and left unset.
pub(crate) fn resolve_names(
    ctx: &mut CompileContext<'_>,
    locale: &mut LocaleDescriptor,
) -> Result<(), CompileError> {
    let display_language = ctx.options.display_language.clone();
    let language = locale.language.clone();

    locale.display_name = lookup(ctx, locale, "display", &display_language, &language)?;

    locale.english_name = if display_language == ENGLISH {
        locale.display_name.clone()
    } else {
        lookup(ctx, locale, "English", ENGLISH, &language)?
    };

    locale.native_name = if language == display_language {
        locale.display_name.clone()
    } else {
        let source = native_source_language(&language).to_string();
        lookup(ctx, locale, "native", &source, &language)?
    };
    Ok(())
}
