//! Built-in extraction rules for the LegacyClonk sources and the lcdocs corpus.

use crate::error::DriftError;
use crate::extract::ExtractionRule;

/// `AddFunc(pEngine, "Name", FnName[, true|false]);`
pub const ADD_FUNC: &str = r#"AddFunc\(pEngine, +"(\w+)", +Fn\w+(, +(false|true))?\);"#;

/// `new C4AulDefCastFunc<C4V_A, C4V_B>{pEngine, "Name"...`
pub const TEMPLATED_FUNC: &str = r#"new\sC4Aul\w+<\w+,\s?\w+>\s*\{pEngine,\s"(\w+)""#;

/// Constant table rows: `\t{ "NAME", C4V_Int, VALUE },` with an optional
/// trailing line comment, or the last row followed by `};`.
pub const CONSTANT_ROW: &str = r#"(?m)^\t\{\s?"(\w+)",\s*\w+,\s*[\w<>():]+\s*\}(,|\r?\n\};)(\s*//(\s*[\w()/-;,]+)+)?"#;

/// `global func Name(` unless the previous line ends with `//internal` or
/// `// internal` (any single non-word separator).
pub const HELPER_FUNC: &str = r"(?<!//internal\n)(?<!//internal\r\n)(?<!//\Winternal\n)(?<!//\Winternal\r\n)global func (\w+)\(";

/// `Name=...` key of every documentation stanza.
pub const DOC_NAME: &str = r"(?m)^Name=(\w+)";

pub fn engine_function_rules() -> Result<Vec<ExtractionRule>, DriftError> {
    Ok(vec![
        ExtractionRule::new("engine-addfunc", ADD_FUNC, 1)?,
        ExtractionRule::new("engine-templated-func", TEMPLATED_FUNC, 1)?,
    ])
}

pub fn engine_constant_rules() -> Result<Vec<ExtractionRule>, DriftError> {
    Ok(vec![ExtractionRule::new("engine-constant", CONSTANT_ROW, 1)?])
}

pub fn helper_function_rules() -> Result<Vec<ExtractionRule>, DriftError> {
    Ok(vec![ExtractionRule::new("helper-global-func", HELPER_FUNC, 1)?])
}

pub fn doc_name_rules() -> Result<Vec<ExtractionRule>, DriftError> {
    Ok(vec![ExtractionRule::new("doc-name", DOC_NAME, 1)?])
}
