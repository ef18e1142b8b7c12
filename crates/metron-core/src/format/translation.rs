//! Localised unit names and symbols

use std::collections::HashMap;
use thiserror::Error;

use crate::types::Unit;

/// A translation provider could not produce a label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Translation failed: {0}")]
pub struct TranslationError(pub String);

/// Translates unit labels for a locale such as `fr` or `en-GB`.
///
/// Failures are never fatal: formatters fall back to the unit's own name or
/// symbol.
pub trait TranslationProvider {
    fn translate_name(&self, unit: &Unit, locale: &str) -> Result<String, TranslationError>;

    fn translate_symbol(&self, unit: &Unit, locale: &str) -> Result<String, TranslationError>;
}

/// In-memory translations keyed by locale and unit symbol
///
/// A locale such as `fr-CA` falls back to its language (`fr`); units with no
/// entry keep their own labels.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    names: HashMap<(String, String), String>,
    symbols: HashMap<(String, String), String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate the name of the unit whose symbol is `symbol`
    pub fn with_name(mut self, locale: &str, symbol: &str, name: &str) -> Self {
        self.names
            .insert((locale.to_lowercase(), symbol.to_string()), name.to_string());
        self
    }

    /// Translate the symbol of the unit whose symbol is `symbol`
    pub fn with_symbol(mut self, locale: &str, symbol: &str, translated: &str) -> Self {
        self.symbols.insert(
            (locale.to_lowercase(), symbol.to_string()),
            translated.to_string(),
        );
        self
    }

    fn find<'a>(
        table: &'a HashMap<(String, String), String>,
        unit: &Unit,
        locale: &str,
    ) -> Option<&'a String> {
        let locale = locale.to_lowercase();
        let language = locale.split(['-', '_']).next().unwrap_or_default();
        table
            .get(&(locale.clone(), unit.symbol().to_string()))
            .or_else(|| table.get(&(language.to_string(), unit.symbol().to_string())))
    }
}

impl TranslationProvider for TranslationTable {
    fn translate_name(&self, unit: &Unit, locale: &str) -> Result<String, TranslationError> {
        Ok(Self::find(&self.names, unit, locale)
            .cloned()
            .unwrap_or_else(|| unit.name().to_string()))
    }

    fn translate_symbol(&self, unit: &Unit, locale: &str) -> Result<String, TranslationError> {
        Ok(Self::find(&self.symbols, unit, locale)
            .cloned()
            .unwrap_or_else(|| unit.symbol().to_string()))
    }
}
