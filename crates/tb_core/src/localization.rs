//! Display text localization
//!
//! Fluent (FTL) bundles for default team names, the analysis line and
//! position labels. es-AR is both the default and the fallback.

use crate::config::{BalanceMode, DEFAULT_LOCALE};
use crate::error::BalanceError;
use crate::models::Position;
use fluent::{FluentBundle, FluentResource};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Locales shipped with the crate.
pub const SUPPORTED_LOCALES: &[&str] = &["es-AR", "en-US"];

const ES_AR_FTL: &str = r#"
team-a-name = Equipo Pan
team-b-name = Equipo Queso
analysis-optimized = Equipos optimizados para paridad de estrellas.
analysis-alternating = Equipos armados de forma alternada.
position-gk = ARQ
position-def = DEF
position-mid = MED
position-fwd = DEL
"#;

const EN_US_FTL: &str = r#"
team-a-name = Team Bread
team-b-name = Team Cheese
analysis-optimized = Teams optimized for star parity.
analysis-alternating = Teams picked alternately.
position-gk = GK
position-def = DEF
position-mid = MID
position-fwd = FWD
"#;

/// Names and analysis line stamped on a `MatchResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLabels {
    pub team_a_name: String,
    pub team_b_name: String,
    pub analysis: String,
}

pub struct BalancerLocalizer {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    current_locale: String,
    fallback_locale: String,
}

impl Default for BalancerLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BalancerLocalizer {
    /// Localizer with the built-in locales loaded and es-AR selected.
    pub fn new() -> Self {
        let mut localizer = Self {
            bundles: HashMap::new(),
            current_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        };
        localizer.insert_builtin("es-AR", ES_AR_FTL);
        localizer.insert_builtin("en-US", EN_US_FTL);
        localizer
    }

    fn insert_builtin(&mut self, locale: &str, ftl: &str) {
        // Built-in sources are fixed; a parse problem would only drop entries,
        // which then render as `[key]`.
        let resource = match FluentResource::try_new(ftl.to_string()) {
            Ok(resource) => resource,
            Err((resource, _)) => resource,
        };
        let lang_id: LanguageIdentifier = locale.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![lang_id]);
        bundle.set_use_isolating(false);
        bundle.add_resource_overriding(resource);
        self.bundles.insert(locale.to_string(), bundle);
    }

    /// Add or replace a locale from FTL source.
    pub fn load_locale(&mut self, locale: &str, ftl_content: &str) -> Result<(), BalanceError> {
        let resource = FluentResource::try_new(ftl_content.to_string())
            .map_err(|_| BalanceError::Localization("Failed to parse FTL content".into()))?;

        let lang_id: LanguageIdentifier = locale
            .parse()
            .map_err(|_| BalanceError::Localization(format!("Invalid locale: {}", locale)))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|_| {
            BalanceError::Localization("Failed to add resource to bundle".into())
        })?;

        self.bundles.insert(locale.to_string(), bundle);
        Ok(())
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: &str) -> Result<(), BalanceError> {
        if !self.bundles.contains_key(locale) {
            return Err(BalanceError::Localization(format!("Locale {} not loaded", locale)));
        }
        self.current_locale = locale.to_string();
        Ok(())
    }

    /// Best loaded match for the requested tags, falling back to es-AR.
    pub fn negotiate_locale(&self, requested: &[&str]) -> String {
        let available: Vec<LanguageIdentifier> =
            self.bundles.keys().filter_map(|k| k.parse().ok()).collect();

        let requested: Vec<LanguageIdentifier> =
            requested.iter().filter_map(|l| l.parse().ok()).collect();

        let Ok(default) = self.fallback_locale.parse::<LanguageIdentifier>() else {
            return self.fallback_locale.clone();
        };

        let negotiated = negotiate_languages(
            &requested,
            &available,
            Some(&default),
            NegotiationStrategy::Filtering,
        );

        negotiated.first().map(|l| l.to_string()).unwrap_or_else(|| self.fallback_locale.clone())
    }

    /// Negotiate and switch in one step.
    pub fn select_locale(&mut self, requested: &str) -> String {
        let locale = self.negotiate_locale(&[requested]);
        if self.set_locale(&locale).is_err() {
            self.current_locale = self.fallback_locale.clone();
        }
        self.current_locale.clone()
    }

    /// Message text, trying the fallback locale before giving up with `[key]`.
    pub fn format(&self, key: &str) -> String {
        for locale in [&self.current_locale, &self.fallback_locale] {
            if let Some(text) = self.format_in(locale, key) {
                return text;
            }
        }
        format!("[{}]", key)
    }

    fn format_in(&self, locale: &str, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        Some(bundle.format_pattern(pattern, None, &mut errors).into_owned())
    }

    pub fn position_label(&self, position: Position) -> String {
        self.format(position.label_key())
    }

    pub fn result_labels(&self, mode: BalanceMode) -> ResultLabels {
        let analysis_key = match mode {
            BalanceMode::Optimized => "analysis-optimized",
            BalanceMode::Alternating => "analysis-alternating",
        };
        ResultLabels {
            team_a_name: self.format("team-a-name"),
            team_b_name: self.format("team-b-name"),
            analysis: self.format(analysis_key),
        }
    }
}
