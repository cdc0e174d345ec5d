//! URL → fixed-length numeric feature vector.
//!
//! [`extract`] is total: every string, including empty or binary garbage,
//! produces exactly [`FEATURE_COUNT`] values in [`Feature::ALL`] order.
//! Counts and lengths read the raw string; keyword flags read the whole URL
//! lowercased; domain and path come from [`crate::url_model::parse_url`].

mod layout;
pub mod predicates;

pub use layout::{Feature, FEATURE_COUNT};

use crate::url_model::{parse_url, ParsedUrl};
use serde::Serialize;

/// Ordered feature values. Indicators are always 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([u64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn get(&self, feature: Feature) -> u64 {
        self.0[feature.index()]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Classifier input.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.0.iter().map(|&v| v as f64).collect()
    }

    /// `(feature, value)` pairs in vector order.
    pub fn iter_named(&self) -> impl Iterator<Item = (Feature, u64)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Views of one URL shared by all feature measurements.
struct ExtractionInput<'a> {
    raw: &'a str,
    lowered: String,
    parsed: ParsedUrl,
}

impl<'a> ExtractionInput<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
            parsed: parse_url(raw),
        }
    }

    fn measure(&self, feature: Feature) -> u64 {
        use self::predicates::*;

        if let Some(c) = feature.counted_char() {
            return count_char(self.raw, c);
        }
        if let Some(keyword) = feature.keyword() {
            return contains_keyword(&self.lowered, keyword).into();
        }
        let domain = self.parsed.domain.as_str();
        match feature {
            Feature::UrlLength => char_length(self.raw),
            Feature::DomainLength => char_length(domain),
            Feature::PathLength => char_length(&self.parsed.path),
            Feature::DeepSubdomains => has_deep_subdomains(domain).into(),
            Feature::DigitInDomain => has_digit(domain).into(),
            Feature::StartsWithIpv4 => starts_with_ipv4(self.raw).into(),
            Feature::DoubleSlashAfterScheme => has_double_slash_after_scheme(self.raw).into(),
            Feature::HasSpecialCharacter => has_special_character(self.raw).into(),
            Feature::HttpOnly => is_http_only(&self.lowered).into(),
            Feature::DomainEndsZip => ends_with_literal(domain, ".zip").into(),
            Feature::DomainEndsExe => ends_with_literal(domain, ".exe").into(),
            // Counted characters and keywords are handled above.
            _ => 0,
        }
    }
}

/// Converts `url` into its feature vector. Never fails.
pub fn extract(url: &str) -> FeatureVector {
    let input = ExtractionInput::new(url);
    let mut values = [0u64; FEATURE_COUNT];
    for feature in Feature::ALL {
        values[feature.index()] = input.measure(feature);
    }
    FeatureVector(values)
}
