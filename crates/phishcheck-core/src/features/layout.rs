//! Vector layout: which feature lives at which position.
//!
//! `Feature::ALL` is the only place the order is written down. A classifier
//! trained on these vectors depends on it, so variants must never be
//! reordered, inserted or removed.

/// Number of features in a [`super::FeatureVector`].
pub const FEATURE_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    UrlLength,
    DotCount,
    SlashCount,
    HyphenCount,
    AtSignCount,
    EqualsCount,
    QuestionMarkCount,
    AmpersandCount,
    PercentCount,
    UsesHttps,
    DomainLength,
    PathLength,
    DeepSubdomains,
    DigitInDomain,
    ContainsIp,
    ContainsLogin,
    ContainsSecure,
    ContainsAccount,
    StartsWithIpv4,
    DoubleSlashAfterScheme,
    HasSpecialCharacter,
    ContainsBank,
    ContainsConfirm,
    ContainsUpdate,
    ContainsEbay,
    ContainsPaypal,
    HttpOnly,
    DomainEndsZip,
    DomainEndsExe,
    ContainsFree,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::UrlLength,
        Feature::DotCount,
        Feature::SlashCount,
        Feature::HyphenCount,
        Feature::AtSignCount,
        Feature::EqualsCount,
        Feature::QuestionMarkCount,
        Feature::AmpersandCount,
        Feature::PercentCount,
        Feature::UsesHttps,
        Feature::DomainLength,
        Feature::PathLength,
        Feature::DeepSubdomains,
        Feature::DigitInDomain,
        Feature::ContainsIp,
        Feature::ContainsLogin,
        Feature::ContainsSecure,
        Feature::ContainsAccount,
        Feature::StartsWithIpv4,
        Feature::DoubleSlashAfterScheme,
        Feature::HasSpecialCharacter,
        Feature::ContainsBank,
        Feature::ContainsConfirm,
        Feature::ContainsUpdate,
        Feature::ContainsEbay,
        Feature::ContainsPaypal,
        Feature::HttpOnly,
        Feature::DomainEndsZip,
        Feature::DomainEndsExe,
        Feature::ContainsFree,
    ];

    /// Zero-based position in the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name, used in CLI and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Feature::UrlLength => "url_length",
            Feature::DotCount => "dot_count",
            Feature::SlashCount => "slash_count",
            Feature::HyphenCount => "hyphen_count",
            Feature::AtSignCount => "at_sign_count",
            Feature::EqualsCount => "equals_count",
            Feature::QuestionMarkCount => "question_mark_count",
            Feature::AmpersandCount => "ampersand_count",
            Feature::PercentCount => "percent_count",
            Feature::UsesHttps => "uses_https",
            Feature::DomainLength => "domain_length",
            Feature::PathLength => "path_length",
            Feature::DeepSubdomains => "deep_subdomains",
            Feature::DigitInDomain => "digit_in_domain",
            Feature::ContainsIp => "contains_ip",
            Feature::ContainsLogin => "contains_login",
            Feature::ContainsSecure => "contains_secure",
            Feature::ContainsAccount => "contains_account",
            Feature::StartsWithIpv4 => "starts_with_ipv4",
            Feature::DoubleSlashAfterScheme => "double_slash_after_scheme",
            Feature::HasSpecialCharacter => "has_special_character",
            Feature::ContainsBank => "contains_bank",
            Feature::ContainsConfirm => "contains_confirm",
            Feature::ContainsUpdate => "contains_update",
            Feature::ContainsEbay => "contains_ebay",
            Feature::ContainsPaypal => "contains_paypal",
            Feature::HttpOnly => "http_only",
            Feature::DomainEndsZip => "domain_ends_zip",
            Feature::DomainEndsExe => "domain_ends_exe",
            Feature::ContainsFree => "contains_free",
        }
    }

    /// True for 0/1 flags, false for counts and lengths.
    pub fn is_indicator(self) -> bool {
        !matches!(
            self,
            Feature::UrlLength
                | Feature::DotCount
                | Feature::SlashCount
                | Feature::HyphenCount
                | Feature::AtSignCount
                | Feature::EqualsCount
                | Feature::QuestionMarkCount
                | Feature::AmpersandCount
                | Feature::PercentCount
                | Feature::DomainLength
                | Feature::PathLength
        )
    }

    /// Lowercase keyword for the substring indicators.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Feature::UsesHttps => Some("https"),
            Feature::ContainsIp => Some("ip"),
            Feature::ContainsLogin => Some("login"),
            Feature::ContainsSecure => Some("secure"),
            Feature::ContainsAccount => Some("account"),
            Feature::ContainsBank => Some("bank"),
            Feature::ContainsConfirm => Some("confirm"),
            Feature::ContainsUpdate => Some("update"),
            Feature::ContainsEbay => Some("ebay"),
            Feature::ContainsPaypal => Some("paypal"),
            Feature::ContainsFree => Some("free"),
            _ => None,
        }
    }

    /// Raw-string character counted by the count features.
    pub fn counted_char(self) -> Option<char> {
        match self {
            Feature::DotCount => Some('.'),
            Feature::SlashCount => Some('/'),
            Feature::HyphenCount => Some('-'),
            Feature::AtSignCount => Some('@'),
            Feature::EqualsCount => Some('='),
            Feature::QuestionMarkCount => Some('?'),
            Feature::AmpersandCount => Some('&'),
            Feature::PercentCount => Some('%'),
            _ => None,
        }
    }
}
