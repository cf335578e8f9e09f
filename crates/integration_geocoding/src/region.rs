//! Region biasing: locale country to ccTLD conversion

use domain::Locale;

/// Country codes whose top-level domain differs from the ISO 3166-1 code
const TLD_EXCEPTIONS: &[(&str, &str)] = &[("gb", "uk")];

/// Convert a locale's country into the ccTLD the provider expects for `region`
///
/// Returns `None` when there is no locale or it carries no country.
#[must_use]
pub fn top_level_country_code(locale: Option<&Locale>) -> Option<String> {
    let country = locale?.country()?.trim().to_lowercase();
    if country.is_empty() {
        return None;
    }

    let tld = TLD_EXCEPTIONS
        .iter()
        .find(|(iso, _)| *iso == country)
        .map_or(country, |(_, tld)| (*tld).to_string());
    Some(tld)
}
