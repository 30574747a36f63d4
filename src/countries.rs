use serde::Serialize;
use std::borrow::Cow;

/// A country the availability provider has listings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

const fn country(code: &'static str, name: &'static str, flag: &'static str) -> Country {
    Country { code, name, flag }
}

/// Supported countries, ordered by name
pub static COUNTRIES: &[Country] = &[
    country("ar", "Argentina", "🇦🇷"),
    country("au", "Australia", "🇦🇺"),
    country("at", "Austria", "🇦🇹"),
    country("az", "Azerbaijan", "🇦🇿"),
    country("be", "Belgium", "🇧🇪"),
    country("br", "Brazil", "🇧🇷"),
    country("bg", "Bulgaria", "🇧🇬"),
    country("ca", "Canada", "🇨🇦"),
    country("cl", "Chile", "🇨🇱"),
    country("co", "Colombia", "🇨🇴"),
    country("hr", "Croatia", "🇭🇷"),
    country("cy", "Cyprus", "🇨🇾"),
    country("cz", "Czech Republic", "🇨🇿"),
    country("dk", "Denmark", "🇩🇰"),
    country("ec", "Ecuador", "🇪🇨"),
    country("ee", "Estonia", "🇪🇪"),
    country("fi", "Finland", "🇫🇮"),
    country("fr", "France", "🇫🇷"),
    country("de", "Germany", "🇩🇪"),
    country("gr", "Greece", "🇬🇷"),
    country("hk", "Hong Kong", "🇭🇰"),
    country("hu", "Hungary", "🇭🇺"),
    country("is", "Iceland", "🇮🇸"),
    country("in", "India", "🇮🇳"),
    country("id", "Indonesia", "🇮🇩"),
    country("ie", "Ireland", "🇮🇪"),
    country("il", "Israel", "🇮🇱"),
    country("it", "Italy", "🇮🇹"),
    country("jp", "Japan", "🇯🇵"),
    country("lt", "Lithuania", "🇱🇹"),
    country("my", "Malaysia", "🇲🇾"),
    country("mx", "Mexico", "🇲🇽"),
    country("md", "Moldova", "🇲🇩"),
    country("nl", "Netherlands", "🇳🇱"),
    country("nz", "New Zealand", "🇳🇿"),
    country("mk", "North Macedonia", "🇲🇰"),
    country("no", "Norway", "🇳🇴"),
    country("pa", "Panama", "🇵🇦"),
    country("pe", "Peru", "🇵🇪"),
    country("ph", "Philippines", "🇵🇭"),
    country("pl", "Poland", "🇵🇱"),
    country("pt", "Portugal", "🇵🇹"),
    country("ro", "Romania", "🇷🇴"),
    country("rs", "Serbia", "🇷🇸"),
    country("sg", "Singapore", "🇸🇬"),
    country("si", "Slovenia", "🇸🇮"),
    country("za", "South Africa", "🇿🇦"),
    country("kr", "South Korea", "🇰🇷"),
    country("es", "Spain", "🇪🇸"),
    country("se", "Sweden", "🇸🇪"),
    country("ch", "Switzerland", "🇨🇭"),
    country("th", "Thailand", "🇹🇭"),
    country("tr", "Turkey", "🇹🇷"),
    country("ua", "Ukraine", "🇺🇦"),
    country("ae", "United Arab Emirates", "🇦🇪"),
    country("gb", "United Kingdom", "🇬🇧"),
    country("us", "United States", "🇺🇸"),
];

/// Display form of a country code, whether or not the registry knows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDisplay {
    pub code: String,
    pub name: Cow<'static, str>,
    pub flag: &'static str,
}

pub fn all() -> &'static [Country] {
    COUNTRIES
}

pub fn lookup(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Registry entry for `code`, falling back to the raw code with no flag
pub fn display(code: &str) -> CountryDisplay {
    match lookup(code) {
        Some(country) => CountryDisplay {
            code: country.code.to_string(),
            name: Cow::Borrowed(country.name),
            flag: country.flag,
        },
        None => CountryDisplay {
            code: code.to_string(),
            name: Cow::Owned(code.to_string()),
            flag: "",
        },
    }
}

/// Countries whose name contains `search`, case-insensitively
pub fn filter(search: &str) -> Vec<&'static Country> {
    let needle = search.trim().to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .collect()
}

/// Normalizes a requested country code, using `default` when none was given
pub fn resolve(requested: Option<&str>, default: &str) -> String {
    requested
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(default)
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let us = lookup("us").unwrap();
        assert_eq!(us.name, "United States");
        assert_eq!(us.flag, "🇺🇸");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("JP").map(|c| c.name), Some("Japan"));
    }

    #[test]
    fn test_display_falls_back_to_raw_code() {
        let unknown = display("zz");
        assert_eq!(unknown.code, "zz");
        assert_eq!(unknown.name, "zz");
        assert_eq!(unknown.flag, "");
    }

    #[test]
    fn test_filter_by_name() {
        let names: Vec<&str> = filter("united").iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["United Arab Emirates", "United Kingdom", "United States"]
        );
    }

    #[test]
    fn test_filter_empty_returns_all() {
        assert_eq!(filter("  ").len(), COUNTRIES.len());
    }

    #[test]
    fn test_codes_are_unique_lowercase() {
        let mut codes: Vec<&str> = COUNTRIES.iter().map(|c| c.code).collect();
        assert!(codes.iter().all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_lowercase())));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), COUNTRIES.len());
    }

    #[test]
    fn test_resolve_uses_default() {
        assert_eq!(resolve(None, "us"), "us");
        assert_eq!(resolve(Some(" "), "us"), "us");
        assert_eq!(resolve(Some("GB"), "us"), "gb");
    }
}
