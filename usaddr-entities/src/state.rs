//! Static lookup data for US states and territories.
//!
//! Keys are the two-letter USPS abbreviations in upper case.
//! Lookups are case-sensitive: `"il"` is not a known key.

/// Two-digit FIPS code of a state or territory.
pub fn fips_code(abbr: &str) -> Option<&'static str> {
    let code = match abbr {
        "AL" => "01",
        "AK" => "02",
        "AZ" => "04",
        "AR" => "05",
        "CA" => "06",
        "CO" => "08",
        "CT" => "09",
        "DE" => "10",
        "DC" => "11",
        "FL" => "12",
        "GA" => "13",
        "HI" => "15",
        "ID" => "16",
        "IL" => "17",
        "IN" => "18",
        "IA" => "19",
        "KS" => "20",
        "KY" => "21",
        "LA" => "22",
        "ME" => "23",
        "MD" => "24",
        "MA" => "25",
        "MI" => "26",
        "MN" => "27",
        "MS" => "28",
        "MO" => "29",
        "MT" => "30",
        "NE" => "31",
        "NV" => "32",
        "NH" => "33",
        "NJ" => "34",
        "NM" => "35",
        "NY" => "36",
        "NC" => "37",
        "ND" => "38",
        "OH" => "39",
        "OK" => "40",
        "OR" => "41",
        "PA" => "42",
        "RI" => "44",
        "SC" => "45",
        "SD" => "46",
        "TN" => "47",
        "TX" => "48",
        "UT" => "49",
        "VT" => "50",
        "VA" => "51",
        "WA" => "53",
        "WV" => "54",
        "WI" => "55",
        "WY" => "56",
        "AS" => "60",
        "GU" => "66",
        "MP" => "69",
        "PR" => "72",
        "VI" => "78",
        _ => return None,
    };
    Some(code)
}

/// Full name in lower case, as stored.
///
/// Use [`capitalize_first`] for display.
pub fn name(abbr: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(a, _)| *a == abbr)
        .map(|(_, name)| *name)
}

/// All abbreviations with a known name.
pub fn abbreviations() -> impl Iterator<Item = &'static str> {
    ABBREVIATIONS.iter().map(|(abbr, _)| *abbr)
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[rustfmt::skip]
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("AL", "alabama"),
    ("AK", "alaska"),
    ("AS", "american samoa"),
    ("AZ", "arizona"),
    ("AR", "arkansas"),
    ("CA", "california"),
    ("CO", "colorado"),
    ("CT", "connecticut"),
    ("DE", "delaware"),
    ("DC", "district of columbia"),
    ("FM", "federated states of micronesia"),
    ("FL", "florida"),
    ("GA", "georgia"),
    ("GU", "guam"),
    ("HI", "hawaii"),
    ("ID", "idaho"),
    ("IL", "illinois"),
    ("IN", "indiana"),
    ("IA", "iowa"),
    ("KS", "kansas"),
    ("KY", "kentucky"),
    ("LA", "louisiana"),
    ("ME", "maine"),
    ("MH", "marshall islands"),
    ("MD", "maryland"),
    ("MA", "massachusetts"),
    ("MI", "michigan"),
    ("MN", "minnesota"),
    ("MS", "mississippi"),
    ("MO", "missouri"),
    ("MT", "montana"),
    ("NE", "nebraska"),
    ("NV", "nevada"),
    ("NH", "new hampshire"),
    ("NJ", "new jersey"),
    ("NM", "new mexico"),
    ("NY", "new york"),
    ("NC", "north carolina"),
    ("ND", "north dakota"),
    ("MP", "northern mariana islands"),
    ("OH", "ohio"),
    ("OK", "oklahoma"),
    ("OR", "oregon"),
    ("PW", "palau"),
    ("PA", "pennsylvania"),
    ("PR", "puerto rico"),
    ("RI", "rhode island"),
    ("SC", "south carolina"),
    ("SD", "south dakota"),
    ("TN", "tennessee"),
    ("TX", "texas"),
    ("UT", "utah"),
    ("VT", "vermont"),
    ("VI", "virgin islands"),
    ("VA", "virginia"),
    ("WA", "washington"),
    ("WV", "west virginia"),
    ("WI", "wisconsin"),
    ("WY", "wyoming"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(fips_code("IL"), Some("17"));
        assert_eq!(fips_code("il"), None);
        assert_eq!(name("IL"), Some("illinois"));
        assert_eq!(name("il"), None);
    }

    #[test]
    fn territories() {
        assert_eq!(fips_code("PR"), Some("72"));
        assert_eq!(name("PR"), Some("puerto rico"));
        // Freely associated states have a USPS code but no FIPS state code
        assert_eq!(name("PW"), Some("palau"));
        assert_eq!(fips_code("PW"), None);
    }

    #[test]
    fn every_fips_code_has_a_name() {
        let with_fips: Vec<_> = abbreviations().filter(|a| fips_code(a).is_some()).collect();
        assert_eq!(with_fips.len(), 56);
        assert!(with_fips.iter().all(|a| fips_code(a).unwrap().len() == 2));
    }

    #[test]
    fn capitalize_only_first_char() {
        assert_eq!(capitalize_first("new york"), "New york");
        assert_eq!(capitalize_first("iOWA"), "IOWA");
        assert_eq!(capitalize_first(""), "");
    }
}
