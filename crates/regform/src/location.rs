//! Country and city choices for the address selects.

/// Countries offered by the form, each with its ordered city list.
static CITIES_BY_COUNTRY: &[(&str, &[&str])] = &[
    ("India", &["Delhi", "Mumbai", "Bangalore"]),
    ("USA", &["New York", "Los Angeles", "Chicago"]),
];

/// Countries in select order
pub fn countries() -> impl Iterator<Item = &'static str> {
    CITIES_BY_COUNTRY.iter().map(|(country, _)| *country)
}

/// Cities valid for `country`; empty for an unset or unrecognised country.
pub fn cities_for(country: &str) -> &'static [&'static str] {
    CITIES_BY_COUNTRY
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}
