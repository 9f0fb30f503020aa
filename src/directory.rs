use once_cell::sync::Lazy;

/// Fixed company directory for the collaboration chooser
///
/// Sectors and the companies under them are a static dictionary: there is
/// no configuration surface for them, and selections are validated against
/// this table before a session can proceed.
/// Sector name paired with the companies available in it
type SectorEntry = (&'static str, &'static [&'static str]);

static DIRECTORY: Lazy<Vec<SectorEntry>> = Lazy::new(|| {
    vec![
        ("Games", &["Nintendo", "Riot Games", "Netease"][..]),
        ("Cars", &["Mercedes", "Lamborghini", "Rolls Royce"][..]),
        ("Technology", &["Logitech", "Pulsar", "Razer"][..]),
        ("Watches", &["Rolex", "Omega", "Grand Seiko"][..]),
    ]
});

/// List the available sectors, in display order
pub fn sectors() -> Vec<&'static str> {
    DIRECTORY.iter().map(|(sector, _)| *sector).collect()
}

/// List the companies available in a sector
///
/// Returns `None` for a sector not present in the directory. Sector names
/// match exactly; the UI only ever offers names from [`sectors`].
pub fn companies_in(sector: &str) -> Option<&'static [&'static str]> {
    DIRECTORY
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, companies)| *companies)
}

/// Check whether a sector/company pair belongs to the directory
pub fn contains(sector: &str, company: &str) -> bool {
    companies_in(sector)
        .is_some_and(|companies| companies.contains(&company))
}
