use crate::Result;
use seascore_core::{Challenge, ChallengeCatalog, Passport};

/// Render the challenge catalogue as a JSON array for scripting
pub fn challenges_json(catalog: &ChallengeCatalog) -> Result<String> {
    let challenges: Vec<&Challenge> = catalog.iter().collect();
    Ok(serde_json::to_string_pretty(&challenges)?)
}

/// Render a passport as JSON for scripting
pub fn passport_json(passport: &Passport) -> Result<String> {
    Ok(serde_json::to_string_pretty(passport)?)
}
