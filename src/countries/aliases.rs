// src/countries/aliases.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Common spellings that differ from the registry's canonical names.
/// Keys are lower case; they are checked before the registry.
pub static ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("united states", "us"),
        ("united states of america", "us"),
        ("russia", "ru"),
        ("russian federation", "ru"),
        ("south korea", "kr"),
        ("north korea", "kp"),
        ("iran", "ir"),
        ("czech republic", "cz"),
        ("viet nam", "vn"),
        ("laos", "la"),
        ("bolivia", "bo"),
        ("brunei", "bn"),
        ("syria", "sy"),
        ("eswatini", "sz"),
        ("ivory coast", "ci"),
        ("côte d’ivoire", "ci"),
        ("cote d'ivoire", "ci"),
        ("myanmar (burma)", "mm"),
        ("cape verde", "cv"),
        ("north macedonia", "mk"),
        ("palestine", "ps"),
        ("moldova", "md"),
        ("timor-leste", "tl"),
        ("east timor", "tl"),
        ("uk", "gb"),
        ("united kingdom", "gb"),
        ("tanzania", "tz"),
        ("são tomé and príncipe", "st"),
        ("sao tome and principe", "st"),
        ("hong kong", "hk"),
        ("macau", "mo"),
        ("cabo verde", "cv"),
        ("democratic republic of congo", "cd"),
        ("congo (kinshasa)", "cd"),
        ("congo (brazzaville)", "cg"),
    ])
});
