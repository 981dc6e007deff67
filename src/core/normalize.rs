use crate::models::{
    BudgetFlexibility, ClientPreferences, LocationPreference, PackageType, TrainerProfile,
};

/// Client side of the normalized comparison tuple.
///
/// Sets are lowercased, trimmed, and deduplicated; absent scalar fields stay
/// `None` so each dimension scorer can apply the uniform neutral-score rule.
/// No field here is ever in a state that makes a scorer panic.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientAttributes {
    /// Primary goals first, then secondary, deduplicated.
    pub goals: Vec<String>,
    pub location: Option<LocationPreference>,
    pub open_to_virtual: bool,
    pub budget: Option<BudgetBand>,
    pub time_slots: Vec<String>,
    /// Coaching-style preferences merged with personality tags.
    pub style_tags: Vec<String>,
    pub package: Option<PackageType>,
}

/// Budget range with the tolerance multiplier implied by the client's
/// declared flexibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetBand {
    pub min: f64,
    pub max: f64,
    pub tolerance_multiplier: f64,
}

/// Trainer side of the normalized comparison tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerAttributes {
    pub id: String,
    pub specialties: Vec<String>,
    pub training_types: Vec<LocationPreference>,
    pub hourly_rate: Option<f64>,
    pub availability_slots: Vec<String>,
    pub style_tags: Vec<String>,
    pub packages: Vec<PackageType>,
    pub rating: f64,
}

/// Normalize a tag for comparison: trimmed, lowercased.
fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalize a tag list, dropping empties and duplicates while preserving order.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let norm = normalize_tag(tag);
        if !norm.is_empty() && !out.contains(&norm) {
            out.push(norm);
        }
    }
    out
}

fn flexibility_multiplier(flexibility: Option<BudgetFlexibility>) -> f64 {
    match flexibility {
        Some(BudgetFlexibility::Flexible) => 2.0,
        Some(BudgetFlexibility::SomewhatFlexible) => 1.5,
        Some(BudgetFlexibility::Strict) | None => 1.0,
    }
}

/// Extract the comparable client attributes from a possibly-incomplete survey
/// record. Pure and total: any input shape produces a usable tuple.
pub fn normalize_client(prefs: &ClientPreferences) -> ClientAttributes {
    let mut goals = prefs.primary_goals.clone();
    goals.extend(prefs.secondary_goals.iter().cloned());
    let goals = normalize_tags(&goals);

    let budget = match (prefs.budget_range_min, prefs.budget_range_max) {
        (Some(min), Some(max)) if max > 0.0 && min <= max => Some(BudgetBand {
            min,
            max,
            tolerance_multiplier: flexibility_multiplier(prefs.budget_flexibility),
        }),
        // A lone bound is treated as a degenerate range at that bound.
        (Some(value), None) | (None, Some(value)) if value > 0.0 => Some(BudgetBand {
            min: value,
            max: value,
            tolerance_multiplier: flexibility_multiplier(prefs.budget_flexibility),
        }),
        _ => None,
    };

    let mut style_tags = prefs.preferred_coaching_style.clone();
    style_tags.extend(prefs.client_personality_type.iter().cloned());

    ClientAttributes {
        goals,
        location: prefs.training_location_preference,
        open_to_virtual: prefs.open_to_virtual_coaching.unwrap_or(false),
        budget,
        time_slots: normalize_tags(&prefs.preferred_time_slots),
        style_tags: normalize_tags(&style_tags),
        package: prefs.preferred_package_type,
    }
}

/// Extract the comparable trainer attributes from a profile record.
pub fn normalize_trainer(trainer: &TrainerProfile) -> TrainerAttributes {
    let hourly_rate = trainer.hourly_rate.filter(|rate| rate.is_finite() && *rate > 0.0);

    TrainerAttributes {
        id: trainer.id.clone(),
        specialties: normalize_tags(&trainer.specialties),
        training_types: trainer.training_types.clone(),
        hourly_rate,
        availability_slots: normalize_tags(&trainer.availability_slots),
        style_tags: normalize_tags(&trainer.coaching_styles),
        packages: trainer.package_types.clone(),
        rating: trainer.rating_or_zero(),
    }
}
