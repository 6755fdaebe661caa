//! Activity template catalog
//!
//! Per-destination, per-theme activity content lives here as data, not
//! branching logic: resolution goes destination layer -> generic theme
//! layer -> destination-agnostic default, so adding a destination or a
//! theme is a data change. Template texts carry named placeholder slots
//! (`{destination}`, `{cost_per_person}`, `{total_cost}`) that rendering
//! must supply in full.

use serde::{Deserialize, Serialize};

use crate::error::TripSmithError;

/// Labeled focus for an exploration day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    HistoricalExploration,
    NatureAndRelaxation,
    CulinaryAdventure,
    CulturalImmersion,
    AdventureActivities,
    ShoppingAndMarkets,
    // Default cycle used when the traveler picked no matching interests
    CityExploration,
    CulturalTour,
    NatureWalk,
}

impl Theme {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::HistoricalExploration => "Historical Exploration",
            Theme::NatureAndRelaxation => "Nature and Relaxation",
            Theme::CulinaryAdventure => "Culinary Adventure",
            Theme::CulturalImmersion => "Cultural Immersion",
            Theme::AdventureActivities => "Adventure Activities",
            Theme::ShoppingAndMarkets => "Shopping and Markets",
            Theme::CityExploration => "City Exploration",
            Theme::CulturalTour => "Cultural Tour",
            Theme::NatureWalk => "Nature Walk",
        }
    }
}

/// One period's activity text and per-person cost
#[derive(Debug, Clone, Copy)]
pub struct PeriodTemplate {
    pub text: &'static str,
    pub cost_per_person: u32,
}

/// Morning/afternoon/evening template for one theme
#[derive(Debug, Clone, Copy)]
pub struct ActivityTemplate {
    pub morning: PeriodTemplate,
    pub afternoon: PeriodTemplate,
    pub evening: PeriodTemplate,
}

/// Placeholder slots a template text may declare
const KNOWN_PLACEHOLDERS: [&str; 3] = ["{destination}", "{cost_per_person}", "{total_cost}"];

/// Render a template text, supplying every declared slot
pub fn render_template(
    text: &str,
    destination: &str,
    cost_per_person: u32,
    travelers: u32,
) -> Result<String, TripSmithError> {
    let rendered = text
        .replace("{destination}", destination)
        .replace("{cost_per_person}", &cost_per_person.to_string())
        .replace("{total_cost}", &(cost_per_person * travelers).to_string());

    // Any placeholder left over was never declared as a known slot
    if let (Some(start), Some(end)) = (rendered.find('{'), rendered.find('}')) {
        if start < end {
            return Err(TripSmithError::template(format!(
                "unsupplied placeholder {} in activity template",
                &rendered[start..=end]
            )));
        }
    }
    Ok(rendered)
}

/// Check that a template text declares only known placeholder slots
#[must_use]
pub fn placeholders_are_known(text: &str) -> bool {
    let mut rest = text;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            return false;
        };
        let slot = &rest[start..=start + len];
        if !KNOWN_PLACEHOLDERS.contains(&slot) {
            return false;
        }
        rest = &rest[start + len + 1..];
    }
    true
}

/// Lookup structure mapping destination and theme to activity templates
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityTemplateCatalog;

impl ActivityTemplateCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether the catalog carries destination-specific content
    #[must_use]
    pub fn knows_destination(&self, destination: &str) -> bool {
        destination.trim().eq_ignore_ascii_case("delhi")
    }

    /// Resolve a template, falling back along the generic layers
    #[must_use]
    pub fn resolve(&self, destination: &str, theme: Theme) -> &'static ActivityTemplate {
        if self.knows_destination(destination) {
            return delhi_template(theme).unwrap_or(&DELHI_DEFAULT);
        }
        generic_template(theme).unwrap_or(&GENERIC_DEFAULT)
    }
}

fn delhi_template(theme: Theme) -> Option<&'static ActivityTemplate> {
    match theme {
        Theme::HistoricalExploration => Some(&DELHI_HISTORICAL),
        Theme::NatureAndRelaxation => Some(&DELHI_NATURE),
        Theme::CulinaryAdventure => Some(&DELHI_CULINARY),
        Theme::CulturalImmersion => Some(&DELHI_CULTURAL),
        Theme::AdventureActivities => Some(&DELHI_ADVENTURE),
        Theme::ShoppingAndMarkets => Some(&DELHI_SHOPPING),
        _ => None,
    }
}

fn generic_template(theme: Theme) -> Option<&'static ActivityTemplate> {
    match theme {
        Theme::HistoricalExploration => Some(&GENERIC_HISTORICAL),
        Theme::NatureAndRelaxation => Some(&GENERIC_NATURE),
        _ => None,
    }
}

// --- Delhi layer ---

static DELHI_HISTORICAL: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Visit the magnificent Red Fort, a UNESCO World Heritage site with guided audio tour. (Rs. 200 per person)",
        cost_per_person: 200,
    },
    afternoon: PeriodTemplate {
        text: "Explore Jama Masjid and Chandni Chowk - try street kebabs, capture bustling lanes and traditional markets.",
        cost_per_person: 150,
    },
    evening: PeriodTemplate {
        text: "Sunset at Rooftop Cafe in Connaught Place with cocktails and live music. (Rs. 800 per person)",
        cost_per_person: 800,
    },
};

static DELHI_NATURE: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Visit the beautiful Akshardham Temple and enjoy the musical fountain show. (Rs. 150 per person)",
        cost_per_person: 150,
    },
    afternoon: PeriodTemplate {
        text: "Explore the serene Hauz Khas Village, known for its lakes, gardens, and shopping options.",
        cost_per_person: 0,
    },
    evening: PeriodTemplate {
        text: "Enjoy a relaxing sunset cruise on the Yamuna River. (Rs. 800 per person)",
        cost_per_person: 800,
    },
};

static DELHI_CULINARY: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Food walking tour of Old Delhi - taste parathas at Paranthe Wali Gali. (Rs. 300 per person)",
        cost_per_person: 300,
    },
    afternoon: PeriodTemplate {
        text: "Cooking class with local chef - learn to make traditional Delhi dishes. (Rs. 1200 per person)",
        cost_per_person: 1200,
    },
    evening: PeriodTemplate {
        text: "Dinner at famous Karim's restaurant - try their legendary mutton korma and kebabs. (Rs. 600 per person)",
        cost_per_person: 600,
    },
};

static DELHI_CULTURAL: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Visit Humayun's Tomb, a UNESCO site and architectural marvel. (Rs. 40 per person)",
        cost_per_person: 40,
    },
    afternoon: PeriodTemplate {
        text: "Explore National Museum and Gandhi Smriti - rich Indian history and culture. (Rs. 100 per person)",
        cost_per_person: 100,
    },
    evening: PeriodTemplate {
        text: "Cultural performance at India Habitat Centre or local cultural center. (Rs. 500 per person)",
        cost_per_person: 500,
    },
};

static DELHI_ADVENTURE: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Day-trip to Sanjay Van (Aravalli ridge) - guided trek and nature walk. Free entry, bring water and snacks.",
        cost_per_person: 0,
    },
    afternoon: PeriodTemplate {
        text: "Visit Garden of Five Senses for adventure activities and photography. (Rs. 30 per person)",
        cost_per_person: 30,
    },
    evening: PeriodTemplate {
        text: "Go-karting or paintball at local adventure parks. (Rs. 1000 per person)",
        cost_per_person: 1000,
    },
};

static DELHI_SHOPPING: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Explore Dilli Haat - handicrafts, textiles, and souvenirs from all over India. (Rs. 50 entry)",
        cost_per_person: 50,
    },
    afternoon: PeriodTemplate {
        text: "Shopping at Connaught Place and Khan Market - books, clothes, and local items.",
        cost_per_person: 0,
    },
    evening: PeriodTemplate {
        text: "Street shopping at Sarojini Nagar Market - bargaining and local fashion finds.",
        cost_per_person: 0,
    },
};

static DELHI_DEFAULT: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "City sightseeing tour covering major attractions and landmarks. (Rs. 300 per person)",
        cost_per_person: 300,
    },
    afternoon: PeriodTemplate {
        text: "Local market visit and cultural exploration with guide.",
        cost_per_person: 200,
    },
    evening: PeriodTemplate {
        text: "Traditional dinner and cultural show. (Rs. 700 per person)",
        cost_per_person: 700,
    },
};

// --- Generic layer ---

static GENERIC_HISTORICAL: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Visit historical monuments and heritage sites in {destination}. (Rs. {cost_per_person} per person)",
        cost_per_person: 200,
    },
    afternoon: PeriodTemplate {
        text: "Guided heritage walk and museum visits in old city areas.",
        cost_per_person: 150,
    },
    evening: PeriodTemplate {
        text: "Traditional dinner at heritage restaurant. (Rs. {cost_per_person} per person)",
        cost_per_person: 600,
    },
};

static GENERIC_NATURE: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "Nature walk in {destination} gardens and parks. (Rs. {cost_per_person} per person)",
        cost_per_person: 100,
    },
    afternoon: PeriodTemplate {
        text: "Relaxing time at botanical gardens or lakeside areas.",
        cost_per_person: 0,
    },
    evening: PeriodTemplate {
        text: "Sunset viewing at scenic location with refreshments. (Rs. {cost_per_person} per person)",
        cost_per_person: 400,
    },
};

static GENERIC_DEFAULT: ActivityTemplate = ActivityTemplate {
    morning: PeriodTemplate {
        text: "City exploration and major attractions tour. (Rs. {cost_per_person} per person)",
        cost_per_person: 300,
    },
    afternoon: PeriodTemplate {
        text: "Local culture and market exploration.",
        cost_per_person: 200,
    },
    evening: PeriodTemplate {
        text: "Traditional dinner and entertainment. (Rs. {cost_per_person} per person)",
        cost_per_person: 700,
    },
};
