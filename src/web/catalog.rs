use crate::analytics::general::BURNOUT_BADGE;
use crate::domain::models::TrackerDomain;
use crate::domain::options::{
    EnergyLevel, IronFoodFrequency, Mood, Severity, SleepQuality, SupplementUsage,
};
use crate::domain::symptoms::{AnemiaSymptom, PcosCategory, PcosSymptom, SymptomDefinition};
use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;

/// One selectable value of a tracker form field.
#[derive(Debug, Serialize)]
pub struct OptionChoice {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
}

impl OptionChoice {
    fn plain(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            color: None,
            emoji: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: PcosCategory,
    pub label: &'static str,
    pub emoji: &'static str,
    pub symptoms: Vec<SymptomDefinition>,
}

/// Everything a client needs to render one tracker's log form.
#[derive(Debug, Serialize)]
pub struct TrackerCatalog {
    pub domain: TrackerDomain,
    pub symptoms: Vec<SymptomDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub severities: Vec<OptionChoice>,
    pub options: BTreeMap<&'static str, Vec<OptionChoice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burnout_badge: Option<&'static str>,
}

pub fn router() -> Router {
    Router::new().route("/catalog/:domain", get(catalog))
}

async fn catalog(Path(domain): Path<String>) -> Result<Json<TrackerCatalog>, StatusCode> {
    let domain = TrackerDomain::try_from(domain.as_str()).map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Json(build_catalog(domain)))
}

fn severity_choices() -> Vec<OptionChoice> {
    Severity::ALL
        .iter()
        .map(|s| OptionChoice {
            color: Some(s.color()),
            ..OptionChoice::plain(s.as_str(), s.label())
        })
        .collect()
}

pub fn build_catalog(domain: TrackerDomain) -> TrackerCatalog {
    let mut options = BTreeMap::new();
    match domain {
        TrackerDomain::Anemia => {
            options.insert(
                "iron_food_frequency",
                IronFoodFrequency::ALL
                    .iter()
                    .map(|f| OptionChoice::plain(f.as_str(), f.label()))
                    .collect(),
            );
            options.insert(
                "supplement_usage",
                SupplementUsage::ALL
                    .iter()
                    .map(|u| OptionChoice::plain(u.as_str(), u.label()))
                    .collect(),
            );
            TrackerCatalog {
                domain,
                symptoms: AnemiaSymptom::ALL.iter().map(|s| s.definition()).collect(),
                categories: Vec::new(),
                severities: severity_choices(),
                options,
                burnout_badge: None,
            }
        }
        TrackerDomain::Pcos => TrackerCatalog {
            domain,
            symptoms: PcosSymptom::ALL.iter().map(|s| s.definition()).collect(),
            categories: PcosCategory::ALL
                .iter()
                .map(|&category| CategoryGroup {
                    category,
                    label: category.label(),
                    emoji: category.emoji(),
                    symptoms: PcosSymptom::by_category(category)
                        .iter()
                        .map(|s| s.definition())
                        .collect(),
                })
                .collect(),
            severities: severity_choices(),
            options,
            burnout_badge: None,
        },
        TrackerDomain::General => {
            options.insert(
                "mood",
                Mood::ALL
                    .iter()
                    .map(|m| OptionChoice {
                        emoji: Some(m.emoji()),
                        ..OptionChoice::plain(m.as_str(), m.label())
                    })
                    .collect(),
            );
            options.insert(
                "energy",
                EnergyLevel::ALL
                    .iter()
                    .map(|e| OptionChoice {
                        color: Some(e.color()),
                        ..OptionChoice::plain(e.as_str(), e.label())
                    })
                    .collect(),
            );
            options.insert(
                "sleep_quality",
                SleepQuality::ALL
                    .iter()
                    .map(|q| OptionChoice::plain(q.as_str(), q.label()))
                    .collect(),
            );
            TrackerCatalog {
                domain,
                symptoms: Vec::new(),
                categories: Vec::new(),
                severities: Vec::new(),
                options,
                burnout_badge: Some(BURNOUT_BADGE),
            }
        }
    }
}
