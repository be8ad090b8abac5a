//! Aggregation of detailed codes to field groups and survey categories

use log::debug;

use super::codes::{Category6, DetailedCode, FieldGroup};

/// Detailed code used by the retail and services block. It has no field
/// group of its own and maps straight to category 2.
pub const RETAIL_SERVICES_CODE: u16 = 200;

/// Map a detailed code to its broad field group
///
/// Sentinels have no field group, and neither does the retail/services
/// stand-in code 0200.
#[must_use]
pub fn to_field_group(code: DetailedCode) -> Option<FieldGroup> {
    match code {
        DetailedCode::Isced(isced) if isced.value() == RETAIL_SERVICES_CODE => None,
        DetailedCode::Isced(isced) => isced.entry().map(|entry| entry.group),
        _ => None,
    }
}

/// Map a field group to its survey category
#[must_use]
pub const fn group_category(group: FieldGroup) -> Category6 {
    match group {
        FieldGroup::Education | FieldGroup::HealthWelfare => Category6::EducationHealthSocial,
        FieldGroup::Services => Category6::ServicesRetail,
        FieldGroup::BusinessLaw => Category6::BusinessAdministrationLaw,
        FieldGroup::NaturalSciences | FieldGroup::Ict | FieldGroup::Engineering => {
            Category6::ScienceTechnology
        }
        FieldGroup::ArtsHumanities | FieldGroup::SocialSciences => Category6::SocialSciencesArts,
        FieldGroup::Agriculture => Category6::Agriculture,
    }
}

/// Map a sentinel code to its survey category
///
/// In-training answers have no counterpart in the closed question and are
/// counted as "don't know".
#[must_use]
pub const fn sentinel_category(code: DetailedCode) -> Option<Category6> {
    match code {
        DetailedCode::Homemaker => Some(Category6::Homemaker),
        DetailedCode::Unemployed => Some(Category6::Unemployed),
        DetailedCode::DontKnow | DetailedCode::InTraining => Some(Category6::DontKnow),
        DetailedCode::Isced(_) => None,
    }
}

/// Map a field group (and the code it came from) to a survey category
///
/// Sentinels pass through without consulting the group; 0200 maps directly
/// to category 2. Returns `None` only for an ISCED code without a group.
#[must_use]
pub fn to_category6(group: Option<FieldGroup>, code: DetailedCode) -> Option<Category6> {
    if let Some(category) = sentinel_category(code) {
        return Some(category);
    }
    if let DetailedCode::Isced(isced) = code {
        if isced.value() == RETAIL_SERVICES_CODE {
            debug!("Code {isced} has no field group; mapping directly to category 2");
            return Some(Category6::ServicesRetail);
        }
    }
    group.map(group_category)
}

/// Aggregate a detailed code all the way to its survey category
#[must_use]
pub fn aggregate(code: DetailedCode) -> Option<Category6> {
    to_category6(to_field_group(code), code)
}
