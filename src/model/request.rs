use super::category::Category;
use super::dates;
use super::record::RecordItem;
use crate::error::ReportError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRange {
    #[serde(deserialize_with = "dates::deserialize_required")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "dates::deserialize_required")]
    pub end: NaiveDateTime,
}

impl PeriodRange {
    /// `Período: dd/mm/yyyy a dd/mm/yyyy`
    pub fn describe(&self) -> String {
        format!(
            "Período: {} a {}",
            dates::format_date(&self.start),
            dates::format_date(&self.end)
        )
    }
}

/// Everything one report is generated from. Read-only during generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub organization: Organization,
    pub period_range: PeriodRange,
    #[serde(default)]
    pub sections: BTreeMap<String, Vec<RecordItem>>,
    #[serde(default)]
    pub totals: BTreeMap<String, f64>,
    #[serde(deserialize_with = "dates::deserialize_required")]
    pub generated_at: NaiveDateTime,
}

impl ReportRequest {
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Records of a category; missing categories read as empty.
    pub fn records(&self, category: Category) -> &[RecordItem] {
        self.sections
            .get(category.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Section keys that no renderer is registered for.
    pub fn unknown_section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections
            .keys()
            .map(String::as_str)
            .filter(|key| Category::from_key(key).is_none())
    }
}
