use super::dates;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One entry of a record's status history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    pub status: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "dates::deserialize_lenient")]
    pub date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistItem {
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoteOption {
    pub label: String,
    pub votes: u64,
}

/// A record of any category, as delivered by the data layer.
///
/// All fields are optional; which ones are present depends on the category.
/// Keys the engine does not know are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub protocol: Option<String>,
    #[serde(deserialize_with = "dates::deserialize_lenient")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(deserialize_with = "dates::deserialize_lenient")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(deserialize_with = "dates::deserialize_lenient")]
    pub due_date: Option<NaiveDateTime>,
    pub responsible: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub block: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub price: Option<f64>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub images: Vec<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timeline: Vec<TimelineEntry>,
    pub checklist_items: Vec<ChecklistItem>,
    pub options: Vec<VoteOption>,
    pub total_votes: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// How many history entries a card shows.
pub const TIMELINE_LIMIT: usize = 5;

impl RecordItem {
    /// Title, then name, then a placeholder.
    pub fn display_title(&self) -> &str {
        [&self.title, &self.name]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("Sem título")
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }

    /// The most recent history entries, newest first. Undated entries sort last.
    pub fn recent_timeline(&self) -> Vec<&TimelineEntry> {
        let mut entries: Vec<&TimelineEntry> = self.timeline.iter().collect();
        entries.sort_by(|a, b| match (a.date, b.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        entries.truncate(TIMELINE_LIMIT);
        entries
    }

    /// Declared total, never less than the sum of option votes.
    pub fn vote_total(&self) -> u64 {
        let counted: u64 = self.options.iter().map(|o| o.votes).sum();
        self.total_votes.map_or(counted, |declared| declared.max(counted))
    }

    pub fn checklist_progress(&self) -> (usize, usize) {
        let done = self.checklist_items.iter().filter(|i| i.completed).count();
        (done, self.checklist_items.len())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_and_keeps_extras() {
        let item: RecordItem = serde_json::from_value(json!({
            "id": 42,
            "title": "Troca de lâmpadas",
            "createdAt": "2024-03-01T09:00:00Z",
            "dueDate": "não informado",
            "beforeImage": "antes.png",
            "price": "150,50",
            "checklistItems": [{"label": "Extintores", "completed": true}],
            "customField": "valor"
        }))
        .unwrap();
        assert_eq!(item.id.as_deref(), Some("42"));
        assert!(item.created_at.is_some());
        assert!(item.due_date.is_none());
        assert_eq!(item.before_image.as_deref(), Some("antes.png"));
        assert_eq!(item.price, Some(150.5));
        assert_eq!(item.checklist_progress(), (1, 1));
        assert_eq!(item.extra.get("customField"), Some(&json!("valor")));
    }

    #[test]
    fn numeric_timestamps_do_not_reject_the_record() {
        let item: RecordItem = serde_json::from_value(json!({
            "title": "Portão travando",
            "createdAt": 1710498600000u64,
            "updatedAt": false
        }))
        .unwrap();
        assert_eq!(item.created_at, dates::parse_flexible("2024-03-15T10:30:00"));
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn title_falls_back_to_name() {
        let mut item = RecordItem {
            name: Some("Maria Souza".into()),
            ..Default::default()
        };
        assert_eq!(item.display_title(), "Maria Souza");
        item.title = Some("  ".into());
        assert_eq!(item.display_title(), "Maria Souza");
        assert_eq!(RecordItem::default().display_title(), "Sem título");
    }

    #[test]
    fn timeline_keeps_five_newest() {
        let timeline = (1..=8)
            .map(|day| TimelineEntry {
                status: Some(format!("passo {}", day)),
                description: None,
                date: dates::parse_flexible(&format!("2024-03-{:02}", day)),
            })
            .chain(std::iter::once(TimelineEntry::default()))
            .collect();
        let item = RecordItem {
            timeline,
            ..Default::default()
        };
        let recent = item.recent_timeline();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].status.as_deref(), Some("passo 8"));
        assert_eq!(recent[4].status.as_deref(), Some("passo 4"));
    }

    #[test]
    fn vote_total_defaults_to_sum() {
        let mut item = RecordItem {
            options: vec![
                VoteOption { label: "Sim".into(), votes: 7 },
                VoteOption { label: "Não".into(), votes: 3 },
            ],
            ..Default::default()
        };
        assert_eq!(item.vote_total(), 10);
        item.total_votes = Some(12);
        assert_eq!(item.vote_total(), 12);
    }

    #[test]
    fn understated_vote_total_uses_option_sum() {
        let item = RecordItem {
            total_votes: Some(0),
            options: vec![
                VoteOption { label: "Sim".into(), votes: 3 },
                VoteOption { label: "Não".into(), votes: 1 },
            ],
            ..Default::default()
        };
        assert_eq!(item.vote_total(), 4);
    }

    #[test]
    fn coordinates_need_both_values() {
        let mut item = RecordItem {
            latitude: Some(-23.55),
            ..Default::default()
        };
        assert_eq!(item.coordinates(), None);
        item.longitude = Some(-46.63);
        assert_eq!(item.coordinates(), Some((-23.55, -46.63)));
    }
}
