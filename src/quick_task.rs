//! Quick tasks: lightweight inspection/maintenance/occurrence/before-after
//! records created through an abbreviated flow, and their protocol numbers.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickTaskKind {
    Vistoria,
    Manutencao,
    Ocorrencia,
    AntesDepois,
}

impl QuickTaskKind {
    pub fn prefix(self) -> &'static str {
        match self {
            QuickTaskKind::Vistoria => "VIS",
            QuickTaskKind::Manutencao => "MAN",
            QuickTaskKind::Ocorrencia => "OCO",
            QuickTaskKind::AntesDepois => "AD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickTaskStatus {
    Draft,
    Sent,
    Completed,
}

impl fmt::Display for QuickTaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuickTaskStatus::Draft => "draft",
            QuickTaskStatus::Sent => "sent",
            QuickTaskStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuickTaskError {
    #[error("Cannot move quick task from '{from}' to '{to}'")]
    InvalidTransition {
        from: QuickTaskStatus,
        to: QuickTaskStatus,
    },
}

impl QuickTaskStatus {
    /// Only single forward steps are allowed: draft -> sent -> completed.
    pub fn transition(self, to: QuickTaskStatus) -> Result<QuickTaskStatus, QuickTaskError> {
        match (self, to) {
            (QuickTaskStatus::Draft, QuickTaskStatus::Sent)
            | (QuickTaskStatus::Sent, QuickTaskStatus::Completed) => Ok(to),
            _ => Err(QuickTaskError::InvalidTransition { from: self, to }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickTask {
    pub kind: QuickTaskKind,
    pub protocol: String,
    pub status: QuickTaskStatus,
    pub created_on: NaiveDate,
}

impl QuickTask {
    /// Creates a draft with the next free protocol for its kind and day.
    pub fn new<'a, I>(kind: QuickTaskKind, created_on: NaiveDate, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            kind,
            protocol: next_protocol(kind, created_on, existing),
            status: QuickTaskStatus::Draft,
            created_on,
        }
    }

    pub fn advance(&mut self, to: QuickTaskStatus) -> Result<(), QuickTaskError> {
        self.status = self.status.transition(to)?;
        Ok(())
    }
}

/// Splits `PREFIX-YYYYMMDD-NNNN` into its parts.
fn parse_protocol(protocol: &str) -> Option<(&str, &str, u32)> {
    let (prefix, date, seq) = protocol.trim().split('-').collect_tuple()?;
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if seq.is_empty() || !seq.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((prefix, date, seq.parse().ok()?))
}

/// Next protocol number `{PREFIX}-{YYYYMMDD}-{NNNN}`.
///
/// The sequence is one past the highest already used for the same prefix and
/// day; malformed protocols are ignored. The first of the day is `0001`.
pub fn next_protocol<'a, I>(kind: QuickTaskKind, created_on: NaiveDate, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let day = created_on.format("%Y%m%d").to_string();
    let highest = existing
        .into_iter()
        .filter_map(parse_protocol)
        .filter(|(prefix, date, _)| *prefix == kind.prefix() && *date == day)
        .map(|(_, _, seq)| seq)
        .max()
        .unwrap_or(0);
    format!("{}-{}-{:04}", kind.prefix(), day, highest + 1)
}
