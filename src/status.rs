//! Status strings to badge colors.
//!
//! Records come from several forms and both Portuguese and English spellings
//! are in circulation, so statuses are normalized with `slug` before lookup:
//! `"Em andamento"`, `"em_andamento"` and `"EM-ANDAMENTO"` are the same key.

use condo_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Pending,
    Done,
    Cancelled,
    Urgent,
    Neutral,
}

pub const AMBER: Color = Color::rgb(245, 158, 11);
pub const GREEN: Color = Color::rgb(22, 163, 74);
pub const GRAY: Color = Color::rgb(148, 163, 184);
pub const RED: Color = Color::rgb(220, 38, 38);
pub const NEUTRAL_GRAY: Color = Color::rgb(100, 116, 139);

const PENDING: &[&str] = &[
    "pendente", "pending", "aberto", "aberta", "open", "em-andamento", "andamento",
    "in-progress", "aguardando", "waiting", "agendado", "agendada", "scheduled",
    "em-analise", "enviado", "enviada", "sent",
];
const DONE: &[&str] = &[
    "concluido", "concluida", "done", "completed", "complete", "resolvido", "resolvida",
    "resolved", "finalizado", "finalizada", "fechado", "fechada", "closed", "aprovado",
    "aprovada", "approved", "encerrado", "encerrada",
];
const CANCELLED: &[&str] = &[
    "cancelado", "cancelada", "cancelled", "canceled", "arquivado", "arquivada", "archived",
    "rejeitado", "rejeitada", "rejected",
];
const URGENT: &[&str] = &[
    "urgente", "urgent", "acao-necessaria", "action-needed", "critico", "critica",
    "critical", "atrasado", "atrasada", "overdue",
];

/// Lowercases, folds accents and unifies `_`, spaces and `-`.
pub fn normalize_status(status: &str) -> String {
    slug::slugify(status)
}

pub fn status_tone(status: &str) -> StatusTone {
    let key = normalize_status(status);
    let table: [(&[&str], StatusTone); 4] = [
        (PENDING, StatusTone::Pending),
        (DONE, StatusTone::Done),
        (CANCELLED, StatusTone::Cancelled),
        (URGENT, StatusTone::Urgent),
    ];
    table
        .into_iter()
        .find(|(names, _)| names.contains(&key.as_str()))
        .map(|(_, tone)| tone)
        .unwrap_or(StatusTone::Neutral)
}

impl StatusTone {
    pub fn color(self) -> Color {
        match self {
            StatusTone::Pending => AMBER,
            StatusTone::Done => GREEN,
            StatusTone::Cancelled => GRAY,
            StatusTone::Urgent => RED,
            StatusTone::Neutral => NEUTRAL_GRAY,
        }
    }
}

pub fn status_color(status: &str) -> Color {
    status_tone(status).color()
}

/// `"em_andamento"` -> `"Em andamento"`.
pub fn humanize_status(status: &str) -> String {
    let spaced = status
        .trim()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
