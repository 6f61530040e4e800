//! Plain-text rendering of the board.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::board::Column;
use crate::model::{User, WorkOrder};

/// First letters of the first two words of "first last", uppercased. `?`
/// when unassigned or nameless.
pub fn initials(user: Option<&User>) -> String {
    let Some(user) = user else {
        return "?".to_owned();
    };
    let name = format!("{} {}", user.first_name, user.last_name);
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_owned()
    } else {
        letters
    }
}

/// Short month and day, e.g. `Jun 1`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

pub fn card_line(work_order: &WorkOrder) -> String {
    let mut line = format!(
        "#{} [{}] {}",
        work_order.id,
        initials(work_order.assigned_to.as_ref()),
        work_order.description
    );
    if work_order.complete {
        line.push_str(" (Done)");
    }
    if work_order.canceled {
        line.push_str(" (Canceled)");
    }
    let _ = write!(line, " - {}", format_date(&work_order.created_at_time));
    line
}

pub fn render_board(columns: &[Column<'_>]) -> String {
    let mut out = String::new();
    for column in columns {
        let _ = writeln!(out, "{} ({})", column.stage.name(), column.cards.len());
        for work_order in &column.cards {
            let _ = writeln!(out, "  {}", card_line(work_order));
        }
    }
    out
}
