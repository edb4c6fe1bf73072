//! View model for the account's diff table

use crate::state::AppState;
use code_diff_client::DiffResource;
use ratatui::style::Style;

#[derive(Debug, Clone)]
pub struct DiffRowViewModel {
    pub identifier: String,
    pub language: String,
    pub status: &'static str,
    pub created: String,
    pub updated: String,
    pub style: Style,
}

#[derive(Debug, Clone)]
pub struct ManagementViewModel {
    /// "Your diffs · page 2 · 12 total"
    pub title: String,
    pub query: String,
    /// Shown instead of the table when set
    pub notice: Option<String>,
    pub rows: Vec<DiffRowViewModel>,
    pub selected: usize,
}

fn format_date(date: Option<chrono::DateTime<chrono::Utc>>) -> String {
    date.map(|d| {
        d.with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    })
    .unwrap_or_else(|| "-".to_string())
}

impl ManagementViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let management = &state.management;
        let theme = &state.theme;

        let build_row = |(index, diff): (usize, &DiffResource)| DiffRowViewModel {
            identifier: diff.identifier.to_string(),
            language: diff.language.clone(),
            status: if diff.is_active { "active" } else { "inactive" },
            created: format_date(diff.created_at),
            updated: format_date(diff.updated_at),
            style: if index == management.selected {
                theme.table_selected()
            } else if !diff.is_active {
                theme.muted()
            } else {
                theme.table_row()
            },
        };

        let notice = if management.permission_denied {
            Some("Insufficient permissions. Run `code-diff login` and reopen this view.".to_string())
        } else if management.loading && management.data.is_none() {
            Some("Loading…".to_string())
        } else if management.rows().is_empty() {
            Some("No diffs found".to_string())
        } else {
            None
        };

        let total = management.data.as_ref().map(|d| d.count).unwrap_or(0);

        Self {
            title: format!(" Your diffs · page {} · {} total ", management.page, total),
            query: management.query.clone(),
            notice,
            rows: management.rows().iter().enumerate().map(build_row).collect(),
            selected: management.selected,
        }
    }
}
