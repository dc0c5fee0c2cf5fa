//! Layout management for the TUI.

use crate::config::UiConfig;
use crate::state::View;
use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Share of the width given to the list on split views.
pub const LIST_PERCENT: u16 = 55;

/// Lines a bordered table spends above its first row: border, header, gap.
const TABLE_HEAD: u16 = 3;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top). Zero-height when hidden.
    pub status_area: Rect,
    /// Tab bar area.
    pub tab_area: Rect,
    /// Main content area.
    pub main_area: Rect,
    /// Key hint bar (bottom). Zero-height when hidden.
    pub hint_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, ui: &UiConfig) -> Self {
        let bar = |shown: bool| Constraint::Length(u16::from(shown));
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                bar(ui.show_status_bar),
                Constraint::Length(1),
                Constraint::Min(0),
                bar(ui.show_help_bar),
            ])
            .split(area);

        // Notification area is centered in the main area
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + (area.height / 2).saturating_sub(2),
            width: area.width / 2,
            height: 4.min(area.height),
        };

        Self {
            status_area: chunks[0],
            tab_area: chunks[1],
            main_area: chunks[2],
            hint_area: chunks[3],
            notification_area,
        }
    }
}

/// Split an area into left and right panes by percentage.
pub fn split_horizontal(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split an area into a fixed-height top and the remainder.
pub fn split_vertical(area: Rect, top_height: u16) -> (Rect, Rect) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(top_height), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Height of a bordered table showing every one of `rows`.
pub fn table_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(TABLE_HEAD + 1)
}

/// Where the clickable list of `view`, holding `rows` rows, is drawn
/// inside `main`.
pub fn list_area(view: View, main: Rect, rows: usize) -> Option<Rect> {
    match view {
        View::Arena => {
            let left = split_horizontal(main, LIST_PERCENT).0;
            Some(split_vertical(left, table_height(rows)).0)
        }
        View::Predictions => Some(split_horizontal(main, LIST_PERCENT).0),
        View::Markets => Some(split_vertical(main, table_height(rows)).0),
        View::History => None,
    }
}

/// Row index under (`column`, `row`) in a bordered table drawn into `table`
/// with a fresh `TableState` selecting `selected` out of `len` rows.
///
/// Such a table scrolls just far enough to keep the selection on the last
/// visible line, so the offset is derived the same way.
pub fn row_at(
    table: Rect,
    selected: usize,
    len: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let first = table.y.saturating_add(TABLE_HEAD);
    let bottom = table.bottom().saturating_sub(1);
    let inside = column > table.x && column < table.right().saturating_sub(1);
    if !inside || row < first || row >= bottom {
        return None;
    }
    let visible = usize::from(bottom - first);
    let offset = (selected + 1).saturating_sub(visible);
    let index = offset + usize::from(row - first);
    (index < len).then_some(index)
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
