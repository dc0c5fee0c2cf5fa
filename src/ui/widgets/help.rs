//! Help panel and key hint bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::KeyBindings;
use crate::state::View;

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(keys: String, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<9}"), Style::default().fg(Color::Cyan)),
        Span::raw(description.to_string()),
    ])
}

/// Help panel showing the configured keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            section("Featured item"),
            Line::from(""),
            entry(format!("{}/↓", keys.next), "Feature next (pins it)"),
            entry(format!("{}/↑", keys.previous), "Feature previous (pins it)"),
            entry("Home".to_string(), "Feature first (pins it)"),
            Line::from(Span::styled(
                "  Pinned items resume rotating after the cooldown",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            section("Views"),
            Line::from(""),
            entry(keys.arena.clone(), View::Arena.title()),
            entry(keys.markets.clone(), View::Markets.title()),
            entry(keys.predictions.clone(), View::Predictions.title()),
            entry(keys.history.clone(), View::History.title()),
            entry(keys.next_view.clone(), "Next view"),
            Line::from(""),
            section("Predictions"),
            Line::from(""),
            entry(format!("{}/{}", keys.next, keys.previous), "Select market"),
            entry(keys.filter.clone(), "Cycle category"),
            Line::from(""),
            section("Bet ticket"),
            Line::from(""),
            entry(keys.open_ticket.clone(), "Open for featured agent or market"),
            entry(format!("{}/{}", keys.increase, keys.decrease), "Adjust amount"),
            entry(keys.toggle_side.clone(), "Toggle buy/sell"),
            entry(keys.toggle_outcome.clone(), "Toggle YES/NO"),
            entry(keys.submit.clone(), "Submit"),
            entry(keys.back.clone(), "Cancel"),
            Line::from(""),
            section("General"),
            Line::from(""),
            entry(keys.help.clone(), "Toggle help"),
            entry(keys.quit.clone(), "Quit"),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White));

        frame.render_widget(help, popup_area);
    }
}

/// One-line key hints for the current view.
pub struct HintBar;

impl HintBar {
    /// Render hints for `view`.
    pub fn render(frame: &mut Frame, area: Rect, view: View, keys: &KeyBindings) {
        let mut hints = vec![
            (keys.quit.clone(), "quit"),
            (keys.help.clone(), "help"),
            (keys.next_view.clone(), "view"),
        ];
        match view {
            View::Arena | View::Markets => {
                hints.push((format!("{}/{}", keys.next, keys.previous), "feature"));
            }
            View::Predictions => {
                hints.push((format!("{}/{}", keys.next, keys.previous), "select"));
                hints.push((keys.filter.clone(), "category"));
            }
            View::History => {}
        }
        if matches!(view, View::Arena | View::Predictions) {
            hints.push((keys.open_ticket.clone(), "bet"));
        }

        let key_style = Style::default().fg(Color::Cyan);
        let text_style = Style::default().fg(Color::DarkGray);
        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, text)| {
                [
                    Span::styled(format!(" {key} "), key_style),
                    Span::styled(format!("{text} "), text_style),
                ]
            })
            .collect();

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
