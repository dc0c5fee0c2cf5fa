//! Bet ticket popup.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::catalog::Outcome;
use crate::config::KeyBindings;
use crate::state::{BetTicket, TicketSide};
use crate::ui::format::usd;
use crate::ui::layout::centered_rect;

/// Bet ticket popup.
pub struct TicketPopup;

impl TicketPopup {
    /// Render the ticket centered over `area`.
    pub fn render(frame: &mut Frame, area: Rect, ticket: &BetTicket, keys: &KeyBindings) {
        let popup_area = centered_rect(50, 50, area);
        frame.render_widget(Clear, popup_area);

        let label = Style::default().fg(Color::DarkGray);
        let side_style = match ticket.side {
            TicketSide::Buy => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            TicketSide::Sell => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        let other = ticket.outcome.opposite();
        let outcome_style = match ticket.outcome {
            Outcome::Yes => Style::default().fg(Color::Green),
            Outcome::No => Style::default().fg(Color::Red),
        };
        let (amount_label, amount, estimate_label) = match ticket.side {
            TicketSide::Buy => ("Amount    ", usd(ticket.amount), "To win    "),
            TicketSide::Sell => ("Shares    ", format!("{:.2}", ticket.amount), "Proceeds  "),
        };

        let lines = vec![
            Line::from(Span::styled(
                ticket.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Side      ", label),
                Span::styled(ticket.side.to_string(), side_style),
                Span::raw(" "),
                Span::styled(ticket.outcome.to_string(), outcome_style),
            ]),
            Line::from(vec![
                Span::styled("Price     ", label),
                Span::raw(format!("{:.2}¢", ticket.price_cents())),
                Span::styled(format!("  ({other} {:.2}¢)", ticket.price_of(other)), label),
            ]),
            Line::from(vec![Span::styled(amount_label, label), Span::raw(amount)]),
            Line::from(vec![
                Span::styled(estimate_label, label),
                Span::styled(usd(ticket.estimate()), Style::default().fg(Color::Green)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{}/{} amount  {} side  {} yes/no  {} submit  {} cancel",
                    keys.increase,
                    keys.decrease,
                    keys.toggle_side,
                    keys.toggle_outcome,
                    keys.submit,
                    keys.back
                ),
                label,
            )),
        ];

        let popup = Paragraph::new(lines).block(
            Block::default()
                .title(" Bet Ticket ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        frame.render_widget(popup, popup_area);
    }
}
