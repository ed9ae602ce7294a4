use crate::ui::browser::{BrowserState, LoadPhase};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_ERROR, STATUS_OK, TEXT_DIM, TEXT_PRIMARY};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, browser: &BrowserState, ticks: usize) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(TEXT_PRIMARY);
        let separator_style = Style::default().fg(TEXT_DIM);

        let status = match &browser.load {
            LoadPhase::Loading => {
                let frame = SPINNER_FRAMES[ticks % SPINNER_FRAMES.len()];
                Span::styled(format!("{frame} fetching users..."), text_style)
            }
            LoadPhase::Loaded { countries } => {
                let users: usize = countries.iter().map(|c| c.user_count()).sum();
                Span::styled(
                    format!("{} users in {} countries", users, countries.len()),
                    Style::default().fg(STATUS_OK),
                )
            }
            LoadPhase::Failed { .. } => {
                Span::styled("fetch failed", Style::default().fg(STATUS_ERROR))
            }
        };

        let line = Line::from(vec![
            Span::styled("  userscope", title_style),
            Span::styled("  │  ", separator_style),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
