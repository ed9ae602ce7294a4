use crate::ui::app::App;
use crate::ui::browser::{BrowserState, GenderFilter, LoadPhase, PaneFocus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{browse_panes, centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, CURSOR_HIGHLIGHT, GLOBAL_BORDER, STATUS_ERROR, TEXT_DIM, TEXT_PRIMARY,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let ticks = app.ticks();
    let (browser, country_list) = app.country_pane();

    frame.render_widget(Header::new().widget(browser, ticks), header);
    frame.render_widget(Clear, body);

    match &browser.load {
        LoadPhase::Loading => draw_loading(frame, body),
        LoadPhase::Failed { message } => draw_failure(frame, body, message),
        LoadPhase::Loaded { .. } => draw_browser(frame, body, browser, country_list),
    }

    frame.render_widget(Footer::new().widget(footer, browser), footer);
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect) {
    let area = centered_rect(50, 20, body);
    let panel = Block::default()
        .title(Span::styled("Loading", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let text = Paragraph::new("Fetching users...")
        .style(Style::default().fg(TEXT_PRIMARY))
        .alignment(Alignment::Center)
        .block(panel);
    frame.render_widget(text, area);
}

fn draw_failure(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let area = centered_rect(70, 30, body);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(TEXT_DIM),
        )),
    ];

    let panel = Block::default()
        .title(Span::styled(
            "Fetch failed",
            Style::default().fg(STATUS_ERROR),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(panel),
        area,
    );
}

fn draw_browser(
    frame: &mut Frame<'_>,
    body: Rect,
    browser: &BrowserState,
    country_list: &mut ListState,
) {
    let (countries_area, users_area) = browse_panes(body, browser.selected.is_some());

    draw_countries(frame, countries_area, browser, country_list);
    if let Some(users_area) = users_area {
        draw_users(frame, users_area, browser);
    }
}

fn draw_countries(
    frame: &mut Frame<'_>,
    area: Rect,
    browser: &BrowserState,
    list_state: &mut ListState,
) {
    let items: Vec<ListItem> = browser
        .countries()
        .iter()
        .enumerate()
        .map(|(idx, country)| {
            let marker = if Some(idx) == browser.selected {
                "> "
            } else {
                "  "
            };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(
                    format!("{} - {}", country.name, country.user_count()),
                    Style::default().fg(TEXT_PRIMARY),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(
            format!(" Countries ({}) ", browser.countries().len()),
            browser.focus == PaneFocus::Countries,
        ))
        .highlight_style(
            Style::default()
                .bg(CURSOR_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, list_state);
}

fn draw_users(frame: &mut Frame<'_>, area: Rect, browser: &BrowserState) {
    let Some(country) = browser.selected_country() else {
        return;
    };
    let users = browser.visible_users();

    let mut lines: Vec<Line> = vec![filter_line(browser.filter), Line::from("")];

    for user in users.iter().skip(browser.scroll) {
        lines.push(Line::from(Span::styled(
            format!("  {}", user.full_name()),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )));
        lines.push(card_field("Gender", user.gender.label()));
        lines.push(card_field("City", &user.location.city));
        lines.push(card_field("State", &user.location.state));
        lines.push(card_field(
            "Registered",
            &user.registered.date.format("%b %d, %Y").to_string(),
        ));
        lines.push(Line::from(""));
    }

    if users.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No users match this filter.",
            Style::default().fg(TEXT_DIM),
        )));
    }

    let title = format!(" {} ({} shown) ", country.name, users.len());
    let widget = Paragraph::new(lines).block(pane_block(title, browser.focus == PaneFocus::Users));
    frame.render_widget(widget, area);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn card_field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {label}: "), Style::default().fg(TEXT_DIM)),
        Span::styled(value.to_string(), Style::default().fg(TEXT_PRIMARY)),
    ])
}

fn filter_line(active: GenderFilter) -> Line<'static> {
    let mut spans = vec![Span::styled("  Filter: ", Style::default().fg(TEXT_DIM))];

    for (idx, option) in [GenderFilter::All, GenderFilter::Male, GenderFilter::Female]
        .into_iter()
        .enumerate()
    {
        if idx > 0 {
            spans.push(Span::styled(" / ", Style::default().fg(TEXT_DIM)));
        }
        let style = if option == active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };
        spans.push(Span::styled(option.label(), style));
    }

    Line::from(spans)
}
