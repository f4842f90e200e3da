use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::data::{InputMode, Screen};
use crate::api::omdb::{ItemDetail, SearchResultItem};

/// Width of one result card, borders included.
pub const CARD_WIDTH: u16 = 28;
/// Height of one result card, borders included.
pub const CARD_HEIGHT: u16 = 4;

const ACCENT: Color = Color::Magenta;
const HIGHLIGHT: Color = Color::Yellow;
const MUTED: Color = Color::DarkGray;

/// Number of cards that fit side by side in `width` columns.
pub fn columns_for(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let [title, search, heading, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("Movie Info")
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        title,
    );
    draw_search(frame, screen, search);

    let heading_text = if screen.browse.is_search() {
        "Search Results"
    } else {
        "Latest Movies"
    };
    frame.render_widget(
        Paragraph::new(heading_text).style(Style::default().add_modifier(Modifier::BOLD)),
        heading,
    );

    draw_body(frame, screen, body);
    draw_footer(frame, screen, footer);

    if let Some(detail) = &screen.browse.selected_detail {
        draw_detail(frame, detail, screen.ui.detail_scroll);
    }
}

fn draw_search(frame: &mut Frame, screen: &Screen, area: Rect) {
    let editing = screen.ui.mode == InputMode::Editing;
    let border = if editing { HIGHLIGHT } else { MUTED };
    let text = if editing {
        Line::from(vec![
            Span::raw(screen.ui.input.as_str()),
            Span::styled("_", Style::default().fg(HIGHLIGHT)),
        ])
    } else if screen.ui.input.is_empty() {
        Line::styled("Press / to search movies...", Style::default().fg(MUTED))
    } else {
        Line::raw(screen.ui.input.as_str())
    };
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Search "),
        ),
        area,
    );
}

fn draw_body(frame: &mut Frame, screen: &Screen, area: Rect) {
    let state = &screen.browse;
    let mut constraints = Vec::new();
    if screen.loading_page == Some(1) {
        constraints.push(Constraint::Length(1));
    }
    if state.error_message.is_some() {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));
    let areas = Layout::vertical(constraints).split(area);
    let mut areas = areas.iter().copied();

    if screen.loading_page == Some(1) {
        if let Some(area) = areas.next() {
            frame.render_widget(
                Paragraph::new("Loading...")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(HIGHLIGHT)),
                area,
            );
        }
    }
    if let Some(message) = &state.error_message {
        if let Some(area) = areas.next() {
            let panel = Paragraph::new(vec![
                Line::styled("Oops!", Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(message.to_string(), Style::default().fg(Color::Gray)),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)));
            frame.render_widget(panel, area);
        }
    }
    if let Some(area) = areas.next() {
        draw_grid(frame, &state.results, screen.ui.cursor, area);
    }
}

fn draw_grid(frame: &mut Frame, items: &[SearchResultItem], cursor: usize, area: Rect) {
    if items.is_empty() || area.height < CARD_HEIGHT {
        return;
    }
    let columns = columns_for(area.width);
    let visible_rows = usize::from(area.height / CARD_HEIGHT);
    let cursor_row = cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let rows = items
        .chunks(columns)
        .enumerate()
        .skip(first_row)
        .take(visible_rows);
    for (row_offset, (row, chunk)) in rows.enumerate() {
        for (col, item) in chunk.iter().enumerate() {
            let card = Rect {
                x: area.x + col as u16 * CARD_WIDTH,
                y: area.y + row_offset as u16 * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT,
            };
            draw_card(frame, item, row * columns + col == cursor, card);
        }
    }
}

fn draw_card(frame: &mut Frame, item: &SearchResultItem, selected: bool, area: Rect) {
    let border = if selected { HIGHLIGHT } else { MUTED };
    let lines = vec![
        Line::styled(item.title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(vec![
            Span::raw(item.year.to_string()),
            Span::raw(" "),
            Span::styled(format!("[{}]", item.kind), Style::default().fg(ACCENT)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        area,
    );
}

fn draw_footer(frame: &mut Frame, screen: &Screen, area: Rect) {
    let state = &screen.browse;
    let mut spans = Vec::new();
    if !state.results.is_empty() {
        spans.push(Span::raw(format!(
            "Showing {} of {}",
            state.results.len(),
            state.total_available
        )));
    }
    if screen.has_more {
        let label = if matches!(screen.loading_page, Some(page) if page > 1) {
            "  Loading..."
        } else {
            "  [m] Load More"
        };
        spans.push(Span::styled(label, Style::default().fg(ACCENT)));
    }
    spans.push(Span::styled(
        "  / search  enter open  g home  q quit",
        Style::default().fg(MUTED),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

fn section(title: &'static str) -> Line<'static> {
    Line::styled(title, Style::default().add_modifier(Modifier::BOLD))
}

fn detail_lines(detail: &ItemDetail) -> Vec<Line<'static>> {
    let na = || "N/A".to_string();
    let mut badges = vec![Span::styled(
        format!("[{}]", detail.year),
        Style::default().fg(ACCENT),
    )];
    if let Some(runtime) = &detail.runtime {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(format!("[{}]", runtime), Style::default().fg(ACCENT)));
    }
    badges.push(Span::raw(" "));
    badges.push(Span::styled(
        format!(
            "[IMDb {}]",
            detail.rating.as_deref().map(str::to_string).unwrap_or_else(na)
        ),
        Style::default().fg(HIGHLIGHT),
    ));

    let genres: Vec<Span> = detail
        .genres
        .iter()
        .flat_map(|genre| {
            [
                Span::styled(format!(" {} ", genre), Style::default().bg(MUTED)),
                Span::raw(" "),
            ]
        })
        .collect();

    let poster = match &detail.poster_url {
        Some(url) => Line::raw(url.to_string()),
        None => Line::styled("No poster available", Style::default().fg(MUTED)),
    };

    vec![
        Line::from(badges),
        Line::raw(""),
        section("Plot"),
        Line::raw(detail.plot.as_deref().map(str::to_string).unwrap_or_else(na)),
        Line::raw(""),
        section("Genre"),
        Line::from(genres),
        Line::raw(""),
        section("Director"),
        Line::raw(detail.director.as_deref().map(str::to_string).unwrap_or_else(na)),
        Line::raw(""),
        section("Cast"),
        Line::raw(if detail.cast.is_empty() {
            na()
        } else {
            detail.cast.join(", ")
        }),
        Line::raw(""),
        section("Poster"),
        poster,
    ]
}

fn draw_detail(frame: &mut Frame, detail: &ItemDetail, scroll: u16) {
    let area = centered(frame.area(), 80, 80);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(detail_lines(detail))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(ACCENT))
                    .title(format!(" {} ", detail.title))
                    .title_bottom(Line::from(" esc close  up/down scroll ").right_aligned()),
            ),
        area,
    );
}
