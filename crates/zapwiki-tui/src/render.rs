//! Frame rendering for the wiki browser

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};
use zapwiki_search::MAX_RESULTS;

use crate::{
    browser::{Focus, WikiBrowser},
    view::LineKind,
};

pub const APP_TITLE: &str = "ZAP POST • Wiki";
pub const SEARCH_PLACEHOLDER: &str = "Pesquisar artigos, tópicos…";
pub const NO_RESULTS: &str = "Nada encontrado";
pub const SIDEBAR_TITLE: &str = "Categorias";
pub const CONTENTS_TITLE: &str = "Conteúdo";
pub const FACTS_TITLE: &str = "Visão rápida";
pub const NO_ARTICLES: &str = "Nenhum artigo cadastrado";

const RIGHT_COLUMN_WIDTH: u16 = 32;

/// Draw the whole browser into a frame
pub fn render(frame: &mut Frame, browser: &mut WikiBrowser) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(browser.sidebar_width()),
            Constraint::Min(20),
            Constraint::Length(RIGHT_COLUMN_WIDTH),
        ])
        .split(rows[1]);

    render_header(frame, browser, rows[0]);
    render_sidebar(frame, browser, columns[0]);
    render_article(frame, browser, columns[1]);
    render_side_panels(frame, browser, columns[2]);
    render_footer(frame, browser, rows[2]);

    if browser.search().is_active() {
        render_search_results(frame, browser, rows[0], area);
    }
}

fn border_style(browser: &WikiBrowser, pane: Focus) -> Style {
    if browser.focus() == pane {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    }
}

fn render_header(frame: &mut Frame, browser: &WikiBrowser, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let query = browser.search().query();
    let input = if query.is_empty() && browser.focus() != Focus::Search {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(format!("{}▏", query))
    };

    let search = Paragraph::new(input).block(
        Block::default()
            .title("Buscar (/)")
            .borders(Borders::ALL)
            .border_style(border_style(browser, Focus::Search)),
    );
    frame.render_widget(search, chunks[1]);
}

fn render_sidebar(frame: &mut Frame, browser: &WikiBrowser, area: Rect) {
    let current = browser.router().current_slug();
    let selected_slug = browser.sidebar_entries().get(browser.sidebar_selected());

    let mut items = Vec::new();
    let mut selected_row = None;
    for (category, articles) in browser.store().grouped_articles() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("› {}", category),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ))));

        for article in articles {
            if selected_slug == Some(&article.slug) && selected_row.is_none() {
                selected_row = Some(items.len());
            }
            let style = if article.slug == current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {}", article.title),
                style,
            ))));
        }
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(SIDEBAR_TITLE)
                .borders(Borders::ALL)
                .border_style(border_style(browser, Focus::Sidebar)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(selected_row);
    frame.render_stateful_widget(list, area, &mut state);
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Breadcrumb => Style::default().fg(Color::DarkGray),
        LineKind::Title => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Summary => Style::default().add_modifier(Modifier::ITALIC),
        LineKind::Heading => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LineKind::Notice => Style::default().fg(Color::Magenta),
        LineKind::SeeAlso => Style::default().fg(Color::Cyan),
        LineKind::Body | LineKind::Blank => Style::default(),
    }
}

fn render_article(frame: &mut Frame, browser: &mut WikiBrowser, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(browser, Focus::Article));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // leave a column for the scrollbar
    let width = inner.width.saturating_sub(1) as usize;
    let height = inner.height as usize;
    browser.layout(width, height);

    let Some(view) = browser.view() else {
        frame.render_widget(Paragraph::new(NO_ARTICLES), inner);
        return;
    };

    let lines: Vec<Line> = view
        .lines()
        .iter()
        .skip(browser.offset())
        .take(height)
        .map(|line| Line::from(Span::styled(line.text.clone(), line_style(line.kind))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if height > 0 && view.len() > height {
        let mut scrollbar_state = ScrollbarState::new(view.max_offset(height))
            .position(browser.offset());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_side_panels(frame: &mut Frame, browser: &WikiBrowser, area: Rect) {
    let Some(article) = browser.current_article() else {
        return;
    };

    let has_contents = article.has_sections();
    let has_facts = !article.info_items.is_empty();
    let constraints = match (has_contents, has_facts) {
        (true, true) => vec![Constraint::Min(3), Constraint::Length(facts_height(article))],
        _ => vec![Constraint::Min(0)],
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if has_contents {
        let items: Vec<ListItem> = article
            .sections
            .iter()
            .map(|section| ListItem::new(section.title.clone()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(CONTENTS_TITLE)
                    .borders(Borders::ALL)
                    .border_style(border_style(browser, Focus::Contents)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default();
        state.select(Some(browser.toc_selected()));
        frame.render_stateful_widget(list, chunks[0], &mut state);
    }

    if has_facts {
        let mut lines = Vec::new();
        for item in &article.info_items {
            lines.push(Line::from(Span::styled(
                item.label.clone(),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                item.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        let facts = Paragraph::new(lines)
            .block(Block::default().title(FACTS_TITLE).borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        let target = if has_contents { chunks[1] } else { chunks[0] };
        frame.render_widget(facts, target);
    }
}

fn facts_height(article: &zapwiki_content::Article) -> u16 {
    (article.info_items.len() as u16).saturating_mul(2).saturating_add(2)
}

fn render_footer(frame: &mut Frame, browser: &WikiBrowser, area: Rect) {
    let support = browser.support();
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Ajuda: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{}  {}", support.whatsapp_url, support.email_url)),
        Span::styled(
            "  │ / buscar  Tab painel  Alt+←/→ histórico  h início  q sair",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(footer, area);
}

fn render_search_results(frame: &mut Frame, browser: &WikiBrowser, header: Rect, area: Rect) {
    let results = browser.search().results();
    let rows = if results.is_empty() {
        1
    } else {
        results.len().min(MAX_RESULTS) as u16 * 2
    };

    let x = header.x + 20;
    let width = header.width.saturating_sub(20);
    let y = header.y + header.height;
    let height = (rows + 2).min(area.height.saturating_sub(y));
    let popup = Rect::new(x, y, width, height).intersection(area);
    if popup.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if results.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(NO_RESULTS, Style::default().fg(Color::DarkGray)))
                .block(block),
            popup,
        );
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|hit| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    hit.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    hit.slug.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut state = ListState::default();
    state.select(Some(browser.search().selected_index()));
    frame.render_stateful_widget(list, popup, &mut state);
}
