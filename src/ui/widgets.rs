use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::resolve::render_errors;
use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::time::relative_time;

pub fn render_path_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.input_active {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .title(" Show open issues for ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans = vec![
        Span::styled("https://github.com/", theme::DIM),
        Span::styled(state.input.as_str(), theme::HEADER),
    ];
    if state.input_active {
        spans.push(Span::styled("█", theme::HEADER));
    }

    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}

pub fn render_repo_header(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Repository ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_UNFOCUSED);

    let mut lines = Vec::new();

    // GraphQL-level errors replace the repository summary
    if let Some(errors) = state.view.errors.as_deref() {
        lines.push(Line::from(Span::styled(render_errors(errors), theme::ERROR)));
        let para = Paragraph::new(lines).block(block);
        f.render_widget(para, area);
        return;
    }

    match state.view.organization.as_ref() {
        Some(org) => {
            let repo = &org.repository;
            let star_marker = if repo.viewer_has_starred {
                Span::styled("★", theme::STARRED)
            } else {
                Span::styled("☆", theme::DIM)
            };
            lines.push(Line::from(vec![
                Span::styled(org.name.as_str(), theme::ORG),
                Span::styled(" / ", theme::DIM),
                Span::styled(repo.name.as_str(), theme::HEADER),
                Span::raw("  "),
                star_marker,
                Span::styled(
                    format!(" {} stars", repo.stargazers.total_count),
                    theme::STARRED,
                ),
            ]));
            lines.push(Line::from(Span::styled(repo.url.as_str(), theme::URL)));
        }
        None => {
            if state.loading {
                lines.push(Line::from(Span::styled("Loading...", theme::DIM)));
            } else {
                lines.push(Line::from(Span::styled("No information yet ...", theme::DIM)));
            }
        }
    }

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

pub fn render_issue_list(f: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.repository() {
        Some(repo) => format!(
            " Open Issues ({}/{}) ",
            repo.issues.edges.len(),
            repo.issues.total_count
        ),
        None => " Open Issues ".to_string(),
    };

    let border_style = if state.input_active {
        theme::BORDER_UNFOCUSED
    } else {
        theme::BORDER_FOCUSED
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut items: Vec<ListItem> = state
        .issues()
        .iter()
        .enumerate()
        .map(|(i, edge)| {
            let issue = &edge.node;
            let mut spans = vec![Span::styled(issue.title.as_str(), theme::ISSUE_TITLE)];

            let reactions: Vec<&str> = issue
                .reactions()
                .map(|reaction| reaction.content.as_str())
                .collect();
            if !reactions.is_empty() {
                spans.push(Span::styled(
                    format!("  [{}]", reactions.join(" ")),
                    theme::REACTION,
                ));
            }

            let style = if i == state.issue_cursor && !state.input_active {
                theme::HIGHLIGHT
            } else {
                ratatui::style::Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    if state.has_next_page() {
        items.push(ListItem::new(Line::from(Span::styled(
            "  ... press m for more",
            theme::DIM,
        ))));
    }

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = if state.input_active {
        "Esc: cancel | Enter: fetch"
    } else {
        "j/k: nav | Enter/o: open | e: edit path | m: more | s: star | r: refresh | q: quit"
    };

    let status = if state.loading {
        "Loading...".to_string()
    } else if state.starring {
        "Starring...".to_string()
    } else {
        String::new()
    };

    let refresh_info = state
        .last_refresh
        .as_ref()
        .map(|t| relative_time(t))
        .unwrap_or_default();

    // Calculate available space
    let total_width = area.width as usize;
    let left_len = key_hints.len();
    let right_len = refresh_info.len();

    let center_width = total_width.saturating_sub(left_len + right_len + 2);
    let status_truncated = if status.len() > center_width {
        format!("{}...", &status[..center_width.saturating_sub(3)])
    } else {
        status
    };

    let padding = center_width.saturating_sub(status_truncated.len());

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ", theme::STATUS_BAR),
        Span::styled(status_truncated, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(refresh_info, theme::STATUS_BAR),
    ]);

    let bar = Paragraph::new(line).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}

pub fn render_error_modal(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(ref msg) = state.error_message else {
        return;
    };

    let modal_width = (area.width / 2).max(40).min(area.width.saturating_sub(4));
    let modal_height = 5u16;
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x,
        y,
        width: modal_width,
        height: modal_height,
    };

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(theme::ERROR);

    let text = vec![
        Line::from(Span::styled(msg.as_str(), theme::ERROR)),
        Line::from(""),
        Line::from(Span::styled("Press Esc to dismiss", theme::DIM)),
    ];

    let para = Paragraph::new(text).block(block);
    f.render_widget(para, modal_area);
}
