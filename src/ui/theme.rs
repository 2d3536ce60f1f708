use ratatui::style::{Color, Modifier, Style};

pub const HIGHLIGHT: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub const HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

pub const DIM: Style = Style::new().fg(Color::DarkGray);

pub const ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

pub const ORG: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub const STARRED: Style = Style::new().fg(Color::Yellow);

pub const ISSUE_TITLE: Style = Style::new().fg(Color::White);

pub const REACTION: Style = Style::new().fg(Color::Magenta);

pub const URL: Style = Style::new().fg(Color::Cyan);
