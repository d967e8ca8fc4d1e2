//! Interactive menu navigator
//!
//! Owns the terminal for the lifetime of the session: raw mode, one
//! full redraw at the top of every loop iteration, one blocking
//! keystroke read per iteration. All state transitions live in
//! [`crate::core::engine`]; this module only renders the current state
//! and performs the side effects named by the returned [`Step`].

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};

use crate::core::engine::{Engine, Step};
use crate::core::menu::{Menu, NodeKind};
use crate::core::menu_file::{MenuFile, ToolsConfig};
use crate::infra::launcher;

/// A transient one-line message shown under the menu
#[derive(Debug, Clone)]
enum Notice {
    Info(String),
    Error(String),
}

/// Interactive navigator session state
pub struct Navigator {
    engine: Engine,
    title: String,
    tools: ToolsConfig,
    menu_path: PathBuf,
    notice: Option<Notice>,
    last_key: Option<char>,
}

impl Navigator {
    /// Create a navigator over a validated menu tree
    pub fn new(file: MenuFile, menu: Menu, menu_path: PathBuf) -> Self {
        Self {
            engine: Engine::new(menu),
            title: file.title,
            tools: file.tools,
            menu_path,
            notice: None,
            last_key: None,
        }
    }

    /// Run the navigator until a quit transition
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop: draw, read one keystroke, step the engine
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                let KeyCode::Char(pressed) = key.code else {
                    continue;
                };
                self.last_key = Some(pressed);

                match self.engine.press(pressed) {
                    Step::Quit => return Ok(()),
                    Step::Entered | Step::Back | Step::Home => self.notice = None,
                    Step::AtRoot => {
                        self.notice = Some(Notice::Info("Already at the main menu.".to_string()));
                    }
                    Step::Invalid(key) => {
                        self.notice = Some(Notice::Error(format!("Invalid choice: {key}")));
                    }
                    Step::Dispatch(action) => {
                        self.notice = Some(Notice::Info(format!("Launched: {action}")));
                        launcher::dispatch(&action, &self.tools);
                    }
                    Step::Reload => self.reload()?,
                }
            }
        }
    }

    /// Reload the menu file and rebuild the whole navigation state.
    /// Load failures are fatal, matching startup behavior.
    fn reload(&mut self) -> Result<()> {
        let (file, menu) = MenuFile::load_menu(&self.menu_path).with_context(|| {
            format!("Failed to reload menu file '{}'", self.menu_path.display())
        })?;
        self.title = file.title;
        self.tools = file.tools;
        self.engine.reload(menu);
        self.notice = Some(Notice::Info("Menu reloaded.".to_string()));
        tracing::info!(path = %self.menu_path.display(), "menu reloaded");
        Ok(())
    }

    /// Draw the full screen
    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Menu
                Constraint::Length(4), // Controls + status
            ])
            .split(f.area());

        self.draw_title(f, chunks[0]);
        self.draw_menu(f, chunks[1]);
        self.draw_footer(f, chunks[2]);
    }

    /// Draw title bar
    fn draw_title(&self, f: &mut Frame, area: Rect) {
        let title_block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan));

        let title_text = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(title_block);

        f.render_widget(title_text, area);
    }

    /// Draw the current menu level
    fn draw_menu(&self, f: &mut Frame, area: Rect) {
        let location = if self.engine.breadcrumb().is_empty() {
            "Main menu".to_string()
        } else {
            format!("[{}]", self.engine.breadcrumb())
        };

        let items: Vec<ListItem> = self
            .engine
            .current_menu()
            .entries()
            .iter()
            .map(|node| {
                let mut spans = vec![
                    Span::styled(
                        format!("  {}", node.key),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" -> "),
                    Span::raw(node.label.as_str()),
                ];
                if matches!(node.kind, NodeKind::Submenu(_)) {
                    spans.push(Span::styled(" ▸", Style::default().fg(Color::DarkGray)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(location),
        );

        f.render_widget(list, area);
    }

    /// Draw the control-key help and the transient status line
    fn draw_footer(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let help = Line::from(vec![
            Span::styled("b", key_style),
            Span::raw(" -> back    "),
            Span::styled("q", key_style),
            Span::raw(" -> main/quit    "),
            Span::styled("Q", key_style),
            Span::raw(" -> quit    "),
            Span::styled("R", key_style),
            Span::raw(" -> reload"),
        ]);

        let status = match &self.notice {
            Some(Notice::Info(text)) => {
                Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Yellow)))
            }
            Some(Notice::Error(text)) => {
                Line::from(Span::styled(text.as_str(), Style::default().fg(Color::Red)))
            }
            None => match self.last_key {
                Some(key) => Line::from(Span::styled(
                    format!("> {key}"),
                    Style::default().fg(Color::DarkGray),
                )),
                None => Line::from(""),
            },
        };

        let footer = Paragraph::new(vec![help, status]).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer, area);
    }
}
