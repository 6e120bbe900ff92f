use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use skillquest_core::{CourseRequest, GenerationResult};
use skillquest_gemini::Generator;
use skillquest_prompts::build_request;

use crate::clipboard::{Clipboard, SystemClipboard};

/// How long the "Copié !" confirmation stays visible.
pub const COPY_CONFIRM_TTL: Duration = Duration::from_secs(2);

/// Which form input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Domain,
    Skill,
    Subject,
    Keywords,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Domain, Field::Skill, Field::Subject, Field::Keywords];

    pub fn next(self) -> Field {
        match self {
            Field::Domain => Field::Skill,
            Field::Skill => Field::Subject,
            Field::Subject => Field::Keywords,
            Field::Keywords => Field::Domain,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::Domain => Field::Keywords,
            Field::Skill => Field::Domain,
            Field::Subject => Field::Skill,
            Field::Keywords => Field::Subject,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Domain => " Domaine ",
            Field::Skill => " Nom de la compétence ",
            Field::Subject => " Sujet principal ",
            Field::Keywords => " Mots-clés (optionnel) ",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Domain => "Ex: Développement Web",
            Field::Skill => "Ex: React.js",
            Field::Subject => "Ex: Introduction aux Hooks et au state",
            Field::Keywords => "Ex: useState, useEffect, components, props",
        }
    }
}

/// What the app is currently doing
#[derive(Debug, Clone)]
pub enum Mode {
    /// Editing the course form
    Form,
    /// A generation request is in flight
    Generating,
    /// Viewing the generated Markdown (scrollable)
    Output { scroll: u16 },
}

pub struct App {
    generator: Arc<dyn Generator>,
    clipboard: Box<dyn Clipboard>,
    course: CourseRequest,
    focus: Field,
    mode: Mode,
    /// Markdown of the last successful generation.
    result: Option<String>,
    /// Validation or generation error, shown in the status line.
    error: Option<String>,
    /// Delivers the worker thread's outcome; Some while a request is in flight.
    pending: Option<Receiver<GenerationResult>>,
    copied_at: Option<Instant>,
}

impl App {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self::with_clipboard(generator, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(generator: Arc<dyn Generator>, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            generator,
            clipboard,
            course: CourseRequest::default(),
            focus: Field::Domain,
            mode: Mode::Form,
            result: None,
            error: None,
            pending: None,
            copied_at: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn course(&self) -> &CourseRequest {
        &self.course
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Form)
    }

    /// Returns true if the event loop should use a poll timeout instead of
    /// blocking: a request is in flight or the copy confirmation must expire.
    pub fn needs_polling(&self) -> bool {
        self.pending.is_some() || self.copied_at.is_some()
    }

    /// Advance time-driven state. Called on timeout from the event loop.
    pub fn poll(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPY_CONFIRM_TTL {
                self.copied_at = None;
            }
        }

        let outcome = match self.pending {
            Some(ref rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(GenerationResult::Failure(
                    "La génération a été interrompue.".into(),
                )),
            },
            None => None,
        };

        if let Some(outcome) = outcome {
            self.pending = None;
            match outcome {
                GenerationResult::Markdown(text) => {
                    self.result = Some(text);
                    self.mode = Mode::Output { scroll: 0 };
                }
                GenerationResult::Failure(message) => {
                    self.error = Some(message);
                    self.mode = Mode::Form;
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode.clone() {
            Mode::Form => self.handle_form(key),
            // Input is ignored while a request is in flight; there is no
            // cancellation and no queue.
            Mode::Generating => {}
            Mode::Output { scroll } => self.handle_output(key, scroll),
        }
    }

    fn handle_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Backspace => {
                self.focused_value_mut().pop();
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.result.is_some() {
                    self.mode = Mode::Output { scroll: 0 };
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_value_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_output(&mut self, key: KeyEvent, scroll: u16) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.mode = Mode::Output {
                    scroll: scroll.saturating_add(1),
                };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.mode = Mode::Output {
                    scroll: scroll.saturating_sub(1),
                };
            }
            KeyCode::PageDown => {
                self.mode = Mode::Output {
                    scroll: scroll.saturating_add(10),
                };
            }
            KeyCode::PageUp => {
                self.mode = Mode::Output {
                    scroll: scroll.saturating_sub(10),
                };
            }
            KeyCode::Char('c') => self.copy_result(),
            KeyCode::Char('e') | KeyCode::Esc => self.mode = Mode::Form,
            _ => {}
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Domain => &mut self.course.domain,
            Field::Skill => &mut self.course.skill,
            Field::Subject => &mut self.course.subject,
            Field::Keywords => &mut self.course.keywords,
        }
    }

    fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Domain => &self.course.domain,
            Field::Skill => &self.course.skill,
            Field::Subject => &self.course.subject,
            Field::Keywords => &self.course.keywords,
        }
    }

    /// Validate, then hand the request to a worker thread. The form stays
    /// untouched so the user can correct and resubmit.
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if let Err(e) = self.course.validate() {
            self.error = Some(e.to_string());
            return;
        }

        self.error = None;
        self.result = None;
        self.copied_at = None;

        let request = build_request(&self.course);
        let generator = Arc::clone(&self.generator);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(generator.generate(&request));
        });

        self.pending = Some(rx);
        self.mode = Mode::Generating;
    }

    /// Copy the result to the clipboard. A no-op when there is no result;
    /// the confirmation flag is only set when the clipboard accepted it.
    pub fn copy_result(&mut self) {
        let Some(text) = self.result.clone() else {
            return;
        };
        if self.clipboard.copy(&text) {
            self.copied_at = Some(Instant::now());
        }
    }

    // -- Rendering --

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        match self.mode {
            Mode::Form | Mode::Generating => self.render_form(frame, layout[1]),
            Mode::Output { scroll } => self.render_output(frame, layout[1], scroll),
        }
        self.render_status_bar(frame, layout[2]);

        if matches!(self.mode, Mode::Generating) {
            self.render_generating_overlay(frame, area);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" skillquest ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(
                "Générateur de Cours SkillQuest",
                Style::default().fg(Color::Yellow),
            ),
        ]);
        frame.render_widget(title, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        for (i, field) in Field::ALL.into_iter().enumerate() {
            let focused = self.focus == field && matches!(self.mode, Mode::Form);
            let border_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(field.label());

            let value = self.field_value(field);
            let paragraph = if value.is_empty() && !focused {
                Paragraph::new(field.placeholder()).style(Style::default().fg(Color::DarkGray))
            } else {
                Paragraph::new(value)
            };
            frame.render_widget(paragraph.block(block), rows[i]);
        }
    }

    fn render_output(&self, frame: &mut Frame, area: Rect, scroll: u16) {
        let text = self.result.as_deref().unwrap_or("(aucun résultat)");
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Résultat Markdown ");
        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_generating_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("L'IA prépare votre cours...")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, popup);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.error {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(line, area);
            return;
        }
        if self.is_copied() {
            let line = Line::from(Span::styled(
                " Copié !",
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints: Vec<(&str, &str)> = match self.mode {
            Mode::Form => {
                let mut hints = vec![
                    ("Tab", "champ suivant"),
                    ("Enter", "générer"),
                    ("Ctrl+C", "quitter"),
                ];
                if self.result.is_some() {
                    hints.push(("Ctrl+O", "résultat"));
                }
                hints
            }
            Mode::Generating => vec![("Ctrl+C", "quitter")],
            Mode::Output { .. } => vec![
                ("j/k", "défiler"),
                ("c", "copier"),
                ("e", "modifier"),
                ("q", "quitter"),
            ],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
