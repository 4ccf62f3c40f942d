mod theme;
mod ui;

use crate::config::Config;
use eyre::Result;
use log::{debug, info};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use slate_core::{Effect, InputDispatcher, Session};
use std::collections::VecDeque;
use std::time::Duration;

/// Effects kept on screen, newest first
const RECENT_EFFECTS: usize = 12;

pub fn run(config: &Config) -> Result<()> {
    let mut app = App::new(config);
    let mut terminal = ratatui::init();
    let result = app.run_loop(&mut terminal);
    ratatui::restore();
    info!("capture ended: {}", app.session.summary());
    result
}

pub struct App {
    pub session: Session,
    pub dispatcher: InputDispatcher,
    pub recent: VecDeque<(char, Effect)>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(config.overflow()),
            dispatcher: InputDispatcher::new(config.keymap()),
            recent: VecDeque::with_capacity(RECENT_EFFECTS),
            should_quit: false,
        }
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl && !alt => self.should_quit = true,
            // AltGr arrives as Ctrl+Alt and still produces a printable char
            KeyCode::Char(_) if ctrl != alt => {}
            KeyCode::Char(c) => self.feed(c),
            _ => {}
        }
    }

    fn feed(&mut self, key: char) {
        let effects = self.dispatcher.feed(key, &mut self.session);
        for effect in effects {
            debug!("delivering {effect}");
            if self.recent.len() == RECENT_EFFECTS {
                self.recent.pop_back();
            }
            self.recent.push_front((key, effect));
        }
    }
}
