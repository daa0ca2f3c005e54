mod content;
mod logging;

use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flexi_logger::LoggerHandle;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{DefaultTerminal, Frame, layout::Rect};
use streaks_config::Config;
use streaks_core::{Bounds, Viewport};
use streaks_field::{FieldState, GridLayout, RebuildTrigger, Scheduler};

use crate::content::ContentCard;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let logger = start_logging();
    let config = Config::load();
    if let Some(handle) = &logger {
        logging::apply_level(handle, &config.log_level);
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    if let Err(err) = &result {
        warn!("event=app_exit status=error error={err}");
    } else {
        info!("event=app_exit status=ok");
    }
    result
}

/// Logging is best effort; the backdrop runs without it.
fn start_logging() -> Option<LoggerHandle> {
    let dir = Config::log_dir()?;
    match logging::init("info", &dir) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("streaks: logging disabled: {err}");
            None
        }
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Start of the run; all timers count milliseconds from here.
    started: Instant,
    layout: GridLayout,
    layout_rng: StdRng,
    scheduler: Scheduler<StdRng>,
    field: FieldState,
    trigger: RebuildTrigger,
    card: ContentCard,
    /// Card position used by the last rebuild.
    card_rect: Option<Rect>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let (layout_rng, flip_rng) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), StdRng::from_entropy()),
        };

        let layout = GridLayout::new(config.grid, config.exclusion);
        let elements = layout.elements();
        let scheduler = Scheduler::new(elements.clone(), config.animation, flip_rng);
        let field = FieldState::new(
            elements,
            config.animation.transition_ms,
            config.color_theme,
        );
        let trigger = RebuildTrigger::new(config.trigger.debounce_ms, config.trigger.policy);
        let card = ContentCard::new(config.content, config.color_theme);

        Self {
            running: false,
            started: Instant::now(),
            layout,
            layout_rng,
            scheduler,
            field,
            trigger,
            card,
            card_rect: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();

        // Lay out once up front instead of waiting out the debounce window.
        let size = terminal.size()?;
        self.rebuild(Viewport::new(size.width as f32, size.height as f32));

        while self.running {
            let now_ms = self.elapsed_ms();
            if let Some(viewport) = self.trigger.poll(now_ms) {
                self.rebuild(viewport);
            }
            self.scheduler.poll(now_ms);

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Replace the streak set for `viewport`, keeping clear of the card.
    fn rebuild(&mut self, viewport: Viewport) {
        let area = Rect::new(0, 0, viewport.width as u16, viewport.height as u16);
        self.card_rect = self.card.area(area);
        let content = self.card_rect.map(Bounds::from);
        self.layout.rebuild(viewport, content, &mut self.layout_rng);
        self.trigger.mark_built(viewport);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.field.render(frame, self.elapsed_ms());

        // A height-only resize skips the rebuild, so the card stays where the
        // exclusion zone is. Hide it if the terminal shrank past it.
        let area = frame.area();
        if let Some(rect) = self.card_rect
            && rect.right() <= area.right()
            && rect.bottom() <= area.bottom()
        {
            self.card.render(frame, rect, Local::now());
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so flip transitions animate smoothly.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => {
                    let viewport = Viewport::new(width as f32, height as f32);
                    self.trigger.invalidate(viewport, self.elapsed_ms());
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
