use std::io;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::SetTitle,
};
use log::{info, warn};
use nightsky_config::Config;
use nightsky_core::ScreenSize;
use nightsky_scene::{Scene, Surface, paint};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{DefaultTerminal, Frame};

mod logging;

/// Terminal title while the sky is shown.
const TITLE: &str = "Looking up at the sky...";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Before loading config, so its records are captured.
    if let Some(path) = logging::init() {
        info!("logging to {}", path.display());
    }
    let config = Config::load()?;

    let terminal = ratatui::init();
    let result = start(terminal, &config);
    ratatui::restore();
    result
}

/// Capture the screen size once and hand the terminal to the [`App`].
fn start(mut terminal: DefaultTerminal, config: &Config) -> color_eyre::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, SetTitle(TITLE))?;
    let size = terminal.size()?;
    let screen = ScreenSize::from_cells(size.width, size.height);
    App::new(config, screen).run(terminal)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Stars and meteors.
    scene: Scene,
    /// Off-screen frame the scene is painted into.
    surface: Surface,
    /// Random source for spawning.
    rng: StdRng,
    /// Wall-clock length of one tick.
    tick_interval: Duration,
    /// Number of completed ticks.
    ticks: u64,
}

impl App {
    /// Construct a new instance of [`App`] for a screen of the given size.
    pub fn new(config: &Config, screen: ScreenSize) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let params = config.scene_params(screen);
        info!(
            "screen {}x{} px, {} stars per tier, meteor chance {}",
            screen.width, screen.height, params.num_stars, params.meteor_chance
        );

        let scene = Scene::new(screen, params, &mut rng);
        let mut surface = Surface::for_screen(screen);
        paint(&scene, &mut surface);

        Self {
            running: true,
            scene,
            surface,
            rng,
            tick_interval: config.tick_interval(),
            ticks: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            self.wait_for_tick();
            if self.tick() {
                terminal.draw(|frame| self.render(frame))?;
            }
        }
        info!("stopped after {} ticks", self.ticks);
        Ok(())
    }

    /// Advance the scene and repaint the surface.
    ///
    /// Returns `false` without touching the scene once the app has stopped.
    fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.scene.advance(&mut self.rng);
        paint(&self.scene, &mut self.surface);
        self.ticks += 1;
        true
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.surface, frame.area());
    }

    /// Wait out one tick interval while handling input.
    ///
    /// Input errors are logged and the rest of the interval is slept, so a
    /// failing event source never stops the animation.
    fn wait_for_tick(&mut self) {
        let deadline = Instant::now() + self.tick_interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match event::poll(remaining) {
                Ok(true) => {}
                Ok(false) => return,
                Err(err) => {
                    warn!("waiting for input failed: {err}");
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    return;
                }
            }

            match event::read() {
                Ok(event) => self.on_event(event),
                Err(err) => warn!("reading input failed: {err}"),
            }
            if !self.running || Instant::now() >= deadline {
                return;
            }
        }
    }

    /// Dispatch a terminal event. Only key presses matter.
    fn on_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.on_key_event(key);
        }
    }

    /// Any key press quits.
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Press {
            self.quit();
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind};

    fn test_app() -> App {
        let config = Config {
            seed: Some(99),
            ..Config::default()
        };
        App::new(&config, ScreenSize::new(300, 200))
    }

    #[test]
    fn test_app_starts_running() {
        let app = test_app();
        assert!(app.running);
        assert_eq!(app.ticks, 0);
        assert_eq!(app.scene.near_stars().len(), 20);
        assert_eq!(app.surface.width(), 300);
        assert_eq!(app.surface.height(), 200);
    }

    #[test]
    fn test_tick_advances_scene() {
        let mut app = test_app();
        assert!(app.tick());
        assert!(app.tick());
        assert_eq!(app.ticks, 2);
        assert_eq!(app.scene.far_stars().len(), 20);
    }

    #[test]
    fn test_any_key_quits() {
        for code in [KeyCode::Char('a'), KeyCode::Enter, KeyCode::Esc, KeyCode::F(5)] {
            let mut app = test_app();
            app.on_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
            assert!(!app.running);
        }
    }

    #[test]
    fn test_no_ticks_after_key_press() {
        let mut app = test_app();
        assert!(app.tick());
        let stars = app.scene.near_stars().to_vec();

        app.on_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));

        assert!(!app.tick());
        assert_eq!(app.ticks, 1);
        assert_eq!(app.scene.near_stars(), stars.as_slice());
    }

    #[test]
    fn test_key_release_and_mouse_ignored() {
        let mut app = test_app();
        app.on_event(Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        )));
        app.on_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }));
        app.on_event(Event::Resize(10, 10));
        assert!(app.running);
    }
}
