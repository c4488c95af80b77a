use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    action::Action,
    infrastructure::{
        config::Config,
        tui::{Event, TuiLike},
    },
    presentation::components::{Component, CountdownSlide, StatusBar},
};

/// Event loop hosting the countdown slide.
///
/// Terminal events become actions, ticker messages arrive on the same
/// channel, and every action is offered to each component in turn.
pub struct App {
    config: Config,
    components: Vec<Box<dyn Component>>,
    should_quit: bool,
    should_suspend: bool,
    last_tick_key_events: Vec<KeyEvent>,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
    loaded: bool,
    expired: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let slide = CountdownSlide::new(config.countdown());
        let status_bar = StatusBar::default();
        Self::with_components(config, vec![Box::new(slide), Box::new(status_bar)])
    }

    pub fn with_components(config: Config, components: Vec<Box<dyn Component>>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            config,
            components,
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            action_tx,
            action_rx,
            loaded: false,
            expired: false,
        }
    }

    pub fn action_sender(&self) -> UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the slide has announced itself as loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether the countdown has run out since the last (re)configuration
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn init<T: TuiLike + ?Sized>(&mut self, tui: &mut T) -> Result<()> {
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(self.action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        let size = tui.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        for component in self.components.iter_mut() {
            component.init(area)?;
        }

        Ok(())
    }

    pub async fn run<T: TuiLike + ?Sized>(&mut self, tui: &mut T) -> Result<()> {
        self.init(tui)?;

        loop {
            let Some(event) = tui.next().await else {
                log::info!("event source closed");
                break;
            };
            self.handle_event(event)?;
            self.process_actions(tui)?;

            if self.should_suspend {
                tui.suspend()?;
                tui.resume()?;
                self.should_suspend = false;
                self.action_tx.send(Action::Resume)?;
            } else if self.should_quit {
                break;
            }
        }

        self.shutdown(tui)
    }

    /// Turn one terminal event into actions.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit | Event::Closed => self.action_tx.send(Action::Quit)?,
            Event::Tick => self.action_tx.send(Action::Tick)?,
            Event::Render => self.action_tx.send(Action::Render)?,
            Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
            Event::Key(key) => self.handle_key(key)?,
            _ => {}
        }

        for component in self.components.iter_mut() {
            if let Some(action) = component.handle_events(Some(event.clone()))? {
                self.action_tx.send(action)?;
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.action_tx.send(Action::Key(key))?;

        if let Some(action) = self.config.keybindings.get(&vec![key]) {
            log::info!("Got action: {action:?}");
            self.action_tx.send(action.clone())?;
        } else {
            // Not a single-key binding; try it as part of a sequence.
            self.last_tick_key_events.push(key);
            if let Some(action) = self.config.keybindings.get(&self.last_tick_key_events) {
                log::info!("Got action: {action:?}");
                self.action_tx.send(action.clone())?;
            }
        }
        Ok(())
    }

    /// Drain queued actions, reacting as the host and dispatching to components.
    pub fn process_actions<T: TuiLike + ?Sized>(&mut self, tui: &mut T) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if !action.is_frequent() {
                log::debug!("{action:?}");
            }

            match action {
                Action::Tick => self.last_tick_key_events.clear(),
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::Resize(w, h) => {
                    tui.resize(Rect::new(0, 0, w, h))?;
                    self.render(tui)?;
                }
                Action::Render => self.render(tui)?,
                Action::SlideDidLoad => {
                    log::info!("slide loaded");
                    self.loaded = true;
                }
                Action::CountdownExpired => {
                    log::info!("countdown expired");
                    self.expired = true;
                }
                Action::Restart | Action::Configure(_) => self.expired = false,
                Action::Error(ref message) => log::error!("{message}"),
                _ => {}
            }

            for component in self.components.iter_mut() {
                if let Some(action) = component.update(action.clone())? {
                    self.action_tx.send(action)?;
                }
            }
        }
        Ok(())
    }

    fn render<T: TuiLike + ?Sized>(&mut self, tui: &mut T) -> Result<()> {
        let components = &mut self.components;
        let action_tx = &self.action_tx;
        tui.draw(&mut |f| {
            let area = f.area();
            for component in components.iter_mut() {
                if let Err(e) = component.draw(f, area) {
                    if action_tx
                        .send(Action::Error(format!("Failed to draw: {e:?}")))
                        .is_err()
                    {
                        log::error!("Failed to draw: {e:?}");
                    }
                }
            }
        })
    }

    fn shutdown<T: TuiLike + ?Sized>(&mut self, tui: &mut T) -> Result<()> {
        for component in self.components.iter_mut() {
            component.unmount()?;
        }
        tui.exit()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::countdown::CountdownConfig;
    use crate::infrastructure::tui::test::TestTui;

    fn config(countdown: CountdownConfig) -> Config {
        let mut config = Config::defaults().unwrap();
        config.countdown = Some(countdown);
        config
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_quit_key_ends_loop() {
        let mut app = App::new(config(CountdownConfig::new(0, 0, 5, 0)));
        let mut tui = TestTui::with_events(60, 16, [Event::Render, key('q'), Event::Render]).unwrap();

        app.run(&mut tui).await.unwrap();

        assert!(app.should_quit());
        assert!(app.is_loaded());
        assert!(!tui.is_entered());
        assert_eq!(tui.draw_count(), 1);
    }

    #[tokio::test]
    async fn test_multi_key_sequence() {
        let mut config = config(CountdownConfig::new(0, 0, 5, 0));
        config.keybindings.insert(
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ],
            Action::Quit,
        );
        let mut app = App::new(config);
        let mut tui = TestTui::new(60, 16).unwrap();
        app.init(&mut tui).unwrap();

        app.handle_event(key('g')).unwrap();
        app.process_actions(&mut tui).unwrap();
        assert!(!app.should_quit());

        app.handle_event(key('g')).unwrap();
        app.process_actions(&mut tui).unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_tick_resets_key_sequence() {
        let mut config = config(CountdownConfig::new(0, 0, 5, 0));
        config.keybindings.insert(
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ],
            Action::Quit,
        );
        let mut app = App::new(config);
        let mut tui = TestTui::new(60, 16).unwrap();
        app.init(&mut tui).unwrap();

        for event in [key('g'), Event::Tick, key('g')] {
            app.handle_event(event).unwrap();
            app.process_actions(&mut tui).unwrap();
        }
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_suspend_and_resume() {
        let mut app = App::new(config(CountdownConfig::new(0, 0, 5, 0)));
        let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let mut tui = TestTui::with_events(60, 16, [ctrl_z, key('q')]).unwrap();

        app.run(&mut tui).await.unwrap();

        assert_eq!(tui.suspend_count(), 1);
        assert!(app.should_quit());
    }
}
