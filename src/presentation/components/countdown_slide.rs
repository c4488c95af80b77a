use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    action::Action,
    core::{
        countdown::{Countdown, CountdownConfig, TickOutcome},
        display::{self, Figure},
        slide::Slide,
    },
    infrastructure::{
        config::Config,
        ticker::{StartError, Ticker},
        tui::Frame,
    },
    presentation::{
        components::Component,
        config::{SlideSlots, Styles},
        widgets::SlideWidget,
    },
};

pub type Clock = fn() -> DateTime<Utc>;

/// Countdown slide: owns the countdown, its timer and the slide content.
///
/// Every configuration change goes through [`CountdownSlide::configure`],
/// which stops the timer, recomputes the countdown and starts it again.
pub struct CountdownSlide {
    config: CountdownConfig,
    countdown: Countdown,
    ticker: Ticker,
    slots: SlideSlots,
    styles: Styles,
    action_tx: Option<UnboundedSender<Action>>,
    loaded: bool,
    clock: Clock,
}

impl CountdownSlide {
    pub fn new(config: CountdownConfig) -> Self {
        Self {
            config,
            countdown: Countdown::default(),
            ticker: Ticker::default(),
            slots: SlideSlots::default(),
            styles: Styles::default(),
            action_tx: None,
            loaded: false,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ticker(mut self, ticker: Ticker) -> Self {
        self.ticker = ticker;
        self
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn visible_figures(&self) -> [Figure; 3] {
        display::visible_figures(&self.countdown)
    }

    /// Initialise from the current config, start counting and announce
    /// the slide as loaded the first time.
    pub fn mount(&mut self) -> Result<()> {
        self.reset()?;
        if !self.loaded {
            self.loaded = true;
            log::info!("countdown slide loaded");
            self.emit(Action::SlideDidLoad)?;
        }
        Ok(())
    }

    /// Replace the countdown inputs and start over from scratch.
    pub fn configure(&mut self, config: CountdownConfig) -> Result<()> {
        log::info!("countdown reconfigured: {config:?}");
        self.config = config;
        self.reset()
    }

    pub fn set_days(&mut self, days: i64) -> Result<()> {
        self.configure(CountdownConfig {
            days,
            ..self.config.clone()
        })
    }

    pub fn set_hours(&mut self, hours: i64) -> Result<()> {
        self.configure(CountdownConfig {
            hours,
            ..self.config.clone()
        })
    }

    pub fn set_minutes(&mut self, minutes: i64) -> Result<()> {
        self.configure(CountdownConfig {
            minutes,
            ..self.config.clone()
        })
    }

    pub fn set_seconds(&mut self, seconds: i64) -> Result<()> {
        self.configure(CountdownConfig {
            seconds,
            ..self.config.clone()
        })
    }

    pub fn set_until(&mut self, until: Option<String>) -> Result<()> {
        self.configure(CountdownConfig {
            until,
            ..self.config.clone()
        })
    }

    /// Stop, recompute the countdown from the config and start again.
    pub fn reset(&mut self) -> Result<()> {
        self.ticker.stop();
        self.countdown = Countdown::initialize(&self.config, (self.clock)());
        log::debug!(
            "countdown initialized to {} seconds",
            self.countdown.total_seconds()
        );
        self.start_timer()
    }

    /// Apply one timer firing. Firings from a cancelled timer are dropped.
    pub fn handle_tick(&mut self, generation: u64) -> Result<()> {
        if !self.ticker.accepts(generation) {
            log::trace!("dropping tick from stale timer {generation}");
            return Ok(());
        }

        match self.countdown.tick() {
            TickOutcome::Counted => {}
            TickOutcome::Finished | TickOutcome::Idle => {
                self.ticker.stop();
                log::info!("countdown finished");
                self.emit(Action::CountdownExpired)?;
                self.emit(Action::SystemMessage("Time is up".to_owned()))?;
            }
        }
        Ok(())
    }

    fn start_timer(&mut self) -> Result<()> {
        match self.ticker.start() {
            Ok(generation) => {
                log::info!(
                    "countdown started with {} seconds left (timer {generation})",
                    self.countdown.total_seconds()
                );
                self.emit(Action::SystemMessage("Counting down".to_owned()))
            }
            Err(e @ StartError::AlreadyRunning { .. }) => {
                log::warn!("start ignored: {e}");
                self.emit(Action::SystemMessage("Already running".to_owned()))
            }
            Err(e @ StartError::NoHandler) => Err(e.into()),
        }
    }

    fn emit(&self, action: Action) -> Result<()> {
        if let Some(tx) = &self.action_tx {
            tx.send(action)?;
        }
        Ok(())
    }
}

impl Slide for CountdownSlide {
    fn after_transition(&mut self) -> Result<()> {
        self.stop()
    }

    fn start(&mut self) -> Result<()> {
        if self.countdown.is_finished() {
            log::warn!("start ignored: countdown already at zero");
            return Ok(());
        }
        self.start_timer()
    }

    fn stop(&mut self) -> Result<()> {
        if self.ticker.stop() {
            self.emit(Action::SystemMessage("Stopped".to_owned()))?;
        }
        Ok(())
    }
}

impl Component for CountdownSlide {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.ticker.register_action_handler(tx.clone());
        self.action_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.slots = config.slots;
        self.styles = config.styles;
        Ok(())
    }

    fn init(&mut self, _area: Rect) -> Result<()> {
        self.mount()
    }

    fn unmount(&mut self) -> Result<()> {
        self.stop()
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::TimerTick(generation) => self.handle_tick(generation)?,
            Action::Start => Slide::start(self)?,
            Action::Stop => Slide::stop(self)?,
            Action::Restart => self.reset()?,
            Action::Configure(config) => self.configure(config)?,
            Action::NavigateAway => {
                if self.before_transition(false, false) {
                    self.after_transition()?;
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [slide, _status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        f.render_widget(
            SlideWidget::new(&self.countdown, &self.slots, &self.styles),
            slide,
        );
        Ok(())
    }
}
