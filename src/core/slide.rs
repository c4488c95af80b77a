//! Hooks a deck calls on its slides

use color_eyre::eyre::Result;

/// Lifecycle surface shared by every slide a deck can host.
///
/// Content hooks default to no-ops and transitions are always allowed;
/// slides override what they need.
pub trait Slide {
    /// Asked before the deck moves away from (or onto) this slide.
    fn before_transition(&mut self, _entering: bool, _revealing: bool) -> bool {
        true
    }

    /// Called once the deck has moved on.
    fn after_transition(&mut self) -> Result<()> {
        Ok(())
    }

    fn lazy_load_content(&mut self) -> Result<()> {
        Ok(())
    }

    fn reveal_content(&mut self) -> Result<()> {
        Ok(())
    }

    fn hide_content(&mut self) -> Result<()> {
        Ok(())
    }

    fn start(&mut self) -> Result<()>;

    fn stop(&mut self) -> Result<()>;
}
