//! Notification seam for phase rollovers.
//!
//! The state machine reports rollovers; what happens then (a bell,
//! nothing at all) is the caller's choice of [`Chime`].

use std::io::Write;

#[cfg(test)]
use mockall::automock;

/// Notified when the countdown rolls into a new phase.
#[cfg_attr(test, automock)]
pub trait Chime {
    /// Ring once.
    fn ring(&mut self);
}

/// Rings the terminal bell.
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn ring(&mut self) {
        print!("\x07");
        let _ = std::io::stdout().flush();
    }
}

/// Discards notifications. Used when sound is disabled.
pub struct Silent;

impl Chime for Silent {
    fn ring(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_chime_is_noop() {
        let mut chime = Silent;
        chime.ring();
    }

    #[test]
    fn test_mock_chime_counts_rings() {
        let mut chime = MockChime::new();
        chime.expect_ring().times(2).return_const(());

        chime.ring();
        chime.ring();
    }
}
