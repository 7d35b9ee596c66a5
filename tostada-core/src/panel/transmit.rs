//! Transmission to the toaster controller

use super::{PanelState, SendOutcome};
use crate::traits::ShadeLink;

impl PanelState {
    /// Send the selection if it differs from the last shade sent
    ///
    /// The last-sent shade is updated after every attempt, successful or
    /// not. A failed write is reported but never retried.
    pub fn send_if_changed<L>(&mut self, link: &mut L) -> SendOutcome
    where
        L: ShadeLink + ?Sized,
    {
        let shade = self.selection;
        if self.last_sent == Some(shade) {
            return SendOutcome::Unchanged;
        }

        let result = link.send(shade);
        self.last_sent = Some(shade);

        match result {
            Ok(()) => SendOutcome::Sent(shade),
            Err(e) => SendOutcome::Failed(shade, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::MockLink;
    use super::*;
    use crate::shade::Shade;
    use crate::traits::LinkError;

    #[test]
    fn test_first_send_always_transmits() {
        let mut state = PanelState::default();
        let mut link = MockLink::new();

        assert_eq!(state.last_sent(), None);
        assert_eq!(state.send_if_changed(&mut link), SendOutcome::Sent(Shade::Light));
        assert_eq!(link.sent, vec![0x00]);
        assert_eq!(state.last_sent(), Some(Shade::Light));
    }

    #[test]
    fn test_repeat_send_is_suppressed() {
        let mut state = PanelState::default();
        let mut link = MockLink::new();

        state.send_if_changed(&mut link);
        for _ in 0..5 {
            assert_eq!(state.send_if_changed(&mut link), SendOutcome::Unchanged);
        }
        assert_eq!(link.sent.len(), 1);
    }

    #[test]
    fn test_failed_send_marks_as_sent() {
        let mut state = PanelState::default();
        state.selection = Shade::Dark;
        let mut link = MockLink::new();
        link.fail_with = Some(LinkError::Timeout);

        let outcome = state.send_if_changed(&mut link);
        assert_eq!(outcome, SendOutcome::Failed(Shade::Dark, LinkError::Timeout));
        assert_eq!(outcome.attempted(), Some(Shade::Dark));
        assert_eq!(state.last_sent(), Some(Shade::Dark));

        link.fail_with = None;
        assert_eq!(state.send_if_changed(&mut link), SendOutcome::Unchanged);
        assert!(link.sent.is_empty());
    }

    #[test]
    fn test_change_after_send_transmits_again() {
        let mut state = PanelState::default();
        let mut link = MockLink::new();

        state.send_if_changed(&mut link);
        state.selection = Shade::Medium;
        state.send_if_changed(&mut link);
        state.selection = Shade::Light;
        state.send_if_changed(&mut link);

        assert_eq!(link.sent, vec![0x00, 0x01, 0x00]);
        assert_eq!(SendOutcome::Unchanged.attempted(), None);
    }
}
