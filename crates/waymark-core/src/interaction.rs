//! Dialog state for adding a place by tapping the map.
//!
//! ```text
//!            tap                 choose(normal|alert)
//!   Idle ──────────▶ ChoosingPointType ──────────▶ NamingPlace
//!    ▲                      │                         │
//!    └──── dismiss ─────────┘                         │
//!    └──────────── confirm(name) / cancel / dismiss ──┘
//! ```
//!
//! The machine never touches storage. A successful confirm hands back an
//! [`Outcome::Persist`] with the validated place and the caller performs
//! the insert.

use serde::Serialize;

use crate::{
    error::Result,
    models::{Coordinate, NewPlace, PendingPoint},
};

/// The two buttons of the point type dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    Normal,
    Alert,
}

impl PointType {
    pub fn is_alert(&self) -> bool {
        matches!(self, PointType::Alert)
    }
}

/// Which modal dialog is open, and what it holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    ChoosingPointType { coordinate: Coordinate },
    NamingPlace(PendingPoint),
}

/// Result of feeding one event to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event does not apply in the current state; nothing changed.
    Ignored,
    /// The state changed without side effects.
    Moved,
    /// The naming dialog was confirmed; the place must be inserted.
    Persist(NewPlace),
}

/// Resident state machine for the map screen dialogs.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The point under naming, if the naming dialog is open.
    pub fn pending(&self) -> Option<PendingPoint> {
        match self.state {
            InteractionState::NamingPlace(pending) => Some(pending),
            _ => None,
        }
    }

    /// A tap on empty map opens the point type dialog. Taps while a dialog
    /// is open are ignored.
    pub fn tap(&mut self, coordinate: Coordinate) -> Outcome {
        match self.state {
            InteractionState::Idle => {
                self.state = InteractionState::ChoosingPointType { coordinate };
                Outcome::Moved
            }
            _ => Outcome::Ignored,
        }
    }

    pub fn choose(&mut self, point_type: PointType) -> Outcome {
        match self.state {
            InteractionState::ChoosingPointType { coordinate } => {
                self.state = InteractionState::NamingPlace(PendingPoint {
                    coordinate,
                    is_alert: point_type.is_alert(),
                });
                Outcome::Moved
            }
            _ => Outcome::Ignored,
        }
    }

    /// Confirms the naming dialog.
    ///
    /// # Errors
    ///
    /// An empty or blank name is rejected and the dialog stays open with the
    /// same pending point.
    pub fn confirm(&mut self, name: &str) -> Result<Outcome> {
        let InteractionState::NamingPlace(pending) = self.state else {
            return Ok(Outcome::Ignored);
        };

        let place = NewPlace::at(name, pending.coordinate, pending.is_alert)?;
        self.state = InteractionState::Idle;
        Ok(Outcome::Persist(place))
    }

    pub fn cancel(&mut self) -> Outcome {
        match self.state {
            InteractionState::NamingPlace(_) => {
                self.state = InteractionState::Idle;
                Outcome::Moved
            }
            _ => Outcome::Ignored,
        }
    }

    /// Closes whatever dialog is open. Safe to call repeatedly.
    pub fn dismiss(&mut self) -> Outcome {
        match self.state {
            InteractionState::Idle => Outcome::Ignored,
            _ => {
                self.state = InteractionState::Idle;
                Outcome::Moved
            }
        }
    }

    /// Reopens the naming dialog for a point whose insert failed.
    pub fn reopen(&mut self, pending: PendingPoint) {
        self.state = InteractionState::NamingPlace(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate() -> Coordinate {
        Coordinate::new(40.4168, -3.7038).expect("valid coordinate")
    }

    #[test]
    fn test_starts_idle() {
        let interaction = Interaction::new();
        assert_eq!(interaction.state(), InteractionState::Idle);
        assert_eq!(interaction.pending(), None);
    }

    #[test]
    fn test_tap_opens_point_type_dialog() {
        let mut interaction = Interaction::new();
        assert_eq!(interaction.tap(coordinate()), Outcome::Moved);
        assert_eq!(
            interaction.state(),
            InteractionState::ChoosingPointType {
                coordinate: coordinate()
            }
        );
    }

    #[test]
    fn test_alert_flow_persists_alert_place() {
        let mut interaction = Interaction::new();
        interaction.tap(coordinate());
        assert_eq!(interaction.choose(PointType::Alert), Outcome::Moved);
        assert_eq!(
            interaction.pending(),
            Some(PendingPoint {
                coordinate: coordinate(),
                is_alert: true
            })
        );

        let outcome = interaction.confirm("Park").expect("valid name");
        let Outcome::Persist(place) = outcome else {
            panic!("expected a persist outcome, got {outcome:?}");
        };
        assert_eq!(place.name, "Park");
        assert!(place.is_alert);
        assert_eq!(place.coordinate, coordinate());
        assert_eq!(interaction.state(), InteractionState::Idle);
    }

    #[test]
    fn test_normal_choice_clears_alert_flag() {
        let mut interaction = Interaction::new();
        interaction.tap(coordinate());
        interaction.choose(PointType::Normal);
        assert_eq!(interaction.pending().map(|p| p.is_alert), Some(false));
    }

    #[test]
    fn test_empty_name_keeps_dialog_open() {
        let mut interaction = Interaction::new();
        interaction.tap(coordinate());
        interaction.choose(PointType::Normal);
        let before = interaction.state();

        let err = interaction.confirm("  ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(interaction.state(), before);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut interaction = Interaction::new();
        interaction.tap(coordinate());
        interaction.choose(PointType::Alert);
        assert_eq!(interaction.cancel(), Outcome::Moved);
        assert_eq!(interaction.state(), InteractionState::Idle);
    }

    #[test]
    fn test_dismiss_twice_is_safe() {
        let mut interaction = Interaction::new();
        interaction.tap(coordinate());
        assert_eq!(interaction.dismiss(), Outcome::Moved);
        assert_eq!(interaction.dismiss(), Outcome::Ignored);
        assert_eq!(interaction.state(), InteractionState::Idle);
    }

    #[test]
    fn test_dismiss_closes_naming_dialog() {
        let mut interaction = Interaction::new();
        interaction.tap(coordinate());
        interaction.choose(PointType::Normal);
        assert_eq!(interaction.dismiss(), Outcome::Moved);
        assert_eq!(interaction.pending(), None);
    }

    #[test]
    fn test_out_of_order_events_are_ignored() {
        let mut interaction = Interaction::new();
        assert_eq!(interaction.choose(PointType::Alert), Outcome::Ignored);
        assert_eq!(interaction.cancel(), Outcome::Ignored);
        assert_eq!(interaction.confirm("Home").unwrap(), Outcome::Ignored);

        interaction.tap(coordinate());
        let other = Coordinate::new(0.0, 0.0).unwrap();
        assert_eq!(interaction.tap(other), Outcome::Ignored);
        assert_eq!(interaction.confirm("Home").unwrap(), Outcome::Ignored);
        assert_eq!(
            interaction.state(),
            InteractionState::ChoosingPointType {
                coordinate: coordinate()
            }
        );
    }

    #[test]
    fn test_reopen_restores_pending_point() {
        let mut interaction = Interaction::new();
        let pending = PendingPoint {
            coordinate: coordinate(),
            is_alert: true,
        };
        interaction.reopen(pending);
        assert_eq!(interaction.pending(), Some(pending));
    }
}
