//! Subscriber side of the place stream.

use tokio::sync::watch;

use crate::models::FavoritePlace;

/// A restartable view of the place list.
///
/// Intermediate lists may be skipped when several writes land between two
/// polls; the list returned is always the latest committed one.
pub struct PlaceSubscription {
    receiver: watch::Receiver<Vec<FavoritePlace>>,
    primed: bool,
}

impl PlaceSubscription {
    pub(crate) fn new(receiver: watch::Receiver<Vec<FavoritePlace>>) -> Self {
        Self {
            receiver,
            primed: false,
        }
    }

    /// Waits for the next list. The first call returns the current snapshot
    /// without waiting. Returns `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<Vec<FavoritePlace>> {
        if !self.primed {
            self.primed = true;
            return Some(self.receiver.borrow_and_update().clone());
        }

        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// True when a list has been published since the last one returned.
    pub fn has_changed(&self) -> bool {
        !self.primed || self.receiver.has_changed().unwrap_or(false)
    }

    /// Returns the latest list without waiting and marks it as seen.
    pub fn latest(&mut self) -> Vec<FavoritePlace> {
        self.primed = true;
        self.receiver.borrow_and_update().clone()
    }
}
