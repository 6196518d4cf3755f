//! Derives renderer commands from the place list.
//!
//! The reconciler is the only record of what is on the map. It is rebuilt
//! from store snapshots, so there is no second cache of annotations that
//! could drift from the database.

use std::collections::BTreeMap;

use log::debug;

use crate::models::{
    icon_size, Annotation, FavoritePlace, IconKind, MarkerCommand, MarkerKey, PendingPoint,
};

#[derive(Debug, Clone)]
struct RenderedMarker {
    annotation: Annotation,
    name: Option<String>,
}

/// Tracks the rendered marker set and computes the minimal command list to
/// move it to a new state.
#[derive(Debug, Clone)]
pub struct MarkerReconciler {
    zoom: f64,
    markers: BTreeMap<MarkerKey, RenderedMarker>,
}

impl MarkerReconciler {
    /// Creates an empty reconciler for the given initial zoom.
    pub fn new(zoom: f64) -> Self {
        Self {
            zoom,
            markers: BTreeMap::new(),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Currently rendered markers in key order.
    pub fn annotations(&self) -> Vec<(MarkerKey, Annotation)> {
        self.markers
            .iter()
            .map(|(key, marker)| (*key, marker.annotation))
            .collect()
    }

    /// Display name of a rendered marker, used for the tap notification.
    /// The pending marker has no name yet.
    pub fn name_of(&self, key: MarkerKey) -> Option<&str> {
        self.markers.get(&key)?.name.as_deref()
    }

    /// Brings the rendered set in line with `places` plus the optional
    /// pending point.
    ///
    /// Markers whose key disappeared are destroyed, new keys are created and
    /// markers that are still backed by the same record are left alone.
    /// Destroys come first, then creates, each in key order.
    pub fn reconcile(
        &mut self,
        places: &[FavoritePlace],
        pending: Option<&PendingPoint>,
    ) -> Vec<MarkerCommand> {
        let size = icon_size(self.zoom);
        let mut desired: BTreeMap<MarkerKey, RenderedMarker> = places
            .iter()
            .map(|place| {
                let marker = RenderedMarker {
                    annotation: Annotation {
                        coordinate: place.coordinate,
                        kind: IconKind::for_alert(place.is_alert),
                        size,
                    },
                    name: Some(place.name.clone()),
                };
                (MarkerKey::Place(place.id), marker)
            })
            .collect();

        if let Some(pending) = pending {
            desired.insert(
                MarkerKey::Pending,
                RenderedMarker {
                    annotation: Annotation {
                        coordinate: pending.coordinate,
                        kind: IconKind::for_alert(pending.is_alert),
                        size,
                    },
                    name: None,
                },
            );
        }

        let mut destroys = Vec::new();
        let mut creates = Vec::new();

        for (key, current) in &self.markers {
            let kept = desired
                .get(key)
                .is_some_and(|next| same_marker(current, next));
            if !kept {
                destroys.push(MarkerCommand::Destroy { key: *key });
            }
        }

        for (key, next) in &desired {
            let unchanged = self
                .markers
                .get(key)
                .is_some_and(|current| same_marker(current, next));
            if !unchanged {
                creates.push(MarkerCommand::Create {
                    key: *key,
                    annotation: next.annotation,
                });
            }
        }

        if !destroys.is_empty() || !creates.is_empty() {
            debug!(
                "Reconciled markers: {} destroyed, {} created, {} total",
                destroys.len(),
                creates.len(),
                desired.len()
            );
        }

        self.markers = desired;
        destroys.extend(creates);
        destroys
    }

    /// Records a zoom change and resizes every rendered marker in place.
    pub fn set_zoom(&mut self, zoom: f64) -> Vec<MarkerCommand> {
        if zoom == self.zoom {
            return Vec::new();
        }

        self.zoom = zoom;
        let size = icon_size(zoom);
        self.markers
            .iter_mut()
            .map(|(key, marker)| {
                marker.annotation.size = size;
                MarkerCommand::Resize { key: *key, size }
            })
            .collect()
    }
}

// Size follows the zoom, so only position and icon decide identity.
fn same_marker(a: &RenderedMarker, b: &RenderedMarker) -> bool {
    a.annotation.coordinate == b.annotation.coordinate
        && a.annotation.kind == b.annotation.kind
        && a.name == b.name
}
