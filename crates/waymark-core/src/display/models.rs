//! Display implementations for domain models.

use std::fmt;

use crate::{
    controller::Notice,
    interaction::InteractionState,
    models::{Annotation, Camera, Coordinate, FavoritePlace, IconKind, MapStyle, MarkerCommand},
};

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude(), self.longitude())
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconKind::Normal => write!(f, "normal"),
            IconKind::Alert => write!(f, "alert"),
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FavoritePlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_alert { "🚨" } else { "📍" };
        writeln!(f, "# {}. {} {}", self.id, marker, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Location: {}", self.coordinate)?;
        writeln!(
            f,
            "- Type: {}",
            if self.is_alert { "alert" } else { "normal" }
        )
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} icon `{}` at {} (size {})",
            self.kind,
            self.kind.image_id(),
            self.coordinate,
            self.size
        )
    }
}

impl fmt::Display for MarkerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerCommand::Create { key, annotation } => {
                write!(f, "+ {key}: {annotation}")
            }
            MarkerCommand::Resize { key, size } => write!(f, "~ {key}: size {size}"),
            MarkerCommand::Destroy { key } => write!(f, "- {key}"),
        }
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.center {
            Some(center) => write!(f, "{} at zoom {} ({})", center, self.zoom, self.style),
            None => write!(f, "zoom {} ({})", self.zoom, self.style),
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionState::Idle => write!(f, "idle"),
            InteractionState::ChoosingPointType { coordinate } => {
                write!(f, "choosing point type for {coordinate}")
            }
            InteractionState::NamingPlace(pending) => write!(
                f,
                "naming {} point at {}",
                if pending.is_alert { "alert" } else { "normal" },
                pending.coordinate
            ),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Ignored => write!(f, "Nothing to do here."),
            Notice::DialogChanged => write!(f, "OK"),
            Notice::MarkerName(name) => write!(f, "📍 {name}"),
            Notice::Saved(place) => write!(f, "Saved place '{}' (ID: {})", place.name, place.id),
            Notice::Deleted { id, removed: true } => write!(f, "Deleted place {id}"),
            Notice::Deleted { id, removed: false } => write!(f, "Place {id} was already gone"),
            Notice::ZoomChanged(zoom) => write!(f, "Zoom {zoom}"),
            Notice::Recentered(center) => write!(f, "Centered on {center}"),
            Notice::LocationUnavailable => write!(f, "Location unavailable"),
            Notice::StyleChanged(style) => write!(f, "Style: {style}"),
            Notice::WentTo(place) => write!(f, "Centered on '{}'", place.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MarkerKey;

    fn place(is_alert: bool) -> FavoritePlace {
        FavoritePlace {
            id: 3,
            name: "Station".to_string(),
            coordinate: Coordinate::new(52.52, 13.405).unwrap(),
            is_alert,
        }
    }

    #[test]
    fn test_place_display() {
        let output = place(false).to_string();
        assert!(output.starts_with("# 3. 📍 Station"));
        assert!(output.contains("- Location: 52.520000, 13.405000"));
        assert!(output.contains("- Type: normal"));

        assert!(place(true).to_string().contains("🚨"));
    }

    #[test]
    fn test_marker_command_display() {
        let create = MarkerCommand::Create {
            key: MarkerKey::Place(3),
            annotation: Annotation {
                coordinate: Coordinate::new(1.0, 2.0).unwrap(),
                kind: IconKind::Alert,
                size: 0.8,
            },
        };
        assert_eq!(
            create.to_string(),
            "+ place:3: alert icon `alert_marker` at 1.000000, 2.000000 (size 0.8)"
        );

        let destroy = MarkerCommand::Destroy {
            key: MarkerKey::Pending,
        };
        assert_eq!(destroy.to_string(), "- pending");
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::Deleted {
                id: 4,
                removed: false
            }
            .to_string(),
            "Place 4 was already gone"
        );
        assert_eq!(Notice::MarkerName("Home".into()).to_string(), "📍 Home");
    }
}
