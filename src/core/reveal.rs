//! Scroll reveal model
//!
//! Elements start hidden and offset. The first time one is reported visible
//! its first-visible time is recorded, and from then on its style is the
//! revealed one. Nothing ever un-reveals, so repeated notifications are
//! harmless.

use std::collections::HashMap;

/// Fraction of an element that must be visible to trigger
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so elements trigger slightly before the edge
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Attribute carrying the tracker id of an observed element
pub const REVEAL_ID_ATTRIBUTE: &str = "data-reveal-id";

/// Groups of revealed elements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Section,
    Card,
    TimelineItem,
}

/// How stagger indices are assigned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerBasis {
    /// Position within one observer notification batch
    Batch,
    /// Position of the element within its group
    Group,
}

impl RevealKind {
    pub const ALL: [RevealKind; 3] = [
        RevealKind::Section,
        RevealKind::Card,
        RevealKind::TimelineItem,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            RevealKind::Section => ".section",
            RevealKind::Card => ".card",
            RevealKind::TimelineItem => ".timeline li",
        }
    }

    pub fn hidden_transform(&self) -> &'static str {
        match self {
            RevealKind::Section => "translateY(30px)",
            RevealKind::Card => "translateY(20px)",
            RevealKind::TimelineItem => "translateX(-20px)",
        }
    }

    pub fn revealed_transform(&self) -> &'static str {
        match self {
            RevealKind::Section | RevealKind::Card => "translateY(0)",
            RevealKind::TimelineItem => "translateX(0)",
        }
    }

    pub fn transition(&self) -> &'static str {
        match self {
            RevealKind::Section => "opacity 0.6s ease, transform 0.6s ease",
            RevealKind::Card | RevealKind::TimelineItem => {
                "opacity 0.5s ease, transform 0.5s ease"
            }
        }
    }

    pub fn stagger_step_ms(&self) -> u32 {
        match self {
            RevealKind::Section | RevealKind::TimelineItem => 150,
            RevealKind::Card => 100,
        }
    }

    pub fn stagger_basis(&self) -> StaggerBasis {
        match self {
            RevealKind::Section => StaggerBasis::Batch,
            RevealKind::Card | RevealKind::TimelineItem => StaggerBasis::Group,
        }
    }

    /// Delay before revealing the element at `index`
    pub fn stagger_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        index.saturating_mul(self.stagger_step_ms())
    }

    /// Stable id for the element at `index` within its group
    pub fn element_id(&self, index: usize) -> String {
        let prefix = match self {
            RevealKind::Section => "section",
            RevealKind::Card => "card",
            RevealKind::TimelineItem => "timeline",
        };
        format!("{}-{}", prefix, index)
    }
}

/// Inline style values of a revealable element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: &'static str,
}

pub fn reveal_style(kind: RevealKind, revealed: bool) -> RevealStyle {
    RevealStyle {
        opacity: if revealed { "1" } else { "0" },
        transform: if revealed {
            kind.revealed_transform()
        } else {
            kind.hidden_transform()
        },
        transition: kind.transition(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedElement {
    kind: RevealKind,
    /// Position within its group
    index: usize,
    first_visible_at: Option<f64>,
}

/// Reveal state of every observed element
#[derive(Debug, Default)]
pub struct RevealTracker {
    elements: HashMap<String, TrackedElement>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking the element at `index` of its group.
    ///
    /// Returns the style it should currently have, which is the hidden one
    /// unless it was already revealed.
    pub fn register(&mut self, id: impl Into<String>, kind: RevealKind, index: usize) -> RevealStyle {
        let element = self.elements.entry(id.into()).or_insert(TrackedElement {
            kind,
            index,
            first_visible_at: None,
        });
        reveal_style(element.kind, element.first_visible_at.is_some())
    }

    /// Record that `id` is visible at `now_ms`.
    ///
    /// Returns `true` only for the first sighting; later calls keep the
    /// original timestamp.
    pub fn mark_visible(&mut self, id: &str, now_ms: f64) -> bool {
        match self.elements.get_mut(id) {
            Some(element) if element.first_visible_at.is_none() => {
                element.first_visible_at = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Stagger delay for `id` when reported at `batch_position` of a notification
    pub fn stagger_delay_ms(&self, id: &str, batch_position: usize) -> Option<u32> {
        let element = self.elements.get(id)?;
        let index = match element.kind.stagger_basis() {
            StaggerBasis::Batch => batch_position,
            StaggerBasis::Group => element.index,
        };
        Some(element.kind.stagger_delay_ms(index))
    }

    pub fn first_visible_at(&self, id: &str) -> Option<f64> {
        self.elements.get(id).and_then(|e| e.first_visible_at)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.first_visible_at(id).is_some()
    }

    /// Target style for `id`, or `None` when it was never registered
    pub fn style_for(&self, id: &str) -> Option<RevealStyle> {
        self.elements
            .get(id)
            .map(|e| reveal_style(e.kind, e.first_visible_at.is_some()))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_styles() {
        let style = reveal_style(RevealKind::Section, false);
        assert_eq!(style.opacity, "0");
        assert_eq!(style.transform, "translateY(30px)");
        assert_eq!(style.transition, "opacity 0.6s ease, transform 0.6s ease");

        assert_eq!(
            reveal_style(RevealKind::TimelineItem, false).transform,
            "translateX(-20px)"
        );
    }

    #[test]
    fn test_revealed_styles() {
        let style = reveal_style(RevealKind::Card, true);
        assert_eq!(style.opacity, "1");
        assert_eq!(style.transform, "translateY(0)");

        assert_eq!(
            reveal_style(RevealKind::TimelineItem, true).transform,
            "translateX(0)"
        );
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(RevealKind::Card.stagger_delay_ms(0), 0);
        assert_eq!(RevealKind::Card.stagger_delay_ms(3), 300);
        assert_eq!(RevealKind::Section.stagger_delay_ms(2), 300);
        assert_eq!(RevealKind::TimelineItem.stagger_delay_ms(4), 600);
        assert_eq!(RevealKind::Card.stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_stagger_basis() {
        assert_eq!(RevealKind::Section.stagger_basis(), StaggerBasis::Batch);
        assert_eq!(RevealKind::Card.stagger_basis(), StaggerBasis::Group);
    }

    #[test]
    fn test_register_starts_hidden() {
        let mut tracker = RevealTracker::new();
        let style = tracker.register("card-0", RevealKind::Card, 0);

        assert_eq!(style, reveal_style(RevealKind::Card, false));
        assert!(!tracker.is_revealed("card-0"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_first_sighting_reveals() {
        let mut tracker = RevealTracker::new();
        tracker.register("section-1", RevealKind::Section, 1);

        assert!(tracker.mark_visible("section-1", 120.0));
        assert!(tracker.is_revealed("section-1"));
        assert_eq!(
            tracker.style_for("section-1"),
            Some(reveal_style(RevealKind::Section, true))
        );
    }

    #[test]
    fn test_repeated_sighting_is_idempotent() {
        let mut tracker = RevealTracker::new();
        tracker.register("timeline-2", RevealKind::TimelineItem, 2);

        assert!(tracker.mark_visible("timeline-2", 10.0));
        let once = tracker.style_for("timeline-2");

        assert!(!tracker.mark_visible("timeline-2", 900.0));
        assert_eq!(tracker.style_for("timeline-2"), once);
        assert_eq!(tracker.first_visible_at("timeline-2"), Some(10.0));
    }

    #[test]
    fn test_reregister_keeps_revealed_state() {
        let mut tracker = RevealTracker::new();
        tracker.register("card-3", RevealKind::Card, 3);
        tracker.mark_visible("card-3", 5.0);
        let style = tracker.register("card-3", RevealKind::Card, 3);

        assert!(tracker.is_revealed("card-3"));
        assert_eq!(style, reveal_style(RevealKind::Card, true));
    }

    #[test]
    fn test_tracker_stagger_delays() {
        let mut tracker = RevealTracker::new();
        tracker.register("card-4", RevealKind::Card, 4);
        tracker.register("section-5", RevealKind::Section, 5);

        // Cards stagger by group index, whatever the batch position
        assert_eq!(tracker.stagger_delay_ms("card-4", 0), Some(400));
        // Sections stagger by batch position
        assert_eq!(tracker.stagger_delay_ms("section-5", 1), Some(150));
        assert_eq!(tracker.stagger_delay_ms("missing", 1), None);
    }

    #[test]
    fn test_unknown_element() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.mark_visible("missing", 1.0));
        assert!(tracker.style_for("missing").is_none());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(RevealKind::Card.element_id(2), "card-2");
        assert_eq!(RevealKind::TimelineItem.element_id(0), "timeline-0");
        assert_eq!(RevealKind::Section.selector(), ".section");
        assert_eq!(RevealKind::TimelineItem.selector(), ".timeline li");
    }
}
