//! Collapsible sections for the Event-Pattern-Structure analysis.

use crate::narrative::{BulletGroup, EVENTS, PATTERNS, STRUCTURES};

/// A titled block whose body is hidden until toggled open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableSection {
    pub title: &'static str,
    pub groups: &'static [BulletGroup],
    expanded: bool,
}

impl ExpandableSection {
    /// A new section starts collapsed.
    pub fn new(title: &'static str, groups: &'static [BulletGroup]) -> Self {
        Self {
            title,
            groups,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Number of body lines shown when expanded: one per heading and item.
    pub fn body_len(&self) -> usize {
        self.groups
            .iter()
            .map(|g| g.items.len() + usize::from(g.heading.is_some()))
            .sum()
    }
}

/// The three analysis sections, all collapsed.
pub fn analysis_sections() -> Vec<ExpandableSection> {
    vec![
        ExpandableSection::new("Events (Visible Symptoms)", &EVENTS),
        ExpandableSection::new("Patterns (Recurring Trends)", &PATTERNS),
        ExpandableSection::new("Structures (Root Causes)", &STRUCTURES),
    ]
}
