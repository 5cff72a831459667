//! # Domain Catalog
//!
//! The closed set of domains a user can scope idea generation to, plus the
//! static label/icon table the selector renders from.
//!
//! `Domain::ALL` is the order the dropdown lists entries in. The table never
//! changes at runtime.

use serde::{Deserialize, Serialize};

/// A category the user picks before describing their problem.
///
/// Serializes as its label (`"Tech"`, `"Health"`, ...), which is also what the
/// idea service expects in the request body.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Tech,
    Health,
    Education,
    Finance,
    Business,
    Environment,
    Science,
    Arts,
    Media,
    Travel,
    Food,
    Security,
}

/// One row of the catalog as shown in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainEntry {
    pub domain: Domain,
    pub label: &'static str,
    pub icon: &'static str,
}

impl Domain {
    /// Every domain, in dropdown order.
    pub const ALL: [Domain; 12] = [
        Domain::Tech,
        Domain::Health,
        Domain::Education,
        Domain::Finance,
        Domain::Business,
        Domain::Environment,
        Domain::Science,
        Domain::Arts,
        Domain::Media,
        Domain::Travel,
        Domain::Food,
        Domain::Security,
    ];

    /// Returns the display label (identical to the wire name).
    pub fn label(self) -> &'static str {
        match self {
            Domain::Tech => "Tech",
            Domain::Health => "Health",
            Domain::Education => "Education",
            Domain::Finance => "Finance",
            Domain::Business => "Business",
            Domain::Environment => "Environment",
            Domain::Science => "Science",
            Domain::Arts => "Arts",
            Domain::Media => "Media",
            Domain::Travel => "Travel",
            Domain::Food => "Food",
            Domain::Security => "Security",
        }
    }

    /// Returns the glyph drawn next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            Domain::Tech => "</>",
            Domain::Health => "♥",
            Domain::Education => "🎓",
            Domain::Finance => "$",
            Domain::Business => "💼",
            Domain::Environment => "🌿",
            Domain::Science => "🔬",
            Domain::Arts => "♫",
            Domain::Media => "📷",
            Domain::Travel => "✈",
            Domain::Food => "☕",
            Domain::Security => "🔒",
        }
    }

    pub fn entry(self) -> DomainEntry {
        DomainEntry {
            domain: self,
            label: self.label(),
            icon: self.icon(),
        }
    }

    /// Position of this domain in `Domain::ALL`.
    pub fn index(self) -> usize {
        Domain::ALL
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default()
    }
}

/// Iterates the catalog in dropdown order.
pub fn catalog() -> impl Iterator<Item = DomainEntry> {
    Domain::ALL.into_iter().map(Domain::entry)
}
