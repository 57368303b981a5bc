//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::SharedError;

/// Unique identifier for a draw session
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of an internal skill as listed in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Internal,
    External,
    Healer,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Internal => "internal",
            ItemKind::External => "external",
            ItemKind::Healer => "healer",
        }
    }

    /// Category used by the team draw quota
    pub fn category(&self) -> Category {
        match self {
            ItemKind::Healer => Category::Healer,
            ItemKind::Internal | ItemKind::External => Category::NonHealer,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Healer / non-healer split relevant to the team draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Healer,
    NonHealer,
}

/// A drawable item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub image: String,
}

impl Item {
    pub fn new(id: &str, name: &str, kind: ItemKind, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            image: image.to_string(),
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn is_healer(&self) -> bool {
        self.category() == Category::Healer
    }
}

/// Draw mode selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    #[default]
    Single,
    Team,
    Custom,
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawMode::Single => write!(f, "single"),
            DrawMode::Team => write!(f, "team"),
            DrawMode::Custom => write!(f, "custom"),
        }
    }
}

impl FromStr for DrawMode {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(DrawMode::Single),
            "team" => Ok(DrawMode::Team),
            "custom" => Ok(DrawMode::Custom),
            _ => Err(SharedError::UnknownMode { input: s.to_string() }),
        }
    }
}

/// One drawn entry as handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub id: String,
    pub name: String,
    /// Image reference, absent for custom labels
    pub image: Option<String>,
    /// Absent for custom labels, which carry no healer distinction
    pub category: Option<Category>,
    /// Roster slot index (team draws only)
    pub slot: Option<usize>,
    /// Roster label of the slot (team draws only)
    pub member: Option<String>,
}

impl DrawResult {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image: Some(item.image.clone()),
            category: Some(item.category()),
            slot: None,
            member: None,
        }
    }

    pub fn for_slot(item: &Item, slot: usize, member: &str) -> Self {
        Self {
            slot: Some(slot),
            member: Some(member.to_string()),
            ..Self::from_item(item)
        }
    }

    pub fn is_healer(&self) -> bool {
        self.category == Some(Category::Healer)
    }
}

/// Outcome of a single user-triggered draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "results", rename_all = "lowercase")]
pub enum DrawOutcome {
    Single(DrawResult),
    Team(Vec<DrawResult>),
}

impl DrawOutcome {
    pub fn results(&self) -> &[DrawResult] {
        match self {
            DrawOutcome::Single(result) => std::slice::from_ref(result),
            DrawOutcome::Team(results) => results,
        }
    }
}
