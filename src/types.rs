//! Type definitions for Planka API responses.
//!
//! Planka wraps single objects in `{"item": ...}` and collections in
//! `{"items": [...]}`. Detail responses additionally carry related
//! sub-resources under an `included` key; a missing `included` key (or a
//! missing collection inside it) deserializes to an empty list.

use serde::Deserialize;

/// Generic wrapper for Planka single-object responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemWrapper<T> {
    /// The wrapped item.
    pub item: T,
}

/// Generic wrapper for Planka collection responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsWrapper<T> {
    /// The list of items.
    pub items: Vec<T>,
}

/// A project, as returned by the projects listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// The unique identifier.
    pub id: String,

    /// The project name.
    pub name: String,
}

/// A board embedded in a project detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    /// The unique identifier.
    pub id: String,

    /// The board name. Embedded board entries may omit it.
    #[serde(default)]
    pub name: Option<String>,
}

/// A card, embedded in a board detail response or returned as card detail.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    /// The unique identifier.
    pub id: String,

    /// The card name.
    #[serde(default)]
    pub name: Option<String>,

    /// The card description, if one has been set.
    #[serde(default)]
    pub description: Option<String>,
}

/// A checklist task on a card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The task name.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the task is done. Absent means not completed.
    #[serde(default)]
    pub is_completed: bool,
}

/// A file attached to a card.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// The attachment name.
    #[serde(default)]
    pub name: Option<String>,

    /// The download URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// Project detail response with its embedded boards.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDetail {
    /// The project itself.
    pub item: Project,

    /// Related sub-resources.
    #[serde(default)]
    pub included: ProjectIncluded,
}

/// Sub-resources embedded in a project detail response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectIncluded {
    /// The boards belonging to the project.
    #[serde(default)]
    pub boards: Vec<Board>,
}

/// Board detail response with its embedded cards.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardDetail {
    /// The board itself.
    pub item: Board,

    /// Related sub-resources.
    #[serde(default)]
    pub included: BoardIncluded,
}

/// Sub-resources embedded in a board detail response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardIncluded {
    /// The cards on the board.
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Card detail response with its embedded tasks and attachments.
#[derive(Debug, Clone, Deserialize)]
pub struct CardDetail {
    /// The card itself.
    pub item: Card,

    /// Related sub-resources.
    #[serde(default)]
    pub included: CardIncluded,
}

/// Sub-resources embedded in a card detail response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardIncluded {
    /// The checklist tasks on the card.
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// The files attached to the card.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
