//! Console formatting for fetched Planka entities.
//!
//! Kept separate from the client so the output text is unit-testable and the
//! library itself never prints.

use std::fmt::Write;

use crate::types::{Board, Card, CardDetail, Project};

const NO_NAME: &str = "No name";
const NO_DESCRIPTION: &str = "no description";

/// Format the projects listing.
pub fn projects(projects: &[Project]) -> String {
    let mut out = String::from("=== Projects ===\n");
    for project in projects {
        let _ = writeln!(out, "Name: {}", project.name);
        let _ = writeln!(out, "ID: {}", project.id);
        out.push_str("---\n");
    }
    out
}

/// Format the boards of a project.
pub fn boards(project_id: &str, boards: &[Board]) -> String {
    let mut out = format!("=== Boards in project {project_id} ===\n");
    for board in boards {
        let _ = writeln!(out, "Name: {}", board.name.as_deref().unwrap_or(NO_NAME));
        let _ = writeln!(out, "ID: {}", board.id);
        out.push_str("---\n");
    }
    out
}

/// Format the cards on a board.
pub fn cards(board_id: &str, cards: &[Card]) -> String {
    let mut out = format!("=== Cards on board {board_id} ===\n");
    for card in cards {
        let _ = writeln!(out, "Name: {}", card.name.as_deref().unwrap_or(NO_NAME));
        let _ = writeln!(out, "ID: {}", card.id);
        out.push_str("---\n");
    }
    out
}

/// Format a card with its tasks and attachments.
pub fn card_detail(detail: &CardDetail) -> String {
    let mut out = format!("=== Card {} ===\n", detail.item.id);
    let _ = writeln!(out, "Name: {}", detail.item.name.as_deref().unwrap_or(NO_NAME));
    let _ = writeln!(
        out,
        "Description: {}",
        detail.item.description.as_deref().unwrap_or(NO_DESCRIPTION)
    );

    if !detail.included.tasks.is_empty() {
        out.push_str("\n[Tasks]\n");
        for task in &detail.included.tasks {
            let marker = if task.is_completed { "✓" } else { "□" };
            let _ = writeln!(out, "{marker} {}", task.name.as_deref().unwrap_or(NO_NAME));
        }
    }

    if !detail.included.attachments.is_empty() {
        out.push_str("\n[Attachments]\n");
        for attachment in &detail.included.attachments {
            let _ = writeln!(out, "- {}", attachment.name.as_deref().unwrap_or(NO_NAME));
            if let Some(url) = &attachment.url {
                let _ = writeln!(out, "  URL: {url}");
            }
        }
    }

    out
}

/// Format a card description, substituting a placeholder when unset.
pub fn card_description(card_id: &str, description: Option<&str>) -> String {
    format!(
        "=== Description of card {card_id} ===\n{}\n",
        description.unwrap_or(NO_DESCRIPTION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attachment, CardIncluded, Task};

    #[test]
    fn test_projects_listing_order_and_values() {
        let list = vec![
            Project {
                id: "p1".to_string(),
                name: "Store management".to_string(),
            },
            Project {
                id: "p2".to_string(),
                name: "Website".to_string(),
            },
        ];

        let out = projects(&list);

        assert_eq!(
            out,
            "=== Projects ===\n\
             Name: Store management\nID: p1\n---\n\
             Name: Website\nID: p2\n---\n"
        );
    }

    #[test]
    fn test_boards_unnamed_entry_gets_placeholder() {
        let list = vec![Board {
            id: "b1".to_string(),
            name: None,
        }];

        let out = boards("p1", &list);

        assert!(out.contains("Name: No name"));
        assert!(out.contains("ID: b1"));
    }

    #[test]
    fn test_card_detail_task_markers() {
        let detail = CardDetail {
            item: Card {
                id: "c1".to_string(),
                name: Some("Restock".to_string()),
                description: Some("Back aisle first".to_string()),
            },
            included: CardIncluded {
                tasks: vec![
                    Task {
                        name: Some("Count stock".to_string()),
                        is_completed: true,
                    },
                    Task {
                        name: Some("Place order".to_string()),
                        is_completed: false,
                    },
                ],
                attachments: vec![],
            },
        };

        let out = card_detail(&detail);

        assert!(out.contains("✓ Count stock"));
        assert!(out.contains("□ Place order"));
        assert!(!out.contains("[Attachments]"));
    }

    #[test]
    fn test_card_detail_attachments() {
        let detail = CardDetail {
            item: Card {
                id: "c1".to_string(),
                name: Some("Restock".to_string()),
                description: None,
            },
            included: CardIncluded {
                tasks: vec![],
                attachments: vec![Attachment {
                    name: Some("stock.csv".to_string()),
                    url: Some("https://example.com/stock.csv".to_string()),
                }],
            },
        };

        let out = card_detail(&detail);

        assert!(out.contains("Description: no description"));
        assert!(out.contains("- stock.csv"));
        assert!(out.contains("  URL: https://example.com/stock.csv"));
        assert!(!out.contains("[Tasks]"));
    }

    #[test]
    fn test_card_description_placeholder() {
        let out = card_description("c1", None);
        assert_eq!(out, "=== Description of card c1 ===\nno description\n");
    }

    #[test]
    fn test_card_description_present() {
        let out = card_description("c1", Some("Back aisle first"));
        assert!(out.ends_with("Back aisle first\n"));
    }
}
