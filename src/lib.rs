//! Planka API Client
//!
//! This crate provides a client for the Planka project-management REST API:
//! log in with credentials, list projects, walk into a project's boards and a
//! board's cards, and fetch card detail including checklist tasks and
//! attachments. It can be used as a library or run as a demonstration binary
//! that walks the hierarchy and prints each step.
//!
//! # Example
//!
//! ```rust,no_run
//! use plankaclient::PlankaClient;
//!
//! # async fn example() -> Result<(), plankaclient::Error> {
//! let mut client = PlankaClient::new("https://planka.example.com")?;
//! client.login("user@example.com", "password").await?;
//!
//! for project in client.list_projects().await? {
//!     println!("{} ({})", project.name, project.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod render;
pub mod types;

// Re-export main types at crate root
pub use client::PlankaClient;
pub use error::Error;

// Re-export commonly used types
pub use types::{Attachment, Board, BoardDetail, Card, CardDetail, Project, ProjectDetail, Task};
