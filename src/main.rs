//! Demonstration walk of a Planka server.
//!
//! Logs in, lists projects, then walks project → boards → cards → card
//! detail, printing each step.
//!
//! # Usage
//!
//! Set the connection environment variables and run:
//!
//! ```bash
//! export PLANKA_URL="https://planka.example.com"
//! export PLANKA_USERNAME="user@example.com"
//! export PLANKA_PASSWORD="..."
//! plankaclient
//! ```
//!
//! By default the walk descends into the first entry of each listing. Set
//! `PLANKA_PROJECT_ID`, `PLANKA_BOARD_ID`, or `PLANKA_CARD_ID` to pick a
//! specific one instead.

use plankaclient::{render, Error, PlankaClient};

/// Read a required environment variable.
fn required_env(name: &'static str) -> Result<String, Error> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingEnv(name))
}

/// Read an optional identifier override, falling back to the first listed id.
fn pick_id(override_var: &str, first: Option<&str>) -> Option<String> {
    std::env::var(override_var)
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| first.map(str::to_string))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = required_env("PLANKA_URL")?;
    let username = required_env("PLANKA_USERNAME")?;
    let password = required_env("PLANKA_PASSWORD")?;

    let mut client = PlankaClient::new(&base_url)?;
    client.login(&username, &password).await?;
    println!("Logged in to {}", client.base_url());

    let projects = client.list_projects().await?;
    print!("{}", render::projects(&projects));

    let Some(project_id) = pick_id("PLANKA_PROJECT_ID", projects.first().map(|p| p.id.as_str()))
    else {
        println!("No projects to walk into.");
        return Ok(());
    };

    let boards = client.list_boards(&project_id).await?;
    print!("{}", render::boards(&project_id, &boards));

    let Some(board_id) = pick_id("PLANKA_BOARD_ID", boards.first().map(|b| b.id.as_str())) else {
        println!("No boards to walk into.");
        return Ok(());
    };

    let cards = client.list_cards(&board_id).await?;
    print!("{}", render::cards(&board_id, &cards));

    let Some(card_id) = pick_id("PLANKA_CARD_ID", cards.first().map(|c| c.id.as_str())) else {
        println!("No cards to walk into.");
        return Ok(());
    };

    let detail = client.get_card(&card_id).await?;
    print!("{}", render::card_detail(&detail));

    let description = client.get_card_description(&card_id).await?;
    print!("{}", render::card_description(&card_id, description.as_deref()));

    Ok(())
}
