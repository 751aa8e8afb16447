//! Interactive folder tree browser.
//!
//! Talks to a running Arbor server over the REST API via
//! [`arbor_client::TreeBrowser`]; children are fetched lazily as folders
//! are opened, and mutations refetch only the listing they touched.

use clap::Args;
use dialoguer::{Confirm, Input, Select};
use uuid::Uuid;

use arbor_client::{ApiClient, TreeBrowser};
use arbor_core::error::AppError;

/// Arguments for the browse command
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Override the API base URL from configuration
    #[arg(long)]
    pub api_url: Option<String>,
}

/// Execute the browse command
pub async fn execute(args: &BrowseArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    if let Some(url) = &args.api_url {
        config.client.api_url = url.clone();
    }

    let client = ApiClient::new(&config.client)?;
    let mut browser = TreeBrowser::new(client);
    browser.load_roots().await?;

    // Breadcrumb from the root to the folder currently being listed.
    let mut path: Vec<(Uuid, String)> = Vec::new();

    loop {
        let parent = path.last().map(|(id, _)| *id);
        if let Some(id) = parent {
            browser.expand(id).await?;
        }

        let location = if path.is_empty() {
            "/".to_string()
        } else {
            format!(
                "/{}",
                path.iter()
                    .map(|(_, name)| name.as_str())
                    .collect::<Vec<_>>()
                    .join("/")
            )
        };

        let entries: Vec<(Uuid, String)> = browser
            .entries(parent)
            .iter()
            .map(|f| (f.id, f.name.clone()))
            .collect();

        let up_offset = usize::from(!path.is_empty());
        let mut items: Vec<String> = Vec::new();
        if up_offset == 1 {
            items.push("../".to_string());
        }
        items.extend(entries.iter().map(|(_, name)| format!("{name}/")));
        items.push("[new folder]".to_string());
        items.push("[tree]".to_string());
        items.push("[refresh]".to_string());
        items.push("[quit]".to_string());

        let selection = Select::new()
            .with_prompt(location)
            .items(&items)
            .default(0)
            .interact()
            .map_err(input_error)?;

        if selection < up_offset {
            path.pop();
        } else if selection < up_offset + entries.len() {
            let (folder_id, folder_name) = entries[selection - up_offset].clone();
            folder_menu(&mut browser, &mut path, parent, folder_id, folder_name).await?;
        } else {
            match selection - up_offset - entries.len() {
                0 => {
                    let name: String = Input::new()
                        .with_prompt("Folder name")
                        .interact_text()
                        .map_err(input_error)?;
                    let folder = browser.create(&name, parent).await?;
                    crate::output::print_success(&format!(
                        "Folder '{}' created (id: {})",
                        folder.name, folder.id
                    ));
                }
                1 => match parent {
                    Some(id) => {
                        let node = browser.subtree(id).await?;
                        print_node(&node, 0);
                    }
                    None => {
                        for (id, _) in &entries {
                            let node = browser.subtree(*id).await?;
                            print_node(&node, 0);
                        }
                    }
                },
                2 => browser.refresh(parent).await?,
                _ => break,
            }
        }
    }

    Ok(())
}

/// Per-folder action menu: open, rename, or delete the selected entry.
async fn folder_menu(
    browser: &mut TreeBrowser,
    path: &mut Vec<(Uuid, String)>,
    parent: Option<Uuid>,
    folder_id: Uuid,
    folder_name: String,
) -> Result<(), AppError> {
    let action = Select::new()
        .with_prompt(format!("{folder_name}/"))
        .items(&["Open", "Rename", "Delete", "Cancel"])
        .default(0)
        .interact()
        .map_err(input_error)?;

    match action {
        0 => {
            browser.open(folder_id).await?;
            path.push((folder_id, folder_name));
        }
        1 => {
            let new_name: String = Input::new()
                .with_prompt("New name")
                .with_initial_text(&folder_name)
                .interact_text()
                .map_err(input_error)?;
            browser.rename(folder_id, &new_name, parent).await?;
            crate::output::print_success(&format!("Renamed to '{new_name}'"));
        }
        2 => {
            let confirm = Confirm::new()
                .with_prompt(format!(
                    "Delete '{folder_name}'? Folders inside it will be orphaned."
                ))
                .default(false)
                .interact()
                .map_err(input_error)?;
            if confirm {
                browser.delete(folder_id, parent).await?;
                crate::output::print_success(&format!("Folder '{folder_name}' deleted"));
            }
        }
        _ => {}
    }

    Ok(())
}

fn input_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {err}"))
}

fn print_node(node: &arbor_entity::folder::FolderNode, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}├── {}/", indent, node.name);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
