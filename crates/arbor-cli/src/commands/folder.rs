//! Folder management CLI commands.
//!
//! These commands work directly against the database; use `browse` for
//! the API-backed tree view.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use arbor_core::error::AppError;
use arbor_database::repositories::folder::FolderRepository;
use arbor_entity::folder::{CreateFolder, Folder, FolderNode, UpdateFolder};
use arbor_service::folder::service::FolderService;
use arbor_service::folder::tree::TreeService;

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List root folders
    List,
    /// List direct children of a folder
    Children {
        /// Folder ID
        id: String,
    },
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent_id: Option<String>,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder (descendants are left in place)
    Delete {
        /// Folder ID
        id: String,
    },
    /// Show the subtree rooted at a folder
    Tree {
        /// Folder ID
        id: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Parent ID
    parent: String,
    /// Created at
    created_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            parent: f
                .parent_id
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            created_at: f.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let folder_repo = Arc::new(FolderRepository::new(pool.clone()));
    let folder_service = FolderService::new(Arc::clone(&folder_repo));

    match &args.command {
        FolderCommand::List => {
            let folders = folder_service.list_roots().await?;
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Children { id } => {
            let folder_id = parse_uuid(id)?;
            let folders = folder_service.list_children(folder_id).await?;
            let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Create { name, parent_id } => {
            let parent_id = parent_id.as_deref().map(parse_uuid).transpose()?;

            let folder = folder_service
                .create_folder(CreateFolder {
                    parent_id,
                    name: name.clone(),
                })
                .await?;

            output::print_success(&format!("Folder '{}' created (id: {})", name, folder.id));
        }
        FolderCommand::Rename { id, name } => {
            let folder_id = parse_uuid(id)?;

            let folder = folder_service
                .update_folder(
                    folder_id,
                    UpdateFolder {
                        name: Some(name.clone()),
                        parent_id: None,
                    },
                )
                .await?;

            output::print_success(&format!("Folder {} renamed to '{}'", folder.id, folder.name));
        }
        FolderCommand::Delete { id } => {
            let folder_id = parse_uuid(id)?;
            let orphans = folder_repo.count_children(folder_id).await?;
            folder_service.delete_folder(folder_id).await?;
            if orphans > 0 {
                output::print_success(&format!(
                    "Folder {} deleted ({} child folders orphaned)",
                    folder_id, orphans
                ));
            } else {
                output::print_success(&format!("Folder {} deleted", folder_id));
            }
        }
        FolderCommand::Tree { id } => {
            let folder_id = parse_uuid(id)?;
            let tree_service = TreeService::new(Arc::clone(&folder_repo));
            let tree = tree_service.get_subtree(folder_id).await?;
            print_tree(&tree, 0);
        }
    }

    Ok(())
}

fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid UUID: {s}")))
}

fn print_tree(node: &FolderNode, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}├── {}/", indent, node.name);
    for child in &node.children {
        print_tree(child, depth + 1);
    }
}
