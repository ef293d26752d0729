//! Anteroom CLI entry point.
//!
//! Admin surface over the studio site backend: `status`, `messages`
//! (inbox), and `projects` (portfolio CRUD) subcommands.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use anteroom::backend::{BackendClient, Project, ProjectDraft};
use anteroom::config::AnteroomConfig;
use anteroom::inbox::render;
use anteroom::inbox::watch::spawn_inbox_watcher;
use anteroom::logging;

/// Anteroom — admin CLI for the studio site backend.
#[derive(Parser)]
#[command(name = "anteroom", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Check backend health.
    Status,
    /// Contact inbox operations.
    Messages {
        /// Inbox operation to run.
        #[command(subcommand)]
        command: MessagesCommand,
    },
    /// Portfolio project operations.
    Projects {
        /// Portfolio operation to run.
        #[command(subcommand)]
        command: ProjectsCommand,
    },
}

/// Inbox subcommands.
#[derive(Subcommand)]
enum MessagesCommand {
    /// List submissions.
    List {
        /// Maximum number to fetch (defaults to the configured page size).
        #[arg(long)]
        limit: Option<usize>,
        /// Show unread submissions only.
        #[arg(long)]
        unread: bool,
    },
    /// Show one submission in full.
    Show {
        /// Submission id.
        id: String,
    },
    /// Mark a submission read.
    Read {
        /// Submission id.
        id: String,
    },
    /// Delete a submission.
    Delete {
        /// Submission id.
        id: String,
    },
    /// Poll for new submissions and print them as they arrive.
    Watch {
        /// Seconds between polls.
        #[arg(long, default_value_t = 30)]
        interval_secs: u64,
    },
}

/// Portfolio subcommands.
#[derive(Subcommand)]
enum ProjectsCommand {
    /// List projects.
    List,
    /// Show one project.
    Show {
        /// Project id.
        id: String,
    },
    /// Create a project.
    Add {
        /// Display title.
        #[arg(long)]
        title: String,
        /// Short description.
        #[arg(long, default_value = "")]
        description: String,
        /// Category label.
        #[arg(long)]
        category: Option<String>,
        /// Cover image URL.
        #[arg(long)]
        image_url: Option<String>,
        /// External case-study link.
        #[arg(long)]
        link: Option<String>,
    },
    /// Update fields on an existing project.
    Update {
        /// Project id.
        id: String,
        /// Fields to change; omitted flags keep their current value.
        #[command(flatten)]
        fields: ProjectFlags,
    },
    /// Delete a project.
    Remove {
        /// Project id.
        id: String,
    },
}

/// Optional project field flags for `projects update`.
#[derive(Args)]
struct ProjectFlags {
    /// Display title.
    #[arg(long)]
    title: Option<String>,
    /// Short description.
    #[arg(long)]
    description: Option<String>,
    /// Category label.
    #[arg(long)]
    category: Option<String>,
    /// Cover image URL.
    #[arg(long)]
    image_url: Option<String>,
    /// External case-study link.
    #[arg(long)]
    link: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AnteroomConfig::load().context("failed to load configuration")?;

    // `watch` runs long enough to deserve file logs; everything else is
    // one-shot and logs to stderr only.
    let wants_file_log = matches!(
        &cli.command,
        Command::Messages {
            command: MessagesCommand::Watch { .. }
        }
    );
    let _log_guard = if wants_file_log {
        Some(logging::init_with_file(Path::new(&config.paths.logs_dir))?)
    } else {
        logging::init_console();
        None
    };

    let client = BackendClient::from_config(&config.backend)?;

    match cli.command {
        Command::Status => handle_status(&client).await,
        Command::Messages { command } => handle_messages(&client, &config, command).await,
        Command::Projects { command } => handle_projects(&client, command).await,
    }
}

/// Check backend health and report the outcome.
async fn handle_status(client: &BackendClient) -> anyhow::Result<()> {
    if client.health_check().await {
        println!("backend ok: {}", client.base_url());
        Ok(())
    } else {
        anyhow::bail!("backend unreachable at {}", client.base_url())
    }
}

/// Run an inbox subcommand.
async fn handle_messages(
    client: &BackendClient,
    config: &AnteroomConfig,
    command: MessagesCommand,
) -> anyhow::Result<()> {
    match command {
        MessagesCommand::List { limit, unread } => {
            let limit = limit.unwrap_or(config.backend.page_size);
            let records = client
                .list_messages(limit)
                .await
                .context("failed to fetch inbox")?;
            let mut shown: usize = 0;
            for record in &records {
                if unread && record.is_read() {
                    continue;
                }
                println!("{}", render::summary_line(record));
                shown = shown.saturating_add(1);
            }
            info!(fetched = records.len(), shown, "inbox listed");
            Ok(())
        }
        MessagesCommand::Show { id } => {
            let records = client
                .list_messages(config.backend.page_size)
                .await
                .context("failed to fetch inbox")?;
            let record = records
                .iter()
                .find(|r| r.id() == Some(id.as_str()))
                .with_context(|| format!("no submission with id {id}"))?;
            println!("{}", render::detail_block(record));
            Ok(())
        }
        MessagesCommand::Read { id } => {
            client.mark_read(&id).await?;
            println!("marked read: {id}");
            Ok(())
        }
        MessagesCommand::Delete { id } => {
            client.delete_message(&id).await?;
            println!("deleted: {id}");
            Ok(())
        }
        MessagesCommand::Watch { interval_secs } => {
            println!(
                "watching inbox at {} (every {interval_secs}s, ctrl-c to stop)",
                client.base_url()
            );
            let (handle, mut rx) = spawn_inbox_watcher(
                client.clone(),
                Duration::from_secs(interval_secs),
                config.backend.page_size,
            );
            while let Some(record) = rx.recv().await {
                println!("{}", render::summary_line(&record));
            }
            handle.await.context("inbox watcher task failed")?;
            Ok(())
        }
    }
}

/// Run a portfolio subcommand.
async fn handle_projects(client: &BackendClient, command: ProjectsCommand) -> anyhow::Result<()> {
    match command {
        ProjectsCommand::List => {
            let projects = client
                .list_projects()
                .await
                .context("failed to fetch projects")?;
            for project in &projects {
                println!("{}", project_line(project));
            }
            info!(count = projects.len(), "projects listed");
            Ok(())
        }
        ProjectsCommand::Show { id } => {
            let project = client.get_project(&id).await?;
            println!("{}", project_detail(&project));
            Ok(())
        }
        ProjectsCommand::Add {
            title,
            description,
            category,
            image_url,
            link,
        } => {
            let draft = ProjectDraft {
                title,
                description,
                category,
                image_url,
                link,
            };
            let created = client.create_project(&draft).await?;
            println!("created project {}", created.id);
            Ok(())
        }
        ProjectsCommand::Update { id, fields } => {
            let existing = client.get_project(&id).await?;
            let mut draft = ProjectDraft::from(existing);
            if let Some(title) = fields.title {
                draft.title = title;
            }
            if let Some(description) = fields.description {
                draft.description = description;
            }
            if fields.category.is_some() {
                draft.category = fields.category;
            }
            if fields.image_url.is_some() {
                draft.image_url = fields.image_url;
            }
            if fields.link.is_some() {
                draft.link = fields.link;
            }
            let updated = client.update_project(&id, &draft).await?;
            println!("updated project {}", updated.id);
            Ok(())
        }
        ProjectsCommand::Remove { id } => {
            client.delete_project(&id).await?;
            println!("deleted project {id}");
            Ok(())
        }
    }
}

/// One-line listing for a project.
fn project_line(project: &Project) -> String {
    let category = project.category.as_deref().unwrap_or("-");
    format!("{}  [{category}]  {}", project.id, project.title)
}

/// Multi-line detail for a project.
fn project_detail(project: &Project) -> String {
    let mut lines = vec![
        format!("Id:          {}", project.id),
        format!("Title:       {}", project.title),
        format!("Description: {}", project.description),
    ];
    if let Some(category) = &project.category {
        lines.push(format!("Category:    {category}"));
    }
    if let Some(image_url) = &project.image_url {
        lines.push(format!("Image:       {image_url}"));
    }
    if let Some(link) = &project.link {
        lines.push(format!("Link:        {link}"));
    }
    if let Some(created_at) = &project.created_at {
        lines.push(format!("Created:     {}", created_at.to_rfc3339()));
    }
    lines.join("\n")
}
