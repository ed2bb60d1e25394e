//! CLI administration tool for user-api.
//!
//! Manages users and checks the database directly, without going through the
//! HTTP API. Operations share validation and conflict handling with the API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- users list
//!
//! # Create a user
//! cargo run --bin admin -- users create alice alice@example.com
//!
//! # Delete a user (asks for confirmation unless --yes)
//! cargo run --bin admin -- users delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).
//! Service logs honor `RUST_LOG` and `LOG_FORMAT` and go to stderr, so they
//! never mix with the command output on stdout.

use user_api::application::services::UserService;
use user_api::config::{self, Config};
use user_api::infrastructure::persistence::PgUserRepository;
use user_api::logging::init_tracing;
use user_api::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = UserService<PgUserRepository>;

/// CLI tool for managing user-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Create a new user
    Create {
        /// Unique user name
        user_name: String,

        /// Email address
        email: String,
    },

    /// Delete a user by ID
    Delete {
        /// User ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config: Config = config::load_from_env()?;
    init_tracing(&config, std::io::stderr);

    let pool = Arc::new(connect_pool(&config).await?);
    let service = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));

    match cli.command {
        Commands::Users { action } => handle_user_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, service: &Service) -> Result<()> {
    match action {
        UserAction::List => list_users(service).await,
        UserAction::Create { user_name, email } => create_user(service, user_name, email).await,
        UserAction::Delete { id, yes } => delete_user(service, id, yes).await,
    }
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   ID    User name                 Email
///   ──────────────────────────────────────────────────────────────
///   1     alice                     alice@example.com
/// ```
async fn list_users(service: &Service) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = service.list_users().await?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin users create <name> <email>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<25} {}",
        "ID".bright_white().bold(),
        "User name".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<25} {}",
            user.id.to_string().bright_black(),
            user.user_name.cyan(),
            user.email
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a user with the same checks as `POST /users`.
async fn create_user(service: &Service, user_name: String, email: String) -> Result<()> {
    println!("{}", "➕ Create User".bright_blue().bold());
    println!();

    let user = service.create_user(user_name, email).await?;

    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID:        {}", user.id.to_string().bright_white().bold());
    println!("  User name: {}", user.user_name.cyan());
    println!("  Email:     {}", user.email);
    println!();

    Ok(())
}

/// Deletes a user with a confirmation prompt (default: No).
async fn delete_user(service: &Service, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();
    println!("  ID: {}", id.to_string().bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete_user(id).await?;

    println!("{}", "✅ Done (no-op if the user did not exist)".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            service.check_database().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
