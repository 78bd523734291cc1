//! CLI administration tool for bloglist.
//!
//! Manages users, prints blog statistics, and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing values)
//! cargo run --bin admin -- user create --username mluukkai
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Delete a user by id
//! cargo run --bin admin -- user delete 3
//!
//! # Like statistics over all blogs
//! cargo run --bin admin -- blog stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same environment variables as the server (see `bloglist::config`).

use bloglist::config;
use bloglist::infrastructure::hashing::Argon2Hasher;
use bloglist::server::connect_pool;
use bloglist::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bloglist.
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
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Blog operations
    Blog {
        #[command(subcommand)]
        action: BlogAction,
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
    /// Create a new user
    Create {
        /// Login name (at least 3 characters)
        #[arg(short, long)]
        username: Option<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all users
    List,

    /// Delete a user
    Delete {
        /// User id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Blog subcommands.
#[derive(Subcommand)]
enum BlogAction {
    /// Show total likes and the favorite blog
    Stats,
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

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => {
            handle_user_action(action, &build_state(&config, pool)?).await?
        }
        Commands::Blog { action } => {
            handle_blog_action(action, &build_state(&config, pool)?).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Wires services the same way the server does.
fn build_state(config: &config::Config, pool: PgPool) -> Result<AppState> {
    let hasher = Argon2Hasher::new(config.password_hash_cost)
        .map_err(|e| anyhow::anyhow!("Invalid PASSWORD_HASH_COST: {e}"))?;

    Ok(AppState::new(Arc::new(pool), hasher))
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, state: &AppState) -> Result<()> {
    match action {
        UserAction::Create { username, name } => create_user(state, username, name).await,
        UserAction::List => list_users(state).await,
        UserAction::Delete { id, yes } => delete_user(state, id, yes).await,
    }
}

/// Creates a user, prompting for anything not given on the command line.
///
/// The password is always read through a hidden prompt with confirmation.
async fn create_user(
    state: &AppState,
    username: Option<String>,
    name: Option<String>,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let name = match name {
        Some(n) => Some(n),
        None => {
            let n: String = Input::new()
                .with_prompt("Name (optional)")
                .allow_empty(true)
                .interact_text()?;
            (!n.is_empty()).then_some(n)
        }
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    let user = state
        .user_service
        .create_user(username, name, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!("  ID:       {}", user.id.to_string().bright_black());
    println!("  Username: {}", user.username.cyan());
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Name                           Created
///   ─────────────────────────────────────────────────────────────────────
///   1   mluukkai             Matti Luukkainen               2024-01-15 10:30
/// ```
async fn list_users(state: &AppState) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = state
        .user_service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.name.as_deref().unwrap_or("-"),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a user after confirmation (default: No).
async fn delete_user(state: &AppState, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete user {id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    state
        .user_service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches blog commands.
async fn handle_blog_action(action: BlogAction, state: &AppState) -> Result<()> {
    match action {
        BlogAction::Stats => blog_stats(state).await,
    }
}

/// Displays blog count, total likes, and the most liked blog.
async fn blog_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Blog Statistics".bright_blue().bold());
    println!();

    let stats = state
        .blog_service
        .stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    println!(
        "  Blogs:       {}",
        stats.count.to_string().bright_green().bold()
    );
    println!(
        "  Total likes: {}",
        stats.total_likes.to_string().bright_green().bold()
    );

    match stats.favorite {
        Some(blog) => println!(
            "  Favorite:    {} by {} ({} likes)",
            blog.title.cyan(),
            blog.author.as_deref().unwrap_or("unknown"),
            blog.likes.to_string().bright_white().bold()
        ),
        None => println!("  Favorite:    {}", "no blogs yet".yellow()),
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
