//! CLI module for Postboard
//!
//! Provides subcommands that drive the domain services:
//! - `schema`: prepare the PostgreSQL schema
//! - `user`: register, log in, show, rename and remove accounts
//! - `post`: create, show, list, update and delete posts
//! - `demo`: run a short end-to-end scenario
//!
//! The in-memory backend lives only as long as one invocation, so `user` and
//! `post` are mostly useful with `APP__STORAGE__BACKEND=postgres`.

pub mod demo;
pub mod post;
pub mod schema;
pub mod user;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Postboard - multi-user posts with owner-only mutation
#[derive(Parser)]
#[command(name = "postboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage the database schema
    Schema(schema::SchemaArgs),

    /// Manage user accounts
    User(user::UserArgs),

    /// Manage posts
    Post(post::PostArgs),

    /// Run the register/post/ownership scenario against the configured backend
    Demo,
}

/// Load `.env` and configuration, then install logging
pub fn prepare() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
