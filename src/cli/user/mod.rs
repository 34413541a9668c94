//! User command - account management

use std::io::BufRead;

use anyhow::Context;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::print_json;
use crate::config::AppConfig;
use crate::infrastructure::user::RegisterUserRequest;

/// Environment variable consulted before prompting on stdin
pub const PASSWORD_ENV: &str = "POSTBOARD_PASSWORD";

/// Arguments for the user command
#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a new account; the password is read from POSTBOARD_PASSWORD or stdin
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
    },

    /// Check credentials and print a session token; the password is read like `register`
    Login {
        #[arg(long)]
        email: String,
    },

    /// Show a user's profile
    Show {
        #[arg(long)]
        email: String,
    },

    /// Change a user's display name
    Rename {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
    },

    /// Remove a user and every post it owns
    Remove {
        #[arg(long)]
        email: String,
    },
}

pub async fn run(config: &AppConfig, args: UserArgs) -> anyhow::Result<()> {
    let services = crate::build_services(config).await?;
    let users = &services.users;

    match args.action {
        UserAction::Register { email, username } => {
            let password = read_password()?;
            users
                .register(RegisterUserRequest::new(email.as_str(), username, password))
                .await?;
            print_json(&users.lookup(&email).await?)
        }
        UserAction::Login { email } => {
            let password = read_password()?;
            let token = users.authenticate(&email, &password).await?;
            print_json(&json!({ "token": token }))
        }
        UserAction::Show { email } => print_json(&users.lookup(&email).await?),
        UserAction::Rename { email, username } => {
            users.rename(&email, &username).await?;
            print_json(&users.lookup(&email).await?)
        }
        UserAction::Remove { email } => {
            users.remove(&email).await?;
            print_json(&json!({ "removed": email }))
        }
    }
}

fn read_password() -> anyhow::Result<String> {
    resolve_password(std::env::var(PASSWORD_ENV).ok(), std::io::stdin().lock())
}

/// Take the password from the environment value if present, else the first input line
fn resolve_password(from_env: Option<String>, mut input: impl BufRead) -> anyhow::Result<String> {
    if let Some(password) = from_env.filter(|p| !p.is_empty()) {
        return Ok(password);
    }

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_password_from_env_wins() {
        let password = resolve_password(Some("pw1".to_string()), Cursor::new("ignored\n")).unwrap();
        assert_eq!(password, "pw1");
    }

    #[test]
    fn test_password_from_stdin_line() {
        let password = resolve_password(None, Cursor::new("pw with spaces\r\nsecond\n")).unwrap();
        assert_eq!(password, "pw with spaces");
    }

    #[test]
    fn test_empty_env_falls_back_to_stdin() {
        let password = resolve_password(Some(String::new()), Cursor::new("pw2")).unwrap();
        assert_eq!(password, "pw2");
    }

    #[test]
    fn test_password_is_not_a_flag() {
        use clap::Parser;

        #[derive(Parser)]
        struct TestCli {
            #[command(subcommand)]
            action: UserAction,
        }

        let result = TestCli::try_parse_from([
            "postboard", "login", "--email", "alice@x.com", "--password", "pw1",
        ]);
        assert!(result.is_err());
    }
}
