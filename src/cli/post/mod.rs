//! Post command - post management

use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::print_json;
use crate::config::AppConfig;
use crate::domain::PostId;
use crate::infrastructure::post::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};

/// Arguments for the post command
#[derive(Args)]
pub struct PostArgs {
    #[command(subcommand)]
    pub action: PostAction,
}

#[derive(Subcommand)]
pub enum PostAction {
    /// Create a post owned by the author
    Create {
        #[arg(long)]
        author: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },

    /// Show one post
    Show { id: i64 },

    /// List every post
    List,

    /// Replace a post's title and content (owner only)
    Update {
        id: i64,
        #[arg(long = "as")]
        requester: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },

    /// Delete a post (owner only)
    Delete {
        id: i64,
        #[arg(long = "as")]
        requester: String,
    },
}

pub async fn run(config: &AppConfig, args: PostArgs) -> anyhow::Result<()> {
    let services = crate::build_services(config).await?;
    let posts = &services.posts;

    match args.action {
        PostAction::Create {
            author,
            title,
            content,
        } => {
            let post = posts
                .create(CreatePostRequest {
                    author_email: author,
                    title,
                    content,
                })
                .await?;
            print_json(&post)
        }
        PostAction::Show { id } => print_json(&posts.read(PostId::new(id)).await?),
        PostAction::List => print_json(&posts.read_all().await?),
        PostAction::Update {
            id,
            requester,
            title,
            content,
        } => {
            let post_id = PostId::new(id);
            posts
                .update(UpdatePostRequest {
                    post_id,
                    requester_email: requester,
                    title,
                    content,
                })
                .await?;
            print_json(&posts.read(post_id).await?)
        }
        PostAction::Delete { id, requester } => {
            posts
                .delete(DeletePostRequest {
                    post_id: PostId::new(id),
                    requester_email: requester,
                })
                .await?;
            print_json(&json!({ "deleted": id }))
        }
    }
}
