//! Demo command - end-to-end ownership scenario

use tracing::info;

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::post::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};
use crate::infrastructure::user::RegisterUserRequest;
use crate::AppServices;

const ALICE: &str = "alice@x.com";
const BOB: &str = "bob@x.com";

pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let services = crate::build_services(config).await?;

    // Leftovers from an earlier run against a persistent backend
    for email in [ALICE, BOB] {
        match services.users.remove(email).await {
            Ok(()) | Err(DomainError::NotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    scenario(&services).await
}

async fn scenario(services: &AppServices) -> anyhow::Result<()> {
    let users = &services.users;
    let posts = &services.posts;

    users
        .register(RegisterUserRequest::new(ALICE, "alice", "pw1"))
        .await?;
    let token = users.authenticate(ALICE, "pw1").await?;
    println!("alice logged in with token {}", token);

    let post = posts
        .create(CreatePostRequest {
            author_email: ALICE.to_string(),
            title: "Hello".to_string(),
            content: "First".to_string(),
        })
        .await?;
    println!("alice created post {}", post.id());
    println!("{} post(s) on the board", posts.read_all().await?.len());

    let hijack = || UpdatePostRequest {
        post_id: post.id(),
        requester_email: BOB.to_string(),
        title: "Hijacked".to_string(),
        content: "x".to_string(),
    };

    expect_rejection("unregistered bob updates", posts.update(hijack()).await)?;

    users
        .register(RegisterUserRequest::new(BOB, "bob", "pw2"))
        .await?;
    expect_rejection("registered bob updates", posts.update(hijack()).await)?;
    expect_rejection(
        "registered bob deletes",
        posts
            .delete(DeletePostRequest {
                post_id: post.id(),
                requester_email: BOB.to_string(),
            })
            .await,
    )?;

    users.remove(ALICE).await?;
    expect_rejection("post read after alice is removed", posts.read(post.id()).await.map(|_| ()))?;

    users.remove(BOB).await?;
    info!("Demo finished");
    Ok(())
}

fn expect_rejection(step: &str, result: Result<(), DomainError>) -> anyhow::Result<()> {
    match result {
        Err(e) => {
            println!("{}: rejected ({})", step, e);
            Ok(())
        }
        Ok(()) => anyhow::bail!("{}: unexpectedly succeeded", step),
    }
}
