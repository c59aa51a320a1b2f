use chrono::{DateTime, Utc};

use crate::config::Command;
use crate::posts::PostId;
use crate::render;
use crate::state::Board;
use crate::view::{LoadOutcome, LoadPhase, SubmitOutcome, UpvoteOutcome};

/// What one subcommand printed and whether its pipeline succeeded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub output: String,
    pub ok: bool,
}

impl Report {
    fn ok(output: String) -> Self {
        Self { output, ok: true }
    }

    fn failed(output: String) -> Self {
        Self { output, ok: false }
    }
}

/// Run one subcommand against the board. Notifications stay in the
/// board's notifier for the caller to drain.
pub async fn run(board: &Board, command: Command, now: DateTime<Utc>) -> Report {
    match command {
        Command::List {
            sort,
            category,
            moderation,
        } => {
            let dashboard = board.dashboard_with(sort, category);
            dashboard.set_show_moderation(moderation).await;
            let outcome = dashboard.reload().await;
            let output = render::dashboard(&dashboard.snapshot().await, now);
            if outcome == LoadOutcome::Loaded {
                Report::ok(output)
            } else {
                Report::failed(output)
            }
        }
        Command::Submit { category, message } => {
            let form = board.submission_form();
            form.set_message(message).await;
            form.set_category(category).await;
            match form.submit(None).await {
                SubmitOutcome::Submitted(post) => {
                    Report::ok(format!("Shared voice #{} in {}\n", post.id, post.category))
                }
                _ => Report::default(),
            }
        }
        Command::Upvote { id, sort, category } => {
            let dashboard = board.dashboard_with(sort, category);
            let handler = board.upvote_handler(PostId::new(id));
            if handler.upvote(Some(&dashboard)).await != UpvoteOutcome::Upvoted {
                return Report::default();
            }
            // the upvote landed but the refetch may not have
            let state = dashboard.snapshot().await;
            if state.phase == LoadPhase::Ready {
                Report::ok(render::dashboard(&state, now))
            } else {
                Report::default()
            }
        }
        Command::Analytics => {
            let analytics = board.analytics();
            let loaded = analytics.load().await;
            let output = render::analytics(&analytics.snapshot().await);
            if loaded {
                Report::ok(output)
            } else {
                Report::failed(output)
            }
        }
        Command::Categories => Report::ok(render::categories()),
    }
}
