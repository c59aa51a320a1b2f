// Plain-text rendering for the terminal front end
use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::notify::{Notification, Variant};
use crate::posts::{Category, Post};
use crate::view::{AnalyticsState, DashboardState, LoadPhase};

/// "5 minutes ago", "about 2 hours ago", "in 3 days"
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created_at).num_seconds();
    let distance = distance_words(secs.unsigned_abs());
    if secs < 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

fn distance_words(secs: u64) -> String {
    const HOUR: u64 = 60;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;

    if secs < 30 {
        return "less than a minute".to_string();
    }
    let minutes = (secs + 30) / 60;
    match minutes {
        0..=44 => plural(minutes.max(1), "minute"),
        45..=89 => "about 1 hour".to_string(),
        m if m < DAY => format!("about {}", plural((m + HOUR / 2) / HOUR, "hour")),
        m if m < 42 * HOUR => "1 day".to_string(),
        m if m < MONTH => plural((m + DAY / 2) / DAY, "day"),
        m if m < 45 * DAY => "about 1 month".to_string(),
        m if m < 60 * DAY => "about 2 months".to_string(),
        m => {
            let months = m / MONTH;
            if months < 12 {
                return plural(months, "month");
            }
            let (years, rest) = (months / 12, months % 12);
            match rest {
                0..=2 => format!("about {}", plural(years, "year")),
                3..=8 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    }
}

pub fn post_card(post: &Post, now: DateTime<Utc>, show_moderation: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] #{} · {}",
        post.category,
        post.id,
        relative_age(post.created_at, now)
    );
    let _ = writeln!(out, "  {}", post.message);
    let _ = write!(out, "  ▲ {}", post.upvotes);
    if show_moderation {
        let _ = write!(out, "   (visible)");
    }
    out
}

pub fn dashboard(state: &DashboardState, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Community Dashboard");
    let _ = writeln!(
        out,
        "{} voices · {} upvotes · {} categories",
        state.total_voices(),
        state.total_upvotes(),
        state.category_count()
    );
    let _ = writeln!(out, "sort: {} · category: {}", state.sort_by, state.filter);

    match state.phase {
        LoadPhase::Loading => {
            let _ = writeln!(out, "Loading voices from the community...");
            return out;
        }
        LoadPhase::Failed => {
            let _ = writeln!(out, "(showing last loaded posts)");
        }
        LoadPhase::Ready => {}
    }

    let _ = writeln!(out);
    if state.posts.is_empty() {
        let _ = writeln!(out, "No posts available");
    }
    for post in &state.posts {
        let _ = writeln!(out, "{}", post_card(post, now, state.show_moderation));
    }
    out
}

pub fn analytics(state: &AnalyticsState) -> String {
    if state.loading {
        return "Analyzing community data...\n".to_string();
    }

    let summary = &state.summary;
    let mut out = String::new();
    let _ = writeln!(out, "Community Analytics");
    let _ = writeln!(out, "Total Posts:   {}", summary.total_posts);
    let _ = writeln!(out, "Total Upvotes: {}", summary.total_upvotes);
    let _ = writeln!(out, "Avg Upvotes:   {}", summary.avg_upvotes);
    let _ = writeln!(out);
    let _ = writeln!(out, "Most Upvoted Posts");
    for post in &summary.top_posts {
        let _ = writeln!(
            out,
            "  [{}] - {} ({} upvotes)",
            post.category, post.message, post.upvotes
        );
    }
    out
}

pub fn categories() -> String {
    Category::ALL
        .iter()
        .map(|c| format!("{}\n", c))
        .collect()
}

pub fn notification(n: &Notification) -> String {
    let marker = match n.variant {
        Variant::Info => "*",
        Variant::Destructive => "!",
    };
    match &n.description {
        Some(description) => format!("{} {}: {}", marker, n.title, description),
        None => format!("{} {}", marker, n.title),
    }
}
