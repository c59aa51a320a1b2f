use std::cmp::Reverse;

use super::domain::{CategoryFilter, Post, SortBy};

pub fn filter_posts(posts: Vec<Post>, filter: CategoryFilter) -> Vec<Post> {
    match filter {
        CategoryFilter::All => posts,
        _ => posts.into_iter().filter(|p| filter.matches(p)).collect(),
    }
}

/// Stable: ties keep the order the server sent them in
pub fn sort_posts(posts: &mut [Post], sort_by: SortBy) {
    match sort_by {
        SortBy::Recent => posts.sort_by_key(|p| Reverse(p.created_at)),
        SortBy::Upvotes => posts.sort_by_key(|p| Reverse(p.upvotes)),
    }
}

/// Filter, then sort
pub fn shape(posts: Vec<Post>, filter: CategoryFilter, sort_by: SortBy) -> Vec<Post> {
    let mut shaped = filter_posts(posts, filter);
    sort_posts(&mut shaped, sort_by);
    shaped
}
