use crate::posts::{sort_posts, Post, SortBy};

pub const TOP_POSTS: usize = 5;

/// Totals shown on the analytics screen, always over the unfiltered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub total_posts: usize,
    pub total_upvotes: u64,
    pub avg_upvotes: String,
    pub top_posts: Vec<Post>,
}

impl AnalyticsSummary {
    pub fn from_posts(posts: &[Post]) -> Self {
        Self {
            total_posts: posts.len(),
            total_upvotes: total_upvotes(posts),
            avg_upvotes: average_upvotes(posts),
            top_posts: top_posts(posts, TOP_POSTS),
        }
    }
}

impl Default for AnalyticsSummary {
    fn default() -> Self {
        Self::from_posts(&[])
    }
}

pub fn total_upvotes(posts: &[Post]) -> u64 {
    posts.iter().map(|p| u64::from(p.upvotes)).sum()
}

/// Mean upvotes with one decimal, rounded half up. `"0"` for an empty list.
pub fn average_upvotes(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "0".to_string();
    }
    let count = posts.len() as u64;
    // round(total * 10 / count) without going through floats
    let tenths = (total_upvotes(posts) * 20 + count) / (count * 2);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// The `n` most upvoted posts; ties keep input order
pub fn top_posts(posts: &[Post], n: usize) -> Vec<Post> {
    let mut ranked = posts.to_vec();
    sort_posts(&mut ranked, SortBy::Upvotes);
    ranked.truncate(n);
    ranked
}
