mod domain;
mod shaping;

pub use self::domain::{
    normalize, normalize_all, Category, CategoryFilter, Post, PostId, RawPost, SortBy,
};
pub use self::shaping::{filter_posts, shape, sort_posts};
