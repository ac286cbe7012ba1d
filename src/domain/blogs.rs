mod data;

use time::{Date, format_description::FormatItem, macros::format_description};

pub use data::BLOGS;

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub date: Date,
    pub author: &'static str,
    pub read_time: &'static str,
    pub excerpt: &'static str,
    /// Body in the markdown subset understood by `application::markdown`.
    pub content: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogFilter<'a> {
    pub search: &'a str,
    /// `None` and `Some("All")` both match every category.
    pub category: Option<&'a str>,
}

impl BlogFilter<'_> {
    pub fn matches(&self, post: &BlogPost) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || post.title.to_lowercase().contains(&needle)
            || post.excerpt.to_lowercase().contains(&needle);

        let matches_category = match self.category {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => post.category == category,
        };

        matches_search && matches_category
    }
}

pub fn all() -> &'static [BlogPost] {
    &BLOGS
}

pub fn find_by_slug(posts: &'static [BlogPost], slug: &str) -> Option<&'static BlogPost> {
    posts.iter().find(|post| post.slug == slug)
}

/// `All` followed by each category in the order it first appears.
pub fn categories(posts: &[BlogPost]) -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for post in posts {
        if !categories.contains(&post.category) {
            categories.push(post.category);
        }
    }
    categories
}

pub fn filter<'p>(posts: &'p [BlogPost], filter: BlogFilter<'_>) -> Vec<&'p BlogPost> {
    posts.iter().filter(|post| filter.matches(post)).collect()
}

/// Other posts in the same category, in catalog order.
pub fn related<'p>(posts: &'p [BlogPost], post: &BlogPost, limit: usize) -> Vec<&'p BlogPost> {
    posts
        .iter()
        .filter(|candidate| candidate.category == post.category && candidate.id != post.id)
        .take(limit)
        .collect()
}

pub fn format_human_date(date: Date) -> String {
    date.format(HUMAN_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

pub fn author_initials(author: &str) -> String {
    author
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// First `limit` characters of `text` followed by `...`.
pub fn truncate_excerpt(text: &str, limit: usize) -> String {
    let end = text
        .char_indices()
        .nth(limit)
        .map_or(text.len(), |(index, _)| index);
    format!("{}...", &text[..end])
}
