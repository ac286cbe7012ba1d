//! Blog listing and detail views over the bundled catalog.

use serde::Deserialize;
use url::form_urlencoded;

use crate::{
    application::{markdown::render_markdown, pagination::PageWindow},
    domain::blogs::{self, ALL_CATEGORIES, BlogFilter, BlogPost},
    presentation::views::{BlogCard, BlogDetailView, BlogListView, CategoryChip, RelatedPostView},
};

pub const POSTS_PER_PAGE: usize = 6;
const RELATED_LIMIT: usize = 3;
const RELATED_EXCERPT_CHARS: usize = 120;
const LISTING_PATH: &str = "/blogs";

/// Listing query string. Fields stay textual so malformed values degrade to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogQuery {
    pub q: String,
    pub category: String,
    pub page: String,
}

impl BlogQuery {
    fn page_number(&self) -> usize {
        self.page.trim().parse().unwrap_or(1)
    }
}

#[derive(Clone)]
pub struct BlogService {
    posts: &'static [BlogPost],
}

impl Default for BlogService {
    fn default() -> Self {
        Self::new(blogs::all())
    }
}

impl BlogService {
    pub fn new(posts: &'static [BlogPost]) -> Self {
        Self { posts }
    }

    pub fn listing(&self, query: &BlogQuery) -> BlogListView {
        let search = query.q.trim().to_string();
        let category = self.selected_category(&query.category);

        let filter = BlogFilter {
            search: &search,
            category: Some(category),
        };
        let matches = blogs::filter(self.posts, filter);

        let pagination = PageWindow::new(
            query.page_number(),
            matches.len(),
            POSTS_PER_PAGE,
            |page| listing_href(&search, category, page),
        );
        let posts = pagination
            .slice(&matches)
            .iter()
            .map(|post| blog_card(post))
            .collect();

        let categories = blogs::categories(self.posts)
            .into_iter()
            .map(|label| CategoryChip {
                label: label.to_string(),
                href: listing_href(&search, label, 1),
                is_active: label == category,
            })
            .collect();

        BlogListView {
            results_summary: results_summary(matches.len(), &search, category),
            search,
            category: category.to_string(),
            categories,
            posts,
            pagination,
        }
    }

    pub fn detail(&self, slug: &str) -> Option<BlogDetailView> {
        let post = blogs::find_by_slug(self.posts, slug)?;

        let related = blogs::related(self.posts, post, RELATED_LIMIT)
            .into_iter()
            .map(|other| RelatedPostView {
                href: post_href(other),
                title: other.title.to_string(),
                excerpt: blogs::truncate_excerpt(other.excerpt, RELATED_EXCERPT_CHARS),
                published: blogs::format_human_date(other.date),
                read_time: other.read_time.to_string(),
                image: other.image.to_string(),
            })
            .collect();

        Some(BlogDetailView {
            title: post.title.to_string(),
            category: post.category.to_string(),
            published: blogs::format_human_date(post.date),
            iso_date: post.date.to_string(),
            read_time: post.read_time.to_string(),
            author: post.author.to_string(),
            author_initials: blogs::author_initials(post.author),
            excerpt: post.excerpt.to_string(),
            image: post.image.to_string(),
            content_html: render_markdown(post.content),
            related,
        })
    }

    /// Most recent posts first, for the home page teaser.
    pub fn latest(&self, limit: usize) -> Vec<BlogCard> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts.into_iter().take(limit).map(blog_card).collect()
    }

    /// Unknown categories fall back to `All` rather than producing an empty listing.
    fn selected_category(&self, requested: &str) -> &'static str {
        let requested = requested.trim();
        blogs::categories(self.posts)
            .into_iter()
            .find(|known| *known == requested)
            .unwrap_or(ALL_CATEGORIES)
    }
}

fn blog_card(post: &BlogPost) -> BlogCard {
    BlogCard {
        href: post_href(post),
        title: post.title.to_string(),
        excerpt: post.excerpt.to_string(),
        category: post.category.to_string(),
        published: blogs::format_human_date(post.date),
        iso_date: post.date.to_string(),
        read_time: post.read_time.to_string(),
        author: post.author.to_string(),
        image: post.image.to_string(),
    }
}

fn post_href(post: &BlogPost) -> String {
    format!("/blog/{}", post.slug)
}

/// Listing URL carrying the active search and category; defaults are omitted.
pub fn listing_href(search: &str, category: &str, page: usize) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("q", search);
    }
    if category != ALL_CATEGORIES {
        query.append_pair("category", category);
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }

    let query = query.finish();
    if query.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{LISTING_PATH}?{query}")
    }
}

pub fn results_summary(count: usize, search: &str, category: &str) -> String {
    let mut summary = format!(
        "{count} article{} found",
        if count == 1 { "" } else { "s" }
    );
    if !search.is_empty() {
        summary.push_str(&format!(" for \"{search}\""));
    }
    if category != ALL_CATEGORIES {
        summary.push_str(&format!(" in {category}"));
    }
    summary
}
