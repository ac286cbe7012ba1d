use crate::{
    application::{
        error::{ErrorReport, HttpError},
        pagination::PageWindow,
    },
    domain::{
        appointments::AppointmentForm,
        contact::ContactForm,
        site::{
            ContactCard, Feature, OfficeHours, ProcessStep, Service, SocialLink, Stat, TeamMember,
            Testimonial,
        },
        validation::FieldErrors,
    },
};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response(chrome: LayoutChrome) -> Response {
    let content = ErrorPageView::not_found();
    let view = LayoutContext::new(chrome.with_title("Page Not Found"), content);
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub tagline: String,
    pub href: String,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

#[derive(Clone)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
    pub cta: NavigationLinkView,
}

#[derive(Clone)]
pub struct FooterView {
    pub about: String,
    pub quick_links: Vec<NavigationLinkView>,
    pub service_links: Vec<NavigationLinkView>,
    pub socials: &'static [SocialLink],
    pub address_lines: &'static [&'static str],
    pub phone: String,
    pub email: String,
    pub legal_links: &'static [&'static str],
    pub copy: String,
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
    pub canonical: String,
}

impl PageMetaView {
    pub fn with_canonical(self, canonical: String) -> Self {
        Self { canonical, ..self }
    }
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
}

impl LayoutChrome {
    pub fn with_canonical(self, canonical: String) -> Self {
        Self {
            meta: self.meta.with_canonical(canonical),
            ..self
        }
    }

    /// Prefixes the site title with the page name.
    pub fn with_title(self, page: &str) -> Self {
        let title = format!("{page} | {}", self.meta.title);
        Self {
            meta: PageMetaView {
                title,
                ..self.meta
            },
            ..self
        }
    }

    pub fn with_description(self, description: &str) -> Self {
        Self {
            meta: PageMetaView {
                description: description.to_string(),
                ..self.meta
            },
            ..self
        }
    }
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            footer: chrome.footer,
            meta: chrome.meta,
            content,
        }
    }
}

#[derive(Clone)]
pub struct BlogCard {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub published: String,
    pub iso_date: String,
    pub read_time: String,
    pub author: String,
    pub image: String,
}

pub struct HomeView {
    pub stats: &'static [Stat],
    pub services: &'static [Feature],
    pub reasons: &'static [Feature],
    pub testimonials: &'static [Testimonial],
    pub latest_posts: Vec<BlogCard>,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub view: LayoutContext<HomeView>,
}

pub struct AboutView {
    pub story: &'static [&'static str],
    pub values: &'static [Feature],
    pub team: &'static [TeamMember],
    pub stats: &'static [Stat],
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub view: LayoutContext<AboutView>,
}

pub struct ServicesView {
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub view: LayoutContext<ServicesView>,
}

#[derive(Clone)]
pub struct CategoryChip {
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

pub struct BlogListView {
    pub search: String,
    pub category: String,
    pub categories: Vec<CategoryChip>,
    pub results_summary: String,
    pub posts: Vec<BlogCard>,
    pub pagination: PageWindow,
}

impl BlogListView {
    pub fn has_results(&self) -> bool {
        !self.posts.is_empty()
    }
}

#[derive(Template)]
#[template(path = "blogs.html")]
pub struct BlogsTemplate {
    pub view: LayoutContext<BlogListView>,
}

#[derive(Clone)]
pub struct RelatedPostView {
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub published: String,
    pub read_time: String,
    pub image: String,
}

pub struct BlogDetailView {
    pub title: String,
    pub category: String,
    pub published: String,
    pub iso_date: String,
    pub read_time: String,
    pub author: String,
    pub author_initials: String,
    pub excerpt: String,
    pub image: String,
    pub content_html: String,
    pub related: Vec<RelatedPostView>,
}

#[derive(Template)]
#[template(path = "blog_post.html")]
pub struct BlogPostTemplate {
    pub view: LayoutContext<BlogDetailView>,
}

#[derive(Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Outcome banner shown above a form after a submission.
#[derive(Clone)]
pub struct FormNotice {
    pub success: bool,
    pub title: String,
    pub message: String,
}

pub struct ContactFormView {
    pub values: ContactForm,
    pub errors: FieldErrors,
    pub subjects: Vec<SelectOption>,
    pub notice: Option<FormNotice>,
}

impl ContactFormView {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn prefers_phone(&self) -> bool {
        self.values.preferred_contact.trim() == "phone"
    }
}

pub struct BookingFormView {
    pub values: AppointmentForm,
    pub errors: FieldErrors,
    pub dates: Vec<SelectOption>,
    pub slots: Vec<SelectOption>,
}

impl BookingFormView {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }
}

pub struct ContactPageView {
    pub cards: &'static [ContactCard],
    pub office_hours: &'static [OfficeHours],
    pub contact_form: ContactFormView,
    pub booking: BookingFormView,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub view: LayoutContext<ContactPageView>,
}

pub struct BookingConfirmedView {
    pub name: String,
    pub service: String,
    pub date_label: String,
    pub time_label: String,
    pub duration_minutes: i64,
    pub location: String,
    pub google_url: String,
    pub ics_href: String,
}

#[derive(Template)]
#[template(path = "booking_confirmed.html")]
pub struct BookingConfirmedTemplate {
    pub view: LayoutContext<BookingConfirmedView>,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub primary_action: Option<ErrorAction>,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The page you requested does not exist. Try returning to the homepage to continue exploring.".to_string(),
            primary_action: Some(ErrorAction::home()),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn home() -> Self {
        Self {
            href: "/".to_string(),
            label: "Back to home".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
