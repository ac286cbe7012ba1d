use std::sync::Arc;

use axum::{
    Form, Router,
    body::Body,
    extract::{Path, Query, State},
    http::{
        HeaderValue, Request, StatusCode,
        header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use url::Url;

use crate::{
    application::{
        blogs::{BlogQuery, BlogService},
        booking::{BookingError, BookingService, ICS_FILENAME, ICS_PATH},
        chrome::ChromeService,
        contact::{self, ContactError, ContactService},
        error::{ErrorReport, HttpError},
        mailer::Mailer,
    },
    config::Settings,
    domain::{
        appointments::AppointmentForm, contact::ContactForm, site, validation::FieldErrors,
    },
    infra::{assets, error::InfraError},
    presentation::views::{
        AboutTemplate, AboutView, BlogPostTemplate, BlogsTemplate, BookingConfirmedTemplate,
        BookingFormView, ContactFormView, ContactPageView, ContactTemplate, HomeTemplate, HomeView,
        LayoutContext, ServicesTemplate, ServicesView, render_not_found_response,
        render_template_response,
    },
};

use super::{
    health_response,
    middleware::{log_responses, set_request_context},
};

const HOME_LATEST_POSTS: usize = 3;
const UNRESOLVABLE_SLOT_MESSAGE: &str =
    "That time is not available on the selected date. Please choose another slot.";

#[derive(Clone)]
pub struct HttpState {
    pub chrome: Arc<ChromeService>,
    pub blogs: Arc<BlogService>,
    pub booking: Arc<BookingService>,
    pub contact: Arc<ContactService>,
}

impl HttpState {
    pub fn from_settings(settings: &Settings, mailer: Arc<dyn Mailer>) -> Result<Self, InfraError> {
        let public_url = Url::parse(&settings.site.public_url).map_err(|err| {
            InfraError::configuration(format!("invalid site.public_url: {err}"))
        })?;

        Ok(Self {
            chrome: Arc::new(ChromeService::new(public_url)),
            blogs: Arc::new(BlogService::default()),
            booking: Arc::new(BookingService::from_settings(
                &settings.site,
                &settings.booking,
            )),
            contact: Arc::new(ContactService::new(mailer)),
        })
    }
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/blogs", get(blog_index))
        .route("/blog/{slug}", get(blog_detail))
        .route("/contact", get(contact_page))
        .route("/contact/message", post(submit_message))
        .route("/contact/appointment", post(book_appointment))
        .route(ICS_PATH, get(appointment_ics))
        .route("/_health", get(health))
        .route("/static/public/{*path}", get(assets::serve_public))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn home(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load("/");
    let content = HomeView {
        stats: &site::STATS,
        services: &site::HOME_SERVICES,
        reasons: &site::WHY_CHOOSE_US,
        testimonials: &site::TESTIMONIALS,
        latest_posts: state.blogs.latest(HOME_LATEST_POSTS),
    };
    let view = LayoutContext::new(chrome, content);
    render_template_response(HomeTemplate { view }, StatusCode::OK)
}

async fn about(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load("/about").with_title("About Us");
    let content = AboutView {
        story: &site::ABOUT_STORY,
        values: &site::VALUES,
        team: &site::TEAM,
        stats: &site::STATS,
    };
    let view = LayoutContext::new(chrome, content);
    render_template_response(AboutTemplate { view }, StatusCode::OK)
}

async fn services(State(state): State<HttpState>) -> Response {
    let chrome = state.chrome.load("/services").with_title("Our Services");
    let content = ServicesView {
        services: &site::SERVICES,
        process: &site::PROCESS,
    };
    let view = LayoutContext::new(chrome, content);
    render_template_response(ServicesTemplate { view }, StatusCode::OK)
}

async fn blog_index(State(state): State<HttpState>, Query(query): Query<BlogQuery>) -> Response {
    let chrome = state.chrome.load("/blogs").with_title("Financial Insights");
    let content = state.blogs.listing(&query);
    let view = LayoutContext::new(chrome, content);
    render_template_response(BlogsTemplate { view }, StatusCode::OK)
}

async fn blog_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    let Some(content) = state.blogs.detail(&slug) else {
        return Redirect::temporary("/blogs").into_response();
    };

    let chrome = state
        .chrome
        .load(&format!("/blog/{slug}"))
        .with_title(&content.title)
        .with_description(&content.excerpt);
    let view = LayoutContext::new(chrome, content);
    render_template_response(BlogPostTemplate { view }, StatusCode::OK)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContactQuery {
    date: String,
}

async fn contact_page(
    State(state): State<HttpState>,
    Query(query): Query<ContactQuery>,
) -> Response {
    let booking = state.booking.form(
        AppointmentForm {
            date: query.date,
            ..AppointmentForm::default()
        },
        FieldErrors::new(),
    );
    let contact_form = contact::form_view(ContactForm::default(), FieldErrors::new(), None);
    render_contact_page(&state, contact_form, booking, StatusCode::OK)
}

async fn submit_message(
    State(state): State<HttpState>,
    Form(form): Form<ContactForm>,
) -> Response {
    const SOURCE: &str = "infra::http::public::submit_message";

    let booking = state
        .booking
        .form(AppointmentForm::default(), FieldErrors::new());

    match state.contact.submit(&form).await {
        Ok(_) => {
            let contact_form = contact::form_view(
                ContactForm::default(),
                FieldErrors::new(),
                Some(contact::success_notice()),
            );
            render_contact_page(&state, contact_form, booking, StatusCode::OK)
        }
        Err(ContactError::Invalid(errors)) => {
            let mut response = render_contact_page(
                &state,
                contact::form_view(form, errors, None),
                booking,
                StatusCode::UNPROCESSABLE_ENTITY,
            );
            ErrorReport::from_message(
                SOURCE,
                StatusCode::UNPROCESSABLE_ENTITY,
                "Contact form failed validation",
            )
            .attach(&mut response);
            response
        }
        Err(err @ ContactError::Delivery(_)) => {
            let mut response = render_contact_page(
                &state,
                contact::form_view(form, FieldErrors::new(), Some(contact::failure_notice())),
                booking,
                StatusCode::BAD_GATEWAY,
            );
            ErrorReport::from_error(SOURCE, StatusCode::BAD_GATEWAY, &err).attach(&mut response);
            response
        }
    }
}

async fn book_appointment(
    State(state): State<HttpState>,
    Form(form): Form<AppointmentForm>,
) -> Response {
    const SOURCE: &str = "infra::http::public::book_appointment";

    let errors = match state.booking.book(&form) {
        Ok(confirmation) => {
            let chrome = state
                .chrome
                .load("/contact")
                .with_title("Appointment Booked");
            let content = state.booking.confirmation_view(&confirmation);
            let view = LayoutContext::new(chrome, content);
            return render_template_response(BookingConfirmedTemplate { view }, StatusCode::OK);
        }
        Err(BookingError::Invalid(errors)) => errors,
        Err(BookingError::UnresolvableTime { .. } | BookingError::OutOfRange { .. }) => {
            let mut errors = FieldErrors::new();
            errors.insert("time", UNRESOLVABLE_SLOT_MESSAGE);
            errors
        }
    };

    let contact_form = contact::form_view(ContactForm::default(), FieldErrors::new(), None);
    let booking = state.booking.form(form, errors);
    let mut response = render_contact_page(
        &state,
        contact_form,
        booking,
        StatusCode::UNPROCESSABLE_ENTITY,
    );
    ErrorReport::from_message(
        SOURCE,
        StatusCode::UNPROCESSABLE_ENTITY,
        "Appointment form failed validation",
    )
    .attach(&mut response);
    response
}

async fn appointment_ics(
    State(state): State<HttpState>,
    Query(form): Query<AppointmentForm>,
) -> Result<Response, HttpError> {
    const SOURCE: &str = "infra::http::public::appointment_ics";

    let ics = state.booking.ics_for(&form).map_err(|err| {
        HttpError::from_error(
            SOURCE,
            StatusCode::BAD_REQUEST,
            "Invalid appointment details",
            &err,
        )
    })?;

    let mut response = Response::new(Body::from(ics));
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/calendar; charset=utf-8"),
    );
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{ICS_FILENAME}\"")) {
        headers.insert(CONTENT_DISPOSITION, value);
    }
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(response)
}

async fn health() -> Response {
    health_response()
}

async fn fallback(State(state): State<HttpState>, request: Request<Body>) -> Response {
    render_not_found_response(state.chrome.load(request.uri().path()))
}

fn render_contact_page(
    state: &HttpState,
    contact_form: ContactFormView,
    booking: BookingFormView,
    status: StatusCode,
) -> Response {
    let chrome = state.chrome.load("/contact").with_title("Contact Us");
    let content = ContactPageView {
        cards: &site::CONTACT_CARDS,
        office_hours: &site::OFFICE_HOURS,
        contact_form,
        booking,
    };
    let view = LayoutContext::new(chrome, content);
    render_template_response(ContactTemplate { view }, status)
}
