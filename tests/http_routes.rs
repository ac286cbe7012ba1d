use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{
        Method, Request, StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION},
    },
    response::Response,
};
use http_body_util::BodyExt;
use suncrest::{
    application::{
        blogs::BlogService,
        booking::{BookingOptions, BookingService},
        chrome::ChromeService,
        contact::ContactService,
        mailer::{MailError, Mailer},
    },
    domain::{blogs, contact::ContactMessage},
    infra::http::{HttpState, build_router},
};
use time::{Duration, macros::datetime};
use tower::ServiceExt;
use url::Url;

struct StubMailer {
    fail: bool,
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send(&self, _message: &ContactMessage) -> Result<(), MailError> {
        if self.fail {
            Err(MailError::Rejected {
                status: 503,
                body: "maintenance".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn app_with_mailer(fail: bool) -> Router {
    // Saturday in Pune, so the first offered day is Monday 2026-10-19.
    let booking = BookingService::new(
        chrono_tz::Asia::Kolkata,
        BookingOptions {
            days_ahead: 14,
            duration: Duration::minutes(60),
            location: "Online".to_string(),
            default_service: "Consultation".to_string(),
        },
    )
    .with_clock(|| datetime!(2026-10-17 06:00 UTC));

    build_router(HttpState {
        chrome: Arc::new(ChromeService::new(
            Url::parse("https://suncrest.example/").expect("public url"),
        )),
        blogs: Arc::new(BlogService::default()),
        booking: Arc::new(booking),
        contact: Arc::new(ContactService::new(Arc::new(StubMailer { fail }))),
    })
}

fn app() -> Router {
    app_with_mailer(false)
}

async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("router should respond")
}

async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("router should respond")
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn pages_render_with_active_navigation() {
    for (path, title) in [
        ("/", "Suncrest Finance"),
        ("/about", "About Us | Suncrest Finance"),
        ("/services", "Our Services | Suncrest Finance"),
        ("/blogs", "Financial Insights | Suncrest Finance"),
        ("/contact", "Contact Us | Suncrest Finance"),
    ] {
        let response = get(app(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");

        let body = body_text(response).await;
        assert!(body.contains(&format!("<title>{title}</title>")), "{path}");
        assert!(body.contains(r#"aria-current="page""#), "{path}");
    }
}

#[tokio::test]
async fn home_renders_settled_stats() {
    let body = body_text(get(app(), "/").await).await;

    assert!(body.contains(r#"data-count-end="450""#));
    assert!(body.contains(">450+</p>"));
    assert!(body.contains(">8+</p>"));
}

#[tokio::test]
async fn blog_listing_filters_by_category() {
    let response = get(app(), "/blogs?category=Tax+Planning").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(" in Tax Planning"));
    assert!(!body.contains(">Business Finance</span>"));
}

#[tokio::test]
async fn blog_detail_renders_markdown_body() {
    let post = &blogs::all()[0];
    let response = get(app(), &format!("/blog/{}", post.slug)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"<h1 class="text-4xl font-bold"#));
    assert!(body.contains("Related Articles"));
}

#[tokio::test]
async fn unknown_blog_slug_redirects_to_listing() {
    let response = get(app(), "/blog/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/blogs")
    );
}

#[tokio::test]
async fn contact_page_preselects_requested_date() {
    let body = body_text(get(app(), "/contact?date=2026-10-20").await).await;

    assert!(body.contains(r#"value="2026-10-20" checked"#));
    assert!(body.contains(r#"value="2026-10-19" />"#));
    assert!(!body.contains(r#"value="2026-10-17""#));
}

#[tokio::test]
async fn invalid_contact_message_is_unprocessable() {
    let response = post_form(app(), "/contact/message", "name=&email=nope&message=").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Please select a subject"));
    assert!(body.contains(r#"value="nope""#));
}

#[tokio::test]
async fn delivered_contact_message_shows_success() {
    let response = post_form(
        app(),
        "/contact/message",
        "name=Ira+Sen&email=ira%40example.com&subject=tax&message=Help+with+ITR&preferred_contact=phone",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Message Sent Successfully!"));
    assert!(!body.contains(r#"value="Ira Sen""#));
}

#[tokio::test]
async fn mailer_failure_is_bad_gateway_and_keeps_values() {
    let response = post_form(
        app_with_mailer(true),
        "/contact/message",
        "name=Ira+Sen&email=ira%40example.com&subject=tax&message=Help+with+ITR",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = body_text(response).await;
    assert!(body.contains("Something went wrong while sending your message. Please try again."));
    assert!(body.contains(r#"value="Ira Sen""#));
}

#[tokio::test]
async fn booking_confirmation_links_calendars() {
    let response = post_form(
        app(),
        "/contact/appointment",
        "name=Ira+Sen&email=ira%40example.com&phone=%2B91+90000+00000&date=2026-10-19&time=14%3A00",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Appointment Booked Successfully!"));
    assert!(body.contains("calendar.google.com/calendar/render"));
    assert!(body.contains("20261019T083000Z"));
    assert!(body.contains("/contact/appointment.ics?name=Ira+Sen"));
}

#[tokio::test]
async fn booking_without_schedule_is_unprocessable() {
    let response = post_form(
        app(),
        "/contact/appointment",
        "name=Ira+Sen&email=ira%40example.com&phone=12345",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(response).await;
    assert!(body.contains("Please select a date and time before booking."));
}

#[tokio::test]
async fn ics_download_is_an_attachment() {
    let response = get(
        app(),
        "/contact/appointment.ics?name=Ira+Sen&email=ira%40example.com&phone=12345&date=2026-10-19&time=09%3A00",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("text/calendar; charset=utf-8")
    );
    assert_eq!(
        headers.get(CONTENT_DISPOSITION).and_then(|v| v.to_str().ok()),
        Some(r#"attachment; filename="appointment.ics""#)
    );

    let body = body_text(response).await;
    assert!(body.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(body.contains("DTSTART:20261019T033000Z\r\n"));
    assert!(body.ends_with("END:VCALENDAR\r\n"));
}

#[tokio::test]
async fn ics_with_invalid_fields_is_bad_request() {
    let response = get(app(), "/contact/appointment.ics?name=Ira&date=2026-10-18&time=09%3A00").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ics_outside_booking_window_is_bad_request() {
    for date in ["2026-10-16", "2026-11-06", "9999-12-31"] {
        let response = get(
            app(),
            &format!(
                "/contact/appointment.ics?name=Ira&email=ira%40example.com&phone=12345&date={date}&time=17%3A00"
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{date}");
    }
}

#[tokio::test]
async fn health_and_assets() {
    assert_eq!(get(app(), "/_health").await.status(), StatusCode::NO_CONTENT);

    let response = get(app(), "/static/public/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/css")
    );
}

#[tokio::test]
async fn unknown_paths_render_not_found_page() {
    let response = get(app(), "/pricing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("Page Not Found"));
}
