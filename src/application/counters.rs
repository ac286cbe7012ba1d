//! Counter names recorded by the form services.

pub const CONTACT_SUBMISSIONS: &str = "suncrest_contact_submissions_total";
pub const CONTACT_DELIVERY_FAILURES: &str = "suncrest_contact_delivery_failures_total";
pub const APPOINTMENTS_BOOKED: &str = "suncrest_appointments_booked_total";
/// Labelled with `form`: `contact` or `appointment`.
pub const FORM_REJECTIONS: &str = "suncrest_form_rejections_total";

/// Name and help text for every counter, in registration order.
pub const COUNTERS: [(&str, &str); 4] = [
    (
        CONTACT_SUBMISSIONS,
        "Total number of contact form submissions received.",
    ),
    (
        CONTACT_DELIVERY_FAILURES,
        "Total number of contact messages the mailer failed to deliver.",
    ),
    (APPOINTMENTS_BOOKED, "Total number of appointments booked."),
    (
        FORM_REJECTIONS,
        "Total number of form submissions rejected by validation, labelled by form.",
    ),
];
