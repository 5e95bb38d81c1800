//! Shared email content templates
//!
//! Canonical content generators for contact form emails, used by both
//! production (Mailgun) and mock email services. Bodies are askama
//! templates under `templates/`; the HTML one escapes all submitter text.

use askama::Template;

#[derive(Template)]
#[template(path = "contact.txt")]
struct ContactText<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactHtml<'a> {
    name: &'a str,
    email: &'a str,
    /// Message split on newlines, rejoined with `<br>` in the template
    message_lines: Vec<&'a str>,
}

/// Subject line for a contact form email.
pub fn contact_subject(sender_name: &str) -> String {
    format!("Portfolio Contact: Message from {}", sender_name)
}

/// Render the plain-text body for a contact form email.
pub fn contact_text(
    sender_name: &str,
    sender_email: &str,
    message: &str,
) -> Result<String, askama::Error> {
    ContactText {
        name: sender_name,
        email: sender_email,
        message,
    }
    .render()
}

/// Render the HTML body for a contact form email.
pub fn contact_html(
    sender_name: &str,
    sender_email: &str,
    message: &str,
) -> Result<String, askama::Error> {
    ContactHtml {
        name: sender_name,
        email: sender_email,
        message_lines: message
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect(),
    }
    .render()
}
