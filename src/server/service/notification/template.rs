//! New volume email template.

use pulldown_cmark::escape;
use url::Url;

use crate::server::{
    model::{library::Subscriber, title::Title, volume::Volume},
    service::notification::mailer::OutgoingEmail,
};

/// Link to the title page in the web app.
pub fn title_link(frontend_url: &Url, title_id: i32) -> String {
    format!(
        "{}/title/{}",
        frontend_url.as_str().trim_end_matches('/'),
        title_id
    )
}

/// Renders the email announcing `volume` of `title` to one subscriber.
pub fn new_volume_email(
    subscriber: &Subscriber,
    title: &Title,
    volume: &Volume,
    frontend_url: &Url,
) -> OutgoingEmail {
    let link = title_link(frontend_url, title.id);
    let subject = format!("New volume available: {} Vol. {}", title.name, volume.number);

    let text = format!(
        "Hi {name},\n\n\
         {label} of {title} has just been added to Kushon.\n\n\
         See the title: {link}\n\n\
         You are receiving this email because you enabled new volume notifications for this title.\n",
        name = subscriber.name,
        label = volume.label(),
        title = title.name,
        link = link,
    );

    let html = format!(
        "<p>Hi {name},</p>\
         <p><strong>{label}</strong> of <strong>{title}</strong> has just been added to Kushon.</p>\
         <p><a href=\"{link}\">See the title</a></p>\
         <p style=\"color:#888;font-size:12px\">You are receiving this email because you enabled \
         new volume notifications for this title.</p>",
        name = escape_html(&subscriber.name),
        label = escape_html(&volume.label()),
        title = escape_html(&title.name),
        link = escape_html(&link),
    );

    OutgoingEmail {
        to_name: subscriber.name.clone(),
        to_email: subscriber.email.clone(),
        subject,
        text,
        html,
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    // Writing into a String never fails.
    let _ = escape::escape_html(&mut escaped, value);
    escaped
}
