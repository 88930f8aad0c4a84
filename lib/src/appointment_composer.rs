use crate::appointment::AppointmentNotificationRequest;
use crate::email_envelope::EmailEnvelope;

pub const DEFAULT_SENDER: &str = "DentWise <no-reply@resend.dev>";
pub const CONFIRMATION_SUBJECT: &str = "Appointment Confirmation - DentWise";

#[derive(Debug, Clone)]
pub struct AppointmentComposer {
    sender: String,
}

impl Default for AppointmentComposer {
    fn default() -> Self {
        Self::new(DEFAULT_SENDER)
    }
}

impl AppointmentComposer {
    pub fn new(sender: &str) -> Self {
        Self { sender: sender.to_string() }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Pure: no clock, no randomness, no I/O.
    pub fn compose(
        &self,
        request: &AppointmentNotificationRequest,
    ) -> EmailEnvelope {
        let details = [
            ("Doctor", request.doctor_name.as_str()),
            ("Date", request.appointment_date.as_str()),
            ("Time", request.appointment_time.as_str()),
            ("Type", request.appointment_type()),
            ("Duration", request.duration()),
            ("Price", request.price()),
        ];

        EmailEnvelope {
            from: self.sender.clone(),
            to: vec![request.recipient_email.clone()],
            subject: CONFIRMATION_SUBJECT.to_string(),
            html: html_body(&details),
            text: text_body(&details),
        }
    }
}

fn html_body(details: &[(&str, &str)]) -> String {
    let rows = details
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<tr><td style="padding:8px 0;color:#6b7280;">{label}</td><td style="padding:8px 0;font-weight:600;color:#111827;">{}</td></tr>"#,
                escape_html(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Appointment Confirmation</title></head>
<body style="margin:0;padding:24px;background:#f6f9fc;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;">
<div style="max-width:560px;margin:0 auto;background:#ffffff;border-radius:12px;padding:32px;">
<h1 style="margin:0 0 16px;font-size:22px;color:#111827;">Your appointment is confirmed</h1>
<p style="margin:0 0 24px;color:#374151;">Thank you for booking with DentWise. Here are the details of your appointment:</p>
<table style="width:100%;border-collapse:collapse;">
{rows}
</table>
<p style="margin:24px 0 0;color:#6b7280;font-size:13px;">Please arrive 10 minutes early. If you need to reschedule, contact us at least 24 hours in advance.</p>
</div>
</body>
</html>"#
    )
}

fn text_body(details: &[(&str, &str)]) -> String {
    let lines = details.iter().map(|(label, value)| format!("{label}: {value}")).collect::<Vec<_>>().join("\n");

    format!(
        "Your appointment is confirmed\n\nThank you for booking with DentWise. Here are the details of your appointment:\n\n{lines}\n\nPlease arrive 10 minutes early. If you need to reschedule, contact us at least 24 hours in advance.\n"
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
