//! HTML templates for the review console.
//!
//! Hand-rolled string templates: one base shell plus renderers for the
//! stats cards, the expandable complaint table, and the attachment gallery.

use chrono::{DateTime, Utc};

use crate::documents::{Attachment, AttachmentKind};
use crate::models::{Complaint, ComplaintStatus, StatusSummary};

/// Escape text destined for HTML element content or attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Base HTML shell with the console header and API base controls.
pub fn base_template(title: &str, api_base: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Cyberdesk</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">Cyberdesk</a>
            <span class="tagline">Review complaints, evidence and status at a glance.</span>
        </nav>
        <form method="get" action="/" class="controls">
            <input type="text" name="api_base" value="{}" placeholder="API base (e.g. http://localhost:8000)">
            <button type="submit">Refresh</button>
        </form>
    </header>
    <main>
        {}
    </main>
    <script>
        function toggleRow(id) {{
            var row = document.getElementById('detail-' + id);
            if (row) {{ row.classList.toggle('hidden'); }}
        }}
    </script>
</body>
</html>"#,
        escape(title),
        escape(api_base),
        content
    )
}

/// Error banner shown above the retained list when a refresh fails.
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="error-banner">Failed to load complaints: {}</div>"#,
        escape(message)
    )
}

/// Render the aggregate status counters.
pub fn stats_cards(summary: &StatusSummary) -> String {
    let cards = [
        ("Total Complaints", summary.total),
        ("Submitted", summary.submitted),
        ("In Progress", summary.in_progress),
        ("Resolved", summary.resolved),
        ("Draft", summary.draft),
    ];

    let mut out = String::from(r#"<div class="stats-grid">"#);
    for (label, value) in cards {
        out.push_str(&format!(
            r#"
        <div class="stat-card">
            <h4>{}</h4>
            <div class="value">{}</div>
        </div>"#,
            label, value
        ));
    }
    out.push_str("</div>");
    out
}

fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

fn display(field: &Option<String>) -> String {
    match field {
        Some(value) if !value.is_empty() => escape(value),
        _ => "-".to_string(),
    }
}

/// Render the complaint table. Each complaint gets a summary row plus a
/// hidden detail row toggled by clicking the summary.
pub fn complaints_table(complaints: &[(Complaint, Vec<Attachment>)]) -> String {
    if complaints.is_empty() {
        return r#"<p class="empty">No complaints loaded.</p>"#.to_string();
    }

    let mut rows = String::new();
    for (complaint, attachments) in complaints {
        let status = complaint.complaint_status();
        let status_class = match status {
            ComplaintStatus::Resolved => "status resolved",
            ComplaintStatus::InProgress => "status in-progress",
            ComplaintStatus::Submitted => "status submitted",
            _ => "status",
        };

        rows.push_str(&format!(
            r#"
        <tr class="summary" onclick="toggleRow({id})">
            <td>{id}</td>
            <td>{reference}</td>
            <td>{ctype}</td>
            <td>{category}</td>
            <td>{name}</td>
            <td>{phone}</td>
            <td><span class="{status_class}">{status}</span></td>
            <td>{created}</td>
        </tr>
        <tr id="detail-{id}" class="detail hidden">
            <td colspan="8">
                {detail}
            </td>
        </tr>
        "#,
            id = complaint.id,
            reference = display(&complaint.reference_number),
            ctype = display(&complaint.complaint_type),
            category = display(&complaint.main_category),
            name = display(&complaint.name),
            phone = display(&complaint.phone_number),
            status_class = status_class,
            status = status.label(),
            created = format_timestamp(&complaint.created_at),
            detail = complaint_detail(complaint, attachments),
        ));
    }

    format!(
        r#"
    <table class="complaint-listing">
        <thead>
            <tr>
                <th>ID</th>
                <th>Ref #</th>
                <th>Type</th>
                <th>Category</th>
                <th>Name</th>
                <th>Phone</th>
                <th>Status</th>
                <th>Created</th>
            </tr>
        </thead>
        <tbody>
            {}
        </tbody>
    </table>
    "#,
        rows
    )
}

/// Expanded detail for one complaint: contact fields plus the gallery.
fn complaint_detail(complaint: &Complaint, attachments: &[Attachment]) -> String {
    let wa_id = complaint
        .user
        .as_ref()
        .map(|u| escape(&u.wa_id))
        .unwrap_or_else(|| "-".to_string());
    let updated = complaint
        .updated_at
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string());

    format!(
        r#"<dl class="detail-fields">
            <dt>Email</dt><dd>{}</dd>
            <dt>District</dt><dd>{}</dd>
            <dt>Fraud Type</dt><dd>{}</dd>
            <dt>Sub Type</dt><dd>{}</dd>
            <dt>WhatsApp</dt><dd>{}</dd>
            <dt>Updated</dt><dd>{}</dd>
        </dl>
        {}"#,
        display(&complaint.email_id),
        display(&complaint.district),
        display(&complaint.fraud_type),
        display(&complaint.sub_type),
        wa_id,
        updated,
        attachment_gallery(attachments),
    )
}

/// Render the evidence gallery: inline previews for images, download links
/// for everything else. Empty when the complaint has no resolvable evidence.
pub fn attachment_gallery(attachments: &[Attachment]) -> String {
    if attachments.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for attachment in attachments {
        let url = escape(&attachment.url);
        let label = escape(&attachment.label);
        match attachment.kind {
            AttachmentKind::Image => items.push_str(&format!(
                r#"
        <div class="doc-item">
            <img src="{url}" loading="lazy" alt="{label}">
            <div class="meta">
                <span>{label}</span>
                <a href="{url}" target="_blank" rel="noreferrer">Open</a>
            </div>
        </div>"#,
            )),
            AttachmentKind::Generic => items.push_str(&format!(
                r#"
        <div class="doc-item">
            <div class="meta">
                <span>{label}</span>
                <a href="{url}" target="_blank" rel="noreferrer">Download</a>
            </div>
        </div>"#,
            )),
        }
    }

    format!(r#"<div class="doc-gallery">{}</div>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentsField;

    fn fixture(id: i64, status: &str) -> Complaint {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "reference_number": format!("CC-2024-{:04}", id),
            "status": status,
            "name": "A. Citizen",
            "created_at": "2024-03-01T10:15:00Z",
            "documents": null
        }))
        .expect("fixture complaint")
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_empty_table_renders_no_rows() {
        let html = complaints_table(&[]);
        assert!(!html.contains("<tr"));
        assert!(html.contains("No complaints loaded"));
    }

    #[test]
    fn test_table_has_summary_and_detail_rows() {
        let rows = vec![(fixture(3, "submitted"), Vec::new())];
        let html = complaints_table(&rows);
        assert!(html.contains("toggleRow(3)"));
        assert!(html.contains(r#"id="detail-3""#));
        assert!(html.contains("CC-2024-0003"));
        assert!(html.contains("Submitted"));
    }

    #[test]
    fn test_gallery_distinguishes_images_from_downloads() {
        let attachments = vec![
            Attachment {
                url: "http://localhost:8000/media/a.png".into(),
                label: "a.png".into(),
                kind: AttachmentKind::Image,
            },
            Attachment {
                url: "http://localhost:8000/media/b.pdf".into(),
                label: "b.pdf".into(),
                kind: AttachmentKind::Generic,
            },
        ];
        let html = attachment_gallery(&attachments);
        assert!(html.contains(r#"<img src="http://localhost:8000/media/a.png""#));
        assert!(html.contains(">Download</a>"));
        assert!(!html.contains(r#"<img src="http://localhost:8000/media/b.pdf""#));
    }

    #[test]
    fn test_gallery_empty_for_no_attachments() {
        assert!(attachment_gallery(&[]).is_empty());
    }

    #[test]
    fn test_user_data_is_escaped() {
        let mut complaint = fixture(1, "draft");
        complaint.name = Some("<script>alert(1)</script>".to_string());
        let html = complaints_table(&[(complaint, Vec::new())]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_fixture_documents_absent() {
        assert!(matches!(fixture(1, "draft").documents, DocumentsField::Absent));
    }
}
