//! Print-formatted export of a rendered view.

/// Stylesheet applied to the print document; keeps course tables and the
/// calendar table full-width and avoids page breaks inside rows.
const PRINT_STYLE: &str = r#"
body { font-family: sans-serif; margin: 10px; }
.print-container { width: 90%; max-width: 1200px; margin: 0 auto; }
h2 { font-size: 1.2em; margin-bottom: 5px; }
table { width: 100%; border-collapse: collapse; margin-bottom: 10px; }
th, td { border: 1px solid #ddd; padding: 6px; text-align: left; font-size: 0.9em; word-break: break-word; }
th { background-color: #f2f2f2; }
.course-container { margin-bottom: 20px; }
@media print {
    body { margin: 0; }
    .print-container { width: 100%; max-width: none; }
    .course-container { margin-bottom: 10px; }
    table { font-size: 0.8em; }
    h2 { font-size: 1em; margin-bottom: 3px; }
    th, td { padding: 4px; }
    .calendar-table { font-size: 0.8em; }
    tr { page-break-inside: avoid; }
}
"#;

/// Wraps already-rendered view markup in a standalone printable document.
///
/// The markup is cloned verbatim; the surrounding document only adds the
/// print stylesheet and container.
pub fn render_print_document(view_markup: &str) -> String {
    format!(
        "<html><head><title>Print Schedule</title><style>{PRINT_STYLE}</style></head>\
         <body><div class=\"print-container\">{view_markup}</div></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_markup_in_a_print_container() {
        let doc = render_print_document("<table class=\"calendar-table\"></table>");
        assert!(doc.starts_with("<html><head><title>Print Schedule</title>"));
        assert!(doc.contains("<div class=\"print-container\"><table class=\"calendar-table\">"));
        assert!(doc.contains("page-break-inside: avoid;"));
        assert!(doc.ends_with("</div></body></html>"));
    }
}
