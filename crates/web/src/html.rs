//! HTML helpers shared by the pages.
//!
//! Every attribute the pages emit is double-quoted, so one escaping rule
//! covers both element content and attribute values.

use std::borrow::Cow;

/// Escape text for use in element content and double-quoted attribute
/// values.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Page path of a movie's detail view, `/{id}` with the id percent-encoded.
pub fn detail_path(id: &str) -> String {
    format!("/{}", urlencoding::encode(id))
}

/// Page path of a movie's edit form, `/edit/{id}`.
pub fn edit_path(id: &str) -> String {
    format!("/edit/{}", urlencoding::encode(id))
}

/// Wrap a page body in the shared document shell.
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Catalog</a> | <a href="/create">New movie</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}
