//! SVG document framing.

use std::fmt::Write;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n";
const FOOTER: &str = "</svg>";
const PATH_SEPARATOR: &str = "\n\n";

/// Escape text for use in element content or a quoted attribute.
pub(crate) fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// XML declaration, opening `<svg>` tag and `<title>`.
pub fn header(title: &str, width: f64, height: f64) -> String {
    let mut out = String::from(XML_DECLARATION);
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}px\" height=\"{}px\">",
        width, height
    );
    let _ = writeln!(out, "  <title>{}</title>", xml_escape(title));
    out
}

pub fn footer() -> &'static str {
    FOOTER
}

/// Wrap path elements into a complete document.
///
/// Paths are written in the given order, separated by a blank line. With no
/// paths the result is the header immediately followed by the footer.
pub fn assemble<S: AsRef<str>>(title: &str, width: f64, height: f64, paths: &[S]) -> String {
    let mut out = header(title, width, height);
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            out.push_str(PATH_SEPARATOR);
        }
        out.push_str(path.as_ref());
    }
    out.push_str(FOOTER);
    out
}
