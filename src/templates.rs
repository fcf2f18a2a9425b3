//! Standalone HTML page wrapper
//!
//! Wraps a highlighted fragment in a complete HTML document with an embedded
//! stylesheet. The stylesheet is the consumer of the literal class names the
//! rest of the crate emits: the five token classes from
//! [`crate::highlight`] and the `visible`/`invisible` markers from
//! [`crate::controls`].

use crate::highlight::escape_html;

/// Stylesheet for the token classes and visibility markers
const STYLESHEET: &str = "\
body { font-family: monospace; background: #fdfdfd; color: #1a1a1a; }
pre { margin: 1em; }
.key { color: #881391; }
.string { color: #0b7500; }
.number { color: #1c00cf; }
.boolean { color: #aa5d00; }
.null { color: #808080; }
.visible { display: block; }
.invisible { display: none; }
";

/// Wrap a highlighted HTML fragment in a standalone document.
///
/// `body_html` is trusted markup (typically the output of
/// [`crate::highlight::highlight_json`]) and is embedded as-is inside a
/// `<pre>` block; the title is plain text and gets escaped.
pub fn render_page(title: &str, body_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n{style}</style>\n\
         </head>\n\
         <body>\n\
         <pre>{body}</pre>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        style = STYLESHEET,
        body = body_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_contains_fragment_and_styles() {
        let page = render_page("demo", "<span class=\"null\">null</span>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<span class=\"null\">null</span>"));
        assert!(page.contains(".invisible { display: none; }"));
    }

    #[test]
    fn title_is_escaped() {
        let page = render_page("a < b", "x");
        assert!(page.contains("<title>a &lt; b</title>"));
    }
}
