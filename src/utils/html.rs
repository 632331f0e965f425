/// Escaping for user-supplied text interpolated into markup.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell: title, pending flash messages, body. The markup is
/// deliberately bare; there is no template engine behind it.
pub fn page(title: &str, flashes: &[String], body: &str) -> String {
    let mut flash_html = String::new();
    for message in flashes {
        flash_html.push_str("<div class=\"flash\">");
        flash_html.push_str(&escape(message));
        flash_html.push_str("</div>\n");
    }
    format!(
        "<!doctype html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}{}\n</body>\n</html>\n",
        escape(title),
        flash_html,
        body
    )
}
