// src/render.rs
use crate::types::Company;

pub const NO_RESULTS: &str = "<p>No results found.</p>";

/// Renders search hits as the HTML fragment returned by `/process`.
pub fn render_results(companies: &[Company]) -> String {
    let mut html = String::from("<h1>Search Results</h1>");

    if companies.is_empty() {
        html.push_str(NO_RESULTS);
        return html;
    }

    html.push_str("<ul>");
    for company in companies {
        html.push_str(&format!(
            "<li>{} ({}): ${}</li>",
            escape_html(&company.name),
            escape_html(&company.ticker),
            company.price
        ));
    }
    html.push_str("</ul>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_list_items() {
        let html = render_results(&[
            Company::new("Acme Corp", "ACME", 12.5),
            Company::new("Globex", "GBX", 40.0),
        ]);
        assert_eq!(
            html,
            "<h1>Search Results</h1><ul><li>Acme Corp (ACME): $12.5</li><li>Globex (GBX): $40</li></ul>"
        );
    }

    #[test]
    fn renders_empty_message() {
        assert_eq!(render_results(&[]), "<h1>Search Results</h1><p>No results found.</p>");
    }

    #[test]
    fn ampersand_in_name_is_escaped() {
        let html = render_results(&[Company::new("Johnson & Johnson", "JNJ", 147.6)]);
        assert_eq!(
            html,
            "<h1>Search Results</h1><ul><li>Johnson &amp; Johnson (JNJ): $147.6</li></ul>"
        );
    }

    #[test]
    fn escapes_markup_and_shows_nan() {
        let html = render_results(&[Company::new("AT&T <Inc>", "T", f64::NAN)]);
        assert!(html.contains("<li>AT&amp;T &lt;Inc&gt; (T): $NaN</li>"));
    }
}
