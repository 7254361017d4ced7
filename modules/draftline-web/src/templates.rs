use draftline_pipeline::PipelineState;

/// Research items longer than this are cut for the collapsed preview; the
/// full text sits behind the disclosure control.
const PREVIEW_CHARS: usize = 100;

/// Render the query form. `error` shows an inline validation message.
pub fn render_query_form(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<p class="form-error">{}</p>"#, html_escape(msg)),
        None => String::new(),
    };

    let content = format!(
        r#"<div class="container">
    <h2>Research Query</h2>
    <p class="intro">Enter your input to generate a draft answer based on the latest research data.</p>
    {error_html}
    <form method="post" action="/" onsubmit="document.getElementById('submit-btn').disabled = true; document.getElementById('submit-btn').textContent = 'Processing...';">
        <textarea name="query" rows="4" placeholder="e.g., What are the latest trends in the industry?"></textarea>
        <button id="submit-btn" type="submit">Submit</button>
    </form>
</div>"#
    );

    build_page("Research Query", &content)
}

/// Render the results page for a completed pipeline run.
pub fn render_results(state: &PipelineState) -> String {
    let mut items = String::new();

    if state.research_data.is_empty() {
        items.push_str(r#"<p class="empty">No research data was found for this query.</p>"#);
    }

    for (i, data) in state.research_data.iter().enumerate() {
        items.push_str(&format!(
            r#"<details class="research-item">
    <summary>{}. {}</summary>
    <p>{}</p>
</details>"#,
            i + 1,
            html_escape(&preview(data)),
            html_escape(data),
        ));
    }

    let content = format!(
        r#"<div class="container">
    <a href="/" class="back">&larr; New query</a>
    <h2>Query</h2>
    <p class="query-echo">{query}</p>
    <h2>Research Data</h2>
    {items}
    <h2>Draft Answer</h2>
    <div class="draft">{draft}</div>
</div>"#,
        query = html_escape(&state.query),
        draft = html_escape(&state.draft),
    );

    build_page("Results", &content)
}

/// Render a failure page for an aborted run.
pub fn render_error(message: &str) -> String {
    let content = format!(
        r#"<div class="container">
    <a href="/" class="back">&larr; New query</a>
    <h2>Something went wrong</h2>
    <p class="form-error">{}</p>
</div>"#,
        html_escape(message)
    );

    build_page("Error", &content)
}

// --- Helpers ---

/// First `PREVIEW_CHARS` characters, with an ellipsis when cut.
fn preview(data: &str) -> String {
    if data.chars().count() > PREVIEW_CHARS {
        let cut: String = data.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        data.to_string()
    }
}

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — Draftline</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.header{{background:#1a1a1a;color:#fff;padding:12px 24px;}}
.header h1{{font-size:18px;font-weight:600;}}
.container{{max-width:760px;margin:0 auto;padding:24px;}}
.container h2{{font-size:17px;margin:20px 0 8px;}}
.intro{{color:#555;font-size:14px;margin-bottom:12px;}}
textarea{{width:100%;padding:10px;border:1px solid #ccc;border-radius:6px;font-size:14px;font-family:inherit;resize:vertical;}}
button{{margin-top:10px;padding:8px 20px;background:#0066cc;color:#fff;border:none;border-radius:4px;font-size:14px;font-weight:500;cursor:pointer;}}
button:hover{{background:#004499;}}
button:disabled{{background:#999;cursor:wait;}}
.form-error{{background:#fdecea;border:1px solid #f5c6cb;color:#c62828;padding:8px 12px;border-radius:4px;font-size:13px;margin-bottom:12px;}}
.query-echo{{background:#fff;border:1px solid #e0e0e0;border-radius:6px;padding:12px;font-size:14px;}}
.research-item{{background:#fff;border:1px solid #e0e0e0;border-radius:6px;padding:10px 12px;margin-bottom:8px;font-size:14px;}}
.research-item summary{{cursor:pointer;color:#333;}}
.research-item p{{margin-top:8px;color:#555;white-space:pre-wrap;}}
.draft{{background:#fff;border:1px solid #e0e0e0;border-radius:6px;padding:14px;font-size:14px;line-height:1.5;white-space:pre-wrap;}}
.empty{{color:#888;font-size:14px;}}
.back{{font-size:13px;color:#0066cc;text-decoration:none;}}
</style>
</head>
<body>
<div class="header">
    <h1>Draftline</h1>
</div>
{content}
</body>
</html>"#,
        title = html_escape(title),
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "a".repeat(250);
        let p = preview(&long);
        assert_eq!(p, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_render_query_form_inline_error() {
        let page = render_query_form(Some("Please enter a query."));
        assert!(page.contains(r#"<p class="form-error">Please enter a query.</p>"#));

        let clean = render_query_form(None);
        assert!(clean.contains("<textarea"));
        assert!(!clean.contains(r#"<p class="form-error">"#));
    }

    #[test]
    fn test_render_results_sections() {
        let mut state = PipelineState::new("solar <trends>");
        state.research_data.push("Result body & details".to_string());
        state.draft = "The draft answer.".to_string();

        let page = render_results(&state);
        assert!(page.contains("solar &lt;trends&gt;"));
        assert!(page.contains("1. Result body &amp; details"));
        assert!(page.contains("The draft answer."));
        assert!(page.contains("<details"));
    }

    #[test]
    fn test_render_results_empty_research() {
        let state = PipelineState::new("q");
        let page = render_results(&state);
        assert!(page.contains("No research data was found"));
    }
}
