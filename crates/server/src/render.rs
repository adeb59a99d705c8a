//! HTML rendering for the upload form and results table.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// Upload size shown in the form hint, in MiB.
const MAX_UPLOAD_MIB: usize = 10;

/// Characters of clause text shown inline before the "More" expander.
const TEXT_PREVIEW_LIMIT: usize = 220;

/// Everything the results page can carry. A default value renders the bare
/// upload form.
#[derive(Debug, Default)]
pub struct ResultsPage {
    pub message: Option<String>,
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
    pub json_b64: Option<String>,
    pub excel_b64: Option<String>,
    pub filename: Option<String>,
}

fn truncate_text(value: &str, limit: usize) -> (String, bool) {
    if value.chars().count() <= limit {
        return (value.to_string(), false);
    }
    let prefix: String = value.chars().take(limit).collect();
    (format!("{}…", prefix.trim_end()), true)
}

fn build_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "<p>No clause content detected.</p>".to_string();
    }
    let header_html: String = headers
        .iter()
        .map(|column| format!("<th>{}</th>", encode_text(column)))
        .collect();

    let mut body_html = String::new();
    for row in rows {
        body_html.push_str("<tr>");
        for (idx, cell) in row.iter().enumerate() {
            if idx == row.len() - 1 {
                // Text column: truncated preview with a modal expander.
                let (snippet, truncated) = truncate_text(cell, TEXT_PREVIEW_LIMIT);
                let snippet_html = encode_text(&snippet).replace('\n', "<br>");
                if truncated {
                    let full_attr = encode_double_quoted_attribute(cell);
                    body_html.push_str(&format!(
                        "<td class=\"text-cell\"><span>{snippet_html}</span> \
                         <button type=\"button\" class=\"more-btn\" data-full=\"{full_attr}\">More</button></td>"
                    ));
                } else {
                    body_html.push_str(&format!("<td class=\"text-cell\">{snippet_html}</td>"));
                }
            } else {
                body_html.push_str(&format!("<td>{}</td>", encode_text(cell)));
            }
        }
        body_html.push_str("</tr>");
    }

    format!(
        "<div class=\"table-wrap\"><table>\
         <thead><tr>{header_html}</tr></thead>\
         <tbody>{body_html}</tbody>\
         </table></div>"
    )
}

fn build_downloads(page: &ResultsPage) -> String {
    let (Some(json_b64), Some(excel_b64)) = (&page.json_b64, &page.excel_b64) else {
        return String::new();
    };
    let safe_name = encode_double_quoted_attribute(page.filename.as_deref().unwrap_or("clauses"));
    format!(
        "<div class=\"downloads\">\
         <a download=\"{safe_name}.json\" href=\"data:application/json;base64,{json_b64}\">Download JSON</a>\
         <a download=\"{safe_name}.xlsx\" href=\"data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64,{excel_b64}\">Download Excel</a>\
         </div>"
    )
}

/// Renders the full page: form, status, download links and the clause table.
pub fn page(content: &ResultsPage) -> String {
    let table_html = match &content.headers {
        Some(headers) => build_table(headers, &content.rows),
        None => String::new(),
    };
    let download_html = build_downloads(content);
    let status_html = content
        .message
        .as_deref()
        .map(|message| format!("<p class=\"status\">{}</p>", encode_text(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Clause Extractor</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 2rem; background: #f7f7f9; color: #222; }}
    h1 {{ margin-bottom: 1rem; }}
    form {{ background: #fff; padding: 1.5rem; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); margin-bottom: 1.5rem; }}
    .status {{ margin-bottom: 1rem; color: #444; }}
    .downloads {{ display: flex; gap: 1rem; margin-bottom: 1rem; }}
    .downloads a {{ background: #005eb8; color: #fff; padding: 0.5rem 1rem; text-decoration: none; border-radius: 4px; }}
    .downloads a:hover {{ background: #004a91; }}
    .table-wrap {{ overflow-x: auto; background: #fff; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
    table {{ border-collapse: collapse; width: 100%; min-width: 60rem; }}
    th, td {{ padding: 0.75rem; border-bottom: 1px solid #e0e0e0; vertical-align: top; text-align: left; }}
    th {{ background: #f0f4f8; }}
    .text-cell {{ max-width: 24rem; }}
    .text-cell span {{ display: inline-block; white-space: pre-wrap; }}
    .more-btn {{ margin-left: 0.5rem; background: #007a3d; border: none; color: #fff; padding: 0.25rem 0.75rem; border-radius: 4px; cursor: pointer; }}
    .more-btn:hover {{ background: #006030; }}
    .modal {{ position: fixed; inset: 0; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; }}
    .modal.hidden {{ display: none; }}
    .modal-content {{ background: #fff; padding: 1.5rem; max-width: 50rem; max-height: 80vh; overflow-y: auto; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.3); }}
    .modal-content header {{ display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }}
    .modal-content button {{ background: #005eb8; color: #fff; border: none; padding: 0.4rem 0.9rem; border-radius: 4px; cursor: pointer; }}
    .modal-content button:hover {{ background: #004a91; }}
    pre {{ white-space: pre-wrap; margin: 0; font-family: inherit; }}
  </style>
</head>
<body>
  <h1>Standards Clause Extractor</h1>
  <form method="post" action="/" enctype="multipart/form-data">
    <label for="pdf">Select standards PDF:</label>
    <input type="file" id="pdf" name="pdf" accept="application/pdf" required>
    <button type="submit">Extract</button>
    <p class="hint">Maximum upload size: {MAX_UPLOAD_MIB} MiB</p>
  </form>
  {status_html}
  {download_html}
  {table_html}
  <div id="modal" class="modal hidden">
    <div class="modal-content">
      <header>
        <h2>Clause Text</h2>
        <button type="button" id="modal-close">Close</button>
      </header>
      <pre id="modal-text"></pre>
    </div>
  </div>
  <script>
    (function() {{
      const modal = document.getElementById('modal');
      const modalText = document.getElementById('modal-text');
      const closeBtn = document.getElementById('modal-close');
      document.querySelectorAll('.more-btn').forEach(btn => {{
        btn.addEventListener('click', () => {{
          modalText.textContent = btn.dataset.full || '';
          modal.classList.remove('hidden');
        }});
      }});
      if (closeBtn) {{
        closeBtn.addEventListener('click', () => modal.classList.add('hidden'));
      }}
      modal.addEventListener('click', (event) => {{
        if (event.target === modal) {{
          modal.classList.add('hidden');
        }}
      }});
      document.addEventListener('keydown', (event) => {{
        if (event.key === 'Escape') {{
          modal.classList.add('hidden');
        }}
      }});
    }})();
  </script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_appends_ellipsis_only_past_limit() {
        let (short, truncated) = truncate_text("short text", 220);
        assert_eq!(short, "short text");
        assert!(!truncated);

        let long_input = "x".repeat(300);
        let (snippet, truncated) = truncate_text(&long_input, 220);
        assert!(truncated);
        assert!(snippet.ends_with('…'));
        assert_eq!(snippet.chars().count(), 221);
    }

    #[test]
    fn table_escapes_cell_content() {
        let headers = vec!["Clause".to_string(), "Text".to_string()];
        let rows = vec![vec!["4".to_string(), "a < b & c".to_string()]];
        let html = build_table(&headers, &rows);
        assert!(html.contains("a &lt; b &amp; c"));
        assert!(!html.contains("a < b & c"));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let html = build_table(&["Clause".to_string()], &[]);
        assert_eq!(html, "<p>No clause content detected.</p>");
    }

    #[test]
    fn bare_form_page_has_no_downloads() {
        let html = page(&ResultsPage::default());
        assert!(html.contains("<form method=\"post\""));
        assert!(!html.contains("class=\"downloads\""));
    }

    #[test]
    fn long_text_cell_gets_more_button() {
        let headers = vec!["Clause".to_string(), "Text".to_string()];
        let rows = vec![vec!["4".to_string(), "paragraph text ".repeat(40)]];
        let html = build_table(&headers, &rows);
        assert!(html.contains("class=\"more-btn\""));
        assert!(html.contains("data-full=\""));
    }
}
