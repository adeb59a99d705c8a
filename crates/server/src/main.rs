//! Minimal web UI to extract clauses from uploaded standards PDFs.
//!
//! One route: GET `/` renders the upload form, POST `/` accepts a multipart
//! PDF upload, runs an independent pipeline invocation for the request and
//! renders the tabular projection with inline download links.

use axum::Router;
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing_subscriber::EnvFilter;

use miranda_core::converter::write_workbook;
use miranda_core::high_level::extract_clause_data;

mod render;

use render::ResultsPage;

/// Maximum accepted upload size (10 MiB).
const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = Router::new()
        .route("/", get(form_page).post(upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE + 64 * 1024));

    let addr = std::env::var("MIRANDA_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("serving on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn form_page() -> Html<String> {
    Html(render::page(&ResultsPage::default()))
}

async fn upload(mut multipart: Multipart) -> (StatusCode, Html<String>) {
    let mut pdf: Option<(String, Vec<u8>)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("pdf") {
                    continue;
                }
                let filename = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .unwrap_or("document.pdf")
                    .to_string();
                match field.bytes().await {
                    Ok(data) => {
                        pdf = Some((filename, data.to_vec()));
                        break;
                    }
                    Err(err) => {
                        return message_page(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to parse upload: {err}"),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(err) => {
                return message_page(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to parse upload: {err}"),
                );
            }
        }
    }

    let Some((filename, data)) = pdf else {
        return message_page(StatusCode::BAD_REQUEST, "No PDF file provided.".to_string());
    };
    if data.is_empty() {
        return message_page(StatusCode::BAD_REQUEST, "Uploaded file is empty.".to_string());
    }
    if data.len() > MAX_UPLOAD_SIZE {
        return message_page(
            StatusCode::PAYLOAD_TOO_LARGE,
            "Uploaded file exceeds size limit.".to_string(),
        );
    }

    // One independent, blocking pipeline invocation per request; the only
    // state shared between requests is the read-only default configuration.
    let outcome = tokio::task::spawn_blocking(move || extract_clause_data(&data, None)).await;
    let (records, rows) = match outcome {
        Ok(Ok(data)) => data,
        Ok(Err(err)) => {
            return message_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to process PDF: {err}"),
            );
        }
        Err(err) => {
            return message_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to process PDF: {err}"),
            );
        }
    };

    let json_payload = match serde_json::to_string_pretty(&records) {
        Ok(payload) => payload,
        Err(err) => {
            return message_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize clauses: {err}"),
            );
        }
    };
    let json_b64 = BASE64.encode(json_payload.as_bytes());

    let mut workbook = std::io::Cursor::new(Vec::new());
    if let Err(err) = write_workbook(&rows, &mut workbook) {
        return message_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to build workbook: {err}"),
        );
    }
    let excel_b64 = BASE64.encode(workbook.into_inner());

    let clause_count = rows.len().saturating_sub(1);
    tracing::info!(clauses = clause_count, file = %filename, "processed upload");

    let stem = filename
        .rsplit_once('.')
        .map_or(filename.as_str(), |(stem, _)| stem)
        .to_string();
    let page = ResultsPage {
        message: Some(format!("Extracted {clause_count} clauses from {filename}.")),
        headers: rows.first().cloned(),
        rows: rows[1..].to_vec(),
        json_b64: Some(json_b64),
        excel_b64: Some(excel_b64),
        filename: Some(stem),
    };
    (StatusCode::OK, Html(render::page(&page)))
}

fn message_page(status: StatusCode, message: String) -> (StatusCode, Html<String>) {
    let page = ResultsPage {
        message: Some(message),
        ..ResultsPage::default()
    };
    (status, Html(render::page(&page)))
}
