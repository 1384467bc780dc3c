//! PDF text extraction for uploaded documents.

use std::panic::{catch_unwind, AssertUnwindSafe};

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts lowercased text from an in-memory PDF.
///
/// `label` names the upload in error messages ("resume", "linkedin"). Parsing runs on
/// the blocking pool. Every failure, including a panic inside the PDF parser, becomes
/// `AppError::ExtractionFailed`.
pub async fn extract_pdf_text(bytes: Bytes, label: &'static str) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::ExtractionFailed(format!("{label}: file is empty")));
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::ExtractionFailed(format!(
            "{label}: file is not a PDF"
        )));
    }

    let text = tokio::task::spawn_blocking(move || parse_pdf(&bytes))
        .await
        .map_err(|e| AppError::ExtractionFailed(format!("{label}: extraction task failed: {e}")))?
        .map_err(|reason| AppError::ExtractionFailed(format!("{label}: {reason}")))?;

    debug!("Extracted {} characters from {label}", text.len());
    Ok(text.to_lowercase())
}

fn parse_pdf(bytes: &[u8]) -> Result<String, String> {
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(format!("could not read PDF: {e}")),
        Err(_) => Err("PDF parser aborted on malformed input".to_string()),
    }
}

/// Minimal single-page PDF with one line of Helvetica text, for tests.
#[cfg(test)]
pub(crate) fn minimal_pdf(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>".to_string(),
        format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj {body} endobj\n", i + 1).as_bytes());
    }

    let xref_start = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer << /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}
