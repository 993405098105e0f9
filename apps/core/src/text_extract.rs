//! Text extraction module for uploaded documents
//! Supports: TXT, MD, CSV, JSON, PDF, DOCX
//!
//! The analytics engine only ever sees the decoded text produced here.

use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Read a document from disk and extract its text
pub fn extract_text_from_path(path: impl AsRef<Path>) -> Result<String, AppError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    extract_text_from_bytes(file_name, &data)
}

/// Extract text content from binary file data based on file extension
///
/// Files without a known extension are sniffed for PDF and DOCX signatures.
pub fn extract_text_from_bytes(file_name: &str, file_data: &[u8]) -> Result<String, AppError> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    info!("Extracting text from file: {} (type: {})", file_name, extension);

    match extension.as_str() {
        // Plain text formats
        "txt" | "md" | "csv" | "json" => Ok(decode_text(file_data)),

        "pdf" => extract_pdf_text(file_data),

        "docx" => extract_docx_text(file_data),

        _ => match infer::get(file_data).map(|kind| kind.extension()) {
            Some("pdf") => extract_pdf_text(file_data),
            Some("docx") | Some("zip") => extract_docx_text(file_data),
            _ => Err(AppError::UnsupportedFormat(if extension.is_empty() {
                file_name.to_string()
            } else {
                extension
            })),
        },
    }
}

/// Decode plain text as UTF-8, falling back to Latin-1 which accepts any byte
fn decode_text(file_data: &[u8]) -> String {
    match std::str::from_utf8(file_data) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Content is not valid UTF-8 ({}), decoding as Latin-1", e);
            file_data
                .iter()
                .map(|&b| b as char)
                .collect::<String>()
                .trim()
                .to_string()
        }
    }
}

/// Extract text from PDF file
fn extract_pdf_text(file_data: &[u8]) -> Result<String, AppError> {
    info!("Extracting text from PDF...");

    match pdf_extract::extract_text_from_mem(file_data) {
        Ok(text) => {
            let cleaned = clean_extracted_text(&text);
            info!("PDF extraction successful: {} characters", cleaned.len());
            Ok(cleaned)
        }
        Err(e) => {
            warn!("PDF extraction failed: {}", e);
            Err(AppError::Extraction(format!("Failed to extract PDF text: {}", e)))
        }
    }
}

/// Extract text from DOCX file: body paragraphs first, then table rows
fn extract_docx_text(file_data: &[u8]) -> Result<String, AppError> {
    info!("Extracting text from DOCX...");

    let docx = docx_rs::read_docx(file_data).map_err(|e| {
        warn!("DOCX extraction failed: {}", e);
        AppError::Extraction(format!("Failed to extract DOCX text: {}", e))
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    let mut table_rows: Vec<String> = Vec::new();

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                let text = paragraph_text(para);
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
            docx_rs::DocumentChild::Table(table) => {
                for row in &table.rows {
                    let docx_rs::TableChild::TableRow(row) = row;
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .map(|cell| {
                            let docx_rs::TableRowChild::TableCell(cell) = cell;
                            table_cell_text(cell)
                        })
                        .collect();
                    let line = cells.join(" ");
                    if !line.trim().is_empty() {
                        table_rows.push(line);
                    }
                }
            }
            _ => {}
        }
    }

    paragraphs.extend(table_rows);
    let cleaned = clean_extracted_text(&paragraphs.join("\n"));
    info!("DOCX extraction successful: {} characters", cleaned.len());
    Ok(cleaned)
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| {
            if let docx_rs::ParagraphChild::Run(run) = pc {
                Some(
                    run.children
                        .iter()
                        .filter_map(|rc| {
                            if let docx_rs::RunChild::Text(t) = rc {
                                Some(t.text.clone())
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

fn table_cell_text(cell: &docx_rs::TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| {
            if let docx_rs::TableCellContent::Paragraph(para) = content {
                Some(paragraph_text(para))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean up extracted text
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
