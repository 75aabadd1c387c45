use std::fs;
use std::path::Path;

use base64::Engine;
use tracing::debug;

use crate::error::{CoreError, CoreResult};

/// A PDF packed into a self-contained data URI for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEmbed {
    pub data_uri: String,
    pub byte_len: u64,
}

impl PdfEmbed {
    pub fn iframe_html(&self, height_px: u32) -> String {
        format!(
            r#"<iframe src="{}" width="100%" height="{height_px}px"></iframe>"#,
            self.data_uri
        )
    }
}

pub fn render(path: &Path) -> CoreResult<PdfEmbed> {
    render_with_limit(path, None)
}

/// Like [`render`], but refuses files larger than `max_bytes`.
pub fn render_with_limit(path: &Path, max_bytes: Option<u64>) -> CoreResult<PdfEmbed> {
    if !path.is_file() {
        return Err(CoreError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let size = fs::metadata(path)
        .map_err(|err| CoreError::io(path, err))?
        .len();
    if let Some(limit) = max_bytes.filter(|limit| size > *limit) {
        return Err(CoreError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    let bytes = fs::read(path).map_err(|err| CoreError::io(path, err))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "embedded pdf");
    Ok(PdfEmbed {
        data_uri: format!("data:application/pdf;base64,{encoded}"),
        byte_len: bytes.len() as u64,
    })
}
