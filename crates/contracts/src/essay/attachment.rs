use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for an uploaded essay image or PDF (10 MiB)
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions accepted by the file picker and the drop zone
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

/// Value for the `accept` attribute of the file input
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

/// Reasons a dropped or picked file is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("Formato não suportado: {file_name}. Envie um arquivo JPG, PNG ou PDF.")]
    UnsupportedType { file_name: String },

    #[error("Arquivo muito grande ({size_bytes} bytes). Tamanho máximo do arquivo: 10MB.")]
    TooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("O arquivo está vazio.")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Jpeg,
    Png,
    Pdf,
}

impl AttachmentKind {
    /// Detects the kind from the file extension (case-insensitive)
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(AttachmentKind::Jpeg),
            "png" => Some(AttachmentKind::Png),
            "pdf" => Some(AttachmentKind::Pdf),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AttachmentKind::Jpeg => "image/jpeg",
            AttachmentKind::Png => "image/png",
            AttachmentKind::Pdf => "application/pdf",
        }
    }
}

/// Pending essay file recorded by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub kind: AttachmentKind,
    pub size_bytes: u64,
}

impl Attachment {
    /// Applies the extension allow-list and the size limit.
    pub fn accept(file_name: &str, size_bytes: u64) -> Result<Self, AttachmentError> {
        let kind = AttachmentKind::from_file_name(file_name).ok_or_else(|| {
            AttachmentError::UnsupportedType {
                file_name: file_name.to_string(),
            }
        })?;
        if size_bytes == 0 {
            return Err(AttachmentError::Empty);
        }
        if size_bytes > MAX_ATTACHMENT_BYTES {
            return Err(AttachmentError::TooLarge {
                size_bytes,
                limit_bytes: MAX_ATTACHMENT_BYTES,
            });
        }
        Ok(Self {
            file_name: file_name.to_string(),
            kind,
            size_bytes,
        })
    }

    /// Human readable size, e.g. "2.4 MB"
    pub fn size_label(&self) -> String {
        const KIB: f64 = 1024.0;
        let bytes = self.size_bytes as f64;
        if bytes < KIB {
            format!("{} B", self.size_bytes)
        } else if bytes < KIB * KIB {
            format!("{:.1} KB", bytes / KIB)
        } else {
            format!("{:.1} MB", bytes / (KIB * KIB))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".jpg,.jpeg,.png,.pdf");
    }

    #[test]
    fn test_docx_is_rejected() {
        let err = Attachment::accept("redacao.docx", 2048).unwrap_err();
        assert_eq!(
            err,
            AttachmentError::UnsupportedType {
                file_name: "redacao.docx".into()
            }
        );
    }

    #[test]
    fn test_pdf_under_limit_is_accepted() {
        let att = Attachment::accept("redacao.pdf", 3 * 1024 * 1024).unwrap();
        assert_eq!(att.kind, AttachmentKind::Pdf);
        assert_eq!(att.file_name, "redacao.pdf");
        assert_eq!(att.kind.mime_type(), "application/pdf");
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(Attachment::accept("foto.png", MAX_ATTACHMENT_BYTES).is_ok());
        assert_eq!(
            Attachment::accept("foto.png", MAX_ATTACHMENT_BYTES + 1),
            Err(AttachmentError::TooLarge {
                size_bytes: MAX_ATTACHMENT_BYTES + 1,
                limit_bytes: MAX_ATTACHMENT_BYTES,
            })
        );
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(
            AttachmentKind::from_file_name("SCAN.JPEG"),
            Some(AttachmentKind::Jpeg)
        );
        assert_eq!(AttachmentKind::from_file_name("foto.JpG"), Some(AttachmentKind::Jpeg));
        assert_eq!(AttachmentKind::from_file_name("pdf"), None);
        assert_eq!(AttachmentKind::from_file_name("archive.pdf.zip"), None);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        assert_eq!(Attachment::accept("vazio.pdf", 0), Err(AttachmentError::Empty));
    }

    #[test]
    fn test_size_label() {
        let mut att = Attachment::accept("a.png", 512).unwrap();
        assert_eq!(att.size_label(), "512 B");
        att.size_bytes = 1536;
        assert_eq!(att.size_label(), "1.5 KB");
        att.size_bytes = 5 * 1024 * 1024;
        assert_eq!(att.size_label(), "5.0 MB");
    }
}
