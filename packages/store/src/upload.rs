//! # Notice attachments
//!
//! The notice form carries at most one image and one PDF. Each is an
//! [`UploadSlot`]: empty, an already-stored file being kept, or a newly picked
//! file waiting to be sent. Picking a file replaces whatever the slot held,
//! but only if it passes [`UploadLimits::check`].
//!
//! [`notice_form_parts`] lays out the multipart body in the order the backend
//! reads it: text fields first, then `image` / `current_image_url`, then
//! `pdfAttachment` / `current_pdf_url`.

use serde::{Deserialize, Serialize};

use crate::notice::{Notice, NoticeFields};

const MIB: u64 = 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image,
    Pdf,
}

impl AttachmentKind {
    /// Multipart field for a newly picked file.
    pub fn file_field(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Pdf => "pdfAttachment",
        }
    }

    /// Multipart field naming a stored file to keep.
    pub fn keep_field(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "current_image_url",
            AttachmentKind::Pdf => "current_pdf_url",
        }
    }

    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            AttachmentKind::Image => &["image/jpeg", "image/png", "image/gif"],
            AttachmentKind::Pdf => &["application/pdf"],
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "image/jpeg,image/png,image/gif",
            AttachmentKind::Pdf => "application/pdf",
        }
    }

    fn type_names(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "JPG, PNG, GIF",
            AttachmentKind::Pdf => "PDF",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            AttachmentKind::Image => "Image",
            AttachmentKind::Pdf => "PDF",
        }
    }
}

/// A picked file was rejected; the slot keeps its previous content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("You can only upload {allowed} files!")]
    UnsupportedType { allowed: &'static str, mime: String },
    #[error("{noun} must be smaller than {limit_mb}MB!")]
    TooLarge { noun: &'static str, limit_mb: u64 },
}

/// Size caps per attachment kind. A file must be strictly smaller than the cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLimits {
    #[serde(default = "default_image_max_bytes")]
    pub image_max_bytes: u64,
    #[serde(default = "default_pdf_max_bytes")]
    pub pdf_max_bytes: u64,
}

fn default_image_max_bytes() -> u64 {
    2 * MIB
}

fn default_pdf_max_bytes() -> u64 {
    10 * MIB
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            image_max_bytes: default_image_max_bytes(),
            pdf_max_bytes: default_pdf_max_bytes(),
        }
    }
}

impl UploadLimits {
    pub fn max_bytes(&self, kind: AttachmentKind) -> u64 {
        match kind {
            AttachmentKind::Image => self.image_max_bytes,
            AttachmentKind::Pdf => self.pdf_max_bytes,
        }
    }

    /// Check a picked file before its bytes are read. An empty `mime` (some
    /// browsers omit it) is guessed from the file name.
    pub fn check(
        &self,
        kind: AttachmentKind,
        name: &str,
        mime: &str,
        size: u64,
    ) -> Result<String, UploadError> {
        let mime = if mime.is_empty() {
            guess_mime(name).unwrap_or_default().to_string()
        } else {
            mime.to_ascii_lowercase()
        };
        if !kind.mime_types().contains(&mime.as_str()) {
            return Err(UploadError::UnsupportedType {
                allowed: kind.type_names(),
                mime,
            });
        }
        let limit = self.max_bytes(kind);
        if size >= limit {
            return Err(UploadError::TooLarge {
                noun: kind.noun(),
                limit_mb: limit / MIB,
            });
        }
        Ok(mime)
    }
}

fn guess_mime(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// A newly picked file, held in memory until the form is submitted.
#[derive(Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UploadSlot {
    #[default]
    Empty,
    /// A file already stored by the backend, kept unless replaced or removed.
    Existing { name: String, url: String },
    Pending(PendingFile),
}

impl UploadSlot {
    /// Slots for the stored image and PDF of `notice`, for the edit form.
    pub fn from_notice(notice: &Notice) -> (UploadSlot, UploadSlot) {
        let image = notice
            .image()
            .map_or(UploadSlot::Empty, |url| UploadSlot::Existing {
                name: "current_image".to_string(),
                url: url.to_string(),
            });
        let pdf = notice
            .pdf()
            .map_or(UploadSlot::Empty, |a| UploadSlot::Existing {
                name: a.filename.clone(),
                url: a.url.clone(),
            });
        (image, pdf)
    }

    /// Validate and accept a picked file; on error the slot is unchanged.
    pub fn select(
        &mut self,
        kind: AttachmentKind,
        limits: &UploadLimits,
        name: String,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<(), UploadError> {
        let mime = limits.check(kind, &name, mime, bytes.len() as u64)?;
        *self = UploadSlot::Pending(PendingFile { name, mime, bytes });
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = UploadSlot::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, UploadSlot::Empty)
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            UploadSlot::Empty => None,
            UploadSlot::Existing { name, .. } => Some(name),
            UploadSlot::Pending(file) => Some(&file.name),
        }
    }

    fn push_part(&self, kind: AttachmentKind, parts: &mut Vec<FormPart>) {
        match self {
            UploadSlot::Empty => {}
            UploadSlot::Existing { url, .. } => parts.push(FormPart::Text {
                name: kind.keep_field(),
                value: url.clone(),
            }),
            UploadSlot::Pending(file) => parts.push(FormPart::File {
                name: kind.file_field(),
                file: file.clone(),
            }),
        }
    }
}

/// One multipart field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: PendingFile },
}

impl FormPart {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Multipart body for `POST /notices` and `PUT /notices/:id`.
pub fn notice_form_parts(
    fields: &NoticeFields,
    image: &UploadSlot,
    pdf: &UploadSlot,
) -> Vec<FormPart> {
    let mut parts = vec![
        FormPart::Text {
            name: "title",
            value: fields.title.clone(),
        },
        FormPart::Text {
            name: "content",
            value: fields.content.clone(),
        },
        FormPart::Text {
            name: "category",
            value: fields.category.as_str().to_string(),
        },
    ];
    image.push_part(AttachmentKind::Image, &mut parts);
    pdf.push_part(AttachmentKind::Pdf, &mut parts);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeCategory;

    fn fields() -> NoticeFields {
        NoticeFields {
            title: "Lift maintenance".to_string(),
            content: "Block C lift is down Tuesday.".to_string(),
            category: NoticeCategory::Maintenance,
        }
    }

    #[test]
    fn test_image_limits() {
        let limits = UploadLimits::default();
        assert_eq!(
            limits.check(AttachmentKind::Image, "a.png", "image/png", 2 * MIB - 1),
            Ok("image/png".to_string())
        );
        assert_eq!(
            limits.check(AttachmentKind::Image, "a.png", "image/png", 2 * MIB),
            Err(UploadError::TooLarge {
                noun: "Image",
                limit_mb: 2
            })
        );
        let err = limits
            .check(AttachmentKind::Image, "a.webp", "image/webp", 10)
            .unwrap_err();
        assert_eq!(err.to_string(), "You can only upload JPG, PNG, GIF files!");
    }

    #[test]
    fn test_pdf_limits() {
        let limits = UploadLimits::default();
        assert!(limits
            .check(AttachmentKind::Pdf, "rules.pdf", "application/pdf", 9 * MIB)
            .is_ok());
        let err = limits
            .check(AttachmentKind::Pdf, "rules.pdf", "application/pdf", 10 * MIB)
            .unwrap_err();
        assert_eq!(err.to_string(), "PDF must be smaller than 10MB!");
        assert!(limits
            .check(AttachmentKind::Pdf, "photo.jpg", "image/jpeg", 10)
            .is_err());
    }

    #[test]
    fn test_missing_mime_is_guessed_from_name() {
        let limits = UploadLimits::default();
        assert_eq!(
            limits.check(AttachmentKind::Image, "photo.JPG", "", 10),
            Ok("image/jpeg".to_string())
        );
        assert!(limits.check(AttachmentKind::Pdf, "notes", "", 10).is_err());
    }

    #[test]
    fn test_last_selection_wins_and_rejection_keeps_slot() {
        let limits = UploadLimits::default();
        let mut slot = UploadSlot::Empty;
        slot.select(AttachmentKind::Image, &limits, "one.png".into(), "image/png", vec![1])
            .unwrap();
        slot.select(AttachmentKind::Image, &limits, "two.gif".into(), "image/gif", vec![2])
            .unwrap();
        assert_eq!(slot.display_name(), Some("two.gif"));

        let rejected =
            slot.select(AttachmentKind::Image, &limits, "three.bmp".into(), "image/bmp", vec![3]);
        assert!(rejected.is_err());
        assert_eq!(slot.display_name(), Some("two.gif"));

        slot.clear();
        assert!(slot.is_empty());
    }

    #[test]
    fn test_form_parts_order_with_new_files() {
        let limits = UploadLimits::default();
        let mut image = UploadSlot::Empty;
        image
            .select(AttachmentKind::Image, &limits, "lift.png".into(), "image/png", vec![0; 4])
            .unwrap();
        let mut pdf = UploadSlot::Empty;
        pdf.select(AttachmentKind::Pdf, &limits, "plan.pdf".into(), "application/pdf", vec![0; 4])
            .unwrap();

        let names: Vec<_> = notice_form_parts(&fields(), &image, &pdf)
            .iter()
            .map(FormPart::name)
            .collect();
        assert_eq!(names, ["title", "content", "category", "image", "pdfAttachment"]);
    }

    #[test]
    fn test_form_parts_keep_existing_files() {
        let image = UploadSlot::Existing {
            name: "current_image".to_string(),
            url: "https://cdn.example/lift.png".to_string(),
        };
        let parts = notice_form_parts(&fields(), &image, &UploadSlot::Empty);
        assert_eq!(parts.len(), 4);
        assert_eq!(
            parts[3],
            FormPart::Text {
                name: "current_image_url",
                value: "https://cdn.example/lift.png".to_string()
            }
        );
        assert_eq!(
            parts[2],
            FormPart::Text {
                name: "category",
                value: "maintenance".to_string()
            }
        );
    }

    #[test]
    fn test_slots_from_notice() {
        let notice: Notice = serde_json::from_str(
            r#"{"id":1,"title":"t","content":"c","category":"general",
                "image_url":"https://cdn.example/i.png",
                "attachments":{"filename":"f.pdf","url":"https://cdn.example/f.pdf"}}"#,
        )
        .unwrap();
        let (image, pdf) = UploadSlot::from_notice(&notice);
        assert_eq!(image.display_name(), Some("current_image"));
        assert_eq!(pdf.display_name(), Some("f.pdf"));
    }
}
