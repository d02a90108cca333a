//! Upload form state.
//!
//! # Design
//! - Text inputs stay as strings; files are checked by MIME type the moment they are picked.
//! - A rejected pick keeps the previous selection.
//! - The form yields multipart fields only once every required input is present.

use crate::core::categories::DEFAULT_UPLOAD_CATEGORY;
use crate::core::format::format_megabytes;
use thiserror::Error;

/// Shown when the upload request fails without a server message.
pub const UPLOAD_FAILED: &str = "Failed to upload video. Please try again.";

/// Validation and submission failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Picked video is not `video/*`.
    #[error("Please select a valid video file")]
    InvalidVideo,
    /// Picked thumbnail is not `image/*`.
    #[error("Please select a valid image file for thumbnail")]
    InvalidThumbnail,
    /// A required input is empty.
    #[error("Please fill all the required fields")]
    MissingFields,
    /// The transport or service rejected the upload.
    #[error("{0}")]
    Failed(String),
}

/// Which file input a pick came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSlot {
    /// The video file.
    Video,
    /// The thumbnail image.
    Thumbnail,
}

impl MediaSlot {
    /// MIME prefix accepted by the slot.
    #[must_use]
    pub const fn mime_prefix(self) -> &'static str {
        match self {
            Self::Video => "video/",
            Self::Thumbnail => "image/",
        }
    }

    /// `accept` attribute for the file input.
    #[must_use]
    pub const fn accept(self) -> &'static str {
        match self {
            Self::Video => "video/*",
            Self::Thumbnail => "image/*",
        }
    }

    const fn rejection(self) -> UploadError {
        match self {
            Self::Video => UploadError::InvalidVideo,
            Self::Thumbnail => UploadError::InvalidThumbnail,
        }
    }
}

/// Check a picked file's MIME type against the slot.
///
/// # Errors
///
/// Returns the slot's rejection when the type does not match.
pub fn validate_media(slot: MediaSlot, mime: &str) -> Result<(), UploadError> {
    if mime.to_ascii_lowercase().starts_with(slot.mime_prefix()) {
        Ok(())
    } else {
        Err(slot.rejection())
    }
}

/// A picked file plus a handle to the underlying browser object.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H> {
    /// File name.
    pub name: String,
    /// Reported MIME type.
    pub mime: String,
    /// Size in bytes.
    pub size_bytes: f64,
    /// Browser handle sent with the form.
    pub handle: H,
}

impl<H> SelectedFile<H> {
    /// `Selected: name (x.xx MB)`.
    #[must_use]
    pub fn summary_with_size(&self) -> String {
        format!("Selected: {} ({})", self.name, format_megabytes(self.size_bytes))
    }

    /// `Selected: name`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Selected: {}", self.name)
    }
}

/// Text parts of the multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFields {
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// Chosen category.
    pub category: String,
}

/// Everything needed to send the upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSubmission<H> {
    /// Text fields.
    pub fields: UploadFields,
    /// Video file.
    pub video: H,
    /// Thumbnail file.
    pub thumbnail: H,
}

/// Upload form inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadForm<H> {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Category select.
    pub category: String,
    /// Accepted video pick.
    pub video: Option<SelectedFile<H>>,
    /// Accepted thumbnail pick.
    pub thumbnail: Option<SelectedFile<H>>,
}

impl<H> Default for UploadForm<H> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: DEFAULT_UPLOAD_CATEGORY.to_string(),
            video: None,
            thumbnail: None,
        }
    }
}

impl<H: Clone> UploadForm<H> {
    /// Accept a picked file if its type fits the slot.
    ///
    /// # Errors
    ///
    /// Returns the slot's rejection and leaves the previous pick in place.
    pub fn pick(&mut self, slot: MediaSlot, file: SelectedFile<H>) -> Result<(), UploadError> {
        validate_media(slot, &file.mime)?;
        match slot {
            MediaSlot::Video => self.video = Some(file),
            MediaSlot::Thumbnail => self.thumbnail = Some(file),
        }
        Ok(())
    }

    /// Build the submission once every required input is present.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::MissingFields`] when anything required is empty.
    pub fn submission(&self) -> Result<UploadSubmission<H>, UploadError> {
        let title = self.title.trim();
        let description = self.description.trim();
        match (&self.video, &self.thumbnail) {
            (Some(video), Some(thumbnail)) if !title.is_empty() && !description.is_empty() => {
                Ok(UploadSubmission {
                    fields: UploadFields {
                        title: title.to_string(),
                        description: description.to_string(),
                        category: self.category.clone(),
                    },
                    video: video.handle.clone(),
                    thumbnail: thumbnail.handle.clone(),
                })
            }
            _ => Err(UploadError::MissingFields),
        }
    }
}

/// Rounded percentage of bytes sent, clamped to `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(loaded: f64, total: f64) -> u8 {
    if !(total.is_finite() && total > 0.0 && loaded.is_finite()) {
        return 0;
    }
    (loaded * 100.0 / total).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str) -> SelectedFile<()> {
        SelectedFile {
            name: name.to_string(),
            mime: mime.to_string(),
            size_bytes: 2.5 * 1024.0 * 1024.0,
            handle: (),
        }
    }

    #[test]
    fn wrong_mime_types_are_rejected_on_pick() {
        let mut form = UploadForm::<()>::default();
        assert_eq!(
            form.pick(MediaSlot::Video, file("notes.txt", "text/plain")),
            Err(UploadError::InvalidVideo)
        );
        assert_eq!(
            form.pick(MediaSlot::Thumbnail, file("clip.mp4", "video/mp4")),
            Err(UploadError::InvalidThumbnail)
        );
        assert!(form.video.is_none());
        assert!(form.thumbnail.is_none());
        assert_eq!(
            UploadError::InvalidThumbnail.to_string(),
            "Please select a valid image file for thumbnail"
        );
    }

    #[test]
    fn rejected_pick_keeps_previous_selection() {
        let mut form = UploadForm::<()>::default();
        assert!(form.pick(MediaSlot::Video, file("a.mp4", "video/mp4")).is_ok());
        assert!(form.pick(MediaSlot::Video, file("b.png", "image/png")).is_err());
        assert_eq!(form.video.as_ref().map(|f| f.name.as_str()), Some("a.mp4"));
    }

    #[test]
    fn submission_requires_every_field() {
        let mut form = UploadForm::<()>::default();
        form.title = "Trip".into();
        form.description = "   ".into();
        assert!(form.pick(MediaSlot::Video, file("a.mp4", "video/mp4")).is_ok());
        assert!(form.pick(MediaSlot::Thumbnail, file("a.jpg", "image/jpeg")).is_ok());
        assert_eq!(form.submission(), Err(UploadError::MissingFields));
        form.description = "Summer".into();
        let submission = form.submission().expect("complete form");
        assert_eq!(submission.fields.category, "Entertainment");
        assert_eq!(submission.fields.title, "Trip");
    }

    #[test]
    fn progress_rounds_and_clamps() {
        assert_eq!(progress_percent(0.0, 0.0), 0);
        assert_eq!(progress_percent(1.0, 3.0), 33);
        assert_eq!(progress_percent(2.0, 3.0), 67);
        assert_eq!(progress_percent(5.0, 4.0), 100);
        assert_eq!(progress_percent(f64::NAN, 4.0), 0);
    }

    #[test]
    fn selection_summary_shows_megabytes() {
        assert_eq!(
            file("a.mp4", "video/mp4").summary_with_size(),
            "Selected: a.mp4 (2.50 MB)"
        );
    }
}
