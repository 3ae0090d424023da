//! Singleton image modal state.

/// The image shown enlarged in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalImage {
    pub src: String,
    pub alt: String,
}

impl ModalImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Where a click inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The close glyph.
    CloseButton,
    /// The overlay itself, outside the enlarged image.
    Backdrop,
    /// The enlarged image.
    Content,
}

impl ModalClick {
    pub fn dismisses(&self) -> bool {
        !matches!(self, ModalClick::Content)
    }
}

/// Holds at most one open modal.
///
/// The slot is generic over the handle the platform keeps for an open modal
/// (a DOM subtree in the browser). Opening hands back the handle it replaced
/// so the caller can tear it down first.
#[derive(Debug)]
pub struct ModalSlot<H> {
    current: Option<(ModalImage, H)>,
}

impl<H> Default for ModalSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> ModalSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn image(&self) -> Option<&ModalImage> {
        self.current.as_ref().map(|(image, _)| image)
    }

    /// Stores a newly opened modal, returning the previous one if any.
    pub fn open(&mut self, image: ModalImage, handle: H) -> Option<(ModalImage, H)> {
        self.current.replace((image, handle))
    }

    /// Empties the slot. Closing an empty slot yields `None`.
    pub fn close(&mut self) -> Option<(ModalImage, H)> {
        self.current.take()
    }
}
