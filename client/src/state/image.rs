//! Image attached to a post or comment form.
//!
//! DESIGN
//! ======
//! Picking a file shows its preview at once but the bytes arrive later from
//! an async read. Each pick or clear bumps a ticket; a read that finishes
//! under an older ticket is dropped, so a slow read never overwrites a newer
//! choice. Forms hold submit while [`ImageSelection::is_reading`].
//!
//! Methods that drop a preview hand its URL back to the caller, which owns
//! releasing it.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use crate::net::types::ImageFile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSelection {
    pub file: Option<ImageFile>,
    pub preview: Option<String>,
    reading: bool,
    ticket: u64,
}

impl ImageSelection {
    #[must_use]
    pub fn is_reading(&self) -> bool {
        self.reading
    }

    /// A new file was picked. Returns the read ticket and the replaced
    /// preview URL.
    pub fn begin_read(&mut self, preview: Option<String>) -> (u64, Option<String>) {
        self.ticket = self.ticket.wrapping_add(1);
        self.reading = true;
        self.file = None;
        (self.ticket, std::mem::replace(&mut self.preview, preview))
    }

    /// Store the bytes of a finished read. Returns `false` when a later pick
    /// or clear superseded it.
    pub fn finish_read(&mut self, ticket: u64, file: ImageFile) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.reading = false;
        self.file = Some(file);
        true
    }

    /// A read failed; nothing will be uploaded, so the preview goes too.
    pub fn abandon_read(&mut self, ticket: u64) -> Option<String> {
        if ticket != self.ticket {
            return None;
        }
        self.clear()
    }

    /// Drop the selection and cancel any read in flight.
    pub fn clear(&mut self) -> Option<String> {
        self.ticket = self.ticket.wrapping_add(1);
        self.reading = false;
        self.file = None;
        self.preview.take()
    }
}
