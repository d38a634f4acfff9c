use std::{cell::Cell, rc::Rc};

/// Visibility flags of the full-screen menu overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayFlags {
    /// The overlay is (or is animating to be) open.
    pub view_modal: bool,
    /// The overlay's DOM should be mounted (stays true while the close animation runs).
    pub should_render_modal: bool,
}

/// Create a shared overlay cell: one writer, any number of readers and closers.
pub fn overlay_state() -> (OverlayWriter, OverlayReader) {
    let cell = Rc::new(Cell::new(OverlayFlags::default()));
    (
        OverlayWriter {
            cell: Rc::clone(&cell),
        },
        OverlayReader { cell },
    )
}

/// The single writer of the overlay flags. Not `Clone`.
#[derive(Debug)]
pub struct OverlayWriter {
    cell: Rc<Cell<OverlayFlags>>,
}

impl OverlayWriter {
    /// Open or close the overlay. Opening also mounts it.
    pub fn set_view_modal(&self, open: bool) {
        let mut flags = self.cell.get();
        flags.view_modal = open;
        if open {
            flags.should_render_modal = true;
        }
        self.cell.set(flags);
    }

    /// Flip `view_modal` and return the new value.
    pub fn toggle_view_modal(&self) -> bool {
        let open = !self.cell.get().view_modal;
        self.set_view_modal(open);
        open
    }

    /// Unmount the overlay once its close animation finished. Ignored while it is open.
    pub fn finish_close(&self) {
        unmount_if_closed(&self.cell);
    }

    /// Make another reader of the same cell.
    pub fn reader(&self) -> OverlayReader {
        OverlayReader {
            cell: Rc::clone(&self.cell),
        }
    }

    /// Hand out a handle that can close and unmount the overlay but never open it.
    pub fn closer(&self) -> OverlayCloser {
        OverlayCloser {
            cell: Rc::clone(&self.cell),
        }
    }
}

/// Close-only access to the overlay flags, held by the overlay itself.
#[derive(Clone, Debug)]
pub struct OverlayCloser {
    cell: Rc<Cell<OverlayFlags>>,
}

impl OverlayCloser {
    /// Start closing the overlay; it stays mounted until `finish_close`.
    pub fn close(&self) {
        let mut flags = self.cell.get();
        flags.view_modal = false;
        self.cell.set(flags);
    }

    /// Unmount the overlay once its close animation finished. Ignored while it is open.
    pub fn finish_close(&self) {
        unmount_if_closed(&self.cell);
    }

    /// Current flags.
    pub fn get(&self) -> OverlayFlags {
        self.cell.get()
    }
}

fn unmount_if_closed(cell: &Cell<OverlayFlags>) {
    let mut flags = cell.get();
    if !flags.view_modal {
        flags.should_render_modal = false;
        cell.set(flags);
    }
}

/// Read-only view of the overlay flags.
#[derive(Clone, Debug)]
pub struct OverlayReader {
    cell: Rc<Cell<OverlayFlags>>,
}

impl OverlayReader {
    /// Current flags.
    pub fn get(&self) -> OverlayFlags {
        self.cell.get()
    }

    /// Shorthand for `get().view_modal`.
    pub fn is_open(&self) -> bool {
        self.cell.get().view_modal
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/overlay.rs"]
mod tests;
