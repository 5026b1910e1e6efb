//! Terminal state handling.

use console::Term;

/// Hides the cursor while alive and restores it on drop.
///
/// The guard restores the cursor on every exit path that unwinds the stack:
/// normal return, fatal error and interrupt. Nothing is written when stdout
/// is not a terminal.
pub struct CursorGuard {
    term: Term,
}

impl CursorGuard {
    /// Hides the cursor of stdout.
    pub fn hide() -> Self {
        let term = Term::stdout();
        if term.is_term() {
            // A failed hide leaves nothing to restore.
            let _ = term.hide_cursor();
        }
        Self { term }
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if self.term.is_term() {
            let _ = self.term.show_cursor();
        }
    }
}
