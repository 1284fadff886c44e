//! Clipboard capability.
//!
//! The system clipboard may be missing (no display server, headless CI).
//! [`ClipboardAccess::Unavailable`] carries that as a value so callers can
//! warn and carry on.

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::Zeroize;

use super::Password;
use crate::error::{Error, Result};

/// Something that can hold a copied password.
pub trait Clipboard {
    fn set_contents(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by the platform clipboard via `copypasta`.
pub struct SystemClipboard(ClipboardContext);

impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Read back so the provider has taken ownership, then wipe our copy.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// A clipboard that may or may not exist on this system.
pub enum ClipboardAccess {
    Available(Box<dyn Clipboard>),
    Unavailable(String),
}

impl ClipboardAccess {
    /// Open the system clipboard.
    pub fn system() -> Self {
        match ClipboardContext::new() {
            Ok(ctx) => {
                debug!("system clipboard opened");
                ClipboardAccess::Available(Box::new(SystemClipboard(ctx)))
            }
            Err(e) => {
                debug!(error = %e, "system clipboard unavailable");
                ClipboardAccess::Unavailable(e.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ClipboardAccess::Available(_))
    }

    pub fn copy(&mut self, password: &Password) -> Result<()> {
        match self {
            ClipboardAccess::Available(clipboard) => clipboard.set_contents(password.as_str()),
            ClipboardAccess::Unavailable(reason) => {
                Err(Error::ClipboardUnavailable(reason.clone()))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// In-memory clipboard; clones share the same contents.
    #[derive(Clone, Default)]
    pub struct MemoryClipboard {
        pub contents: Rc<RefCell<Option<String>>>,
        pub fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_contents(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::Clipboard("clipboard locked".into()));
            }
            *self.contents.borrow_mut() = Some(text.to_owned());
            Ok(())
        }
    }
}
