// SPDX-License-Identifier: MPL-2.0
//! File intake port and the handle it produces.
//!
//! A [`SourceStore`] turns a user-selected file into a temporary, playable
//! handle (a browser object URL, a registered pipeline URI). The handle must
//! be revoked once the player stops using it. [`SourceHandle`] ties that
//! revocation to `Drop`, so replacing, clearing or dropping the player can
//! never leak a handle.

use crate::domain::error::PlaybackError;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Port for creating and revoking temporary source handles.
pub trait SourceStore {
    /// Registers `file` and returns the handle the media surface can load.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::SourceUnavailable`] if the file cannot be
    /// registered.
    fn create_handle(&self, file: &Path) -> Result<String, PlaybackError>;

    /// Releases a handle previously returned by `create_handle`.
    fn revoke_handle(&self, handle: &str);
}

/// Owned handle to a loaded source; revokes itself when dropped.
pub struct SourceHandle {
    url: String,
    store: Rc<dyn SourceStore>,
}

impl SourceHandle {
    /// Creates a handle for `file` through `store`.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`PlaybackError::SourceUnavailable`].
    pub fn open(store: &Rc<dyn SourceStore>, file: &Path) -> Result<Self, PlaybackError> {
        let url = store.create_handle(file)?;
        log::debug!("created source handle {url} for {}", file.display());
        Ok(Self {
            url,
            store: Rc::clone(store),
        })
    }

    /// The playable handle to hand to the media surface.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for SourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceHandle").field("url", &self.url).finish()
    }
}

impl Drop for SourceHandle {
    fn drop(&mut self) {
        log::debug!("revoking source handle {}", self.url);
        self.store.revoke_handle(&self.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingStore {
        created: RefCell<Vec<String>>,
        revoked: RefCell<Vec<String>>,
    }

    impl SourceStore for RecordingStore {
        fn create_handle(&self, file: &Path) -> Result<String, PlaybackError> {
            if file.as_os_str().is_empty() {
                return Err(PlaybackError::SourceUnavailable("empty path".to_string()));
            }
            let url = format!("blob:{}", file.display());
            self.created.borrow_mut().push(url.clone());
            Ok(url)
        }

        fn revoke_handle(&self, handle: &str) {
            self.revoked.borrow_mut().push(handle.to_string());
        }
    }

    #[test]
    fn drop_revokes_exactly_once() {
        let recorder = Rc::new(RecordingStore::default());
        let store: Rc<dyn SourceStore> = recorder.clone();

        let handle = SourceHandle::open(&store, Path::new("clip.mp4")).unwrap();
        assert_eq!(handle.url(), "blob:clip.mp4");
        assert!(recorder.revoked.borrow().is_empty());

        drop(handle);
        assert_eq!(*recorder.revoked.borrow(), vec!["blob:clip.mp4".to_string()]);
    }

    #[test]
    fn open_propagates_store_errors() {
        let store: Rc<dyn SourceStore> = Rc::new(RecordingStore::default());
        let err = SourceHandle::open(&store, Path::new("")).unwrap_err();
        assert!(matches!(err, PlaybackError::SourceUnavailable(_)));
    }
}
