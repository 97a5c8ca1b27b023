//! Runtime level changes

use tracing_subscriber::{Registry, filter::LevelFilter, reload};

use crate::config::Level;
use crate::core::{Error, Result};

/// Level filter layer that can be swapped while the logger is live.
pub(crate) type FilterLayer = reload::Layer<LevelFilter, Registry>;

/// Handle for changing the minimum level of a built logger
#[derive(Clone)]
pub struct ReloadHandle {
    filter: reload::Handle<LevelFilter, Registry>,
}

impl std::fmt::Debug for ReloadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadHandle")
            .field("level", &self.current())
            .finish()
    }
}

impl ReloadHandle {
    /// Replace the minimum level.
    ///
    /// # Errors
    /// Returns [`Error::Reload`] once the logger behind the handle is gone.
    pub fn reload(&self, level: Level) -> Result<()> {
        self.filter
            .reload(LevelFilter::from(level))
            .map_err(|e| Error::Reload(e.to_string()))
    }

    /// Level currently in effect, `None` once the logger is gone.
    pub fn current(&self) -> Option<Level> {
        self.filter
            .clone_current()
            .and_then(LevelFilter::into_level)
            .map(Level::from)
    }
}

/// Create the reloadable level filter and its handle.
pub(super) fn create_filter_layer(level: Level) -> (FilterLayer, ReloadHandle) {
    let (layer, filter) = reload::Layer::new(LevelFilter::from(level));
    (layer, ReloadHandle { filter })
}
