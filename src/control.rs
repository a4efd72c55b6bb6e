//! Host lifecycle wiring.
//!
//! The host runtime is abstracted as a capability exposing the current
//! dataset snapshot and configuration snapshot; the rendering surface
//! is a separate seam. Lifecycle invocations never overlap (the host
//! guarantees initialize and update are serial), so the control carries
//! no locking and rebuilds its output from scratch on every render.

use std::fmt;

use tracing::debug;

use crate::grid::{build_grid, GridOutput};
use crate::selection::ColumnSelection;

/// Capability the host supplies to the control.
pub trait Host {
    /// The current dataset snapshot, if one is bound.
    fn dataset(&self) -> Option<&dyn crate::dataset::Dataset>;

    /// The raw `columns_to_color` configuration string, if set.
    fn columns_to_color(&self) -> Option<&str>;
}

/// A rendering surface that consumes grid outputs.
///
/// Implementations adapt the presentation tree to a concrete UI layer
/// (DOM, terminal, or other); see [`crate::text::TextSurface`] for a
/// text-based one.
pub trait RenderTarget {
    /// Replace the previous presentation with a new output.
    fn present(&mut self, output: &GridOutput);
}

/// Callback for notifying the host of output property changes.
pub type OutputNotifier = Box<dyn FnMut() + Send>;

/// Output properties exposed to the host. This control produces none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outputs {}

/// The embedded grid control.
///
/// Holds the column selection parsed once at initialization; every
/// render consults the host for a fresh dataset snapshot and fully
/// rebuilds the presentation tree.
pub struct GridControl {
    selection: ColumnSelection,
    // Retained for hosts that later add output properties; never fired
    // because there are none.
    notifier: Option<OutputNotifier>,
}

impl GridControl {
    /// Initialize the control: parse the column selection from the
    /// host's configuration snapshot, then build and present the first
    /// grid.
    pub fn initialize(
        host: &dyn Host,
        notifier: Option<OutputNotifier>,
        target: &mut dyn RenderTarget,
    ) -> Self {
        let selection = ColumnSelection::parse(host.columns_to_color());
        debug!(selected = selection.len(), "control initialized");
        let control = Self {
            selection,
            notifier,
        };
        control.render(host, target);
        control
    }

    /// Handle an update notification: rebuild from the current dataset
    /// snapshot and re-present. The column selection is not re-parsed.
    pub fn update(&self, host: &dyn Host, target: &mut dyn RenderTarget) {
        debug!("control update");
        self.render(host, target);
    }

    /// The selection parsed at initialization.
    pub fn selection(&self) -> &ColumnSelection {
        &self.selection
    }

    /// Current output property values (always empty).
    pub fn outputs(&self) -> Outputs {
        Outputs::default()
    }

    /// Tear the control down. Nothing to release.
    pub fn teardown(self) {
        debug!("control teardown");
    }

    fn render(&self, host: &dyn Host, target: &mut dyn RenderTarget) {
        let output = build_grid(host.dataset(), &self.selection);
        target.present(&output);
    }
}

impl fmt::Debug for GridControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridControl")
            .field("selection", &self.selection)
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}
