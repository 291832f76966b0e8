//! Which of the two result regions (plot image or data table) is visible.

use std::fmt;

use tracing::debug;

use crate::artifact::ResultArtifact;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultViewMode {
    #[default]
    Image,
    Table,
}

impl ResultViewMode {
    pub fn other(self) -> Self {
        match self {
            ResultViewMode::Image => ResultViewMode::Table,
            ResultViewMode::Table => ResultViewMode::Image,
        }
    }
}

impl fmt::Display for ResultViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultViewMode::Image => write!(f, "Image"),
            ResultViewMode::Table => write!(f, "Table"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionVisibility {
    pub image: bool,
    pub table: bool,
}

impl RegionVisibility {
    fn for_mode(mode: ResultViewMode) -> Self {
        Self {
            image: mode == ResultViewMode::Image,
            table: mode == ResultViewMode::Table,
        }
    }
}

/// Mode picked for a fresh result.
pub fn initial_mode(artifact: &ResultArtifact, prefer_image: bool) -> ResultViewMode {
    if artifact.has_image() && prefer_image {
        ResultViewMode::Image
    } else if artifact.has_rows() {
        ResultViewMode::Table
    } else {
        ResultViewMode::Image
    }
}

#[derive(Debug, Default)]
pub struct ResultView {
    mode: ResultViewMode,
    artifact: Option<ResultArtifact>,
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ResultViewMode {
        self.mode
    }

    pub fn artifact(&self) -> Option<&ResultArtifact> {
        self.artifact.as_ref()
    }

    pub fn visibility(&self) -> RegionVisibility {
        RegionVisibility::for_mode(self.mode)
    }

    /// The mode the toggle control switches to; the control shows this rather
    /// than the current mode.
    pub fn indicator(&self) -> ResultViewMode {
        self.mode.other()
    }

    pub fn set_view(&mut self, mode: ResultViewMode) -> RegionVisibility {
        self.mode = mode;
        self.visibility()
    }

    pub fn can_toggle(&self) -> bool {
        self.artifact.as_ref().is_some_and(ResultArtifact::has_rows)
    }

    /// Flip the mode. Does nothing (and returns `false`) without table rows.
    pub fn toggle(&mut self) -> bool {
        if !self.can_toggle() {
            return false;
        }
        self.set_view(self.mode.other());
        true
    }

    /// Replace the current result and choose its initial mode.
    pub fn on_new_result(&mut self, artifact: ResultArtifact, prefer_image: bool) -> ResultViewMode {
        let mode = initial_mode(&artifact, prefer_image);
        debug!(%mode, prefer_image, "New result");
        self.artifact = Some(artifact);
        self.set_view(mode);
        mode
    }

    pub fn clear(&mut self) {
        self.artifact = None;
        self.mode = ResultViewMode::default();
    }
}
