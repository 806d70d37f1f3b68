use crate::coords::Path;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled path draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub color: Color,
}

impl DrawList {
    /// Records a filled path. Empty paths are dropped.
    pub fn push_fill_path(&mut self, z: ZIndex, path: Path, color: Color) {
        if path.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Path(PathCmd { path, color }));
    }
}
