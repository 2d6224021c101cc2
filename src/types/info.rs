//! Voxel grid metadata.

use glam::IVec3;
use serde::Deserialize;

use crate::types::{MAX_GRID_CELLS, TraceError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    /// World coordinates of cell index (0, 0, 0).
    pub origin: IVec3,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            depth: 16,
            origin: IVec3::ZERO,
        }
    }
}

impl MapInfo {
    pub fn cube(edge: u32, origin: IVec3) -> Self {
        Self {
            width: edge,
            height: edge,
            depth: edge,
            origin,
        }
    }

    /// Number of cells covered by the grid, saturating at `usize::MAX`.
    #[inline]
    pub fn volume(&self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(self.depth as usize)
    }

    /// Exclusive upper corner of the grid in world cell coordinates,
    /// saturating at `i32::MAX`.
    #[inline]
    pub fn max_cell(&self) -> IVec3 {
        let edge = |origin: i32, size: u32| {
            origin.saturating_add(i32::try_from(size).unwrap_or(i32::MAX))
        };
        IVec3::new(
            edge(self.origin.x, self.width),
            edge(self.origin.y, self.height),
            edge(self.origin.z, self.depth),
        )
    }

    /// Check that the cell count stays within [`MAX_GRID_CELLS`] and that the
    /// upper corner is representable in cell coordinates.
    pub fn validate(&self) -> Result<(), TraceError> {
        let volume = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(self.depth as usize));
        if volume.is_none_or(|v| v > MAX_GRID_CELLS) {
            return Err(TraceError::InvalidMetadata(format!(
                "grid size {}x{}x{} exceeds {} cells",
                self.width, self.height, self.depth, MAX_GRID_CELLS
            )));
        }

        let axes = [
            ("x", self.origin.x, self.width),
            ("y", self.origin.y, self.height),
            ("z", self.origin.z, self.depth),
        ];
        for (axis, origin, size) in axes {
            let fits = i32::try_from(size)
                .ok()
                .and_then(|size| origin.checked_add(size))
                .is_some();
            if !fits {
                return Err(TraceError::InvalidMetadata(format!(
                    "grid {axis} extent {origin} + {size} overflows cell coordinates"
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, cell: IVec3) -> bool {
        let max = self.max_cell();
        cell.x >= self.origin.x
            && cell.y >= self.origin.y
            && cell.z >= self.origin.z
            && cell.x < max.x
            && cell.y < max.y
            && cell.z < max.z
    }
}
