use glam::IVec3;

use crate::types::{MapInfo, Material, TraceError};

/// Dense box of materials. `width` runs along X, `height` along Y and
/// `depth` along Z.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    info: MapInfo,
    data: Vec<Material>,
}

impl VoxelGrid {
    pub fn new(info: MapInfo, data: Vec<Material>) -> Result<Self, TraceError> {
        info.validate()?;
        let expected_len = info.volume();
        if data.len() != expected_len {
            return Err(TraceError::InvalidMetadata(format!(
                "data length {} does not match grid size {}x{}x{}",
                data.len(),
                info.width,
                info.height,
                info.depth
            )));
        }

        Ok(Self { info, data })
    }

    /// Grid with every cell set to `material`.
    pub fn filled(info: MapInfo, material: Material) -> Result<Self, TraceError> {
        info.validate()?;
        let data = vec![material; info.volume()];
        Ok(Self { info, data })
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    /// Material at a world cell, `None` outside the grid.
    pub fn get(&self, cell: IVec3) -> Option<Material> {
        self.index(cell).map(|idx| self.data[idx])
    }

    /// Material at a world cell; cells outside the grid are air.
    pub fn material_at(&self, cell: IVec3) -> Material {
        self.get(cell).unwrap_or(Material::Air)
    }

    pub fn set(&mut self, cell: IVec3, material: Material) -> Result<(), TraceError> {
        let Some(idx) = self.index(cell) else {
            return Err(TraceError::OutOfBounds(format!(
                "cell ({}, {}, {}) outside grid at {} sized {}x{}x{}",
                cell.x,
                cell.y,
                cell.z,
                self.info.origin,
                self.info.width,
                self.info.height,
                self.info.depth
            )));
        };
        self.data[idx] = material;
        Ok(())
    }

    /// Set every cell in the inclusive box spanned by `a` and `b`, clipped to
    /// the grid. Returns the number of cells written.
    pub fn fill_region(&mut self, a: IVec3, b: IVec3, material: Material) -> usize {
        let min = a.min(b).max(self.info.origin);
        let max = a.max(b).min(self.info.max_cell().saturating_sub(IVec3::ONE));
        let mut written = 0;
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                for x in min.x..=max.x {
                    if let Some(idx) = self.index(IVec3::new(x, y, z)) {
                        self.data[idx] = material;
                        written += 1;
                    }
                }
            }
        }
        written
    }

    pub fn data(&self) -> &[Material] {
        &self.data
    }

    fn index(&self, cell: IVec3) -> Option<usize> {
        if !self.info.contains(cell) {
            return None;
        }
        let local = (cell - self.info.origin).as_uvec3();
        let width = self.info.width as usize;
        let depth = self.info.depth as usize;
        Some(((local.y as usize) * depth + local.z as usize) * width + local.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_grid() -> VoxelGrid {
        VoxelGrid::filled(
            MapInfo {
                width: 4,
                height: 3,
                depth: 2,
                origin: IVec3::new(-2, 10, 5),
            },
            Material::Air,
        )
        .expect("grid should build")
    }

    #[test]
    fn new_validates_length() {
        let info = MapInfo::cube(2, IVec3::ZERO);
        assert!(VoxelGrid::new(info.clone(), vec![Material::Stone; 8]).is_ok());
        let err = VoxelGrid::new(info, vec![Material::Stone; 7]).unwrap_err();
        assert!(matches!(err, TraceError::InvalidMetadata(_)));
    }

    #[test]
    fn constructors_reject_oversized_grids() {
        let huge = MapInfo::cube(u32::MAX, IVec3::ZERO);
        assert!(matches!(
            VoxelGrid::filled(huge.clone(), Material::Air),
            Err(TraceError::InvalidMetadata(_))
        ));
        assert!(matches!(
            VoxelGrid::new(huge, Vec::new()),
            Err(TraceError::InvalidMetadata(_))
        ));
    }

    #[test]
    fn set_and_get_respect_origin() {
        let mut grid = test_grid();
        let cell = IVec3::new(1, 12, 6);
        grid.set(cell, Material::Stone).unwrap();
        assert_eq!(grid.get(cell), Some(Material::Stone));
        assert_eq!(grid.get(IVec3::new(-2, 10, 5)), Some(Material::Air));
        assert_eq!(grid.data().iter().filter(|m| **m == Material::Stone).count(), 1);
    }

    #[test]
    fn outside_reads_as_air() {
        let mut grid = test_grid();
        grid.fill_region(IVec3::new(-10, 0, 0), IVec3::new(10, 100, 100), Material::Dirt);
        assert_eq!(grid.get(IVec3::new(2, 10, 5)), None);
        assert_eq!(grid.material_at(IVec3::new(2, 10, 5)), Material::Air);
        assert_eq!(grid.material_at(IVec3::new(1, 10, 5)), Material::Dirt);
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut grid = test_grid();
        let err = grid.set(IVec3::new(0, 0, 0), Material::Stone).unwrap_err();
        assert!(matches!(err, TraceError::OutOfBounds(_)));
    }

    #[test]
    fn fill_region_clips_and_counts() {
        let mut grid = test_grid();
        let written = grid.fill_region(IVec3::new(0, 11, 6), IVec3::new(5, 9, 0), Material::Glass);
        // x 0..=1, y 10..=11, z 5..=6
        assert_eq!(written, 8);
        assert_eq!(grid.get(IVec3::new(1, 11, 6)), Some(Material::Glass));
        assert_eq!(grid.get(IVec3::new(-1, 11, 6)), Some(Material::Air));
    }
}
