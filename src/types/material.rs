use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Material tag carried by every voxel cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    Air,
    CaveAir,
    Water,
    Lava,
    Stone,
    Bedrock,
    Dirt,
    Grass,
    Sand,
    Gravel,
    Snow,
    Ice,
    Glass,
    Leaves,
    Log,
    Planks,
    Cobblestone,
    Obsidian,
    TallGrass,
    Vine,
}

impl Material {
    pub fn is_air(self) -> bool {
        matches!(self, Material::Air | Material::CaveAir)
    }

    pub fn is_liquid(self) -> bool {
        matches!(self, Material::Water | Material::Lava)
    }
}

/// A single voxel cell: its coordinates and material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub position: IVec3,
    pub material: Material,
}

impl Block {
    pub fn new(position: IVec3, material: Material) -> Self {
        Self { position, material }
    }

    pub fn is_air(&self) -> bool {
        self.material.is_air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_classes() {
        assert!(Material::Air.is_air());
        assert!(Material::CaveAir.is_air());
        assert!(!Material::Glass.is_air());

        assert!(Material::Water.is_liquid());
        assert!(Material::Lava.is_liquid());
        assert!(!Material::Ice.is_liquid());
        assert!(!Block::new(IVec3::ZERO, Material::Water).is_air());
    }
}
