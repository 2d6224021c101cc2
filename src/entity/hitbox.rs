//! Approximate axis-aligned hit boxes per entity kind.

use glam::DVec3;

use crate::entity::{Entity, EntityKind};
use crate::grid::VoxelWorld;
use crate::types::{Aabb, Location, Material};

/// Dimensions of an entity's box. The box stands on the entity's feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub height: f64,
    pub width: f64,
    pub length: f64,
}

impl HitBox {
    fn square(height: f64, width: f64) -> Self {
        Self {
            height,
            width,
            length: width,
        }
    }

    /// World-space box for an entity whose feet are at `feet`.
    pub fn at(&self, feet: DVec3) -> Aabb {
        Aabb::standing(feet, self.height, self.width, self.length)
    }
}

impl EntityKind {
    /// Default `(height, width)`; length equals width for every kind.
    pub fn dimensions(self) -> (f64, f64) {
        use EntityKind::*;
        match self {
            ArmorStand => (1.975, 0.5),
            Bat => (0.9, 0.5),
            Blaze => (1.8, 0.6),
            Boat => (0.455, 1.375),
            CaveSpider => (0.5, 0.7),
            Chicken => (0.7, 0.4),
            Cow => (1.4, 0.9),
            Creeper => (1.7, 0.6),
            Donkey => (1.6, 1.39),
            ElderGuardian => (2.0, 2.0),
            EnderCrystal => (2.0, 2.0),
            EnderDragon => (8.0, 16.0),
            Enderman => (2.9, 0.6),
            Endermite => (0.3, 0.4),
            Evoker => (1.95, 0.6),
            FallingBlock => (0.98, 0.98),
            Ghast => (4.0, 4.0),
            Guardian => (0.85, 0.85),
            Horse => (1.6, 1.39),
            Husk => (1.95, 0.6),
            Illusioner => (1.95, 0.6),
            IronGolem => (2.7, 1.4),
            Item => (0.25, 0.25),
            Slime => (0.51, 0.51),
            Llama => (1.875, 0.9),
            MagmaCube => (0.51, 0.51),
            Minecart => (0.7, 0.98),
            Ocelot => (0.7, 0.6),
            Parrot => (0.9, 0.5),
            Pig => (0.9, 0.9),
            Pigman => (1.95, 0.6),
            Player => (1.8, 0.6),
            Rabbit => (0.5, 0.4),
            Sheep => (1.3, 0.9),
            Shulker => (1.0, 1.0),
            Silverfish => (0.3, 0.4),
            Skeleton => (1.99, 0.6),
            SnowGolem => (1.9, 0.7),
            Spider => (0.9, 1.4),
            Squid => (0.8, 0.8),
            Stray => (1.99, 0.6),
            Vex => (0.8, 0.4),
            Villager => (1.95, 0.6),
            Vindicator => (1.95, 0.6),
            Witch => (1.95, 0.6),
            Wither => (3.5, 0.9),
            WitherSkeleton => (2.4, 0.7),
            Wolf => (0.85, 0.6),
            XpOrb => (0.5, 0.5),
            Zombie => (1.95, 0.6),
            ZombieHorse => (1.6, 1.39),
            ZombieVillager => (1.95, 0.6),
        }
    }

    /// `(height, width)` of the young form, for kinds that have one.
    fn baby_dimensions(self) -> Option<(f64, f64)> {
        use EntityKind::*;
        match self {
            Chicken => Some((0.35, 0.2)),
            Cow => Some((0.7, 0.45)),
            Horse | Donkey => Some((0.8, 0.7)),
            Llama => Some((0.94, 0.45)),
            Ocelot => Some((0.35, 0.3)),
            Pig => Some((0.45, 0.45)),
            Rabbit => Some((0.25, 0.2)),
            Sheep => Some((0.675, 0.45)),
            Wolf => Some((0.425, 0.3)),
            Zombie | Husk | ZombieVillager | Pigman => Some((0.975, 0.3)),
            _ => None,
        }
    }
}

/// Hit box of `entity` after contextual overrides.
///
/// Young forms apply first. Then at most one of: boat or elder guardian
/// standing in water, slime size tier, sneaking player.
pub fn approximate_box<W: VoxelWorld + ?Sized>(entity: &Entity, world: &W) -> HitBox {
    let (mut height, mut width) = entity.kind.dimensions();

    if entity.baby {
        if let Some((h, w)) = entity.kind.baby_dimensions() {
            height = h;
            width = w;
        }
    }

    match entity.kind {
        EntityKind::Boat => {
            if in_water(entity, world) {
                height = 0.56;
            }
        }
        EntityKind::ElderGuardian => {
            if in_water(entity, world) {
                height = 0.99;
                width = 0.99;
            }
        }
        EntityKind::Slime | EntityKind::MagmaCube => match entity.size {
            Some(0) => (height, width) = (0.51, 0.51),
            Some(1) => (height, width) = (1.02, 1.02),
            Some(2) => (height, width) = (2.04, 2.04),
            _ => {}
        },
        EntityKind::Player => {
            if entity.sneaking {
                height = 1.5;
            }
        }
        _ => {}
    }

    HitBox::square(height, width)
}

fn in_water<W: VoxelWorld + ?Sized>(entity: &Entity, world: &W) -> bool {
    world.block_at(entity.location.block()).material == Material::Water
}

/// Whether `point` lies inside or on the entity's hit box.
///
/// False when either side has no world or they are in different worlds.
pub fn hit_check<W: VoxelWorld + ?Sized>(point: &Location, entity: &Entity, world: &W) -> bool {
    if !point.same_world(&entity.location) {
        return false;
    }
    approximate_box(entity, world)
        .at(entity.location.position)
        .contains(point.position)
}
