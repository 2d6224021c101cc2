//! Dynamic objects that traces can hit.

pub mod hitbox;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::grid::VoxelWorld;
use crate::types::{EYE_HEIGHT_RATIO, Location};

pub use hitbox::{HitBox, approximate_box, hit_check};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Category of an entity, used to look up its hit-box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    ArmorStand,
    Bat,
    Blaze,
    Boat,
    CaveSpider,
    Chicken,
    Cow,
    Creeper,
    Donkey,
    ElderGuardian,
    EnderCrystal,
    EnderDragon,
    Enderman,
    Endermite,
    Evoker,
    FallingBlock,
    Ghast,
    Guardian,
    Horse,
    Husk,
    Illusioner,
    IronGolem,
    Item,
    Slime,
    Llama,
    MagmaCube,
    Minecart,
    Ocelot,
    Parrot,
    Pig,
    Pigman,
    Player,
    Rabbit,
    Sheep,
    Shulker,
    Silverfish,
    Skeleton,
    SnowGolem,
    Spider,
    Squid,
    Stray,
    Vex,
    Villager,
    Vindicator,
    Witch,
    Wither,
    WitherSkeleton,
    Wolf,
    XpOrb,
    Zombie,
    ZombieHorse,
    ZombieVillager,
}

/// A movable object in a world snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Position of the entity's feet plus its orientation.
    pub location: Location,
    pub baby: bool,
    pub sneaking: bool,
    /// Size tier of slimes and magma cubes.
    pub size: Option<u8>,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, location: Location) -> Self {
        Self {
            id,
            kind,
            location,
            baby: false,
            sneaking: false,
            size: None,
        }
    }

    pub fn baby(mut self) -> Self {
        self.baby = true;
        self
    }

    pub fn sneaking(mut self) -> Self {
        self.sneaking = true;
        self
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = Some(size);
        self
    }

    /// Eye position: the feet raised by a fixed fraction of the hit-box
    /// height, facing the entity's orientation.
    pub fn eye_location<W: VoxelWorld + ?Sized>(&self, world: &W) -> Location {
        let height = approximate_box(self, world).height;
        self.location.add(DVec3::new(0.0, height * EYE_HEIGHT_RATIO, 0.0))
    }
}
