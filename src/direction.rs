//! Discrete directions between neighbouring cells.
//!
//! North is -Z, South is +Z, East is +X, West is -X, Up is +Y and Down is -Y.
//! Edge and corner directions are the sums of their named parts.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The zero offset.
    SelfDir,

    North,
    South,
    East,
    West,
    Up,
    Down,

    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    UpNorth,
    UpSouth,
    UpEast,
    UpWest,
    DownNorth,
    DownSouth,
    DownEast,
    DownWest,

    UpNorthEast,
    UpNorthWest,
    UpSouthEast,
    UpSouthWest,
    DownNorthEast,
    DownNorthWest,
    DownSouthEast,
    DownSouthWest,
}

impl Direction {
    pub const ALL: [Direction; 27] = [
        Direction::SelfDir,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::UpNorth,
        Direction::UpSouth,
        Direction::UpEast,
        Direction::UpWest,
        Direction::DownNorth,
        Direction::DownSouth,
        Direction::DownEast,
        Direction::DownWest,
        Direction::UpNorthEast,
        Direction::UpNorthWest,
        Direction::UpSouthEast,
        Direction::UpSouthWest,
        Direction::DownNorthEast,
        Direction::DownNorthWest,
        Direction::DownSouthEast,
        Direction::DownSouthWest,
    ];

    /// The six face-sharing neighbours.
    pub const ADJACENTS: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const CARDINALS_AND_DIAGONALS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Integer cell offset of this direction.
    pub fn offset(self) -> IVec3 {
        use Direction::*;
        match self {
            SelfDir => IVec3::ZERO,
            North => IVec3::NEG_Z,
            South => IVec3::Z,
            East => IVec3::X,
            West => IVec3::NEG_X,
            Up => IVec3::Y,
            Down => IVec3::NEG_Y,

            NorthEast => North.offset() + East.offset(),
            NorthWest => North.offset() + West.offset(),
            SouthEast => South.offset() + East.offset(),
            SouthWest => South.offset() + West.offset(),
            UpNorth => Up.offset() + North.offset(),
            UpSouth => Up.offset() + South.offset(),
            UpEast => Up.offset() + East.offset(),
            UpWest => Up.offset() + West.offset(),
            DownNorth => Down.offset() + North.offset(),
            DownSouth => Down.offset() + South.offset(),
            DownEast => Down.offset() + East.offset(),
            DownWest => Down.offset() + West.offset(),

            UpNorthEast => Up.offset() + NorthEast.offset(),
            UpNorthWest => Up.offset() + NorthWest.offset(),
            UpSouthEast => Up.offset() + SouthEast.offset(),
            UpSouthWest => Up.offset() + SouthWest.offset(),
            DownNorthEast => Down.offset() + NorthEast.offset(),
            DownNorthWest => Down.offset() + NorthWest.offset(),
            DownSouthEast => Down.offset() + SouthEast.offset(),
            DownSouthWest => Down.offset() + SouthWest.offset(),
        }
    }

    /// Offset as a world-space vector. Composite directions are not normalised.
    pub fn vector(self) -> DVec3 {
        self.offset().as_dvec3()
    }

    pub fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            SelfDir => SelfDir,
            North => South,
            South => North,
            East => West,
            West => East,
            Up => Down,
            Down => Up,
            NorthEast => SouthWest,
            NorthWest => SouthEast,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
            UpNorth => DownSouth,
            UpSouth => DownNorth,
            UpEast => DownWest,
            UpWest => DownEast,
            DownNorth => UpSouth,
            DownSouth => UpNorth,
            DownEast => UpWest,
            DownWest => UpEast,
            UpNorthEast => DownSouthWest,
            UpNorthWest => DownSouthEast,
            UpSouthEast => DownNorthWest,
            UpSouthWest => DownNorthEast,
            DownNorthEast => UpSouthWest,
            DownNorthWest => UpSouthEast,
            DownSouthEast => UpNorthWest,
            DownSouthWest => UpNorthEast,
        }
    }

    /// Direction whose offset is exactly `offset`.
    pub fn from_vector(offset: IVec3) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.offset() == offset)
    }

    /// Direction leading from cell `from` to cell `to`, if they are neighbours
    /// (or the same cell).
    pub fn from_delta(from: IVec3, to: IVec3) -> Option<Direction> {
        Self::from_vector(to - from)
    }

    /// Neighbour of `cell` in this direction.
    pub fn relative(self, cell: IVec3) -> IVec3 {
        cell + self.offset()
    }

    /// True for the six face-sharing directions.
    pub fn is_adjacent(self) -> bool {
        self.block_face().is_some()
    }

    /// True when the two cells share a face.
    pub fn are_adjacent(a: IVec3, b: IVec3) -> bool {
        Self::from_delta(a, b).is_some_and(Direction::is_adjacent)
    }

    pub fn block_face(self) -> Option<BlockFace> {
        match self {
            Direction::North => Some(BlockFace::North),
            Direction::South => Some(BlockFace::South),
            Direction::East => Some(BlockFace::East),
            Direction::West => Some(BlockFace::West),
            Direction::Up => Some(BlockFace::Up),
            Direction::Down => Some(BlockFace::Down),
            _ => None,
        }
    }

    pub fn from_block_face(face: BlockFace) -> Direction {
        face.direction()
    }
}

/// One of the six faces of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockFace {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl BlockFace {
    pub fn direction(self) -> Direction {
        match self {
            BlockFace::North => Direction::North,
            BlockFace::South => Direction::South,
            BlockFace::East => Direction::East,
            BlockFace::West => Direction::West,
            BlockFace::Up => Direction::Up,
            BlockFace::Down => Direction::Down,
        }
    }

    pub fn opposite(self) -> BlockFace {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::South => BlockFace::North,
            BlockFace::East => BlockFace::West,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
        }
    }

    /// Outward unit normal of the face.
    pub fn normal(self) -> DVec3 {
        self.direction().vector()
    }
}
