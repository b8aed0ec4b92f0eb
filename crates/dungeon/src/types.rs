use std::ops::Neg;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Integer room-grid coordinate. `y` grows upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Neighbouring cell; clamps at the edge of the coordinate range.
    pub fn step(self, direction: Direction) -> Self {
        let heading = direction.heading();
        Self { y: self.y.saturating_add(heading.y), x: self.x.saturating_add(heading.x) }
    }

    pub fn manhattan(self, other: Self) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }

    /// Unit heading toward an orthogonally adjacent cell, zero for anything else.
    pub fn heading_to(self, other: Self) -> Heading {
        if self.manhattan(other) != 1 {
            return Heading::ZERO;
        }
        Heading { x: other.x - self.x, y: other.y - self.y }
    }
}

/// Continuous world-space position.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by every tie-break in generation.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn door(self) -> Doors {
        match self {
            Direction::Up => Doors::UP,
            Direction::Down => Doors::DOWN,
            Direction::Left => Doors::LEFT,
            Direction::Right => Doors::RIGHT,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn heading(self) -> Heading {
        match self {
            Direction::Up => Heading { x: 0, y: 1 },
            Direction::Down => Heading { x: 0, y: -1 },
            Direction::Left => Heading { x: -1, y: 0 },
            Direction::Right => Heading { x: 1, y: 0 },
        }
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

/// Movement vector handed back to agents: a cardinal unit step or zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Heading {
    pub x: i32,
    pub y: i32,
}

impl Heading {
    pub const ZERO: Heading = Heading { x: 0, y: 0 };

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn direction(self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|direction| direction.heading() == self)
    }
}

impl Neg for Heading {
    type Output = Heading;

    fn neg(self) -> Heading {
        Heading { x: -self.x, y: -self.y }
    }
}

impl From<Direction> for Heading {
    fn from(direction: Direction) -> Self {
        direction.heading()
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Doors: u8 {
        const UP = 0b0001;
        const DOWN = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;
    }
}

impl Doors {
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }

    pub fn has(self, direction: Direction) -> bool {
        self.contains(direction.door())
    }

    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |direction| self.has(*direction))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Variant(u8);

impl Variant {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;
    /// Goal rooms and branch rooms that unlock progression.
    pub const SPECIAL: Variant = Variant(4);

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Non-special variant picked by `roll`, wrapping onto `1..=3`.
    pub(crate) fn regular(roll: usize) -> Self {
        let regular_count = usize::from(Self::SPECIAL.0 - Self::MIN);
        Self(Self::MIN + (roll % regular_count) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_special(self) -> bool {
        self == Self::SPECIAL
    }
}
