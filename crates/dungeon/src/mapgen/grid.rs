//! Dense door-bitmask scratch grid used while a level is being carved.
//!
//! `width` is always the x extent and `height` the y extent; cells are stored
//! row-major as `y * width + x`, with `y` growing upward.

use crate::types::{Direction, Doors, Pos};

pub(super) struct DoorGrid {
    width: usize,
    height: usize,
    doors: Vec<Doors>,
}

impl DoorGrid {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self { width, height, doors: vec![Doors::empty(); width * height] }
    }

    pub(super) fn len(&self) -> usize {
        self.doors.len()
    }

    pub(super) fn doors(&self, index: usize) -> Doors {
        self.doors[index]
    }

    pub(super) fn pos(&self, index: usize) -> Pos {
        Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }
    }

    pub(super) fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let x = index % self.width;
        let y = index / self.width;
        match direction {
            Direction::Up if y + 1 < self.height => Some(index + self.width),
            Direction::Down if y > 0 => Some(index - self.width),
            Direction::Left if x > 0 => Some(index - 1),
            Direction::Right if x + 1 < self.width => Some(index + 1),
            _ => None,
        }
    }

    /// Opens a door from `index` toward `direction` together with its mirror,
    /// returning the destination cell.
    pub(super) fn carve(&mut self, index: usize, direction: Direction) -> Option<usize> {
        let destination = self.neighbor(index, direction)?;
        self.doors[index] |= direction.door();
        self.doors[destination] |= direction.opposite().door();
        Some(destination)
    }

    pub(super) fn doored_cells(&self) -> usize {
        self.doors.iter().filter(|doors| !doors.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_respect_grid_edges() {
        let grid = DoorGrid::new(3, 2);
        assert_eq!(grid.neighbor(0, Direction::Down), None);
        assert_eq!(grid.neighbor(0, Direction::Left), None);
        assert_eq!(grid.neighbor(0, Direction::Up), Some(3));
        assert_eq!(grid.neighbor(0, Direction::Right), Some(1));
        assert_eq!(grid.neighbor(5, Direction::Up), None);
        assert_eq!(grid.neighbor(5, Direction::Right), None);
        assert_eq!(grid.pos(5), Pos::new(2, 1));
    }

    #[test]
    fn carving_sets_the_mirrored_door() {
        let mut grid = DoorGrid::new(2, 2);
        assert_eq!(grid.carve(0, Direction::Up), Some(2));
        assert_eq!(grid.doors(0), Doors::UP);
        assert_eq!(grid.doors(2), Doors::DOWN);
        assert_eq!(grid.carve(2, Direction::Up), None);
        assert_eq!(grid.doored_cells(), 2);
    }
}
