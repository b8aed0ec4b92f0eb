//! Sparse room registry keyed by grid coordinate.
//! Missing coordinates are walls or void; lookups never fail.

use std::collections::BTreeMap;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Direction, Doors, Pos, Variant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Room {
    pub doors: Doors,
    pub variant: Variant,
}

impl Room {
    pub fn new(doors: Doors, variant: Variant) -> Self {
        Self { doors, variant }
    }

    pub fn door_count(&self) -> u32 {
        self.doors.count()
    }

    pub fn has_door(&self, direction: Direction) -> bool {
        self.doors.has(direction)
    }

    /// A room with a single way in or out.
    pub fn is_dead_end(&self) -> bool {
        self.door_count() == 1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: BTreeMap<Pos, Room>,
}

impl RoomGraph {
    pub const fn new() -> Self {
        Self { rooms: BTreeMap::new() }
    }

    pub fn get(&self, pos: Pos) -> Option<&Room> {
        self.rooms.get(&pos)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.rooms.contains_key(&pos)
    }

    pub fn insert(&mut self, pos: Pos, room: Room) -> Option<Room> {
        self.rooms.insert(pos, room)
    }

    pub fn clear(&mut self) {
        self.rooms.clear();
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in ascending `(y, x)` order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Room)> {
        self.rooms.iter().map(|(pos, room)| (*pos, room))
    }

    /// Door bits of the room at `pos`, empty when no room exists there.
    pub fn doors_at(&self, pos: Pos) -> Doors {
        self.get(pos).map_or(Doors::empty(), |room| room.doors)
    }

    pub fn has_door(&self, pos: Pos, direction: Direction) -> bool {
        self.doors_at(pos).has(direction)
    }

    /// True when the room at `pos` exists and has exactly the `expected` doors.
    pub fn doors_match(&self, pos: Pos, expected: Doors) -> bool {
        self.get(pos).is_some_and(|room| room.doors == expected)
    }

    /// Cells reachable in one move from `pos` through its doors.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> {
        self.doors_at(pos).directions().map(move |direction| (direction, pos.step(direction)))
    }

    /// Inclusive `(min, max)` corners of the occupied area.
    pub fn bounds(&self) -> Option<(Pos, Pos)> {
        let mut positions = self.rooms.keys();
        let first = *positions.next()?;
        Some(positions.fold((first, first), |(low, high), pos| {
            (
                Pos { y: low.y.min(pos.y), x: low.x.min(pos.x) },
                Pos { y: high.y.max(pos.y), x: high.x.max(pos.x) },
            )
        }))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.rooms.len() * 10);
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for (pos, room) in &self.rooms {
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
            bytes.push(room.doors.bits());
            bytes.push(room.variant.get());
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(doors: Doors) -> Room {
        Room::new(doors, Variant::new(1).expect("variant 1 is valid"))
    }

    #[test]
    fn lookup_miss_is_none_not_an_error() {
        let graph = RoomGraph::new();
        assert!(graph.get(Pos::new(3, -2)).is_none());
        assert_eq!(graph.doors_at(Pos::new(3, -2)), Doors::empty());
        assert!(!graph.doors_match(Pos::new(3, -2), Doors::empty()));
    }

    #[test]
    fn neighbors_follow_door_bits_only() {
        let mut graph = RoomGraph::new();
        graph.insert(Pos::new(0, 0), room(Doors::UP | Doors::RIGHT));
        let neighbors: Vec<_> = graph.neighbors(Pos::new(0, 0)).collect();
        assert_eq!(
            neighbors,
            vec![(Direction::Up, Pos::new(0, 1)), (Direction::Right, Pos::new(1, 0))]
        );
    }

    #[test]
    fn bounds_cover_every_room() {
        let mut graph = RoomGraph::new();
        assert_eq!(graph.bounds(), None);
        graph.insert(Pos::new(2, 5), room(Doors::DOWN));
        graph.insert(Pos::new(-1, 4), room(Doors::UP));
        graph.insert(Pos::new(3, 0), room(Doors::LEFT));
        assert_eq!(graph.bounds(), Some((Pos::new(-1, 0), Pos::new(3, 5))));
    }

    #[test]
    fn fingerprint_tracks_door_and_variant_changes() {
        let mut graph = RoomGraph::new();
        graph.insert(Pos::new(0, 0), room(Doors::RIGHT));
        graph.insert(Pos::new(1, 0), room(Doors::LEFT));
        let baseline = graph.fingerprint();

        let mut changed = graph.clone();
        changed.insert(Pos::new(1, 0), Room::new(Doors::LEFT, Variant::SPECIAL));
        assert_ne!(baseline, changed.fingerprint());
        assert_eq!(baseline, graph.clone().fingerprint());
    }
}
