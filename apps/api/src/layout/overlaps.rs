use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::layout::placement::LayoutPosition;
use crate::models::zone::Room;

/// Two or more rooms sharing one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapGroup {
    pub room_ids: Vec<i64>,
    pub position: LayoutPosition,
    pub count: usize,
}

/// Groups rooms by identical position. Groups and their members follow the
/// input room order; each distinct room id is counted once.
pub fn detect_overlaps(
    rooms: &[Room],
    positions: &BTreeMap<i64, LayoutPosition>,
) -> Vec<OverlapGroup> {
    let mut order: Vec<LayoutPosition> = Vec::new();
    let mut by_position: HashMap<LayoutPosition, Vec<i64>> = HashMap::new();

    for room in rooms {
        let Some(pos) = positions.get(&room.id) else {
            continue;
        };
        let ids = by_position.entry(*pos).or_insert_with(|| {
            order.push(*pos);
            Vec::new()
        });
        if !ids.contains(&room.id) {
            ids.push(room.id);
        }
    }

    order
        .into_iter()
        .filter_map(|pos| {
            let room_ids = by_position.remove(&pos)?;
            (room_ids.len() >= 2).then(|| OverlapGroup {
                count: room_ids.len(),
                room_ids,
                position: pos,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_room(id: i64) -> Room {
        Room {
            id,
            name: None,
            description: None,
            layout_z: None,
            exits: vec![],
        }
    }

    fn positions(entries: &[(i64, (i32, i32, i32))]) -> BTreeMap<i64, LayoutPosition> {
        entries
            .iter()
            .map(|(id, (x, y, z))| (*id, LayoutPosition::new(*x, *y, *z)))
            .collect()
    }

    #[test]
    fn test_no_overlaps() {
        let rooms = vec![make_room(1), make_room(2)];
        let pos = positions(&[(1, (0, 0, 0)), (2, (2, 0, 0))]);
        assert!(detect_overlaps(&rooms, &pos).is_empty());
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let rooms = vec![make_room(5), make_room(1), make_room(3), make_room(4), make_room(2)];
        let pos = positions(&[
            (5, (4, 4, 0)),
            (1, (0, 0, 0)),
            (3, (4, 4, 0)),
            (4, (0, 0, 0)),
            (2, (0, 0, 0)),
        ]);
        let groups = detect_overlaps(&rooms, &pos);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].room_ids, vec![5, 3]);
        assert_eq!(groups[0].position, LayoutPosition::new(4, 4, 0));
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].room_ids, vec![1, 4, 2]);
        assert_eq!(groups[1].count, 3);
    }

    #[test]
    fn test_different_z_is_not_an_overlap() {
        let rooms = vec![make_room(1), make_room(2)];
        let pos = positions(&[(1, (0, 0, 0)), (2, (0, 0, 1))]);
        assert!(detect_overlaps(&rooms, &pos).is_empty());
    }

    #[test]
    fn test_groups_partition_rooms_at_position() {
        let rooms: Vec<Room> = (0..12).map(make_room).collect();
        let pos: BTreeMap<i64, LayoutPosition> = (0..12)
            .map(|id| (id, LayoutPosition::new((id % 4) as i32, 0, 0)))
            .collect();
        let groups = detect_overlaps(&rooms, &pos);
        assert_eq!(groups.len(), 4);
        for group in &groups {
            let expected: Vec<i64> = pos
                .iter()
                .filter(|(_, p)| **p == group.position)
                .map(|(id, _)| *id)
                .collect();
            assert_eq!(group.room_ids, expected);
            assert_eq!(group.count, expected.len());
        }
    }
}
