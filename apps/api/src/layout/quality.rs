use std::collections::BTreeMap;

use crate::layout::placement::LayoutPosition;
use crate::models::zone::Room;

/// Mean 3D length of the declared exits whose endpoints are both placed.
///
/// Lower is tighter. Synthetic return edges are not counted, and overlapping
/// rooms are not penalised: a zero-length exit scores as perfectly tight.
/// Returns `0.0` when no exit qualifies.
pub fn layout_quality(rooms: &[Room], positions: &BTreeMap<i64, LayoutPosition>) -> f64 {
    let mut total = 0.0;
    let mut edges = 0usize;

    for room in rooms {
        let Some(from) = positions.get(&room.id) else {
            continue;
        };
        for to in room.exits.iter().filter_map(|e| e.to_room_id) {
            if let Some(dest) = positions.get(&to) {
                total += from.distance_to(dest);
                edges += 1;
            }
        }
    }

    if edges == 0 {
        0.0
    } else {
        total / edges as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::Exit;

    fn make_room(id: i64, exits: &[(&str, Option<i64>)]) -> Room {
        Room {
            id,
            name: None,
            description: None,
            layout_z: None,
            exits: exits
                .iter()
                .map(|(d, to)| Exit {
                    direction: d.to_string(),
                    to_room_id: *to,
                    to_zone_id: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_no_edges_scores_zero() {
        let rooms = vec![make_room(1, &[]), make_room(2, &[("north", None)])];
        let pos: BTreeMap<_, _> = [(1, LayoutPosition::new(0, 0, 0)), (2, LayoutPosition::new(9, 0, 0))]
            .into_iter()
            .collect();
        assert_eq!(layout_quality(&rooms, &pos), 0.0);
    }

    #[test]
    fn test_mean_of_declared_edges() {
        let rooms = vec![
            make_room(1, &[("east", Some(2))]),
            make_room(2, &[("northeast", Some(3))]),
            make_room(3, &[]),
        ];
        let pos: BTreeMap<_, _> = [
            (1, LayoutPosition::new(0, 0, 0)),
            (2, LayoutPosition::new(2, 0, 0)),
            (3, LayoutPosition::new(5, -4, 0)),
        ]
        .into_iter()
        .collect();
        // (2 + 5) / 2
        assert!((layout_quality(&rooms, &pos) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_unplaced_destination_ignored() {
        let rooms = vec![make_room(1, &[("east", Some(2)), ("west", Some(99))]), make_room(2, &[])];
        let pos: BTreeMap<_, _> = [(1, LayoutPosition::new(0, 0, 0)), (2, LayoutPosition::new(0, 0, 1))]
            .into_iter()
            .collect();
        assert!((layout_quality(&rooms, &pos) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_counts_as_zero_length() {
        let rooms = vec![make_room(1, &[("east", Some(2))]), make_room(2, &[])];
        let pos: BTreeMap<_, _> = [(1, LayoutPosition::new(4, 4, 0)), (2, LayoutPosition::new(4, 4, 0))]
            .into_iter()
            .collect();
        assert_eq!(layout_quality(&rooms, &pos), 0.0);
    }
}
