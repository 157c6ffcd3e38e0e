//! Seed-room selection for the breadth-first placement.
//!
//! Priority:
//! 1. caller-supplied start id
//! 2. the configured canonical spawn room
//! 3. configured conventional start rooms, first present wins
//! 4. highest centrality score, ties to the earliest room in input order

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::zone::Room;

const ENTRANCE_KEYWORDS: [&str; 3] = ["entrance", "gate", "entry"];
const HUB_KEYWORDS: [&str; 4] = ["central", "main", "plaza", "square"];
const JUNCTION_KEYWORDS: [&str; 3] = ["crossroads", "intersection", "junction"];

const EXIT_WEIGHT: f64 = 10.0;
const NEIGHBOR_EXIT_WEIGHT: f64 = 2.0;
const ENTRANCE_BONUS: f64 = 50.0;
const HUB_BONUS: f64 = 40.0;
const JUNCTION_BONUS: f64 = 30.0;
const GROUND_LEVEL_BONUS: f64 = 20.0;
const LOW_ID_WEIGHT: f64 = 5.0;

/// Why a room was chosen as the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartReason {
    Requested,
    CanonicalSpawn,
    Conventional,
    Centrality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartChoice {
    pub room_id: i64,
    pub reason: StartReason,
}

/// Rooms the deployment treats as natural entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartPreferences {
    pub canonical_spawn_id: Option<i64>,
    pub conventional_ids: Vec<i64>,
}

/// Picks the seed room. Returns `None` only for an empty room set.
pub fn select_start_room(
    rooms: &[Room],
    requested: Option<i64>,
    prefs: &StartPreferences,
) -> Option<StartChoice> {
    if rooms.is_empty() {
        return None;
    }
    let present: HashSet<i64> = rooms.iter().map(|r| r.id).collect();
    let pick = |id: Option<i64>, reason| {
        id.filter(|id| present.contains(id))
            .map(|room_id| StartChoice { room_id, reason })
    };

    pick(requested, StartReason::Requested)
        .or_else(|| pick(prefs.canonical_spawn_id, StartReason::CanonicalSpawn))
        .or_else(|| {
            prefs
                .conventional_ids
                .iter()
                .find_map(|id| pick(Some(*id), StartReason::Conventional))
        })
        .or_else(|| {
            most_central_room(rooms).map(|room_id| StartChoice {
                room_id,
                reason: StartReason::Centrality,
            })
        })
}

/// Returns the room with the highest centrality score, earliest wins ties.
pub fn most_central_room(rooms: &[Room]) -> Option<i64> {
    let exit_counts: HashMap<i64, usize> = rooms.iter().map(|r| (r.id, r.exits.len())).collect();
    let max_id = rooms.iter().map(|r| r.id).max()?;

    let mut best: Option<(i64, f64)> = None;
    for room in rooms {
        let score = centrality_score(room, &exit_counts, max_id);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((room.id, score)),
        }
    }
    best.map(|(id, _)| id)
}

/// Heuristic estimate of how connective and "entrance-like" a room is.
pub fn centrality_score(room: &Room, exit_counts: &HashMap<i64, usize>, max_id: i64) -> f64 {
    let neighbor_exits: usize = room
        .exits
        .iter()
        .filter_map(|e| e.to_room_id)
        .filter_map(|to| exit_counts.get(&to))
        .sum();

    let name = room.name_lower();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    let mut score = EXIT_WEIGHT * room.exits.len() as f64
        + NEIGHBOR_EXIT_WEIGHT * neighbor_exits as f64;
    if has_any(&ENTRANCE_KEYWORDS) {
        score += ENTRANCE_BONUS;
    }
    if has_any(&HUB_KEYWORDS) {
        score += HUB_BONUS;
    }
    if has_any(&JUNCTION_KEYWORDS) {
        score += JUNCTION_BONUS;
    }
    if room.z_hint() == 0 {
        score += GROUND_LEVEL_BONUS;
    }
    // Older (lower id) rooms tend to be the ones a zone was built out from.
    if max_id > 0 {
        score += LOW_ID_WEIGHT * (max_id as f64 - room.id as f64) / max_id as f64;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::Exit;

    fn make_room(id: i64, name: &str, exits: &[(&str, i64)]) -> Room {
        Room {
            id,
            name: Some(name.to_string()),
            description: None,
            layout_z: None,
            exits: exits
                .iter()
                .map(|(d, to)| Exit {
                    direction: d.to_string(),
                    to_room_id: Some(*to),
                    to_zone_id: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_rooms_no_seed() {
        assert_eq!(select_start_room(&[], Some(1), &StartPreferences::default()), None);
    }

    #[test]
    fn test_requested_start_wins() {
        let rooms = vec![make_room(1, "Gate", &[]), make_room(2, "Hall", &[])];
        let prefs = StartPreferences {
            canonical_spawn_id: Some(1),
            conventional_ids: vec![],
        };
        let choice = select_start_room(&rooms, Some(2), &prefs).unwrap();
        assert_eq!(choice.room_id, 2);
        assert_eq!(choice.reason, StartReason::Requested);
    }

    #[test]
    fn test_absent_requested_falls_through_to_spawn() {
        let rooms = vec![make_room(1, "Hall", &[]), make_room(3001, "Temple", &[])];
        let prefs = StartPreferences {
            canonical_spawn_id: Some(3001),
            conventional_ids: vec![1],
        };
        let choice = select_start_room(&rooms, Some(42), &prefs).unwrap();
        assert_eq!(choice.room_id, 3001);
        assert_eq!(choice.reason, StartReason::CanonicalSpawn);
    }

    #[test]
    fn test_first_present_conventional_id() {
        let rooms = vec![make_room(5, "A", &[]), make_room(7, "B", &[])];
        let prefs = StartPreferences {
            canonical_spawn_id: Some(3001),
            conventional_ids: vec![100, 7, 5],
        };
        let choice = select_start_room(&rooms, None, &prefs).unwrap();
        assert_eq!(choice.room_id, 7);
        assert_eq!(choice.reason, StartReason::Conventional);
    }

    #[test]
    fn test_centrality_prefers_hub() {
        let rooms = vec![
            make_room(1, "Back alley", &[("east", 2)]),
            make_room(2, "Crossroads", &[("west", 1), ("east", 3), ("north", 4)]),
            make_room(3, "Shop", &[("west", 2)]),
            make_room(4, "Field", &[("south", 2)]),
        ];
        let choice = select_start_room(&rooms, None, &StartPreferences::default()).unwrap();
        assert_eq!(choice.room_id, 2);
        assert_eq!(choice.reason, StartReason::Centrality);
    }

    #[test]
    fn test_keyword_bonus_outweighs_exits() {
        // Two exits = 20 + neighbor terms; "Town Gate" adds 50.
        let rooms = vec![
            make_room(1, "Corridor", &[("east", 2), ("west", 3)]),
            make_room(2, "Town Gate", &[("west", 1)]),
            make_room(3, "Closet", &[]),
        ];
        assert_eq!(most_central_room(&rooms), Some(2));
    }

    #[test]
    fn test_ties_go_to_input_order() {
        // max_id <= 0 disables the id term, leaving an exact tie.
        let rooms = vec![make_room(-1, "Room", &[]), make_room(-2, "Room", &[])];
        assert_eq!(most_central_room(&rooms), Some(-1));
    }

    #[test]
    fn test_extreme_ids_do_not_overflow() {
        let rooms = vec![make_room(i64::MIN, "Room", &[]), make_room(i64::MAX, "Room", &[])];
        // i64::MIN sits furthest below max_id, so it takes the larger id term.
        assert_eq!(most_central_room(&rooms), Some(i64::MIN));
        let choice = select_start_room(&rooms, None, &StartPreferences::default()).unwrap();
        assert_eq!(choice.room_id, i64::MIN);
    }

    #[test]
    fn test_ground_level_bonus() {
        let mut upstairs = make_room(1, "Room", &[]);
        upstairs.layout_z = Some(2);
        let ground = make_room(2, "Room", &[]);
        // upstairs gets the id term (5 * 1/2 = 2.5) but misses the 20 ground bonus.
        assert_eq!(most_central_room(&[upstairs, ground]), Some(2));
    }

    #[test]
    fn test_score_formula() {
        let rooms = vec![
            make_room(1, "Main Plaza Entrance", &[("north", 2)]),
            make_room(2, "Road", &[("south", 1), ("north", 3)]),
            make_room(4, "End", &[]),
        ];
        let counts: HashMap<i64, usize> = rooms.iter().map(|r| (r.id, r.exits.len())).collect();
        let score = centrality_score(&rooms[0], &counts, 4);
        // 10*1 + 2*2 + 50 + 40 + 20 + 5*(3/4)
        assert!((score - 127.75).abs() < 1e-9, "score was {score}");
    }
}
