//! One-way exit detection over the rooms' declared exits.
//!
//! An exit `A -d-> B` is two-way when `B` declares an exit back to `A` labeled
//! `reverse(d)` (case-insensitive). Only one-way exits are reported. Exits with
//! a direction outside the canonical set have no reverse and are skipped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::directions::reverse_label;
use crate::models::zone::Room;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneWayReason {
    /// Destination has no exit back to the source at all.
    NoReturnExit,
    /// Destination leads back to the source, but not via the reverse direction.
    MismatchedDirection,
    /// Destination room is not part of this zone's room set.
    TargetNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneWayExit {
    pub from_room: i64,
    pub to_room: i64,
    pub direction: String,
    pub is_one_way: bool,
    pub reason: OneWayReason,
}

pub fn detect_one_way_exits(rooms: &[Room]) -> Vec<OneWayExit> {
    let by_id: HashMap<i64, &Room> = rooms.iter().rev().map(|r| (r.id, r)).collect();
    let mut found = Vec::new();

    for room in rooms {
        for exit in &room.exits {
            let Some(to) = exit.to_room_id else {
                continue;
            };
            let record = |reason| OneWayExit {
                from_room: room.id,
                to_room: to,
                direction: exit.direction.clone(),
                is_one_way: true,
                reason,
            };

            let Some(dest) = by_id.get(&to) else {
                debug!(from_room = room.id, to_room = to, "exit target not found in zone");
                found.push(record(OneWayReason::TargetNotFound));
                continue;
            };
            let Some(reverse) = reverse_label(&exit.direction) else {
                continue;
            };

            let mut leads_back = false;
            let mut matched = false;
            for back in dest.exits.iter().filter(|e| e.to_room_id == Some(room.id)) {
                leads_back = true;
                if back.direction.trim().eq_ignore_ascii_case(reverse) {
                    matched = true;
                    break;
                }
            }
            if matched {
                continue;
            }
            found.push(record(if leads_back {
                OneWayReason::MismatchedDirection
            } else {
                OneWayReason::NoReturnExit
            }));
        }
    }

    found
}
