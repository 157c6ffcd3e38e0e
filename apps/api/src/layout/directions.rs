//! Direction table — compass/vertical exit labels, their grid offsets and reverses.
//!
//! Grid convention: x grows east, y grows south. Vertical directions carry a
//! zero horizontal offset and are resolved to a z step by the placement engine.

use tracing::debug;

/// Horizontal unit offset on the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

/// Offset used for labels outside the canonical set.
pub const FALLBACK_OFFSET: Offset = Offset { dx: 1, dy: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 10] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Up,
        Direction::Down,
    ];

    /// Case-insensitive lookup. Surrounding whitespace is ignored.
    pub fn parse(label: &str) -> Option<Direction> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Northeast => "northeast",
            Direction::Northwest => "northwest",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn offset(self) -> Offset {
        let (dx, dy) = match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Northeast => (1, -1),
            Direction::Northwest => (-1, -1),
            Direction::Southeast => (1, 1),
            Direction::Southwest => (-1, 1),
            Direction::Up | Direction::Down => (0, 0),
        };
        Offset { dx, dy }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Northeast => Direction::Southwest,
            Direction::Southwest => Direction::Northeast,
            Direction::Northwest => Direction::Southeast,
            Direction::Southeast => Direction::Northwest,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Z step for vertical directions, `None` for horizontal ones.
    pub fn z_step(self) -> Option<i32> {
        match self {
            Direction::Up => Some(1),
            Direction::Down => Some(-1),
            _ => None,
        }
    }

    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::South | Direction::East | Direction::West
        )
    }
}

/// Grid offset for a free-form exit label. Unknown labels fall back to east.
pub fn offset_for(label: &str) -> Offset {
    match Direction::parse(label) {
        Some(dir) => dir.offset(),
        None => {
            debug!(direction = label, "unknown direction label, using east offset");
            FALLBACK_OFFSET
        }
    }
}

/// Canonical reverse label for a free-form exit label. Unknown labels have none.
pub fn reverse_label(label: &str) -> Option<&'static str> {
    Direction::parse(label).map(|d| d.reverse().as_str())
}
