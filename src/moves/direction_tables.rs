//! Ray directions and per-square distances to the board edge.
//!
//! Sliding-piece generation walks a ray at most `SQUARES_TO_EDGE[sq][dir]`
//! steps, so it never needs a bounds check while stepping. The table is
//! built at compile time and read-only afterwards.

/// Index into `DIRECTION_OFFSETS` / `SQUARES_TO_EDGE`.
pub type Direction = usize;

pub const NORTH: Direction = 0;
pub const SOUTH: Direction = 1;
pub const WEST: Direction = 2;
pub const EAST: Direction = 3;
pub const NORTH_EAST: Direction = 4;
pub const SOUTH_WEST: Direction = 5;
pub const SOUTH_EAST: Direction = 6;
pub const NORTH_WEST: Direction = 7;

/// Square-index step per direction. North is towards rank 8 (row 0).
pub const DIRECTION_OFFSETS: [i8; 8] = [-8, 8, -1, 1, -7, 7, 9, -9];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [NORTH, SOUTH, WEST, EAST];
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [NORTH_EAST, SOUTH_WEST, SOUTH_EAST, NORTH_WEST];
pub const ALL_DIRECTIONS: [Direction; 8] = [
    NORTH, SOUTH, WEST, EAST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST, NORTH_WEST,
];

pub const SQUARES_TO_EDGE: [[u8; 8]; 64] = generate_squares_to_edge();

#[inline]
pub const fn squares_to_edge(square: u8, direction: Direction) -> u8 {
    SQUARES_TO_EDGE[square as usize][direction]
}

const fn generate_squares_to_edge() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as u8;
        let file = (sq % 8) as u8;

        let north = row;
        let south = 7 - row;
        let west = file;
        let east = 7 - file;

        table[sq][NORTH] = north;
        table[sq][SOUTH] = south;
        table[sq][WEST] = west;
        table[sq][EAST] = east;
        table[sq][NORTH_EAST] = min(north, east);
        table[sq][SOUTH_WEST] = min(south, west);
        table[sq][SOUTH_EAST] = min(south, east);
        table[sq][NORTH_WEST] = min(north, west);

        sq += 1;
    }

    table
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_a8_only_reaches_south_and_east() {
        assert_eq!(SQUARES_TO_EDGE[0], [0, 7, 0, 7, 0, 0, 7, 0]);
    }

    #[test]
    fn d4_diagonals_use_the_shorter_leg() {
        // d4 = row 4, file 3.
        let d4 = 35u8;
        assert_eq!(squares_to_edge(d4, NORTH), 4);
        assert_eq!(squares_to_edge(d4, SOUTH), 3);
        assert_eq!(squares_to_edge(d4, NORTH_EAST), 4);
        assert_eq!(squares_to_edge(d4, SOUTH_WEST), 3);
        assert_eq!(squares_to_edge(d4, SOUTH_EAST), 3);
        assert_eq!(squares_to_edge(d4, NORTH_WEST), 3);
    }

    #[test]
    fn every_ray_stays_on_the_board() {
        for sq in 0..64i16 {
            for dir in ALL_DIRECTIONS {
                let steps = i16::from(SQUARES_TO_EDGE[sq as usize][dir]);
                let last = sq + i16::from(DIRECTION_OFFSETS[dir]) * steps;
                assert!((0..64).contains(&last), "square {sq} dir {dir}");
            }
        }
    }
}
