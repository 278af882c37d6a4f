//! Axial hex coordinates, adjacency directions and pixel projection

/// √3, the vertical center spacing of adjacent rows in units of the radius
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Cell of the hex grid in axial coordinates
///
/// Plain value type: equality, hashing and ordering are structural, so sets
/// of hexes are keyed purely by `(q, r)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    /// Column axis coordinate
    pub q: i32,
    /// Diagonal axis coordinate
    pub r: i32,
}

impl Hex {
    /// The grid origin, used as the growth seed
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a hex from axial coordinates
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The adjacent hex one step along `direction`
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// The adjacent hex one step against `direction`
    pub const fn step_back(self, direction: Direction) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q - dq, self.r - dr)
    }

    /// All six neighbors, in [`Direction::ALL`] order
    pub fn neighbors(self) -> [Self; 6] {
        Direction::ALL.map(|direction| self.neighbor(direction))
    }

    /// Pixel-space center of this hex for circumradius `radius`
    pub fn to_pixel(self, radius: f64) -> [f64; 2] {
        axial_to_pixel(self, radius)
    }
}

/// One of the six adjacency offsets of the grid
///
/// Directions form a cycle; rotating by one step turns the walk by 60°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction(u8);

const OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

impl Direction {
    /// All directions in cyclic order
    pub const ALL: [Self; 6] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
    ];

    /// Direction at position `index` of the cycle (taken modulo six)
    pub const fn from_index(index: usize) -> Self {
        Self((index % 6) as u8)
    }

    /// Position of this direction in the cycle
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The `(dq, dr)` offset of this direction
    pub const fn offset(self) -> (i32, i32) {
        match self.0 {
            0 => OFFSETS[0],
            1 => OFFSETS[1],
            2 => OFFSETS[2],
            3 => OFFSETS[3],
            4 => OFFSETS[4],
            _ => OFFSETS[5],
        }
    }

    /// Rotate by `turn` steps of 60° (negative turns go the other way)
    pub const fn rotated(self, turn: i32) -> Self {
        let index = (self.0 as i32 + turn).rem_euclid(6);
        Self(index as u8)
    }

    /// The opposite direction
    pub const fn opposite(self) -> Self {
        self.rotated(3)
    }
}

/// Project an axial coordinate to its pixel-space center
///
/// `x = R·1.5·q`, `y = R·(√3/2·q + √3·r)`
pub fn axial_to_pixel(hex: Hex, radius: f64) -> [f64; 2] {
    let q = f64::from(hex.q);
    let r = f64::from(hex.r);
    [
        radius * 1.5 * q,
        radius * (SQRT_3 / 2.0).mul_add(q, SQRT_3 * r),
    ]
}
