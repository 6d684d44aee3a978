/// Paper bill face values held by a register, ordered from the largest down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Denomination {
    Twenty,
    Ten,
    Five,
    Two,
    One,
}

impl Denomination {
    /// Every denomination in descending face value order.
    pub const ALL: [Denomination; 5] = [
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::Two,
        Denomination::One,
    ];

    pub const fn face_value(self) -> i64 {
        match self {
            Denomination::Twenty => 20,
            Denomination::Ten => 10,
            Denomination::Five => 5,
            Denomination::Two => 2,
            Denomination::One => 1,
        }
    }

    /// Position of this denomination within [`Denomination::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Denomination::Twenty => 0,
            Denomination::Ten => 1,
            Denomination::Five => 2,
            Denomination::Two => 3,
            Denomination::One => 4,
        }
    }

    /// True when `amount` is strictly less than this face value,
    /// i.e. a single bill would already overshoot it.
    pub const fn exceeds(self, amount: i64) -> bool {
        amount < self.face_value()
    }
}
