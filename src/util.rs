/// Which child slot of a node something lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side a value descends to from a node holding `pivot`. Ties go right.
    pub(crate) fn of(value: u32, pivot: u32) -> Self {
        if value < pivot {
            Self::Left
        } else {
            Self::Right
        }
    }
}
