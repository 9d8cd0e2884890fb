#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod scenarios;
mod tree;

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the value into the tree
    Insert(u32),
    /// Delete one copy of the value from the tree
    Delete(u32),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let value = u32::from(u8::arbitrary(g));
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(value),
            1 => Op::Delete(value),
            _ => unreachable!(),
        }
    }
}
