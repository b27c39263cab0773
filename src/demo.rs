use anyhow::ensure;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::single_linked_list::SingleLinkedList;

type Result<T> = anyhow::Result<T>;

/// Builds a sorted list by splicing random values in behind a cursor, then
/// drains it from the front.
pub fn run() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(20240614);
    let mut sorted: SingleLinkedList<u32> = SingleLinkedList::new();

    for _ in 0..16 {
        let value = rng.gen_range(0..100);
        let mut cursor = sorted.cursor_before_begin_mut();
        while cursor.peek_next().map_or(false, |next| *next < value) {
            cursor.move_next();
        }
        cursor.insert_after(value);
    }

    ensure!(sorted.len() == 16, "lost elements during sorted insertion");
    let pairs_in_order = sorted
        .iter()
        .zip(sorted.iter().skip(1))
        .all(|(a, b)| a <= b);
    ensure!(pairs_in_order, "cursor insertion broke the ordering");

    println!("sorted: {:?}", sorted);

    let mut drained = Vec::with_capacity(sorted.len());
    while let Some(value) = sorted.pop_front() {
        drained.push(value);
    }
    ensure!(sorted.is_empty(), "list not empty after draining");
    println!("drained: {:?}", drained);

    Ok(())
}
