/// Move selection cursor one item forward, wrapping to the first item
/// after the last one.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else {
        (selected + 1) % item_count
    }
}
