/// Drops every occurrence of `floor`, keeping the order of the other stops.
pub fn remove_all(queue: &mut Vec<u8>, floor: u8) {
    queue.retain(|&queued| queued != floor);
}
