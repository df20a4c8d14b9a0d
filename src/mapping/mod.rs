pub(crate) mod direct_mapping;
pub(crate) mod indexed_mapping;
pub(crate) mod keyed_mapping;
pub(crate) mod sorted_keyed_mapping;

/// Common contract for the per-width child stores. A store maps edge bytes to
/// child nodes; how it does so (parallel arrays, a 256-entry index, or direct
/// addressing) is what distinguishes the node kinds.
pub(crate) trait NodeMapping<N, const WIDTH: usize> {
    const WIDTH: usize = WIDTH;

    fn add_child(&mut self, key: u8, node: N);
    fn seek_child(&self, key: u8) -> Option<&N>;
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N>;
    fn delete_child(&mut self, key: u8) -> Option<N>;
    fn num_children(&self) -> usize;
}
