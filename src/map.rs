use crate::error::Result;

/// The sorted map contract shared by every binary search tree map in this crate.
///
/// # Examples
///
/// ```
/// use bst_maps::avl_tree::AvlMap;
/// use bst_maps::bst::BstMap;
/// use bst_maps::OrderedMap;
///
/// fn fill<M: OrderedMap<u32, u32>>(map: &mut M) {
///     for key in 0..10 {
///         map.insert(key, key * 2);
///     }
/// }
///
/// let mut bst = BstMap::new();
/// let mut avl = AvlMap::new();
/// fill(&mut bst);
/// fill(&mut avl);
/// assert_eq!(OrderedMap::len(&bst), OrderedMap::len(&avl));
/// ```
pub trait OrderedMap<T, U>
where
    T: Ord,
{
    /// Inserts a key-value pair, returning the replaced pair if the key already existed.
    fn insert(&mut self, key: T, value: U) -> Option<(T, U)>;

    fn get(&self, key: &T) -> Option<&U>;

    fn contains_key(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Overwrites the value of an existing key and returns the previous value. Returns
    /// `Error::KeyNotFound` without touching the map if the key does not exist.
    fn set(&mut self, key: &T, value: U) -> Result<U>;

    fn remove(&mut self, key: &T) -> Option<(T, U)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
