// Copyright 2025 Cowboy AI, LLC.

//! Categories - registries of objects and the morphisms between them
//!
//! A category here is deliberately permissive:
//! - Objects are kept in insertion order and may repeat
//! - Morphisms are grouped by their `(source, target)` pair, in insertion order,
//!   and several parallel morphisms may share a pair
//! - A morphism's endpoints do not have to be registered objects

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use super::morphism::Morphism;

/// A category over objects of type `T` with endomorphisms `T → T`
#[derive(Debug, Clone)]
pub struct Category<T> {
    /// Objects in insertion order
    objects: Vec<T>,

    /// Morphisms keyed by `(source, target)`
    morphisms: IndexMap<(T, T), Vec<Morphism<T, T>>>,
}

impl<T> Default for Category<T> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            morphisms: IndexMap::new(),
        }
    }
}

impl<T> Category<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty category
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the category
    ///
    /// Duplicates are kept. Once added, the object is a known source and
    /// [`morphisms_from`](Self::morphisms_from) yields its (possibly empty)
    /// outgoing morphisms.
    pub fn add_object(&mut self, obj: T) {
        self.objects.push(obj);
        debug!(objects = self.objects.len(), "added object to category");
    }

    /// Add a morphism between two objects
    ///
    /// Neither endpoint has to be registered with [`add_object`](Self::add_object).
    ///
    /// # Example
    /// ```rust
    /// use cim_fp::Category;
    ///
    /// let mut cat = Category::new();
    /// cat.add_object(1);
    /// cat.add_object(2);
    /// cat.add_morphism(1, 2, |x| x * 2);
    ///
    /// let morphisms = cat.morphisms(&1, &2);
    /// assert_eq!(morphisms.len(), 1);
    /// assert_eq!(morphisms[0].apply(1), 2);
    /// ```
    pub fn add_morphism<F>(&mut self, source: T, target: T, transform: F) -> &Morphism<T, T>
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        let morphism = Morphism::new(source, target, transform);
        self.insert_morphism(morphism)
    }

    /// Add an already constructed morphism, e.g. one carrying a name
    pub fn insert_morphism(&mut self, morphism: Morphism<T, T>) -> &Morphism<T, T> {
        let key = (morphism.source().clone(), morphism.target().clone());
        let bucket = self.morphisms.entry(key).or_default();
        bucket.push(morphism);

        let index = bucket.len() - 1;
        let added = &bucket[index];
        debug!(
            morphism = %added.description(),
            parallel = bucket.len(),
            "added morphism to category"
        );
        added
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    /// Whether `obj` was added with [`add_object`](Self::add_object)
    pub fn contains_object(&self, obj: &T) -> bool {
        self.objects.contains(obj)
    }

    /// Whether `obj` is a registered object or the source of any morphism
    pub fn is_source(&self, obj: &T) -> bool {
        self.contains_object(obj) || self.morphisms.keys().any(|(source, _)| source == obj)
    }

    /// Morphisms registered from `source` to `target`, in insertion order
    pub fn morphisms(&self, source: &T, target: &T) -> &[Morphism<T, T>] {
        self.morphisms
            .get(&(source.clone(), target.clone()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All morphisms leaving `source`, grouped by target in insertion order
    pub fn morphisms_from<'a>(
        &'a self,
        source: &'a T,
    ) -> impl Iterator<Item = &'a Morphism<T, T>> + 'a {
        self.morphisms
            .iter()
            .filter(move |((from, _), _)| from == source)
            .flat_map(|(_, bucket)| bucket.iter())
    }

    /// Number of objects, duplicates included
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Total number of registered morphisms
    pub fn morphism_count(&self) -> usize {
        self.morphisms.values().map(Vec::len).sum()
    }

    /// True when neither objects nor morphisms have been added
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.morphisms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_empty() {
        let cat = Category::<i32>::new();
        assert!(cat.is_empty());
        assert!(cat.objects().is_empty());
        assert_eq!(cat.morphism_count(), 0);
    }

    #[test]
    fn test_add_object_makes_known_source() {
        let mut cat = Category::new();
        cat.add_object(1);

        assert!(cat.contains_object(&1));
        assert!(cat.is_source(&1));
        assert_eq!(cat.morphisms_from(&1).count(), 0);
        assert!(!cat.is_empty());
    }

    #[test]
    fn test_duplicate_objects_are_kept() {
        let mut cat = Category::new();
        cat.add_object("a");
        cat.add_object("a");
        assert_eq!(cat.objects(), &["a", "a"]);
        assert_eq!(cat.object_count(), 2);
    }

    #[test]
    fn test_add_morphism_between_objects() {
        let mut cat = Category::new();
        cat.add_object(1);
        cat.add_object(2);

        let added = cat.add_morphism(1, 2, |x| x * 2);
        assert_eq!(added.apply(1), 2);

        let morphisms = cat.morphisms(&1, &2);
        assert_eq!(morphisms.len(), 1);
        assert_eq!(morphisms[0].apply(1), 2);
        assert!(cat.morphisms(&2, &1).is_empty());
    }

    #[test]
    fn test_add_morphism_without_objects() {
        let mut cat = Category::new();
        cat.add_morphism(7, 8, |x| x + 1);

        assert!(!cat.contains_object(&7));
        assert!(cat.is_source(&7));
        assert!(!cat.is_source(&8));
        assert_eq!(cat.morphism_count(), 1);
    }

    #[test]
    fn test_parallel_morphisms_keep_order() {
        let mut cat = Category::new();
        cat.add_morphism(1, 2, |x| x * 2);
        cat.add_morphism(1, 2, |x| x + 1);
        cat.insert_morphism(Morphism::new(1, 2, |x| x - 1).named("pred"));

        let outputs: Vec<i32> = cat.morphisms(&1, &2).iter().map(|m| m.apply(10)).collect();
        assert_eq!(outputs, vec![20, 11, 9]);
        assert_eq!(cat.morphisms(&1, &2)[2].name(), Some("pred"));
    }

    #[test]
    fn test_morphisms_from_groups_by_target() {
        let mut cat = Category::new();
        cat.add_morphism(1, 2, |x| x * 2);
        cat.add_morphism(2, 4, |x| x * 2);
        cat.add_morphism(1, 3, |x| x * 3);

        let targets: Vec<i32> = cat.morphisms_from(&1).map(|m| *m.target()).collect();
        assert_eq!(targets, vec![2, 3]);
        assert_eq!(cat.morphism_count(), 3);
    }

    fn borrowed_category(names: &[String]) -> Category<&str> {
        let mut cat = Category::new();
        for name in names {
            cat.add_object(name.as_str());
        }
        cat.add_morphism(names[0].as_str(), names[1].as_str(), str::trim);
        cat
    }

    #[test]
    fn test_borrowed_labels() {
        let names = vec![" padded ".to_string(), "trimmed".to_string()];
        let cat = borrowed_category(&names);

        let morphisms = cat.morphisms(&names[0].as_str(), &names[1].as_str());
        assert_eq!(morphisms.len(), 1);
        assert_eq!(morphisms[0].apply(names[0].as_str()), "padded");
        assert_eq!(cat.object_count(), 2);
    }

    #[test]
    fn test_labels_without_debug() {
        #[derive(Clone, PartialEq, Eq, Hash)]
        struct Station(u8);

        let mut cat = Category::new();
        cat.add_object(Station(1));
        cat.add_morphism(Station(1), Station(2), |s: Station| Station(s.0 + 1));

        assert!(cat.contains_object(&Station(1)));
        assert!(cat.is_source(&Station(1)));
        let next = cat.morphisms(&Station(1), &Station(2))[0].apply(Station(5));
        assert!(next == Station(6));
    }
}
