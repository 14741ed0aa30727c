//! ChainingHashTable: string-keyed buckets with separate chaining and
//! doubling resize.

use crate::hashing::bucket_index;
use core::fmt;
use thiserror::Error;

/// Bucket count used by [`ChainingHashTable::new`] and `Default`.
pub const DEFAULT_BUCKET_COUNT: usize = 4;

/// Highest `len / bucket_count` ratio a table holds after any `put`.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

type Bucket<V> = Vec<Entry<V>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("bucket count must be at least 1")]
    ZeroBuckets,
}

#[derive(Clone)]
pub struct ChainingHashTable<V> {
    buckets: Vec<Bucket<V>>,
    count: usize, // total entries across all buckets
}

impl<V> ChainingHashTable<V> {
    /// Empty table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_BUCKET_COUNT),
            count: 0,
        }
    }

    /// Empty table with `bucket_count` buckets. Fails on zero.
    pub fn with_buckets(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            log::trace!("rejecting table construction with zero buckets");
            return Err(TableError::ZeroBuckets);
        }
        Ok(Self {
            buckets: empty_buckets(bucket_count),
            count: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Chain length of bucket `index`, or `None` past the last bucket.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Vec::len)
    }

    /// Insert `key -> value`, or overwrite the value in place if `key` is
    /// already stored.
    ///
    /// Grows to twice the bucket count first whenever one more entry would
    /// push the load factor above [`MAX_LOAD_FACTOR`]. The check counts the
    /// incoming pair even when it turns out to be an overwrite.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if exceeds_max_load(self.count + 1, self.buckets.len()) {
            let grown = self.buckets.len().saturating_mul(2);
            self.resize(grown);
        }

        let i = bucket_index(&key, self.buckets.len());
        let bucket = &mut self.buckets[i];
        if let Some(entry) = bucket.iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return;
        }
        bucket.push(Entry { key, value });
        self.count += 1;
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.bucket_for(key)
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    /// Mutable access to the value under `key`; the entry keeps its position.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = bucket_index(key, self.buckets.len());
        self.buckets[i]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.bucket_for(key).iter().any(|e| e.key == key)
    }

    /// Remove `key` and hand back its value. Remaining entries in the bucket
    /// keep their relative order; the bucket count never shrinks.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = bucket_index(key, self.buckets.len());
        let bucket = &mut self.buckets[i];
        let pos = bucket.iter().position(|e| e.key == key)?;
        let entry = bucket.remove(pos);
        self.count -= 1;
        Some(entry.value)
    }

    /// Remove `key`; `true` if it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Drop every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.count = 0;
    }

    /// Entries in bucket order, then insertion order within each bucket.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.count,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            remaining: self.count,
            buckets: self.buckets.iter_mut(),
            chain: Default::default(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    fn bucket_for(&self, key: &str) -> &Bucket<V> {
        &self.buckets[bucket_index(key, self.buckets.len())]
    }

    /// Swap in `new_count` empty buckets and replay every old entry through
    /// `put`, old bucket by old bucket, preserving chain order.
    fn resize(&mut self, new_count: usize) {
        log::debug!(
            "resizing chaining table: {} -> {} buckets, {} entries",
            self.buckets.len(),
            new_count,
            self.count
        );
        let old_buckets = core::mem::replace(&mut self.buckets, empty_buckets(new_count));
        self.count = 0;
        for bucket in old_buckets {
            for Entry { key, value } in bucket {
                self.put(key, value);
            }
        }
    }
}

impl<V> Default for ChainingHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainingHashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Extend<(K, V)> for ChainingHashTable<V>
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainingHashTable<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, V> IntoIterator for &'a ChainingHashTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, &value)` in bucket order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Bucket<V>>,
    chain: core::slice::Iter<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((e.key.as_str(), &e.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Iterator over `(key, &mut value)` in bucket order.
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Bucket<V>>,
    chain: core::slice::IterMut<'a, Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.next() {
                self.remaining -= 1;
                return Some((e.key.as_str(), &mut e.value));
            }
            self.chain = self.buckets.next()?.iter_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

fn empty_buckets<V>(n: usize) -> Vec<Bucket<V>> {
    (0..n).map(|_| Vec::new()).collect()
}

// `entries / buckets > 3/4`, kept in integers.
#[inline]
fn exceeds_max_load(entries: usize, buckets: usize) -> bool {
    (entries as u128) * 4 > (buckets as u128) * 3
}
