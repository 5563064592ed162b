//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use horizon_lattice_extensions::{CollectionChangedArgs, NotifyCollectionChanged, Signal};
use parking_lot::Mutex;

static TRACING: Once = Once::new();

/// Route crate logs through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// An observable list: a `Vec` that reports every mutation on its signal.
pub struct ObservableList<T> {
    items: Mutex<Vec<T>>,
    changed: Signal<CollectionChangedArgs<T>>,
    suppressed: Mutex<usize>,
}

impl<T: Clone + Send + 'static> ObservableList<T> {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
            changed: Signal::new(),
            suppressed: Mutex::new(0),
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.items.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn push(&self, item: T) {
        let index = {
            let mut items = self.items.lock();
            items.push(item.clone());
            items.len() - 1
        };
        self.notify(CollectionChangedArgs::added(vec![item], index));
    }

    pub fn insert(&self, index: usize, item: T) {
        self.items.lock().insert(index, item.clone());
        self.notify(CollectionChangedArgs::added(vec![item], index));
    }

    pub fn remove(&self, index: usize) -> T {
        let item = self.items.lock().remove(index);
        self.notify(CollectionChangedArgs::removed(vec![item.clone()], index));
        item
    }

    pub fn replace(&self, index: usize, item: T) -> T {
        let old = std::mem::replace(&mut self.items.lock()[index], item.clone());
        self.notify(CollectionChangedArgs::replaced(vec![item], vec![old.clone()], index));
        old
    }

    pub fn move_item(&self, old_index: usize, new_index: usize) {
        let item = {
            let mut items = self.items.lock();
            let item = items.remove(old_index);
            items.insert(new_index, item.clone());
            item
        };
        self.notify(CollectionChangedArgs::moved(vec![item], new_index, old_index));
    }

    pub fn clear(&self) {
        self.items.lock().clear();
        self.notify(CollectionChangedArgs::reset());
    }

    /// Append all `items` and report them as a single batch.
    pub fn add_range(&self, items: impl IntoIterator<Item = T>) {
        let added: Vec<T> = items.into_iter().collect();
        if added.is_empty() {
            return;
        }
        let index = {
            let mut current = self.items.lock();
            let index = current.len();
            current.extend(added.iter().cloned());
            index
        };
        self.notify(CollectionChangedArgs::added(added, index));
    }

    /// Remove `length` items starting at `index` and report them as a single batch.
    pub fn remove_range(&self, index: usize, length: usize) {
        if length == 0 {
            return;
        }
        let removed: Vec<T> = self.items.lock().drain(index..index + length).collect();
        self.notify(CollectionChangedArgs::removed(removed, index));
    }

    /// Mute notifications until the returned guard is dropped. Nests.
    pub fn suppress_events(&self) -> SuppressEvents<'_, T> {
        *self.suppressed.lock() += 1;
        SuppressEvents { list: self }
    }

    fn notify(&self, args: CollectionChangedArgs<T>) {
        if *self.suppressed.lock() == 0 {
            self.changed.emit(args);
        }
    }
}

impl<T> NotifyCollectionChanged for ObservableList<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    fn collection_changed(&self) -> &Signal<CollectionChangedArgs<T>> {
        &self.changed
    }
}

pub struct SuppressEvents<'a, T> {
    list: &'a ObservableList<T>,
}

impl<T> Drop for SuppressEvents<'_, T> {
    fn drop(&mut self) {
        *self.list.suppressed.lock() -= 1;
    }
}
