//! Collection change notification.
//!
//! A type that mutates a collection and wants observers to know about it
//! implements [`NotifyCollectionChanged`], exposing a
//! [`Signal<CollectionChangedArgs<T>>`](crate::Signal). Each emission
//! describes one mutation: what happened ([`CollectionChangeAction`]),
//! which items were affected, and where.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_extensions::{
//!     CollectionChangedArgs, NotifyCollectionChanged, Signal,
//! };
//! use parking_lot::Mutex;
//!
//! struct Names {
//!     items: Mutex<Vec<String>>,
//!     changed: Signal<CollectionChangedArgs<String>>,
//! }
//!
//! impl NotifyCollectionChanged for Names {
//!     type Item = String;
//!
//!     fn collection_changed(&self) -> &Signal<CollectionChangedArgs<String>> {
//!         &self.changed
//!     }
//! }
//!
//! impl Names {
//!     fn push(&self, name: &str) {
//!         let index = {
//!             let mut items = self.items.lock();
//!             items.push(name.to_string());
//!             items.len() - 1
//!         };
//!         self.changed
//!             .emit(CollectionChangedArgs::added(vec![name.to_string()], index));
//!     }
//! }
//! ```

use crate::signal::Signal;

/// The kind of mutation a collection reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionChangeAction {
    /// One or more items were added.
    Add,
    /// One or more items were removed.
    Remove,
    /// One or more items were replaced in place.
    Replace,
    /// One or more items were moved to a different position.
    Move,
    /// The contents changed dramatically; observers should re-read everything.
    Reset,
}

/// Describes a single collection mutation.
///
/// Construct with the action-specific constructors ([`added`](Self::added),
/// [`removed`](Self::removed), ...) so that the payload always matches the
/// action. Starting indices are `None` when the position is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionChangedArgs<T> {
    action: CollectionChangeAction,
    new_items: Vec<T>,
    old_items: Vec<T>,
    new_starting_index: Option<usize>,
    old_starting_index: Option<usize>,
}

impl<T> CollectionChangedArgs<T> {
    /// The collection was cleared or changed beyond item-level description.
    pub fn reset() -> Self {
        Self {
            action: CollectionChangeAction::Reset,
            new_items: Vec::new(),
            old_items: Vec::new(),
            new_starting_index: None,
            old_starting_index: None,
        }
    }

    /// `items` were inserted at `starting_index`.
    pub fn added(items: Vec<T>, starting_index: usize) -> Self {
        Self {
            action: CollectionChangeAction::Add,
            new_items: items,
            old_items: Vec::new(),
            new_starting_index: Some(starting_index),
            old_starting_index: None,
        }
    }

    /// `items` were removed from `starting_index`.
    pub fn removed(items: Vec<T>, starting_index: usize) -> Self {
        Self {
            action: CollectionChangeAction::Remove,
            new_items: Vec::new(),
            old_items: items,
            new_starting_index: None,
            old_starting_index: Some(starting_index),
        }
    }

    /// `old_items` at `starting_index` were replaced by `new_items`.
    pub fn replaced(new_items: Vec<T>, old_items: Vec<T>, starting_index: usize) -> Self {
        Self {
            action: CollectionChangeAction::Replace,
            new_items,
            old_items,
            new_starting_index: Some(starting_index),
            old_starting_index: Some(starting_index),
        }
    }

    /// `items` moved from `old_index` to `new_index`.
    pub fn moved(items: Vec<T>, new_index: usize, old_index: usize) -> Self
    where
        T: Clone,
    {
        Self {
            action: CollectionChangeAction::Move,
            old_items: items.clone(),
            new_items: items,
            new_starting_index: Some(new_index),
            old_starting_index: Some(old_index),
        }
    }

    /// What kind of mutation this is.
    pub fn action(&self) -> CollectionChangeAction {
        self.action
    }

    /// Items involved in the change after it happened.
    pub fn new_items(&self) -> &[T] {
        &self.new_items
    }

    /// Items involved in the change before it happened.
    pub fn old_items(&self) -> &[T] {
        &self.old_items
    }

    /// Index at which the change now applies.
    pub fn new_starting_index(&self) -> Option<usize> {
        self.new_starting_index
    }

    /// Index at which the change applied before.
    pub fn old_starting_index(&self) -> Option<usize> {
        self.old_starting_index
    }
}

/// A source of collection change notifications.
///
/// Implementors own the [`Signal`] and emit on it after every mutation.
/// Handlers are attached with [`Signal::connect`], or weakly through
/// [`NotifyCollectionChangedExt::weak_subscribe`](crate::NotifyCollectionChangedExt::weak_subscribe).
pub trait NotifyCollectionChanged: Send + Sync + 'static {
    /// The element type of the collection.
    type Item: Clone + Send + 'static;

    /// The change-event stream.
    fn collection_changed(&self) -> &Signal<CollectionChangedArgs<Self::Item>>;
}
