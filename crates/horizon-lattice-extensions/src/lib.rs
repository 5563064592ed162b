//! Extension helpers for Horizon Lattice.
//!
//! This crate collects small utilities that sit next to the object model:
//!
//! - **Commands**: null-safe `can_execute` / `execute` on optional commands
//! - **Sequences**: index-of, bounded take, checked count, and duration sums
//! - **Strings**: null-or-empty and null-or-whitespace checks
//! - **Weak subscriptions**: collection change handlers that never keep the
//!   collection alive
//!
//! # Weak Subscription Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use horizon_lattice_extensions::{
//!     CollectionChangedArgs, NotifyCollectionChanged, NotifyCollectionChangedExt, Signal,
//! };
//!
//! struct Inbox {
//!     changed: Signal<CollectionChangedArgs<String>>,
//! }
//!
//! impl NotifyCollectionChanged for Inbox {
//!     type Item = String;
//!     fn collection_changed(&self) -> &Signal<CollectionChangedArgs<String>> {
//!         &self.changed
//!     }
//! }
//!
//! let inbox = Arc::new(Inbox { changed: Signal::new() });
//! let unread = Arc::new(AtomicUsize::new(0));
//!
//! let unread_clone = unread.clone();
//! let subscription = inbox.weak_subscribe(move |args| {
//!     unread_clone.fetch_add(args.new_items().len(), Ordering::SeqCst);
//! });
//!
//! inbox.changed.emit(CollectionChangedArgs::added(vec!["hello".into()], 0));
//! subscription.dispose();
//! inbox.changed.emit(CollectionChangedArgs::added(vec!["ignored".into()], 1));
//!
//! assert_eq!(unread.load(Ordering::SeqCst), 1);
//! ```
//!
//! # Sequence Example
//!
//! ```
//! use horizon_lattice_extensions::{is_none_or_empty, SequenceExt};
//!
//! assert_eq!((0..10).index_of(&5), Some(5));
//! assert_eq!((0..10).index_of(&10), None);
//! assert_eq!((0..10).take_range(3, 3).collect::<Vec<_>>(), vec![3, 4, 5]);
//! assert_eq!((0..10).count_checked(), Ok(10));
//! assert!(is_none_or_empty(None::<Vec<u8>>));
//! ```

pub mod collection;
pub mod command;
mod error;
pub mod logging;
pub mod sequence;
pub mod signal;
pub mod string;
pub mod subscription;

pub use collection::{CollectionChangeAction, CollectionChangedArgs, NotifyCollectionChanged};
pub use command::{safe_can_execute, safe_execute, Command, CommandExt};
pub use error::{ExtensionError, Result};
pub use sequence::{
    index_of_by, is_none_or_empty, DefaultEqualityComparer, EqualityComparer, SequenceExt,
    SliceExt,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use string::StrExt;
pub use subscription::{
    weak_subscribe, CollectionChangedHandler, NotifyCollectionChangedExt,
    WeakCollectionSubscription,
};
