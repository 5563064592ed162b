//! Weak collection change subscriptions.
//!
//! [`WeakCollectionSubscription`] attaches a handler to a
//! [`NotifyCollectionChanged`] source while holding the source only through a
//! [`Weak`] reference. The subscription therefore never keeps the source
//! alive, and releasing it after the source is gone is a silent no-op.
//!
//! The handler itself is registered directly on the source's signal for as
//! long as the subscription is attached, so the source does keep the handler
//! alive until the subscription is disposed or the source is dropped.
//!
//! # Lifecycle
//!
//! ```text
//!            new / try_new
//!                 │
//!                 ▼
//!   ┌──────────────────────────┐  dispose / drop   ┌──────────────┐
//!   │ attached (ConnectionId)  │ ────────────────▶ │   detached   │
//!   └──────────────────────────┘                   └──────────────┘
//!                                                  (dispose again: no-op)
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_lattice_extensions::{
//!     CollectionChangedArgs, NotifyCollectionChanged, NotifyCollectionChangedExt, Signal,
//! };
//!
//! struct Source {
//!     changed: Signal<CollectionChangedArgs<i32>>,
//! }
//!
//! impl NotifyCollectionChanged for Source {
//!     type Item = i32;
//!     fn collection_changed(&self) -> &Signal<CollectionChangedArgs<i32>> {
//!         &self.changed
//!     }
//! }
//!
//! let source = Arc::new(Source { changed: Signal::new() });
//! let subscription = source.weak_subscribe(|args| println!("{:?}", args.action()));
//!
//! source.changed.emit(CollectionChangedArgs::added(vec![1], 0));
//!
//! drop(source);
//! subscription.dispose(); // source is gone: nothing to do
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::collection::{CollectionChangedArgs, NotifyCollectionChanged};
use crate::error::{require, Result};
use crate::logging::{span_names, targets};
use crate::signal::ConnectionId;

/// A shared collection change handler.
pub type CollectionChangedHandler<T> = Arc<dyn Fn(&CollectionChangedArgs<T>) + Send + Sync>;

/// A handler registration on a collection that does not keep the collection alive.
///
/// The subscription is attached on construction and detached at most once,
/// by [`dispose`](Self::dispose) or when the subscription is dropped.
pub struct WeakCollectionSubscription<S: NotifyCollectionChanged> {
    source: Weak<S>,
    handler: CollectionChangedHandler<S::Item>,
    /// `Some` while the handler is registered on the source.
    connection: Mutex<Option<ConnectionId>>,
}

impl<S: NotifyCollectionChanged> WeakCollectionSubscription<S> {
    /// Subscribe `handler` to `source` and attach immediately.
    pub fn new<F>(source: &Arc<S>, handler: F) -> Self
    where
        F: Fn(&CollectionChangedArgs<S::Item>) + Send + Sync + 'static,
    {
        Self::with_shared_handler(source, Arc::new(handler))
    }

    /// Subscribe an already shared handler to `source`.
    pub fn with_shared_handler(source: &Arc<S>, handler: CollectionChangedHandler<S::Item>) -> Self {
        let subscription = Self {
            source: Arc::downgrade(source),
            handler,
            connection: Mutex::new(None),
        };
        subscription.subscribe();
        subscription
    }

    /// Subscribe when both arguments may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::InvalidArgument`](crate::ExtensionError::InvalidArgument)
    /// naming `source` or `handler`, whichever is absent first. Nothing is
    /// registered in that case.
    pub fn try_new<F>(source: Option<&Arc<S>>, handler: Option<F>) -> Result<Self>
    where
        F: Fn(&CollectionChangedArgs<S::Item>) + Send + Sync + 'static,
    {
        let source = require(source, "source")?;
        let handler = require(handler, "handler")?;
        Ok(Self::new(source, handler))
    }

    /// Detach the handler from the source.
    ///
    /// Idempotent: only the first call after attachment has an effect. If the
    /// source has already been dropped the subscription is simply marked
    /// detached.
    pub fn dispose(&self) {
        self.unsubscribe();
    }

    /// Whether the handler is currently registered on the source.
    pub fn is_subscribed(&self) -> bool {
        self.connection.lock().is_some()
    }

    /// Whether the source is still alive.
    pub fn is_source_alive(&self) -> bool {
        self.source.strong_count() > 0
    }

    fn subscribe(&self) {
        let _span = tracing::trace_span!(span_names::SUBSCRIPTION, op = "subscribe").entered();
        let mut connection = self.connection.lock();
        if connection.is_some() {
            return;
        }

        let Some(source) = self.source.upgrade() else {
            tracing::debug!(target: targets::SUBSCRIPTION, "source already dropped, staying detached");
            return;
        };

        let id = source
            .collection_changed()
            .connect_shared(self.handler.clone());
        *connection = Some(id);
        tracing::trace!(target: targets::SUBSCRIPTION, ?id, "subscribed to collection changes");
    }

    fn unsubscribe(&self) {
        let _span = tracing::trace_span!(span_names::SUBSCRIPTION, op = "unsubscribe").entered();
        let mut connection = self.connection.lock();
        let Some(id) = connection.take() else {
            return;
        };

        match self.source.upgrade() {
            Some(source) => {
                source.collection_changed().disconnect(id);
                tracing::trace!(target: targets::SUBSCRIPTION, ?id, "unsubscribed from collection changes");
            }
            None => {
                tracing::debug!(target: targets::SUBSCRIPTION, ?id, "source already dropped, nothing to detach");
            }
        }
    }
}

impl<S: NotifyCollectionChanged> Drop for WeakCollectionSubscription<S> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl<S: NotifyCollectionChanged> std::fmt::Debug for WeakCollectionSubscription<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakCollectionSubscription")
            .field("subscribed", &self.is_subscribed())
            .field("source_alive", &self.is_source_alive())
            .finish()
    }
}

/// Weak subscription entry point on shared collection sources.
pub trait NotifyCollectionChangedExt: NotifyCollectionChanged + Sized {
    /// Create a [`WeakCollectionSubscription`] on this source.
    fn weak_subscribe<F>(self: &Arc<Self>, handler: F) -> WeakCollectionSubscription<Self>
    where
        F: Fn(&CollectionChangedArgs<Self::Item>) + Send + Sync + 'static,
    {
        WeakCollectionSubscription::new(self, handler)
    }
}

impl<S: NotifyCollectionChanged> NotifyCollectionChangedExt for S {}

/// Create a weak subscription when the source or handler may be absent.
///
/// # Errors
///
/// Returns [`ExtensionError::InvalidArgument`](crate::ExtensionError::InvalidArgument)
/// if either argument is `None`.
pub fn weak_subscribe<S, F>(
    source: Option<&Arc<S>>,
    handler: Option<F>,
) -> Result<WeakCollectionSubscription<S>>
where
    S: NotifyCollectionChanged,
    F: Fn(&CollectionChangedArgs<S::Item>) + Send + Sync + 'static,
{
    WeakCollectionSubscription::try_new(source, handler)
}
