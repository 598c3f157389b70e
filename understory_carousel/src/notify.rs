// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification registry: named channels with synchronous subscribers.
//!
//! A slider emits three notifications over its lifetime:
//!
//! - `init` once, after construction.
//! - `change` whenever the active index is set.
//! - `touch` whenever a gesture begins.
//!
//! Subscribers register for one channel and are called synchronously, in
//! registration order, every time a notification on that channel is emitted.
//! Nothing is buffered: a subscriber only sees notifications emitted after it
//! registered.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use understory_carousel::notify::{Notification, NotificationKind, Notifications};
//!
//! let seen = Rc::new(Cell::new(None));
//! let mut notifications = Notifications::<&str>::new();
//! let sink = seen.clone();
//! notifications.subscribe(NotificationKind::Change, move |n| sink.set(Some(n.index())));
//!
//! let slides = ["intro", "features", "pricing"];
//! notifications.emit(&Notification::Change { index: 2, element: &slides[2] });
//! assert_eq!(seen.get(), Some(2));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// The named channels a slider emits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Emitted once after construction.
    Init,
    /// Emitted whenever the active index is set.
    Change,
    /// Emitted whenever a gesture begins.
    Touch,
}

impl NotificationKind {
    /// Returns the channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Change => "change",
            Self::Touch => "touch",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NotificationKind {
    type Err = UnknownNotification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "change" => Ok(Self::Change),
            "touch" => Ok(Self::Touch),
            _ => Err(UnknownNotification),
        }
    }
}

/// Error returned when parsing a channel name that is not `init`, `change`, or `touch`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownNotification;

impl fmt::Display for UnknownNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown notification name; expected `init`, `change`, or `touch`")
    }
}

impl core::error::Error for UnknownNotification {}

/// A notification payload, borrowing slides from the emitting slider.
#[derive(Debug)]
pub enum Notification<'a, S> {
    /// The slider was constructed.
    Init {
        /// The initially active slide.
        element: &'a S,
        /// The initially active index.
        index: usize,
    },
    /// The active index was set.
    Change {
        /// The new active index.
        index: usize,
        /// The slide at the new active index.
        element: &'a S,
    },
    /// A gesture began.
    Touch {
        /// The active index when the gesture began.
        index: usize,
        /// Every slide, in display order.
        slides: &'a [S],
        /// The slide at `index`.
        element: &'a S,
    },
}

impl<'a, S> Notification<'a, S> {
    /// Returns the channel this notification is emitted on.
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Init { .. } => NotificationKind::Init,
            Self::Change { .. } => NotificationKind::Change,
            Self::Touch { .. } => NotificationKind::Touch,
        }
    }

    /// Returns the index carried by the notification.
    #[must_use]
    pub fn index(&self) -> usize {
        match *self {
            Self::Init { index, .. } | Self::Change { index, .. } | Self::Touch { index, .. } => {
                index
            }
        }
    }

    /// Returns the slide carried by the notification.
    #[must_use]
    pub fn element(&self) -> &'a S {
        match *self {
            Self::Init { element, .. }
            | Self::Change { element, .. }
            | Self::Touch { element, .. } => element,
        }
    }
}

impl<S> Clone for Notification<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Notification<'_, S> {}

/// Handle returned by [`Notifications::subscribe`], used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Handler<S> = Box<dyn FnMut(&Notification<'_, S>)>;

struct Subscriber<S> {
    id: SubscriptionId,
    kind: NotificationKind,
    handler: Handler<S>,
}

/// Registry of notification subscribers, keyed by channel.
pub struct Notifications<S> {
    subscribers: Vec<Subscriber<S>>,
    next_id: u64,
}

impl<S> Default for Notifications<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Notifications<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifications")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<S> Notifications<S> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` on the `kind` channel.
    pub fn subscribe(
        &mut self,
        kind: NotificationKind,
        handler: impl FnMut(&Notification<'_, S>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Registers `handler` on the channel called `name`.
    pub fn subscribe_named(
        &mut self,
        name: &str,
        handler: impl FnMut(&Notification<'_, S>) + 'static,
    ) -> Result<SubscriptionId, UnknownNotification> {
        let kind = name.parse()?;
        Ok(self.subscribe(kind, handler))
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Delivers `notification` to every subscriber of its channel.
    ///
    /// Returns the number of subscribers that were called.
    pub fn emit(&mut self, notification: &Notification<'_, S>) -> usize {
        let kind = notification.kind();
        let mut delivered = 0;
        for subscriber in self.subscribers.iter_mut().filter(|s| s.kind == kind) {
            (subscriber.handler)(notification);
            delivered += 1;
        }
        delivered
    }

    /// Returns the number of subscribers on `kind`.
    #[must_use]
    pub fn subscriber_count(&self, kind: NotificationKind) -> usize {
        self.subscribers.iter().filter(|s| s.kind == kind).count()
    }

    /// Returns the total number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in [
            NotificationKind::Init,
            NotificationKind::Change,
            NotificationKind::Touch,
        ] {
            assert_eq!(kind.name().parse::<NotificationKind>(), Ok(kind));
        }
        assert_eq!("swipe".parse::<NotificationKind>(), Err(UnknownNotification));
    }

    #[test]
    fn delivery_follows_registration_order_per_channel() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut n = Notifications::<u32>::new();
        for tag in ["first", "second"] {
            let log = log.clone();
            n.subscribe(NotificationKind::Change, move |ev| {
                log.borrow_mut().push((tag, ev.index()));
            });
        }
        let log_touch = log.clone();
        n.subscribe(NotificationKind::Touch, move |ev| {
            log_touch.borrow_mut().push(("touch", ev.index()));
        });

        let slides = [7_u32, 8, 9];
        let delivered = n.emit(&Notification::Change {
            index: 1,
            element: &slides[1],
        });

        assert_eq!(delivered, 2);
        assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut n = Notifications::<u8>::new();
        let c = count.clone();
        let id = n.subscribe(NotificationKind::Init, move |_| *c.borrow_mut() += 1);

        assert!(n.unsubscribe(id));
        assert!(!n.unsubscribe(id));
        n.emit(&Notification::Init {
            element: &0,
            index: 0,
        });
        assert_eq!(*count.borrow(), 0);
        assert!(n.is_empty());
    }

    #[test]
    fn subscribe_named_rejects_unknown_channels() {
        let mut n = Notifications::<u8>::new();
        assert!(n.subscribe_named("touch", |_| {}).is_ok());
        assert_eq!(n.subscribe_named("drag", |_| {}), Err(UnknownNotification));
        assert_eq!(n.subscriber_count(NotificationKind::Touch), 1);
        assert_eq!(n.len(), 1);
    }

    #[test]
    fn touch_payload_carries_all_slides() {
        let slides = ['a', 'b', 'c'];
        let ev = Notification::Touch {
            index: 2,
            slides: &slides,
            element: &slides[2],
        };
        assert_eq!(ev.kind(), NotificationKind::Touch);
        assert_eq!(ev.element(), &'c');
        match ev {
            Notification::Touch { slides, .. } => assert_eq!(slides.len(), 3),
            _ => unreachable!("constructed as touch"),
        }
    }
}
