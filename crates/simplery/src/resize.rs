//! Debounced relayout on viewport resizes.
//!
//! Hosts emit resize notifications in bursts. [`Debouncer`] coalesces a
//! burst into one trailing message: every notification cancels the pending
//! timer and starts a new one, and only a quiet window of `delay` lets the
//! message through. [`ResizeController`] pairs a debouncer with the gallery
//! so each coalesced burst becomes one [`Gallery::on_resize`] pass.
//!
//! The timer task runs on the ambient tokio runtime and is torn down through
//! its [`ResizeSubscription`], explicitly or when the owner is dropped.

use std::fmt;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::gallery::{Gallery, LayoutResult};
use crate::host::GalleryHost;

/// Emitted once a burst of resize notifications has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relayout;

/// Handle to cancel a running debounce task.
///
/// The task is cancelled when this handle is dropped.
pub struct ResizeSubscription {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl ResizeSubscription {
    /// Stop the task. A pending trailing message is discarded.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel_tx.is_some()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Trailing-edge debouncer feeding an `mpsc` channel.
pub struct Debouncer {
    notify_tx: mpsc::UnboundedSender<()>,
    subscription: ResizeSubscription,
}

impl Debouncer {
    /// Spawn the timer task. `message_fn` builds the message sent to
    /// `output` after each quiet window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<M, F>(delay: Duration, output: mpsc::UnboundedSender<M>, message_fn: F) -> Self
    where
        M: Send + 'static,
        F: Fn() -> M + Send + 'static,
    {
        let (notify_tx, mut notify_rx) = mpsc::unbounded_channel::<()>();
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            loop {
                // Idle until the first notification of a burst.
                tokio::select! {
                    _ = &mut cancel_rx => return,
                    notified = notify_rx.recv() => {
                        if notified.is_none() {
                            return;
                        }
                    }
                }

                // Each further notification restarts the window.
                loop {
                    tokio::select! {
                        _ = &mut cancel_rx => return,
                        notified = notify_rx.recv() => {
                            if notified.is_none() {
                                return;
                            }
                        }
                        _ = tokio::time::sleep(delay) => {
                            if output.send(message_fn()).is_err() {
                                return; // Receiver dropped
                            }
                            break;
                        }
                    }
                }
            }
        });

        Self {
            notify_tx,
            subscription: ResizeSubscription {
                cancel_tx: Some(cancel_tx),
            },
        }
    }

    /// Record one trigger. Ignored after cancellation.
    pub fn notify(&self) {
        let _ = self.notify_tx.send(());
    }

    pub fn cancel(&mut self) {
        self.subscription.cancel();
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }
}

/// Turns host resize notifications into debounced gallery relayouts.
///
/// # Example
/// ```ignore
/// let mut controller = ResizeController::new(gallery.config().resize_delay);
/// // host resize callback:
/// controller.notify();
/// // event loop:
/// if let Some(result) = controller.drive(&mut gallery, &mut host).await {
///     render(result);
/// }
/// ```
pub struct ResizeController {
    debouncer: Debouncer,
    ready_rx: mpsc::UnboundedReceiver<Relayout>,
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("active", &self.debouncer.is_active())
            .finish()
    }
}

impl ResizeController {
    /// Must be called from within a tokio runtime.
    pub fn new(delay: Duration) -> Self {
        let (ready_tx, ready_rx) = mpsc::unbounded_channel();
        Self {
            debouncer: Debouncer::spawn(delay, ready_tx, || Relayout),
            ready_rx,
        }
    }

    /// The host observed a width-affecting change.
    pub fn notify(&self) {
        log::trace!("resize notification");
        self.debouncer.notify();
    }

    /// Wait for the next settled burst. `None` once cancelled.
    pub async fn next(&mut self) -> Option<Relayout> {
        self.ready_rx.recv().await
    }

    /// A settled burst, if one is waiting.
    pub fn try_next(&mut self) -> Option<Relayout> {
        self.ready_rx.try_recv().ok()
    }

    /// Wait for the next settled burst and relayout `gallery` for it.
    pub async fn drive<'g, E, H>(
        &mut self,
        gallery: &'g mut Gallery<E>,
        host: &mut H,
    ) -> Option<&'g LayoutResult>
    where
        E: Copy + Eq + fmt::Debug,
        H: GalleryHost<Element = E>,
    {
        self.next().await?;
        Some(gallery.on_resize(host))
    }

    /// Unsubscribe from resize handling.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
        self.ready_rx.close();
    }

    pub fn is_active(&self) -> bool {
        self.debouncer.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_sends_built_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let debouncer = Debouncer::spawn(Duration::from_millis(20), tx, || "settled");

        debouncer.notify();
        debouncer.notify();

        assert_eq!(rx.recv().await, Some("settled"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_debouncer_stops_task() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let debouncer = Debouncer::spawn(Duration::from_millis(20), tx, || 1);

        debouncer.notify();
        drop(debouncer);

        // Task exits and drops its sender without sending.
        assert_eq!(rx.recv().await, None);
    }

    #[test]
    fn test_subscription_cancel_is_idempotent() {
        let (cancel_tx, _cancel_rx) = oneshot::channel();
        let mut subscription = ResizeSubscription {
            cancel_tx: Some(cancel_tx),
        };

        assert!(subscription.is_active());
        subscription.cancel();
        subscription.cancel();
        assert!(!subscription.is_active());
    }
}
