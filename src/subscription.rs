use std::fmt;

type Disposer = Box<dyn FnOnce() + Send + Sync>;

/// Handle to a listener, observer or timer. Releasing it more than once is a
/// no-op, and dropping it releases it.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    disposer: Option<Disposer>,
}

impl Subscription {
    pub fn new(disposer: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            disposer: Some(Box::new(disposer)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.disposer.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(dispose) = self.disposer.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn counted() -> (Arc<AtomicUsize>, Subscription) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (count, sub)
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let (count, mut sub) = counted();
        assert!(sub.is_active());
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        drop(sub);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (count, sub) = counted();
        drop(sub);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
