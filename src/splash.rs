use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const LOADING_TITLE: &str = "Loading Portfolio...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplashPhase {
    #[default]
    Loading,
    Ready,
}

impl SplashPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Runs a callback once after a delay. Dropping the returned handle must
/// cancel the callback if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct SplashGuard<H> {
    _handle: H,
    mounted: Rc<Cell<bool>>,
}

impl<H> Drop for SplashGuard<H> {
    fn drop(&mut self) {
        self.mounted.set(false);
    }
}

pub fn start_splash<S, F>(scheduler: &S, delay: Duration, on_ready: F) -> SplashGuard<S::Handle>
where
    S: Scheduler,
    F: FnOnce(SplashPhase) + 'static,
{
    let mounted = Rc::new(Cell::new(true));
    let still_mounted = Rc::clone(&mounted);

    let handle = scheduler.schedule(
        delay,
        Box::new(move || {
            if still_mounted.get() {
                on_ready(SplashPhase::Ready);
            }
        }),
    );

    SplashGuard {
        _handle: handle,
        mounted,
    }
}

#[cfg(target_arch = "wasm32")]
pub struct TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct PendingTask {
        due: Duration,
        cancelled: Rc<Cell<bool>>,
        callback: Option<Box<dyn FnOnce()>>,
    }

    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<Duration>,
        tasks: RefCell<Vec<PendingTask>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push(PendingTask {
                due: self.now.get() + delay,
                cancelled: Rc::clone(&cancelled),
                callback: Some(callback),
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualScheduler {
        fn advance(&self, by: Duration) {
            let now = self.now.get() + by;
            self.now.set(now);

            let due: Vec<Box<dyn FnOnce()>> = self
                .tasks
                .borrow_mut()
                .iter_mut()
                .filter(|task| task.due <= now && !task.cancelled.get())
                .filter_map(|task| task.callback.take())
                .collect();

            for callback in due {
                callback();
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<SplashPhase>>>, impl FnOnce(SplashPhase) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |phase| sink.borrow_mut().push(phase))
    }

    #[test]
    fn becomes_ready_after_delay() {
        let scheduler = ManualScheduler::default();
        let (seen, on_ready) = recorder();

        let _guard = start_splash(&scheduler, Duration::from_millis(2_000), on_ready);

        scheduler.advance(Duration::from_millis(1_999));
        assert!(seen.borrow().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*seen.borrow(), vec![SplashPhase::Ready]);

        scheduler.advance(Duration::from_millis(10_000));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn unmount_before_delay_never_fires() {
        let scheduler = ManualScheduler::default();
        let (seen, on_ready) = recorder();

        let guard = start_splash(&scheduler, Duration::from_millis(2_000), on_ready);
        scheduler.advance(Duration::from_millis(500));
        drop(guard);

        scheduler.advance(Duration::from_millis(5_000));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn loading_is_the_initial_phase() {
        assert!(SplashPhase::default().is_loading());
        assert!(!SplashPhase::Ready.is_loading());
    }
}
