//! Deferred invocation on a background worker.
//!
//! A [`Scheduler`] owns one worker thread and a [`TimerQueue`] of boxed
//! jobs. Callers hand jobs over a channel; the worker sleeps until the
//! nearest deadline (or until new work arrives) and runs every due job in
//! deadline order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle, ThreadId};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use super::timer::TimerQueue;
use crate::config::{CollkitConfig, SchedulerConfig};
use crate::error::{CollError, CollResult};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// How `delay` passes its trailing arguments to the callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForwardMode {
    /// The callback receives the trailing arguments.
    #[default]
    Corrected,
    /// Legacy off-by-one collection: the callback receives no arguments.
    Legacy,
}

enum Command {
    Schedule { deadline: Instant, job: Job },
    Shutdown,
}

/// Runs callbacks no earlier than their requested delay.
pub struct Scheduler {
    sender: Sender<Command>,
    worker: Mutex<Option<JoinHandle<()>>>,
    worker_id: ThreadId,
    pending: Arc<AtomicUsize>,
    // Held for reading across check-and-send in `schedule`, for writing
    // while `shutdown` flips it, so no job is enqueued behind `Shutdown`.
    stopped: RwLock<bool>,
    forward_mode: ForwardMode,
}

static GLOBAL: OnceCell<Scheduler> = OnceCell::new();

impl Scheduler {
    /// Start a scheduler with its own worker thread.
    pub fn new(config: &SchedulerConfig) -> CollResult<Self> {
        let (sender, receiver) = unbounded();
        let pending = Arc::new(AtomicUsize::new(0));
        let idle_poll = config.idle_poll();

        let worker_pending = Arc::clone(&pending);
        let handle = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || run_worker(receiver, idle_poll, worker_pending))
            .map_err(CollError::SchedulerSpawn)?;

        tracing::debug!(thread = %config.thread_name, "scheduler started");

        Ok(Self {
            sender,
            worker_id: handle.thread().id(),
            worker: Mutex::new(Some(handle)),
            pending,
            stopped: RwLock::new(false),
            forward_mode: ForwardMode::default(),
        })
    }

    /// Start a scheduler from a full crate configuration.
    pub fn from_config(config: &CollkitConfig) -> CollResult<Self> {
        Ok(Self::new(&config.scheduler)?.with_forward_mode(config.compat.delay_forwarding))
    }

    pub fn with_forward_mode(mut self, mode: ForwardMode) -> Self {
        self.forward_mode = mode;
        self
    }

    pub fn forward_mode(&self) -> ForwardMode {
        self.forward_mode
    }

    /// The process-wide scheduler used by [`delay`], started on first use
    /// with default settings.
    pub fn global() -> CollResult<&'static Scheduler> {
        GLOBAL.get_or_try_init(|| Scheduler::new(&SchedulerConfig::default()))
    }

    /// Install the process-wide scheduler from `config`.
    ///
    /// Returns `false` when a global scheduler is already running; its
    /// settings are left unchanged.
    pub fn init_global(config: &CollkitConfig) -> CollResult<bool> {
        if GLOBAL.get().is_some() {
            return Ok(false);
        }
        let scheduler = Scheduler::from_config(config)?;
        Ok(GLOBAL.set(scheduler).is_ok())
    }

    /// Run `job` on the worker once `wait` has elapsed.
    pub fn schedule<F>(&self, wait: Duration, job: F) -> CollResult<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let stopped = self.stopped.read();
        if *stopped {
            return Err(CollError::SchedulerStopped);
        }
        let deadline = Instant::now() + wait;
        self.pending.fetch_add(1, Ordering::AcqRel);
        let command = Command::Schedule {
            deadline,
            job: Box::new(job),
        };
        if self.sender.send(command).is_err() {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            return Err(CollError::SchedulerStopped);
        }
        Ok(())
    }

    /// Call `func(args)` once `wait` has elapsed.
    ///
    /// Under [`ForwardMode::Legacy`] the callback receives an empty vector.
    /// No cancellation handle is returned.
    pub fn delay<T, F>(&self, func: F, wait: Duration, args: Vec<T>) -> CollResult<()>
    where
        T: Send + 'static,
        F: FnOnce(Vec<T>) + Send + 'static,
    {
        let args = match self.forward_mode {
            ForwardMode::Corrected => args,
            ForwardMode::Legacy => {
                tracing::trace!(dropped = args.len(), "delay: legacy forwarding drops arguments");
                Vec::new()
            }
        };
        self.schedule(wait, move || func(args))
    }

    /// Callbacks scheduled but not yet run.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    pub fn is_stopped(&self) -> bool {
        *self.stopped.read()
    }

    /// Stop the worker. Callbacks that have not fired are discarded.
    pub fn shutdown(&self) {
        {
            let mut stopped = self.stopped.write();
            if *stopped {
                return;
            }
            *stopped = true;
            let _ = self.sender.send(Command::Shutdown);
        }

        // A job that drops its own scheduler must not join itself.
        if thread::current().id() == self.worker_id {
            return;
        }
        if let Some(handle) = self.worker.lock().take() {
            if handle.join().is_err() {
                tracing::warn!("scheduler worker panicked");
            }
        }
        tracing::debug!("scheduler stopped");
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Schedule `func(args)` on the process-wide scheduler after `wait`.
///
/// ```
/// use std::time::Duration;
///
/// let (tx, rx) = crossbeam_channel::bounded(1);
/// collkit::delay(move |args: Vec<&str>| tx.send(args.join(",")).unwrap(),
///                Duration::from_millis(5), vec!["a", "b"]).unwrap();
/// assert_eq!(rx.recv().unwrap(), "a,b");
/// ```
pub fn delay<T, F>(func: F, wait: Duration, args: Vec<T>) -> CollResult<()>
where
    T: Send + 'static,
    F: FnOnce(Vec<T>) + Send + 'static,
{
    Scheduler::global()?.delay(func, wait, args)
}

fn run_worker(receiver: Receiver<Command>, idle_poll: Duration, pending: Arc<AtomicUsize>) {
    let mut queue: TimerQueue<Job> = TimerQueue::new();

    loop {
        let now = Instant::now();
        for job in queue.pop_expired(now) {
            run_job(job);
            pending.fetch_sub(1, Ordering::AcqRel);
        }

        let wait = queue.timeout_until_next(now).unwrap_or(idle_poll);
        match receiver.recv_timeout(wait) {
            Ok(Command::Schedule { deadline, job }) => {
                queue.insert(deadline, job);
            }
            Err(RecvTimeoutError::Timeout) => {}
            Ok(Command::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    let dropped = queue.clear();
    pending.fetch_sub(dropped, Ordering::AcqRel);
    // Jobs still in flight on the channel are dropped with the receiver.
    let in_channel = receiver.try_iter().count();
    pending.fetch_sub(in_channel, Ordering::AcqRel);
    if dropped + in_channel > 0 {
        tracing::debug!(dropped = dropped + in_channel, "scheduler discarded pending callbacks");
    }
}

fn run_job(job: Job) {
    if std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)).is_err() {
        tracing::warn!("delayed callback panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    fn scheduler() -> Scheduler {
        Scheduler::new(&SchedulerConfig::default()).unwrap()
    }

    #[test]
    fn test_delay_forwards_arguments() {
        let sched = scheduler();
        let (tx, rx) = bounded(1);
        sched
            .delay(
                move |args: Vec<i32>| tx.send(args).unwrap(),
                Duration::from_millis(5),
                vec![1, 2],
            )
            .unwrap();
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_legacy_forwarding_drops_arguments() {
        let sched = scheduler().with_forward_mode(ForwardMode::Legacy);
        let (tx, rx) = bounded(1);
        sched
            .delay(
                move |args: Vec<&str>| tx.send(args.len()).unwrap(),
                Duration::ZERO,
                vec!["a", "b"],
            )
            .unwrap();
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), 0);
    }

    #[test]
    fn test_schedule_after_shutdown_fails() {
        let sched = scheduler();
        sched.shutdown();
        assert!(sched.is_stopped());
        assert!(matches!(
            sched.schedule(Duration::ZERO, || {}),
            Err(CollError::SchedulerStopped)
        ));
    }

    #[test]
    fn test_shutdown_discards_pending() {
        let sched = scheduler();
        sched.schedule(Duration::from_secs(60), || {}).unwrap();
        assert_eq!(sched.pending(), 1);
        sched.shutdown();
        assert_eq!(sched.pending(), 0);
    }
}
