#![forbid(unsafe_code)]

//! Signal-to-flag bridge.
//!
//! OS signals are translated into a small set of independently settable
//! atomic flags plus a wakeup, and nothing else: no rendering, no
//! allocation, no terminal writes happen on the signal path. The updater
//! loop reads-and-clears the flags once per tick and dispatches. A
//! dedicated bridge thread (signal-hook's iterator API) performs the flag
//! stores, so the async-signal-safe surface is signal-hook's own handler.

use std::io;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use signal_hook::consts::signal::{SIGCHLD, SIGHUP, SIGINT, SIGTERM, SIGWINCH};
use signal_hook::iterator::Signals;

/// Flag set shared between the bridge thread and the updater loop.
///
/// Writers only set; the updater is the only reader and clears each flag
/// as it observes it. No ordering is assumed between flags.
#[derive(Debug, Default)]
pub struct SignalFlags {
    interrupt_requested: AtomicBool,
    resize_pending: AtomicBool,
    child_exited: AtomicBool,
    interrupt_signal: AtomicI32,
}

impl SignalFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interrupt/terminate/disconnect signal.
    pub fn raise_interrupt(&self, signal: i32) {
        self.interrupt_signal.store(signal, Ordering::Relaxed);
        self.interrupt_requested.store(true, Ordering::SeqCst);
    }

    pub fn raise_resize(&self) {
        self.resize_pending.store(true, Ordering::SeqCst);
    }

    pub fn raise_child_exited(&self) {
        self.child_exited.store(true, Ordering::SeqCst);
    }

    /// Observe-and-clear the interrupt flag.
    pub fn take_interrupt(&self) -> bool {
        self.interrupt_requested.swap(false, Ordering::SeqCst)
    }

    /// Observe-and-clear the resize flag.
    pub fn take_resize(&self) -> bool {
        self.resize_pending.swap(false, Ordering::SeqCst)
    }

    /// Observe-and-clear the child-exited flag.
    pub fn take_child_exited(&self) -> bool {
        self.child_exited.swap(false, Ordering::SeqCst)
    }

    /// The signal number behind the most recent interrupt, if any.
    pub fn interrupt_signal(&self) -> i32 {
        self.interrupt_signal.load(Ordering::Relaxed)
    }
}

/// Wakes the updater loop out of its between-tick sleep.
#[derive(Debug, Default)]
pub struct Waker {
    lock: Mutex<bool>,
    condvar: Condvar,
}

impl Waker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wake a sleeping updater immediately.
    pub fn notify(&self) {
        if let Ok(mut woken) = self.lock.lock() {
            *woken = true;
            self.condvar.notify_all();
        }
    }

    /// Sleep until `timeout` elapses or [`Waker::notify`] is called,
    /// whichever comes first. A notification that arrived before the wait
    /// is not lost.
    pub fn wait_timeout(&self, timeout: Duration) {
        let Ok(mut woken) = self.lock.lock() else {
            return;
        };
        if !*woken {
            let result = self
                .condvar
                .wait_timeout_while(woken, timeout, |woken| !*woken);
            match result {
                Ok((guard, _)) => woken = guard,
                Err(_) => return,
            }
        }
        *woken = false;
    }
}

/// Owns the bridge thread translating signals into flags.
///
/// Dropping the bridge closes the signal stream and joins the thread.
#[derive(Debug)]
pub struct SignalBridge {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl SignalBridge {
    /// Register for interrupt, terminate, hangup, resize, and child-status
    /// signals. Fails fatally if registration is refused.
    pub fn install(flags: Arc<SignalFlags>, waker: Arc<Waker>) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP, SIGWINCH, SIGCHLD])?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                match signal {
                    SIGWINCH => flags.raise_resize(),
                    SIGCHLD => flags.raise_child_exited(),
                    // Terminal disconnect is treated as an interrupt.
                    SIGINT | SIGTERM | SIGHUP => flags.raise_interrupt(signal),
                    _ => continue,
                }
                waker.notify();
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

impl Drop for SignalBridge {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
