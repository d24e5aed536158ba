//! Stop requests for a running timer.
//!
//! A [`StopHandle`] and a [`StopToken`] share one watch channel. The handle
//! side is owned by whatever decides the timer should end, usually the
//! interrupt listener spawned by [`listen_for_interrupts`]. The token side is
//! owned by the timer, which marks the channel stopped when it finishes for
//! any reason, so the listener always knows whether the timer still runs.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::errors::UsageError;

pub fn stop_channel() -> (StopHandle, StopToken) {
    let (tx, rx) = watch::channel(false);
    let tx = Arc::new(tx);
    (StopHandle { tx: tx.clone() }, StopToken { tx, rx })
}

#[derive(Debug)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    /// Requests a stop. Returns `false` if the timer already stopped.
    pub fn stop(&self) -> bool {
        !self.tx.send_replace(true)
    }
}

#[derive(Debug, Clone)]
pub struct StopToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl StopToken {
    /// Resolves once a stop was requested. Never resolves if the handle was
    /// dropped without stopping.
    pub async fn stopped(&mut self) {
        // The token keeps a sender alive, so the channel never closes here.
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }

    pub fn is_stopped(&self) -> bool {
        *self.rx.borrow()
    }

    /// Marks the channel stopped, also when nobody asked for it.
    pub(crate) fn finish(&self) {
        self.tx.send_replace(true);
    }
}

/// Something that yields one item per interrupt and `None` once it is closed.
pub trait InterruptSource: Send + 'static {
    fn recv(&mut self) -> impl Future<Output = Option<()>> + Send;
}

/// SIGINT and SIGTERM of this process (Ctrl-C off unix).
#[derive(Debug)]
pub struct Interrupts {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
    #[cfg(not(unix))]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl Interrupts {
    /// Installs the handlers. From here on interrupts no longer kill the
    /// process by default.
    #[cfg(unix)]
    pub fn new() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }
}

impl InterruptSource for Interrupts {
    #[cfg(unix)]
    async fn recv(&mut self) -> Option<()> {
        tokio::select! {
            res = self.interrupt.recv() => res,
            res = self.terminate.recv() => res,
        }
    }

    #[cfg(not(unix))]
    async fn recv(&mut self) -> Option<()> {
        self.ctrl_c.recv().await
    }
}

impl InterruptSource for mpsc::UnboundedReceiver<()> {
    async fn recv(&mut self) -> Option<()> {
        mpsc::UnboundedReceiver::recv(self).await
    }
}

/// Spawns the task that turns interrupts of this process into stop requests.
///
/// The first SIGINT/SIGTERM stops the timer. One arriving after the timer
/// stopped means the user gave up on the prompts, the process exits with
/// code 1 and nothing is logged.
pub fn listen_for_interrupts(handle: StopHandle) -> std::io::Result<JoinHandle<()>> {
    let interrupts = Interrupts::new()?;
    Ok(spawn_listener(handle, interrupts, abort_process))
}

/// Runs `on_abort` on the first interrupt after the timer stopped.
pub fn spawn_listener<S, F>(handle: StopHandle, mut source: S, on_abort: F) -> JoinHandle<()>
where
    S: InterruptSource,
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        while source.recv().await.is_some() {
            if handle.stop() {
                log::debug!("Interrupt received, stopping timer");
            } else {
                log::debug!("Interrupt received after the timer stopped");
                on_abort();
                return;
            }
        }
    })
}

fn abort_process() {
    crossterm::execute!(std::io::stdout(), crossterm::cursor::Show).ok();
    println!();
    log::error!("{}", UsageError::Aborted);
    std::process::exit(1);
}
