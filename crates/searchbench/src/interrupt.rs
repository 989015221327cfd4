//! Operator interrupts.
//!
//! An [`InterruptController`] owns a [`CancellationToken`] that the driver
//! polls at its checkpoints. Armed with the Ctrl-C source, a listener thread
//! additionally terminates the process on the signal, even while the main
//! thread is blocked inside an engine call or the operator pause.

use std::io;
use std::process;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use tracing::{info, warn};

use crate::error::{DriverError, Result};

/// Process exit status after an operator interrupt.
pub const EXIT_CANCELLED: i32 = 130;

/// Shared cancellation flag.
///
/// Clones observe the same flag. Once set it is never cleared.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Lifecycle of an [`InterruptController`].
///
/// Transitions only move forward: `Disarmed → Armed → Cancelling → Terminated`.
/// A cancellation requested before arming skips `Armed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptState {
    Disarmed,
    Armed,
    Cancelling,
    Terminated,
}

impl InterruptState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => InterruptState::Disarmed,
            1 => InterruptState::Armed,
            2 => InterruptState::Cancelling,
            _ => InterruptState::Terminated,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            InterruptState::Disarmed => 0,
            InterruptState::Armed => 1,
            InterruptState::Cancelling => 2,
            InterruptState::Terminated => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalSource {
    CtrlC,
    Manual,
}

/// Installs the cancellation handler and answers the driver's checkpoints.
///
/// Cloning yields a handle to the same controller, so a clone can be handed to
/// whatever requests cancellation.
///
/// ```
/// use searchbench::{InterruptController, InterruptState};
///
/// let interrupt = InterruptController::manual();
/// interrupt.arm().unwrap();
/// assert_eq!(interrupt.state(), InterruptState::Armed);
///
/// interrupt.request_cancel();
/// assert!(interrupt.checkpoint().is_err());
/// assert_eq!(interrupt.state(), InterruptState::Terminated);
/// ```
#[derive(Debug, Clone)]
pub struct InterruptController {
    source: SignalSource,
    token: CancellationToken,
    state: Arc<AtomicU8>,
}

impl InterruptController {
    /// Controller that listens for Ctrl-C once armed.
    pub fn new() -> Self {
        Self::with_source(SignalSource::CtrlC)
    }

    /// Controller with no signal listener; cancellation only through
    /// [`request_cancel`](Self::request_cancel).
    pub fn manual() -> Self {
        Self::with_source(SignalSource::Manual)
    }

    fn with_source(source: SignalSource) -> Self {
        Self {
            source,
            token: CancellationToken::new(),
            state: Arc::new(AtomicU8::new(InterruptState::Disarmed.as_u8())),
        }
    }

    /// Installs the handler. Returns once it is listening; arming twice is a no-op.
    pub fn arm(&self) -> io::Result<()> {
        if !self.advance(InterruptState::Disarmed, InterruptState::Armed) {
            return Ok(());
        }
        if self.source == SignalSource::CtrlC {
            if let Err(e) = self.spawn_ctrl_c_listener() {
                self.advance(InterruptState::Armed, InterruptState::Disarmed);
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Marks the run as cancelling. The driver stops at its next checkpoint.
    pub fn request_cancel(&self) {
        if !self.advance(InterruptState::Armed, InterruptState::Cancelling) {
            self.advance(InterruptState::Disarmed, InterruptState::Cancelling);
        }
        self.token.cancel();
    }

    pub fn state(&self) -> InterruptState {
        InterruptState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Fails with [`DriverError::Cancelled`] once cancellation was requested.
    pub fn checkpoint(&self) -> Result<()> {
        if !self.token.is_cancelled() {
            return Ok(());
        }
        if self.advance(InterruptState::Cancelling, InterruptState::Terminated) {
            info!(event = "interrupted");
        }
        Err(DriverError::Cancelled)
    }

    fn advance(&self, from: InterruptState, to: InterruptState) -> bool {
        self.state
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn terminate(&self) -> ! {
        self.state
            .store(InterruptState::Cancelling.as_u8(), Ordering::SeqCst);
        self.token.cancel();
        info!(event = "interrupted");
        self.state
            .store(InterruptState::Terminated.as_u8(), Ordering::SeqCst);
        process::exit(EXIT_CANCELLED)
    }

    fn spawn_ctrl_c_listener(&self) -> io::Result<()> {
        let (ready_tx, ready_rx) = mpsc::channel::<io::Result<()>>();
        let controller = self.clone();

        thread::Builder::new()
            .name("searchbench-interrupt".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                runtime.block_on(async move {
                    let signal = tokio::signal::ctrl_c();
                    tokio::pin!(signal);

                    // The first poll of the signal future installs the handler.
                    tokio::select! {
                        biased;
                        result = &mut signal => match result {
                            Ok(()) => {
                                let _ = ready_tx.send(Ok(()));
                                controller.terminate()
                            }
                            Err(e) => {
                                let _ = ready_tx.send(Err(e));
                                return;
                            }
                        },
                        () = std::future::ready(()) => {
                            let _ = ready_tx.send(Ok(()));
                        }
                    }

                    match signal.await {
                        Ok(()) => controller.terminate(),
                        Err(e) => warn!(error = %e, "interrupt listener stopped"),
                    }
                });
            })?;

        ready_rx.recv().map_err(|_| {
            io::Error::new(
                io::ErrorKind::Other,
                "interrupt listener exited before it was installed",
            )
        })?
    }
}

impl Default for InterruptController {
    fn default() -> Self {
        Self::new()
    }
}
