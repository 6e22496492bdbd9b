//! Background pixelation.
//!
//! Large images take noticeable time to pixelate, so the work can run on a
//! dedicated thread while the caller keeps servicing its event loop. Jobs
//! carry the session generation they were started for; results that arrive
//! after another image was loaded are dropped by [`Session::apply_outcome`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use mosaic_core::PixelBuffer;
use mosaic_ops::PixelateOptions;
use tracing::{debug, trace};

use crate::session::{PixelateOutcome, Session};
use crate::{SessionError, SessionResult};

struct PixelateJob {
    generation: u64,
    source: Arc<PixelBuffer>,
    options: PixelateOptions,
}

enum WorkerMsg {
    Run(PixelateJob),
    Close,
}

/// Owns the pixelation thread and its channels.
pub struct PixelateWorker {
    tx: Sender<WorkerMsg>,
    rx: Receiver<PixelateOutcome>,
    worker: Option<JoinHandle<()>>,
    in_flight: bool,
}

impl PixelateWorker {
    /// Starts the worker thread.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Spawn`] if the OS refuses the thread.
    pub fn spawn() -> SessionResult<Self> {
        let (job_tx, job_rx) = mpsc::channel::<WorkerMsg>();
        let (out_tx, out_rx) = mpsc::channel::<PixelateOutcome>();

        let worker = thread::Builder::new()
            .name("mosaic-pixelate".into())
            .spawn(move || run(job_rx, out_tx))
            .map_err(SessionError::Spawn)?;

        Ok(Self {
            tx: job_tx,
            rx: out_rx,
            worker: Some(worker),
            in_flight: false,
        })
    }

    /// Queues a pixelation of the session's original.
    ///
    /// Returns the generation the job is tagged with.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Busy`] if a job has not been collected yet
    /// - [`SessionError::NoImage`] if nothing is loaded
    /// - [`SessionError::WorkerGone`] if the thread has exited
    pub fn submit(&mut self, session: &Session, options: PixelateOptions) -> SessionResult<u64> {
        if self.in_flight {
            return Err(SessionError::Busy);
        }
        let source = session.original_arc().ok_or(SessionError::NoImage)?;
        let generation = session.generation();
        self.tx
            .send(WorkerMsg::Run(PixelateJob {
                generation,
                source,
                options,
            }))
            .map_err(|_| SessionError::WorkerGone)?;
        self.in_flight = true;
        debug!(generation, cell_size = options.cell_size, "pixelation queued");
        Ok(generation)
    }

    /// Applies a finished job to `session` without blocking.
    ///
    /// `Ok(None)` means nothing has finished yet. `Ok(Some(applied))`
    /// reports whether the result was installed or discarded as stale.
    ///
    /// # Errors
    ///
    /// - [`SessionError::WorkerGone`] if the thread has exited
    /// - [`SessionError::Ops`] if the job failed
    pub fn poll(&mut self, session: &mut Session) -> SessionResult<Option<bool>> {
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.in_flight = false;
                session.apply_outcome(outcome).map(Some)
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.in_flight = false;
                Err(SessionError::WorkerGone)
            }
        }
    }

    /// Blocks until the pending job finishes and applies it.
    ///
    /// Returns `Ok(false)` immediately if nothing is pending.
    ///
    /// # Errors
    ///
    /// Same as [`PixelateWorker::poll`].
    pub fn wait(&mut self, session: &mut Session) -> SessionResult<bool> {
        if !self.in_flight {
            return Ok(false);
        }
        let outcome = self.rx.recv();
        self.in_flight = false;
        session.apply_outcome(outcome.map_err(|_| SessionError::WorkerGone)?)
    }

    /// Returns `true` while a submitted job has not been collected.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }
}

impl Drop for PixelateWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(WorkerMsg::Close);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn run(rx: Receiver<WorkerMsg>, tx: Sender<PixelateOutcome>) {
    while let Ok(msg) = rx.recv() {
        match msg {
            WorkerMsg::Close => break,
            WorkerMsg::Run(job) => {
                trace!(generation = job.generation, "pixelation started");
                let result = mosaic_ops::pixelate_with(&job.source, &job.options);
                let outcome = PixelateOutcome {
                    generation: job.generation,
                    options: job.options,
                    result,
                };
                if tx.send(outcome).is_err() {
                    break;
                }
            }
        }
    }
    debug!("pixelation worker shutdown");
}
