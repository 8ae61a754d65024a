//! Background surface generation.
//!
//! Synthesis is a one-shot CPU job; it runs on a named thread and hands the
//! finished maps back over a bounded channel so the frame loop can poll for
//! them without blocking.

use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, TryRecvError, bounded};

use crate::error::SurfaceError;
use crate::generator::{SurfaceMaps, SurfaceParams, generate_with_params};

type Delivery = Result<SurfaceMaps, SurfaceError>;

/// Handle to a surface generation job running on its own thread.
pub struct SurfaceWorker {
    receiver: Receiver<Delivery>,
    handle: Option<JoinHandle<()>>,
    delivered: bool,
}

impl SurfaceWorker {
    /// Start generating on a background thread.
    pub fn spawn(
        seed: u64,
        width: u32,
        height: u32,
        params: SurfaceParams,
    ) -> Result<Self, SurfaceError> {
        let (sender, receiver) = bounded::<Delivery>(1);
        let handle = std::thread::Builder::new()
            .name("surface-gen-worker".into())
            .spawn(move || {
                let result = generate_with_params(seed, width, height, &params);
                if sender.send(result).is_err() {
                    tracing::debug!("Surface worker result dropped; receiver gone");
                }
            })
            .map_err(SurfaceError::WorkerSpawn)?;

        tracing::debug!(seed, width, height, "Spawned surface worker");
        Ok(Self {
            receiver,
            handle: Some(handle),
            delivered: false,
        })
    }

    /// Non-blocking poll. Returns `None` while the job is still running and
    /// after the result has already been taken.
    pub fn try_take(&mut self) -> Option<Delivery> {
        if self.delivered {
            return None;
        }
        let delivery = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(SurfaceError::WorkerDisconnected),
        };
        self.finish();
        Some(delivery)
    }

    /// Block until the job finishes.
    pub fn wait(mut self) -> Delivery {
        if self.delivered {
            return Err(SurfaceError::WorkerDisconnected);
        }
        let delivery = self
            .receiver
            .recv()
            .unwrap_or(Err(SurfaceError::WorkerDisconnected));
        self.finish();
        delivery
    }

    /// Whether the result has been taken.
    pub fn is_finished(&self) -> bool {
        self.delivered
    }

    fn finish(&mut self) {
        self.delivered = true;
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("Surface worker thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_surface_maps;

    #[test]
    fn test_wait_matches_synchronous_generation() {
        let worker = SurfaceWorker::spawn(42, 32, 16, SurfaceParams::default()).unwrap();
        let maps = worker.wait().unwrap();
        assert_eq!(maps, generate_surface_maps(42, 32, 16).unwrap());
    }

    #[test]
    fn test_poll_until_ready() {
        let mut worker = SurfaceWorker::spawn(1, 16, 16, SurfaceParams::default()).unwrap();
        let maps = loop {
            if let Some(result) = worker.try_take() {
                break result.unwrap();
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        };
        assert_eq!(maps.dimensions(), (16, 16));
        assert!(worker.is_finished());
        assert!(worker.try_take().is_none());
    }

    #[test]
    fn test_generation_error_is_delivered() {
        let worker = SurfaceWorker::spawn(1, 0, 16, SurfaceParams::default()).unwrap();
        assert!(matches!(
            worker.wait(),
            Err(SurfaceError::InvalidDimensions { .. })
        ));
    }
}
