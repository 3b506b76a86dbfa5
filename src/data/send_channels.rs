use crate::common::{VioImage, ViolationResult};

/// Receiving side held by a violation worker.
#[derive(Debug)]
pub struct WorkerState {
    pub img_rx: crossbeam_channel::Receiver<Box<VioImage>>,
    pub res_tx: crossbeam_channel::Sender<Box<ViolationResult>>,
}

/// Submitting side held by the caller.
#[derive(Debug)]
pub struct SubmitState {
    pub img_tx: crossbeam_channel::Sender<Box<VioImage>>,
    pub res_rx: crossbeam_channel::Receiver<Box<ViolationResult>>,
}

/// Creates the connected handle pair for one worker.
pub fn worker_channels() -> (SubmitState, WorkerState) {
    let (img_tx, img_rx) = crossbeam_channel::unbounded();
    let (res_tx, res_rx) = crossbeam_channel::unbounded();
    (SubmitState { img_tx, res_rx }, WorkerState { img_rx, res_tx })
}
