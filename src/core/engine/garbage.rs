use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

/// Things that know how to dispose of themselves by going down a
/// garbage chute instead of being dropped in place.
pub(crate) trait Garbage {
    fn toss(self, chute: &GarbageChute);
}

pub trait Droppable: Send {}

impl<T: Send> Droppable for T {}

/// The sending half of the disposal channel. Lives on the audio thread,
/// where dropping anything that owns heap memory would violate the
/// real-time deadline.
pub(crate) struct GarbageChute {
    sender: SyncSender<Box<dyn Droppable>>,
}

impl GarbageChute {
    pub(crate) fn send_box(&self, item: Box<dyn Droppable>) {
        self.sender.send(item).unwrap();
    }
}

/// The receiving half of the disposal channel. Needs to be emptied
/// periodically from the control thread while scene changes are being
/// made, so that stale render nodes actually get deallocated.
pub struct GarbageDisposer {
    receiver: Receiver<Box<dyn Droppable>>,
}

impl GarbageDisposer {
    pub fn clear(&self) {
        while let Ok(item) = self.receiver.try_recv() {
            std::mem::drop(item);
        }
    }
}

pub(crate) fn new_garbage_disposer() -> (GarbageChute, GarbageDisposer) {
    let bound = 1024;
    let (sender, receiver) = sync_channel(bound);
    let chute = GarbageChute { sender };
    let disposer = GarbageDisposer { receiver };
    (chute, disposer)
}
