/// In-memory byte pipes for E2E testing
/// Carry commands and responses between a Client and a RenderHost without
/// any I/O

use std::{
    collections::VecDeque,
    io::{self, Write},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// One direction of a connection. Clones share the same queue: the writer
/// half is handed to a Client or RenderHost, the other is drained by the
/// test.
#[derive(Clone, Default)]
pub struct LocalPipe {
    queue: Arc<Mutex<VecDeque<u8>>>,
}

impl LocalPipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns up to `max` bytes from the front.
    pub fn take(&self, max: usize) -> Vec<u8> {
        let mut queue = self.lock();
        let count = max.min(queue.len());
        queue.drain(..count).collect()
    }

    pub fn take_all(&self) -> Vec<u8> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<u8>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for LocalPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Pair of pipes forming one client/renderer connection
#[derive(Clone, Default)]
pub struct LocalPipePair {
    /// Commands written by the client
    pub client_to_server: LocalPipe,
    /// Responses written by the render host
    pub server_to_client: LocalPipe,
}

impl LocalPipePair {
    pub fn new() -> Self {
        Self::default()
    }
}
