use std::io::Write;

use log::trace;

use vision_shared::{Command, RenderRequest, ResizeRequest};

use crate::{error::SendError, schedule::Schedule};

/// Writes encoded commands to a transport, one whole line per command.
///
/// Every `send_*` call writes complete lines and flushes, so the peer never
/// waits on a partial command.
pub struct CommandStream<W: Write> {
    transport: W,
    line: Vec<u8>,
}

impl<W: Write> CommandStream<W> {
    pub fn new(transport: W) -> Self {
        Self {
            transport,
            line: Vec::new(),
        }
    }

    pub fn send(&mut self, command: &Command) -> Result<(), SendError> {
        self.line.clear();
        command.encode(&mut self.line)?;
        trace!("Sending {} command", command.kind_name());
        self.transport.write_all(&self.line)?;
        self.transport.flush()?;
        Ok(())
    }

    pub fn send_render_request(&mut self, request: &RenderRequest) -> Result<(), SendError> {
        self.send(&Command::Render(*request))
    }

    /// Sends every request of `schedule` that has not been consumed yet, in
    /// emission order, with a single flush.
    pub fn send_all_render_requests(&mut self, schedule: &Schedule) -> Result<(), SendError> {
        self.line.clear();
        for request in &schedule.requests()[schedule.consumed_requests()..] {
            Command::Render(*request).encode(&mut self.line)?;
        }
        trace!(
            "Sending {} render requests",
            schedule.remaining_requests()
        );
        self.transport.write_all(&self.line)?;
        self.transport.flush()?;
        Ok(())
    }

    pub fn send_resize(&mut self, request: &ResizeRequest) -> Result<(), SendError> {
        self.send(&Command::Resize(*request))
    }

    pub fn send_key(&mut self, name: &str, pressed: bool) -> Result<(), SendError> {
        self.send(&Command::key(name, pressed))
    }

    pub fn send_mouse_button(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
        pressed: bool,
    ) -> Result<(), SendError> {
        self.send(&Command::mouse_button(name, x, y, pressed))
    }

    pub fn send_mouse_move(&mut self, x: i32, y: i32) -> Result<(), SendError> {
        self.send(&Command::MouseMove { x, y })
    }

    pub fn send_quit(&mut self) -> Result<(), SendError> {
        self.send(&Command::Quit)
    }

    pub fn transport(&self) -> &W {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut W {
        &mut self.transport
    }

    pub fn into_transport(self) -> W {
        self.transport
    }
}
