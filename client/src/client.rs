use std::io::Write;

use log::{debug, info, warn};

use vision_shared::RequestIdGenerator;

use crate::{
    client_config::{ClientConfig, RequestPolicy, MAX_CLIENT_DIVISION_LEVEL},
    command_stream::CommandStream,
    error::ClientError,
    events::ClientEvent,
    frame::{FrameBuilder, ReplyError},
    response::{ResponseEvent, ResponseEvents, ResponseParser, RgbBuffer},
    schedule::Schedule,
};

/// Drives progressive frames over one connection to a renderer.
///
/// Commands go out through the transport handed to [`Client::new`].
/// Bytes received from the renderer are fed to [`Client::receive`], which
/// decodes them, assembles the current frame and issues follow-up requests.
pub struct Client<W: Write> {
    config: ClientConfig,
    commands: CommandStream<W>,
    parser: ResponseParser<ResponseEvents>,
    request_ids: RequestIdGenerator,
    frame: Option<FrameBuilder>,
    closed: bool,
}

impl<W: Write> Client<W> {
    /// Create a new Client
    pub fn new(mut config: ClientConfig, transport: W) -> Self {
        config.division_level = config.division_level.min(MAX_CLIENT_DIVISION_LEVEL);
        let parser = ResponseParser::with_config(config.response.clone(), ResponseEvents::new());

        Self {
            config,
            commands: CommandStream::new(transport),
            parser,
            request_ids: RequestIdGenerator::new(),
            frame: None,
            closed: false,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn division_level(&self) -> usize {
        self.config.division_level
    }

    /// Starts a new frame of the given size, discarding the current one.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), ClientError> {
        self.ensure_open()?;

        let schedule = Schedule::with_id_generator(
            width,
            height,
            self.config.division_level,
            &mut self.request_ids,
        );

        info!(
            "New frame {}x{} at division level {} ({} requests)",
            width,
            height,
            schedule.division_level(),
            schedule.request_count()
        );

        self.commands.send_resize(&schedule.resize_request())?;

        if schedule.current_request().is_valid() {
            match self.config.request_policy {
                RequestPolicy::OneAtATime => self
                    .commands
                    .send_render_request(&schedule.current_request())?,
                RequestPolicy::AllUpFront => self.commands.send_all_render_requests(&schedule)?,
            }
        }

        self.frame = Some(FrameBuilder::new(schedule));
        Ok(())
    }

    /// Changes the refinement level. The current frame, if any, is rebuilt
    /// at the new level.
    pub fn set_division_level(&mut self, division_level: usize) -> Result<(), ClientError> {
        let division_level = division_level.min(MAX_CLIENT_DIVISION_LEVEL);
        if division_level == self.config.division_level {
            return Ok(());
        }
        self.config.division_level = division_level;

        let size = self
            .frame
            .as_ref()
            .map(|frame| (frame.schedule().frame_width(), frame.schedule().frame_height()));

        match size {
            Some((width, height)) => self.resize(width, height),
            None => Ok(()),
        }
    }

    /// Feeds bytes received from the renderer and returns what happened, in
    /// order.
    ///
    /// Rejected replies are reported and skipped. An invalid response or a
    /// buffer overflow is reported as a fatal event: the stream is
    /// desynchronized and the caller should reconnect. A follow-up request
    /// that cannot be written is reported as `SendFailed` and can be retried
    /// with [`resend_current_request`](Client::resend_current_request).
    pub fn receive(&mut self, bytes: &[u8]) -> Vec<ClientEvent> {
        if let Err(error) = self.parser.write(bytes) {
            debug!("Response stream stopped: {}", error);
        }

        let decoded: Vec<ResponseEvent> = self.parser.observer_mut().drain().collect();
        let mut events = Vec::with_capacity(decoded.len());

        for event in decoded {
            match event {
                ResponseEvent::RgbBuffer(buffer) => self.accept(buffer, &mut events),
                ResponseEvent::InvalidResponse(reason) => {
                    events.push(ClientEvent::InvalidResponse(reason))
                }
                ResponseEvent::BufferOverflow => events.push(ClientEvent::BufferOverflow),
            }
        }

        events
    }

    fn accept(&mut self, buffer: RgbBuffer, events: &mut Vec<ClientEvent>) {
        let Some(frame) = self.frame.as_mut() else {
            warn!("Reply to request {} arrived before any frame", buffer.request_id);
            events.push(ClientEvent::ReplyRejected(ReplyError::NoPendingRequest {
                request_id: buffer.request_id,
            }));
            return;
        };

        let outcome = match frame.accept_reply(
            buffer.width,
            buffer.height,
            buffer.request_id,
            &buffer.data,
        ) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!("Rejected reply: {}", error);
                events.push(ClientEvent::ReplyRejected(error));
                return;
            }
        };

        events.push(ClientEvent::TileAccepted {
            request_id: buffer.request_id,
        });

        if outcome.preview_changed {
            events.push(ClientEvent::PreviewChanged {
                level: frame.schedule().preview_level(),
            });
        }

        if outcome.complete {
            info!(
                "Frame {}x{} complete",
                frame.schedule().frame_width(),
                frame.schedule().frame_height()
            );
            events.push(ClientEvent::FrameComplete);
        } else if self.config.request_policy == RequestPolicy::OneAtATime && !self.closed {
            let request = frame.schedule().current_request();
            if let Err(error) = self.commands.send_render_request(&request) {
                warn!("Could not send render request {}: {}", request.id, error);
                events.push(ClientEvent::SendFailed {
                    request_id: request.id,
                    reason: error.to_string(),
                });
            }
        }
    }

    /// Sends the request the current frame is waiting on, if any. Used after
    /// a `SendFailed` event once the transport has recovered.
    pub fn resend_current_request(&mut self) -> Result<(), ClientError> {
        self.ensure_open()?;

        if let Some(request) = self
            .frame
            .as_ref()
            .map(|frame| frame.schedule().current_request())
            .filter(|request| request.is_valid())
        {
            self.commands.send_render_request(&request)?;
        }
        Ok(())
    }

    pub fn send_key(&mut self, name: &str, pressed: bool) -> Result<(), ClientError> {
        self.ensure_open()?;
        self.commands.send_key(name, pressed)?;
        Ok(())
    }

    pub fn send_mouse_button(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
        pressed: bool,
    ) -> Result<(), ClientError> {
        self.ensure_open()?;
        self.commands.send_mouse_button(name, x, y, pressed)?;
        Ok(())
    }

    pub fn send_mouse_move(&mut self, x: i32, y: i32) -> Result<(), ClientError> {
        self.ensure_open()?;
        self.commands.send_mouse_move(x, y)?;
        Ok(())
    }

    /// Asks the renderer to exit. No further commands are sent afterwards.
    pub fn quit(&mut self) -> Result<(), ClientError> {
        self.ensure_open()?;
        self.commands.send_quit()?;
        self.closed = true;
        info!("Sent quit");
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn frame(&self) -> Option<&FrameBuilder> {
        self.frame.as_ref()
    }

    /// Bytes received but not yet decoded.
    pub fn buffered_len(&self) -> usize {
        self.parser.buffered_len()
    }

    pub fn transport(&self) -> &W {
        self.commands.transport()
    }

    pub fn transport_mut(&mut self) -> &mut W {
        self.commands.transport_mut()
    }

    pub fn into_transport(self) -> W {
        self.commands.into_transport()
    }

    fn ensure_open(&self) -> Result<(), ClientError> {
        if self.closed {
            return Err(ClientError::Closed);
        }
        Ok(())
    }
}
