use std::io::{ErrorKind, Read, Write};

use log::{debug, info, warn};

use vision_shared::{Command, RenderRequest, Vec2};

use crate::{
    command_decoder::CommandDecoder, error::HostError, host::server_config::ServerConfig,
    renderer::Renderer, response_writer::ResponseWriter,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostStatus {
    /// More commands are expected
    Running,
    /// The client sent `q`
    Quit,
}

/// Serves one client: decodes its commands, hands them to a [`Renderer`]
/// and writes a response for every render request.
pub struct RenderHost<R: Renderer, W: Write> {
    config: ServerConfig,
    renderer: R,
    decoder: CommandDecoder,
    writer: ResponseWriter<W>,
    frame_size: Option<Vec2>,
    pixels: Vec<u8>,
}

impl<R: Renderer, W: Write> RenderHost<R, W> {
    pub fn new(config: ServerConfig, renderer: R, output: W) -> Self {
        let decoder = CommandDecoder::new(config.max_command_buffer_size);
        Self {
            config,
            renderer,
            decoder,
            writer: ResponseWriter::new(output),
            frame_size: None,
            pixels: Vec::new(),
        }
    }

    /// Feeds command bytes and executes every complete command.
    ///
    /// Malformed lines are logged and skipped. Commands after a quit are
    /// left unprocessed. An overlong unterminated line is reported after the
    /// complete lines before it have run.
    pub fn receive(&mut self, bytes: &[u8]) -> Result<HostStatus, HostError> {
        let written = self.decoder.write(bytes);

        while let Some(result) = self.decoder.next_command() {
            match result {
                Ok(command) => {
                    if self.execute(command)? == HostStatus::Quit {
                        return Ok(HostStatus::Quit);
                    }
                }
                Err(error) => warn!("Ignoring malformed command: {}", error),
            }
        }

        written?;
        Ok(HostStatus::Running)
    }

    /// Reads commands until the client quits or the reader reaches end of
    /// input, in which case `Running` is returned.
    pub fn serve<Rd: Read>(&mut self, mut reader: Rd) -> Result<HostStatus, HostError> {
        let mut chunk = vec![0u8; self.config.read_chunk_size.max(1)];

        loop {
            let read = match reader.read(&mut chunk) {
                Ok(0) => {
                    info!("Command stream closed");
                    return Ok(HostStatus::Running);
                }
                Ok(read) => read,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };

            if self.receive(&chunk[..read])? == HostStatus::Quit {
                return Ok(HostStatus::Quit);
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<HostStatus, HostError> {
        match command {
            Command::Render(request) => self.render(request)?,
            Command::Resize(request) => {
                debug!("Resize to {}x{}", request.width, request.height);
                self.frame_size = Some(Vec2::new(request.width, request.height));
                self.renderer.resize(&request);
            }
            Command::Key { name, pressed } => self.renderer.key(&name, pressed),
            Command::MouseButton {
                name,
                x,
                y,
                pressed,
            } => self.renderer.mouse_button(&name, x, y, pressed),
            Command::MouseMove { x, y } => self.renderer.mouse_move(x, y),
            Command::Quit => {
                info!("Client quit");
                return Ok(HostStatus::Quit);
            }
        }
        Ok(HostStatus::Running)
    }

    fn render(&mut self, mut request: RenderRequest) -> Result<(), HostError> {
        // A render line carries no frame size; without a prior resize the
        // tile's own extent stands in for it.
        request.frame_size = self.frame_size.unwrap_or_else(|| tile_extent(&request));

        let payload_size = request.payload_size();
        if payload_size > self.config.max_payload_size {
            warn!(
                "Dropping render request {}: {} byte payload exceeds {}",
                request.id, payload_size, self.config.max_payload_size
            );
            return Ok(());
        }

        self.pixels.clear();
        self.pixels.resize(payload_size, 0);
        self.renderer.render(&request, &mut self.pixels);

        self.writer.write_rgb_buffer(
            request.id,
            request.pixel_count.x,
            request.pixel_count.y,
            &self.pixels,
        )?;
        Ok(())
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn output(&self) -> &W {
        self.writer.output()
    }

    pub fn output_mut(&mut self) -> &mut W {
        self.writer.output_mut()
    }

    pub fn into_parts(self) -> (R, W) {
        (self.renderer, self.writer.into_output())
    }
}

fn tile_extent(request: &RenderRequest) -> Vec2 {
    let extent = |offset: usize, count: usize, stride: usize| {
        offset.saturating_add(count.saturating_mul(stride.max(1)))
    };
    Vec2::new(
        extent(
            request.pixel_offset.x,
            request.pixel_count.x,
            request.pixel_stride.x,
        ),
        extent(
            request.pixel_offset.y,
            request.pixel_count.y,
            request.pixel_stride.y,
        ),
    )
}
