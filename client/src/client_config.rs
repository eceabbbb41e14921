use std::default::Default;

use crate::response::ResponseParserConfig;

/// Division level used when none is configured.
pub const DEFAULT_DIVISION_LEVEL: usize = 3;

/// Highest division level a Client accepts. Level 4 already means 256
/// requests per frame.
pub const MAX_CLIENT_DIVISION_LEVEL: usize = 4;

/// How render requests of a frame are issued
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPolicy {
    /// Send one request, and the next one when its reply is accepted
    #[default]
    OneAtATime,
    /// Send every request of the frame right after the resize
    AllUpFront,
}

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Refinement level of each frame, clamped to
    /// `0..=MAX_CLIENT_DIVISION_LEVEL`
    pub division_level: usize,
    /// Determines whether requests are pipelined or sent one by one
    pub request_policy: RequestPolicy,
    /// Used to configure the response parser
    pub response: ResponseParserConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            division_level: DEFAULT_DIVISION_LEVEL,
            request_policy: RequestPolicy::default(),
            response: ResponseParserConfig::default(),
        }
    }
}
