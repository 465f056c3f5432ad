use thiserror::Error;

use crate::prelude::Constellation;

/// Reasons for which one message is skipped.
/// None of these are fatal to a stream: [Decoder::process](crate::prelude::Decoder::process)
/// absorbs them all, [Decoder::decode](crate::prelude::Decoder::decode) reports them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Message type we do not decode. Not an anomaly on live streams.
    #[error("unhandled message type \"{0}\"")]
    UnknownMessage(String),

    /// MSM for a constellation that is not part of the enabled target set.
    #[error("{0} is not enabled")]
    DisabledConstellation(Constellation),

    /// A field this message type requires is not present.
    /// Nothing gets cached nor emitted.
    #[error("missing field {0}")]
    MissingField(String),

    /// A field holds a value that cannot be used.
    #[error("invalid value for field {0}")]
    InvalidField(String),

    /// Satellite number out of the 1..=63 range.
    #[error("invalid satellite number {0}")]
    InvalidSatelliteNumber(i64),

    /// MSM without a single signal cell.
    #[error("no signal cells")]
    NoCells,
}
