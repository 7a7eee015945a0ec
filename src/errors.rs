use crate::protocol::Stage;
use thiserror::Error;

/// The library's error type
#[derive(Error, Debug)]
pub enum JpakeError {
    /// Error for when an operation is invoked from the wrong protocol stage.
    /// The session state is unchanged.
    #[error("operation not permitted in stage {actual:?} (expected {expected:?})")]
    StageMismatch {
        /// The stage the operation requires
        expected: Stage,
        /// The stage the session is actually in
        actual: Stage,
    },
    /// Error for when a received message fails validation. Deliberately opaque:
    /// the cause (identity point, failed proof, reflected identifier, ...) is
    /// not reported to avoid acting as an oracle for an active attacker.
    #[error("could not verify the validity of the received message")]
    InvalidMessage,
    /// Error for when a key-confirmation tag does not match. The session key is
    /// retained so the peer may retry delivery, but the stage does not advance.
    #[error("cannot confirm session")]
    ConfirmationMismatch,
    /// Error for when a user identifier is empty
    #[error("user identifier must be nonempty")]
    InvalidUserId,
    /// Error for when a persisted field set handed to the restore constructor
    /// is incomplete or inconsistent with its recorded stage
    #[error("persisted session state is incomplete or inconsistent")]
    InvalidSessionState,
    /// Error for when a scalar is zero where forbidden, or not canonical
    #[error("scalar is zero or not in canonical form")]
    InvalidScalar,
    /// Error for when a point encoding is malformed, or a point is the
    /// identity element where forbidden
    #[error("point is malformed or the identity element")]
    InvalidPoint,
    /// Error for when the caller-supplied random number generator fails
    #[error(transparent)]
    Rng(#[from] rand_core::Error),
    /// Error for when a MAC key has an invalid length
    #[error(transparent)]
    Mac(#[from] hmac::digest::InvalidLength),
}
