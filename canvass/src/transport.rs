use crate::Record;

/// Trait for transports that deliver a submission record to the external
/// collection endpoint.
///
/// A transport receives the fully assembled [`Record`] and either delivers
/// it or fails as a unit; there is no partial submission. The wizard treats
/// any error as "submission failed", keeps all accumulated state, and
/// allows a full retry.
pub trait Transport {
    /// The error type for this transport.
    type Error: Into<anyhow::Error>;

    /// Deliver a submission record.
    ///
    /// Blocks until the delivery is resolved; the wizard issues no further
    /// submissions while a delivery is in flight.
    fn submit(&self, record: &Record) -> Result<(), Self::Error>;
}
