//! Time-ordered done-log identifiers.
//!
//! Identifiers are UUIDv7 values rendered as 26 Crockford base32 characters,
//! the textual form of a ULID. The leading 48 bits carry the clock's
//! millisecond timestamp, so identifiers sort by creation time.

use crate::donelog::{
    domain::{DONE_LOG_ID_LENGTH, DoneLogId},
    ports::{DoneLogIdGenerator, IdGenerationError},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use uuid::{NoContext, Timestamp, Uuid};

const CROCKFORD_ALPHABET: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J',
    'K', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z',
];

/// Raised when the clock reports a time before the Unix epoch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("clock reads {0}, before the Unix epoch")]
pub struct ClockBeforeEpoch(pub DateTime<Utc>);

/// Generates ULID-shaped done-log identifiers from an injected clock.
#[derive(Debug, Clone)]
pub struct UlidIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> UlidIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    fn next_uuid(&self) -> Result<Uuid, ClockBeforeEpoch> {
        let now = self.clock.utc();
        let seconds = u64::try_from(now.timestamp()).map_err(|_| ClockBeforeEpoch(now))?;
        let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());
        Ok(Uuid::new_v7(timestamp))
    }
}

#[async_trait]
impl<C> DoneLogIdGenerator for UlidIdGenerator<C>
where
    C: Clock + Send + Sync,
{
    async fn new_done_log_id(&self) -> Result<DoneLogId, IdGenerationError> {
        let uuid = self.next_uuid().map_err(IdGenerationError::generation)?;
        DoneLogId::new(encode_crockford(uuid.as_u128())).map_err(IdGenerationError::generation)
    }
}

/// Renders 128 bits as 26 Crockford base32 digits, most significant first.
fn encode_crockford(value: u128) -> String {
    (0..DONE_LOG_ID_LENGTH)
        .rev()
        .filter_map(|position| {
            let index = value.checked_shr(u32::try_from(position * 5).ok()?)? & 0x1F;
            CROCKFORD_ALPHABET.get(usize::try_from(index).ok()?).copied()
        })
        .collect()
}
