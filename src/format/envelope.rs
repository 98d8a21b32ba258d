use chrono::{DateTime, Utc};

/// Correlation metadata shared by every exchange: the frame's unique id,
/// the charge point identity it targets or originates from, the creation
/// time, and an optional cross-system tracing token.
///
/// The message id is a wire artifact: it is fixed at construction and does
/// not take part in equality.
#[derive(Debug, Clone)]
pub struct MessageHeader {
    message_id: String,
    pub station_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_tracking_id: Option<String>,
}

impl MessageHeader {
    /// Timestamp defaults to now; override with [`with_timestamp`](Self::with_timestamp).
    pub fn new(message_id: impl Into<String>, station_id: impl Into<String>) -> Self {
        MessageHeader {
            message_id: message_id.into(),
            station_id: station_id.into(),
            timestamp: Utc::now(),
            event_tracking_id: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_event_tracking_id(mut self, id: impl Into<String>) -> Self {
        self.event_tracking_id = Some(id.into());
        self
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }
}

impl PartialEq for MessageHeader {
    fn eq(&self, other: &Self) -> bool {
        self.station_id == other.station_id
            && self.timestamp == other.timestamp
            && self.event_tracking_id == other.event_tracking_id
    }
}
