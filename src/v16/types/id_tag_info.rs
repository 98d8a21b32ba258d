use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::AuthorizationStatus;

wire_struct! {
    pub struct IdTagInfo {
        opt expiry_date("expiryDate"): DateTime<Utc>,
        opt parent_id_tag("parentIdTag"): String,
        req status("status"): AuthorizationStatus,
    }
}
