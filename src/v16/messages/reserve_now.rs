use chrono::{DateTime, Utc};

use crate::wire_struct;

use super::super::types::ReservationStatus;

wire_struct! {
    pub struct ReserveNowRequest : "reserveNowRequest" {
        req connector_id("connectorId"): usize,
        req expiry_date("expiryDate"): DateTime<Utc>,
        req id_tag("idTag"): String,
        opt parent_id_tag("parentIdTag"): String,
        req reservation_id("reservationId"): i32,
    }
}

wire_struct! {
    pub struct ReserveNowResponse : "reserveNowResponse" {
        req status("status"): ReservationStatus,
    }
}
