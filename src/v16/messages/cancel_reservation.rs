use crate::wire_struct;

use super::super::types::CancelReservationStatus;

wire_struct! {
    pub struct CancelReservationRequest : "cancelReservationRequest" {
        req reservation_id("reservationId"): i32,
    }
}

wire_struct! {
    pub struct CancelReservationResponse : "cancelReservationResponse" {
        req status("status"): CancelReservationStatus,
    }
}
