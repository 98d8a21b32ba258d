use crate::wire_struct;

wire_struct! {
    pub struct ChargingSchedulePeriod {
        req start_period("startPeriod"): i32,
        req limit("limit"): f32,
        opt number_phases("numberPhases"): i32,
    }
}
