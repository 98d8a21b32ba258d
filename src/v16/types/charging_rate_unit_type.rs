use crate::wire_enum;

wire_enum! {
    pub enum ChargingRateUnitType {
        W = "W",
        A = "A",
    }
}
