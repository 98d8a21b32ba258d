use crate::wire_enum;

wire_enum! {
    pub enum AvailabilityType {
        Inoperative = "Inoperative",
        Operative = "Operative",
    }
}
