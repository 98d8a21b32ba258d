use crate::wire_enum;

wire_enum! {
    pub enum ChargingProfileKindType {
        Absolute = "Absolute",
        Recurring = "Recurring",
        Relative = "Relative",
    }
}
