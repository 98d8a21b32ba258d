use crate::wire_enum;

wire_enum! {
    pub enum ResetType {
        Hard = "Hard",
        Soft = "Soft",
    }
}
