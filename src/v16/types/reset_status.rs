use crate::wire_enum;

wire_enum! {
    pub enum ResetStatus {
        Accepted = "Accepted",
        Rejected = "Rejected",
    }
}
