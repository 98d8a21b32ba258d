use crate::wire_enum;

wire_enum! {
    pub enum UpdateType {
        Differential = "Differential",
        Full = "Full",
    }
}
