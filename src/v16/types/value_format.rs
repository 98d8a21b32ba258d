use crate::wire_enum;

wire_enum! {
    pub enum ValueFormat {
        Raw = "Raw",
        SignedData = "SignedData",
    }
}
