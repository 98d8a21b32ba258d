use crate::wire_enum;

wire_enum! {
    pub enum RecurrencyKindType {
        Daily = "Daily",
        Weekly = "Weekly",
    }
}
