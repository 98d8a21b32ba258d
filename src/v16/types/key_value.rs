use crate::wire_struct;

wire_struct! {
    pub struct KeyValue {
        req key("key"): String,
        req readonly("readonly"): bool,
        opt value("value"): String,
    }
}
