use crate::wire_struct;

wire_struct! {
    pub struct GetLocalListVersionRequest : "getLocalListVersionRequest" {}
}

wire_struct! {
    pub struct GetLocalListVersionResponse : "getLocalListVersionResponse" {
        req list_version("listVersion"): i32,
    }
}
