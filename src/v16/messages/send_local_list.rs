use crate::wire_struct;

use super::super::types::{AuthorizationData, UpdateStatus, UpdateType};

wire_struct! {
    pub struct SendLocalListRequest : "sendLocalListRequest" {
        req list_version("listVersion"): i32,
        opt_list local_authorization_list("localAuthorizationList"): AuthorizationData,
        req update_type("updateType"): UpdateType,
    }
}

wire_struct! {
    pub struct SendLocalListResponse : "sendLocalListResponse" {
        req status("status"): UpdateStatus,
    }
}
