use crate::wire_struct;

use super::super::types::IdTagInfo;

wire_struct! {
    pub struct AuthorizeRequest : "authorizeRequest" {
        req id_tag("idTag"): String,
    }
}

wire_struct! {
    pub struct AuthorizeResponse : "authorizeResponse" {
        req id_tag_info("idTagInfo"): IdTagInfo,
    }
}
