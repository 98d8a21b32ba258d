use crate::wire_struct;

use super::IdTagInfo;

wire_struct! {
    pub struct AuthorizationData {
        req id_tag("idTag"): String,
        opt id_tag_info("idTagInfo"): IdTagInfo,
    }
}
