use crate::wire_struct;

use super::super::types::KeyValue;

wire_struct! {
    pub struct GetConfigurationRequest : "getConfigurationRequest" {
        opt_list key("key"): String,
    }
}

wire_struct! {
    pub struct GetConfigurationResponse : "getConfigurationResponse" {
        opt_list configuration_key("configurationKey"): KeyValue,
        opt_list unknown_key("unknownKey"): String,
    }
}
