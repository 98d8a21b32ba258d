use crate::wire_struct;

use super::super::types::ConfigurationStatus;

wire_struct! {
    pub struct ChangeConfigurationRequest : "changeConfigurationRequest" {
        req key("key"): String,
        req value("value"): String,
    }
}

wire_struct! {
    pub struct ChangeConfigurationResponse : "changeConfigurationResponse" {
        req status("status"): ConfigurationStatus,
    }
}
