mod authorize;
mod boot_notification;
mod cancel_reservation;
mod change_availability;
mod change_configuration;
mod clear_cache;
mod clear_charging_profile;
mod data_transfer;
mod diagnostics_status_notification;
mod firmware_status_notification;
mod get_composite_schedule;
mod get_configuration;
mod get_diagnostics;
mod get_local_list_version;
mod heart_beat;
mod meter_values;
mod remote_start_transaction;
mod remote_stop_transaction;
mod reserve_now;
mod reset;
mod send_local_list;
mod set_charging_profile;
mod start_transaction;
mod status_notification;
mod stop_transaction;
mod trigger_message;
mod unlock_connector;
mod update_firmware;

pub use authorize::{AuthorizeRequest, AuthorizeResponse};
pub use boot_notification::{BootNotificationRequest, BootNotificationResponse};
pub use cancel_reservation::{CancelReservationRequest, CancelReservationResponse};
pub use change_availability::{ChangeAvailabilityRequest, ChangeAvailabilityResponse};
pub use change_configuration::{ChangeConfigurationRequest, ChangeConfigurationResponse};
pub use clear_cache::{ClearCacheRequest, ClearCacheResponse};
pub use clear_charging_profile::{ClearChargingProfileRequest, ClearChargingProfileResponse};
pub use data_transfer::{DataTransferRequest, DataTransferResponse};
pub use diagnostics_status_notification::{
    DiagnosticsStatusNotificationRequest, DiagnosticsStatusNotificationResponse,
};
pub use firmware_status_notification::{
    FirmwareStatusNotificationRequest, FirmwareStatusNotificationResponse,
};
pub use get_composite_schedule::{GetCompositeScheduleRequest, GetCompositeScheduleResponse};
pub use get_configuration::{GetConfigurationRequest, GetConfigurationResponse};
pub use get_diagnostics::{GetDiagnosticsRequest, GetDiagnosticsResponse};
pub use get_local_list_version::{GetLocalListVersionRequest, GetLocalListVersionResponse};
pub use heart_beat::{HeartbeatRequest, HeartbeatResponse};
pub use meter_values::{MeterValuesRequest, MeterValuesResponse};
pub use remote_start_transaction::{
    RemoteStartTransactionRequest, RemoteStartTransactionResponse,
};
pub use remote_stop_transaction::{RemoteStopTransactionRequest, RemoteStopTransactionResponse};
pub use reserve_now::{ReserveNowRequest, ReserveNowResponse};
pub use reset::{ResetRequest, ResetResponse};
pub use send_local_list::{SendLocalListRequest, SendLocalListResponse};
pub use set_charging_profile::{SetChargingProfileRequest, SetChargingProfileResponse};
pub use start_transaction::{StartTransactionRequest, StartTransactionResponse};
pub use status_notification::{StatusNotificationRequest, StatusNotificationResponse};
pub use stop_transaction::{StopTransactionRequest, StopTransactionResponse};
pub use trigger_message::{TriggerMessageRequest, TriggerMessageResponse};
pub use unlock_connector::{UnlockConnectorRequest, UnlockConnectorResponse};
pub use update_firmware::{UpdateFirmwareRequest, UpdateFirmwareResponse};
