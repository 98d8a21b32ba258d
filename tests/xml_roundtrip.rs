use chrono::{TimeZone, Utc};

use ocpp_wire::codec::{ParseError, WireFormat, WireMessage};
use ocpp_wire::v16::messages::*;
use ocpp_wire::v16::types::*;

#[test]
fn status_notification_parses_with_all_optionals_absent() {
    let raw = "<statusNotificationRequest>\
                 <connectorId>1</connectorId>\
                 <status>Available</status>\
                 <errorCode>NoError</errorCode>\
               </statusNotificationRequest>";
    let req = StatusNotificationRequest::from_wire(raw).unwrap();
    assert_eq!(req.connector_id, 1);
    assert_eq!(req.status, ChargePointStatus::Available);
    assert_eq!(req.error_code, ChargePointErrorCode::NoError);
    assert_eq!(req.info, None);
    assert_eq!(req.vendor_id, None);
    assert_eq!(req.vendor_error_code, None);
    assert_eq!(req.timestamp, None);
}

#[test]
fn status_notification_round_trips_with_all_optionals_present() {
    let req = StatusNotificationRequest {
        connector_id: 1,
        error_code: ChargePointErrorCode::HighTemperature,
        info: Some("cable check ok".into()),
        status: ChargePointStatus::Faulted,
        timestamp: Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()),
        vendor_id: Some("com.example".into()),
        vendor_error_code: Some("E42".into()),
    };
    let text = req.to_xml_text();
    for tag in ["info", "timestamp", "vendorId", "vendorErrorCode"] {
        assert!(text.contains(&format!("<{tag}>")), "missing element {tag}");
    }
    assert_eq!(StatusNotificationRequest::from_wire(&text).unwrap(), req);
}

#[test]
fn meter_values_round_trip_as_repeated_elements() {
    let req = MeterValuesRequest {
        connector_id: 2,
        transaction_id: Some(7),
        meter_value: vec![
            MeterValue {
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
                sampled_value: vec![SampledValue {
                    value: "42.1".into(),
                    context: Some(ReadingContext::SamplePeriodic),
                    format: None,
                    measurand: None,
                    phase: None,
                    location: None,
                    unit: Some(UnitOfMeasure::KWh),
                }],
            },
            MeterValue {
                timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 1, 0).unwrap(),
                sampled_value: vec![SampledValue {
                    value: "42.4".into(),
                    context: None,
                    format: None,
                    measurand: None,
                    phase: None,
                    location: None,
                    unit: Some(UnitOfMeasure::KWh),
                }],
            },
        ],
    };

    let text = req.to_xml_text();
    // Two sibling <meterValue> elements, not a wrapper list.
    assert_eq!(text.matches("<meterValue>").count(), 2);
    assert_eq!(MeterValuesRequest::from_wire(&text).unwrap(), req);
}

#[test]
fn absent_optionals_produce_no_elements() {
    let req = GetCompositeScheduleRequest {
        connector_id: 1,
        duration: 600.into(),
        charging_rate_unit: None,
    };
    let text = req.to_xml_text();
    assert!(!text.contains("chargingRateUnit"));
    assert_eq!(GetCompositeScheduleRequest::from_xml_text(&text).unwrap(), req);
}

#[test]
fn missing_mandatory_collection_in_xml_fails() {
    let err = MeterValuesRequest::from_wire(
        "<meterValuesRequest><connectorId>1</connectorId></meterValuesRequest>",
    )
    .unwrap_err();
    assert_eq!(err, ParseError::EmptyMandatoryCollection("meterValue".into()));
}

#[test]
fn whitespace_and_namespace_prefixes_are_tolerated() {
    let raw = r#"
        <cp:resetRequest xmlns:cp="urn://Ocpp/Cp/2015/10/">
            <cp:type>Soft</cp:type>
        </cp:resetRequest>
    "#;
    let req = ResetRequest::from_wire(raw).unwrap();
    assert_eq!(req.kind, ResetType::Soft);
}

#[test]
fn soap_wrapped_roots_are_found() {
    let raw = "<soap:Envelope xmlns:soap=\"http://www.w3.org/2003/05/soap-envelope\">\
                 <soap:Body>\
                   <heartbeatRequest/>\
                 </soap:Body>\
               </soap:Envelope>";
    assert_eq!(HeartbeatRequest::from_wire(raw).unwrap(), HeartbeatRequest {});
}

#[test]
fn both_encodings_decode_to_equal_messages() {
    let from_json = BootNotificationResponse::from_wire(
        r#"{"currentTime":"2024-05-01T10:00:00Z","interval":300,"status":"Accepted"}"#,
    )
    .unwrap();
    let from_xml = BootNotificationResponse::from_wire(
        "<bootNotificationResponse>\
           <currentTime>2024-05-01T10:00:00Z</currentTime>\
           <interval>300</interval>\
           <status>Accepted</status>\
         </bootNotificationResponse>",
    )
    .unwrap();
    assert_eq!(from_json, from_xml);
    assert_eq!(from_json.status, RegistrationStatus::Accepted);
}

#[test]
fn sniffing_dispatches_on_the_first_character() {
    assert_eq!(
        ocpp_wire::codec::sniff::detect(r#"  {"key":"A","value":"1"}"#),
        WireFormat::Json
    );
    assert_eq!(
        ocpp_wire::codec::sniff::detect("<changeConfigurationRequest/>"),
        WireFormat::Xml
    );
}

#[test]
fn payload_that_sniffs_as_json_but_is_broken_fails_cleanly() {
    let err = ChangeConfigurationRequest::from_wire(r#"{"key": "#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedPayload(_)));
}

#[test]
fn truncated_xml_fails_cleanly() {
    let err = ChangeConfigurationRequest::from_wire("<changeConfigurationRequest><key>A")
        .unwrap_err();
    assert!(matches!(err, ParseError::MalformedPayload(_)));
}

#[test]
fn wrong_root_element_is_rejected() {
    let err = HeartbeatRequest::from_wire("<resetRequest><type>Soft</type></resetRequest>")
        .unwrap_err();
    assert!(matches!(err, ParseError::MalformedPayload(_)));
}

#[test]
fn deep_profile_round_trips_through_xml() {
    let req = SetChargingProfileRequest {
        connector_id: 1,
        cs_charging_profiles: ChargingProfile {
            charging_profile_id: 11,
            transaction_id: None,
            stack_level: 0,
            charging_profile_purpose: ChargingProfilePurposeType::TxDefaultProfile,
            charging_profile_kind: ChargingProfileKindType::Recurring,
            recurrency_kind: Some(RecurrencyKindType::Daily),
            valid_from: Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()),
            valid_to: None,
            charging_schedule: ChargingSchedule {
                duration: Some(86_400.into()),
                start_schedule: None,
                charging_rate_unit: ChargingRateUnitType::A,
                charging_schedule_period: vec![
                    ChargingSchedulePeriod {
                        start_period: 0,
                        limit: 16.0,
                        number_phases: Some(3),
                    },
                    ChargingSchedulePeriod {
                        start_period: 28_800,
                        limit: 32.0,
                        number_phases: None,
                    },
                ],
                min_charging_rate: Some(6.0),
            },
        },
    };

    let text = req.to_xml_text();
    assert_eq!(SetChargingProfileRequest::from_wire(&text).unwrap(), req);

    // And the JSON side agrees on the same value.
    let via_json = SetChargingProfileRequest::from_wire(&req.to_json().to_string()).unwrap();
    assert_eq!(via_json, req);
}
