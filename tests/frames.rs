use serde_json::json;

use ocpp_wire::codec::{JsonDecode, WireMessage};
use ocpp_wire::format::{Call, CallError, CallResponse, CallResult, Encode, MessageHeader, OcppMessage};
use ocpp_wire::v16::messages::{AuthorizeRequest, AuthorizeResponse};
use ocpp_wire::v16::types::{AuthorizationStatus, IdTagInfo};
use ocpp_wire::v16::ProtocolError;

#[test]
fn call_frames_decode_and_reencode() {
    let raw = r#"[2,"19223201","Authorize",{"idTag":"ABC123"}]"#;
    let call = match OcppMessage::<ProtocolError>::decode(raw.to_string()) {
        OcppMessage::Call(c) => c,
        _ => panic!("expected a Call"),
    };
    assert_eq!(call.unique_id, "19223201");
    assert_eq!(call.action, "Authorize");

    let req = AuthorizeRequest::decode_json(&call.payload).unwrap();
    assert_eq!(req.id_tag, "ABC123");

    assert_eq!(call.encode(), raw);
}

#[test]
fn call_result_frames_carry_typed_payloads() {
    let response = AuthorizeResponse {
        id_tag_info: IdTagInfo {
            expiry_date: None,
            parent_id_tag: None,
            status: AuthorizationStatus::Accepted,
        },
    };
    let result = CallResult::new("19223201".to_string(), &response);
    let encoded = result.encode();
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&encoded).unwrap(),
        json!([3, "19223201", {"idTagInfo": {"status": "Accepted"}}])
    );

    match OcppMessage::<ProtocolError>::decode(encoded) {
        OcppMessage::CallResponse(CallResponse::CallResult(r)) => {
            assert_eq!(AuthorizeResponse::decode_json(&r.payload).unwrap(), response);
        }
        _ => panic!("expected a CallResult"),
    }
}

#[test]
fn call_error_frames_round_trip_their_code() {
    let err = CallError::new("19223201".to_string(), ProtocolError::NotSupported);
    let encoded = err.encode();
    match OcppMessage::<ProtocolError>::decode(encoded) {
        OcppMessage::CallResponse(CallResponse::CallError(e)) => {
            assert_eq!(e.error_code, ProtocolError::NotSupported);
            assert_eq!(e.unique_id, "19223201");
        }
        _ => panic!("expected a CallError"),
    }
}

#[test]
fn unclassifiable_frames_become_invalid_not_panics() {
    for raw in [
        "not json at all",
        r#"{"messageTypeId":2}"#,
        r#"[9,"id","Action",{}]"#,
        r#"[2,"id"]"#,
    ] {
        match OcppMessage::<ProtocolError>::decode(raw.to_string()) {
            OcppMessage::Invalid(inv) => assert!(!inv.err_msg.is_empty()),
            _ => panic!("expected Invalid for {raw}"),
        }
    }
}

#[test]
fn invalid_call_error_still_recovers_the_unique_id() {
    // Unknown error code token: structure recognizable, code not parseable.
    let raw = r#"[4,"19223201","NoSuchCode","oops",{}]"#;
    match OcppMessage::<ProtocolError>::decode(raw.to_string()) {
        OcppMessage::Invalid(inv) => assert_eq!(inv.unique_id.as_deref(), Some("19223201")),
        _ => panic!("expected Invalid"),
    }
}

#[test]
fn outbound_calls_take_their_id_from_the_header() {
    let header = MessageHeader::new("msg-0001", "CP001");
    let req = AuthorizeRequest {
        id_tag: "ABC123".into(),
    };
    let call = Call::from_header(&header, "Authorize", &req);
    assert_eq!(call.unique_id, "msg-0001");
    assert_eq!(call.payload, req.to_json());
}
