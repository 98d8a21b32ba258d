use crate::wire_enum;

wire_enum! {
    /// OCPP-J call-error codes. The host maps a rejected inbound payload to
    /// one of these on the wire; which variant fits which
    /// [`ParseError`](crate::codec::ParseError) is host policy.
    pub enum ProtocolError {
        InternalError = "InternalError",
        ProtocolError = "ProtocolError",
        SecurityError = "SecurityError",
        FormationViolation = "FormationViolation",
        PropertyConstraintViolation = "PropertyConstraintViolation",
        OccurrenceConstraintViolation = "OccurrenceConstraintViolation",
        TypeConstraintViolation = "TypeConstraintViolation",
        GenericError = "GenericError",
        NotImplemented = "NotImplemented",
        NotSupported = "NotSupported",
    }
}
