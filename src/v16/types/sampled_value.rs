use crate::wire_struct;

use super::{Location, Measurand, Phase, ReadingContext, UnitOfMeasure, ValueFormat};

wire_struct! {
    /// One reading. `value` stays an open string: its interpretation
    /// depends on `format` (raw decimal vs. signed binary blob).
    pub struct SampledValue {
        req value("value"): String,
        opt context("context"): ReadingContext,
        opt format("format"): ValueFormat,
        opt measurand("measurand"): Measurand,
        opt phase("phase"): Phase,
        opt location("location"): Location,
        opt unit("unit"): UnitOfMeasure,
    }
}
