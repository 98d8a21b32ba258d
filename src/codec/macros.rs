//! `wire_struct!` and `wire_enum!`: one field-metadata declaration per type,
//! from which both codecs, structural equality and structural hashing are
//! generated. Field kinds:
//!
//! - `req`      — mandatory scalar/composite
//! - `opt`      — optional (stored as `Option<T>`, omitted when absent)
//! - `req_list` — mandatory non-empty ordered collection (stored as `Vec<T>`)
//! - `opt_list` — optional ordered collection (stored as `Option<Vec<T>>`)
//!
//! The parenthesized literal is the exact wire name, shared by the JSON key
//! and the XML element.

/// Declare a wire struct. With a `: "tag"` after the name it is a message
/// payload (gets a [`WireMessage`](crate::codec::WireMessage) impl); without
/// one it is a nested value type.
#[macro_export]
macro_rules! wire_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $tag:literal { $($fields:tt)* }
    ) => {
        $crate::wire_struct! { $(#[$meta])* pub struct $name { $($fields)* } }

        impl $crate::codec::WireMessage for $name {
            const XML_TAG: &'static str = $tag;
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $kind:ident $field:ident ($wire:literal) : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            $( pub $field: $crate::wire_struct!(@ty $kind $ty) ),*
        }

        impl $crate::codec::JsonDecode for $name {
            fn decode_json(
                v: &::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::codec::ParseError> {
                let obj = $crate::codec::json::as_object(v)?;
                let _ = obj;
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::wire_struct!(@dj $kind obj, $wire) ),*
                })
            }
        }

        impl $crate::codec::JsonEncode for $name {
            fn encode_json(&self) -> ::serde_json::Value {
                let mut obj = ::serde_json::Map::new();
                let _ = &mut obj;
                $( $crate::wire_struct!(@ej $kind (self.$field), obj, $wire); )*
                ::serde_json::Value::Object(obj)
            }
        }

        impl $crate::codec::XmlDecode for $name {
            fn decode_xml(
                el: &$crate::codec::Element,
            ) -> ::core::result::Result<Self, $crate::codec::ParseError> {
                let _ = el;
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::wire_struct!(@dx $kind el, $wire) ),*
                })
            }
        }

        impl $crate::codec::XmlEncode for $name {
            fn encode_xml(&self, tag: &str) -> $crate::codec::Element {
                let mut el = $crate::codec::Element::new(tag);
                let _ = &mut el;
                $( $crate::wire_struct!(@ex $kind (self.$field), el, $wire); )*
                el
            }
        }

        impl $crate::codec::WireHash for $name {
            fn wire_hash(&self) -> u64 {
                let mut h = $crate::codec::hash::SEED;
                let _ = &mut h;
                $(
                    h = $crate::codec::hash::combine(
                        h,
                        $crate::codec::WireHash::wire_hash(&self.$field),
                    );
                )*
                h
            }
        }
    };

    // field storage types
    (@ty req $ty:ty) => { $ty };
    (@ty opt $ty:ty) => { ::core::option::Option<$ty> };
    (@ty req_list $ty:ty) => { ::std::vec::Vec<$ty> };
    (@ty opt_list $ty:ty) => { ::core::option::Option<::std::vec::Vec<$ty>> };

    // JSON field decoding
    (@dj req $obj:ident, $wire:literal) => { $crate::codec::json::require($obj, $wire)? };
    (@dj opt $obj:ident, $wire:literal) => { $crate::codec::json::optional($obj, $wire)? };
    (@dj req_list $obj:ident, $wire:literal) => { $crate::codec::json::require_list($obj, $wire)? };
    (@dj opt_list $obj:ident, $wire:literal) => { $crate::codec::json::optional_list($obj, $wire)? };

    // JSON field encoding; absent optionals produce no key at all
    (@ej req $val:expr, $obj:ident, $wire:literal) => {
        $obj.insert($wire.into(), $crate::codec::JsonEncode::encode_json(&$val));
    };
    (@ej opt $val:expr, $obj:ident, $wire:literal) => {
        if let ::core::option::Option::Some(v) = &$val {
            $obj.insert($wire.into(), $crate::codec::JsonEncode::encode_json(v));
        }
    };
    (@ej req_list $val:expr, $obj:ident, $wire:literal) => {
        $obj.insert(
            $wire.into(),
            ::serde_json::Value::Array(
                $val.iter().map($crate::codec::JsonEncode::encode_json).collect(),
            ),
        );
    };
    (@ej opt_list $val:expr, $obj:ident, $wire:literal) => {
        if let ::core::option::Option::Some(list) = &$val {
            $obj.insert(
                $wire.into(),
                ::serde_json::Value::Array(
                    list.iter().map($crate::codec::JsonEncode::encode_json).collect(),
                ),
            );
        }
    };

    // XML field decoding
    (@dx req $el:ident, $wire:literal) => { $crate::codec::xml::require($el, $wire)? };
    (@dx opt $el:ident, $wire:literal) => { $crate::codec::xml::optional($el, $wire)? };
    (@dx req_list $el:ident, $wire:literal) => { $crate::codec::xml::require_list($el, $wire)? };
    (@dx opt_list $el:ident, $wire:literal) => { $crate::codec::xml::optional_list($el, $wire)? };

    // XML field encoding; collections become repeated sibling elements
    (@ex req $val:expr, $el:ident, $wire:literal) => {
        $el.children.push($crate::codec::XmlEncode::encode_xml(&$val, $wire));
    };
    (@ex opt $val:expr, $el:ident, $wire:literal) => {
        if let ::core::option::Option::Some(v) = &$val {
            $el.children.push($crate::codec::XmlEncode::encode_xml(v, $wire));
        }
    };
    (@ex req_list $val:expr, $el:ident, $wire:literal) => {
        for item in $val.iter() {
            $el.children.push($crate::codec::XmlEncode::encode_xml(item, $wire));
        }
    };
    (@ex opt_list $val:expr, $el:ident, $wire:literal) => {
        if let ::core::option::Option::Some(list) = &$val {
            for item in list.iter() {
                $el.children.push($crate::codec::XmlEncode::encode_xml(item, $wire));
            }
        }
    };
}

/// Declare a closed-vocabulary enumeration. Each variant names its exact,
/// case-sensitive wire token; parsing any other token fails. Parsing and
/// serialization share the one token table, so they are exact inverses.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The canonical wire token.
            pub fn as_wire_str(&self) -> &'static str {
                match self { $( Self::$variant => $text ),+ }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::codec::ParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $( $text => ::core::result::Result::Ok(Self::$variant), )+
                    other => ::core::result::Result::Err(
                        $crate::codec::ParseError::invalid_value(other),
                    ),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_wire_str())
            }
        }

        impl $crate::codec::JsonDecode for $name {
            fn decode_json(
                v: &::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::codec::ParseError> {
                v.as_str()
                    .ok_or_else(|| $crate::codec::ParseError::invalid_value(v))?
                    .parse()
            }
        }

        impl $crate::codec::JsonEncode for $name {
            fn encode_json(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.as_wire_str().into())
            }
        }

        impl $crate::codec::XmlDecode for $name {
            fn decode_xml(
                el: &$crate::codec::Element,
            ) -> ::core::result::Result<Self, $crate::codec::ParseError> {
                el.text.trim().parse()
            }
        }

        impl $crate::codec::XmlEncode for $name {
            fn encode_xml(&self, tag: &str) -> $crate::codec::Element {
                $crate::codec::Element::with_text(tag, self.as_wire_str())
            }
        }

        impl $crate::codec::WireHash for $name {
            fn wire_hash(&self) -> u64 {
                $crate::codec::hash::hash_str(self.as_wire_str())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::codec::{JsonDecode, ParseError, WireHash, WireMessage};
    use serde_json::json;

    wire_enum! {
        pub enum Mode {
            Fast = "Fast",
            Slow = "Slow",
        }
    }

    wire_struct! {
        pub struct Sample : "sampleRequest" {
            req id("id"): u32,
            opt label("label"): String,
            req mode("mode"): Mode,
            opt_list tags("tag"): String,
        }
    }

    fn sample() -> Sample {
        Sample {
            id: 7,
            label: None,
            mode: Mode::Fast,
            tags: None,
        }
    }

    #[test]
    fn generated_json_codec_round_trips() {
        let m = sample();
        let encoded = m.to_json();
        assert_eq!(encoded, json!({"id": 7, "mode": "Fast"}));
        assert_eq!(Sample::decode_json(&encoded).unwrap(), m);
    }

    #[test]
    fn generated_xml_codec_round_trips() {
        let m = Sample {
            label: Some("a".into()),
            tags: Some(vec!["x".into(), "y".into()]),
            ..sample()
        };
        let text = m.to_xml_text();
        assert_eq!(Sample::from_xml_text(&text).unwrap(), m);
    }

    #[test]
    fn missing_mandatory_field_fails_closed() {
        let err = Sample::decode_json(&json!({"id": 7})).unwrap_err();
        assert_eq!(err, ParseError::MissingMandatoryField("mode".into()));
    }

    #[test]
    fn unknown_enum_token_rejects_the_field() {
        let err = Sample::decode_json(&json!({"id": 7, "mode": "fast"})).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidFieldValue {
                field: "mode".into(),
                raw: "fast".into()
            }
        );
    }

    #[test]
    fn presence_of_an_optional_changes_equality_and_hash() {
        let absent = sample();
        let present = Sample {
            label: Some(String::new()),
            ..sample()
        };
        assert_ne!(absent, present);
        assert_ne!(absent.wire_hash(), present.wire_hash());
    }

    #[test]
    fn serializer_hook_can_extend_the_container() {
        let out = sample().to_json_with(|mut v, m| {
            v["vendorExtension"] = json!(m.id);
            v
        });
        assert_eq!(out["vendorExtension"], json!(7));
    }
}
