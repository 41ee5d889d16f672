use crate::record::FieldSlotMut;
use crate::value::{Type, Value};

/// Coerces `from` into the destination slot, or leaves the slot untouched.
///
/// Rules apply in strict precedence order, first match wins:
///
/// 1. Optional unwrap: a present `Ptr` source is replaced by its referent;
///    an absent one skips the field. A `Ptr`-typed destination receives
///    the value through its referent when present, otherwise the field is
///    skipped.
/// 2. Polymorphic unwrap: a held value that fits the slot is assigned
///    as-is; under a textual slot it is stringified; otherwise it becomes
///    the source for the remaining rules.
/// 3. Nullable unwrap: valid wrappers yield their payload, invalid ones
///    their kind's fixed default.
/// 4. Any numeric or textual source assigns its text form to a textual
///    slot.
/// 5. A textual source is trimmed, stripped of commas, and parsed to fit
///    a numeric slot; a failed parse leaves the slot at its prior value.
/// 6. Cross-family numeric conversion, truncating toward zero.
/// 7. A value already of the slot's type is assigned as-is.
/// 8. Anything else is a no-op.
///
/// No rule reports failure; every failure mode degrades to "destination
/// unchanged".
pub fn coerce(from: &Value, mut slot: FieldSlotMut<'_>) {
    // Rule 1: unwrap a present optional source; skip an absent one.
    let from = match from {
        Value::Ptr(Some(referent)) => &**referent,
        Value::Ptr(None) => return,
        from => from,
    };

    if from.is_null() {
        return;
    }

    // Rule 1, destination side: assign through a present referent.
    if let Type::Ptr(inner) = slot.ty {
        if let Value::Ptr(Some(referent)) = &mut *slot.value {
            coerce(
                from,
                FieldSlotMut {
                    ty: &**inner,
                    value: &mut **referent,
                },
            );
        }
        return;
    }

    // Rule 2: unwrap the polymorphic container.
    let from = match from {
        Value::Any(Some(held)) => {
            let held = &**held;

            if held.is_a(slot.ty) {
                slot.assign(held.clone());
                return;
            }

            if slot.ty.is_string() {
                if let Some(text) = to_text(held) {
                    slot.assign(Value::String(text));
                }
                return;
            }

            held
        }
        from => from,
    };

    // Rule 3: unwrap nullable wrappers; invalid ones yield the kind's
    // fixed default (zero, or a single space for text).
    let unwrapped;
    let from = match from {
        Value::Nullable(nullable) => {
            unwrapped = nullable.unwrap_or_default();
            &unwrapped
        }
        from => from,
    };

    // Rule 4: textual destination.
    if slot.ty.is_string() {
        if let Some(text) = to_text(from) {
            slot.assign(Value::String(text));
        }
        return;
    }

    // Rule 5: textual source into a numeric destination.
    if let Value::String(text) = from {
        let clean = text.trim().replace(',', "");

        macro_rules! parse_assign {
            ($ty:ty, $variant:ident) => {{
                if let Ok(value) = clean.parse::<$ty>() {
                    slot.assign(Value::$variant(value));
                }
                return;
            }};
        }

        match slot.ty {
            Type::I8 => parse_assign!(i8, I8),
            Type::I16 => parse_assign!(i16, I16),
            Type::I32 => parse_assign!(i32, I32),
            Type::I64 => parse_assign!(i64, I64),
            Type::U8 => parse_assign!(u8, U8),
            Type::U16 => parse_assign!(u16, U16),
            Type::U32 => parse_assign!(u32, U32),
            Type::U64 => parse_assign!(u64, U64),
            Type::F32 => parse_assign!(f32, F32),
            Type::F64 => parse_assign!(f64, F64),
            _ => {}
        }
    }

    // Rule 6: cross-family numeric conversion. Float sources truncate
    // toward zero; out-of-range and negative-to-unsigned conversions take
    // Rust's saturating cast result.
    if let Some(v) = from.as_int() {
        match slot.ty {
            Type::F32 => {
                slot.assign(Value::F32(v as f32));
                return;
            }
            Type::F64 => {
                slot.assign(Value::F64(v as f64));
                return;
            }
            _ => {}
        }
    }

    if let Some(v) = from.as_float() {
        macro_rules! truncate_assign {
            ($ty:ty, $variant:ident) => {{
                slot.assign(Value::$variant(v as $ty));
                return;
            }};
        }

        match slot.ty {
            Type::I8 => truncate_assign!(i8, I8),
            Type::I16 => truncate_assign!(i16, I16),
            Type::I32 => truncate_assign!(i32, I32),
            Type::I64 => truncate_assign!(i64, I64),
            Type::U8 => truncate_assign!(u8, U8),
            Type::U16 => truncate_assign!(u16, U16),
            Type::U32 => truncate_assign!(u32, U32),
            Type::U64 => truncate_assign!(u64, U64),
            _ => {}
        }
    }

    if let Some(v) = from.as_uint() {
        match slot.ty {
            Type::F32 => {
                slot.assign(Value::F32(v as f32));
                return;
            }
            Type::F64 => {
                slot.assign(Value::F64(v as f64));
                return;
            }
            _ => {}
        }
    }

    // Rule 7: directly assignable. Note that numeric widths must match
    // exactly; an I32 value does not flow into an I64 slot.
    if from.is_a(slot.ty) {
        slot.assign(from.clone());
    }
}

/// Formats a fully unwrapped value for a textual slot.
///
/// Integers render as base-10 decimal. Floats render as the shortest
/// decimal form that round-trips, never exponent notation. Strings pass
/// through verbatim. Anything else has no text form.
fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::I8(v) => Some(v.to_string()),
        Value::I16(v) => Some(v.to_string()),
        Value::I32(v) => Some(v.to_string()),
        Value::I64(v) => Some(v.to_string()),
        Value::U8(v) => Some(v.to_string()),
        Value::U16(v) => Some(v.to_string()),
        Value::U32(v) => Some(v.to_string()),
        Value::U64(v) => Some(v.to_string()),
        Value::F32(v) => Some(v.to_string()),
        Value::F64(v) => Some(v.to_string()),
        Value::String(v) => Some(v.clone()),
        _ => None,
    }
}
