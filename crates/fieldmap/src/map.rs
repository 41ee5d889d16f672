mod coerce;
pub use coerce::coerce;

use crate::record::Record;

/// Copies every source field into the same-named destination field,
/// coercing values where the declared types differ.
///
/// Fields are matched by name only; names present on just one side are
/// silently ignored. Source fields are walked in declaration order. An
/// unconvertible pair leaves the destination field at its prior value —
/// mapping never fails and never mutates `source`.
///
/// Mapping into distinct destination records from multiple threads is
/// fine. Mapping into the same destination concurrently is the caller's
/// responsibility to synchronize.
pub fn map_fields(source: &Record, dst: &mut Record) {
    for (name, field) in source.iter() {
        if let Some(slot) = dst.slot_mut(name) {
            coerce(field.value(), slot);
        }
    }
}
