//! Semantic model of a parsed compilation unit.
//!
//! Built incrementally by the parser in a single pass and handed read-only to
//! the emitters. Field byte offsets are a prefix sum over declaration order;
//! a message's total length follows from its last field.

/// The three primitive field kinds of the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    Decimal,
    String,
}

impl FieldType {
    /// The DSL keyword for this type.
    pub fn keyword(self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::Decimal => "decimal",
            FieldType::String => "string",
        }
    }

    /// The SDO DataObject accessor suffix used by the generated marshaller
    /// (`dobj.getInt(..)`, `getFloat(..)`, `getString(..)`).
    pub fn data_object_type(self) -> &'static str {
        match self {
            FieldType::Int => "Int",
            FieldType::Decimal => "Float",
            FieldType::String => "String",
        }
    }
}

/// One field of a fixed-width record. `pos` is the byte offset of the field
/// within the record; it is always derived from declaration order, never
/// written by the user. `decimal_digits` is meaningful only for
/// [`FieldType::Decimal`]: the number of figures to the right of the implied
/// decimal point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    pub pos: usize,
    pub width: usize,
    pub decimal_digits: usize,
}

impl Field {
    /// The printf-style conversion directive that packs this field into its
    /// fixed-width span: `%<w>d`, `%<w>.<d>f`, or `%<w>s`.
    pub fn printf_flag(&self) -> String {
        match self.ty {
            FieldType::Int => format!("%{}d", self.width),
            FieldType::Decimal => format!("%{}.{}f", self.width, self.decimal_digits),
            FieldType::String => format!("%{}s", self.width),
        }
    }
}

/// A named message: an ordered field list plus the derived total length of
/// its wire record. Field names are not required to be unique here; a target
/// representation that needs uniqueness must check it itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub fields: Vec<Field>,
    /// Total length of the fixed-width record: last field's pos + width.
    pub length: usize,
}

impl Message {
    /// Concatenated pack directives for all fields, in declaration order.
    /// Formatting a record with these flags reproduces a fixed-width string
    /// of exactly [`Message::length`] characters.
    pub fn printf_flags(&self) -> String {
        self.fields.iter().map(Field::printf_flag).collect()
    }

    /// A synthetic wire record of exactly `length` bytes, each field filled
    /// with cycling digits. Handy for exercising generated unpack logic.
    pub fn sample_record(&self) -> String {
        let mut buf = String::with_capacity(self.length);
        for f in &self.fields {
            for i in 0..f.width {
                buf.push(char::from(b'0' + (i % 10) as u8));
            }
        }
        buf
    }
}

/// The top-level compilation unit: a named request/response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub input: Message,
    pub output: Message,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg() -> Message {
        Message {
            name: "M".into(),
            fields: vec![
                Field {
                    name: "a".into(),
                    ty: FieldType::String,
                    pos: 0,
                    width: 3,
                    decimal_digits: 0,
                },
                Field {
                    name: "b".into(),
                    ty: FieldType::Decimal,
                    pos: 3,
                    width: 7,
                    decimal_digits: 2,
                },
                Field {
                    name: "c".into(),
                    ty: FieldType::Int,
                    pos: 10,
                    width: 2,
                    decimal_digits: 0,
                },
            ],
            length: 12,
        }
    }

    #[test]
    fn printf_flags_concatenate_in_order() {
        assert_eq!(msg().printf_flags(), "%3s%7.2f%2d");
    }

    #[test]
    fn sample_record_has_message_length() {
        let m = msg();
        let rec = m.sample_record();
        assert_eq!(rec.len(), m.length);
        assert_eq!(rec, "012012345601");
    }
}
