//! XSD emitter: renders one schema document per [`Message`].
//!
//! Pure function of the model; the caller decides where the text goes.

use crate::model::{FieldType, Message};
use std::fmt::Write;

/// Base URI for generated target namespaces. Each message (and operation)
/// gets `NAMESPACE_BASE` + its name.
pub const NAMESPACE_BASE: &str = "http://cwf.example.org/";

/// Reviewed mapping from DSL field types to XSD built-in primitive names.
/// All three targets are genuine XSD built-ins; the DSL keywords happen to
/// coincide but this table is the authority, not the coincidence.
pub fn xsd_type(ty: FieldType) -> &'static str {
    match ty {
        FieldType::Int => "int",
        FieldType::Decimal => "decimal",
        FieldType::String => "string",
    }
}

/// Render the schema for `msg`: one `complexType` holding one `sequence`
/// element per field, in declaration order.
pub fn render(msg: &Message) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<xsd:schema targetNamespace=\"{}{}\" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\">",
        NAMESPACE_BASE, msg.name
    );
    let _ = writeln!(out, "\t<xsd:complexType name=\"{}\">", msg.name);
    out.push_str("\t\t<xsd:sequence>\n");
    for f in &msg.fields {
        let _ = writeln!(
            out,
            "\t\t\t<xsd:element minOccurs=\"1\" maxOccurs=\"1\" name=\"{}\" type=\"xsd:{}\"/>",
            f.name,
            xsd_type(f.ty)
        );
    }
    out.push_str("\t\t</xsd:sequence>\n");
    out.push_str("\t</xsd:complexType>\n");
    out.push_str("</xsd:schema>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn render_lists_fields_in_order() {
        let msg = Message {
            name: "Req".into(),
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
                    ty: FieldType::Int,
                    pos: 3,
                    width: 2,
                    decimal_digits: 0,
                },
            ],
            length: 5,
        };
        let text = render(&msg);
        assert!(text.contains("targetNamespace=\"http://cwf.example.org/Req\""));
        assert!(text.contains("<xsd:complexType name=\"Req\">"));
        let a = text.find("name=\"a\" type=\"xsd:string\"").expect("field a");
        let b = text.find("name=\"b\" type=\"xsd:int\"").expect("field b");
        assert!(a < b, "declaration order preserved");
    }
}
