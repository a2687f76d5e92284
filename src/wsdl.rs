//! WSDL emitter: renders the service contract for an [`Operation`].
//!
//! The document imports the input and output messages' schema namespaces,
//! wraps each in a request/response element, and exposes a single `portType`
//! operation over the resulting message pair.

use crate::model::Operation;
use crate::xsd::NAMESPACE_BASE;

pub fn render(op: &Operation) -> String {
    let ns = NAMESPACE_BASE;
    let name = &op.name;
    let in_name = &op.input.name;
    let out_name = &op.output.name;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wsdl:definitions name="{name}" targetNamespace="{ns}{name}"
	xmlns:inns="{ns}{in_name}" xmlns:outns="{ns}{out_name}"
	xmlns:tns="{ns}{name}" xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
	xmlns:xsd="http://www.w3.org/2001/XMLSchema">
	<wsdl:types>
		<xsd:schema targetNamespace="{ns}{name}">
			<xsd:import namespace="{ns}{in_name}" schemaLocation="{in_name}.xsd" />
			<xsd:import namespace="{ns}{out_name}" schemaLocation="{out_name}.xsd" />
			<xsd:element name="{name}Req">
				<xsd:complexType>
					<xsd:sequence>
						<xsd:element name="input" type="inns:{in_name}" />
					</xsd:sequence>
				</xsd:complexType>
			</xsd:element>
			<xsd:element name="{name}Resp">
				<xsd:complexType>
					<xsd:sequence>
						<xsd:element name="output" type="outns:{out_name}" />
					</xsd:sequence>
				</xsd:complexType>
			</xsd:element>
		</xsd:schema>
	</wsdl:types>
	<wsdl:message name="{name}RequestMsg">
		<wsdl:part element="tns:{name}Req" name="{name}Parameters" />
	</wsdl:message>
	<wsdl:message name="{name}ResponseMsg">
		<wsdl:part element="tns:{name}Resp" name="{name}Result" />
	</wsdl:message>
	<wsdl:portType name="{name}">
		<wsdl:operation name="{name}Op">
			<wsdl:input message="tns:{name}RequestMsg" name="{name}Request" />
			<wsdl:output message="tns:{name}ResponseMsg" name="{name}Response" />
		</wsdl:operation>
	</wsdl:portType>
</wsdl:definitions>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, FieldType, Message};

    fn op() -> Operation {
        let f = |name: &str| Field {
            name: name.into(),
            ty: FieldType::String,
            pos: 0,
            width: 1,
            decimal_digits: 0,
        };
        Operation {
            name: "Echo".into(),
            input: Message {
                name: "Req".into(),
                fields: vec![f("a")],
                length: 1,
            },
            output: Message {
                name: "Resp".into(),
                fields: vec![f("c")],
                length: 1,
            },
        }
    }

    #[test]
    fn render_imports_both_message_namespaces() {
        let text = render(&op());
        assert!(text.contains(
            "<xsd:import namespace=\"http://cwf.example.org/Req\" schemaLocation=\"Req.xsd\" />"
        ));
        assert!(text.contains(
            "<xsd:import namespace=\"http://cwf.example.org/Resp\" schemaLocation=\"Resp.xsd\" />"
        ));
        assert!(text.contains("<wsdl:portType name=\"Echo\">"));
        assert!(text.contains("<wsdl:operation name=\"EchoOp\">"));
    }
}
