//! Marshaller-source emitter: renders the Java DataHandler for an
//! [`Operation`].
//!
//! The generated class converts between the fixed-width wire record and a
//! structured DataObject at the service integration boundary:
//!
//! - `unpack` slices the wire string at each input field's `[pos, pos+width)`
//!   span (inserting the implied decimal point for decimal fields) and feeds
//!   the pieces to an XML format string built here, one `%s` per field.
//! - The outbound path packs a DataObject with a printf format string built
//!   from the output message's [`printf_flags`](crate::model::Message::printf_flags),
//!   reproducing a record of exactly the output message's length.

use crate::model::{FieldType, Message, Operation};
use crate::xsd::NAMESPACE_BASE;
use std::fmt::Write;

/// True when `i` indexes the last element of `items`. Used to suppress the
/// trailing separator when joining generated argument lists.
pub fn is_last<T>(items: &[T], i: usize) -> bool {
    i + 1 == items.len()
}

/// The `String.format` template for the inbound XML document: a fixed
/// prologue naming the input message's namespace, then one `%s`-valued
/// element per field.
fn xml_msg_fmt(input: &Message) -> String {
    let mut out = String::new();
    out.push_str("\tprivate static final String XMLMsgFmt = new StringBuilder()\n");
    out.push_str("\t.append(\"<?xml version=\\\"1.0\\\" encoding=\\\"UTF-8\\\"?>\\n\")\n");
    let _ = writeln!(
        out,
        "\t.append(\"<object xmlns:ns2=\\\"{}{}\\\" xmlns:xsd=\\\"http://www.w3.org/2001/XMLSchema\\\" xmlns:xsi=\\\"http://www.w3.org/2001/XMLSchema-instance\\\" xsi:type=\\\"ns2:{}\\\">\\n\")",
        NAMESPACE_BASE, input.name, input.name
    );
    for f in &input.fields {
        let _ = writeln!(
            out,
            "\t.append(\"\\t<{}>%s</{}>\\n\")",
            f.name, f.name
        );
    }
    out.push_str("\t.append(\"</object>\")\n");
    out.push_str("\t.toString();\n");
    out
}

/// One unpack call per input field, comma-separated. Decimal fields get the
/// decimal-point-inserting variant; everything else is a plain substring.
fn unpack_args(input: &Message) -> String {
    let mut out = String::new();
    for (i, f) in input.fields.iter().enumerate() {
        match f.ty {
            FieldType::Decimal => {
                let _ = write!(
                    out,
                    "\n\t\t\tunpackDecimal(cwf, {}, {}, {})",
                    f.pos, f.width, f.decimal_digits
                );
            }
            FieldType::Int | FieldType::String => {
                let _ = write!(out, "\n\t\t\tunpackString(cwf, {}, {})", f.pos, f.width);
            }
        }
        if !is_last(&input.fields, i) {
            out.push(',');
        }
    }
    out
}

/// One DataObject getter per output field, comma-separated, typed through
/// the closed `FieldType -> accessor` mapping.
fn pack_args(output: &Message) -> String {
    let mut out = String::new();
    for (i, f) in output.fields.iter().enumerate() {
        let _ = write!(out, "\n\t\t\t\tdobj.get{}({})", f.ty.data_object_type(), i);
        if !is_last(&output.fields, i) {
            out.push(',');
        }
    }
    out
}

pub fn render(op: &Operation) -> String {
    let name = &op.name;
    let in_len = op.input.length;
    let pack_fmt = op.output.printf_flags();
    let xml_fmt = xml_msg_fmt(&op.input);
    let unpack = unpack_args(&op.input);
    let pack = pack_args(&op.output);

    format!(
        r#"package cwf;

import java.util.Map;
import java.io.InputStream;
import java.io.OutputStream;
import java.io.ByteArrayInputStream;
import java.io.Reader;
import java.io.Writer;
import com.ibm.websphere.sca.ServiceManager;
import com.ibm.websphere.bo.BOXMLDocument;
import com.ibm.websphere.bo.BOXMLSerializer;
import commonj.sdo.DataObject;
import commonj.connector.runtime.DataHandler;
import commonj.connector.runtime.DataHandlerException;

public class {name}DH implements DataHandler {{
	private Map context;

	private static final long serialVersionUID = 1314045187L;

{xml_fmt}
	public static String unpackDecimal(String cwfmsg, int pos, int flen,
			int declen) {{
		String intpart = cwfmsg.substring(pos, pos + flen - declen);
		return intpart + "."
				+ cwfmsg.substring(pos + flen - declen, pos + flen);
	}}

	public static String unpackString(String cwfmsg, int pos, int flen) {{
		return cwfmsg.substring(pos, pos + flen);
	}}

	public static String unpack(String cwf) {{
		return String.format(XMLMsgFmt,{unpack}
		);
	}}

	private DataObject toDataObject(String xml) throws java.io.IOException {{
		BOXMLSerializer xmlser = (BOXMLSerializer) ServiceManager.INSTANCE
				.locateService("com/ibm/websphere/bo/BOXMLSerializer");
		BOXMLDocument xmldoc = xmlser
				.readXMLDocument(new ByteArrayInputStream(xml.getBytes()));
		return xmldoc.getDataObject();
	}}

	private String pack(DataObject dobj) {{
		return String.format("{pack_fmt}",{pack}
				);
	}}

	// Transform between the CWF wire record and a DataObject.
	public Object transform(Object source, Class target, Object options)
			throws DataHandlerException {{
		if ((source == null) || (target == null))
			return null;
		if (target == DataObject.class) {{
			if (source instanceof InputStream) {{
				byte b[] = new byte[{in_len}];
				try {{
					int n = ((InputStream) source).read(b);
					if ((n > 0) && (n < b.length)) {{
						throw new DataHandlerException(
								"message too short length=" + n);
					}}
					return toDataObject(unpack(new String(b)));
				}} catch (java.io.IOException e) {{
					throw new DataHandlerException(e);
				}}
			}} else if (source instanceof Reader) {{
				char c[] = new char[{in_len}];
				try {{
					int n = ((Reader) source).read(c);
					if ((n > 0) && (n < c.length)) {{
						throw new DataHandlerException(
								"message too short length=" + n);
					}}
					return toDataObject(unpack(new String(c)));
				}} catch (java.io.IOException e) {{
					throw new DataHandlerException(e);
				}}
			}}
		}} else if (source instanceof DataObject) {{
			return pack((DataObject) source);
		}}
		throw new DataHandlerException("Transformation not supported from "
				+ source.getClass().getName() + " to "
				+ target.getClass().getName());
	}}

	public void transformInto(Object source, Object target, Object options)
			throws DataHandlerException {{
		if ((source == null) || (target == null))
			return;

		if (source instanceof DataObject) {{
			String cwf = pack((DataObject) source);
			if (target instanceof OutputStream) {{
				try {{
					((OutputStream) target).write(cwf.getBytes());
					return;
				}} catch (java.io.IOException e) {{
					throw new DataHandlerException(e);
				}}
			}} else if (target instanceof Writer) {{
				try {{
					((Writer) target).write(cwf);
					return;
				}} catch (java.io.IOException e) {{
					throw new DataHandlerException(e);
				}}
			}}
		}}

		throw new DataHandlerException("Transformation not supported from "
				+ source.getClass().getName() + " to "
				+ target.getClass().getName());
	}}

	public void setBindingContext(Map context) {{
		this.context = context;
	}}

}}
"#
    )
}
