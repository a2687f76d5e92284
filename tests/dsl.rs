//! DSL unit tests: syntax (parse success/failure) and semantics (offsets,
//! lengths, validation).

use cwfc::{compile, FieldType, MemSink, SyntaxError, Unit};

const ECHO: &str = r#"
operation Echo {
  in: Req {
    a string(3);
    b int(2);
  }
  out: Resp {
    c decimal(4,1);
  }
}
"#;

fn compile_ok(src: &str) -> Unit {
    let mut sink = MemSink::new();
    compile(src, "test.cwf", &mut sink).expect("compile")
}

fn compile_err(src: &str) -> cwfc::CompileError {
    let mut sink = MemSink::new();
    compile(src, "test.cwf", &mut sink).expect_err("should fail")
}

// ==================== Valid programs ====================

#[test]
fn parse_echo_operation() {
    let Unit::Operation(op) = compile_ok(ECHO) else {
        panic!("expected operation unit");
    };
    assert_eq!(op.name, "Echo");
    assert_eq!(op.input.name, "Req");
    assert_eq!(op.output.name, "Resp");

    let a = &op.input.fields[0];
    assert_eq!((a.name.as_str(), a.ty, a.pos, a.width), ("a", FieldType::String, 0, 3));
    let b = &op.input.fields[1];
    assert_eq!((b.name.as_str(), b.ty, b.pos, b.width), ("b", FieldType::Int, 3, 2));
    assert_eq!(op.input.length, 5);

    let c = &op.output.fields[0];
    assert_eq!(c.ty, FieldType::Decimal);
    assert_eq!((c.pos, c.width, c.decimal_digits), (0, 4, 1));
    assert_eq!(op.output.length, 4);
}

#[test]
fn offsets_are_prefix_sums() {
    let src = r#"
message Wide {
  a int(10);
  b decimal(7,2);
  c string(35);
  d int(1);
}
"#;
    let Unit::Message(msg) = compile_ok(src) else {
        panic!("expected bare message unit");
    };
    assert_eq!(msg.fields[0].pos, 0);
    for i in 1..msg.fields.len() {
        assert_eq!(
            msg.fields[i].pos,
            msg.fields[i - 1].pos + msg.fields[i - 1].width
        );
    }
    let last = msg.fields.last().expect("fields");
    assert_eq!(msg.length, last.pos + last.width);
    assert_eq!(msg.length, 53);
}

#[test]
fn fields_keep_declaration_order() {
    let src = r#"
message Ordered {
  z string(1);
  y string(1);
  x string(1);
}
"#;
    let Unit::Message(msg) = compile_ok(src) else {
        panic!("expected bare message unit");
    };
    let names: Vec<&str> = msg.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["z", "y", "x"]);
}

#[test]
fn comments_are_transparent() {
    let src = r#"
// leading comment
message M { /* inline */
  a int(2); // trailing
}
"#;
    let Unit::Message(msg) = compile_ok(src) else {
        panic!("expected bare message unit");
    };
    assert_eq!(msg.fields.len(), 1);
    assert_eq!(msg.length, 2);
}

#[test]
fn duplicate_field_names_are_not_rejected() {
    // Uniqueness is the XSD consumer's concern, not the grammar's.
    let src = "message Dup { a int(1); a int(2); }";
    let Unit::Message(msg) = compile_ok(src) else {
        panic!("expected bare message unit");
    };
    assert_eq!(msg.fields.len(), 2);
    assert_eq!(msg.fields[1].pos, 1);
}

// ==================== Invalid programs ====================

#[test]
fn missing_semicolon_is_fatal() {
    let err = compile_err("message M { a int(2) }");
    let msg = err.to_string();
    assert!(msg.contains("expected ';'"), "got: {msg}");
    assert!(msg.contains("1:22"), "position in diagnostic: {msg}");
}

#[test]
fn empty_message_is_rejected() {
    let err = compile_err("message M { }");
    assert!(err.to_string().contains("expected identifier"));
}

#[test]
fn unknown_field_type_is_rejected() {
    let err = compile_err("message M { a float(4); }");
    assert!(err.to_string().contains("field type"));
}

#[test]
fn decimal_digits_must_be_less_than_width() {
    let err = compile_err("message M { a decimal(3,3); }");
    assert!(matches!(
        err,
        cwfc::CompileError::Syntax(SyntaxError::DecimalDigits {
            width: 3,
            digits: 3,
            ..
        })
    ));
    // The boundary case decimal(w, w-1) is fine.
    compile_ok("message M { a decimal(3,2); }");
}

#[test]
fn trailing_input_is_rejected() {
    let err = compile_err("message M { a int(1); } message N { b int(1); }");
    assert!(err.to_string().contains("expected end of input"));
}

#[test]
fn unit_must_start_with_operation_or_message() {
    let err = compile_err("banana M { a int(1); }");
    assert!(err.to_string().contains("'operation' or 'message'"));
}

#[test]
fn stray_character_reports_position() {
    let err = compile_err("message M {\n  a int(1)$;\n}");
    let msg = err.to_string();
    assert!(msg.contains("2:11"), "got: {msg}");
    assert!(msg.contains("stray character"), "got: {msg}");
}

#[test]
fn operation_missing_out_section() {
    let src = r#"
operation Half {
  in: Req { a int(1); }
}
"#;
    let err = compile_err(src);
    assert!(err.to_string().contains("expected 'out'"));
}
