use std::any::Any;
use vimson::{from_str, Error, Generator, ObjectCodec, Result, Value};

#[test]
fn test_write_flat_dictionary() {
    let mut generator = Generator::new();
    generator.write_start_dict().unwrap();
    generator.write_str_field("bar", "baz").unwrap();
    generator.write_f64_field("boo", 0.0).unwrap();
    generator.write_bool_field("foo", false).unwrap();
    generator.write_end_dict().unwrap();

    assert_eq!(generator.as_str(), "{'bar':'baz','boo':0.0,'foo':0,}");
}

#[test]
fn test_write_flat_list() {
    let mut generator = Generator::new();
    generator.write_start_list().unwrap();
    generator.write_str("hoge").unwrap();
    generator.write_i64(1).unwrap();
    generator.write_f64(0.0).unwrap();
    generator.write_bool(false).unwrap();
    generator.write_end_list().unwrap();

    assert_eq!(generator.as_str(), "['hoge',1,0.0,0,]");
}

#[test]
fn test_write_nested_list() {
    let mut generator = Generator::new();
    generator.write_start_list().unwrap();
    generator.write_str("hoge").unwrap();
    generator.write_start_list().unwrap();
    generator.write_bool(false).unwrap();
    generator.write_end_list().unwrap();
    generator.write_end_list().unwrap();

    assert_eq!(generator.as_str(), "['hoge',[0,],]");
}

#[test]
fn test_write_nested_dictionary() {
    let mut generator = Generator::new();
    generator.write_start_dict().unwrap();
    generator.write_bool_field("boo", true).unwrap();
    generator.write_dict_field_start("foo").unwrap();
    generator.write_bool_field("pii", false).unwrap();
    generator.write_end_dict().unwrap();
    generator.write_end_dict().unwrap();

    assert_eq!(generator.as_str(), "{'boo':1,'foo':{'pii':0,},}");
}

#[test]
fn test_write_list_field() {
    let mut generator = Generator::new();
    generator.write_start_dict().unwrap();
    generator.write_list_field_start("items").unwrap();
    generator.write_str("hoge").unwrap();
    generator.write_end_list().unwrap();
    generator.write_end_dict().unwrap();

    assert_eq!(generator.as_str(), "{'items':['hoge',],}");
}

#[test]
fn test_top_level_scalar_has_no_comma() {
    let mut generator = Generator::new();
    generator.write_bool(true).unwrap();
    assert_eq!(generator.into_inner(), "1");

    let mut generator = Generator::new();
    generator.write_str("hello").unwrap();
    assert_eq!(generator.into_inner(), "'hello'");
}

#[test]
fn test_integer_widths() {
    let mut generator = Generator::new();
    generator.write_start_list().unwrap();
    generator.write_i8(-8).unwrap();
    generator.write_i16(-16).unwrap();
    generator.write_i32(-32).unwrap();
    generator.write_i64(-64).unwrap();
    generator.write_end_list().unwrap();

    assert_eq!(generator.as_str(), "[-8,-16,-32,-64,]");
}

#[test]
fn test_float_widths() {
    let mut generator = Generator::new();
    generator.write_start_list().unwrap();
    generator.write_f32(0.5).unwrap();
    generator.write_f64(2.25).unwrap();
    generator.write_f64(-3.0).unwrap();
    generator.write_end_list().unwrap();

    assert_eq!(generator.as_str(), "[0.5,2.25,-3.0,]");
}

#[test]
fn test_unsigned_widths() {
    let mut generator = Generator::new();
    generator.write_start_list().unwrap();
    generator.write_u8(255).unwrap();
    generator.write_u16(65535).unwrap();
    generator.write_u32(4294967295).unwrap();
    generator.write_end_list().unwrap();

    assert_eq!(generator.as_str(), "[255,65535,4294967295,]");
}

#[test]
fn test_write_raw_is_comma_terminated_like_a_value() {
    let mut generator = Generator::new();
    generator.write_start_list().unwrap();
    generator.write_raw("0x10").unwrap();
    generator.write_i64(2).unwrap();
    generator.write_end_list().unwrap();

    assert_eq!(generator.as_str(), "[0x10,2,]");
}

#[test]
fn test_mismatched_end_is_a_protocol_violation() {
    let mut generator = Generator::new();
    generator.write_start_dict().unwrap();
    assert_eq!(
        generator.write_end_list(),
        Err(Error::ProtocolViolation {
            call: "write_end_list",
            open: "dictionary",
        })
    );
}

#[test]
fn test_end_at_top_level_is_a_protocol_violation() {
    let mut generator = Generator::new();
    assert_eq!(
        generator.write_end_dict(),
        Err(Error::ProtocolViolation {
            call: "write_end_dict",
            open: "nothing",
        })
    );
}

#[test]
fn test_write_object_without_codec() {
    let mut generator = Generator::new();
    assert_eq!(generator.write_object(&1i64), Err(Error::UnconfiguredCodec));
}

struct TupleCodec;

impl ObjectCodec for TupleCodec {
    fn write_object(&self, generator: &mut Generator, value: &dyn Any) -> Result<()> {
        let pair = value
            .downcast_ref::<(String, i64)>()
            .ok_or_else(|| Error::unsupported_type("unknown host value"))?;
        generator.write_start_list()?;
        generator.write_str(&pair.0)?;
        generator.write_i64(pair.1)?;
        generator.write_end_list()
    }
}

#[test]
fn test_codec_hook() {
    let mut generator = Generator::with_codec(Box::new(TupleCodec));
    generator.write_object(&("hoge".to_string(), 7i64)).unwrap();
    assert_eq!(generator.as_str(), "['hoge',7,]");
}

#[test]
fn test_codec_hook_as_dictionary_field() {
    let mut generator = Generator::new();
    generator.set_codec(Box::new(TupleCodec));
    generator.write_start_dict().unwrap();
    generator
        .write_object_field("pair", &("a".to_string(), 1i64))
        .unwrap();
    generator.write_end_dict().unwrap();
    assert_eq!(generator.as_str(), "{'pair':['a',1,],}");
}

#[test]
fn test_single_quote_in_string_fails() {
    let mut generator = Generator::new();
    assert_eq!(
        generator.write_str("don't"),
        Err(Error::InvalidString { ch: '\'' })
    );
}

#[test]
fn test_single_quote_in_field_name_fails() {
    let mut generator = Generator::new();
    generator.write_start_dict().unwrap();
    assert_eq!(
        generator.write_field_name("don't"),
        Err(Error::InvalidString { ch: '\'' })
    );
}

#[test]
fn test_end_to_end_round_trip() {
    let mut generator = Generator::new();
    generator.write_start_dict().unwrap();
    generator.write_list_field_start("a").unwrap();
    generator.write_end_list().unwrap();
    generator.write_list_field_start("b").unwrap();
    generator.write_start_list().unwrap();
    generator.write_end_list().unwrap();
    generator.write_start_list().unwrap();
    generator.write_end_list().unwrap();
    generator.write_end_list().unwrap();
    generator.write_end_dict().unwrap();

    let text = generator.into_inner();
    assert_eq!(text, "{'a':[],'b':[[],[],],}");

    let value: Value = from_str(&text).unwrap();
    let dict = value.as_dict().unwrap();
    assert_eq!(dict.get("a"), Some(&Value::List(vec![])));
    assert_eq!(
        dict.get("b"),
        Some(&Value::List(vec![Value::List(vec![]), Value::List(vec![])]))
    );
}
