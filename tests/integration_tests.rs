use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vimson::{from_str, to_string, to_value, to_writer, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let text = to_string(original).unwrap();
    let deserialized: T = from_str(&text).unwrap();
    assert_eq!(*original, deserialized);
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        "{'id':123,'name':'Alice','active':1,'tags':['admin','developer',],}"
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    };

    assert_roundtrip(&order);
}

#[test]
fn test_list_of_structs() {
    let products = vec![
        Product {
            sku: "A001".to_string(),
            price: 10.99,
            quantity: 5,
        },
        Product {
            sku: "B002".to_string(),
            price: 15.99,
            quantity: 3,
        },
    ];

    assert_roundtrip(&products);
}

#[test]
fn test_primitives() {
    assert_roundtrip(&42i32);
    assert_roundtrip(&3.5f64);
    assert_roundtrip(&true);
    assert_roundtrip(&false);
    assert_roundtrip(&"hello world".to_string());
    assert_roundtrip(&vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_numbers() {
    assert_roundtrip(&127i8);
    assert_roundtrip(&-128i8);
    assert_roundtrip(&32767i16);
    assert_roundtrip(&-2147483648i32);
    assert_roundtrip(&9223372036854775807i64);
    assert_roundtrip(&-9223372036854775807i64);

    assert_roundtrip(&255u8);
    assert_roundtrip(&65535u16);
    assert_roundtrip(&4294967295u32);

    assert_roundtrip(&0.0f32);
    assert_roundtrip(&3.5f32);
    assert_roundtrip(&4.25f64);
    assert_roundtrip(&-5.75f64);
}

#[test]
fn test_hash_map() {
    let mut map = HashMap::new();
    map.insert("one".to_string(), 1i64);
    map.insert("two".to_string(), 2i64);

    assert_roundtrip(&map);
}

#[test]
fn test_non_string_map_key_fails() {
    let mut map = HashMap::new();
    map.insert(1i64, "one".to_string());
    assert!(to_string(&map).is_err());
}

#[test]
fn test_empty_collections() {
    let empty_vec: Vec<i32> = vec![];
    let text = to_string(&empty_vec).unwrap();
    assert_eq!(text, "[]");
    assert_roundtrip(&empty_vec);

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Empty {}

    let text = to_string(&Empty {}).unwrap();
    assert_eq!(text, "{}");
    assert_roundtrip(&Empty {});
}

#[test]
fn test_strings_without_quotes() {
    let strings = vec![
        "".to_string(),
        "hello, world".to_string(),
        "a:b".to_string(),
        "{not a dict}".to_string(),
        "[not a list]".to_string(),
        "0778".to_string(),
        "line1\nline2".to_string(),
        "\\backslash".to_string(),
        "\u{3042}\u{3044}".to_string(),
    ];

    for s in strings {
        assert_roundtrip(&s);
    }
}

#[test]
fn test_string_with_single_quote_fails() {
    assert!(to_string(&"it's".to_string()).is_err());
}

#[test]
fn test_tuples() {
    let pair = (7i64, "hoge".to_string());
    let text = to_string(&pair).unwrap();
    assert_eq!(text, "[7,'hoge',]");
    assert_roundtrip(&pair);
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Shape {
    Point,
    Circle(f64),
    Segment(f64, f64),
    Rect { w: f64, h: f64 },
}

#[test]
fn test_enum_variants() {
    let text = to_string(&Shape::Point).unwrap();
    assert_eq!(text, "'Point'");
    assert_roundtrip(&Shape::Point);

    let text = to_string(&Shape::Circle(2.5)).unwrap();
    assert_eq!(text, "{'Circle':2.5,}");
    assert_roundtrip(&Shape::Circle(2.5));

    let text = to_string(&Shape::Segment(1.5, 2.5)).unwrap();
    assert_eq!(text, "{'Segment':[1.5,2.5,],}");
    assert_roundtrip(&Shape::Segment(1.5, 2.5));

    let text = to_string(&Shape::Rect { w: 1.5, h: 2.5 }).unwrap();
    assert_eq!(text, "{'Rect':{'w':1.5,'h':2.5,},}");
    assert_roundtrip(&Shape::Rect { w: 1.5, h: 2.5 });
}

#[test]
fn test_newtype_struct_is_transparent() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Meters(i64);

    let text = to_string(&Meters(5)).unwrap();
    assert_eq!(text, "5");
    assert_roundtrip(&Meters(5));
}

#[test]
fn test_option_some_is_transparent() {
    let data = Some(42i64);
    let text = to_string(&data).unwrap();
    assert_eq!(text, "42");
    let back: Option<i64> = from_str(&text).unwrap();
    assert_eq!(back, Some(42));
}

#[test]
fn test_option_none_fails_to_serialize() {
    let data: Option<i64> = None;
    assert!(to_string(&data).is_err());
}

#[test]
fn test_unit_fails_to_serialize() {
    assert!(to_string(&()).is_err());
}

#[test]
fn test_to_value_matches_to_string() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string()],
    };

    let value = to_value(&user).unwrap();
    match &value {
        Value::Dict(dict) => {
            assert_eq!(dict.get("id"), Some(&Value::Int(123)));
            assert_eq!(dict.get("name"), Some(&Value::Str("Alice".to_string())));
            assert_eq!(dict.get("active"), Some(&Value::Bool(true)));
            assert_eq!(
                dict.get("tags"),
                Some(&Value::List(vec![Value::Str("admin".to_string())]))
            );
        }
        _ => panic!("Expected dictionary"),
    }

    // Writing the tree and serializing the struct produce the same text.
    let mut generator = vimson::Generator::new();
    generator.write_value(&value).unwrap();
    assert_eq!(generator.into_inner(), to_string(&user).unwrap());
}

#[test]
fn test_booleans_come_back_as_integers() {
    let text = to_string(&true).unwrap();
    assert_eq!(text, "1");

    // Dynamically typed reads see the integer; typed reads recover the bool.
    let dynamic: Value = from_str(&text).unwrap();
    assert_eq!(dynamic, Value::Int(1));
    let typed: bool = from_str(&text).unwrap();
    assert!(typed);
}

#[test]
fn test_bool_from_out_of_range_integer_fails() {
    assert!(from_str::<bool>("2").is_err());
}

#[test]
fn test_struct_field_type_mismatch() {
    assert!(from_str::<User>("{'id':'abc','name':'x','active':1,'tags':[],}").is_err());
}

#[test]
fn test_to_writer() {
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &vec![1i64, 2]).unwrap();
    assert_eq!(buffer, b"[1,2,]");
}

#[test]
fn test_from_reader_and_slice() {
    let bytes = b"{'id':1,'name':'x','active':0,'tags':[],}";
    let user: User = vimson::from_slice(bytes).unwrap();
    assert_eq!(user.id, 1);
    assert!(!user.active);

    let cursor = std::io::Cursor::new(bytes.to_vec());
    let user: User = vimson::from_reader(cursor).unwrap();
    assert_eq!(user.name, "x");
}
