//! End-to-end coding of derived object graphs.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::codec::{
    DecodeProcessor, Decoder, EncodeProcessor, Encoder, field_type_for_encoded, from_dictionary,
    from_dictionary_as, to_dictionary,
};
use crate::derive::Reflect;
use crate::info::{Capabilities, ClassInfo, FieldDescriptor, FieldType, Typed};
use crate::ops::{List, Map, MapIter, MapMut, Object};
use crate::registry::{ClassMeta, ClassRegistry, FromType, GetClassMeta, TypeTraitDefault, TypeTraitFromReflect};
use crate::value::{CLASS_KEY, Dictionary, Value};
use crate::{CodingConfig, CodingError, FromReflect, Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(structure, default)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(structure, default)]
struct Rect(Point, Point);

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(default)]
struct Address {
    street: String,
    number: u32,
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(default)]
struct Person {
    name: String,
    age: u32,
    nickname: Option<String>,
    address: Option<Address>,
    friends: Vec<Person>,
    scores: BTreeMap<String, i64>,
    location: Point,
    #[reflect(rename = "isActive")]
    active: bool,
    #[reflect(skip)]
    cache: Vec<u8>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Tagged {
    name: String,
    address: Address,
    tags: Vec<String>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default, class_name = "Shape.Circle")]
struct Circle {
    radius: f64,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Square {
    side: f64,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Canvas {
    bounds: Rect,
    samples: Box<[i32]>,
}

/// Registered without `default`, so it cannot be decoded polymorphically.
#[derive(Reflect, Debug, PartialEq)]
struct Frozen {
    id: u8,
}

/// Free-form metadata, kept as plain values.
#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Metadata {
    extra: BTreeMap<String, Value>,
}

fn person() -> Person {
    let friend = Person {
        name: String::from("Grace"),
        age: 41,
        location: Point { x: 0.0, y: 0.25 },
        ..Person::default()
    };
    Person {
        name: String::from("Ada"),
        age: 36,
        nickname: Some(String::from("Countess")),
        address: Some(Address {
            street: String::from("St James's Square"),
            number: 12,
        }),
        friends: vec![friend],
        scores: BTreeMap::from([(String::from("math"), 99), (String::from("poetry"), -3)]),
        location: Point { x: 1.5, y: -2.0 },
        active: true,
        cache: vec![1, 2, 3],
    }
}

fn registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    registry.register::<Person>();
    registry.register::<Tagged>();
    registry.register::<Circle>();
    registry.register::<Square>();
    registry.register::<Canvas>();
    registry.register::<Frozen>();
    registry.register::<Shop>();
    registry.register::<Metadata>();
    registry
}

// -----------------------------------------------------------------------------
// Round trip

#[test]
fn round_trip() {
    let registry = registry();
    let original = person();

    let dict = to_dictionary(&original).unwrap();
    let decoded: Person = from_dictionary_as(&registry, &dict).unwrap();

    // skipped fields come back as `Default`
    assert_eq!(decoded, Person { cache: Vec::new(), ..original });
    assert_eq!(to_dictionary(&decoded).unwrap(), dict);
}

#[test]
fn dictionary_shape() {
    let dict = to_dictionary(&person()).unwrap();

    assert_eq!(dict.class_name(), Some("Person"));
    assert_eq!(dict.get("name"), Some(&Value::from("Ada")));
    assert_eq!(dict.get("age"), Some(&Value::from(36_u32)));
    assert_eq!(dict.get("isActive"), Some(&Value::Boolean(true)));
    assert_eq!(dict.get("location"), Some(&Value::from("{1.5, -2}")));
    assert!(!dict.contains_key("active"));
    assert!(!dict.contains_key("cache"));

    let address = dict.get("address").and_then(Value::as_dictionary).unwrap();
    assert_eq!(address.class_name(), Some("Address"));

    let friends = dict.get("friends").and_then(Value::as_array).unwrap();
    let friend = friends[0].as_dictionary().unwrap();
    assert_eq!(friend.class_name(), Some("Person"));
    // absent optional fields are omitted
    assert!(!friend.contains_key("nickname"));
    assert!(!friend.contains_key("address"));
    assert_eq!(friend.get("friends"), Some(&Value::Array(Vec::new())));

    let scores = dict.get("scores").and_then(Value::as_dictionary).unwrap();
    assert_eq!(scores.get("poetry"), Some(&Value::from(-3_i64)));
    assert_eq!(scores.class_name(), None);
}

#[test]
fn encoded_values_classify_as_declared() {
    fn check(object: &dyn Object) {
        let dict = Encoder::new().dictionary_representation(object).unwrap();
        for (key, value) in &dict {
            if key == CLASS_KEY {
                continue;
            }
            let declared = object.field_type_for_key(key).unwrap();
            let guessed = field_type_for_encoded(value);
            assert_eq!(guessed.family(), declared.family(), "{key}");
            if !declared.is_collection() || declared.is_mutable() {
                assert_eq!(guessed, declared, "{key}");
            }
        }
    }

    check(&person());

    let canvas = Canvas {
        bounds: Rect(Point { x: 0.0, y: 0.0 }, Point { x: 4.0, y: 3.0 }),
        samples: Box::from([1, 2, 3]),
    };
    check(&canvas);

    // the encoded form carries no mutability
    let dict = to_dictionary(&canvas).unwrap();
    assert_eq!(canvas.field_type_for_key("samples"), Some(FieldType::CollectionArray));
    assert_eq!(
        dict.get("samples").map(field_type_for_encoded),
        Some(FieldType::CollectionArrayMutable)
    );
}

#[test]
fn scenario_dictionary() {
    let tagged = Tagged {
        name: String::from("Ann"),
        address: Address {
            street: String::from("Elm"),
            number: 5,
        },
        tags: vec![String::from("a"), String::from("b")],
    };

    let address: Dictionary = [
        (CLASS_KEY, Value::from("Address")),
        ("street", Value::from("Elm")),
        ("number", Value::from(5_i32)),
    ]
    .into_iter()
    .collect();
    let expected: Dictionary = [
        (CLASS_KEY, Value::from("Tagged")),
        ("name", Value::from("Ann")),
        ("address", Value::from(address)),
        ("tags", Value::Array(vec![Value::from("a"), Value::from("b")])),
    ]
    .into_iter()
    .collect();

    assert_eq!(to_dictionary(&tagged).unwrap(), expected);
}

#[test]
fn structures_and_immutable_collections() {
    let registry = registry();
    let canvas = Canvas {
        bounds: Rect(Point { x: 0.0, y: 0.0 }, Point { x: 2.0, y: 3.5 }),
        samples: Box::new([3, -1, 4]),
    };

    let dict = to_dictionary(&canvas).unwrap();
    assert_eq!(dict.get("bounds"), Some(&Value::from("{{0, 0}, {2, 3.5}}")));

    let decoded: Canvas = from_dictionary_as(&registry, &dict).unwrap();
    assert_eq!(decoded, canvas);
}

// -----------------------------------------------------------------------------
// Polymorphism

#[test]
fn polymorphic_decode() {
    let registry = registry();

    let shapes = Value::Array(vec![
        Value::from(to_dictionary(&Circle { radius: 1.0 }).unwrap()),
        Value::from(to_dictionary(&Square { side: 2.0 }).unwrap()),
    ]);
    let decoded = Decoder::new(&registry)
        .decode(&shapes, FieldType::CollectionArrayMutable, None)
        .unwrap();

    let ReflectRef::List(list) = decoded.reflect_ref() else {
        panic!("expected a list, found {}", decoded.reflect_kind());
    };
    let names: Vec<&str> = list.iter().map(|shape| shape.class_name()).collect();
    assert_eq!(names, ["Shape.Circle", "Square"]);
    assert_eq!(
        list.get(1).and_then(|shape| shape.downcast_ref::<Square>()),
        Some(&Square { side: 2.0 })
    );

    let circle = from_dictionary(&registry, &to_dictionary(&Circle { radius: 4.0 }).unwrap()).unwrap();
    assert_eq!(circle.take::<Circle>().unwrap(), Circle { radius: 4.0 });
}

// -----------------------------------------------------------------------------
// Errors

#[test]
fn entry_point_errors() {
    let registry = registry();
    let mut decoder = Decoder::new(&registry);

    assert_eq!(decoder.object_with_dictionary(None).unwrap_err(), CodingError::NilInput);

    assert_eq!(
        decoder.object_with_dictionary(Some(&Dictionary::new())).unwrap_err(),
        CodingError::MissingClassKey
    );

    let mut unknown = Dictionary::new();
    unknown.insert(CLASS_KEY, "Unknown");
    assert_eq!(
        decoder.object_with_dictionary(Some(&unknown)).unwrap_err(),
        CodingError::UnknownClass {
            class_name: String::from("Unknown")
        }
    );

    let frozen = to_dictionary(&Frozen { id: 1 }).unwrap();
    assert_eq!(
        decoder.object_with_dictionary(Some(&frozen)).unwrap_err(),
        CodingError::NotConstructible {
            class_name: String::from("Frozen")
        }
    );

    let square = to_dictionary(&Square { side: 1.0 }).unwrap();
    assert_eq!(
        decoder.object_with_dictionary_as::<Circle>(&square).unwrap_err(),
        CodingError::MismatchedFieldType {
            field_type: FieldType::CustomObject,
            found: "Square",
        }
    );
}

#[test]
fn field_errors() {
    let registry = registry();
    let dict = to_dictionary(&person()).unwrap();

    let mut malformed = dict.clone();
    malformed.insert("location", "{1, oops}");
    assert_eq!(
        from_dictionary(&registry, &malformed).unwrap_err(),
        CodingError::MalformedStructureEncoding {
            input: String::from("{1, oops}")
        }
    );

    let mut wrong_scalar = dict.clone();
    wrong_scalar.insert("age", "old");
    assert_eq!(
        from_dictionary(&registry, &wrong_scalar).unwrap_err(),
        CodingError::TargetFieldNotAssignable {
            class_name: String::from("Person"),
            field: String::from("age"),
        }
    );

    let mut wrong_shape = dict;
    wrong_shape.insert("address", 3_i32);
    assert_eq!(
        from_dictionary(&registry, &wrong_shape).unwrap_err(),
        CodingError::MismatchedFieldType {
            field_type: FieldType::CustomObject,
            found: "Integer",
        }
    );
}

#[test]
fn failed_apply_leaves_target_unchanged() {
    let registry = registry();
    let mut decoder = Decoder::new(&registry);
    let before = Person {
        age: 1,
        ..Person::default()
    };
    let mut target = before.clone();

    // `age` is assignable and sorts before the bad `name`
    let mut dict = Dictionary::new();
    dict.insert(CLASS_KEY, "Person");
    dict.insert("age", 99_i32);
    dict.insert("name", 3_i32);
    assert_eq!(
        decoder.apply_dictionary(&mut target, &dict).unwrap_err(),
        CodingError::TargetFieldNotAssignable {
            class_name: String::from("Person"),
            field: String::from("name"),
        }
    );
    assert_eq!(target, before);

    // a failure while decoding leaves it unchanged too
    dict.insert("name", "Ada");
    dict.insert("location", "{1, oops}");
    assert!(decoder.apply_dictionary(&mut target, &dict).is_err());
    assert_eq!(target, before);

    dict.remove("location");
    decoder.apply_dictionary(&mut target, &dict).unwrap();
    assert_eq!(target.age, 99);
    assert_eq!(target.name, "Ada");
}

#[test]
fn heterogeneous_values_round_trip() {
    let registry = registry();

    let mut nested = Dictionary::new();
    nested.insert("depth", 2_i32);
    nested.insert("tags", Value::Array(vec![Value::from("a"), Value::from("b")]));

    let original = Metadata {
        extra: BTreeMap::from([
            (
                String::from("list"),
                Value::Array(vec![Value::from(1_i32), Value::Array(vec![Value::from(true)])]),
            ),
            (String::from("dict"), Value::from(nested)),
            (String::from("s"), Value::from("{1, 2}")),
            (String::from("n"), Value::from(2.5_f64)),
        ]),
    };

    let dict = to_dictionary(&original).unwrap();
    let decoded: Metadata = from_dictionary_as(&registry, &dict).unwrap();
    assert_eq!(decoded, original);

    // a keyed collection of plain values can hold an object
    let mut with_object = dict.clone();
    let address = to_dictionary(&Address {
        street: String::from("Elm"),
        number: 5,
    })
    .unwrap();
    let mut extra = dict.get("extra").and_then(Value::as_dictionary).cloned().unwrap();
    extra.insert("home", address.clone());
    with_object.insert("extra", extra);

    let decoded: Metadata = from_dictionary_as(&registry, &with_object).unwrap();
    assert_eq!(decoded.extra.get("home"), Some(&Value::from(address)));
}

#[test]
fn schema_evolution() {
    let registry = registry();
    let mut dict = to_dictionary(&person()).unwrap();
    dict.insert("favouriteColour", "green");
    dict.remove("nickname");
    dict.remove("age");

    let decoded: Person = from_dictionary_as(&registry, &dict).unwrap();
    assert_eq!(decoded.nickname, None);
    assert_eq!(decoded.age, 0);
    assert_eq!(decoded.name, "Ada");
}

#[test]
fn depth_limit() {
    let registry = registry();
    let mut chain = Person::default();
    for _ in 0..4 {
        chain = Person {
            friends: vec![chain],
            ..Person::default()
        };
    }
    let config = CodingConfig::new().with_max_depth(3);

    let err = Encoder::new()
        .with_config(config)
        .dictionary_representation(&chain)
        .unwrap_err();
    assert_eq!(err, CodingError::DepthLimitExceeded { limit: 3 });

    let dict = to_dictionary(&chain).unwrap();
    let err = Decoder::new(&registry)
        .with_config(config)
        .object_with_dictionary(Some(&dict))
        .unwrap_err();
    assert_eq!(err, CodingError::DepthLimitExceeded { limit: 3 });
}

// -----------------------------------------------------------------------------
// Capability-based collections

/// A keyed collection unrelated to the standard maps.
#[derive(Default, Debug, PartialEq)]
struct Inventory {
    counts: BTreeMap<String, u32>,
}

impl Typed for Inventory {
    const FIELD_TYPE: FieldType = FieldType::CollectionHashMutable;
    const CLASS_NAME: &'static str = "Inventory";
    const CAPABILITIES: Capabilities = Capabilities::MAP.union(Capabilities::MAP_MUT);
}

impl Reflect for Inventory {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Map(self)
    }

    fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(Inventory {
            counts: self.counts.clone(),
        }))
    }
}

impl Map for Inventory {
    fn len(&self) -> usize {
        self.counts.len()
    }

    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.counts.get(key).map(|count| count as &dyn Reflect)
    }

    fn iter(&self) -> MapIter<'_> {
        MapIter::new(self.counts.iter().map(|(key, count)| (key.as_str(), count as &dyn Reflect)))
    }

    fn as_map_mut(&mut self) -> Option<&mut dyn MapMut> {
        Some(self)
    }
}

impl MapMut for Inventory {
    fn insert(&mut self, key: String, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let count = u32::take_from_reflect(value)?;
        self.counts.insert(key, count);
        Ok(())
    }
}

impl FromReflect for Inventory {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        let ReflectRef::Map(map) = reflect.reflect_ref() else {
            return None;
        };
        let counts = map
            .iter()
            .map(|(key, count)| Some((String::from(key), u32::from_reflect(count)?)))
            .collect::<Option<_>>()?;
        Some(Self { counts })
    }
}

impl GetClassMeta for Inventory {
    fn get_class_meta() -> Option<ClassMeta> {
        let mut meta = ClassMeta::of::<Self>();
        meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
        meta.insert_trait(<TypeTraitFromReflect as FromType<Self>>::from_type());
        Some(meta)
    }
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(default)]
struct Shop {
    owner: String,
    stock: Inventory,
}

#[test]
fn keyed_collection_into_other_class() {
    let registry = registry();
    let stock = BTreeMap::from([(String::from("apple"), 3_u32), (String::from("pear"), 0)]);

    let encoded = Encoder::new()
        .encode(&stock, FieldType::CollectionHashMutable)
        .unwrap();
    let decoded = Decoder::new(&registry)
        .decode(&encoded, FieldType::CollectionHashMutable, Some("Inventory"))
        .unwrap();

    let inventory = decoded.take::<Inventory>().unwrap();
    assert_eq!(inventory.counts, stock);
}

#[test]
fn declared_collection_class() {
    let registry = registry();
    let mut shop = Shop {
        owner: String::from("Bo"),
        ..Shop::default()
    };
    shop.stock.counts.insert(String::from("fig"), 7);

    let dict = to_dictionary(&shop).unwrap();
    let decoded: Shop = from_dictionary_as(&registry, &dict).unwrap();
    assert_eq!(decoded, shop);

    let mut bad = dict;
    let stock: Dictionary = [("fig", Value::from("many"))].into_iter().collect();
    bad.insert("stock", stock);
    assert_eq!(
        from_dictionary(&registry, &bad).unwrap_err(),
        CodingError::TargetFieldNotAssignable {
            class_name: String::from("Inventory"),
            field: String::from("fig"),
        }
    );
}

#[test]
fn missing_capability() {
    let registry = registry();
    let err = Decoder::new(&registry)
        .decode(
            &Value::Array(vec![Value::from(1_i32)]),
            FieldType::CollectionArrayMutable,
            Some("Inventory"),
        )
        .unwrap_err();
    assert_eq!(
        err,
        CodingError::UnsupportedCollectionCapability {
            class_name: String::from("Inventory"),
            required: FieldType::CollectionArrayMutable.required_capabilities(),
        }
    );
}

// -----------------------------------------------------------------------------
// Hooks

#[test]
fn decode_processor_override() {
    struct Upper;

    impl DecodeProcessor for Upper {
        fn try_decode(
            &mut self,
            value: &Value,
            field_type: FieldType,
            _class_hint: Option<&str>,
            _registry: &ClassRegistry,
        ) -> Option<Result<Box<dyn Reflect>, CodingError>> {
            if field_type != FieldType::Scalar {
                return None;
            }
            let s = value.as_str()?;
            Some(Ok(Box::new(Value::from(s.to_uppercase()))))
        }
    }

    let registry = registry();
    let dict = to_dictionary(&Address {
        street: String::from("Elm"),
        number: 5,
    })
    .unwrap();

    let mut upper = Upper;
    let address: Address = Decoder::with_processor(&registry, &mut upper)
        .object_with_dictionary_as(&dict)
        .unwrap();
    assert_eq!(address.street, "ELM");
    assert_eq!(address.number, 5);
}

#[test]
fn field_processor_override() {
    struct Redact;

    impl EncodeProcessor for Redact {
        fn try_encode(&self, _value: &dyn Reflect, _field_type: FieldType) -> Option<Result<Value, CodingError>> {
            None
        }

        fn try_encode_field(
            &self,
            owner: &dyn Object,
            key: &str,
            _value: &dyn Reflect,
            _field_type: FieldType,
        ) -> Option<Result<Value, CodingError>> {
            (owner.class_name() == "Person" && key == "name").then(|| Ok(Value::from("<redacted>")))
        }
    }

    let dict = Encoder::with_processor(&Redact)
        .dictionary_representation(&person())
        .unwrap();
    assert_eq!(dict.get("name"), Some(&Value::from("<redacted>")));
    assert_eq!(dict.get("age"), Some(&Value::from(36_u32)));

    let friend = dict
        .get("friends")
        .and_then(Value::as_array)
        .and_then(|friends| friends[0].as_dictionary())
        .unwrap();
    assert_eq!(friend.get("name"), Some(&Value::from("<redacted>")));

    let address = dict.get("address").and_then(Value::as_dictionary).unwrap();
    assert_eq!(address.get("street"), Some(&Value::from("St James's Square")));

    /// Swallows tokens, recording what was stored.
    #[derive(Default)]
    struct Vault(Vec<String>);

    impl DecodeProcessor for Vault {
        fn try_decode(
            &mut self,
            _value: &Value,
            _field_type: FieldType,
            _class_hint: Option<&str>,
            _registry: &ClassRegistry,
        ) -> Option<Result<Box<dyn Reflect>, CodingError>> {
            None
        }

        fn try_decode_field(
            &mut self,
            owner: &dyn Object,
            key: &str,
            value: &Value,
            _field_type: FieldType,
            _registry: &ClassRegistry,
        ) -> Option<Result<Box<dyn Reflect>, CodingError>> {
            if owner.class_name() != "Credentials" || key != "token" {
                return None;
            }
            self.0.push(String::from(value.as_str()?));
            Some(Ok(Box::new(String::new())))
        }
    }

    let mut dict = Dictionary::new();
    dict.insert(CLASS_KEY, "Credentials");
    dict.insert("user", "bo");
    dict.insert("token", "hunter2");

    let registry = ClassRegistry::new();
    let mut vault = Vault::default();
    let mut target = Credentials::default();
    Decoder::with_processor(&registry, &mut vault)
        .apply_dictionary(&mut target, &dict)
        .unwrap();
    assert_eq!(target.user, "bo");
    assert_eq!(target.token, "");
    assert_eq!(vault.0, ["hunter2"]);
}

/// Hand-written object that keeps one field out of its dictionary.
#[derive(Default)]
struct Credentials {
    user: String,
    token: String,
}

impl Typed for Credentials {
    const FIELD_TYPE: FieldType = FieldType::CustomObject;
    const CLASS_NAME: &'static str = "Credentials";
}

impl Reflect for Credentials {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Object(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Object(self)
    }

    fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(Credentials {
            user: self.user.clone(),
            token: self.token.clone(),
        }))
    }
}

impl Object for Credentials {
    fn class_info(&self) -> &'static ClassInfo {
        static INFO: ClassInfo = ClassInfo::new(
            "Credentials",
            &[
                FieldDescriptor::new::<String>("user"),
                FieldDescriptor::new::<String>("token"),
            ],
        );
        &INFO
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        match name {
            "user" => Some(&self.user),
            "token" => Some(&self.token),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        let slot = match name {
            "user" => &mut self.user,
            "token" => &mut self.token,
            _ => return Err(value),
        };
        *slot = String::take_from_reflect(value)?;
        Ok(())
    }

    fn keys_for_representation(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(core::iter::once("user"))
    }
}

#[test]
fn default_representation_keys() {
    let ada = person();
    let keys = ada.keys_for_representation().collect::<Vec<_>>();
    assert_eq!(
        keys,
        ["name", "age", "nickname", "address", "friends", "scores", "location", "isActive"]
    );
}

#[test]
fn representation_keys() {
    let credentials = Credentials {
        user: String::from("bo"),
        token: String::from("hunter2"),
    };
    let dict = to_dictionary(&credentials).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get("user"), Some(&Value::from("bo")));
    assert!(!dict.contains_key("token"));

    // keys outside the representation are still decoded
    let mut full = dict;
    full.insert("token", "secret");
    let mut target = Credentials::default();
    Decoder::new(&ClassRegistry::new())
        .apply_dictionary(&mut target, &full)
        .unwrap();
    assert_eq!(target.user, "bo");
    assert_eq!(target.token, "secret");
}

// -----------------------------------------------------------------------------
// Storage

#[test]
fn json_storage() {
    let registry = registry();
    let dict = to_dictionary(&person()).unwrap();

    let json = serde_json::to_string(&dict).unwrap();
    let stored: Dictionary = serde_json::from_str(&json).unwrap();
    assert_eq!(stored, dict);

    let decoded: Person = from_dictionary_as(&registry, &stored).unwrap();
    assert_eq!(decoded.friends[0].name, "Grace");
    assert_eq!(decoded.location, Point { x: 1.5, y: -2.0 });
}
