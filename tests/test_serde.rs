extern crate bincode;
extern crate serde_test;
extern crate treap_collections;

use serde_test::{assert_de_tokens_error, assert_ser_tokens, Token};
use treap_collections::priority::RandomPriority;
use treap_collections::Treap;

#[test]
fn test_ser_tokens() {
    let mut tree = Treap::with_priorities(RandomPriority::from_seed([1, 1, 1, 1]));
    tree.insert_with_priority(1u32, 7);

    assert_ser_tokens(
        &tree,
        &[
            Token::Some,
            Token::Struct { name: "Node", len: 5 },
            Token::Str("key"),
            Token::U32(1),
            Token::Str("priority"),
            Token::U32(7),
            Token::Str("len"),
            Token::U64(1),
            Token::Str("left"),
            Token::None,
            Token::Str("right"),
            Token::None,
            Token::StructEnd,
        ],
    );
}

#[test]
fn test_de_rejects_heap_violation() {
    assert_de_tokens_error::<Treap<u32>>(
        &[
            Token::Some,
            Token::Struct { name: "Node", len: 5 },
            Token::Str("key"),
            Token::U32(2),
            Token::Str("priority"),
            Token::U32(1),
            Token::Str("len"),
            Token::U64(2),
            Token::Str("left"),
            Token::Some,
            Token::Struct { name: "Node", len: 5 },
            Token::Str("key"),
            Token::U32(1),
            Token::Str("priority"),
            Token::U32(9),
            Token::Str("len"),
            Token::U64(1),
            Token::Str("left"),
            Token::None,
            Token::Str("right"),
            Token::None,
            Token::StructEnd,
            Token::Str("right"),
            Token::None,
            Token::StructEnd,
        ],
        "heap order is violated: parent priority 1 is below child priority 9",
    );
}

#[test]
fn test_bincode_preserves_shape() {
    let mut tree = Treap::with_priorities(RandomPriority::from_seed([1, 1, 1, 1]));
    for key in 0..100u32 {
        tree.insert(key * 7 % 100);
    }

    let bytes = bincode::serialize(&tree).unwrap();
    let decoded: Treap<u32> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(decoded.pre_order(), tree.pre_order());
    assert_eq!(decoded.in_order(), tree.in_order());
    assert_eq!(decoded.validate(), Ok(()));
}
