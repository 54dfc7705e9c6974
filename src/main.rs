#[macro_use]
extern crate log;
extern crate env_logger;
extern crate treap_collections;

use treap_collections::priority::RandomPriority;
use treap_collections::Treap;

fn main() {
    env_logger::init();

    let mut treap = Treap::with_priorities(RandomPriority::from_seed([1, 1, 1, 1]));
    for key in vec![12, 8, 19, 4, 5, 7, 9] {
        treap.insert(key);
    }
    println!("{}", treap);

    assert_eq!(treap.search(&12).map(|node| *node.key()), Some(12));
    assert!(treap.search(&20).is_none());

    treap.delete(&4);
    assert!(treap.search(&4).is_none());
    info!("height after delete: {}", treap.height());

    let (mut low, high) = treap.split(&10);
    println!("Left Subtree:");
    println!("{}", low);
    println!("Right Subtree:");
    println!("{}", high);

    low.merge(high);
    println!("{}", low);
    assert_eq!(low.in_order(), vec![&5, &7, &8, &9, &12, &19]);
}
