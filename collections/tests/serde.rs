use containerofunique_collections::UniqueDeque;
use containerofunique_test_log::test;

#[test]
fn it_serializes_in_sequence_order() {
    let mut deque = UniqueDeque::new();
    deque.push_back(2);
    deque.push_front(1);
    deque.push_back(3);

    assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2,3]");
}

#[test]
fn it_deduplicates_when_deserializing() {
    let deque: UniqueDeque<u32> = serde_json::from_str("[1,2,1,3,2]").unwrap();
    assert_eq!(deque, UniqueDeque::from([1, 2, 3]));
    assert!(deque.verify());
}

#[test]
fn it_can_be_empty() {
    let deque: UniqueDeque<String> = serde_json::from_str("[]").unwrap();
    assert!(deque.is_empty());
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[]");
}

#[test]
fn it_rejects_non_sequences() {
    assert!(serde_json::from_str::<UniqueDeque<u32>>("{\"a\":1}").is_err());
    assert!(serde_json::from_str::<UniqueDeque<u32>>("[1,\"two\"]").is_err());
}
