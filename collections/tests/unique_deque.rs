use containerofunique_collections::{erase, erase_if, Error, UniqueDeque};
use containerofunique_test_log::test;
use rand::{rngs::StdRng, Rng, SeedableRng};

const NUM_STEPS: usize = 2_000;
const VALUE_RANGE: u8 = 24;

/// Naive reference model: a `Vec` that is searched linearly for duplicates.
#[derive(Default)]
struct Model(Vec<u8>);

impl Model {
    fn push_front(&mut self, value: u8) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.insert(0, value);
        true
    }

    fn push_back(&mut self, value: u8) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    fn insert(&mut self, pos: usize, value: u8) -> bool {
        if self.0.contains(&value) {
            return false;
        }
        self.0.insert(pos, value);
        true
    }

    fn insert_all(&mut self, pos: usize, values: &[u8]) {
        let mut at = pos;
        for &value in values {
            if self.insert(at, value) {
                at += 1;
            }
        }
    }
}

fn random_values(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(0..6);
    (0..len).map(|_| rng.gen_range(0..VALUE_RANGE)).collect()
}

#[test]
fn it_matches_a_naive_model_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut deque: UniqueDeque<u8> = UniqueDeque::new();
    let mut model = Model::default();

    for _ in 0..NUM_STEPS {
        let value = rng.gen_range(0..VALUE_RANGE);
        match rng.gen_range(0..10) {
            0 => assert_eq!(deque.push_front(value), model.push_front(value)),
            1 => assert_eq!(deque.push_back(value), model.push_back(value)),
            2 => {
                let expected = if model.0.is_empty() {
                    None
                } else {
                    Some(model.0.remove(0))
                };
                assert_eq!(deque.pop_front(), expected);
            }
            3 => assert_eq!(deque.pop_back(), model.0.pop()),
            4 => {
                let pos = rng.gen_range(0..=model.0.len());
                let inserted = model.insert(pos, value);
                assert_eq!(deque.insert(pos, value), (pos, inserted));
            }
            5 => {
                let pos = rng.gen_range(0..=model.0.len());
                let values = random_values(&mut rng);
                model.insert_all(pos, &values);
                assert_eq!(deque.insert_iter(pos, values), pos);
            }
            6 => {
                let pos = rng.gen_range(0..=model.0.len());
                if pos < model.0.len() {
                    model.0.remove(pos);
                }
                let expected = pos.min(model.0.len());
                assert_eq!(deque.erase(pos), expected);
            }
            7 => {
                let start = rng.gen_range(0..=model.0.len());
                let end = rng.gen_range(start..=model.0.len());
                model.0.drain(start..end);
                assert_eq!(deque.erase_range(start..end), start);
            }
            8 => {
                let removed = usize::from(model.0.contains(&value));
                model.0.retain(|&x| x != value);
                assert_eq!(erase(&mut deque, &value), removed);
            }
            _ => {
                let modulus = rng.gen_range(2..5);
                let before = model.0.len();
                model.0.retain(|x| x % modulus != 0);
                let removed = before - model.0.len();
                assert_eq!(erase_if(&mut deque, |x| x % modulus == 0), removed);
            }
        }

        assert!(deque.verify());
        assert_eq!(deque.len(), model.0.len());
        assert!(deque.iter().eq(model.0.iter()));
        assert_eq!(deque.find(&value), model.0.iter().position(|&x| x == value));
    }
}

#[test]
fn it_keeps_first_occurrences_on_construction() {
    let deque: UniqueDeque<i32> = [1, 2, 2, 3, 3, 4].into_iter().collect();
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(deque.deque().len(), deque.set().len());
    assert!(deque.verify());
}

#[test]
fn it_does_not_change_on_duplicate_push() {
    let mut deque = UniqueDeque::from(["a", "b", "c"]);
    let before = deque.clone();

    assert!(!deque.push_back("b"));
    assert!(!deque.push_front("c"));
    assert_eq!(deque, before);
    assert_eq!(deque.len(), 3);
}

#[test]
fn it_reports_out_of_range_for_every_index_past_the_end() {
    let empty: UniqueDeque<u32> = UniqueDeque::new();
    assert_eq!(empty.at(0), Err(Error::OutOfRange { index: 0, len: 0 }));

    let deque = UniqueDeque::from([7, 8, 9]);
    for index in 3..10 {
        assert_eq!(deque.at(index), Err(Error::OutOfRange { index, len: 3 }));
    }
    assert_eq!(
        deque.at(3).unwrap_err().to_string(),
        "Index out of range: the len is 3 but the index is 3"
    );
}

#[test]
fn it_orders_by_first_differing_position() {
    let a = UniqueDeque::from([1, 2, 3]);
    let b = UniqueDeque::from([1, 3, 2]);
    let c = UniqueDeque::from([1, 2, 3, 4]);

    assert_ne!(a, b);
    assert!(a < b);
    assert!(a < c);
    assert!(b > c);
    assert!(a <= a.clone());
}

#[test]
fn it_can_be_extended_by_reference() {
    let source = vec![String::from("x"), String::from("y"), String::from("x")];
    let mut deque: UniqueDeque<String> = UniqueDeque::with_capacity(source.len());
    deque.extend(&source);
    assert_eq!(deque.len(), 2);
    assert_eq!(deque.back().map(String::as_str), Some("y"));
}
