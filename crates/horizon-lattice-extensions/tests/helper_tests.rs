//! Public API tests for the stateless helpers.

use std::collections::{HashSet, LinkedList};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use horizon_lattice_extensions::{
    is_none_or_empty, Command, CommandExt, SequenceExt, SliceExt, StrExt,
};

struct Toggle {
    enabled: bool,
    executed: AtomicUsize,
}

impl Command<str> for Toggle {
    fn can_execute(&self, _parameter: Option<&str>) -> bool {
        self.enabled
    }

    fn execute(&self, _parameter: Option<&str>) {
        self.executed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_safe_execute_unsized_parameter() {
    let enabled = Toggle {
        enabled: true,
        executed: AtomicUsize::new(0),
    };
    let disabled = Toggle {
        enabled: false,
        executed: AtomicUsize::new(0),
    };

    assert!(Some(&enabled).safe_execute(Some("save")));
    assert!(!Some(&disabled).safe_execute(Some("save")));
    assert!(!None::<&Toggle>.safe_execute(Some("save")));

    assert_eq!(enabled.executed.load(Ordering::SeqCst), 1);
    assert_eq!(disabled.executed.load(Ordering::SeqCst), 0);
}

#[test]
fn test_safe_execute_boxed_trait_object() {
    let command: Box<dyn Command<str>> = Box::new(Toggle {
        enabled: true,
        executed: AtomicUsize::new(0),
    });
    assert!(Some(&command).safe_can_execute(None::<&str>));
    assert!(Some(&command).safe_execute(None::<&str>));
}

#[test]
fn test_sequence_helpers_on_collections() {
    let list: LinkedList<i32> = (0..10).collect();
    assert_eq!(list.iter().index_of(&5), Some(5));
    assert_eq!(list.iter().index_of(&10), None);
    assert_eq!(list.iter().copied().take_range(3, 3).collect::<Vec<_>>(), vec![3, 4, 5]);
    assert_eq!(list.iter().count_checked(), Ok(10));

    let set: HashSet<i32> = (0..10).collect();
    assert_eq!(set.iter().count_checked(), Ok(10));
    assert!(!is_none_or_empty(Some(&set)));
    assert!(is_none_or_empty(Some(&HashSet::<i32>::new())));
}

#[test]
fn test_slice_and_iterator_take_agree() {
    let items: Vec<i32> = (0..10).collect();
    for (index, length) in [(0, 0), (0, 1), (3, 0), (3, 3), (7, 3)] {
        let sliced = items.take_range(index, length).map(<[i32]>::to_vec);
        let taken: Vec<i32> = items.iter().copied().take_range(index, length).collect();
        assert_eq!(sliced, Some(taken), "index={index} length={length}");
    }
}

#[test]
fn test_sum_durations_by_projection() {
    struct Clip {
        length: Duration,
    }

    let clips = [
        Clip { length: Duration::from_secs(90) },
        Clip { length: Duration::from_secs(30) },
    ];

    assert_eq!(
        clips.iter().sum_durations_by(|clip| clip.length),
        Ok(Duration::from_secs(120))
    );
}

#[test]
fn test_string_helpers() {
    let name: Option<String> = Some("  ".to_string());
    assert!(!name.is_null_or_empty());
    assert!(name.is_null_or_whitespace());
    assert!(None::<&str>.is_null_or_empty());
    assert!(!"x".is_null_or_empty());
}
