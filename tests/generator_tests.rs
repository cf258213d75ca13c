// Integration tests for the step generators

use algorhythm::algorithms::{self, AlgorithmId};
use algorhythm::snapshot::{HeapKind, HeapStatus, Tag};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const SORTS: [AlgorithmId; 6] = [
    AlgorithmId::BubbleSort,
    AlgorithmId::InsertionSort,
    AlgorithmId::SelectionSort,
    AlgorithmId::QuickSort,
    AlgorithmId::MergeSort,
    AlgorithmId::HeapSort,
];

const SEARCHES: [AlgorithmId; 3] = [
    AlgorithmId::LinearSearch,
    AlgorithmId::BinarySearch,
    AlgorithmId::JumpSearch,
];

const MEMORY_RUNS: [AlgorithmId; 2] = [
    AlgorithmId::MergeSortMemory,
    AlgorithmId::QuickSortMemory,
];

fn random_values(rng: &mut Pcg32, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(5..=99)).collect()
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

// === SORTING ===

#[test]
fn test_sorts_end_sorted() {
    let mut rng = Pcg32::seed_from_u64(42);
    for algorithm in SORTS {
        for len in 0..=50 {
            let input = random_values(&mut rng, len);
            let steps = algorithms::generate(&input, algorithm, None);
            let last = steps.last().expect("a run always records steps");
            assert_eq!(
                last.values(),
                sorted_copy(&input),
                "{} left length-{} input unsorted",
                algorithm,
                len
            );
            assert!(
                last.all_sorted(),
                "{} must finish with every element tagged sorted (len {})",
                algorithm,
                len
            );
        }
    }
}

#[test]
fn test_multiset_preserved() {
    let mut rng = Pcg32::seed_from_u64(7);
    for algorithm in SORTS {
        for len in [3, 8, 21] {
            let input = random_values(&mut rng, len);
            let expected = sorted_copy(&input);
            let steps = algorithms::generate(&input, algorithm, None);
            for (i, snap) in steps.iter().enumerate() {
                assert_eq!(
                    sorted_copy(&snap.values()),
                    expected,
                    "{} lost or fabricated a value at step {}",
                    algorithm,
                    i
                );
            }
        }
    }
}

#[test]
fn test_first_snapshot_untouched() {
    let mut rng = Pcg32::seed_from_u64(19);
    for algorithm in AlgorithmId::ALL {
        let mut values = random_values(&mut rng, 12);
        if algorithm.needs_sorted_input() {
            values.sort_unstable();
        }
        let target = algorithm.needs_target().then(|| values[4]);
        let steps = algorithms::generate(&values, algorithm, target);
        let first = steps.first().expect("a run always records steps");
        assert_eq!(first.values(), values, "{} modified its input", algorithm);
        assert!(
            first.elements.iter().all(|e| e.tag == Tag::Idle),
            "{} must start from an untagged snapshot",
            algorithm
        );
    }
}

#[test]
fn test_deterministic_generation() {
    let mut rng = Pcg32::seed_from_u64(101);
    for algorithm in AlgorithmId::ALL {
        let mut values = random_values(&mut rng, 14);
        if algorithm.needs_sorted_input() {
            values.sort_unstable();
        }
        let target = algorithm.needs_target().then(|| values[3]);
        let a = algorithms::generate(&values, algorithm, target);
        let b = algorithms::generate(&values, algorithm, target);
        assert_eq!(
            a, b,
            "two {} runs over the same input must record identical snapshots",
            algorithm
        );
    }
}

#[test]
fn test_sorted_tags_sticky() {
    let mut rng = Pcg32::seed_from_u64(67);
    for algorithm in SORTS {
        let input = random_values(&mut rng, 12);
        let steps = algorithms::generate(&input, algorithm, None);
        for i in 0..input.len() {
            if let Some(first) = steps
                .iter()
                .position(|s| s.tag_at(i) == Some(Tag::Sorted))
            {
                for (k, snap) in steps.iter().enumerate().skip(first) {
                    assert_eq!(
                        snap.tag_at(i),
                        Some(Tag::Sorted),
                        "{} demoted index {} at step {}",
                        algorithm,
                        i,
                        k
                    );
                }
            }
        }
    }
}

#[test]
fn test_bubble_scenario() {
    let steps = algorithms::generate(&[5, 3, 8, 1], AlgorithmId::BubbleSort, None);

    let first = &steps[0];
    assert_eq!(first.values(), vec![5, 3, 8, 1]);
    assert!(first.elements.iter().all(|e| e.tag == Tag::Idle));

    // The [5,3] pair is compared, then swapped, before any other pair is touched
    assert_eq!(steps[1].tag_at(0), Some(Tag::Comparing));
    assert_eq!(steps[1].tag_at(1), Some(Tag::Comparing));
    assert_eq!(steps[1].values(), vec![5, 3, 8, 1]);
    assert_eq!(steps[2].tag_at(0), Some(Tag::Swapping));
    assert_eq!(steps[2].tag_at(1), Some(Tag::Swapping));
    assert_eq!(steps[2].values(), vec![5, 3, 8, 1]);
    assert_eq!(steps[3].values(), vec![3, 5, 8, 1]);

    let last = steps.last().expect("bubble run records steps");
    assert_eq!(last.values(), vec![1, 3, 5, 8]);
    assert!(last.all_sorted());
}

// === SEARCHING ===

#[test]
fn test_search_finds_present_targets() {
    let mut rng = Pcg32::seed_from_u64(23);
    for algorithm in SEARCHES {
        for len in [1, 2, 7, 16, 31] {
            let mut values = random_values(&mut rng, len);
            values.sort_unstable();
            for &target in &values {
                let steps = algorithms::generate(&values, algorithm, Some(target));
                let last = steps.last().expect("a run always records steps");
                let found = last.found_index().unwrap_or_else(|| {
                    panic!("{} missed target {} in {:?}", algorithm, target, values)
                });
                assert_eq!(last.elements[found].value, target);
                assert_eq!(
                    last.elements.iter().filter(|e| e.tag == Tag::Found).count(),
                    1,
                    "{} tagged more than one element found",
                    algorithm
                );
                // Found is terminal: no snapshot may carry it before the last
                for snap in &steps[..steps.len() - 1] {
                    assert!(
                        snap.found_index().is_none(),
                        "{} recorded steps after finding the target",
                        algorithm
                    );
                }
            }
        }
    }
}

#[test]
fn test_search_absent_targets() {
    let mut rng = Pcg32::seed_from_u64(31);
    for algorithm in SEARCHES {
        for len in [0, 1, 5, 16, 33] {
            let mut values = random_values(&mut rng, len);
            values.sort_unstable();
            let above = values.iter().copied().max().unwrap_or(0) + 1;
            let below = values.iter().copied().min().unwrap_or(0) - 1;
            for target in [above, below] {
                let steps = algorithms::generate(&values, algorithm, Some(target));
                for snap in &steps {
                    assert!(
                        snap.found_index().is_none(),
                        "{} claimed to find absent target {}",
                        algorithm,
                        target
                    );
                }
                let last = steps.last().expect("a run always records steps");
                assert!(
                    last.elements.iter().all(|e| e.tag == Tag::Eliminated),
                    "{} left candidates alive for absent target {} (len {})",
                    algorithm,
                    target,
                    len
                );
            }
        }
    }
}

#[test]
fn test_eliminated_tags_sticky() {
    let mut rng = Pcg32::seed_from_u64(43);
    for algorithm in SEARCHES {
        let mut values = random_values(&mut rng, 20);
        values.sort_unstable();
        let target = values.iter().copied().max().unwrap_or(0) + 1;
        let steps = algorithms::generate(&values, algorithm, Some(target));
        for i in 0..values.len() {
            if let Some(first) = steps
                .iter()
                .position(|s| s.tag_at(i) == Some(Tag::Eliminated))
            {
                for (k, snap) in steps.iter().enumerate().skip(first) {
                    assert_eq!(
                        snap.tag_at(i),
                        Some(Tag::Eliminated),
                        "{} revived index {} at step {}",
                        algorithm,
                        i,
                        k
                    );
                }
            }
        }
    }
}

#[test]
fn test_binary_search_scenario() {
    let steps = algorithms::generate(&[2, 4, 6, 8, 10], AlgorithmId::BinarySearch, Some(6));

    // One comparison round: initial snapshot, midpoint probe, found
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].tag_at(2), Some(Tag::Checking));
    assert_eq!(steps[1].tag_at(0), Some(Tag::Range));
    assert_eq!(steps[1].tag_at(4), Some(Tag::Range));

    let last = &steps[2];
    assert_eq!(last.found_index(), Some(2));
    assert_eq!(last.elements[2].value, 6);
}

// === MEMORY-MAP RUNS ===

#[test]
fn test_memory_heap_mirrors_array() {
    let mut rng = Pcg32::seed_from_u64(53);
    for algorithm in MEMORY_RUNS {
        let input = random_values(&mut rng, 8);
        let steps = algorithms::generate(&input, algorithm, None);
        for (i, snap) in steps.iter().enumerate() {
            let memory = snap
                .memory
                .as_ref()
                .unwrap_or_else(|| panic!("{} snapshot {} lacks memory state", algorithm, i));
            let main = memory.heap.first().expect("main array object persists");
            assert_eq!(main.id, 0);
            assert_eq!(main.kind, HeapKind::Array);
            assert_eq!(
                main.elements,
                snap.values(),
                "{} heap object 0 fell out of sync at step {}",
                algorithm,
                i
            );
        }

        let first = steps.first().expect("run records steps");
        let last = steps.last().expect("run records steps");
        assert!(first.memory.as_ref().is_some_and(|m| m.frames.is_empty()));
        assert!(
            last.memory.as_ref().is_some_and(|m| m.frames.is_empty()),
            "{} finished with frames still on the stack",
            algorithm
        );
        assert!(
            last.memory.as_ref().is_some_and(|m| m.heap.len() == 1),
            "{} finished with temp buffers still on the heap",
            algorithm
        );
        assert_eq!(last.values(), sorted_copy(&input));
        assert!(last.all_sorted());
    }
}

#[test]
fn test_memory_calls_balance() {
    let mut rng = Pcg32::seed_from_u64(59);
    for algorithm in MEMORY_RUNS {
        let input = random_values(&mut rng, 9);
        let steps = algorithms::generate(&input, algorithm, None);
        let calls = steps
            .iter()
            .filter(|s| s.message.as_deref().is_some_and(|m| m.starts_with("Calling ")))
            .count();
        let returns = steps
            .iter()
            .filter(|s| s.message.as_deref().is_some_and(|m| m.contains(" returned")))
            .count();
        assert!(calls > 1, "{} must record nested calls", algorithm);
        assert_eq!(
            calls, returns,
            "{} must pop every frame it pushes",
            algorithm
        );
    }
}

#[test]
fn test_merge_gc_mark_then_sweep() {
    let mut rng = Pcg32::seed_from_u64(61);
    let input = random_values(&mut rng, 8);
    let steps = algorithms::generate(&input, AlgorithmId::MergeSortMemory, None);

    let marked: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            s.memory
                .as_ref()
                .is_some_and(|m| m.heap.iter().any(|o| o.status == HeapStatus::Garbage))
        })
        .map(|(i, _)| i)
        .collect();
    assert!(
        !marked.is_empty(),
        "merge must mark its temp buffers as garbage"
    );

    for &i in &marked {
        let memory = steps[i].memory.as_ref().expect("memory state present");
        let garbage: Vec<u32> = memory
            .heap
            .iter()
            .filter(|o| o.status == HeapStatus::Garbage)
            .map(|o| o.id)
            .collect();
        assert_eq!(garbage.len(), 2, "each merge retires its two buffers");
        assert!(memory
            .heap
            .iter()
            .filter(|o| o.status == HeapStatus::Garbage)
            .all(|o| o.kind == HeapKind::TempArray));

        // The sweep directly follows the mark and removes the marked objects
        let swept = steps[i + 1].memory.as_ref().expect("memory state present");
        assert!(swept.heap.iter().all(|o| o.status == HeapStatus::Alive));
        for id in &garbage {
            assert!(
                swept.heap.iter().all(|o| o.id != *id),
                "object {} survived the sweep",
                id
            );
        }
    }

    let marks = steps
        .iter()
        .filter(|s| s.message.as_deref().is_some_and(|m| m.starts_with("Marked ")))
        .count();
    let sweeps = steps
        .iter()
        .filter(|s| s.message.as_deref().is_some_and(|m| m.starts_with("Swept ")))
        .count();
    assert_eq!(marks, sweeps, "every mark needs a matching sweep");
}

#[test]
fn test_merge_compare_highlights() {
    let mut rng = Pcg32::seed_from_u64(67);
    for len in [2, 8, 13] {
        let input = random_values(&mut rng, len);
        let steps = algorithms::generate(&input, AlgorithmId::MergeSortMemory, None);
        for (i, snap) in steps.iter().enumerate() {
            let Some(rest) = snap
                .message
                .as_deref()
                .and_then(|m| m.strip_prefix("Comparing "))
            else {
                continue;
            };
            let (a, b) = rest.split_once(" and ").expect("merge compare message");
            let a: i32 = a.parse().expect("left operand");
            let b: i32 = b.parse().expect("right operand");

            // Highlighted slots must still hold the values the message names;
            // slots the merge already overwrote stay unhighlighted.
            let tagged: Vec<i32> = snap
                .elements
                .iter()
                .filter(|e| e.tag == Tag::Comparing)
                .map(|e| e.value)
                .collect();
            assert!(
                !tagged.is_empty(),
                "snapshot {} compares without a highlight",
                i
            );
            for value in tagged {
                assert!(
                    value == a || value == b,
                    "snapshot {} highlights {} but compares {} and {}",
                    i,
                    value,
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_quick_memory_in_place() {
    let mut rng = Pcg32::seed_from_u64(71);
    let input = random_values(&mut rng, 10);
    let steps = algorithms::generate(&input, AlgorithmId::QuickSortMemory, None);
    for (i, snap) in steps.iter().enumerate() {
        let memory = snap.memory.as_ref().expect("memory state present");
        assert_eq!(
            memory.heap.len(),
            1,
            "in-place quick sort allocated at step {}",
            i
        );
    }
    // The stack still sees real recursion depth
    assert!(steps
        .iter()
        .any(|s| s.memory.as_ref().is_some_and(|m| m.frames.len() > 1)));
}

// === GRACEFUL DEGRADATION ===

#[test]
fn test_placeholder_run() {
    let steps = algorithms::generate_for_id("bogo-sort", &[4, 2, 9], None);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].values(), vec![4, 2, 9]);
    assert_eq!(steps[1].values(), vec![4, 2, 9]);
    assert!(steps[0].elements.iter().all(|e| e.tag == Tag::Idle));
    assert!(steps[1]
        .message
        .as_deref()
        .is_some_and(|m| m.contains("not implemented")));
}
