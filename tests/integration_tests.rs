use dynarray::{dynarray, DynArray, DEFAULT_CAPACITY};

#[test]
fn test_default_construction() {
    let array: DynArray<i32> = DynArray::default();

    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 32);
    assert_eq!(DEFAULT_CAPACITY, 32);
}

#[test]
fn test_sized_construction_uses_default_values() {
    let array = DynArray::<i32>::with_len(5);

    assert_eq!(array.len(), 5);
    assert_eq!(array.capacity(), 32);
    assert_eq!(array, [0, 0, 0, 0, 0]);
}

#[test]
fn test_sized_construction_doubles_to_fit() {
    assert_eq!(DynArray::<u8>::with_len(32).capacity(), 32);
    assert_eq!(DynArray::<u8>::with_len(33).capacity(), 64);
    assert_eq!(DynArray::<u8>::with_len(200).capacity(), 256);
}

#[test]
fn test_fill_construction() {
    let array = DynArray::with_len_value(3, String::from("x"));

    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 32);
    assert!(array.iter().all(|item| item == "x"));
}

#[test]
fn test_fill_construction_with_base() {
    let array = DynArray::with_len_value_in_base(10, 7u16, 4);

    assert_eq!(array.len(), 10);
    assert_eq!(array.capacity(), 16);
    assert_eq!(array.at(9), Ok(&7));
}

#[test]
fn test_base_capacity_construction() {
    let array = DynArray::<u64>::with_base_capacity(8);
    assert_eq!(array.capacity(), 8);
    assert!(array.is_empty());

    // Zero would never double, so it starts at one
    let array = DynArray::<u64>::with_base_capacity(0);
    assert_eq!(array.capacity(), 1);
}

#[test]
fn test_literal_sequence_round_trip() {
    let array = dynarray![10, 20, 30, 40];

    assert_eq!(array.len(), 4);
    assert_eq!(array.capacity(), 32);
    for (i, expected) in [10, 20, 30, 40].iter().enumerate() {
        assert_eq!(array.at(i), Ok(expected));
    }
}

#[test]
fn test_literal_sequence_larger_than_default() {
    let items: Vec<u32> = (0..70).collect();
    let array = DynArray::from_slice(&items);

    assert_eq!(array.len(), 70);
    assert_eq!(array.capacity(), 128);
    assert_eq!(array.as_slice(), items.as_slice());
}

#[test]
fn test_macro_forms() {
    let empty: DynArray<i32> = dynarray![];
    assert!(empty.is_empty());

    let filled = dynarray!['z'; 3];
    assert_eq!(filled, ['z', 'z', 'z']);

    let trailing = dynarray![1, 2, 3,];
    assert_eq!(trailing.len(), 3);
}

#[test]
fn test_push_back_past_default_capacity() {
    let mut array = DynArray::new();
    for i in 0..=32 {
        array.push_back(i);
    }

    assert_eq!(array.len(), 33);
    assert_eq!(array.capacity(), 64);
    assert_eq!(array.at(32), Ok(&32));
    assert!(array.at(33).is_err());
}

#[test]
fn test_capacity_stays_until_full() {
    let mut array = DynArray::new();
    for i in 0..32 {
        array.push_back(i);
        assert_eq!(array.capacity(), 32);
    }
    array.push_back(32);
    assert_eq!(array.capacity(), 64);
}

#[test]
fn test_erase_then_insert_scenario() {
    let mut array = dynarray![1, 2, 3, 4, 5];

    assert_eq!(array.erase(2), Ok(3));
    assert_eq!(array, [1, 2, 4, 5]);
    assert_eq!(array.len(), 4);

    array.insert(1, 9).unwrap();
    assert_eq!(array, [1, 9, 2, 4, 5]);
    assert_eq!(array.len(), 5);
}

#[test]
fn test_insert_at_front_and_back() {
    let mut array = dynarray![2, 3];

    array.insert(0, 1).unwrap();
    array.insert(3, 4).unwrap();

    assert_eq!(array, [1, 2, 3, 4]);
}

#[test]
fn test_insert_into_empty() {
    let mut array = DynArray::new();
    array.insert(0, "only").unwrap();

    assert_eq!(array, ["only"]);
}

#[test]
fn test_erase_last_and_first() {
    let mut array = dynarray![1, 2, 3];

    assert_eq!(array.erase(2), Ok(3));
    assert_eq!(array.erase(0), Ok(1));
    assert_eq!(array, [2]);
}

#[test]
fn test_erase_never_shrinks() {
    let mut array: DynArray<i32> = (0..100).collect();
    assert_eq!(array.capacity(), 128);

    while !array.is_empty() {
        array.erase(0).unwrap();
    }
    assert_eq!(array.capacity(), 128);
}

#[test]
fn test_reset_overwrites_live_elements() {
    let mut array = dynarray![1, 2, 3];
    array.reset(7);

    assert_eq!(array, [7, 7, 7]);
    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 32);
}

#[test]
fn test_reset_on_empty_is_noop() {
    let mut array = DynArray::<i32>::new();
    array.reset(1);

    assert!(array.is_empty());
}

#[test]
fn test_reset_default_overwrites_live_elements() {
    let mut array = dynarray![String::from("a"), String::from("b")];
    array.push_back(String::from("c"));
    array.reset_default();

    assert_eq!(array, ["", "", ""]);
    assert_eq!(array.capacity(), 32);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut array: DynArray<i32> = (0..40).collect();
    array.clear();

    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 64);
    assert!(array.at(0).is_err());

    array.push_back(5);
    assert_eq!(array, [5]);
}

#[test]
fn test_at_mut_writes_through() {
    let mut array = dynarray![1, 2, 3];
    *array.at_mut(1).unwrap() = 20;

    assert_eq!(array.at(1), Ok(&20));
}

#[test]
fn test_index_operators() {
    let mut array = dynarray![String::from("a"), String::from("b")];
    array[1].push('!');

    assert_eq!(array[0], "a");
    assert_eq!(array[1], "b!");
}

#[test]
#[should_panic(expected = "index 2 is out of range for length 2")]
fn test_index_out_of_range_panics() {
    let array = dynarray![1, 2];
    let _ = array[2];
}

#[test]
#[should_panic(expected = "index 5 is out of range for length 0")]
fn test_index_mut_out_of_range_panics() {
    let mut array = DynArray::<i32>::new();
    array[5] = 1;
}

#[test]
fn test_find_present_and_absent() {
    let array = dynarray![4, 8, 15, 16, 23, 42];

    assert_eq!(array.find(&15), array.begin() + 2);
    assert_eq!(array.find(&15).get(), Some(&15));
    assert_eq!(array.find(&99), array.end());
    assert!(array.find(&99).is_end());
}

#[test]
fn test_find_returns_first_occurrence() {
    let array = dynarray![1, 2, 1, 2];

    assert_eq!(array.find(&2).position(), 1);
}

#[test]
fn test_find_on_empty_is_end() {
    let array = DynArray::<i32>::new();

    assert_eq!(array.find(&1), array.end());
    assert_eq!(array.begin(), array.end());
}

#[test]
fn test_find_mut_modifies_element() {
    let mut array = dynarray![1, 2, 3];
    if let Some(item) = array.find_mut(&2).into_mut() {
        *item = 200;
    }

    assert_eq!(array, [1, 200, 3]);
    assert!(array.find_mut(&2).is_end());
}

#[test]
fn test_dump_layout() {
    let mut out = String::new();
    dynarray![1, 2, 3].dump(&mut out).unwrap();

    assert_eq!(out, "Vector size: 3\nVector capacity: 32\n{ 1 2 3 }\n");
}

#[test]
fn test_dump_empty() {
    let array = DynArray::<i32>::new();

    assert_eq!(
        array.display().to_string(),
        "Vector size: 0\nVector capacity: 32\n{ }\n"
    );
}

#[cfg(feature = "std")]
#[test]
fn test_print_writes_dump() {
    let mut array = dynarray![1, 2];
    array.print();

    let _ = array.take();
    array.print();
    assert!(array.is_released());
}

#[test]
fn test_debug_lists_live_elements() {
    let mut array = dynarray![1, 2, 3];
    array.erase(0).unwrap();

    assert_eq!(format!("{array:?}"), "[2, 3]");
}

#[test]
fn test_extend_and_collect() {
    let mut array: DynArray<i32> = (1..=3).collect();
    array.extend([4, 5]);

    assert_eq!(array, [1, 2, 3, 4, 5]);
}

#[test]
fn test_equality_ignores_capacity() {
    let small = dynarray![1, 2, 3];
    let mut large = DynArray::with_base_capacity(256);
    large.extend([1, 2, 3]);

    assert_eq!(small, large);
    assert_ne!(small.capacity(), large.capacity());
}

#[test]
fn test_slice_comparisons() {
    let array = dynarray![1, 2];
    let slice: &[i32] = &[1, 2];

    assert!(array == slice);
    assert!(array == *slice);
    assert_eq!(array.as_ref(), slice);
}
