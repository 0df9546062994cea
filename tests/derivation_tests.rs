//! derive / max / min / sum tests

use collkit::{derive, derive_with, max, max_params, min, min_params, sum, sum_params};

fn greater(current: i32, max: i32) -> i32 {
    if current > max {
        current
    } else {
        max
    }
}

#[test]
fn test_derive_max_of_ints() {
    let ints = vec![1, 2, 3, 4, 99, i32::MIN, 1000];
    assert_eq!(derive(ints, greater), 1000);
}

#[test]
fn test_derive_running_average() {
    let floats = vec![-10.0, 20.0, -20.0, 10.0, 5.0];

    let mut count = 1.0;
    let average = derive(floats, |current: f64, average| {
        count += 1.0;
        (average * (count - 1.0) + current) / count
    });

    assert_eq!(average, 1.0);
}

#[test]
fn test_derive_ignores_default_value() {
    let ints = vec![-1_000_000, -1, -10, -100];
    assert_eq!(derive(ints, greater), -1);
}

#[test]
fn test_derive_over_structs() {
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct WithInt {
        value: i32,
    }

    let structs = vec![
        WithInt { value: 1 },
        WithInt { value: 0 },
        WithInt { value: i32::MIN },
        WithInt { value: 99 },
    ];

    let max_struct = derive(structs, |current, max| {
        if current.value > max.value {
            current
        } else {
            max
        }
    });
    assert_eq!(max_struct.value, 99);
}

#[test]
fn test_derive_nil_sequences() {
    let nil_strings: Option<Vec<String>> = None;
    assert_eq!(
        derive(nil_strings.into_iter().flatten(), |_, _| "not empty".to_string()),
        ""
    );

    #[derive(Debug, Default, PartialEq)]
    struct WithInt {
        value: i32,
    }
    let nil_structs: Option<Vec<WithInt>> = None;
    assert_eq!(
        derive(nil_structs.into_iter().flatten(), |_, _| WithInt { value: 999 }),
        WithInt { value: 0 }
    );
}

#[test]
fn test_max_and_sum_nil_sequences() {
    let nil: Option<Vec<i32>> = None;
    assert_eq!(max(nil.clone().into_iter().flatten()), 0);
    assert_eq!(min(nil.clone().into_iter().flatten()), 0);
    assert_eq!(sum(nil.into_iter().flatten()), 0);

    let nil_strings: Option<&[String]> = None;
    assert_eq!(sum(nil_strings.unwrap_or(&[]).iter().cloned()), "");

    let present = Some(vec![1, 2, 3]);
    assert_eq!(sum(present.into_iter().flatten()), 6);
}

#[test]
fn test_derive_single_element_skips_combine() {
    assert_eq!(derive(vec![42], |_, _| unreachable!("combine must not run")), 42);
    assert_eq!(
        derive(vec!["only".to_string()], |_, _| unreachable!()),
        "only"
    );
}

#[test]
fn test_derive_sums() {
    assert_eq!(derive(vec![1, 2, 3, 4], |current, sum| current + sum), 10);

    let strings: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
    assert_eq!(derive(strings, |current, sum| sum + &current), "abcd");
}

#[test]
fn test_derive_without_combiner() {
    assert_eq!(derive_with(vec![1, 2, 3], None::<fn(i32, i32) -> i32>), 0);

    let strings: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
    assert_eq!(
        derive_with(strings, None::<fn(String, String) -> String>),
        ""
    );

    assert_eq!(derive_with(Vec::<i32>::new(), None::<fn(i32, i32) -> i32>), 0);
}

#[test]
fn test_max() {
    assert_eq!(max(vec![1, 2, 3, 4, 99, i32::MIN, 1000]), 1000);
    assert_eq!(max(vec![-1_000_000, -1, -10, -100]), -1);
    assert_eq!(max(Vec::<i64>::new()), 0);
}

#[test]
fn test_max_params() {
    assert_eq!(max_params!(1, 2, 3, 4, 99, i32::MIN, 1000), 1000);
    assert_eq!(max_params!("abc", "def", "xyz", "mno"), "xyz");
}

#[test]
fn test_min() {
    assert_eq!(min(vec![1, 2, 3, 4, 99, -400, 1000]), -400);
    assert_eq!(min([2.5f32, -0.5, 1.0]), -0.5);
}

#[test]
fn test_min_params() {
    assert_eq!(min_params!(1, 2, 3, 4, 99, i32::MIN, 1000), i32::MIN);
    assert_eq!(min_params!("abc", "def", "xyz", "mno"), "abc");
}

#[test]
fn test_sum() {
    assert_eq!(sum(vec![-40, 60, 3]), 23);

    let strings: Vec<String> = ["a", "b", "c", "d"].map(String::from).to_vec();
    assert_eq!(sum(strings), "abcd");
}

#[test]
fn test_sum_params() {
    assert_eq!(sum_params!(-40, 60, 3), 23);
    assert_eq!(
        sum_params!(
            "abc".to_string(),
            "def".to_string(),
            "xyz".to_string(),
            "mno".to_string()
        ),
        "abcdefxyzmno"
    );
}

#[test]
fn test_sum_wraps_instead_of_panicking() {
    assert_eq!(sum([i8::MAX, 1]), i8::MIN);
}
