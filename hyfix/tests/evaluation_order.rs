use std::{cell::Cell, rc::Rc, time::Instant};

use hyfix::prelude::*;

/// Factorial step reporting how many times the step ran and how many times the proxy fired.
fn counting_factorial(
    unfolds: Rc<Cell<usize>>,
    proxy_calls: Rc<Cell<usize>>,
) -> impl Fn(Proxy<u64, u64>) -> Box<dyn Fn(u64) -> u64> {
    move |rec: Proxy<u64, u64>| -> Box<dyn Fn(u64) -> u64> {
        unfolds.set(unfolds.get() + 1);
        let proxy_calls = Rc::clone(&proxy_calls);
        Box::new(move |n: u64| {
            if n <= 1 {
                1
            } else {
                proxy_calls.set(proxy_calls.get() + 1);
                n * rec.call(n - 1)
            }
        })
    }
}

fn fibonacci_step(rec: Proxy<u64, u64>) -> impl Fn(u64) -> u64 {
    move |n| {
        if n <= 2 {
            1
        } else {
            rec.call(n - 1) + rec.call(n - 2)
        }
    }
}

#[test]
fn realizing_never_calls_the_proxy() {
    let unfolds = Rc::new(Cell::new(0));
    let proxy_calls = Rc::new(Cell::new(0));
    let _factorial = fix(counting_factorial(
        Rc::clone(&unfolds),
        Rc::clone(&proxy_calls),
    ));

    assert_eq!(unfolds.get(), 1, "only the outermost unfolding is built");
    assert_eq!(proxy_calls.get(), 0);
}

#[test]
fn realizing_a_looping_step_returns_immediately() {
    // Unfolded eagerly, this step would never produce a value.
    let start = Instant::now();
    let looping = fix(|rec: Proxy<u64, u64>| move |n: u64| rec.call(n));
    let _ = looping.clone();
    assert!(start.elapsed().as_secs() < 1);
}

#[test]
fn base_cases_bypass_the_proxy() {
    let unfolds = Rc::new(Cell::new(0));
    let proxy_calls = Rc::new(Cell::new(0));
    let factorial = fix(counting_factorial(
        Rc::clone(&unfolds),
        Rc::clone(&proxy_calls),
    ));

    assert_eq!(factorial.call(0), 1);
    assert_eq!(factorial.call(1), 1);
    assert_eq!(proxy_calls.get(), 0);
    assert_eq!(unfolds.get(), 1);
}

#[test]
fn one_unfolding_per_recursive_descent() {
    let unfolds = Rc::new(Cell::new(0));
    let proxy_calls = Rc::new(Cell::new(0));
    let factorial = fix(counting_factorial(
        Rc::clone(&unfolds),
        Rc::clone(&proxy_calls),
    ));

    assert_eq!(factorial.call(5), 120);
    // 5 -> 4 -> 3 -> 2 -> 1
    assert_eq!(proxy_calls.get(), 4);
    assert_eq!(unfolds.get(), 1 + 4);
}

#[test]
fn interleaved_calls_are_independent() {
    let f = fix(|rec: Proxy<u64, u64>| {
        move |n: u64| if n <= 1 { 1 } else { n * rec.call(n - 1) }
    });
    let g = fix(fibonacci_step);

    assert_eq!([f.call(5), g.call(3), f.call(6)], [120, 2, 720]);
    assert_eq!([f.call(6), f.call(5), g.call(3)], [720, 120, 2]);
    assert_eq!([g.call(3), f.call(6), f.call(5)], [2, 720, 120]);
}

#[test]
fn realized_functions_from_equal_steps_share_nothing() {
    let unfolds = Rc::new(Cell::new(0));
    let proxy_calls = Rc::new(Cell::new(0));
    let first = fix(counting_factorial(
        Rc::clone(&unfolds),
        Rc::clone(&proxy_calls),
    ));
    let second = fix(counting_factorial(
        Rc::clone(&unfolds),
        Rc::clone(&proxy_calls),
    ));
    assert_eq!(unfolds.get(), 2);

    assert_eq!(first.call(4), 24);
    let after_first = proxy_calls.get();
    assert_eq!(second.call(4), 24);
    assert_eq!(proxy_calls.get(), 2 * after_first);
    assert_eq!(first.call(4), second.call(4));
}

#[test]
fn repeated_calls_do_not_accumulate_state() {
    let fibonacci = fix(fibonacci_step);
    let first: Vec<u64> = (1..=10).map(|n| fibonacci.call(n)).collect();
    let second: Vec<u64> = (1..=10).rev().map(|n| fibonacci.call(n)).collect();
    assert_eq!(first, second.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn reentrant_call_from_inside_a_step() {
    // A second function is realized and driven while the outer one is mid-descent.
    let sum_of_factorials = fix(|rec: Proxy<u64, u64>| {
        move |n: u64| {
            if n == 0 {
                1
            } else {
                let factorial = fix(|inner: Proxy<u64, u64>| {
                    move |k: u64| if k <= 1 { 1 } else { k * inner.call(k - 1) }
                });
                factorial.call(n) + rec.call(n - 1)
            }
        }
    });
    // 0! + 1! + 2! + 3! + 4!
    assert_eq!(sum_of_factorials.call(4), 1 + 1 + 2 + 6 + 24);
}
