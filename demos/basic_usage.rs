// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// tracing events emitted by unbounded divisions and checked applies.

use bounded_value::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Bounded Value Example ===\n");

    // Scalars are promoted to a one-step bracket
    let tenth = BoundedValue::from(0.1);
    println!("0.1 promoted: [{:e}, {:e}]", tenth.lower(), tenth.upper());

    // Accumulate 0.1 ten times
    println!("\nSumming 0.1 ten times...");
    let mut acc = BoundedValue::from(0.0);
    for _ in 0..10 {
        acc += tenth;
    }
    println!("  typical: {:.17}", acc.typical());
    println!("  bounds:  [{:.17}, {:.17}]", acc.lower(), acc.upper());
    println!("  display: {}", acc);
    println!("  encloses 1.0: {}", acc.contains(1.0));

    // Monotonic functions through apply
    println!("\nPropagating through monotonic functions...");
    let two = BoundedValue::from(2.0);
    let root = two.sqrt();
    println!("  sqrt(2)   = {}", root);
    println!("  sqrt(2)^2 = {}", root * root);
    let logistic = two.apply(|x| 1.0 / (1.0 + (-x).exp()));
    println!("  logistic(2) = {:.10}", logistic);

    // Division by a bracket touching zero
    println!("\nDividing by a value that might be zero...");
    let maybe_zero = BoundedValue::from(1.0) - BoundedValue::from(1.0);
    let q = BoundedValue::from(3.0) / maybe_zero;
    println!("  3 / (1 - 1) = [{}, {}]", q.lower(), q.upper());
    match BoundedValue::from(3.0).checked_div(maybe_zero) {
        Ok(value) => println!("  checked: {}", value),
        Err(e) => println!("  checked: {}", e),
    }

    // Sampled contract checking
    println!("\nChecking the monotonicity contract...");
    let config = CheckConfig::default();
    let interval = BoundedValue::new(-1.0, 0.0, 1.0);
    match interval.apply_checked(|x| x * x, &config) {
        Ok(value) => println!("  x^2 over [-1, 1]: {}", value),
        Err(e) => println!("  x^2 over [-1, 1] rejected: {}", e),
    }

    // Parsing
    println!("\nParsing input...");
    match "6.02214076e23".parse::<BoundedValue>() {
        Ok(avogadro) => println!("  parsed: {}", avogadro),
        Err(e) => println!("  parse error: {}", e),
    }

    println!("\n=== Example Complete ===");
}
