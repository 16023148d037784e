use crate::core::ball::Ball;
use crate::core::config::DemoConfig;

/// A diagnostic call bound to a method, independent of any instance. The
/// receiver is supplied at the call site.
type DiagFn = fn(&Ball, f32, i32) -> i32;

/// Run the demo sequence: construct two balls, report the shared count after
/// each, and invoke the diagnostic on the first through a bound `fn` value.
pub fn run_driver(cfg: &DemoConfig) {
    let diag: DiagFn = Ball::do_it;

    let b1 = Ball::new();
    println!("ball_count: {}", Ball::count());

    let _ = diag(&b1, cfg.diag.a, cfg.diag.b);

    let _b2 = Ball::new();
    println!("ball_count: {}", Ball::count());
}
