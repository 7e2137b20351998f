use core::hint;

/// Busy-waits for `iterations` rounds of an empty loop.
///
/// This is not a timer: the processor is never yielded and the wall-clock
/// duration depends only on how fast the CPU runs the loop.
pub fn delay(iterations: u64) {
    spin(iterations, || {});
}

fn spin<F>(iterations: u64, mut step: F)
where
    F: FnMut(),
{
    for i in 0..iterations {
        step();
        // Keeps the optimizer from folding the loop away.
        hint::black_box(i);
    }
}
