use crate::core::data::complex::Complex;

const BAILOUT_MAGNITUDE_SQUARED: f64 = 4.0;
const PERIOD2_BULB_RADIUS_SQUARED: f64 = 0.0625;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub magnitude_squared: f64,
}

/// Escape-time evaluation of one point of the Mandelbrot set.
///
/// Points inside the main cardioid or the period-2 bulb are detected with
/// their exact closed-form membership tests and returned as `(0, 0.0)`
/// without iterating; both inequalities are algebraically exact, so the
/// shortcut never changes which points count as interior. Everything else
/// iterates `z ← z² + c` from zero until the orbit magnitude squared
/// reaches 4.0 or the budget runs out.
///
/// All arithmetic is plain f64; at extreme zoom the evaluator loses
/// discriminating precision rather than failing.
#[must_use]
pub fn escape_time(c: Complex, budget: u32) -> EscapeResult {
    if in_main_cardioid(c) || in_period2_bulb(c) {
        return EscapeResult {
            iterations: 0,
            magnitude_squared: 0.0,
        };
    }

    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < budget && z.magnitude_squared() < BAILOUT_MAGNITUDE_SQUARED {
        z = z * z + c;
        iterations += 1;
    }

    EscapeResult {
        iterations,
        magnitude_squared: z.magnitude_squared(),
    }
}

fn in_main_cardioid(c: Complex) -> bool {
    let shifted_real = c.real - 0.25;
    let q = shifted_real * shifted_real + c.imag * c.imag;

    q * (q + shifted_real) < 0.25 * c.imag * c.imag
}

fn in_period2_bulb(c: Complex) -> bool {
    let shifted_real = c.real + 1.0;

    shifted_real * shifted_real + c.imag * c.imag < PERIOD2_BULB_RADIUS_SQUARED
}
