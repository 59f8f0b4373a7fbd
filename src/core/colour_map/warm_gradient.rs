use crate::core::data::colour::Colour;
use std::f64::consts::TAU;

// One palette policy with named knobs instead of ad hoc per-channel math.
// Amplitudes descend red > green > blue so the gradient reads warm; the
// phase offsets separate the hue bands.
const PALETTE_CYCLES: f64 = 3.0;
const RED_AMPLITUDE: f64 = 255.0;
const GREEN_AMPLITUDE: f64 = 170.0;
const BLUE_AMPLITUDE: f64 = 80.0;
const RED_PHASE: f64 = 0.0;
const GREEN_PHASE: f64 = 0.6;
const BLUE_PHASE: f64 = 1.2;

/// Maps an escape count to a colour from a periodic warm gradient.
///
/// Points that exhausted the budget (interior) are black. Exterior points
/// get `t = iterations / budget` fed through phase-shifted sinusoids, one
/// per channel. Pure function; callers may invoke it concurrently.
#[must_use]
pub fn warm_gradient(iterations: u32, budget: u32) -> Colour {
    if iterations >= budget {
        return Colour::BLACK;
    }

    let t = f64::from(iterations) / f64::from(budget);
    let angle = TAU * PALETTE_CYCLES * t;

    Colour {
        r: channel(RED_AMPLITUDE, angle + RED_PHASE),
        g: channel(GREEN_AMPLITUDE, angle + GREEN_PHASE),
        b: channel(BLUE_AMPLITUDE, angle + BLUE_PHASE),
    }
}

fn channel(amplitude: f64, angle: f64) -> u8 {
    (amplitude * (0.5 + 0.5 * angle.sin())) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_exhaustion_maps_to_black() {
        assert_eq!(warm_gradient(1000, 1000), Colour::BLACK);
        assert_eq!(warm_gradient(100, 100), Colour::BLACK);
    }

    #[test]
    fn test_channels_stay_within_their_amplitudes() {
        for iterations in 0..500 {
            let colour = warm_gradient(iterations, 500);

            assert!(colour.g <= GREEN_AMPLITUDE as u8);
            assert!(colour.b <= BLUE_AMPLITUDE as u8);
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        assert_eq!(warm_gradient(137, 1000), warm_gradient(137, 1000));
    }

    #[test]
    fn test_adjacent_counts_change_colour_gradually() {
        // Continuity in t: one iteration step moves each channel by at most
        // the sinusoid's worst-case slope over that step.
        let budget = 1000;
        let max_step = (RED_AMPLITUDE * 0.5 * TAU * PALETTE_CYCLES / f64::from(budget)).ceil()
            as i32
            + 1;

        for iterations in 0..200 {
            let a = warm_gradient(iterations, budget);
            let b = warm_gradient(iterations + 1, budget);

            assert!((i32::from(a.r) - i32::from(b.r)).abs() <= max_step);
            assert!((i32::from(a.g) - i32::from(b.g)).abs() <= max_step);
            assert!((i32::from(a.b) - i32::from(b.b)).abs() <= max_step);
        }
    }

    #[test]
    fn test_exterior_bands_are_not_uniformly_black() {
        let non_black = (0..400)
            .map(|iterations| warm_gradient(iterations, 400))
            .filter(|&colour| colour != Colour::BLACK)
            .count();

        assert!(non_black > 300);
    }
}
