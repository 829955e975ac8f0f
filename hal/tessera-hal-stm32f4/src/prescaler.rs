//! SPI baud-rate prescaler selection
//!
//! STM32F4 SPI peripherals derive their bit clock from the APB bus clock
//! through a fixed table of power-of-two divisors. Given a requested bit
//! frequency, [`select_divisor`] picks the tightest divisor that does not
//! overshoot it: under-dividing would clock the slave past its rating,
//! over-dividing merely wastes margin.

/// One entry of a peripheral's divisor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Prescaler {
    /// Division factor applied to the bus clock
    pub divisor: u32,
    /// CR1 BR[2:0] field value, pre-shifted into register position
    pub code: u32,
}

const fn br_bits(value: u32) -> u32 {
    // BR[2:0] lives at CR1 bits 5:3
    value << 3
}

/// Divisor table of the STM32F4 SPI peripheral, ascending by divisor
pub const PRESCALER_TABLE: [Prescaler; 8] = [
    Prescaler { divisor: 2, code: br_bits(0b000) },
    Prescaler { divisor: 4, code: br_bits(0b001) },
    Prescaler { divisor: 8, code: br_bits(0b010) },
    Prescaler { divisor: 16, code: br_bits(0b011) },
    Prescaler { divisor: 32, code: br_bits(0b100) },
    Prescaler { divisor: 64, code: br_bits(0b101) },
    Prescaler { divisor: 128, code: br_bits(0b110) },
    Prescaler { divisor: 256, code: br_bits(0b111) },
];

/// Pick the table index of the best divisor for a requested bit clock
///
/// Returns the index of the smallest divisor `d` with
/// `bus_hz / d <= target_hz`, so the produced frequency never exceeds the
/// request. Requests outside what the table can produce clamp to the
/// nearest end and log an advisory warning; the call itself never fails.
///
/// Works on any non-empty table ascending by divisor; nothing here
/// assumes the entry count or power-of-two spacing of
/// [`PRESCALER_TABLE`].
pub fn select_divisor(bus_hz: u32, target_hz: u32, table: &[Prescaler]) -> usize {
    debug_assert!(!table.is_empty());
    debug_assert!(target_hz > 0);

    let want = bus_hz / target_hz;

    let last = table.len() - 1;
    if want <= table[0].divisor || last == 0 {
        // Requested frequency at or above the fastest this bus can do.
        // The fastest divisor may still overshoot the slave's rating;
        // that trade-off belongs to the caller.
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "spi prescaler clamped to fastest divisor /{} (wanted /{})",
            table[0].divisor,
            want
        );
        return 0;
    }
    if want > table[last - 1].divisor {
        // Requested frequency near or below the slowest this bus can do.
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "spi prescaler clamped to slowest divisor /{} (wanted /{})",
            table[last].divisor,
            want
        );
        return last;
    }

    // Smallest index whose divisor is >= want; the predecessor is < want
    // by loop invariant, so this is the tightest non-overshooting choice.
    let mut low = 0;
    let mut high = last;
    while low < high {
        let mid = (low + high) / 2;
        if table[mid].divisor < want {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "spi prescaler: requested {} Hz, divisor /{} gives {} Hz",
        target_hz,
        table[low].divisor,
        bus_hz / table[low].divisor
    );
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linear-scan reference: smallest divisor >= want, clamped to the ends
    fn reference_index(bus_hz: u32, target_hz: u32, table: &[Prescaler]) -> usize {
        let want = bus_hz / target_hz;
        table
            .iter()
            .position(|p| p.divisor >= want)
            .unwrap_or(table.len() - 1)
    }

    #[test]
    fn test_table_is_ascending() {
        for pair in PRESCALER_TABLE.windows(2) {
            assert!(pair[0].divisor < pair[1].divisor);
        }
    }

    #[test]
    fn test_register_codes() {
        // BR[2:0] at bits 5:3: /2 -> 0x00, /16 -> 0x18, /256 -> 0x38
        assert_eq!(PRESCALER_TABLE[0].code, 0x0000);
        assert_eq!(PRESCALER_TABLE[3].code, 0x0018);
        assert_eq!(PRESCALER_TABLE[7].code, 0x0038);
    }

    #[test]
    fn test_known_selections() {
        // APB2 at 22.5 MHz, HCMS rated 5 MHz: want = 4, take /4
        let idx = select_divisor(22_500_000, 5_000_000, &PRESCALER_TABLE);
        assert_eq!(PRESCALER_TABLE[idx].divisor, 4);

        // APB2 at 90 MHz: want = 18, next divisor up is /32
        let idx = select_divisor(90_000_000, 5_000_000, &PRESCALER_TABLE);
        assert_eq!(PRESCALER_TABLE[idx].divisor, 32);
    }

    #[test]
    fn test_exact_match_takes_that_divisor() {
        // want lands exactly on a table entry: bus/d == target, keep d
        let idx = select_divisor(80_000_000, 10_000_000, &PRESCALER_TABLE);
        assert_eq!(PRESCALER_TABLE[idx].divisor, 8);
    }

    #[test]
    fn test_clamps_fast_end() {
        // Request at or above bus/2 clamps to index 0
        assert_eq!(select_divisor(45_000_000, 45_000_000, &PRESCALER_TABLE), 0);
        assert_eq!(select_divisor(45_000_000, 30_000_000, &PRESCALER_TABLE), 0);
        // Request faster than the bus itself still clamps
        assert_eq!(select_divisor(45_000_000, 90_000_000, &PRESCALER_TABLE), 0);
    }

    #[test]
    fn test_clamps_slow_end() {
        // Request far below bus/256 clamps to the last index
        let idx = select_divisor(90_000_000, 100, &PRESCALER_TABLE);
        assert_eq!(idx, PRESCALER_TABLE.len() - 1);
    }

    #[test]
    fn test_sweep_matches_reference() {
        // Sweep every achievable want value for a small bus clock and
        // check tightness against the linear reference.
        let bus_hz = 25_600;
        for target_hz in 1..=bus_hz {
            let idx = select_divisor(bus_hz, target_hz, &PRESCALER_TABLE);
            assert!(idx < PRESCALER_TABLE.len());
            assert_eq!(
                idx,
                reference_index(bus_hz, target_hz, &PRESCALER_TABLE),
                "target {} Hz",
                target_hz
            );

            let want = bus_hz / target_hz;
            let chosen = PRESCALER_TABLE[idx].divisor;
            let feasible = want <= PRESCALER_TABLE[PRESCALER_TABLE.len() - 1].divisor;
            // Never overshoots the request unless clamped to an end
            if idx > 0 && feasible {
                assert!(chosen >= want);
                // Tight: the next-faster divisor would overshoot
                assert!(PRESCALER_TABLE[idx - 1].divisor < want);
            }
        }
    }

    #[test]
    fn test_table_shape_independence() {
        // A sparse three-entry table, not power-of-two spaced
        let table = [
            Prescaler { divisor: 3, code: 0 },
            Prescaler { divisor: 10, code: 1 },
            Prescaler { divisor: 48, code: 2 },
        ];
        assert_eq!(select_divisor(100, 50, &table), 0); // want 2
        assert_eq!(select_divisor(100, 20, &table), 1); // want 5
        assert_eq!(select_divisor(100, 10, &table), 1); // want 10, exact
        assert_eq!(select_divisor(100, 3, &table), 2); // want 33 > 10
        assert_eq!(select_divisor(100, 1, &table), 2); // want 100, clamp
    }

    #[test]
    fn test_single_entry_table() {
        let table = [Prescaler { divisor: 4, code: 0 }];
        assert_eq!(select_divisor(100, 100, &table), 0);
        assert_eq!(select_divisor(100, 1, &table), 0);
    }
}
