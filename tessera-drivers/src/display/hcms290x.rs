//! HCMS-290x quad-character LED display driver
//!
//! The HCMS-290x is a four character 5x7 dot-matrix LED display fed over
//! a clocked serial link with a latch. Two register spaces sit behind
//! one data line, selected by the RS pin at the moment chip enable
//! falls: the control registers (sleep, brightness) and the dot
//! register, a 160-bit shift register holding the pixel columns.
//!
//! # Write protocol
//!
//! Every write follows the same window discipline:
//!
//! 1. drive RS for the target space, then wait >= 1 us before opening
//!    the window (RS must never move while CE is low);
//! 2. pull CE low;
//! 3. stream the payload MSB-first, one byte per transfer;
//! 4. hold >= 10 us, then raise CE to latch the shifted-in bits;
//! 5. clock one dummy zero byte - the internal latch strobe needs a
//!    clock edge after CE rises, not just the CE edge.
//!
//! The serial channel must be configured before [`Hcms290x::init`] runs;
//! [`CLOCK_EDGE`] and [`MAX_CLOCK_HZ`] are what this device expects.
//!
//! All operations block. A scroll holds the caller for roughly one
//! second per frame and cannot be cancelled mid-animation.

use core::fmt::Write;

use heapless::String;
use tessera_hal::gpio::{ConfigurePin, OutputPin, PinConfig, PinMode, Pull, Speed};
use tessera_hal::spi::{ClockEdge, SpiTx};
use tessera_hal::timer::Delay;

use super::font;

/// Characters in the display window
pub const FRAME_CHARS: usize = 4;

/// Payload bytes of one dot-register frame
const FRAME_BYTES: usize = FRAME_CHARS * font::GLYPH_COLUMNS;

/// Clock edge the device samples data on
pub const CLOCK_EDGE: ClockEdge = ClockEdge::TrailingRising;

/// Rated maximum shift clock at 5 V logic (4 MHz at 3 V)
pub const MAX_CLOCK_HZ: u32 = 5_000_000;

/// Settle time between register select and chip enable
const RS_SETTLE_US: u32 = 1;
/// Hold time between the last payload byte and the latch edge
const LATCH_HOLD_US: u32 = 10;
/// Reset line low time during init
const RESET_HOLD_MS: u32 = 10;
/// Pause after each scroll frame
const SCROLL_FRAME_MS: u32 = 1000;

/// Register space addressed by a write window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum RegisterSpace {
    /// Control words: sleep and brightness (RS high)
    Control,
    /// Dot register: the pixel shift register (RS low)
    Dot,
}

/// Control word 0 fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord {
    /// `false` puts the display to sleep: pixels off, oscillator stopped
    pub wake: bool,
    /// Peak pixel current, 2 bits: 0b01 = 31 %, 0b10 = 50 %, 0b00 = 73 %, 0b11 = 100 %
    pub peak_current: u8,
    /// Brightness duty cycle, 4 bits: 0x0..=0xF for 0..100 %
    pub pwm: u8,
}

impl ControlWord {
    /// Pack into the wire byte; over-wide fields truncate to their width
    pub fn pack(self) -> u8 {
        // bit 7 = 0 selects control word 0
        (u8::from(self.wake) << 6) | ((self.peak_current & 0x03) << 4) | (self.pwm & 0x0F)
    }
}

/// Brightness this deployment runs at: full duty, 73 % peak current
const FIXED_BRIGHTNESS: ControlWord = ControlWord {
    wake: true,
    peak_current: 0b00,
    pwm: 0x0F,
};

/// HCMS-290x driver
///
/// Generic over the serial transmitter, the CE/RS/reset pin roles and
/// the delay source. Takes `&mut self` for every operation, so a write
/// window can never be interleaved with another write to the same
/// device.
pub struct Hcms290x<SPI, CE, RS, RST, D> {
    spi: SPI,
    ce: CE,
    rs: RS,
    reset: RST,
    delay: D,
}

impl<SPI, CE, RS, RST, D> Hcms290x<SPI, CE, RS, RST, D>
where
    SPI: SpiTx,
    CE: OutputPin + ConfigurePin,
    RS: OutputPin + ConfigurePin,
    RST: OutputPin + ConfigurePin,
    D: Delay,
{
    /// Create a new driver from its collaborators
    ///
    /// Call [`init`](Self::init) before the first write.
    pub fn new(spi: SPI, ce: CE, rs: RS, reset: RST, delay: D) -> Self {
        Self {
            spi,
            ce,
            rs,
            reset,
            delay,
        }
    }

    /// Bring the display up from power-on
    ///
    /// Configures the three pin roles, pulses reset and clears the dot
    /// register before the first wake, so power-up shift-register
    /// garbage is never latched onto the pixels.
    pub fn init(&mut self) {
        let ce_config = PinConfig {
            mode: PinMode::PushPullOutput,
            pull: Pull::Down,
            speed: Speed::VeryHigh,
        };
        self.ce.configure(&ce_config);
        let line_config = PinConfig {
            pull: Pull::None,
            ..ce_config
        };
        self.rs.configure(&line_config);
        self.reset.configure(&line_config);

        // Idle levels: window shut, control space selected
        self.reset.set_high();
        self.rs.set_high();
        self.ce.set_high();

        // Reset pulse
        self.reset.set_low();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.reset.set_high();

        self.clear();
        self.wake();
    }

    /// Wake the display at the deployment's fixed brightness
    // TODO: brightness control - pwm/peak_current are packed but not
    // exposed as a public knob yet
    pub fn wake(&mut self) {
        self.write_control(FIXED_BRIGHTNESS);
    }

    /// Put the display to sleep; pixel data is retained
    pub fn sleep(&mut self) {
        self.write_control(ControlWord {
            wake: false,
            ..FIXED_BRIGHTNESS
        });
    }

    /// Write a control word
    pub fn write_control(&mut self, word: ControlWord) {
        self.open_window(RegisterSpace::Control);
        self.send(&[word.pack()]);
        self.close_window();
    }

    /// Stream a four-character frame into the dot register
    ///
    /// Character codes index the glyph table directly; codes past its
    /// end render as spaces. The whole 20-byte frame goes out in a
    /// single write window.
    pub fn write_glyphs(&mut self, chars: [u8; FRAME_CHARS]) {
        self.open_window(RegisterSpace::Dot);
        for code in chars {
            for &column in font::glyph(code) {
                self.send(&[column]);
            }
        }
        self.close_window();
    }

    /// Blank the display
    pub fn clear(&mut self) {
        self.open_window(RegisterSpace::Dot);
        for _ in 0..FRAME_BYTES {
            self.send(&[0x00]);
        }
        self.close_window();
    }

    /// Render up to the first four bytes of `text`, space-padded
    ///
    /// Anything past the fourth byte is silently dropped.
    pub fn render_str(&mut self, text: &str) {
        let mut frame = [b' '; FRAME_CHARS];
        for (slot, &code) in frame.iter_mut().zip(text.as_bytes()) {
            *slot = code;
        }
        self.write_glyphs(frame);
    }

    /// Render an integer zero-padded to four digits
    ///
    /// Values wider than the window truncate to their leading four
    /// characters.
    pub fn render_int(&mut self, value: i32) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "{:04}", value);
        self.render_str(&text);
    }

    /// Render a float with one decimal place, `xx.x` style
    ///
    /// Wider values truncate to the window.
    pub fn render_float(&mut self, value: f32) {
        let mut text: String<64> = String::new();
        let _ = write!(text, "{:.1}", value);
        self.render_str(&text);
    }

    /// Render an error code as `Ennn`
    pub fn render_error(&mut self, code: i32) {
        let mut text: String<16> = String::new();
        let _ = write!(text, "E{:03}", code);
        self.render_str(&text);
    }

    /// Scroll a string through the four-character window
    ///
    /// Text that fits the window (three visible characters or fewer) is
    /// rendered once without any pause. Longer text produces `len - 3`
    /// frames, advancing one character per frame with a fixed one-second
    /// pause after each, the final frame holding the last four
    /// characters. Blocks for the whole animation.
    pub fn scroll(&mut self, text: &str) {
        let codes = text.as_bytes();
        if codes.len() <= FRAME_CHARS - 1 {
            self.render_str(text);
            return;
        }
        for start in 0..=codes.len() - FRAME_CHARS {
            let mut frame = [0u8; FRAME_CHARS];
            frame.copy_from_slice(&codes[start..start + FRAME_CHARS]);
            self.write_glyphs(frame);
            self.delay.delay_ms(SCROLL_FRAME_MS);
        }
    }

    /// Release the owned collaborators
    pub fn release(self) -> (SPI, CE, RS, RST, D) {
        (self.spi, self.ce, self.rs, self.reset, self.delay)
    }

    fn open_window(&mut self, space: RegisterSpace) {
        // RS is sampled at the CE falling edge and must not move while
        // the window is open
        debug_assert!(self.ce.is_set_high());
        self.rs.set_state(space == RegisterSpace::Control);
        self.delay.delay_us(RS_SETTLE_US);
        self.ce.set_low();
    }

    fn close_window(&mut self) {
        self.delay.delay_us(LATCH_HOLD_US);
        self.ce.set_high();
        // The latch strobe completes on the next clock edge after CE
        // rises; a dummy byte provides it
        self.send(&[0x00]);
    }

    fn send(&mut self, bytes: &[u8]) {
        // Aborting mid-window would leave the shift register half
        // written, so a failed transfer is logged and the stream goes on
        if self.spi.transmit(bytes).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("display transmit failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    /// Everything the driver did, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Ce(bool),
        Rs(bool),
        Reset(bool),
        Byte(u8),
        DelayUs(u32),
        DelayMs(u32),
    }

    type Log = RefCell<Vec<Event, 1024>>;

    #[derive(Clone, Copy)]
    enum Line {
        Ce,
        Rs,
        Reset,
    }

    struct LogPin<'a> {
        log: &'a Log,
        line: Line,
        high: bool,
        config: Option<PinConfig>,
    }

    impl<'a> LogPin<'a> {
        fn new(log: &'a Log, line: Line) -> Self {
            Self {
                log,
                line,
                high: true,
                config: None,
            }
        }
    }

    impl OutputPin for LogPin<'_> {
        fn set_high(&mut self) {
            self.high = true;
            self.record(true);
        }

        fn set_low(&mut self) {
            self.high = false;
            self.record(false);
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl LogPin<'_> {
        fn record(&self, high: bool) {
            let event = match self.line {
                Line::Ce => Event::Ce(high),
                Line::Rs => Event::Rs(high),
                Line::Reset => Event::Reset(high),
            };
            self.log.borrow_mut().push(event).unwrap();
        }
    }

    impl ConfigurePin for LogPin<'_> {
        fn configure(&mut self, config: &PinConfig) {
            self.config = Some(*config);
        }
    }

    struct LogSpi<'a> {
        log: &'a Log,
        fail: bool,
    }

    impl SpiTx for LogSpi<'_> {
        type Error = ();

        fn transmit_timeout(&mut self, data: &[u8], _timeout_ms: u32) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            for &byte in data {
                self.log.borrow_mut().push(Event::Byte(byte)).unwrap();
            }
            Ok(())
        }
    }

    struct LogDelay<'a> {
        log: &'a Log,
    }

    impl Delay for LogDelay<'_> {
        fn delay_us(&mut self, us: u32) {
            self.log.borrow_mut().push(Event::DelayUs(us)).unwrap();
        }

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::DelayMs(ms)).unwrap();
        }
    }

    type TestDriver<'a> =
        Hcms290x<LogSpi<'a>, LogPin<'a>, LogPin<'a>, LogPin<'a>, LogDelay<'a>>;

    fn driver(log: &Log) -> TestDriver<'_> {
        Hcms290x::new(
            LogSpi { log, fail: false },
            LogPin::new(log, Line::Ce),
            LogPin::new(log, Line::Rs),
            LogPin::new(log, Line::Reset),
            LogDelay { log },
        )
    }

    /// Payload bytes of each CE window (the trailing dummy is excluded)
    fn window_payloads(events: &[Event]) -> Vec<Vec<u8, 32>, 8> {
        let mut windows = Vec::new();
        let mut current: Option<Vec<u8, 32>> = None;
        for event in events {
            match event {
                Event::Ce(false) => current = Some(Vec::new()),
                Event::Ce(true) => {
                    if let Some(done) = current.take() {
                        windows.push(done).unwrap();
                    }
                }
                Event::Byte(byte) => {
                    if let Some(window) = current.as_mut() {
                        window.push(*byte).unwrap();
                    }
                }
                _ => {}
            }
        }
        windows
    }

    fn glyph_stream(chars: &[u8; FRAME_CHARS]) -> Vec<u8, 32> {
        let mut bytes = Vec::new();
        for &code in chars {
            bytes.extend_from_slice(font::glyph(code)).unwrap();
        }
        bytes
    }

    fn count(events: &[Event], wanted: Event) -> usize {
        events.iter().filter(|e| **e == wanted).count()
    }

    #[test]
    fn test_write_glyphs_window_sequence() {
        let log = Log::default();
        driver(&log).write_glyphs(*b"ABCD");
        let events = log.borrow();

        // RS to dot space, settle, one window, hold, latch, dummy
        assert_eq!(events[0], Event::Rs(false));
        assert_eq!(events[1], Event::DelayUs(RS_SETTLE_US));
        assert_eq!(events[2], Event::Ce(false));
        assert_eq!(events[events.len() - 3], Event::DelayUs(LATCH_HOLD_US));
        assert_eq!(events[events.len() - 2], Event::Ce(true));
        assert_eq!(events[events.len() - 1], Event::Byte(0x00));

        assert_eq!(count(&events, Event::Ce(false)), 1);
        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].len(), FRAME_BYTES);
        assert_eq!(windows[0], glyph_stream(b"ABCD"));
    }

    #[test]
    fn test_clear_streams_twenty_zeros() {
        let log = Log::default();
        driver(&log).clear();
        let events = log.borrow();

        assert_eq!(count(&events, Event::Ce(false)), 1);
        let windows = window_payloads(&events);
        assert_eq!(windows[0].len(), FRAME_BYTES);
        assert!(windows[0].iter().all(|&b| b == 0x00));
        // Same stream as four spaces
        assert_eq!(windows[0], glyph_stream(b"    "));
    }

    #[test]
    fn test_control_word_packing() {
        let wake = ControlWord {
            wake: true,
            peak_current: 0,
            pwm: 0,
        };
        assert_eq!(wake.pack(), 0x40);

        let asleep = ControlWord { wake: false, ..wake };
        assert_eq!(asleep.pack() & 0x40, 0);

        // bit 7 stays clear: control word 0
        let full = ControlWord {
            wake: true,
            peak_current: 0b11,
            pwm: 0x0F,
        };
        assert_eq!(full.pack(), 0x7F);

        // Over-wide fields truncate to 2 and 4 bits
        let wide = ControlWord {
            wake: false,
            peak_current: 0xFF,
            pwm: 0xFF,
        };
        assert_eq!(wide.pack(), 0x3F);
    }

    #[test]
    fn test_write_control_targets_control_space() {
        let log = Log::default();
        driver(&log).write_control(FIXED_BRIGHTNESS);
        let events = log.borrow();

        assert_eq!(events[0], Event::Rs(true));
        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].as_slice(), [0x4F].as_slice()); // wake, 73 %, full duty
        assert_eq!(events[events.len() - 1], Event::Byte(0x00));
    }

    #[test]
    fn test_render_int_matches_write_glyphs() {
        let int_log = Log::default();
        driver(&int_log).render_int(42);

        let glyph_log = Log::default();
        driver(&glyph_log).write_glyphs(*b"0042");

        assert_eq!(int_log.borrow().as_slice(), glyph_log.borrow().as_slice());
    }

    fn assert_frame(log: &Log, expected: &[u8; FRAME_CHARS]) {
        let events = log.borrow();
        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], glyph_stream(expected));
    }

    #[test]
    fn test_render_formats() {
        let log = Log::default();
        driver(&log).render_int(-5);
        assert_frame(&log, b"-005");

        let log = Log::default();
        driver(&log).render_int(123_456); // silent truncation
        assert_frame(&log, b"1234");

        let log = Log::default();
        driver(&log).render_float(12.34);
        assert_frame(&log, b"12.3");

        let log = Log::default();
        driver(&log).render_float(1.0); // space padded
        assert_frame(&log, b"1.0 ");

        let log = Log::default();
        driver(&log).render_error(7);
        assert_frame(&log, b"E007");

        let log = Log::default();
        driver(&log).render_str("HI");
        assert_frame(&log, b"HI  ");
    }

    #[test]
    fn test_scroll_short_renders_once_without_delay() {
        let log = Log::default();
        driver(&log).scroll("AB");
        let events = log.borrow();

        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], glyph_stream(b"AB  "));
        assert_eq!(count(&events, Event::DelayMs(SCROLL_FRAME_MS)), 0);
    }

    #[test]
    fn test_scroll_slides_one_character_per_frame() {
        let log = Log::default();
        driver(&log).scroll("ABCDE");
        let events = log.borrow();

        // len - 3 = 2 frames, each followed by the frame pause
        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0], glyph_stream(b"ABCD"));
        assert_eq!(windows[1], glyph_stream(b"BCDE"));
        assert_eq!(count(&events, Event::DelayMs(SCROLL_FRAME_MS)), 2);
    }

    #[test]
    fn test_scroll_exact_window_still_renders() {
        // The terminator lands exactly at slot 3: one full frame
        let log = Log::default();
        driver(&log).scroll("ABCD");
        let events = log.borrow();

        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], glyph_stream(b"ABCD"));
        assert_eq!(count(&events, Event::DelayMs(SCROLL_FRAME_MS)), 1);
    }

    #[test]
    fn test_init_clears_before_wake() {
        let log = Log::default();
        let mut d = driver(&log);
        d.init();
        let events = log.borrow();

        // Reset pulse with the required hold
        let reset_low = events
            .iter()
            .position(|e| *e == Event::Reset(false))
            .unwrap();
        assert_eq!(events[reset_low + 1], Event::DelayMs(RESET_HOLD_MS));
        assert_eq!(events[reset_low + 2], Event::Reset(true));

        // Dot-space clear first, control-space wake second
        let windows = window_payloads(&events);
        assert_eq!(windows.len(), 2);
        assert!(windows[0].iter().all(|&b| b == 0x00));
        assert_eq!(windows[1].as_slice(), [0x4F].as_slice());

        let first_window = events.iter().position(|e| *e == Event::Ce(false)).unwrap();
        assert!(reset_low < first_window);

        // Pin roles: CE pulled down, RS and reset floating, all push-pull
        let (_, ce, rs, reset, _) = d.release();
        let ce_config = ce.config.unwrap();
        assert_eq!(ce_config.mode, PinMode::PushPullOutput);
        assert_eq!(ce_config.pull, Pull::Down);
        assert_eq!(ce_config.speed, Speed::VeryHigh);
        assert_eq!(rs.config.unwrap().pull, Pull::None);
        assert_eq!(reset.config.unwrap().pull, Pull::None);
    }

    #[test]
    fn test_transmit_failure_keeps_window_discipline() {
        let log = Log::default();
        let mut d = driver(&log);
        d.spi.fail = true;
        d.write_glyphs(*b"ABCD");
        let events = log.borrow();

        // No bytes made it out, but the window still opened and latched
        assert_eq!(count(&events, Event::Ce(false)), 1);
        assert_eq!(count(&events, Event::Ce(true)), 1);
        assert!(events.iter().all(|e| !matches!(e, Event::Byte(_))));
        assert_eq!(events[events.len() - 2], Event::DelayUs(LATCH_HOLD_US));
    }
}
