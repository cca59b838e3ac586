//! ARM PL011 UART driver.

use arm_pl011::Pl011Uart;
use lazyinit::LazyInit;

use crate::console::tty::ByteTransport;
use crate::hal::Mutex;

static UART: LazyInit<Mutex<Pl011Uart>> = LazyInit::new();

fn do_putchar(uart: &mut Pl011Uart, c: u8) {
    match c {
        b'\n' => {
            uart.putchar(b'\r');
            uart.putchar(b'\n');
        }
        c => uart.putchar(c),
    }
}

/// Writes a byte to the console.
pub fn putchar(c: u8) {
    do_putchar(&mut UART.lock(), c);
}

/// Writes a whole string with the device lock held, so the burst is not
/// interleaved with other output.
pub fn puts(s: &str) {
    let mut uart = UART.lock();
    for &byte in s.as_bytes() {
        do_putchar(&mut uart, byte);
    }
}

/// Reads a byte from the console, or returns [`None`] if no input is
/// available.
pub fn getchar() -> Option<u8> {
    UART.lock().getchar()
}

/// Early stage initialization of the PL011 UART driver
/// (`config::PL011_UART_BASE` on the supported boards).
pub fn init_early(uart_base: usize) {
    UART.init_once(Mutex::new(Pl011Uart::new(uart_base as *mut u8)));
    UART.lock().init();
}

/// Blocking byte transport over the PL011, consumed by the console loop.
pub struct Pl011Transport;

impl ByteTransport for Pl011Transport {
    fn read_byte(&mut self) -> u8 {
        // The console's single blocking point.
        loop {
            if let Some(c) = getchar() {
                return c;
            }
            core::hint::spin_loop();
        }
    }

    fn write_byte(&mut self, byte: u8) {
        putchar(byte);
    }
}
