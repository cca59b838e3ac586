//! VideoCore property mailbox.
//!
//! Request/response channel to the firmware, used by `showinfo` to read
//! board identity, memory split and clock rates. One property request is
//! a 16-byte aligned word buffer handed to channel 8; the firmware
//! rewrites the buffer in place and posts the same address back.

use core::sync::atomic::{Ordering, fence};

use bitflags::bitflags;
use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, WriteOnly};

use crate::ShellResult;

register_structs! {
    /// Mailbox register block.
    #[allow(non_snake_case)]
    pub MailboxRegs {
        (0x00 => READ: ReadOnly<u32>),
        (0x04 => _reserved0),
        (0x18 => STATUS: ReadOnly<u32>),
        (0x1c => _reserved1),
        (0x20 => WRITE: WriteOnly<u32>),
        (0x24 => @END),
    }
}

bitflags! {
    /// STATUS register bits.
    #[derive(Clone, Copy)]
    struct MailboxStatus: u32 {
        const FULL = 1 << 31;
        const EMPTY = 1 << 30;
    }
}

/// Property channel number. The low four bits of the doorbell word carry
/// the channel, the rest the buffer address.
const CHANNEL_PROPERTY: u32 = 8;

const CODE_REQUEST: u32 = 0;
const CODE_RESPONSE_OK: u32 = 0x8000_0000;

/// Property tags understood by [`BoardQuery::query`].
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTag {
    BoardModel = 0x0001_0001,
    BoardRevision = 0x0001_0002,
    MacAddress = 0x0001_0003,
    BoardSerial = 0x0001_0004,
    ArmMemory = 0x0001_0005,
    VcMemory = 0x0001_0006,
    ClockRate = 0x0003_0002,
}

/// Clock ids for [`PropertyTag::ClockRate`].
pub mod clock {
    pub const UART: u32 = 2;
    pub const ARM: u32 = 3;
}

/// Response words of one property query. Interpretation (byte order, unit
/// conversion) belongs to the caller.
pub type PropertyWords = [u32; 8];

/// Board query capability consumed by the showinfo handler. Implemented
/// by [`Mailbox`] on hardware and by mocks under test.
pub trait BoardQuery {
    /// Issue one tagged property request and return the response words.
    fn query(&mut self, tag: PropertyTag, args: &[u32]) -> ShellResult<PropertyWords>;
}

const BUFFER_WORDS: usize = 24;

/// Value area inside the property buffer: word 5 up to the end tag.
const VALUE_OFFSET: usize = 5;

/// The firmware requires a 16-byte aligned buffer; the low address bits
/// are reused for the channel number.
#[repr(C, align(16))]
struct PropertyBuffer([u32; BUFFER_WORDS]);

/// VideoCore property mailbox device.
pub struct Mailbox {
    regs: *mut MailboxRegs,
    buf: PropertyBuffer,
}

// The register pointer targets device memory that exists for the process
// lifetime.
unsafe impl Send for Mailbox {}

impl Mailbox {
    /// Construct from the MMIO base address (`config::MBOX_BASE`).
    pub const fn new(base: *mut u8) -> Self {
        Self {
            regs: base as *mut MailboxRegs,
            buf: PropertyBuffer([0; BUFFER_WORDS]),
        }
    }

    fn regs(&self) -> &MailboxRegs {
        unsafe { &*self.regs }
    }

    fn status(&self) -> MailboxStatus {
        MailboxStatus::from_bits_truncate(self.regs().STATUS.get())
    }

    /// Ring the doorbell with the current buffer and wait for the matching
    /// response. The firmware rewrites the buffer behind the compiler's
    /// back, hence the fences around the MMIO handshake.
    fn call(&mut self) -> ShellResult<()> {
        let addr = (&raw const self.buf) as usize as u32;
        anyhow::ensure!(addr & 0xF == 0, "property buffer not 16-byte aligned");
        let message = addr | CHANNEL_PROPERTY;

        while self.status().contains(MailboxStatus::FULL) {
            core::hint::spin_loop();
        }

        fence(Ordering::SeqCst);
        self.regs().WRITE.set(message);

        loop {
            while self.status().contains(MailboxStatus::EMPTY) {
                core::hint::spin_loop();
            }
            // Drain responses for other channels until ours comes back.
            if self.regs().READ.get() == message {
                break;
            }
        }
        fence(Ordering::SeqCst);

        anyhow::ensure!(
            self.buf.0[1] == CODE_RESPONSE_OK,
            "mailbox request failed: {:#010x}",
            self.buf.0[1]
        );
        Ok(())
    }
}

impl BoardQuery for Mailbox {
    fn query(&mut self, tag: PropertyTag, args: &[u32]) -> ShellResult<PropertyWords> {
        anyhow::ensure!(
            args.len() <= core::mem::size_of::<PropertyWords>() / 4,
            "too many request arguments"
        );

        let words = &mut self.buf.0;
        words.fill(0);
        words[0] = (BUFFER_WORDS * 4) as u32;
        words[1] = CODE_REQUEST;
        words[2] = tag as u32;
        words[3] = core::mem::size_of::<PropertyWords>() as u32;
        words[4] = CODE_REQUEST;
        words[VALUE_OFFSET..VALUE_OFFSET + args.len()].copy_from_slice(args);
        // Words past the value area stay zero: the end tag.

        self.call()?;

        let mut response = [0u32; 8];
        response.copy_from_slice(&self.buf.0[VALUE_OFFSET..VALUE_OFFSET + 8]);
        Ok(response)
    }
}
