//! Showinfo command - board identity and clock report.

use core::fmt::Write;

use crate::ShellResult;
use crate::drivers::mailbox::{PropertyTag, clock};
use crate::user::{Command, CommandContext, ShellIo};

const MB: u32 = 1024 * 1024;
const MHZ: u32 = 1_000_000;

/// Showinfo command instance.
pub static SHOWINFO: ShowInfoCommand = ShowInfoCommand;

/// Showinfo command implementation.
pub struct ShowInfoCommand;

impl Command for ShowInfoCommand {
    fn name(&self) -> &'static str {
        "showinfo"
    }

    fn description(&self) -> &'static str {
        "Show board model, revision, MAC address, memory and clocks"
    }

    fn usage(&self) -> &'static str {
        "Usage: showinfo\n\
         \n\
         Queries the firmware for board model, serial, MAC address,\n\
         revision, ARM and VideoCore memory sizes, and the ARM and UART\n\
         clock rates."
    }

    fn execute(&self, _ctx: &CommandContext, io: &mut ShellIo) -> ShellResult<()> {
        let model = io.board.query(PropertyTag::BoardModel, &[])?;
        let _ = writeln!(io.out, "Board model     : {}", model[0]);

        let serial = io.board.query(PropertyTag::BoardSerial, &[])?;
        let _ = writeln!(io.out, "Board serial    : {:08x}{:08x}", serial[1], serial[0]);

        let mac = io.board.query(PropertyTag::MacAddress, &[])?;
        // The firmware packs the six octets across the two response words
        // in transmission order.
        let octets = [
            (mac[0] >> 24) as u8,
            (mac[0] >> 16) as u8,
            (mac[0] >> 8) as u8,
            mac[0] as u8,
            (mac[1] >> 8) as u8,
            mac[1] as u8,
        ];
        let _ = writeln!(
            io.out,
            "Board MAC       : {:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5]
        );

        let revision = io.board.query(PropertyTag::BoardRevision, &[])?;
        let _ = writeln!(io.out, "Board revision  : {:x}", revision[0]);

        // Memory tags answer (base, size); clock tags answer (id, rate).
        let arm_mem = io.board.query(PropertyTag::ArmMemory, &[])?;
        let _ = writeln!(io.out, "ARM memory      : {}MB", arm_mem[1] / MB);

        let vc_mem = io.board.query(PropertyTag::VcMemory, &[])?;
        let _ = writeln!(io.out, "VC memory       : {}MB", vc_mem[1] / MB);

        let arm_clk = io.board.query(PropertyTag::ClockRate, &[clock::ARM])?;
        let _ = writeln!(io.out, "ARM clock rate  : {}MHz", arm_clk[1] / MHZ);

        let uart_clk = io.board.query(PropertyTag::ClockRate, &[clock::UART])?;
        let _ = writeln!(io.out, "UART clock rate : {}MHz", uart_clk[1] / MHZ);

        Ok(())
    }
}
