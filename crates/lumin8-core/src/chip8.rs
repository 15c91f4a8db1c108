use crate::error::Chip8Error;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::screen::Screen;

/// Total addressable RAM.
pub const RAM_SIZE: usize = 4096;

/// Load base for program images; everything below is interpreter territory.
pub const ROM_BASE: usize = 0x200;

/// Nesting depth of the call stack.
const STACK_DEPTH: usize = 16;

/// Bytes per built-in digit sprite.
const FONT_HEIGHT: u16 = 5;

/// Built-in hexadecimal digit sprites, five bytes per digit, stored from
/// address 0x000 so FX29 can point I at them.
const FONT_SPRITES: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// A complete CHIP-8 machine: RAM, registers, call stack, timers, screen,
/// and keypad.
///
/// The machine is entirely passive; the host drives it by calling
/// [`step`](Chip8::step) for each instruction and
/// [`tick_timers`](Chip8::tick_timers) at 60 Hz, and reads the
/// [`Screen`] back out to present it.
///
/// Behavior notes (the quirk set is fixed, not configurable):
/// - 8XY6/8XYE shift a copy of VY into VX (COSMAC interpreter behavior).
/// - FX55/FX65 advance I by X+1.
/// - FX0A completes on a key *release*, and repeats until one arrives.
/// - Sprite coordinates wrap per pixel on both axes.
/// - VF is written after the result for the arithmetic/shift group, so
///   VF-as-destination still receives the flag.
pub struct Chip8 {
    ram: [u8; RAM_SIZE],
    v: [u8; 16],
    i: u16,
    // Invariant: pc and i always stay masked to the 12-bit address space.
    pc: u16,
    stack: [u16; STACK_DEPTH],
    sp: usize,
    delay: u8,
    sound: u8,
    screen: Screen,
    keypad: Keypad,
}

impl Chip8 {
    pub fn new() -> Self {
        let mut ram = [0; RAM_SIZE];
        ram[..FONT_SPRITES.len()].copy_from_slice(&FONT_SPRITES);

        Self {
            ram,
            v: [0; 16],
            i: 0,
            pc: ROM_BASE as u16,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay: 0,
            sound: 0,
            screen: Screen::new(),
            keypad: Keypad::default(),
        }
    }

    /// Resets the machine and copies `rom` to the load base.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Chip8Error> {
        const MAX: usize = RAM_SIZE - ROM_BASE;

        if rom.len() > MAX {
            return Err(Chip8Error::RomTooLarge {
                len: rom.len(),
                max: MAX,
            });
        }

        *self = Self::new();
        self.ram[ROM_BASE..ROM_BASE + rom.len()].copy_from_slice(rom);
        log::debug!("loaded {}-byte ROM at {ROM_BASE:#05X}", rom.len());
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    /// Remaining delay-timer ticks.
    pub fn delay_timer(&self) -> u8 {
        self.delay
    }

    /// Remaining sound-timer ticks; nonzero means the buzzer would sound.
    pub fn sound_timer(&self) -> u8 {
        self.sound
    }

    /// Decrements both timers toward zero. Call at 60 Hz.
    pub fn tick_timers(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    /// Fetches, decodes, and executes one instruction.
    pub fn step(&mut self) -> Result<(), Chip8Error> {
        let at = self.pc;
        let op = self.fetch();
        log::trace!("{at:03X}: {op}");
        self.execute(op, at)
    }

    fn fetch(&mut self) -> Opcode {
        let hi = self.ram[self.pc as usize];
        let lo = self.ram[(self.pc as usize + 1) & (RAM_SIZE - 1)];
        self.pc = (self.pc + 2) & 0x0FFF;
        Opcode(u16::from(hi) << 8 | u16::from(lo))
    }

    /// Advances past the next instruction (the 3/4/5/9/E skip families).
    fn skip(&mut self) {
        self.pc = (self.pc + 2) & 0x0FFF;
    }

    /// Executes `op`. `at` is the address it was fetched from, used for
    /// error reporting and for FX0A's repeat-until-key behavior.
    fn execute(&mut self, op: Opcode, at: u16) -> Result<(), Chip8Error> {
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => self.screen.clear(),
            (0x0, 0x0, 0xE, 0xE) => {
                if self.sp == 0 {
                    return Err(Chip8Error::StackUnderflow { pc: at });
                }
                self.sp -= 1;
                self.pc = self.stack[self.sp];
            }
            // 0NNN: native RCA 1802 call. A no-op on every modern
            // interpreter; ROMs that contain it still expect to run.
            (0x0, _, _, _) => {}

            (0x1, _, _, _) => self.pc = op.nnn(),
            (0x2, _, _, _) => {
                if self.sp == STACK_DEPTH {
                    return Err(Chip8Error::StackOverflow { pc: at });
                }
                self.stack[self.sp] = self.pc;
                self.sp += 1;
                self.pc = op.nnn();
            }

            (0x3, _, _, _) => {
                if self.v[op.x()] == op.nn() {
                    self.skip();
                }
            }
            (0x4, _, _, _) => {
                if self.v[op.x()] != op.nn() {
                    self.skip();
                }
            }
            (0x5, _, _, 0x0) => {
                if self.v[op.x()] == self.v[op.y()] {
                    self.skip();
                }
            }
            (0x9, _, _, 0x0) => {
                if self.v[op.x()] != self.v[op.y()] {
                    self.skip();
                }
            }

            (0x6, _, _, _) => self.v[op.x()] = op.nn(),
            (0x7, _, _, _) => self.v[op.x()] = self.v[op.x()].wrapping_add(op.nn()),

            (0x8, _, _, 0x0) => self.v[op.x()] = self.v[op.y()],
            (0x8, _, _, 0x1) => self.v[op.x()] |= self.v[op.y()],
            (0x8, _, _, 0x2) => self.v[op.x()] &= self.v[op.y()],
            (0x8, _, _, 0x3) => self.v[op.x()] ^= self.v[op.y()],
            (0x8, _, _, 0x4) => {
                let (sum, carry) = self.v[op.x()].overflowing_add(self.v[op.y()]);
                self.v[op.x()] = sum;
                self.v[0xF] = carry as u8;
            }
            (0x8, _, _, 0x5) => {
                let (diff, borrow) = self.v[op.x()].overflowing_sub(self.v[op.y()]);
                self.v[op.x()] = diff;
                self.v[0xF] = !borrow as u8;
            }
            (0x8, _, _, 0x6) => {
                let vy = self.v[op.y()];
                self.v[op.x()] = vy >> 1;
                self.v[0xF] = vy & 1;
            }
            (0x8, _, _, 0x7) => {
                let (diff, borrow) = self.v[op.y()].overflowing_sub(self.v[op.x()]);
                self.v[op.x()] = diff;
                self.v[0xF] = !borrow as u8;
            }
            (0x8, _, _, 0xE) => {
                let vy = self.v[op.y()];
                self.v[op.x()] = vy << 1;
                self.v[0xF] = vy >> 7;
            }

            (0xA, _, _, _) => self.i = op.nnn(),
            (0xB, _, _, _) => self.pc = (op.nnn() + u16::from(self.v[0])) & 0x0FFF,
            (0xC, _, _, _) => self.v[op.x()] = rand::random::<u8>() & op.nn(),

            (0xD, _, _, _) => {
                let from = self.i as usize;
                let to = (from + op.n() as usize).min(RAM_SIZE);
                let erased =
                    self.screen
                        .draw_sprite(self.v[op.x()], self.v[op.y()], &self.ram[from..to]);
                self.v[0xF] = erased as u8;
            }

            (0xE, _, 0x9, 0xE) => {
                if self.keypad.is_down(self.v[op.x()]) {
                    self.skip();
                }
            }
            (0xE, _, 0xA, 0x1) => {
                if !self.keypad.is_down(self.v[op.x()]) {
                    self.skip();
                }
            }

            (0xF, _, 0x0, 0x7) => self.v[op.x()] = self.delay,
            (0xF, _, 0x0, 0xA) => match self.keypad.take_released() {
                Some(key) => self.v[op.x()] = key,
                None => {
                    // Repeat this instruction until a release is latched.
                    self.keypad.await_release();
                    self.pc = at;
                }
            },
            (0xF, _, 0x1, 0x5) => self.delay = self.v[op.x()],
            (0xF, _, 0x1, 0x8) => self.sound = self.v[op.x()],
            (0xF, _, 0x1, 0xE) => {
                self.i = (self.i + u16::from(self.v[op.x()])) & 0x0FFF;
            }
            (0xF, _, 0x2, 0x9) => {
                self.i = u16::from(self.v[op.x()] & 0xF) * FONT_HEIGHT;
            }
            (0xF, _, 0x3, 0x3) => {
                let vx = self.v[op.x()];
                let i = self.i as usize;
                self.ram[i & (RAM_SIZE - 1)] = vx / 100;
                self.ram[(i + 1) & (RAM_SIZE - 1)] = vx / 10 % 10;
                self.ram[(i + 2) & (RAM_SIZE - 1)] = vx % 10;
            }
            (0xF, _, 0x5, 0x5) => {
                for r in 0..=op.x() {
                    self.ram[self.i as usize] = self.v[r];
                    self.i = (self.i + 1) & 0x0FFF;
                }
            }
            (0xF, _, 0x6, 0x5) => {
                for r in 0..=op.x() {
                    self.v[r] = self.ram[self.i as usize];
                    self.i = (self.i + 1) & 0x0FFF;
                }
            }

            _ => {
                return Err(Chip8Error::UnknownOpcode {
                    opcode: op.0,
                    pc: at,
                });
            }
        }

        Ok(())
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Executes a single instruction word against the machine, bypassing RAM.
    fn exec(vm: &mut Chip8, word: u16) {
        let at = vm.pc;
        vm.execute(Opcode(word), at).unwrap();
    }

    fn exec_err(vm: &mut Chip8, word: u16) -> Chip8Error {
        let at = vm.pc;
        vm.execute(Opcode(word), at).unwrap_err()
    }

    // ── flow control ──────────────────────────────────────────────────────

    #[test]
    fn jump_sets_pc() {
        let mut vm = Chip8::new();
        exec(&mut vm, 0x1F20);
        assert_eq!(vm.pc, 0xF20);
    }

    #[test]
    fn call_pushes_return_address() {
        let mut vm = Chip8::new();
        let return_to = vm.pc;

        exec(&mut vm, 0x2400);
        assert_eq!(vm.pc, 0x400);
        assert_eq!(vm.sp, 1);
        assert_eq!(vm.stack[0], return_to);

        exec(&mut vm, 0x00EE);
        assert_eq!(vm.pc, return_to);
        assert_eq!(vm.sp, 0);
    }

    #[test]
    fn call_overflow_is_an_error() {
        let mut vm = Chip8::new();
        for _ in 0..16 {
            exec(&mut vm, 0x2300);
        }
        assert_eq!(
            exec_err(&mut vm, 0x2300),
            Chip8Error::StackOverflow { pc: 0x300 }
        );
    }

    #[test]
    fn return_underflow_is_an_error() {
        let mut vm = Chip8::new();
        assert_eq!(
            exec_err(&mut vm, 0x00EE),
            Chip8Error::StackUnderflow { pc: ROM_BASE as u16 }
        );
    }

    #[test]
    fn native_call_is_ignored() {
        let mut vm = Chip8::new();
        let pc = vm.pc;
        exec(&mut vm, 0x0230);
        assert_eq!(vm.pc, pc);
    }

    #[test]
    fn jump_with_offset_adds_v0() {
        let mut vm = Chip8::new();
        vm.v[0] = 0x10;
        exec(&mut vm, 0xB200);
        assert_eq!(vm.pc, 0x210);
    }

    // ── skips ─────────────────────────────────────────────────────────────

    #[test]
    fn skip_if_equal_immediate() {
        let mut vm = Chip8::new();
        vm.v[0] = 0xEF;
        let pc = vm.pc;

        exec(&mut vm, 0x30EF);
        assert_eq!(vm.pc, pc + 2);

        exec(&mut vm, 0x30AA);
        assert_eq!(vm.pc, pc + 2);
    }

    #[test]
    fn skip_if_not_equal_immediate() {
        let mut vm = Chip8::new();
        vm.v[1] = 0x01;
        let pc = vm.pc;

        exec(&mut vm, 0x4101);
        assert_eq!(vm.pc, pc);

        exec(&mut vm, 0x41FF);
        assert_eq!(vm.pc, pc + 2);
    }

    #[test]
    fn skip_on_register_compare() {
        let mut vm = Chip8::new();
        vm.v[2] = 7;
        vm.v[3] = 7;
        let pc = vm.pc;

        exec(&mut vm, 0x5230);
        assert_eq!(vm.pc, pc + 2);

        vm.v[3] = 8;
        exec(&mut vm, 0x9230);
        assert_eq!(vm.pc, pc + 4);
    }

    // ── registers & arithmetic ────────────────────────────────────────────

    #[test]
    fn load_and_add_immediate() {
        let mut vm = Chip8::new();
        exec(&mut vm, 0x6A42);
        assert_eq!(vm.v[0xA], 0x42);

        exec(&mut vm, 0x7A10);
        assert_eq!(vm.v[0xA], 0x52);
    }

    #[test]
    fn add_immediate_wraps_without_flag() {
        let mut vm = Chip8::new();
        vm.v[0] = 0xFF;
        vm.v[0xF] = 7;

        exec(&mut vm, 0x7002);
        assert_eq!(vm.v[0], 0x01);
        assert_eq!(vm.v[0xF], 7); // untouched
    }

    #[test]
    fn bitwise_ops() {
        let mut vm = Chip8::new();
        vm.v[0] = 0b1100;
        vm.v[1] = 0b1010;

        exec(&mut vm, 0x8011);
        assert_eq!(vm.v[0], 0b1110);

        vm.v[0] = 0b1100;
        exec(&mut vm, 0x8012);
        assert_eq!(vm.v[0], 0b1000);

        vm.v[0] = 0b1100;
        exec(&mut vm, 0x8013);
        assert_eq!(vm.v[0], 0b0110);
    }

    #[test]
    fn add_registers_sets_carry() {
        let mut vm = Chip8::new();
        vm.v[0] = 200;
        vm.v[1] = 100;

        exec(&mut vm, 0x8014);
        assert_eq!(vm.v[0], 44);
        assert_eq!(vm.v[0xF], 1);

        vm.v[0] = 1;
        exec(&mut vm, 0x8014);
        assert_eq!(vm.v[0], 101);
        assert_eq!(vm.v[0xF], 0);
    }

    #[test]
    fn flag_register_as_destination_keeps_the_flag() {
        // 8F14: VF = VF + V1; the carry overwrites the sum.
        let mut vm = Chip8::new();
        vm.v[0xF] = 200;
        vm.v[1] = 100;

        exec(&mut vm, 0x8F14);
        assert_eq!(vm.v[0xF], 1);
    }

    #[test]
    fn subtract_sets_not_borrow() {
        let mut vm = Chip8::new();
        vm.v[0] = 10;
        vm.v[1] = 3;

        exec(&mut vm, 0x8015);
        assert_eq!(vm.v[0], 7);
        assert_eq!(vm.v[0xF], 1);

        vm.v[0] = 3;
        vm.v[1] = 10;
        exec(&mut vm, 0x8015);
        assert_eq!(vm.v[0], 249);
        assert_eq!(vm.v[0xF], 0);
    }

    #[test]
    fn reverse_subtract() {
        let mut vm = Chip8::new();
        vm.v[0] = 3;
        vm.v[1] = 10;

        exec(&mut vm, 0x8017);
        assert_eq!(vm.v[0], 7);
        assert_eq!(vm.v[0xF], 1);
    }

    #[test]
    fn shift_right_copies_vy_first() {
        let mut vm = Chip8::new();
        vm.v[1] = 0b0000_0101;
        vm.v[0] = 0xFF; // must be ignored

        exec(&mut vm, 0x8016);
        assert_eq!(vm.v[0], 0b0000_0010);
        assert_eq!(vm.v[0xF], 1);
    }

    #[test]
    fn shift_left_copies_vy_first() {
        let mut vm = Chip8::new();
        vm.v[1] = 0b1100_0000;
        vm.v[0] = 0;

        exec(&mut vm, 0x801E);
        assert_eq!(vm.v[0], 0b1000_0000);
        assert_eq!(vm.v[0xF], 1);
    }

    #[test]
    fn random_respects_mask() {
        let mut vm = Chip8::new();
        for _ in 0..64 {
            exec(&mut vm, 0xC00F);
            assert_eq!(vm.v[0] & !0x0F, 0);
        }

        exec(&mut vm, 0xC300);
        assert_eq!(vm.v[3], 0);
    }

    // ── index register & memory ───────────────────────────────────────────

    #[test]
    fn load_index() {
        let mut vm = Chip8::new();
        exec(&mut vm, 0xA7A5);
        assert_eq!(vm.i, 0x7A5);
    }

    #[test]
    fn add_to_index_wraps_in_address_space() {
        let mut vm = Chip8::new();
        vm.i = 0xFFE;
        vm.v[0] = 4;
        exec(&mut vm, 0xF01E);
        assert_eq!(vm.i, 0x002);
    }

    #[test]
    fn font_sprites_live_at_the_bottom_of_ram() {
        let vm = Chip8::new();
        assert_eq!(&vm.ram[0..5], &[0xF0, 0x90, 0x90, 0x90, 0xF0]);
        assert_eq!(&vm.ram[75..80], &[0xF0, 0x80, 0xF0, 0x80, 0x80]);
    }

    #[test]
    fn font_address_uses_low_nibble() {
        let mut vm = Chip8::new();
        vm.v[4] = 0xA7; // digit 7
        exec(&mut vm, 0xF429);
        assert_eq!(vm.i, 7 * 5);
    }

    #[test]
    fn bcd_of_234() {
        let mut vm = Chip8::new();
        vm.v[6] = 234;
        vm.i = 0x300;

        exec(&mut vm, 0xF633);
        assert_eq!(&vm.ram[0x300..0x303], &[2, 3, 4]);
    }

    #[test]
    fn store_registers_advances_index() {
        let mut vm = Chip8::new();
        vm.v[0] = 0xDE;
        vm.v[1] = 0xAD;
        vm.v[2] = 0x99;
        vm.i = 0x400;

        exec(&mut vm, 0xF255);
        assert_eq!(&vm.ram[0x400..0x403], &[0xDE, 0xAD, 0x99]);
        assert_eq!(vm.i, 0x403);
    }

    #[test]
    fn load_registers_advances_index() {
        let mut vm = Chip8::new();
        vm.ram[0x400..0x403].copy_from_slice(&[1, 2, 3]);
        vm.i = 0x400;

        exec(&mut vm, 0xF165);
        assert_eq!(vm.v[0], 1);
        assert_eq!(vm.v[1], 2);
        assert_eq!(vm.v[2], 0); // not covered by F165
        assert_eq!(vm.i, 0x402);
    }

    // ── timers ────────────────────────────────────────────────────────────

    #[test]
    fn timers_load_read_and_tick() {
        let mut vm = Chip8::new();
        vm.v[0] = 3;
        exec(&mut vm, 0xF015);
        exec(&mut vm, 0xF018);

        vm.tick_timers();
        exec(&mut vm, 0xF107);
        assert_eq!(vm.v[1], 2);
        assert_eq!(vm.sound_timer(), 2);

        for _ in 0..10 {
            vm.tick_timers();
        }
        assert_eq!(vm.delay_timer(), 0);
        assert_eq!(vm.sound_timer(), 0);
    }

    // ── keypad ────────────────────────────────────────────────────────────

    #[test]
    fn skip_if_key_down() {
        let mut vm = Chip8::new();
        vm.v[0] = 0xB;
        let pc = vm.pc;

        exec(&mut vm, 0xE09E);
        assert_eq!(vm.pc, pc);

        vm.keypad_mut().press(0xB);
        exec(&mut vm, 0xE09E);
        assert_eq!(vm.pc, pc + 2);

        exec(&mut vm, 0xE0A1);
        assert_eq!(vm.pc, pc + 2);
    }

    #[test]
    fn wait_for_key_repeats_until_release() {
        let mut vm = Chip8::new();
        vm.load_rom(&[0xF5, 0x0A]).unwrap();

        vm.step().unwrap();
        assert_eq!(vm.pc, ROM_BASE as u16); // parked on the same instruction

        vm.keypad_mut().press(0xC);
        vm.step().unwrap();
        assert_eq!(vm.pc, ROM_BASE as u16); // press alone is not enough

        vm.keypad_mut().release(0xC);
        vm.step().unwrap();
        assert_eq!(vm.v[5], 0xC);
        assert_eq!(vm.pc, ROM_BASE as u16 + 2);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draw_reports_collision_in_vf() {
        let mut vm = Chip8::new();
        vm.i = 0; // digit 0 sprite
        vm.v[0] = 4;
        vm.v[1] = 2;

        exec(&mut vm, 0xD015);
        assert_eq!(vm.v[0xF], 0);
        assert!(vm.screen().pixel(4, 2));

        exec(&mut vm, 0xD015);
        assert_eq!(vm.v[0xF], 1);
        assert!(!vm.screen().pixel(4, 2));
    }

    #[test]
    fn clear_screen_opcode() {
        let mut vm = Chip8::new();
        vm.i = 0;
        exec(&mut vm, 0xD005);

        exec(&mut vm, 0x00E0);
        assert!(!vm.screen().pixel(0, 0));
    }

    // ── fetch/step & ROM loading ──────────────────────────────────────────

    #[test]
    fn fetch_is_big_endian_and_advances_pc() {
        let mut vm = Chip8::new();
        vm.ram[0x200] = 0x1B;
        vm.ram[0x201] = 0xE4;

        assert_eq!(vm.fetch(), Opcode(0x1BE4));
        assert_eq!(vm.pc, 0x202);
    }

    #[test]
    fn pc_wraps_in_address_space() {
        let mut vm = Chip8::new();
        vm.pc = 0xFFE;
        vm.fetch();
        assert_eq!(vm.pc, 0x000);
    }

    #[test]
    fn unknown_opcode_is_an_error() {
        let mut vm = Chip8::new();
        vm.load_rom(&[0xF0, 0xFF]).unwrap();

        assert_eq!(
            vm.step(),
            Err(Chip8Error::UnknownOpcode {
                opcode: 0xF0FF,
                pc: ROM_BASE as u16,
            })
        );
    }

    #[test]
    fn oversized_rom_is_rejected() {
        let mut vm = Chip8::new();
        let rom = vec![0; RAM_SIZE - ROM_BASE + 1];
        assert_eq!(
            vm.load_rom(&rom),
            Err(Chip8Error::RomTooLarge {
                len: rom.len(),
                max: RAM_SIZE - ROM_BASE,
            })
        );
    }

    #[test]
    fn load_rom_resets_prior_state() {
        let mut vm = Chip8::new();
        vm.v[3] = 9;
        vm.i = 0x123;
        vm.load_rom(&[0x00, 0xE0]).unwrap();

        assert_eq!(vm.v[3], 0);
        assert_eq!(vm.i, 0);
        assert_eq!(vm.pc, ROM_BASE as u16);
        assert_eq!(vm.ram[ROM_BASE], 0x00);
        assert_eq!(vm.ram[ROM_BASE + 1], 0xE0);
    }

    #[test]
    fn runs_a_sprite_drawing_program() {
        // CLS; I = 0 (digit 0 sprite); V0 = 0; V1 = 0; DRW V0,V1,5; spin.
        let rom = [
            0x00, 0xE0, //
            0xA0, 0x00, //
            0x60, 0x00, //
            0x61, 0x00, //
            0xD0, 0x15, //
            0x12, 0x0A, //
        ];

        let mut vm = Chip8::new();
        vm.load_rom(&rom).unwrap();
        for _ in 0..8 {
            vm.step().unwrap();
        }

        // Digit 0: 0xF0 / 0x90 / 0x90 / 0x90 / 0xF0.
        for x in 0..4 {
            assert!(vm.screen().pixel(x, 0));
            assert!(vm.screen().pixel(x, 4));
        }
        for y in 1..4 {
            assert!(vm.screen().pixel(0, y));
            assert!(!vm.screen().pixel(1, y));
            assert!(!vm.screen().pixel(2, y));
            assert!(vm.screen().pixel(3, y));
        }
        assert!(!vm.screen().pixel(4, 0));

        // The spin jump keeps pc parked on itself.
        assert_eq!(vm.pc, ROM_BASE as u16 + 0x0A);
    }
}
