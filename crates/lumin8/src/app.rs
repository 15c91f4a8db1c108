use std::time::Duration;

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use lumin8_core::{Chip8, Screen};
use lumin8_engine::core::{App, AppControl, FrameCtx};
use lumin8_engine::render::grid::{GridRenderer, Projection, TileInstance};
use lumin8_engine::time::FixedStep;

use crate::keymap;

/// Ties the machine to the engine: keyboard in, instanced tiles out.
///
/// Instruction execution runs at a fixed budget per frame; the 60 Hz timers
/// run off a step accumulator so their rate is independent of the display's
/// refresh rate.
pub struct EmulatorApp {
    vm: Chip8,
    grid: GridRenderer,
    timer_step: FixedStep,
    cycles_per_frame: u32,
    paused: bool,
    instances: Vec<TileInstance>,
}

impl EmulatorApp {
    pub fn new(vm: Chip8, cycles_per_frame: u32, projection: Projection) -> Self {
        Self {
            vm,
            grid: GridRenderer::with_projection(projection),
            timer_step: FixedStep::new(60),
            cycles_per_frame,
            paused: false,
            instances: Vec::with_capacity(Screen::WIDTH * Screen::HEIGHT),
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> AppControl {
        let PhysicalKey::Code(code) = event.physical_key else {
            return AppControl::Continue;
        };
        let pressed = event.state == ElementState::Pressed;

        if let Some(key) = keymap::to_keypad(code) {
            if pressed {
                self.vm.keypad_mut().press(key);
            } else {
                self.vm.keypad_mut().release(key);
            }
            return AppControl::Continue;
        }

        match code {
            KeyCode::Escape if pressed => return AppControl::Exit,
            KeyCode::KeyP if pressed && !event.repeat => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "paused" } else { "resumed" });
            }
            _ => {}
        }

        AppControl::Continue
    }

    /// Runs this frame's share of machine work.
    fn run_machine(&mut self, dt: Duration) {
        if self.paused {
            return;
        }

        for _ in 0..self.timer_step.advance(dt) {
            self.vm.tick_timers();
        }

        for _ in 0..self.cycles_per_frame {
            if let Err(e) = self.vm.step() {
                log::error!("machine halted: {e}");
                self.paused = true;
                break;
            }
        }
    }

    /// Rebuilds the tile list from the framebuffer.
    ///
    /// Framebuffer rows count down from the top scanline while world Y counts
    /// up from the bottom, so row 0 becomes the top row of tiles.
    fn build_instances(&mut self) {
        self.instances.clear();
        let screen = self.vm.screen();

        for y in 0..Screen::HEIGHT {
            let world_y = (Screen::HEIGHT - 1 - y) as f32;
            for x in 0..Screen::WIDTH {
                self.instances
                    .push(TileInstance::new([x as f32, world_y], screen.pixel(x, y)));
            }
        }
    }
}

impl App for EmulatorApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event),
            WindowEvent::Focused(false) => {
                // Release events are lost while unfocused; drop held keys.
                self.vm.keypad_mut().reset();
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.run_machine(Duration::from_secs_f32(ctx.time.dt));
        self.build_instances();

        let grid = &mut self.grid;
        let instances = &self.instances;
        ctx.render(wgpu::Color::BLACK, |rctx, target| {
            grid.render(rctx, target, instances);
        })
    }
}
